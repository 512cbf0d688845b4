// src/ui/page.rs
// Full HTML page around a rendered root component

use super::components::{APP_TITLE, Component};

const STYLESHEET: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6f8;color:#1f2328}\
.app{max-width:40rem;margin:2rem auto;padding:0 1rem}\
.app-header h1{font-size:1.8rem;margin:0 0 1rem}\
.task-form{display:grid;gap:.5rem;margin-bottom:1.5rem}\
.task-form input,.task-form textarea{padding:.5rem;font:inherit}\
.task-form button{justify-self:start;padding:.5rem 1rem}\
.error{color:#b42318}\
.task-list{list-style:none;padding:0}\
.task{display:flex;flex-wrap:wrap;align-items:center;gap:.5rem;padding:.5rem 0;border-bottom:1px solid #d0d7de}\
.task-title{flex:1}\
.task.completed .task-title{text-decoration:line-through;color:#656d76}\
.task-description{flex-basis:100%;margin:0;color:#656d76}\
.task-action{margin:0}\
.empty{color:#656d76}";

/// Render `component` as a complete HTML document
pub fn render_page<C: Component + ?Sized>(component: &C) -> String {
    let body = component.render().to_html();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{APP_TITLE}</title>\n\
         <style>{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <div id=\"root\">{body}</div>\n\
         </body>\n\
         </html>\n"
    )
}
