// src/ui/components.rs
// Task manager UI components

use super::node::{Element, Node, el};
use crate::tasks::Task;

pub const APP_TITLE: &str = "Task Manager";
pub const ADD_TASK_LABEL: &str = "Add Task";
pub const EMPTY_MESSAGE: &str = "No tasks yet.";

/// Anything that renders to a node tree
pub trait Component {
    fn render(&self) -> Node;
}

impl<F> Component for F
where
    F: Fn() -> Node,
{
    fn render(&self) -> Node {
        self()
    }
}

/// Root component: title, add-task form and the task list
#[derive(Debug, Clone, Default)]
pub struct App {
    pub tasks: Vec<Task>,
    pub error: Option<String>,
}

impl App {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, error: None }
    }

    /// Show `message` in an alert above the form
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

impl Component for App {
    fn render(&self) -> Node {
        let alert = self
            .error
            .as_ref()
            .map(|message| el("p").attr("role", "alert").attr("class", "error").text(message.as_str()));

        el("div")
            .attr("class", "app")
            .child(Header.render())
            .child(
                el("main")
                    .children(alert)
                    .child(TaskForm.render())
                    .child(TaskList { tasks: &self.tasks }.render()),
            )
            .into()
    }
}

pub struct Header;

impl Component for Header {
    fn render(&self) -> Node {
        el("header")
            .attr("class", "app-header")
            .child(el("h1").text(APP_TITLE))
            .into()
    }
}

/// Form posting a new task to `/tasks`
pub struct TaskForm;

impl Component for TaskForm {
    fn render(&self) -> Node {
        el("form")
            .attr("class", "task-form")
            .attr("aria-label", "Add task")
            .attr("method", "post")
            .attr("action", "/tasks")
            .child(el("label").attr("for", "task-title").text("Title"))
            .child(
                el("input")
                    .attr("id", "task-title")
                    .attr("name", "title")
                    .attr("type", "text")
                    .attr("placeholder", "What needs doing?")
                    .flag("required"),
            )
            .child(el("label").attr("for", "task-description").text("Description"))
            .child(
                el("textarea")
                    .attr("id", "task-description")
                    .attr("name", "description")
                    .attr("rows", "2"),
            )
            .child(el("button").attr("type", "submit").text(ADD_TASK_LABEL))
            .into()
    }
}

pub struct TaskList<'a> {
    pub tasks: &'a [Task],
}

impl Component for TaskList<'_> {
    fn render(&self) -> Node {
        if self.tasks.is_empty() {
            return el("p").attr("class", "empty").text(EMPTY_MESSAGE).into();
        }

        el("ul")
            .attr("class", "task-list")
            .attr("aria-label", "Tasks")
            .children(self.tasks.iter().map(|task| TaskItem { task }.render()))
            .into()
    }
}

pub struct TaskItem<'a> {
    pub task: &'a Task,
}

impl Component for TaskItem<'_> {
    fn render(&self) -> Node {
        let task = self.task;
        let class = if task.completed { "task completed" } else { "task" };
        let (toggle_text, toggle_name) = if task.completed {
            ("Undo", format!("Mark {} incomplete", task.title))
        } else {
            ("Complete", format!("Mark {} complete", task.title))
        };

        let description = task
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| el("p").attr("class", "task-description").text(d));

        el("li")
            .attr("class", class)
            .child(el("span").attr("class", "task-title").text(task.title.as_str()))
            .children(description)
            .child(action_form(task.id, "toggle", toggle_text, &toggle_name))
            .child(action_form(
                task.id,
                "delete",
                "Delete",
                &format!("Delete {}", task.title),
            ))
            .into()
    }
}

fn action_form(task_id: i64, action: &str, label: &str, name: &str) -> Element {
    el("form")
        .attr("class", "task-action")
        .attr("method", "post")
        .attr("action", format!("/tasks/{task_id}/{action}"))
        .child(
            el("button")
                .attr("type", "submit")
                .attr("aria-label", name)
                .text(label),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        let now = Utc::now();
        Task {
            id,
            title: title.to_string(),
            description: Some(format!("about {title}")),
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_app_markup() {
        let html = App::default().render().to_html();
        assert!(html.contains("<h1>Task Manager</h1>"));
        assert!(html.contains(r#"<button type="submit">Add Task</button>"#));
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_task_items() {
        let app = App::new(vec![task(1, "Milk", false), task(2, "Bread", true)]);
        let html = app.render().to_html();
        assert!(html.contains(r#"<li class="task">"#));
        assert!(html.contains(r#"<li class="task completed">"#));
        assert!(html.contains(r#"action="/tasks/1/toggle""#));
        assert!(html.contains(r#"aria-label="Mark Milk complete""#));
        assert!(html.contains(r#"aria-label="Mark Bread incomplete""#));
        assert!(html.contains(r#"aria-label="Delete Bread""#));
        assert!(html.contains("about Milk"));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_error_alert() {
        let html = App::default().with_error("Title is required").render().to_html();
        assert!(html.contains(r#"<p role="alert" class="error">Title is required</p>"#));
    }

    #[test]
    fn test_task_titles_are_escaped() {
        let app = App::new(vec![task(3, "<b>bold</b>", false)]);
        let html = app.render().to_html();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_closure_components() {
        let component = || -> Node { el("p").text("hi").into() };
        assert_eq!(component.render().to_html(), "<p>hi</p>");
    }
}
