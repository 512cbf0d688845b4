//! Render-and-query test harness for UI components
//!
//! Each [`render`] mounts a component into its own disposable virtual
//! document and hands back a [`Screen`] for querying it. Nothing is shared
//! between renders, so tests using the harness can run in parallel.
//!
//! ```
//! use task_manager::testing::{ByRole, render};
//! use task_manager::ui::App;
//!
//! let screen = render(&App::default());
//! screen.get_by_text("Task Manager").unwrap();
//! screen.get_by_role(ByRole::new("button").name("Add Task")).unwrap();
//! ```

mod failure;
mod matcher;
mod screen;

pub use failure::{AssertionFailure, DEBUG_PRINT_LIMIT, FailureReason};
pub use matcher::{TextMatch, normalize};
pub use screen::{ByRole, Screen};

use tracing::trace;

use crate::ui::{Component, Document};

/// Mount `component` into a fresh virtual document
pub fn render<C: Component + ?Sized>(component: &C) -> Screen {
    let document = Document::mount(&component.render());
    trace!(nodes = document.len(), "rendered component");
    Screen::new(document)
}

/// Render `component` and require exactly one element whose own text
/// matches `pattern`
pub fn assert_text_present<C: Component + ?Sized>(
    component: &C,
    pattern: impl Into<TextMatch>,
) -> Result<(), AssertionFailure> {
    render(component).get_by_text(pattern).map(|_| ())
}

/// Render `component` and require exactly one accessible element with
/// `role` whose accessible name matches `accessible_name`
pub fn assert_control_present<C: Component + ?Sized>(
    component: &C,
    role: &str,
    accessible_name: impl Into<TextMatch>,
) -> Result<(), AssertionFailure> {
    render(component)
        .get_by_role(ByRole::new(role).name(accessible_name))
        .map(|_| ())
}
