// src/tasks/mod.rs
// Task records and their SQLite store

pub mod store;
pub mod types;

pub use store::TaskStore;
pub use types::{CreateTaskRequest, NewTask, Task, TaskUpdate, TITLE_REQUIRED};
