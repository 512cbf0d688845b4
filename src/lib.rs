// src/lib.rs

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod tasks;
pub mod testing;
pub mod ui;

pub use config::Config;
pub use error::{Result, TaskError};
pub use state::AppState;
