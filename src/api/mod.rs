// src/api/mod.rs
// HTTP layer: JSON task API, health check and server-rendered pages

pub mod error;
pub mod health;
pub mod pages;
pub mod router;
pub mod tasks;

pub use error::{ApiError, ApiResult};
pub use router::create_router;
