// src/ui/mod.rs
// Server-rendered UI: node builders, the virtual document and components

pub mod aria;
pub mod components;
pub mod dom;
pub mod node;
pub mod page;

pub use components::{App, Component};
pub use dom::{Document, ElementRef, NodeId};
pub use node::{Element, Node, el, text};
pub use page::render_page;
