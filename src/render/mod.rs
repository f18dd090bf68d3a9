//! Render module orchestrator; the HTML renderer lives in the private
//! `core` module.

mod core;

pub use core::{HtmlRenderer, RendererSettings};
