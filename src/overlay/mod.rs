//! Overlay module orchestrator; change tracking lives in the private `core`
//! module.

mod core;

pub use core::OverlayState;
