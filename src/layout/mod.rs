//! Layout module orchestrator.
//!
//! Downstream code imports the tiling solver from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{LayoutHints, TileSheet, compute_cols, compute_rows, solve};
