//! Error module orchestrator; the error types live in the private `types`
//! module and are re-exported here.

mod types;

pub use types::{Result, WatermarkError};
