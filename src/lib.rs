//! Tiled text watermark layout engine.
//!
//! The crate solves a grid of absolutely positioned watermark tiles for a
//! page's current content box and re-solves it on throttled resize signals.
//! The viewport is an injected capability and the renderer writes plain
//! HTML fragments, so the whole pipeline runs headless. Modules follow the
//! orchestrator pattern: implementation details live in private `core`
//! modules and are re-exported here.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod overlay;
pub mod render;
pub mod throttle;
pub mod viewport;

pub use config::WatermarkConfig;
pub use engine::{EngineConfig, WatermarkEngine};
pub use error::{Result, WatermarkError};
pub use geometry::{PageExtent, TilePosition};
pub use layout::{LayoutHints, TileSheet, compute_cols, compute_rows, solve};
pub use logging::{
    LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult, MemorySink,
};
pub use metrics::{EngineMetrics, MetricSnapshot};
pub use overlay::OverlayState;
pub use render::{HtmlRenderer, RendererSettings};
pub use throttle::Throttle;
pub use viewport::{StaticViewport, ViewportProvider};
