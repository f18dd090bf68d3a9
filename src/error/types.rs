use thiserror::Error;

/// Unified result type for the tilemark crate.
pub type Result<T> = std::result::Result<T, WatermarkError>;

/// Errors surfaced by the watermark engine.
///
/// A non-positive stride is the only poisoned configuration: the grid could
/// never advance past the first tile, so it is rejected before any layout
/// pass runs. Everything else (zero-sized pages, huge tile counts) is
/// absorbed by the layout arithmetic instead of being surfaced as an error.
#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("invalid config: {axis} stride must be positive, got {stride}")]
    InvalidConfig { axis: &'static str, stride: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
