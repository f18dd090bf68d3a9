/// Measured content box the tiling must cover, in CSS pixels.
///
/// Sampled fresh from the viewport provider on every layout pass; negative
/// measurements are clamped to zero at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageExtent {
    pub width: f64,
    pub height: f64,
}

impl PageExtent {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Combine scroll and client measurements the way the DOM reports them:
    /// the larger value wins on each axis.
    pub fn from_measurements(scroll: (f64, f64), client: (f64, f64)) -> Self {
        Self::new(scroll.0.max(client.0), scroll.1.max(client.1))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// One watermark tile anchored within the page grid.
///
/// `x`/`y` is the tile's top-left corner in page coordinates; `row`/`col`
/// index the grid cell and feed the stable per-tile element id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePosition {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
}

impl TilePosition {
    pub const fn new(row: usize, col: usize, x: f64, y: f64) -> Self {
        Self { row, col, x, y }
    }
}
