use crate::config::WatermarkConfig;
use crate::geometry::{PageExtent, TilePosition};

/// Row/column counts carried between layout passes.
///
/// Seeded from the config's `cols`/`rows` hints (zero means auto) and
/// written back from the solved sheet after every pass, so the next pass's
/// tolerance check runs against the previous layout instead of the original
/// user hint. The config itself is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutHints {
    pub cols: usize,
    pub rows: usize,
}

impl LayoutHints {
    pub fn from_config(cfg: &WatermarkConfig) -> Self {
        Self {
            cols: cfg.cols,
            rows: cfg.rows,
        }
    }
}

/// Solved tile grid covering one page extent.
///
/// Tiles are ordered row-major: all of row 0 left to right, then row 1, and
/// so on. The ordering keeps per-tile identifiers stable across passes.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSheet {
    pub cols: usize,
    pub rows: usize,
    pub tiles: Vec<TilePosition>,
}

impl TileSheet {
    /// Counts of this sheet, fed back as hints for the next pass.
    pub fn hints(&self) -> LayoutHints {
        LayoutHints {
            cols: self.cols,
            rows: self.rows,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

fn between(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Number of columns needed to span the page width from the anchor onward.
///
/// A non-zero hint is honored when the grid it implies already reaches the
/// right page edge within one column stride of tolerance. Otherwise the
/// count is recomputed so the last column's right edge reaches at least the
/// page edge; over-covering is deliberate, a trailing gap looks worse than
/// overflow the container clips.
pub fn compute_cols(extent: PageExtent, cfg: &WatermarkConfig, hint: usize) -> usize {
    if hint > 0 {
        let used = cfg.width * hint as f64 + cfg.x_space * (hint as f64 - 1.0);
        let remaining = extent.width - cfg.x - used;
        if between(remaining, 0.0, cfg.x_stride()) {
            return hint;
        }
    }

    let solved = ((extent.width - cfg.x + cfg.x_space) / cfg.x_stride()).floor() + 1.0;
    solved.max(0.0) as usize
}

/// Number of rows needed to span the page height.
///
/// Mirrors the column rule except that the anchor offset is counted on both
/// the top and bottom margins, and the recompute omits the trailing `+1`
/// that columns apply. The asymmetry is preserved verbatim from the
/// behavior this crate reproduces.
pub fn compute_rows(extent: PageExtent, cfg: &WatermarkConfig, hint: usize) -> usize {
    if hint > 0 {
        let used = cfg.y * 2.0 + cfg.height * hint as f64 + cfg.y_space * (hint as f64 - 1.0);
        let remaining = extent.height - used;
        if between(remaining, 0.0, cfg.y_stride()) {
            return hint;
        }
    }

    let solved = ((extent.height - cfg.y * 2.0 + cfg.y_space) / cfg.y_stride()).floor();
    solved.max(0.0) as usize
}

/// Solve the full tile grid for one page extent.
///
/// Pure function of its inputs: identical arguments always yield an
/// identical sheet. Column and row counts resolve independently; tile
/// positions follow the closed form
/// `x = anchor_x + col * x_stride`, `y = anchor_y + row * y_stride`.
pub fn solve(extent: PageExtent, cfg: &WatermarkConfig, hints: LayoutHints) -> TileSheet {
    let cols = compute_cols(extent, cfg, hints.cols);
    let rows = compute_rows(extent, cfg, hints.rows);

    let mut tiles = Vec::with_capacity(cols.saturating_mul(rows));
    for row in 0..rows {
        let y = cfg.y + cfg.y_stride() * row as f64;
        for col in 0..cols {
            let x = cfg.x + cfg.x_stride() * col as f64;
            tiles.push(TilePosition::new(row, col, x, y));
        }
    }

    TileSheet { cols, rows, tiles }
}
