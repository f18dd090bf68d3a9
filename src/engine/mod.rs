use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::json;

use crate::config::WatermarkConfig;
use crate::error::Result;
use crate::geometry::PageExtent;
use crate::layout::{self, LayoutHints, TileSheet};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::EngineMetrics;
use crate::overlay::OverlayState;
use crate::render::HtmlRenderer;
use crate::throttle::Throttle;
use crate::viewport::ViewportProvider;

/// Configuration knobs for the engine outside the watermark itself.
#[derive(Clone)]
pub struct EngineConfig {
    /// Cooldown between resize-triggered layout passes. Signals arriving
    /// during the cooldown are dropped.
    pub throttle_interval: Duration,
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Metrics accumulator used for periodic snapshots.
    pub metrics: Option<Arc<Mutex<EngineMetrics>>>,
    /// Interval between metrics snapshot emissions. Zero disables snapshots.
    pub metrics_interval: Duration,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            throttle_interval: Duration::from_millis(200),
            logger: None,
            metrics: None,
            metrics_interval: Duration::from_secs(5),
            metrics_target: "tilemark::engine.metrics".to_string(),
        }
    }
}

impl EngineConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EngineMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EngineMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Watermark tiling engine.
///
/// Owns the watermark config, the solved sheet, and the overlay change
/// tracker. Layout runs synchronously: construction performs the first pass,
/// resize signals arm a throttled relayout, and [`WatermarkEngine::pump`]
/// executes it once the cooldown expires. The viewport is sampled at
/// execution time, so a pass always reflects the last geometry observed
/// after the cooldown, never an intermediate size.
pub struct WatermarkEngine<P: ViewportProvider> {
    watermark: WatermarkConfig,
    provider: P,
    hints: LayoutHints,
    extent: PageExtent,
    sheet: TileSheet,
    overlay: OverlayState,
    throttle: Throttle,
    config: EngineConfig,
    start_instant: Instant,
    last_metrics_emit: Option<Instant>,
}

impl<P: ViewportProvider> WatermarkEngine<P> {
    pub fn new(watermark: WatermarkConfig, provider: P) -> Result<Self> {
        Self::with_config(watermark, provider, EngineConfig::default())
    }

    pub fn with_config(
        watermark: WatermarkConfig,
        provider: P,
        config: EngineConfig,
    ) -> Result<Self> {
        watermark.validate()?;

        let extent = provider.extent();
        let sheet = layout::solve(extent, &watermark, LayoutHints::from_config(&watermark));
        let hints = sheet.hints();

        let mut engine = Self {
            watermark,
            provider,
            hints,
            extent,
            sheet,
            overlay: OverlayState::new(),
            throttle: Throttle::new(),
            config,
            start_instant: Instant::now(),
            last_metrics_emit: None,
        };

        engine.record_layout_metric();
        engine.log_engine_event(
            LogLevel::Info,
            "engine_started",
            [
                json_kv("cols", json!(engine.sheet.cols)),
                json_kv("rows", json!(engine.sheet.rows)),
                json_kv("tiles", json!(engine.sheet.tile_count())),
            ],
        );
        Ok(engine)
    }

    pub fn sheet(&self) -> &TileSheet {
        &self.sheet
    }

    pub fn extent(&self) -> PageExtent {
        self.extent
    }

    pub fn watermark(&self) -> &WatermarkConfig {
        &self.watermark
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Register a resize signal. Returns `true` when the signal armed a new
    /// relayout deadline, `false` when it was dropped into the cooldown.
    pub fn notify_resize(&mut self, now: Instant) -> bool {
        let armed = self.throttle.signal(now, self.config.throttle_interval);
        self.record_resize_metric(!armed);
        if !armed {
            self.log_engine_event(LogLevel::Debug, "resize_throttled", std::iter::empty());
        }
        armed
    }

    /// Run the pending relayout if its cooldown has expired. Returns whether
    /// a layout pass ran.
    pub fn pump(&mut self, now: Instant) -> bool {
        if !self.throttle.due(now) {
            return false;
        }
        self.relayout();
        self.maybe_emit_metrics(now);
        true
    }

    /// Re-sample the viewport and re-solve the grid unconditionally. The
    /// previous sheet is replaced wholesale; there is no incremental diffing.
    pub fn relayout(&mut self) {
        self.extent = self.provider.extent();
        self.sheet = layout::solve(self.extent, &self.watermark, self.hints);
        self.hints = self.sheet.hints();
        self.record_layout_metric();
        self.log_engine_event(
            LogLevel::Debug,
            "relayout",
            [
                json_kv("width", json!(self.extent.width)),
                json_kv("height", json!(self.extent.height)),
                json_kv("cols", json!(self.sheet.cols)),
                json_kv("rows", json!(self.sheet.rows)),
                json_kv("tiles", json!(self.sheet.tile_count())),
            ],
        );
    }

    /// Swap in a new watermark config and relayout immediately. Hints reset
    /// to the new config's values.
    pub fn replace_config(&mut self, watermark: WatermarkConfig) -> Result<()> {
        watermark.validate()?;
        self.hints = LayoutHints::from_config(&watermark);
        self.watermark = watermark;
        self.overlay.invalidate();
        self.relayout();
        Ok(())
    }

    /// Render the current sheet into `writer` when it differs from the last
    /// applied frame. Returns whether anything was written. The frame is
    /// committed only after the write and flush succeed, so a failed writer
    /// leaves the overlay marked stale and the next call retries the push.
    pub fn render_into(
        &mut self,
        writer: &mut impl Write,
        renderer: &mut HtmlRenderer,
    ) -> Result<bool> {
        let mut frame = Vec::new();
        renderer.render(&mut frame, &self.sheet, &self.watermark, self.extent)?;

        if !self.overlay.differs(&frame) {
            self.log_engine_event(LogLevel::Debug, "overlay_unchanged", std::iter::empty());
            return Ok(false);
        }

        writer.write_all(&frame)?;
        writer.flush()?;
        self.overlay.record_applied(&frame);
        self.record_overlay_metric();
        self.log_engine_event(
            LogLevel::Debug,
            "overlay_applied",
            [json_kv("bytes", json!(frame.len()))],
        );
        Ok(true)
    }

    fn maybe_emit_metrics(&mut self, now: Instant) {
        let interval = self.config.metrics_interval;
        if interval == Duration::from_millis(0) {
            return;
        }
        let Some(metrics) = self.config.metrics.as_ref() else {
            return;
        };
        let Some(logger) = self.config.logger.as_ref() else {
            return;
        };

        if let Some(last) = self.last_metrics_emit {
            if now.saturating_duration_since(last) < interval {
                return;
            }
        }
        self.last_metrics_emit = Some(now);

        if let Ok(guard) = metrics.lock() {
            let uptime = now.saturating_duration_since(self.start_instant);
            let event = guard.snapshot(uptime).to_log_event(&self.config.metrics_target);
            let _ = logger.log_event(event);
        }
    }

    fn log_engine_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, "tilemark::engine", message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_layout_metric(&mut self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_layout(self.sheet.tile_count());
            }
        }
    }

    fn record_resize_metric(&mut self, throttled: bool) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_resize_signal(throttled);
            }
        }
    }

    fn record_overlay_metric(&mut self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_overlay_apply();
            }
        }
    }
}
