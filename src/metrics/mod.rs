use serde_json::json;
use std::time::Duration;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters accumulated over the engine's lifetime.
#[derive(Debug, Default, Clone)]
pub struct EngineMetrics {
    layout_passes: u64,
    tiles_placed: u64,
    resize_signals: u64,
    throttled_signals: u64,
    overlay_applies: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layout(&mut self, tile_count: usize) {
        self.layout_passes = self.layout_passes.saturating_add(1);
        self.tiles_placed = self.tiles_placed.saturating_add(tile_count as u64);
    }

    pub fn record_resize_signal(&mut self, throttled: bool) {
        self.resize_signals = self.resize_signals.saturating_add(1);
        if throttled {
            self.throttled_signals = self.throttled_signals.saturating_add(1);
        }
    }

    pub fn record_overlay_apply(&mut self) {
        self.overlay_applies = self.overlay_applies.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            layout_passes: self.layout_passes,
            tiles_placed: self.tiles_placed,
            resize_signals: self.resize_signals,
            throttled_signals: self.throttled_signals,
            overlay_applies: self.overlay_applies,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub layout_passes: u64,
    pub tiles_placed: u64,
    pub resize_signals: u64,
    pub throttled_signals: u64,
    pub overlay_applies: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("layout_passes".to_string(), json!(self.layout_passes));
        map.insert("tiles_placed".to_string(), json!(self.tiles_placed));
        map.insert("resize_signals".to_string(), json!(self.resize_signals));
        map.insert(
            "throttled_signals".to_string(),
            json!(self.throttled_signals),
        );
        map.insert("overlay_applies".to_string(), json!(self.overlay_applies));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target,
            "engine_metrics",
            self.as_fields(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = EngineMetrics::new();
        metrics.record_layout(12);
        metrics.record_layout(20);
        metrics.record_resize_signal(false);
        metrics.record_resize_signal(true);
        metrics.record_overlay_apply();

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.uptime_ms, 1500);
        assert_eq!(snapshot.layout_passes, 2);
        assert_eq!(snapshot.tiles_placed, 32);
        assert_eq!(snapshot.resize_signals, 2);
        assert_eq!(snapshot.throttled_signals, 1);
        assert_eq!(snapshot.overlay_applies, 1);
    }

    #[test]
    fn snapshot_event_carries_all_fields() {
        let metrics = EngineMetrics::new();
        let event = metrics
            .snapshot(Duration::from_secs(1))
            .to_log_event("tilemark::engine.metrics");
        assert_eq!(event.message, "engine_metrics");
        assert_eq!(event.fields.len(), 6);
    }
}
