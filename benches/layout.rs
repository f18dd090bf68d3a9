use std::io;
use std::time::{Duration, Instant};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tilemark::logging::{LogEvent, LogSink, LoggingResult};
use tilemark::{
    HtmlRenderer, LayoutHints, Logger, PageExtent, StaticViewport, WatermarkConfig,
    WatermarkEngine, solve,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn solve_large_page(c: &mut Criterion) {
    let cfg = WatermarkConfig::default();
    let extent = PageExtent::new(1920.0, 12_000.0);
    c.bench_function("solve_large_page", |b| {
        b.iter(|| {
            let sheet = solve(black_box(extent), &cfg, LayoutHints::default());
            black_box(sheet.tile_count())
        });
    });
}

fn resize_storm(c: &mut Criterion) {
    c.bench_function("resize_storm", |b| {
        b.iter(|| {
            let viewport = StaticViewport::new(PageExtent::new(800.0, 600.0));
            let mut config = tilemark::EngineConfig::default();
            config.logger = Some(Logger::new(NullSink));
            config.metrics_interval = Duration::from_millis(0);
            config.enable_metrics();

            let mut engine = WatermarkEngine::with_config(
                WatermarkConfig::default(),
                viewport.clone(),
                config,
            )
            .expect("engine");
            let mut renderer = HtmlRenderer::with_default();
            let mut sink = io::sink();

            let start = Instant::now();
            for step in 0..50u64 {
                let now = start + Duration::from_millis(step * 25);
                viewport.set_extent(PageExtent::new(
                    800.0 + (step * 40) as f64,
                    600.0 + (step * 30) as f64,
                ));
                engine.notify_resize(now);
                if engine.pump(now + Duration::from_millis(200)) {
                    engine.render_into(&mut sink, &mut renderer).expect("render");
                }
            }
            black_box(engine.sheet().tile_count())
        });
    });
}

criterion_group!(benches, solve_large_page, resize_storm);
criterion_main!(benches);
