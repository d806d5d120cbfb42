// File: crates/indicator-core/benches/render_bench.rs
// Summary: Full render pass over all indicators at desktop and mobile widths.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indicator_core::{Dataset, FixedAdvance, LayoutConfig, LayoutController, NoopHost};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    for &width in &[1000.0f32, 400.0f32] {
        group.bench_function(format!("width_{width}"), |b| {
            let ds = Dataset::from_json_str(include_str!("../tests/fixtures/indicators.json")).expect("dataset");
            let mut ctl = LayoutController::new(ds, LayoutConfig::default(), NoopHost, FixedAdvance::default());
            b.iter(|| -> Result<()> {
                let report = ctl.render(black_box(width));
                anyhow::ensure!(report.failures.is_empty(), "render failures");
                black_box(ctl.page().content_height());
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
