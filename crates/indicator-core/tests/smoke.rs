// File: crates/indicator-core/tests/smoke.rs
// Purpose: Basic end-to-end raster smoke test: draw with real text shaping and encode PNG.

use indicator_core::{render_to_png_bytes, write_png, Dataset, LayoutConfig, LayoutController, MetricKey, NoopHost, TextShaper, Theme};

#[test]
fn render_smoke_png() {
    let ds = Dataset::from_json_str(include_str!("fixtures/indicators.json")).expect("dataset");
    let mut ctl = LayoutController::new(ds, LayoutConfig::default(), NoopHost, TextShaper::new());
    let report = ctl.render(640.0);
    assert!(report.failures.is_empty());

    let c = ctl.page().container(MetricKey::Stocks).expect("container");
    let shaper = TextShaper::new();
    let bytes = render_to_png_bytes(c, &Theme::light(), &shaper).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), 640);
    assert_eq!(img.height(), c.height as u32);
    // background alpha in the top-left corner
    assert_eq!(img.get_pixel(0, 0)[3], 255);

    let out = std::path::PathBuf::from("target/test_out/stocks.png");
    write_png(c, &Theme::dark(), &shaper, &out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn undrawn_container_cannot_be_rasterized() {
    let ds = Dataset::new();
    let ctl = LayoutController::new(ds, LayoutConfig::default(), NoopHost, TextShaper::new());
    let c = ctl.page().container(MetricKey::Gdp).unwrap();
    assert!(render_to_png_bytes(c, &Theme::light(), &TextShaper::new()).is_err());
}
