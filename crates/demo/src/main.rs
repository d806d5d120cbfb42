// File: crates/demo/src/main.rs
// Summary: Demo loads an indicator dataset and renders every chart at desktop and mobile widths to SVG/PNG.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicator_core::{
    telemetry, write_png, Dataset, HostFrame, LayoutConfig, LayoutController, RenderReport, TextShaper, Theme,
};
use tracing::{info, warn};

/// Stand-in for the embedding frame: logs every height notification.
struct LoggingHost {
    notifications: usize,
}

impl HostFrame for LoggingHost {
    fn content_height_changed(&mut self) {
        self.notifications += 1;
        info!(count = self.notifications, "host notified of content height change");
    }
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    // Args: [dataset.json] [out_dir] [theme] [widths...]
    let mut args = std::env::args().skip(1);
    let data_path = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/indicators.json".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let theme = indicator_core::theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let widths = args
        .map(|w| w.parse::<f32>().with_context(|| format!("invalid width `{w}`")))
        .collect::<Result<Vec<_>>>()?;
    let widths = if widths.is_empty() { vec![1000.0, 400.0] } else { widths };

    let json = std::fs::read_to_string(&data_path)
        .with_context(|| format!("failed to read dataset '{}'", data_path.display()))?;
    let dataset = Dataset::from_json_str(&json).context("failed to parse dataset")?;
    info!(path = %data_path.display(), metrics = dataset.len(), "dataset loaded");

    let cfg = LayoutConfig::default();
    let mut ctl = LayoutController::new(dataset, cfg, LoggingHost { notifications: 0 }, TextShaper::new());
    let shaper = TextShaper::new();

    // Each width arrives as a resize event one interval apart, like a window being dragged.
    let mut now = Instant::now();
    for width in widths {
        let report = match ctl.on_resize(width, now) {
            Some(r) => r,
            None => ctl
                .flush(now + cfg.resize_interval)
                .unwrap_or_else(|| ctl.render(width)),
        };
        write_outputs(&ctl, &report, &theme, &shaper, &out_dir, width)?;
        now += cfg.resize_interval + Duration::from_millis(1);
    }
    Ok(())
}

fn write_outputs(
    ctl: &LayoutController<LoggingHost, TextShaper>,
    report: &RenderReport,
    theme: &Theme,
    shaper: &TextShaper,
    out_dir: &Path,
    width: f32,
) -> Result<()> {
    if report.skipped() {
        warn!(width, "render pass skipped");
        return Ok(());
    }
    for (key, err) in &report.failures {
        warn!(metric = %key, error = %err, "chart failed");
    }
    let dir = out_dir.join(format!("w{}", width.round() as i32));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    for key in &report.rendered {
        let Some(container) = ctl.page().container(*key) else { continue };
        let svg_path = dir.join(format!("{key}.svg"));
        std::fs::write(&svg_path, container.to_svg(theme))
            .with_context(|| format!("writing {}", svg_path.display()))?;
        write_png(container, theme, shaper, dir.join(format!("{key}.png")))?;
    }
    info!(
        width,
        charts = report.rendered.len(),
        height = ctl.page().content_height(),
        dir = %dir.display(),
        "wrote charts"
    );
    Ok(())
}
