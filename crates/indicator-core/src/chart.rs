// File: crates/indicator-core/src/chart.rs
// Summary: Per-metric draw pipeline into a chart container, and headless PNG rasterization via Skia.

use anyhow::Context as _;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{render_axes, AxisSet};
use crate::dataset::{MetricKey, MetricSeries};
use crate::error::{ChartError, ChartResult};
use crate::geometry::Segment;
use crate::overlay::{term_bands, TermBand, TERMS};
use crate::scale::ChartScales;
use crate::scene::{ChartContainer, Fill, Ink, Node, TextAnchor};
use crate::series::{render_label, render_line, PathCommand};
use crate::text::{TextMeasure, TextShaper};
use crate::theme::Theme;
use crate::view::{LayoutConfig, ViewportState};

/// Outward length of axis tick marks.
const TICK_SIZE: f32 = 4.0;

/// Clear `container` and draw one metric's chart into it.
///
/// Geometry is validated before anything is attached, so a failing metric leaves its
/// container empty instead of half drawn.
pub fn draw_metric(
    container: &mut ChartContainer,
    key: MetricKey,
    metric: &MetricSeries,
    viewport: &ViewportState,
    cfg: &LayoutConfig,
    measure: &dyn TextMeasure,
) -> ChartResult<()> {
    container.clear();

    let dims = viewport.chart_dims(cfg);
    let scales = ChartScales::build(dims.chart_width, dims.chart_height, metric.min_value, metric.max_value)?;
    let axes = render_axes(&scales, key, metric, viewport.is_mobile)?;
    let bands = term_bands(&scales.x, dims.chart_height, &TERMS)?;
    let line = render_line(&scales.x, &scales.y, &metric.points);

    let (outer_w, outer_h) = dims.outer(cfg);
    container.resize(outer_w, outer_h, (cfg.insets.left as f32, cfg.insets.top as f32));

    attach_bands(container, bands);
    attach_axes(container, &axes, dims.chart_height, cfg.tick_font_size);
    container.append(Node::Path { class: "line", path: line });

    if let Err(err) = render_label(container, &scales, &metric.tick_values, &metric.label, &cfg.label, measure) {
        container.clear();
        return Err(err);
    }

    debug!(
        metric = %key,
        width = outer_w,
        height = outer_h,
        nodes = container.nodes().len(),
        "chart drawn"
    );
    Ok(())
}

fn attach_bands(container: &mut ChartContainer, bands: Vec<TermBand>) {
    for b in bands {
        container.append(Node::Rect { id: Some(b.id), class: "term", rect: b.rect, fill: Fill::Term(b.party) });
    }
}

fn attach_axes(container: &mut ChartContainer, axes: &AxisSet, chart_height: f32, font_size: f32) {
    for &seg in &axes.x_grid {
        container.append(Node::Line { class: "grid x", seg });
    }
    for &seg in &axes.y_grid {
        container.append(Node::Line { class: "grid y", seg });
    }
    for t in &axes.x_axis.ticks {
        container.append(Node::Line { class: "tick x", seg: Segment::vertical(t.pos, chart_height, chart_height + TICK_SIZE) });
        container.append(Node::Text {
            class: "tick-label x",
            x: t.pos,
            y: chart_height + TICK_SIZE + font_size,
            anchor: TextAnchor::Middle,
            size: font_size,
            ink: Ink::Axis,
            content: t.label.clone(),
        });
    }
    for t in &axes.y_axis.ticks {
        container.append(Node::Line { class: "tick y", seg: Segment::horizontal(t.pos, -TICK_SIZE, 0.0) });
        container.append(Node::Text {
            class: "tick-label y",
            x: -(TICK_SIZE + 2.0),
            y: t.pos + font_size * 0.35,
            anchor: TextAnchor::End,
            size: font_size,
            ink: Ink::Axis,
            content: t.label.clone(),
        });
    }
}

// ---- raster output -------------------------------------------------------------

/// Rasterize a drawn container to PNG bytes using a CPU surface.
pub fn render_to_png_bytes(container: &ChartContainer, theme: &Theme, shaper: &TextShaper) -> ChartResult<Vec<u8>> {
    let w = container.width.ceil() as i32;
    let h = container.height.ceil() as i32;
    if w <= 0 || h <= 0 {
        return Err(ChartError::Raster(format!("container `{}` has not been drawn", container.key)));
    }
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| ChartError::Raster("failed to create raster surface".into()))?;
    let canvas = surface.canvas();
    canvas.clear(theme.background);
    canvas.translate((container.origin.0, container.origin.1));

    for node in container.nodes() {
        paint_node(canvas, node, theme, shaper);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Raster("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `container` to a PNG file at `path`, creating parent directories.
pub fn write_png(
    container: &ChartContainer,
    theme: &Theme,
    shaper: &TextShaper,
    path: impl AsRef<std::path::Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let bytes = render_to_png_bytes(container, theme, shaper)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn paint_node(canvas: &skia::Canvas, node: &Node, theme: &Theme, shaper: &TextShaper) {
    match node {
        Node::Rect { rect, fill, .. } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(match fill {
                Fill::Term(p) => theme.party_fill(*p),
                Fill::Bubble => theme.bubble_fill,
            });
            canvas.draw_rect(skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height), &paint);
        }
        Node::Line { seg, .. } => {
            let mut paint = skia::Paint::default();
            paint.set_color(theme.grid);
            paint.set_anti_alias(true);
            paint.set_stroke_width(1.0);
            canvas.draw_line((seg.x1, seg.y1), (seg.x2, seg.y2), &paint);
        }
        Node::Path { path, .. } => {
            let mut sk = skia::Path::new();
            for c in &path.commands {
                match *c {
                    PathCommand::MoveTo(x, y) => { sk.move_to((x, y)); }
                    PathCommand::LineTo(x, y) => { sk.line_to((x, y)); }
                    PathCommand::CubicTo(x1, y1, x2, y2, x, y) => { sk.cubic_to((x1, y1), (x2, y2), (x, y)); }
                }
            }
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(2.0);
            stroke.set_color(theme.line_stroke);
            canvas.draw_path(&sk, &stroke);
        }
        Node::Text { x, y, anchor, size, ink, content, .. } => {
            let color = match ink {
                Ink::Axis => theme.axis_label,
                Ink::OnBubble => theme.bubble_text,
            };
            shaper.draw(canvas, content, *x, *y, *anchor, *size, color);
        }
    }
}
