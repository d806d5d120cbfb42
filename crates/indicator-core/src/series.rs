// File: crates/indicator-core/src/series.rs
// Summary: Line path with monotone cubic interpolation, and the fixed label bubble annotation.
// Notes:
// - The label is sized in two phases: its text node is attached first, then measured,
//   then the bubble is inserted beneath it. Measuring before attaching is not supported.

use std::fmt::Write as _;

use crate::dataset::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{fmt_px, Rect};
use crate::scale::{ChartScales, TimeScale, ValueScale};
use crate::scene::{ChartContainer, Fill, Ink, Node, NodeId, TextAnchor};
use crate::text::TextMeasure;
use crate::types::{MIN_DATE, Y_TICK_COUNT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Two control points, then the end point.
    CubicTo(f32, f32, f32, f32, f32, f32),
}

impl PathCommand {
    /// Point the command ends on.
    pub fn end(&self) -> (f32, f32) {
        match *self {
            PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => (x, y),
            PathCommand::CubicTo(_, _, _, _, x, y) => (x, y),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    pub commands: Vec<PathCommand>,
}

impl LinePath {
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// The on-curve points, one per data point.
    pub fn vertices(&self) -> Vec<(f32, f32)> {
        self.commands.iter().map(PathCommand::end).collect()
    }

    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for c in &self.commands {
            let _ = match *c {
                PathCommand::MoveTo(x, y) => write!(d, "M{},{}", fmt_px(x), fmt_px(y)),
                PathCommand::LineTo(x, y) => write!(d, "L{},{}", fmt_px(x), fmt_px(y)),
                PathCommand::CubicTo(x1, y1, x2, y2, x, y) => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_px(x1), fmt_px(y1), fmt_px(x2), fmt_px(y2), fmt_px(x), fmt_px(y)
                ),
            };
        }
        d
    }
}

#[inline]
fn sign(v: f32) -> f32 { if v < 0.0 { -1.0 } else { 1.0 } }

/// Monotone-in-x cubic interpolation through `pts` (Fritsch–Carlson tangents).
///
/// The curve passes through every point and never overshoots between neighbours.
/// `pts` must be ordered by x.
pub fn monotone_x(pts: &[(f32, f32)]) -> LinePath {
    let n = pts.len();
    let mut commands = Vec::with_capacity(n);
    let Some(&(x0, y0)) = pts.first() else { return LinePath { commands } };
    commands.push(PathCommand::MoveTo(x0, y0));
    if n == 1 {
        return LinePath { commands };
    }
    if n == 2 {
        commands.push(PathCommand::LineTo(pts[1].0, pts[1].1));
        return LinePath { commands };
    }

    // secant slopes per segment
    let h: Vec<f32> = pts.windows(2).map(|w| w[1].0 - w[0].0).collect();
    let s: Vec<f32> = pts
        .windows(2)
        .zip(&h)
        .map(|(w, &dx)| if dx != 0.0 { (w[1].1 - w[0].1) / dx } else { 0.0 })
        .collect();

    // interior tangents
    let mut m = vec![0.0f32; n];
    for i in 1..n - 1 {
        let (h0, h1) = (h[i - 1], h[i]);
        let (s0, s1) = (s[i - 1], s[i]);
        let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        m[i] = if t.is_finite() { t } else { 0.0 };
    }
    // one-sided end tangents
    m[0] = if h[0] != 0.0 { (3.0 * s[0] - m[1]) / 2.0 } else { m[1] };
    m[n - 1] = if h[n - 2] != 0.0 { (3.0 * s[n - 2] - m[n - 2]) / 2.0 } else { m[n - 2] };

    for i in 0..n - 1 {
        let (xa, ya) = pts[i];
        let (xb, yb) = pts[i + 1];
        let dx = (xb - xa) / 3.0;
        commands.push(PathCommand::CubicTo(xa + dx, ya + dx * m[i], xb - dx, yb - dx * m[i + 1], xb, yb));
    }
    LinePath { commands }
}

/// Project a metric's points and interpolate them.
///
/// Pixel y grows downward, so tangents are computed on the projected points directly.
pub fn render_line(x: &TimeScale, y: &ValueScale, points: &[DataPoint]) -> LinePath {
    let pts: Vec<(f32, f32)> = points.iter().map(|p| (x.to_px(p.date), y.to_px(p.value))).collect();
    monotone_x(&pts)
}

/// Sizes for the annotation bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Distance left of the domain start where the text begins.
    pub offset: f32,
    /// Added to the measured text width.
    pub padding: f32,
    pub height: f32,
    pub font_size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { offset: 9.0, padding: 10.0, height: 18.0, font_size: 12.0 }
    }
}

/// Nodes the label pass attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelNodes {
    pub bubble: NodeId,
    pub text: NodeId,
}

/// Draw the fixed annotation: `text` at the domain start, level with the last configured tick.
///
/// Two phases: attach the text node, measure it as attached, then insert the bubble under it.
pub fn render_label(
    container: &mut ChartContainer,
    scales: &ChartScales,
    tick_values: &[f64],
    text: &str,
    style: &LabelStyle,
    measure: &dyn TextMeasure,
) -> ChartResult<LabelNodes> {
    let Some(&top_tick) = tick_values.last() else {
        return Err(ChartError::TickCardinality {
            key: container.key.as_str().to_string(),
            expected: Y_TICK_COUNT,
            found: 0,
        });
    };
    let x = scales.x.to_px(MIN_DATE) - style.offset;
    let y = scales.y.to_px(top_tick);

    // phase 1: attach
    let text_id = container.append(Node::Text {
        class: "label-text",
        x,
        y: y + style.font_size * 0.35,
        anchor: TextAnchor::Start,
        size: style.font_size,
        ink: Ink::OnBubble,
        content: text.to_string(),
    });

    // phase 2: measure the attached node
    let text_width = container.text_width(text_id, measure)?;

    // phase 3: bubble beneath the text
    let bubble = Rect::from_xywh(x - style.padding * 0.5, y - style.height * 0.5, text_width + style.padding, style.height);
    let bubble_id = container.insert_before(text_id, Node::Rect { id: None, class: "label-bubble", rect: bubble, fill: Fill::Bubble });
    Ok(LabelNodes { bubble: bubble_id, text: text_id.shifted() })
}
