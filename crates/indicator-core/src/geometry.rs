// File: crates/indicator-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Axis-aligned rectangle in chart-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f32 { self.x + self.width }
}

/// Straight line segment, used for ticks and gridlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
    pub fn horizontal(y: f32, x1: f32, x2: f32) -> Self { Self::new(x1, y, x2, y) }
    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self { Self::new(x, y1, x, y2) }
}

/// Format a pixel coordinate compactly: at most two decimals, no trailing zeros.
pub fn fmt_px(v: f32) -> String {
    let r = (v * 100.0).round() / 100.0;
    // avoid "-0"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r}")
}
