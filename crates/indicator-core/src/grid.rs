// File: crates/indicator-core/src/grid.rs
// Summary: Gridline layout helpers: tick positions extended across the plot.

use crate::geometry::Segment;

/// Vertical reference lines at `xs`, spanning `[0, height]`.
pub fn vertical_gridlines(xs: &[f32], height: f32) -> Vec<Segment> {
    xs.iter().map(|&x| Segment::vertical(x, 0.0, height)).collect()
}

/// Horizontal reference lines at `ys`, spanning `[0, width]`.
pub fn horizontal_gridlines(ys: &[f32], width: f32) -> Vec<Segment> {
    ys.iter().map(|&y| Segment::horizontal(y, 0.0, width)).collect()
}
