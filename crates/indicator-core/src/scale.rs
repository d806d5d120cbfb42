// File: crates/indicator-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms built fresh for every chart on every pass.

use chrono::NaiveDate;

use crate::error::{ChartError, ChartResult};
use crate::types::{date_to_days, MAX_DATE, MIN_DATE};

/// Value Y coordinate (e.g., percent change).
pub type Value = f64;

/// Horizontal time scale mapping a date domain linearly onto `[left_px, right_px]`.
///
/// Unclamped: dates outside the domain extrapolate past the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, left_px: f32, right_px: f32) -> Self {
        Self { left_px, right_px, start, end }
    }

    /// Scale over the shared `[MIN_DATE, MAX_DATE]` domain.
    pub fn shared(width_px: f32) -> Self {
        Self::new(MIN_DATE, MAX_DATE, 0.0, width_px)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.start, self.end) }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        let d0 = date_to_days(self.start);
        let span = (date_to_days(self.end) - d0).max(1.0);
        let t = (date_to_days(d) - d0) / span;
        self.left_px + (t * (self.right_px - self.left_px) as f64) as f32
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]` (larger values higher).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Both mappings for a single chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl ChartScales {
    /// Build the scales for a `chart_width` x `chart_height` plot of a metric spanning
    /// `[value_min, value_max]`.
    ///
    /// The domain must be finite with `value_max > value_min`; empty, inverted or
    /// non-finite domains are rejected.
    pub fn build(chart_width: f32, chart_height: f32, value_min: Value, value_max: Value) -> ChartResult<Self> {
        if !value_min.is_finite() || !value_max.is_finite() || !(value_max > value_min) {
            return Err(ChartError::DegenerateDomain { min: value_min, max: value_max });
        }
        Ok(Self {
            x: TimeScale::shared(chart_width),
            y: ValueScale::new_linear(0.0, chart_height, value_min, value_max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_value_scale_falls_back_to_unit_span() {
        let s = ValueScale::new_linear(0.0, 100.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        assert!(s.to_px(3.0).is_finite());
    }

    #[test]
    fn time_scale_maps_domain_ends_to_range_ends() {
        let s = TimeScale::shared(800.0);
        assert_eq!(s.to_px(MIN_DATE), 0.0);
        assert_eq!(s.to_px(MAX_DATE), 800.0);
    }
}
