// File: crates/indicator-core/src/view.rs
// Summary: Viewport classification and per-chart geometry derived from the measured container width.

use std::time::Duration;

use crate::series::LabelStyle;
use crate::types::{Insets, DESKTOP_ASPECT, MOBILE_ASPECT, MOBILE_BREAKPOINT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

/// Layout knobs for a render pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    pub insets: Insets,
    /// Widths at or below this are mobile.
    pub breakpoint: f32,
    pub desktop_aspect: f32,
    pub mobile_aspect: f32,
    /// Minimum spacing between throttled resize renders.
    pub resize_interval: Duration,
    pub tick_font_size: f32,
    pub label: LabelStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            breakpoint: MOBILE_BREAKPOINT,
            desktop_aspect: DESKTOP_ASPECT,
            mobile_aspect: MOBILE_ASPECT,
            resize_interval: Duration::from_millis(250),
            tick_font_size: 11.0,
            label: LabelStyle::default(),
        }
    }
}

/// Snapshot of the measured container for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub is_mobile: bool,
}

impl ViewportState {
    /// Classify a measured width. Returns `None` while the container is unmeasurable
    /// (zero, negative, or non-finite width).
    pub fn measure(width: f32, cfg: &LayoutConfig) -> Option<Self> {
        if !width.is_finite() || width <= 0.0 {
            return None;
        }
        Some(Self { width, is_mobile: width <= cfg.breakpoint })
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_mobile { LayoutMode::Mobile } else { LayoutMode::Desktop }
    }

    pub fn aspect(&self, cfg: &LayoutConfig) -> f32 {
        if self.is_mobile { cfg.mobile_aspect } else { cfg.desktop_aspect }
    }

    /// Plot-area size inside the insets.
    pub fn chart_dims(&self, cfg: &LayoutConfig) -> ChartDims {
        let chart_width = self.width - cfg.insets.hsum() as f32;
        let chart_height = (chart_width / self.aspect(cfg)).ceil() - cfg.insets.vsum() as f32;
        ChartDims { chart_width, chart_height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDims {
    pub chart_width: f32,
    pub chart_height: f32,
}

impl ChartDims {
    /// True when the insets leave no drawable plot.
    pub fn is_empty(&self) -> bool {
        self.chart_width <= 0.0 || self.chart_height <= 0.0
    }

    /// Full container size including insets.
    pub fn outer(&self, cfg: &LayoutConfig) -> (f32, f32) {
        (
            self.chart_width + cfg.insets.hsum() as f32,
            self.chart_height + cfg.insets.vsum() as f32,
        )
    }
}
