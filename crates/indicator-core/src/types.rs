// File: crates/indicator-core/src/types.rs
// Summary: Shared types and constants (date domain, breakpoint, paddings).

use chrono::{Datelike, NaiveDate};

/// First date of the shared horizontal domain. Every chart starts here.
pub const MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 2, 1) {
    Some(d) => d,
    None => panic!("invalid MIN_DATE"),
};

/// Last date of the shared horizontal domain.
pub const MAX_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 2, 1) {
    Some(d) => d,
    None => panic!("invalid MAX_DATE"),
};

/// Years labelled on every horizontal axis (January 1 of each).
pub const X_TICK_YEARS: [i32; 6] = [2000, 2004, 2008, 2012, 2016, 2020];

/// Container widths at or below this are laid out as mobile.
pub const MOBILE_BREAKPOINT: f32 = 600.0;

/// Width:height ratio of a chart on desktop layouts.
pub const DESKTOP_ASPECT: f32 = 5.0;
/// Width:height ratio of a chart on mobile layouts.
pub const MOBILE_ASPECT: f32 = 2.5;

/// Number of configured vertical ticks every metric must carry.
pub const Y_TICK_COUNT: usize = 5;
/// Positions kept from the vertical tick list on mobile.
pub const MOBILE_Y_TICK_INDICES: [usize; 3] = [0, 2, 4];

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(30, 15, 5, 20)
    }
}

/// Days since the Unix epoch, the numeric form dates take inside scales.
#[inline]
pub fn date_to_days(d: NaiveDate) -> f64 {
    const EPOCH_CE_DAYS: i32 = 719_163;
    (d.num_days_from_ce() - EPOCH_CE_DAYS) as f64
}
