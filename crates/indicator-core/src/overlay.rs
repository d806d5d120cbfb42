// File: crates/indicator-core/src/overlay.rs
// Summary: Presidential-term shading bands projected onto a chart's time scale.

use chrono::NaiveDate;

use crate::error::{ChartError, ChartResult};
use crate::geometry::Rect;
use crate::scale::TimeScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Party {
    Democratic,
    Republican,
}

/// A date-bounded administration used for background shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub president: &'static str,
    pub party: Party,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid term date"),
    }
}

/// Administrations covering the shared date domain. January transition months stay unshaded.
pub const TERMS: [Term; 4] = [
    Term { president: "Clinton", party: Party::Democratic, start: ymd(2000, 2, 1), end: ymd(2000, 12, 31) },
    Term { president: "Bush", party: Party::Republican, start: ymd(2001, 2, 1), end: ymd(2008, 12, 31) },
    Term { president: "Obama", party: Party::Democratic, start: ymd(2009, 2, 1), end: ymd(2016, 12, 31) },
    Term { president: "Trump", party: Party::Republican, start: ymd(2017, 2, 1), end: ymd(2020, 12, 31) },
];

/// A shaded rectangle for one term.
#[derive(Clone, Debug, PartialEq)]
pub struct TermBand {
    pub id: String,
    pub party: Party,
    pub rect: Rect,
}

/// Lowercase `label`, collapsing every run of non-alphanumerics into one dash.
pub fn css_slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() { out.push('-'); }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Project `terms` onto `x`, in table order (later bands draw on top).
///
/// Fails on the first term whose end maps left of its start.
pub fn term_bands(x: &TimeScale, chart_height: f32, terms: &[Term]) -> ChartResult<Vec<TermBand>> {
    terms
        .iter()
        .map(|t| {
            let x0 = x.to_px(t.start);
            let width = x.to_px(t.end) - x0;
            if width < 0.0 {
                return Err(ChartError::NegativeBandWidth { term: t.president.to_string(), width });
            }
            Ok(TermBand {
                id: format!("term-{}", css_slug(t.president)),
                party: t.party,
                rect: Rect::from_xywh(x0, 0.0, width, chart_height),
            })
        })
        .collect()
}
