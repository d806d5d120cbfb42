// File: crates/indicator-core/tests/overlay.rs
// Purpose: Validate term shading bands: monotone placement, exact widths, ids, and rejection of inverted terms.

use chrono::NaiveDate;
use indicator_core::overlay::{css_slug, term_bands, Party, Term, TERMS};
use indicator_core::{ChartError, TimeScale};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn obama_band_bounds() {
    let x = TimeScale::shared(955.0);
    let bands = term_bands(&x, 166.0, &TERMS).unwrap();
    let obama = bands.iter().find(|b| b.id == "term-obama").expect("obama band");
    let (start, end) = (ymd(2009, 2, 1), ymd(2016, 12, 31));
    assert!(x.to_px(start) < x.to_px(end));
    assert_eq!(obama.rect.x, x.to_px(start));
    assert_eq!(obama.rect.width, x.to_px(end) - x.to_px(start));
    assert_eq!(obama.rect.height, 166.0);
    assert_eq!(obama.party, Party::Democratic);
}

#[test]
fn bands_follow_table_order_and_leave_transitions_unshaded() {
    let x = TimeScale::shared(955.0);
    let bands = term_bands(&x, 100.0, &TERMS).unwrap();
    let ids: Vec<_> = bands.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["term-clinton", "term-bush", "term-obama", "term-trump"]);
    for pair in bands.windows(2) {
        assert!(pair[0].rect.right() < pair[1].rect.x);
    }
}

#[test]
fn inverted_term_is_rejected() {
    let bad = [Term { president: "Backwards", party: Party::Republican, start: ymd(2010, 1, 1), end: ymd(2009, 1, 1) }];
    let err = term_bands(&TimeScale::shared(500.0), 100.0, &bad).unwrap_err();
    assert!(matches!(err, ChartError::NegativeBandWidth { ref term, width } if term == "Backwards" && width < 0.0));
}

#[test]
fn zero_width_term_is_allowed() {
    let d = ymd(2012, 6, 1);
    let t = [Term { president: "Instant", party: Party::Democratic, start: d, end: d }];
    let bands = term_bands(&TimeScale::shared(500.0), 100.0, &t).unwrap();
    assert_eq!(bands[0].rect.width, 0.0);
}

#[test]
fn slugs_are_css_safe() {
    assert_eq!(css_slug("Obama"), "obama");
    assert_eq!(css_slug("George W. Bush"), "george-w-bush");
    assert_eq!(css_slug("  H.W.  Bush!"), "h-w-bush");
}
