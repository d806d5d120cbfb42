// File: crates/indicator-core/tests/scales.rs
// Purpose: Validate the shared time domain, inverted value range, extrapolation and degenerate domains.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use indicator_core::types::{MAX_DATE, MIN_DATE};
use indicator_core::{ChartError, ChartScales};

#[test]
fn time_domain_is_shared_regardless_of_values() {
    let a = ChartScales::build(955.0, 166.0, -4.0, 4.0).unwrap();
    let b = ChartScales::build(300.0, 97.0, 0.0, 15.0).unwrap();
    let expected = (NaiveDate::from_ymd_opt(2000, 2, 1).unwrap(), NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
    assert_eq!(a.x.domain(), expected);
    assert_eq!(b.x.domain(), expected);
    assert_eq!(a.x.to_px(MIN_DATE), 0.0);
    assert_relative_eq!(a.x.to_px(MAX_DATE), 955.0, epsilon = 1e-3);
}

#[test]
fn value_range_is_inverted() {
    let s = ChartScales::build(500.0, 200.0, -4.0, 4.0).unwrap();
    assert_relative_eq!(s.y.to_px(4.0), 0.0, epsilon = 1e-4);
    assert_relative_eq!(s.y.to_px(-4.0), 200.0, epsilon = 1e-4);
    assert_relative_eq!(s.y.to_px(0.0), 100.0, epsilon = 1e-4);
    assert!(s.y.to_px(2.0) < s.y.to_px(1.0));
}

#[test]
fn scales_extrapolate_without_clamping() {
    let s = ChartScales::build(500.0, 200.0, 0.0, 10.0).unwrap();
    assert!(s.y.to_px(20.0) < 0.0);
    assert!(s.y.to_px(-5.0) > 200.0);
    let before = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    assert!(s.x.to_px(before) < 0.0);
}

#[test]
fn degenerate_and_non_finite_domains_are_rejected() {
    assert!(matches!(
        ChartScales::build(500.0, 200.0, 3.0, 3.0),
        Err(ChartError::DegenerateDomain { .. })
    ));
    // inverted bounds would put larger values lower on screen
    assert!(matches!(
        ChartScales::build(500.0, 100.0, 10.0, 0.0),
        Err(ChartError::DegenerateDomain { min, max }) if min == 10.0 && max == 0.0
    ));
    assert!(ChartScales::build(500.0, 200.0, f64::NAN, 3.0).is_err());
    assert!(ChartScales::build(500.0, 200.0, 0.0, f64::INFINITY).is_err());
}
