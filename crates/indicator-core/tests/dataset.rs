// File: crates/indicator-core/tests/dataset.rs
// Purpose: Validate dataset loading: registry coverage, period parsing per frequency, ordering, isolation.

use chrono::NaiveDate;
use indicator_core::{ChartError, Dataset, Frequency, MetricKey, DISPLAY_ORDER};

fn fixture() -> Dataset {
    Dataset::from_json_str(include_str!("fixtures/indicators.json")).expect("fixture parses")
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fixture_covers_every_display_key_and_ignores_extras() {
    let ds = fixture();
    assert_eq!(ds.len(), DISPLAY_ORDER.len());
    for (key, metric) in ds.in_display_order() {
        assert!(metric.is_ok(), "missing {key}");
    }
}

#[test]
fn annual_periods_parse_to_january_first_and_keep_order() {
    let json = r#"{
        "gdp": {
            "metric": "GDP", "frequency": "Annual",
            "data": [{"period": "2010", "value": 2.1}, {"period": "2009", "value": -4.2}],
            "min": -5, "max": 5, "ticks": [-5, -2.5, 0, 2.5, 5], "show_plus": true, "label": "+5%"
        }
    }"#;
    let ds = Dataset::from_json_str(json).unwrap();
    let gdp = ds.get(MetricKey::Gdp).unwrap();
    let dates: Vec<_> = gdp.points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![ymd(2009, 1, 1), ymd(2010, 1, 1)]);
    assert_eq!(gdp.points[0].value, -4.2);
    assert_eq!(gdp.points[0].period, "2009");
}

#[test]
fn numeric_annual_periods_are_accepted() {
    let json = r#"{
        "jobs": {
            "metric": "Jobs", "frequency": "annual",
            "data": [{"period": 2001, "value": 1.0}],
            "min": 0, "max": 2, "ticks": [0, 0.5, 1, 1.5, 2]
        }
    }"#;
    let ds = Dataset::from_json_str(json).unwrap();
    assert_eq!(ds.get(MetricKey::Jobs).unwrap().points[0].date, ymd(2001, 1, 1));
}

#[test]
fn monthly_and_daily_periods() {
    assert_eq!(Frequency::Monthly.parse_period("2009-02").unwrap(), ymd(2009, 2, 1));
    assert_eq!(Frequency::Monthly.parse_period("2009-02-01").unwrap(), ymd(2009, 2, 1));
    assert_eq!(Frequency::Daily.parse_period("2016-12-31").unwrap(), ymd(2016, 12, 31));
    assert!(matches!(
        Frequency::Daily.parse_period("2016-12"),
        Err(ChartError::InvalidPeriod { .. })
    ));
    assert!(Frequency::Annual.parse_period("twenty").is_err());
}

#[test]
fn malformed_record_only_drops_that_metric() {
    let mut doc: serde_json::Value = serde_json::from_str(include_str!("fixtures/indicators.json")).unwrap();
    doc["wages"]["data"][0]["period"] = serde_json::json!("not-a-year");
    let ds = Dataset::from_json_str(&doc.to_string()).unwrap();
    assert_eq!(ds.len(), DISPLAY_ORDER.len() - 1);
    assert!(matches!(ds.get(MetricKey::Wages), Err(ChartError::MissingMetric { key }) if key == "wages"));
    assert!(ds.get(MetricKey::Gdp).is_ok());
}

#[test]
fn top_level_must_be_an_object() {
    assert!(matches!(Dataset::from_json_str("[1, 2]"), Err(ChartError::Json(_))));
}

#[test]
fn registry_keys_and_selectors() {
    assert_eq!(MetricKey::from_key("unemployment"), Some(MetricKey::Unemployment));
    assert_eq!(MetricKey::from_key("extra_metric"), None);
    assert_eq!(MetricKey::Gdp.selector(), "#gdp .chart");
    assert_eq!(DISPLAY_ORDER[0], MetricKey::Gdp);
    assert_eq!(DISPLAY_ORDER[8], MetricKey::Deficit);
}
