// File: crates/indicator-core/tests/axes.rs
// Purpose: Validate tick sets, tick thinning on narrow layouts, sign formatting and gridline spans.

use chrono::NaiveDate;
use indicator_core::axis::{format_tick, render_axes, x_tick_dates, y_tick_values};
use indicator_core::{ChartError, ChartScales, Frequency, MetricKey, MetricSeries};

fn metric(ticks: Vec<f64>, show_plus: bool) -> MetricSeries {
    MetricSeries {
        name: "GDP growth".into(),
        description: String::new(),
        source_label: String::new(),
        source_url: String::new(),
        last_updated: String::new(),
        frequency: Frequency::Annual,
        points: Vec::new(),
        min_value: -4.0,
        max_value: 4.0,
        tick_values: ticks,
        show_plus_sign: show_plus,
        label: "+4%".into(),
    }
}

#[test]
fn sign_formatting() {
    assert_eq!(format_tick(4.0, true), "+4");
    assert_eq!(format_tick(-2.0, true), "-2");
    assert_eq!(format_tick(0.0, true), "0");
    assert_eq!(format_tick(-0.0, true), "0");
    assert_eq!(format_tick(2.5, true), "+2.5");
    assert_eq!(format_tick(4.0, false), "4");
    assert_eq!(format_tick(-3.0, false), "-3");
}

#[test]
fn x_ticks_are_six_fixed_years() {
    let years: Vec<_> = x_tick_dates().iter().map(|d| d.format("%Y").to_string()).collect();
    assert_eq!(years, ["2000", "2004", "2008", "2012", "2016", "2020"]);
    assert_eq!(x_tick_dates()[0], NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
}

#[test]
fn mobile_thins_value_ticks_to_first_middle_last() {
    let ticks = [-4.0, -2.0, 0.0, 2.0, 4.0];
    assert_eq!(y_tick_values(MetricKey::Gdp, &ticks, false).unwrap(), ticks.to_vec());
    assert_eq!(y_tick_values(MetricKey::Gdp, &ticks, true).unwrap(), vec![-4.0, 0.0, 4.0]);
}

#[test]
fn wrong_tick_cardinality_fails_loudly_in_both_layouts() {
    for mobile in [true, false] {
        let err = y_tick_values(MetricKey::Gas, &[0.0, 1.0, 2.0], mobile).unwrap_err();
        match err {
            ChartError::TickCardinality { key, expected, found } => {
                assert_eq!(key, "gas");
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn axes_and_gridlines_for_desktop_and_mobile() {
    let scales = ChartScales::build(955.0, 166.0, -4.0, 4.0).unwrap();
    let m = metric(vec![-4.0, -2.0, 0.0, 2.0, 4.0], true);

    let desktop = render_axes(&scales, MetricKey::Gdp, &m, false).unwrap();
    assert_eq!(desktop.x_axis.ticks.len(), 6);
    assert_eq!(desktop.y_axis.ticks.len(), 5);
    let labels: Vec<_> = desktop.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["-4", "-2", "0", "+2", "+4"]);

    // gridlines reuse tick positions and span the opposite dimension
    for (g, t) in desktop.y_grid.iter().zip(&desktop.y_axis.ticks) {
        assert_eq!((g.x1, g.x2), (0.0, 955.0));
        assert_eq!((g.y1, g.y2), (t.pos, t.pos));
    }
    for (g, t) in desktop.x_grid.iter().zip(&desktop.x_axis.ticks) {
        assert_eq!((g.y1, g.y2), (0.0, 166.0));
        assert_eq!((g.x1, g.x2), (t.pos, t.pos));
    }

    let mobile = render_axes(&scales, MetricKey::Gdp, &m, true).unwrap();
    assert_eq!(mobile.x_axis.ticks.len(), 6);
    assert_eq!(mobile.y_axis.ticks.len(), 3);
    assert_eq!(mobile.y_grid.len(), 3);
    assert_eq!(mobile.x_axis, desktop.x_axis);
}
