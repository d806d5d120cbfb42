// File: crates/indicator-core/src/axis.rs
// Summary: Axis ticks and labels for the shared time axis and each metric's value axis.

use chrono::NaiveDate;

use crate::dataset::{MetricKey, MetricSeries};
use crate::error::{ChartError, ChartResult};
use crate::geometry::Segment;
use crate::grid::{horizontal_gridlines, vertical_gridlines};
use crate::scale::ChartScales;
use crate::types::{MOBILE_Y_TICK_INDICES, X_TICK_YEARS, Y_TICK_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

/// One labelled tick, positioned along its axis in chart-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub ticks: Vec<Tick>,
}

/// Everything the axis pass draws for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSet {
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Vertical lines at the x ticks, full chart height.
    pub x_grid: Vec<Segment>,
    /// Horizontal lines at the y ticks, full chart width.
    pub y_grid: Vec<Segment>,
}

/// Label for a value tick. Only positive values ever gain a sign.
pub fn format_tick(v: f64, show_plus: bool) -> String {
    // normalize -0 to 0
    let v = if v == 0.0 { 0.0 } else { v };
    if v > 0.0 && show_plus {
        format!("+{v}")
    } else {
        format!("{v}")
    }
}

/// January 1 of each labelled year. Identical for every chart and layout.
pub fn x_tick_dates() -> Vec<NaiveDate> {
    X_TICK_YEARS.iter().filter_map(|&y| NaiveDate::from_ymd_opt(y, 1, 1)).collect()
}

/// Value ticks to draw. Requires exactly five configured values; mobile keeps first, middle, last.
pub fn y_tick_values(key: MetricKey, configured: &[f64], is_mobile: bool) -> ChartResult<Vec<f64>> {
    if configured.len() != Y_TICK_COUNT {
        return Err(ChartError::TickCardinality {
            key: key.as_str().to_string(),
            expected: Y_TICK_COUNT,
            found: configured.len(),
        });
    }
    if is_mobile {
        Ok(MOBILE_Y_TICK_INDICES.iter().map(|&i| configured[i]).collect())
    } else {
        Ok(configured.to_vec())
    }
}

/// Compute both axes and their gridlines. Chart size is taken from the scale ranges.
pub fn render_axes(scales: &ChartScales, key: MetricKey, metric: &MetricSeries, is_mobile: bool) -> ChartResult<AxisSet> {
    let chart_width = scales.x.right_px - scales.x.left_px;
    let chart_height = scales.y.bottom_px - scales.y.top_px;

    let x_ticks: Vec<Tick> = x_tick_dates()
        .into_iter()
        .map(|d| Tick { pos: scales.x.to_px(d), label: d.format("%Y").to_string() })
        .collect();

    let y_ticks: Vec<Tick> = y_tick_values(key, &metric.tick_values, is_mobile)?
        .into_iter()
        .map(|v| Tick { pos: scales.y.to_px(v), label: format_tick(v, metric.show_plus_sign) })
        .collect();

    let xs: Vec<f32> = x_ticks.iter().map(|t| t.pos).collect();
    let ys: Vec<f32> = y_ticks.iter().map(|t| t.pos).collect();

    Ok(AxisSet {
        x_grid: vertical_gridlines(&xs, chart_height),
        y_grid: horizontal_gridlines(&ys, chart_width),
        x_axis: Axis { side: AxisSide::Bottom, ticks: x_ticks },
        y_axis: Axis { side: AxisSide::Left, ticks: y_ticks },
    })
}
