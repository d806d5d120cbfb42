// File: crates/indicator-core/src/dataset.rs
// Summary: Indicator dataset model: metric registry, per-metric series with parsed dates, JSON loading.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// The indicators the page shows, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKey {
    Gdp,
    Unemployment,
    Jobs,
    Wages,
    Inflation,
    Stocks,
    Sentiment,
    Gas,
    Deficit,
}

/// Fixed order in which charts are laid out on the page.
pub const DISPLAY_ORDER: [MetricKey; 9] = [
    MetricKey::Gdp,
    MetricKey::Unemployment,
    MetricKey::Jobs,
    MetricKey::Wages,
    MetricKey::Inflation,
    MetricKey::Stocks,
    MetricKey::Sentiment,
    MetricKey::Gas,
    MetricKey::Deficit,
];

impl MetricKey {
    /// Key used in the input JSON and as the container id.
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricKey::Gdp => "gdp",
            MetricKey::Unemployment => "unemployment",
            MetricKey::Jobs => "jobs",
            MetricKey::Wages => "wages",
            MetricKey::Inflation => "inflation",
            MetricKey::Stocks => "stocks",
            MetricKey::Sentiment => "sentiment",
            MetricKey::Gas => "gas",
            MetricKey::Deficit => "deficit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        DISPLAY_ORDER.iter().copied().find(|k| k.as_str() == key)
    }

    /// Selector of the chart container the host page provides for this metric.
    pub fn selector(self) -> String {
        format!("#{} .chart", self.as_str())
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Frequency {
    #[serde(alias = "annual", alias = "ANNUAL")]
    Annual,
    #[serde(alias = "monthly", alias = "MONTHLY")]
    Monthly,
    #[serde(alias = "daily", alias = "DAILY")]
    Daily,
}

impl Frequency {
    /// Parse a period label into its calendar date.
    ///
    /// Annual periods map to January 1, monthly periods to the first of the month.
    pub fn parse_period(self, period: &str) -> ChartResult<NaiveDate> {
        let p = period.trim();
        let parsed = match self {
            Frequency::Annual => p
                .parse::<i32>()
                .ok()
                .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
            Frequency::Monthly => NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(p, "%Y-%m-%d"))
                .ok(),
            Frequency::Daily => NaiveDate::parse_from_str(p, "%Y-%m-%d").ok(),
        };
        parsed.ok_or_else(|| ChartError::InvalidPeriod { period: period.to_string(), frequency: self })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub period: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// One indicator, immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    pub description: String,
    pub source_label: String,
    pub source_url: String,
    pub last_updated: String,
    pub frequency: Frequency,
    /// Sorted by date, ascending.
    pub points: Vec<DataPoint>,
    pub min_value: f64,
    pub max_value: f64,
    pub tick_values: Vec<f64>,
    pub show_plus_sign: bool,
    pub label: String,
}

// ---- input contract ---------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPeriod {
    Text(String),
    Number(i64),
}

impl RawPeriod {
    fn into_string(self) -> String {
        match self {
            RawPeriod::Text(s) => s,
            RawPeriod::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    period: RawPeriod,
    value: f64,
}

/// Record shape delivered by the data loader for each metric key.
#[derive(Debug, Deserialize)]
pub struct RawMetric {
    metric: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    last_updated: String,
    frequency: Frequency,
    data: Vec<RawPoint>,
    min: f64,
    max: f64,
    ticks: Vec<f64>,
    #[serde(default)]
    show_plus: bool,
    #[serde(default)]
    label: String,
}

impl MetricSeries {
    /// Normalize a raw record: parse each period by the metric's frequency and sort by date.
    pub fn from_raw(raw: RawMetric) -> ChartResult<Self> {
        let frequency = raw.frequency;
        let mut points = raw
            .data
            .into_iter()
            .map(|p| {
                let period = p.period.into_string();
                let date = frequency.parse_period(&period)?;
                Ok(DataPoint { period, date, value: p.value })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        points.sort_by_key(|p| p.date);

        Ok(Self {
            name: raw.metric,
            description: raw.description,
            source_label: raw.source,
            source_url: raw.url,
            last_updated: raw.last_updated,
            frequency,
            points,
            min_value: raw.min,
            max_value: raw.max,
            tick_values: raw.ticks,
            show_plus_sign: raw.show_plus,
            label: raw.label,
        })
    }
}

/// Metric records keyed by registry entry.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    metrics: HashMap<MetricKey, MetricSeries>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    /// Load the loader's JSON object.
    ///
    /// The document itself must be a JSON object. A record that fails to parse is
    /// dropped with a warning so only that metric's chart is affected; keys outside
    /// the registry are ignored.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut ds = Self::new();
        for (key, value) in raw {
            let Some(metric) = MetricKey::from_key(&key) else {
                debug!(key = %key, "ignoring metric outside the display order");
                continue;
            };
            let parsed = serde_json::from_value::<RawMetric>(value)
                .map_err(ChartError::from)
                .and_then(MetricSeries::from_raw);
            match parsed {
                Ok(series) => ds.insert(metric, series),
                Err(err) => warn!(metric = %metric, error = %err, "dropping malformed metric record"),
            }
        }
        debug!(metrics = ds.len(), "dataset loaded");
        Ok(ds)
    }

    pub fn insert(&mut self, key: MetricKey, series: MetricSeries) {
        self.metrics.insert(key, series);
    }

    pub fn len(&self) -> usize { self.metrics.len() }

    pub fn is_empty(&self) -> bool { self.metrics.is_empty() }

    pub fn get(&self, key: MetricKey) -> ChartResult<&MetricSeries> {
        self.metrics
            .get(&key)
            .ok_or_else(|| ChartError::MissingMetric { key: key.as_str().to_string() })
    }

    /// Walk the registry in display order, reporting each missing metric in place.
    pub fn in_display_order(&self) -> impl Iterator<Item = (MetricKey, ChartResult<&MetricSeries>)> + '_ {
        DISPLAY_ORDER.iter().map(move |&k| (k, self.get(k)))
    }
}
