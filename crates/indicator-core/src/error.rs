// File: crates/indicator-core/src/error.rs
// Summary: Error taxonomy for dataset loading and render passes.

use thiserror::Error;

use crate::dataset::Frequency;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("metric `{key}` is missing from the dataset")]
    MissingMetric { key: String },

    #[error("metric `{key}` needs exactly {expected} tick values, found {found}")]
    TickCardinality { key: String, expected: usize, found: usize },

    #[error("degenerate value domain [{min}, {max}]: max must exceed min")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("term `{term}` yields a negative band width ({width}px)")]
    NegativeBandWidth { term: String, width: f32 },

    #[error("period `{period}` does not match the {frequency:?} format")]
    InvalidPeriod { period: String, frequency: Frequency },

    #[error("invalid dataset json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node {index} of `{key}` is not an attached text node")]
    DetachedText { key: String, index: usize },

    #[error("raster output failed: {0}")]
    Raster(String),
}
