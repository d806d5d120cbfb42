// File: crates/indicator-core/src/lib.rs
// Summary: Core library entry point; exports the responsive indicator chart engine.

pub mod axis;
pub mod chart;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod overlay;
pub mod scale;
pub mod scene;
pub mod series;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod throttle;
pub mod types;
pub mod view;

pub use chart::{draw_metric, render_to_png_bytes, write_png};
pub use controller::{ChartEngineState, HostFrame, LayoutController, NoopHost, RenderReport};
pub use dataset::{Dataset, Frequency, MetricKey, MetricSeries, DISPLAY_ORDER};
pub use error::{ChartError, ChartResult};
pub use scale::{ChartScales, TimeScale, ValueScale};
pub use scene::{ChartContainer, Page};
pub use text::{FixedAdvance, TextMeasure, TextShaper};
pub use theme::Theme;
pub use view::{LayoutConfig, LayoutMode, ViewportState};
