// File: crates/indicator-core/src/controller.rs
// Summary: Responsive layout controller: owns engine state, rebuilds every chart per pass, notifies the host.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::chart::draw_metric;
use crate::dataset::{Dataset, MetricKey};
use crate::error::ChartError;
use crate::scene::Page;
use crate::text::TextMeasure;
use crate::throttle::ResizeThrottle;
use crate::view::{LayoutConfig, LayoutMode, ViewportState};

/// The embedding frame. Told after every completed pass that content height may have changed.
pub trait HostFrame {
    fn content_height_changed(&mut self);
}

/// Host that ignores notifications (standalone rendering).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl HostFrame for NoopHost {
    fn content_height_changed(&mut self) {}
}

/// Everything a render pass reads: the immutable dataset and the last viewport snapshot.
#[derive(Clone, Debug)]
pub struct ChartEngineState {
    pub dataset: Dataset,
    pub viewport: Option<ViewportState>,
}

/// Outcome of one pass.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// `None` when the pass was skipped because the width was unmeasurable.
    pub viewport: Option<ViewportState>,
    pub rendered: Vec<MetricKey>,
    pub failures: Vec<(MetricKey, ChartError)>,
}

impl RenderReport {
    pub fn skipped(&self) -> bool { self.viewport.is_none() }
}

pub struct LayoutController<H: HostFrame, M: TextMeasure> {
    state: ChartEngineState,
    cfg: LayoutConfig,
    page: Page,
    host: H,
    measure: M,
    throttle: ResizeThrottle,
}

impl<H: HostFrame, M: TextMeasure> LayoutController<H, M> {
    pub fn new(dataset: Dataset, cfg: LayoutConfig, host: H, measure: M) -> Self {
        Self {
            state: ChartEngineState { dataset, viewport: None },
            throttle: ResizeThrottle::new(cfg.resize_interval),
            cfg,
            page: Page::new(),
            host,
            measure,
        }
    }

    pub fn page(&self) -> &Page { &self.page }
    pub fn state(&self) -> &ChartEngineState { &self.state }
    pub fn config(&self) -> &LayoutConfig { &self.cfg }
    pub fn host(&self) -> &H { &self.host }

    pub fn mode(&self) -> Option<LayoutMode> {
        self.state.viewport.map(|v| v.mode())
    }

    /// Full render pass at the measured container `width`.
    ///
    /// Unmeasurable widths skip the pass and leave the page as it was. Otherwise every
    /// container is cleared and redrawn; a metric that fails is left empty and reported.
    pub fn render(&mut self, width: f32) -> RenderReport {
        let Some(viewport) = ViewportState::measure(width, &self.cfg) else {
            debug!(width, "skipping render pass: container not measurable");
            return RenderReport::default();
        };
        if viewport.chart_dims(&self.cfg).is_empty() {
            debug!(width, "skipping render pass: no room inside insets");
            return RenderReport::default();
        }

        if let Some(prev) = self.state.viewport {
            if prev.mode() != viewport.mode() {
                info!(from = ?prev.mode(), to = ?viewport.mode(), width, "layout mode changed");
            }
        }
        self.state.viewport = Some(viewport);

        let mut report = RenderReport { viewport: Some(viewport), ..RenderReport::default() };
        for (key, metric) in self.state.dataset.in_display_order() {
            let Some(container) = self.page.container_mut(key) else { continue };
            let drawn = metric.and_then(|m| draw_metric(container, key, m, &viewport, &self.cfg, &self.measure));
            match drawn {
                Ok(()) => report.rendered.push(key),
                Err(err) => {
                    container.clear();
                    warn!(metric = %key, error = %err, "chart not rendered");
                    report.failures.push((key, err));
                }
            }
        }

        debug!(
            width,
            mobile = viewport.is_mobile,
            rendered = report.rendered.len(),
            failed = report.failures.len(),
            height = self.page.content_height(),
            "render pass complete"
        );
        self.host.content_height_changed();
        report
    }

    /// Resize event at `now`. Renders immediately unless a render ran within the
    /// throttle interval; then the width is kept for [`Self::flush`].
    pub fn on_resize(&mut self, width: f32, now: Instant) -> Option<RenderReport> {
        if self.throttle.hit(now, width) {
            Some(self.render(width))
        } else {
            None
        }
    }

    /// Run the coalesced trailing render, if one is owed and the interval has passed.
    pub fn flush(&mut self, now: Instant) -> Option<RenderReport> {
        let width = self.throttle.take_trailing(now)?;
        Some(self.render(width))
    }
}
