// File: crates/indicator-core/src/scene.rs
// Summary: Retained scene tree: one chart container per metric, with full-replace redraws and SVG output.

use std::fmt::Write as _;

use crate::dataset::{MetricKey, DISPLAY_ORDER};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{fmt_px, Rect, Segment};
use crate::overlay::Party;
use crate::series::LinePath;
use crate::text::TextMeasure;
use crate::theme::{css, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Fill role of a rectangle; resolved to a color by the theme at output time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Term(Party),
    Bubble,
}

/// Text color role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    Axis,
    OnBubble,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Rect { id: Option<String>, class: &'static str, rect: Rect, fill: Fill },
    Line { class: &'static str, seg: Segment },
    Path { class: &'static str, path: LinePath },
    Text { class: &'static str, x: f32, y: f32, anchor: TextAnchor, size: f32, ink: Ink, content: String },
}

/// Handle to a node attached to a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

impl NodeId {
    /// Where this node sits after one node is inserted before it.
    pub(crate) fn shifted(self) -> Self { NodeId(self.0 + 1) }
}

/// The drawing surface the page provides for one metric (`#<key> .chart`).
///
/// Nodes are in chart-local pixels; `origin` is the plot's offset inside the container.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartContainer {
    pub key: MetricKey,
    pub width: f32,
    pub height: f32,
    pub origin: (f32, f32),
    nodes: Vec<Node>,
}

impl ChartContainer {
    pub fn new(key: MetricKey) -> Self {
        Self { key, width: 0.0, height: 0.0, origin: (0.0, 0.0), nodes: Vec::new() }
    }

    pub fn selector(&self) -> String { self.key.selector() }

    /// Drop all content and size. Every draw starts here.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.width = 0.0;
        self.height = 0.0;
        self.origin = (0.0, 0.0);
    }

    pub fn resize(&mut self, width: f32, height: f32, origin: (f32, f32)) {
        self.width = width;
        self.height = height;
        self.origin = origin;
    }

    pub fn append(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Insert `node` directly beneath the attached node `at` in paint order.
    pub fn insert_before(&mut self, at: NodeId, node: Node) -> NodeId {
        let idx = at.0.min(self.nodes.len());
        self.nodes.insert(idx, node);
        NodeId(idx)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> { self.nodes.get(id.0) }

    pub fn nodes(&self) -> &[Node] { &self.nodes }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Rendered width of an attached text node. Errors if `id` is not attached text.
    pub fn text_width(&self, id: NodeId, measure: &dyn TextMeasure) -> ChartResult<f32> {
        match self.get(id) {
            Some(Node::Text { content, size, .. }) => Ok(measure.measure_width(content, *size)),
            _ => Err(ChartError::DetachedText { key: self.key.as_str().to_string(), index: id.0 }),
        }
    }

    pub fn to_svg(&self, theme: &Theme) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" data-metric="{}">"#,
            fmt_px(self.width),
            fmt_px(self.height),
            self.key,
        );
        let _ = write!(out, r#"<g transform="translate({},{})">"#, fmt_px(self.origin.0), fmt_px(self.origin.1));
        for node in &self.nodes {
            write_node(&mut out, node, theme);
        }
        out.push_str("</g></svg>");
        out
    }
}

fn write_node(out: &mut String, node: &Node, theme: &Theme) {
    let _ = match node {
        Node::Rect { id, class, rect, fill } => {
            let color = match fill {
                Fill::Term(p) => theme.party_fill(*p),
                Fill::Bubble => theme.bubble_fill,
            };
            let id_attr = id.as_ref().map(|i| format!(r#" id="{i}""#)).unwrap_or_default();
            write!(
                out,
                r#"<rect{} class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                id_attr,
                class,
                fmt_px(rect.x),
                fmt_px(rect.y),
                fmt_px(rect.width),
                fmt_px(rect.height),
                css(color),
            )
        }
        Node::Line { class, seg } => write!(
            out,
            r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            class,
            fmt_px(seg.x1),
            fmt_px(seg.y1),
            fmt_px(seg.x2),
            fmt_px(seg.y2),
            css(theme.grid),
        ),
        Node::Path { class, path } => write!(
            out,
            r#"<path class="{}" d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            class,
            path.to_svg_d(),
            css(theme.line_stroke),
        ),
        Node::Text { class, x, y, anchor, size, ink, content } => {
            let color = match ink {
                Ink::Axis => theme.axis_label,
                Ink::OnBubble => theme.bubble_text,
            };
            write!(
                out,
                r#"<text class="{}" x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
                class,
                fmt_px(*x),
                fmt_px(*y),
                anchor.as_svg(),
                fmt_px(*size),
                css(color),
                escape_xml(content),
            )
        }
    };
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// All chart containers of the embedding page, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    containers: Vec<ChartContainer>,
}

impl Default for Page {
    fn default() -> Self { Self::new() }
}

impl Page {
    pub fn new() -> Self {
        Self { containers: DISPLAY_ORDER.iter().map(|&k| ChartContainer::new(k)).collect() }
    }

    pub fn container(&self, key: MetricKey) -> Option<&ChartContainer> {
        self.containers.iter().find(|c| c.key == key)
    }

    pub fn container_mut(&mut self, key: MetricKey) -> Option<&mut ChartContainer> {
        self.containers.iter_mut().find(|c| c.key == key)
    }

    pub fn containers(&self) -> &[ChartContainer] { &self.containers }

    /// Sum of all container heights; what the host frame ends up measuring.
    pub fn content_height(&self) -> f32 {
        self.containers.iter().map(|c| c.height).sum()
    }
}
