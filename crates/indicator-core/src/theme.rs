// File: crates/indicator-core/src/theme.rs
// Summary: Light/Dark theming for indicator chart colors (shared by SVG and raster output).

use skia_safe as skia;

use crate::overlay::Party;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
    pub bubble_fill: skia::Color,
    pub bubble_text: skia::Color,
    pub democratic_fill: skia::Color,
    pub republican_fill: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 230),
            axis_label: skia::Color::from_argb(255, 120, 120, 120),
            line_stroke: skia::Color::from_argb(255, 51, 51, 51),
            bubble_fill: skia::Color::from_argb(255, 51, 51, 51),
            bubble_text: skia::Color::from_argb(255, 255, 255, 255),
            democratic_fill: skia::Color::from_argb(36, 81, 170, 222),
            republican_fill: skia::Color::from_argb(36, 248, 55, 65),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 235, 235, 245),
            bubble_fill: skia::Color::from_argb(255, 235, 235, 245),
            bubble_text: skia::Color::from_argb(255, 18, 18, 20),
            democratic_fill: skia::Color::from_argb(64, 64, 160, 255),
            republican_fill: skia::Color::from_argb(64, 220, 80, 80),
        }
    }

    pub fn party_fill(&self, party: Party) -> skia::Color {
        match party {
            Party::Democratic => self.democratic_fill,
            Party::Republican => self.republican_fill,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// CSS color for SVG output; translucent colors become `rgba(...)`.
pub fn css(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}
