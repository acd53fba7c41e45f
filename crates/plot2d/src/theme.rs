// File: crates/plot2d/src/theme.rs
// Summary: Color palettes for chart rendering; light (plain white) is the default.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_edge: skia::Color,
    pub line_stroke: skia::Color,
    pub error_bar: skia::Color,
    pub scatter_fill: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    /// Plain white background with the fixed preset series colors.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            marker_fill: skia::Color::from_argb(255, 214, 39, 40),
            marker_edge: skia::Color::from_argb(255, 60, 60, 70),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            error_bar: skia::Color::from_argb(255, 0, 0, 0),
            scatter_fill: skia::Color::from_argb(255, 44, 160, 44),
            legend_fill: skia::Color::from_argb(240, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 180, 180, 190),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            marker_fill: skia::Color::from_argb(255, 255, 99, 99),
            marker_edge: skia::Color::from_argb(255, 200, 200, 210),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            error_bar: skia::Color::from_argb(255, 220, 220, 230),
            scatter_fill: skia::Color::from_argb(255, 80, 200, 120),
            legend_fill: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
