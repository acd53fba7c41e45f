// File: crates/plot2d/src/figure.rs
// Summary: Figure struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::grid::{linspace, GRID_COLS, GRID_ROWS};
use crate::plot::{ErrorBars, Plot2d, PlotKind};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Marker radius for point-style plots, in pixels.
const MARKER_RADIUS: f32 = 4.0;
/// Marker radius for scatter plots, in pixels.
const SCATTER_RADIUS: f32 = 3.0;
/// Half-length of error bar caps, in pixels.
const ERROR_CAP: f32 = 4.0;
/// Axis label font size.
const LABEL_SIZE: f32 = 15.0;
/// Legend text font size.
const LEGEND_SIZE: f32 = 13.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (labels, legend caption) for deterministic
    /// output across font environments.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// One chart: a single plot on a single pair of axes.
pub struct Figure {
    pub plot: Plot2d,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Figure {
    pub fn new(plot: Plot2d) -> Self {
        Self {
            plot,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Set axis label text.
    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.x_axis.label = xlabel.into();
        self.y_axis.label = ylabel.into();
        self
    }

    /// Set display limits from the data with the fixed padding heuristic
    /// (`[0.25*min, 1.25*max]` per axis). Fails on empty data.
    pub fn fit_limits(&mut self) -> Result<(), crate::PlotError> {
        self.x_axis.fit_to(&self.plot.x, "x")?;
        self.y_axis.fit_to(&self.plot.y, "y")?;
        Ok(())
    }

    /// Margins auto-adjusted to this figure's label configuration.
    pub fn tight_insets(&self) -> Insets {
        Insets::tight(!self.x_axis.label.is_empty(), !self.y_axis.label.is_empty())
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the figure and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and read back raw pixels: `(rgba, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_to_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        self.plot.check_lengths()?;

        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        // Background
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        // Grid & axes frame
        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);
        draw_axes_frame(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);

        // Scale helpers
        let xspan = (self.x_axis.max - self.x_axis.min).max(1e-9);
        let yspan = (self.y_axis.max - self.y_axis.min).max(1e-9);
        let l = plot_left as f32;
        let r = plot_right as f32;
        let t = plot_top as f32;
        let b = plot_bottom as f32;
        let x_min = self.x_axis.min;
        let y_min = self.y_axis.min;
        let sx = move |x: f64| -> f32 { l + ((x - x_min) / xspan) as f32 * (r - l) };
        let sy = move |y: f64| -> f32 { b - ((y - y_min) / yspan) as f32 * (b - t) };

        // Series by style
        match &self.plot.kind {
            PlotKind::Points => {
                draw_markers(canvas, &self.plot, &sx, &sy, MARKER_RADIUS, theme.marker_fill, None);
            }
            PlotKind::Line => {
                draw_polyline(canvas, &self.plot, &sx, &sy, theme);
            }
            PlotKind::PointsWithError(bars) => {
                draw_error_bars(canvas, &self.plot, bars, &sx, &sy, theme);
                draw_markers(
                    canvas,
                    &self.plot,
                    &sx,
                    &sy,
                    MARKER_RADIUS,
                    theme.marker_fill,
                    Some(theme.marker_edge),
                );
            }
            PlotKind::Scatter => {
                draw_markers(canvas, &self.plot, &sx, &sy, SCATTER_RADIUS, theme.scatter_fill, None);
            }
        }

        let shaper = TextShaper::new();

        // Legend: line style only, fixed lower-right corner
        if matches!(self.plot.kind, PlotKind::Line) {
            draw_legend(
                canvas,
                &shaper,
                self.plot.legend_label(),
                plot_right,
                plot_bottom,
                theme,
                opts.draw_labels,
            );
        }

        // Axis labels: x centered below the axis, y at mid-height in the left gutter
        if opts.draw_labels {
            if !self.x_axis.label.is_empty() {
                shaper.draw_centered(
                    canvas,
                    &self.x_axis.label,
                    (l + r) * 0.5,
                    b + 36.0,
                    LABEL_SIZE,
                    theme.axis_label,
                );
            }
            if !self.y_axis.label.is_empty() {
                shaper.draw_left(
                    canvas,
                    &self.y_axis.label,
                    12.0,
                    (t + b) * 0.5,
                    LABEL_SIZE,
                    theme.axis_label,
                );
            }
        }

        Ok(surface)
    }
}

/// Explicit registry of figures, flushed together to numbered PNG files.
#[derive(Default)]
pub struct FigureSet {
    figures: Vec<Figure>,
}

impl FigureSet {
    pub fn new() -> Self {
        Self { figures: Vec::new() }
    }

    pub fn push(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Render every registered figure to `dir` as `figure_NNN.png`.
    /// With no figures this writes nothing and succeeds.
    pub fn render_all(
        &self,
        opts: &RenderOptions,
        dir: impl AsRef<std::path::Path>,
    ) -> Result<Vec<std::path::PathBuf>> {
        if self.figures.is_empty() {
            return Ok(Vec::new());
        }
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.figures.len());
        for (i, figure) in self.figures.iter().enumerate() {
            let path = dir.join(format!("figure_{i:03}.png"));
            figure.render_to_png(opts, &path)?;
            written.push(path);
        }
        Ok(written)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, GRID_COLS) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, GRID_ROWS) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes_frame(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_markers(
    canvas: &skia::Canvas,
    plot: &Plot2d,
    sx: &impl Fn(f64) -> f32,
    sy: &impl Fn(f64) -> f32,
    radius: f32,
    fill: skia::Color,
    edge: Option<skia::Color>,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(fill);

    let mut edge_paint = edge.map(|color| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(1.0);
        p.set_color(color);
        p
    });

    for (&x, &y) in plot.x.iter().zip(plot.y.iter()) {
        let px = sx(x);
        let py = sy(y);
        if !px.is_finite() || !py.is_finite() {
            continue;
        }
        canvas.draw_circle((px, py), radius, &paint);
        if let Some(p) = edge_paint.as_mut() {
            canvas.draw_circle((px, py), radius, p);
        }
    }
}

fn draw_polyline(
    canvas: &skia::Canvas,
    plot: &Plot2d,
    sx: &impl Fn(f64) -> f32,
    sy: &impl Fn(f64) -> f32,
    theme: &Theme,
) {
    if plot.x.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((sx(plot.x[0]), sy(plot.y[0])));
    for (&x, &y) in plot.x.iter().zip(plot.y.iter()).skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}

fn draw_error_bars(
    canvas: &skia::Canvas,
    plot: &Plot2d,
    bars: &ErrorBars,
    sx: &impl Fn(f64) -> f32,
    sy: &impl Fn(f64) -> f32,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(theme.error_bar);

    for i in 0..plot.x.len().min(bars.xerr.len()).min(bars.yerr.len()) {
        let x = plot.x[i];
        let y = plot.y[i];
        let x0 = sx(x - bars.xerr[i]);
        let x1 = sx(x + bars.xerr[i]);
        let y0 = sy(y - bars.yerr[i]);
        let y1 = sy(y + bars.yerr[i]);
        let px = sx(x);
        let py = sy(y);
        if ![x0, x1, y0, y1, px, py].iter().all(|v| v.is_finite()) {
            continue;
        }
        // Horizontal bar and caps
        canvas.draw_line((x0, py), (x1, py), &paint);
        canvas.draw_line((x0, py - ERROR_CAP), (x0, py + ERROR_CAP), &paint);
        canvas.draw_line((x1, py - ERROR_CAP), (x1, py + ERROR_CAP), &paint);
        // Vertical bar and caps
        canvas.draw_line((px, y0), (px, y1), &paint);
        canvas.draw_line((px - ERROR_CAP, y0), (px + ERROR_CAP, y0), &paint);
        canvas.draw_line((px - ERROR_CAP, y1), (px + ERROR_CAP, y1), &paint);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    label: &str,
    plot_right: i32,
    plot_bottom: i32,
    theme: &Theme,
    draw_text: bool,
) {
    let swatch = 18.0f32;
    let pad = 8.0f32;
    let text_w = if draw_text { shaper.measure_width(label, LEGEND_SIZE) } else { 0.0 };
    let box_w = swatch + pad * 3.0 + text_w;
    let box_h = 24.0f32;
    let right = plot_right as f32 - 12.0;
    let bottom = plot_bottom as f32 - 12.0;
    let rect = skia::Rect::from_ltrb(right - box_w, bottom - box_h, right, bottom);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(rect, &border);

    // Swatch line in the series color
    let mut swatch_paint = skia::Paint::default();
    swatch_paint.set_anti_alias(true);
    swatch_paint.set_style(skia::paint::Style::Stroke);
    swatch_paint.set_stroke_width(2.0);
    swatch_paint.set_color(theme.line_stroke);
    let sy_mid = bottom - box_h * 0.5;
    canvas.draw_line(
        (rect.left + pad, sy_mid),
        (rect.left + pad + swatch, sy_mid),
        &swatch_paint,
    );

    if draw_text {
        shaper.draw_left(
            canvas,
            label,
            rect.left + pad * 2.0 + swatch,
            sy_mid + LEGEND_SIZE * 0.4,
            LEGEND_SIZE,
            theme.legend_text,
        );
    }
}
