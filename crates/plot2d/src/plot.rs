// File: crates/plot2d/src/plot.rs
// Summary: Plot model for the preset chart styles (points, line, error bars, scatter).
// Notes:
// - The style set is a closed enum; each variant maps to exactly one render
//   policy in `figure.rs`.
// - Error-bar data is required at construction, so an error-bar plot cannot
//   exist without it.

use crate::error::PlotError;

#[derive(Clone, Debug)]
pub enum PlotKind {
    /// Discrete markers, no connecting line, no legend.
    Points,
    /// Connected line; the only variant that renders a legend box.
    Line,
    /// Markers with symmetric error bars in both dimensions.
    PointsWithError(ErrorBars),
    /// Unconnected markers drawn one-by-one.
    Scatter,
}

/// Symmetric error magnitudes per data point.
#[derive(Clone, Debug)]
pub struct ErrorBars {
    pub xerr: Vec<f64>,
    pub yerr: Vec<f64>,
}

impl ErrorBars {
    /// Construct error magnitudes, checking both vectors against the
    /// expected series length.
    pub fn new(xerr: Vec<f64>, yerr: Vec<f64>, expected: usize) -> Result<Self, PlotError> {
        if xerr.len() != expected {
            return Err(PlotError::LengthMismatch {
                what: "xerr",
                expected,
                got: xerr.len(),
            });
        }
        if yerr.len() != expected {
            return Err(PlotError::LengthMismatch {
                what: "yerr",
                expected,
                got: yerr.len(),
            });
        }
        Ok(Self { xerr, yerr })
    }
}

#[derive(Clone, Debug)]
pub struct Plot2d {
    pub kind: PlotKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Legend label; only the `Line` style renders it. Unset reads as empty.
    pub legend: Option<String>,
}

impl Plot2d {
    fn with_kind(kind: PlotKind, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { kind, x, y, legend: None }
    }

    /// Discrete marker plot. Lengths are not checked here; render reports a
    /// mismatch when it occurs.
    pub fn points(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::with_kind(PlotKind::Points, x, y)
    }

    /// Connected line plot.
    pub fn line(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::with_kind(PlotKind::Line, x, y)
    }

    /// Scatter plot of unconnected markers.
    pub fn scatter(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::with_kind(PlotKind::Scatter, x, y)
    }

    /// Marker plot with symmetric error bars. Fails when `xerr`/`yerr`
    /// lengths do not match `x`.
    pub fn points_with_errors(
        x: Vec<f64>,
        y: Vec<f64>,
        xerr: Vec<f64>,
        yerr: Vec<f64>,
    ) -> Result<Self, PlotError> {
        let bars = ErrorBars::new(xerr, yerr, x.len())?;
        Ok(Self::with_kind(PlotKind::PointsWithError(bars), x, y))
    }

    /// Attach a legend label for styles that render one.
    pub fn with_legend(mut self, label: impl Into<String>) -> Self {
        self.legend = Some(label.into());
        self
    }

    /// Legend label or empty when never set.
    pub fn legend_label(&self) -> &str {
        self.legend.as_deref().unwrap_or("")
    }

    /// Check that `x` and `y` agree in length before drawing.
    pub fn check_lengths(&self) -> Result<(), PlotError> {
        if self.y.len() != self.x.len() {
            return Err(PlotError::LengthMismatch {
                what: "y",
                expected: self.x.len(),
                got: self.y.len(),
            });
        }
        Ok(())
    }
}
