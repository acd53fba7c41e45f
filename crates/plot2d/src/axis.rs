// File: crates/plot2d/src/axis.rs
// Summary: Axis model with label and display limits.

use crate::error::PlotError;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    /// Apply the fixed display padding: `[0.25*min, 1.25*max]`.
    ///
    /// Inherited quirk, kept as-is: when extrema are negative the range comes
    /// out inverted or degenerate (0.25*min exceeds 1.25*max). Callers get
    /// exactly what they asked for.
    pub fn fit_to(&mut self, values: &[f64], what: &'static str) -> Result<(), PlotError> {
        let (min, max) = minmax(values).ok_or(PlotError::EmptyData { what })?;
        self.min = 0.25 * min;
        self.max = 1.25 * max;
        Ok(())
    }
}

fn minmax(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    let mut min = first;
    let mut max = first;
    for v in it {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}
