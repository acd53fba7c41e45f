// File: crates/plot2d/src/grid.rs
// Summary: Grid line layout for the plotting surface.

/// Vertical grid line count across the plot rect.
pub const GRID_COLS: usize = 10;
/// Horizontal grid line count across the plot rect.
pub const GRID_ROWS: usize = 6;

/// Evenly spaced positions from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
