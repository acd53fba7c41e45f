// File: crates/plot2d/tests/limits.rs
// Purpose: Validate the fixed display-limit padding, including its inherited quirk.

use plot2d::{Figure, Plot2d, PlotError};

#[test]
fn padded_limits_basic() {
    let mut figure = Figure::new(Plot2d::points(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]));
    figure.fit_limits().expect("non-empty data");

    assert!((figure.x_axis.min - 0.25).abs() < 1e-12);
    assert!((figure.x_axis.max - 3.75).abs() < 1e-12);
    assert!((figure.y_axis.min - 0.25).abs() < 1e-12);
    assert!((figure.y_axis.max - 3.75).abs() < 1e-12);
}

#[test]
fn padded_limits_negative_quirk() {
    // Documented quirk: 0.25*min > 1.25*max when all values are negative.
    let mut figure = Figure::new(Plot2d::points(vec![-4.0, -2.0], vec![-4.0, -2.0]));
    figure.fit_limits().expect("non-empty data");

    assert!((figure.x_axis.min - (-1.0)).abs() < 1e-12);
    assert!((figure.x_axis.max - (-2.5)).abs() < 1e-12);
    assert!(figure.x_axis.min > figure.x_axis.max, "range is inverted by design of the heuristic");
}

#[test]
fn empty_data_is_an_error() {
    let mut figure = Figure::new(Plot2d::points(Vec::new(), Vec::new()));
    let err = figure.fit_limits().expect_err("empty data must fail");
    assert_eq!(err, PlotError::EmptyData { what: "x" });
}

#[test]
fn empty_y_is_an_error() {
    // x passes, y is the empty side.
    let mut figure = Figure::new(Plot2d::points(vec![1.0], Vec::new()));
    let err = figure.fit_limits().expect_err("empty y must fail");
    assert_eq!(err, PlotError::EmptyData { what: "y" });
}
