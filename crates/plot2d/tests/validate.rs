// File: crates/plot2d/tests/validate.rs
// Purpose: Length validation at construction (error bars) and at render (x/y).

use plot2d::{Figure, Plot2d, PlotError, RenderOptions};

#[test]
fn error_bars_require_matching_lengths() {
    let err = Plot2d::points_with_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.1, 0.1], // short
        vec![0.1, 0.1, 0.1],
    )
    .expect_err("short xerr must fail");
    assert_eq!(
        err,
        PlotError::LengthMismatch { what: "xerr", expected: 3, got: 2 }
    );

    let err = Plot2d::points_with_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.1, 0.1, 0.1],
        vec![0.1],
    )
    .expect_err("short yerr must fail");
    assert_eq!(
        err,
        PlotError::LengthMismatch { what: "yerr", expected: 3, got: 1 }
    );
}

#[test]
fn error_bars_with_matching_lengths_render() {
    let plot = Plot2d::points_with_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.2, 0.2, 0.2],
        vec![0.3, 0.3, 0.3],
    )
    .expect("matching lengths");
    let mut figure = Figure::new(plot);
    figure.fit_limits().expect("non-empty data");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    figure.render_to_png_bytes(&opts).expect("render bytes");
}

#[test]
fn mismatched_xy_fails_at_render() {
    let figure = Figure::new(Plot2d::points(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let err = figure.render_to_png_bytes(&opts).expect_err("mismatch must fail");
    let plot_err = err.downcast::<PlotError>().expect("typed validation error");
    assert_eq!(
        plot_err,
        PlotError::LengthMismatch { what: "y", expected: 3, got: 2 }
    );
}
