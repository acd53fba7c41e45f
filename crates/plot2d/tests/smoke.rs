// File: crates/plot2d/tests/smoke.rs
// Purpose: End-to-end render smoke tests covering every chart style.

use plot2d::{Figure, Plot2d, RenderOptions};

fn sample_xy() -> (Vec<f64>, Vec<f64>) {
    (
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0, 2.0, 1.0, 3.5, 2.5],
    )
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

#[test]
fn render_smoke_png() {
    let (x, y) = sample_xy();
    let mut figure = Figure::new(Plot2d::line(x, y)).with_labels("X", "Y");
    figure.fit_limits().expect("non-empty data");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    figure.render_to_png(&opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = figure.render_to_png_bytes(&opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn every_style_renders() {
    let (x, y) = sample_xy();
    let plots = vec![
        Plot2d::points(x.clone(), y.clone()),
        Plot2d::line(x.clone(), y.clone()).with_legend("series A"),
        Plot2d::points_with_errors(
            x.clone(),
            y.clone(),
            vec![0.1; x.len()],
            vec![0.2; x.len()],
        )
        .expect("matching error lengths"),
        Plot2d::scatter(x, y),
    ];

    for plot in plots {
        let mut figure = Figure::new(plot);
        figure.fit_limits().expect("non-empty data");
        let bytes = figure.render_to_png_bytes(&opts()).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]));
    }
}

#[test]
fn tight_insets_collapse_without_labels() {
    let (x, y) = sample_xy();
    let labelled = Figure::new(Plot2d::line(x.clone(), y.clone())).with_labels("X", "Y");
    let bare = Figure::new(Plot2d::line(x, y));

    let full = labelled.tight_insets();
    let tight = bare.tight_insets();
    assert!(tight.left < full.left);
    assert!(tight.bottom < full.bottom);

    let mut opts = opts();
    opts.insets = tight;
    let mut figure = bare;
    figure.fit_limits().expect("non-empty data");
    figure.render_to_png_bytes(&opts).expect("render with tight insets");
}

#[test]
fn single_point_renders() {
    // A one-point line degenerates to nothing drawable but must not fail.
    let mut figure = Figure::new(Plot2d::line(vec![1.0], vec![2.0]));
    figure.fit_limits().expect("one element is enough");
    figure.render_to_png_bytes(&opts()).expect("render bytes");
}
