// File: crates/plot2d/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and background pixels.

use plot2d::{Figure, Plot2d, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let mut figure = Figure::new(Plot2d::line(vec![0.0, 4.0], vec![0.0, 4.0]));
    figure.fit_limits().expect("non-empty data");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Default theme clears to opaque white; check the top-left pixel (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
