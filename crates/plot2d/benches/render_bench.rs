use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot2d::{Figure, Plot2d, RenderOptions};

fn build_figure(n: usize) -> Figure {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect();
    let mut figure = Figure::new(Plot2d::line(x, y));
    figure.fit_limits().expect("non-empty data");
    figure
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let figure = build_figure(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = figure.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
