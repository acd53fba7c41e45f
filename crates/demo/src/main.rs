// File: crates/demo/src/main.rs
// Summary: Demo loads an XY CSV (optionally with error columns) and renders every chart style to PNGs.

use anyhow::{Context, Result};
use plot2d::{theme, Figure, FigureSet, Plot2d, RenderOptions};
use std::path::{Path, PathBuf};

struct Columns {
    x: Vec<f64>,
    y: Vec<f64>,
    xerr: Option<Vec<f64>>,
    yerr: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "sample_xy.csv".to_string());
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let cols = load_xy_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", cols.x.len());

    if cols.x.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);
    println!("Theme: {}", opts.theme.name);

    let mut set = FigureSet::new();

    // 1) Points
    let mut fig = Figure::new(Plot2d::points(cols.x.clone(), cols.y.clone()))
        .with_labels("x", "y");
    fig.fit_limits()?;
    set.push(fig);

    // 2) Line with legend
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let mut fig = Figure::new(Plot2d::line(cols.x.clone(), cols.y.clone()).with_legend(stem))
        .with_labels("x", "y");
    fig.fit_limits()?;
    set.push(fig);

    // 3) Points with error bars, when error columns exist
    if let (Some(xerr), Some(yerr)) = (cols.xerr.clone(), cols.yerr.clone()) {
        let plot = Plot2d::points_with_errors(cols.x.clone(), cols.y.clone(), xerr, yerr)
            .context("error columns do not match data length")?;
        let mut fig = Figure::new(plot).with_labels("x", "y");
        fig.fit_limits()?;
        set.push(fig);
    } else {
        println!("No xerr/yerr columns; skipping the error-bar figure.");
    }

    let out_dir = PathBuf::from("target/out");
    let written = set.render_all(&opts, &out_dir)?;
    for p in &written {
        println!("Wrote {}", p.display());
    }

    // 4) Scatter rendered on its own, with margins collapsed around the
    // label-free surface.
    let mut fig = Figure::new(Plot2d::scatter(cols.x, cols.y));
    fig.fit_limits()?;
    let mut scatter_opts = RenderOptions::default();
    scatter_opts.theme = opts.theme;
    scatter_opts.insets = fig.tight_insets();
    let scatter_out = out_dir.join("scatter_tight.png");
    fig.render_to_png(&scatter_opts, &scatter_out)?;
    println!("Wrote {}", scatter_out.display());

    Ok(())
}

/// Load x/y columns (plus optional xerr/yerr) from a headered CSV.
fn load_xy_csv(path: &Path) -> Result<Columns> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "time", "index", "t"]);
    let i_y = idx(&["y", "value", "v"]);
    let i_xerr = idx(&["xerr", "x_err", "dx"]);
    let i_yerr = idx(&["yerr", "y_err", "dy"]);

    if i_y.is_none() {
        println!("Warning: Could not find a y/value column.");
    }

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut xerr = Vec::new();
    let mut yerr = Vec::new();
    let mut row_index = 0_f64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };

        let Some(yv) = parse(i_y) else { continue };
        let xv = parse(i_x).unwrap_or_else(|| {
            let v = row_index;
            row_index += 1.0;
            v
        });
        x.push(xv);
        y.push(yv);
        if let Some(v) = parse(i_xerr) {
            xerr.push(v);
        }
        if let Some(v) = parse(i_yerr) {
            yerr.push(v);
        }
    }

    // Only keep error columns when present on every row.
    let n = x.len();
    Ok(Columns {
        x,
        y,
        xerr: (xerr.len() == n && n > 0).then_some(xerr),
        yerr: (yerr.len() == n && n > 0).then_some(yerr),
    })
}
