// File: crates/demo/src/main.rs
// Summary: Demo renders noisy measurements against a fitted curve with a y = x guide, writing a PNG.

use anyhow::{Context, Result};
use chart_core::series::gray;
use chart_core::{lims_xy, plot_diag, x_linspace_default, AxesLike, Chart, LineDash, LineStyle, RenderOptions, Series};
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/guides.png"));

    // predicted vs. observed, biased above the diagonal
    let points: Vec<(f64, f64)> = (0..40)
        .map(|i| {
            let x = i as f64 * 0.25;
            let wobble = ((i * 7919) % 13) as f64 / 13.0 - 0.5;
            (x, 1.1 * x + 0.4 + wobble)
        })
        .collect();

    let mut chart = Chart::new();
    chart.x_axis.label = "predicted".into();
    chart.y_axis.label = "observed".into();
    chart.add_series(Series::with_data(points));
    chart.autoscale_axes(0.02);

    let [lo, hi] = lims_xy(&chart);
    tracing::info!(lo, hi, "combined limits");

    // sample the fitted model across the visible x range
    let xs = x_linspace_default(&chart)?;
    let ys: Vec<f64> = xs.iter().map(|x| 1.1 * x + 0.4).collect();
    let fit = LineStyle::solid(gray()).with_dash(LineDash::Dashed).with_width(1.0);
    chart.plot(&xs, &ys, fit)?;

    plot_diag(&mut chart)?;

    chart
        .render_to_png(&RenderOptions::default(), &out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
