// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test of a chart with guide lines, writing a PNG.

use chart_core::{plot_diag, x_linspace, AxesLike, Chart, LineStyle, RenderOptions};
use chart_core::types::Insets;

fn guided_chart() -> Chart {
    let mut chart = Chart::with_limits((0.0, 4.0), (0.0, 4.0));
    let xs = x_linspace(&chart, 50).expect("linspace");
    let ys: Vec<f64> = xs.iter().map(|x| x * x / 4.0).collect();
    chart.plot(&xs, &ys, LineStyle::default()).expect("plot curve");
    plot_diag(&mut chart).expect("plot diag");
    chart
}

#[test]
fn render_smoke_png() {
    let chart = guided_chart();
    assert_eq!(chart.series.len(), 2);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rendered_size_matches_options() {
    let chart = guided_chart();
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    // background is opaque
    assert_eq!(img.get_pixel(0, 0)[3], 255);
}

#[test]
fn diagonal_is_drawn_in_gray() {
    let mut chart = Chart::with_limits((0.0, 4.0), (0.0, 4.0));
    plot_diag(&mut chart).expect("plot diag");

    // square 300x300 plot area so the diagonal runs at 45 degrees
    let insets = Insets::default();
    let side = 300;
    let mut opts = RenderOptions::default();
    opts.width = insets.left as i32 + insets.right as i32 + side;
    opts.height = insets.top as i32 + insets.bottom as i32 + side;
    opts.draw_labels = false;

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();

    let (l, b) = (insets.left as u32, insets.top as u32 + side as u32);
    let is_gray = |p: &image::Rgba<u8>| {
        let [r, g, bl, _] = p.0;
        r >= 100 && r.abs_diff(g) <= 4 && r.abs_diff(bl) <= 8
    };
    // pixel centers of (l + k, b - 1 - k) lie on the line from (l, b) to (r, t)
    let on_line = (1..side as u32 - 1).map(|k| img.get_pixel(l + k, b - 1 - k)).collect::<Vec<_>>();
    let gray = on_line.iter().filter(|p| is_gray(*p)).count();
    assert!(gray >= 20, "expected gray dots along the diagonal, found {gray}");

    // nothing gray off the line, e.g. the opposite corner of the plot area
    assert!(!is_gray(img.get_pixel(l + 10, insets.top + 10)));
}
