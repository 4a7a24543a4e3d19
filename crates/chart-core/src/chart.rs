// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, its axes-handle implementation, and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::annotate::AxesLike;
use crate::error::ChartError;
use crate::grid::linspace;
use crate::series::{LineDash, LineStyle, Series};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_limits(xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        let mut chart = Self::new();
        chart.set_xlim(xlim);
        chart.set_ylim(ylim);
        chart
    }

    pub fn set_xlim(&mut self, lim: (f64, f64)) { self.x_axis.set_limits(lim); }

    pub fn set_ylim(&mut self, lim: (f64, f64)) { self.y_axis.set_limits(lim); }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding y by `margin_frac` of its span.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let view = ViewState::from_chart(self, margin_frac);
        tracing::debug!(?view, "autoscale");
        view.apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    #[tracing::instrument(skip_all, fields(width = opts.width, height = opts.height, series = self.series.len()))]
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.background);

        let (l, t, r, b) = opts.insets.plot_rect(opts.width, opts.height);

        draw_grid(canvas, l, t, r, b)?;
        draw_axes(canvas, l, t, r, b);
        if opts.draw_labels {
            draw_labels(canvas, l, t, r, b, &self.x_axis, &self.y_axis);
        }

        // series stay inside the plot area
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for s in &self.series {
            draw_line_series(canvas, l, t, r, b, &self.x_axis, &self.y_axis, s);
        }
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl AxesLike for Chart {
    fn xlim(&self) -> (f64, f64) { self.x_axis.limits() }

    fn ylim(&self) -> (f64, f64) { self.y_axis.limits() }

    fn plot(&mut self, xs: &[f64], ys: &[f64], style: LineStyle) -> Result<(), ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        tracing::debug!(points = xs.len(), dash = ?style.dash, "plot line");
        self.add_series(Series::from_xy(xs, ys).with_style(style));
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) -> Result<()> {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 40, 40, 45));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 10)? {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6)? {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
    Ok(())
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 180, 180, 190));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, x: &Axis, y: &Axis) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(skia::Color::from_argb(255, 210, 210, 220));
    let mut font = skia::Font::default();
    font.set_size(14.0);

    canvas.draw_str(&x.label, (r as f32 - 80.0, b as f32 + 24.0), &font, &paint_text);
    canvas.draw_str(&y.label, (l as f32 - 56.0, t as f32 + 14.0), &font, &paint_text);

    // limit readouts at the axis ends
    let mut small = skia::Font::default();
    small.set_size(11.0);
    canvas.draw_str(format!("{:.3}", x.min), (l as f32, b as f32 + 16.0), &small, &paint_text);
    canvas.draw_str(format!("{:.3}", x.max), (r as f32 - 40.0, b as f32 + 16.0), &small, &paint_text);
    canvas.draw_str(format!("{:.3}", y.min), (l as f32 - 60.0, b as f32), &small, &paint_text);
    canvas.draw_str(format!("{:.3}", y.max), (l as f32 - 60.0, t as f32 + 30.0), &small, &paint_text);
}

fn stroke_paint(style: &LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.width);
    stroke.set_color(style.color);
    if style.dash != LineDash::Solid {
        let intervals: Vec<f32> = style.dash.intervals().iter().map(|v| v * style.width).collect();
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    if style.dash == LineDash::Dotted {
        stroke.set_stroke_cap(skia::paint::Cap::Round);
    }
    stroke
}

#[allow(clippy::too_many_arguments)]
fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Scale helpers
    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(x0), sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    canvas.draw_path(&path, &stroke_paint(&series.style));
}
