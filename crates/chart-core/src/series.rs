// File: crates/chart-core/src/series.rs
// Summary: Line series data and the stroke style used to render it.

use skia_safe as skia;

/// Dash pattern of a stroked line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineDash {
    /// On/off interval lengths in units of stroke width; empty for solid lines.
    pub fn intervals(self) -> &'static [f32] {
        match self {
            LineDash::Solid => &[],
            LineDash::Dashed => &[3.7, 1.6],
            LineDash::Dotted => &[1.0, 1.65],
            LineDash::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub dash: LineDash,
    pub color: skia::Color,
    pub width: f32,
}

impl LineStyle {
    pub fn solid(color: skia::Color) -> Self {
        Self { dash: LineDash::Solid, color, width: 2.0 }
    }

    /// Dotted gray line for guides drawn over the data.
    pub fn reference() -> Self {
        Self { dash: LineDash::Dotted, color: gray(), width: 1.5 }
    }

    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(skia::Color::from_argb(255, 64, 160, 255))
    }
}

/// Mid gray, `#808080`.
pub fn gray() -> skia::Color {
    skia::Color::from_argb(255, 128, 128, 128)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub style: LineStyle,
}

impl Series {
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, style: LineStyle::default() }
    }

    /// Zip separate coordinate slices into points. Extra values on the longer side are dropped.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        Self::with_data(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

impl Default for Series {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_patterns_come_in_on_off_pairs() {
        assert!(LineDash::Solid.intervals().is_empty());
        for dash in [LineDash::Dashed, LineDash::Dotted, LineDash::DashDot] {
            let iv = dash.intervals();
            assert!(!iv.is_empty() && iv.len() % 2 == 0, "{dash:?}");
            assert!(iv.iter().all(|v| *v > 0.0));
        }
        assert_eq!(LineDash::DashDot.intervals().len(), 4);
    }

    #[test]
    fn builders_override_style() {
        let s = LineStyle::reference().with_dash(LineDash::DashDot).with_width(3.0);
        assert_eq!(s.dash, LineDash::DashDot);
        assert_eq!(s.width, 3.0);
        assert_eq!(s.color, gray());
    }
}
