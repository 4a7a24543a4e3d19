// File: crates/chart-core/src/annotate.rs
// Summary: Helpers that read an axes handle's view limits to derive ranges and draw guide lines.

use crate::error::ChartError;
use crate::grid::linspace;
use crate::series::LineStyle;

/// Number of samples produced by [`x_linspace_default`].
pub const DEFAULT_LINSPACE_POINTS: usize = 500;

/// A chart coordinate system that exposes its view limits and can take new lines.
///
/// The helpers in this module only ever borrow the handle for one call.
pub trait AxesLike {
    /// Current x view limits as `(low, high)`.
    fn xlim(&self) -> (f64, f64);
    /// Current y view limits as `(low, high)`.
    fn ylim(&self) -> (f64, f64);
    /// Add one line through the points `(xs[i], ys[i])`.
    fn plot(&mut self, xs: &[f64], ys: &[f64], style: LineStyle) -> Result<(), ChartError>;
}

/// `[min, max]` over both ends of the x and y limits.
///
/// A NaN at any end poisons both bounds: the result is `[NaN, NaN]`.
pub fn lims_xy<A: AxesLike + ?Sized>(ax: &A) -> [f64; 2] {
    let (x0, x1) = ax.xlim();
    let (y0, y1) = ax.ylim();
    let ends = [x0, x1, y0, y1];
    if ends.iter().any(|v| v.is_nan()) {
        return [f64::NAN, f64::NAN];
    }
    let lo = ends.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = ends.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [lo, hi]
}

/// Draw the dotted gray `y = x` line across the combined limits of `ax`.
pub fn plot_diag<A: AxesLike + ?Sized>(ax: &mut A) -> Result<(), ChartError> {
    let lims = lims_xy(&*ax);
    ax.plot(&lims, &lims, LineStyle::reference())
}

/// `n` evenly spaced values spanning the current x limits, endpoints included.
pub fn x_linspace<A: AxesLike + ?Sized>(ax: &A, n: usize) -> Result<Vec<f64>, ChartError> {
    let (lo, hi) = ax.xlim();
    linspace(lo, hi, n)
}

/// [`x_linspace`] with [`DEFAULT_LINSPACE_POINTS`] samples.
pub fn x_linspace_default<A: AxesLike + ?Sized>(ax: &A) -> Result<Vec<f64>, ChartError> {
    x_linspace(ax, DEFAULT_LINSPACE_POINTS)
}
