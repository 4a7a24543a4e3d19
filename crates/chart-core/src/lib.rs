// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the axis helpers, chart model and rendering API.

pub mod annotate;
pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod series;
pub mod types;
pub mod view;

pub use annotate::{lims_xy, plot_diag, x_linspace, x_linspace_default, AxesLike, DEFAULT_LINSPACE_POINTS};
pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use series::{LineDash, LineStyle, Series};
pub use view::ViewState;
