// File: crates/chart-core/src/error.rs
// Summary: Typed errors for chart mutation and sampling helpers.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// A linearly spaced sequence needs at least one point.
    #[error("point count must be at least 1, got {0}")]
    InvalidPointCount(usize),

    #[error("x and y must have the same length, got {xs} and {ys}")]
    LengthMismatch { xs: usize, ys: usize },
}
