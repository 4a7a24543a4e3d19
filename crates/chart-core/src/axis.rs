// File: crates/chart-core/src/axis.rs
// Summary: Axis model with a label and the current view limits.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("y", 0.0, 1.0) }

    /// View limits as `(low, high)`, in the order they were set.
    pub fn limits(&self) -> (f64, f64) { (self.min, self.max) }

    pub fn set_limits(&mut self, (min, max): (f64, f64)) {
        self.min = min;
        self.max = max;
    }
}
