// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced sampling shared by grid layout and the axis helpers.

use crate::error::ChartError;

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
///
/// A single step yields `[start]`; zero steps is an error. The last value is
/// `end` exactly, so accumulated rounding never overshoots the range.
pub fn linspace(start: f64, end: f64, steps: usize) -> Result<Vec<f64>, ChartError> {
    match steps {
        0 => Err(ChartError::InvalidPointCount(steps)),
        1 => Ok(vec![start]),
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_are_the_endpoints() {
        assert_eq!(linspace(-1.0, 3.0, 2).unwrap(), vec![-1.0, 3.0]);
    }

    #[test]
    fn descending_range_stays_descending() {
        assert_eq!(linspace(4.0, 0.0, 5).unwrap(), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn last_point_is_exact() {
        let v = linspace(0.1, 0.7, 7).unwrap();
        assert_eq!(v.len(), 7);
        assert_eq!(*v.last().unwrap(), 0.7);
    }

    #[test]
    fn zero_steps_rejected() {
        assert_eq!(linspace(0.0, 1.0, 0), Err(ChartError::InvalidPointCount(0)));
    }
}
