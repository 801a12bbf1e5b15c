// src/path.rs
//! Sampled path on a unit-spaced integer time grid.

/// One realization of a discrete random walk.
///
/// `times[i] == i` and `values[i]` is the walk after `i` increments, so both
/// vectors always have the same length `steps + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    times: Vec<usize>,
    values: Vec<f64>,
}

impl Path {
    /// Build a path from an initial value and its increments.
    ///
    /// `values[0] = x0` and `values[i] = values[i-1] + increments[i-1]`.
    pub fn from_increments(x0: f64, increments: &[f64]) -> Self {
        let mut values = Vec::with_capacity(increments.len() + 1);
        values.push(x0);

        let mut current = x0;
        for &dw in increments {
            current += dw;
            values.push(current);
        }

        Self::from_values(values)
    }

    /// Wrap an already accumulated value sequence.
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        let times = (0..values.len()).collect();
        Path { times, values }
    }

    pub fn times(&self) -> &[usize] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of grid points (`steps + 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a path holds at least its initial value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }

    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    pub fn terminal(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// `value[i] - value[i-1]` for i in 1..=steps
    pub fn increments(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.windows(2).map(|w| w[1] - w[0])
    }

    /// `(time, value)` pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_increments_accumulates() {
        let path = Path::from_increments(1.0, &[0.5, -0.25, 0.75]);

        assert_eq!(path.times(), &[0, 1, 2, 3]);
        assert_eq!(path.values(), &[1.0, 1.5, 1.25, 2.0]);
        assert_eq!(path.steps(), 3);
        assert_eq!(path.initial(), 1.0);
        assert_eq!(path.terminal(), 2.0);
    }

    #[test]
    fn test_single_point_path() {
        let path = Path::from_increments(-3.0, &[]);

        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
        assert_eq!(path.steps(), 0);
        assert_eq!(path.initial(), path.terminal());
        assert_eq!(path.increments().count(), 0);
    }

    #[test]
    fn test_increments_recover_draws() {
        let draws = [0.1, -0.3, 0.2, 0.05];
        let path = Path::from_increments(0.0, &draws);

        for (got, expected) in path.increments().zip(draws.iter()) {
            assert_relative_eq!(got, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_points_pairs_time_and_value() {
        let path = Path::from_increments(2.0, &[1.0, 1.0]);
        let points: Vec<(usize, f64)> = path.points().collect();

        assert_eq!(points, vec![(0, 2.0), (1, 3.0), (2, 4.0)]);
    }
}
