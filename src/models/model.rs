// src/models/model.rs
use crate::path::Path;

/// Additive walk driven by independent normal increments.
pub trait PathModel {
    fn initial_value(&self) -> f64;
    fn increment_std_dev(&self) -> f64;

    /// Accumulate `increments` from the initial value into a full path.
    fn path_from_increments(&self, increments: &[f64]) -> Path {
        Path::from_increments(self.initial_value(), increments)
    }
}
