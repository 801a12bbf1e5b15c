// src/error.rs
use thiserror::Error;

/// Errors raised while configuring, generating or exporting random walks
#[derive(Debug, Error)]
pub enum WalkError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A replayed random source ran out of recorded draws
    #[error("Random source exhausted: {requested} draws requested, {available} available")]
    SourceExhausted { requested: usize, available: usize },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering failed
    #[error("Plotting failed: {0}")]
    Plot(String),

    /// Filesystem failure while reading config or writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV serialization failure
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type alias for wiener-walk operations
pub type WalkResult<T> = Result<T, WalkError>;

/// Validation utilities
pub mod validation {
    use super::{WalkError, WalkResult};

    /// Largest number of steps a single path may have
    pub const MAX_STEPS: usize = 10_000_000;

    /// Largest number of paths an ensemble may have
    pub const MAX_PATHS: usize = 1_000_000;

    /// Largest number of values (`paths * (steps + 1)`) an ensemble may hold
    pub const MAX_ENSEMBLE_POINTS: usize = 100_000_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> WalkResult<()> {
        // NaN fails this comparison too, so it is rejected here as well
        if !(value > 0.0) {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> WalkResult<()> {
        if !value.is_finite() {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a signed step count and convert it to `usize`
    pub fn validate_steps(steps: i64) -> WalkResult<usize> {
        if steps < 0 {
            return Err(WalkError::InvalidParameters {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: "must be non-negative (≥ 0)".to_string(),
            });
        }
        let steps = steps as usize;
        validate_step_count(steps)?;
        Ok(steps)
    }

    /// Validate an unsigned step count against the memory cap
    pub fn validate_step_count(steps: usize) -> WalkResult<()> {
        if steps > MAX_STEPS {
            Err(WalkError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_STEPS),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> WalkResult<()> {
        if paths == 0 {
            Err(WalkError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > MAX_PATHS {
            Err(WalkError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_PATHS),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the total size of a `paths × (steps + 1)` ensemble
    pub fn validate_ensemble_size(paths: usize, steps: usize) -> WalkResult<()> {
        let points = steps
            .checked_add(1)
            .and_then(|columns| paths.checked_mul(columns));
        match points {
            Some(points) if points <= MAX_ENSEMBLE_POINTS => Ok(()),
            _ => Err(WalkError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: format!(
                    "{} paths of {} steps exceed the ensemble limit of {} values",
                    paths, steps, MAX_ENSEMBLE_POINTS
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("dt", 0.1).is_ok());
        assert!(validate_positive("dt", 0.0).is_err());
        assert!(validate_positive("dt", -0.1).is_err());
        assert!(validate_positive("dt", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("x0", 1.0).is_ok());
        assert!(validate_finite("x0", f64::NAN).is_err());
        assert!(validate_finite("x0", f64::INFINITY).is_err());
        assert!(validate_finite("x0", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert_eq!(validate_steps(0).unwrap(), 0);
        assert_eq!(validate_steps(250).unwrap(), 250);
        assert!(matches!(
            validate_steps(-1),
            Err(WalkError::InvalidParameters { .. })
        ));
        assert!(matches!(
            validate_steps(MAX_STEPS as i64 + 1),
            Err(WalkError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_paths() {
        assert!(validate_paths(1).is_ok());
        assert!(validate_paths(0).is_err());
        assert!(validate_paths(MAX_PATHS + 1).is_err());
    }

    #[test]
    fn test_validate_ensemble_size() {
        assert!(validate_ensemble_size(1_000, 999).is_ok());
        assert!(validate_ensemble_size(1, MAX_STEPS).is_ok());
        assert!(matches!(
            validate_ensemble_size(MAX_PATHS, MAX_STEPS),
            Err(WalkError::InvalidConfiguration { ref field, .. }) if field == "paths"
        ));
        assert!(validate_ensemble_size(usize::MAX, 1).is_err());
        assert!(validate_ensemble_size(2, usize::MAX).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = WalkError::InvalidParameters {
            parameter: "dt".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("dt"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_source_exhausted_display() {
        let error = WalkError::SourceExhausted {
            requested: 5,
            available: 3,
        };

        let display = format!("{}", error);
        assert!(display.contains("5 draws requested"));
        assert!(display.contains("3 available"));
    }
}
