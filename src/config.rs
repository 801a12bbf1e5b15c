// src/config.rs
//! Run configuration, loadable from TOML.
//!
//! ```toml
//! dt = 0.1
//! x0 = 0.0
//! steps = 1000
//! seed = 42
//! paths = 1
//! title = "Brownian Motion Path"
//! ```
//!
//! Missing keys take their defaults.

use crate::error::{validation::*, WalkError, WalkResult};
use crate::models::random_walk::RandomWalk;
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Increment standard deviation
    pub dt: f64,
    pub x0: f64,
    /// Signed so that a negative count in a config file is reported, not
    /// rejected by the parser
    pub steps: i64,
    pub seed: u64,
    /// Number of ensemble paths
    pub paths: usize,
    /// Chart caption
    pub title: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            dt: 0.1,
            x0: 0.0,
            steps: 1000,
            seed: 42,
            paths: 1,
            title: "Brownian Motion Path".to_string(),
        }
    }
}

impl WalkConfig {
    pub fn from_toml_str(text: &str) -> WalkResult<Self> {
        toml::from_str(text).map_err(|e| WalkError::Config(e.to_string()))
    }

    /// Read and parse a TOML file. The result is not validated.
    pub fn load<P: AsRef<FsPath>>(file: P) -> WalkResult<Self> {
        let file = file.as_ref();
        let text = std::fs::read_to_string(file)?;
        let config = Self::from_toml_str(&text)?;
        info!(file = %file.display(), "loaded walk configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> WalkResult<()> {
        validate_steps(self.steps)?;
        RandomWalk::new(self.dt, self.x0)?;
        validate_paths(self.paths)?;
        Ok(())
    }

    pub fn steps(&self) -> WalkResult<usize> {
        validate_steps(self.steps)
    }

    pub fn walk(&self) -> WalkResult<RandomWalk> {
        RandomWalk::new(self.dt, self.x0)
    }
}
