//! # wiener-walk: Discrete Random Walks for the Black-Scholes Derivation
//!
//! The Black-Scholes PDE is derived from a Wiener process `W_t`, Ito's Lemma
//! and a delta-hedged, arbitrage-free portfolio. This crate supplies the one
//! computational piece of that story: sample paths of a discrete random walk
//! standing in for `W_t`, plus the tools to inspect and draw them.
//!
//! ## Key Features
//!
//! - **Injected randomness**: every generator takes its random source as an
//!   argument; no process-wide RNG
//! - **Validated parameters**: bad inputs are rejected before any draw
//! - **Ensembles**: many independent paths in parallel with Rayon, identical
//!   for any thread count
//! - **Path statistics**: increment moments, quadratic variation, Ito and
//!   Stratonovich sums
//! - **Output**: CSV export and SVG line charts
//!
//! ## Quick Start
//!
//! ```rust
//! use wiener_walk::models::random_walk::generate_path;
//! use wiener_walk::rng::seed_rng_from_u64;
//!
//! let mut rng = seed_rng_from_u64(42);
//! let path = generate_path(0.1, 0.0, 250, &mut rng).expect("Valid parameters");
//!
//! assert_eq!(path.len(), 251);
//! assert_eq!(path.values()[0], 0.0);
//! ```
//!
//! ## Scaling convention
//!
//! Increments are drawn from `N(0, dt²)`: the standard deviation of each step
//! is `dt`, not `√dt`.

// Module declarations
pub mod error;
pub mod rng;
pub mod path;
pub mod models;
pub mod mc;
pub mod analytics;
pub mod config;
pub mod output;
pub mod plot;

// Re-export commonly used types for convenience
pub use config::WalkConfig;
pub use error::{WalkError, WalkResult};
pub use models::random_walk::{generate_path, RandomWalk};
pub use path::Path;
pub use rng::{NormalSource, ReplaySource};
