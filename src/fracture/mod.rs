//! Incircle fracturing of triangle lists.
//!
//! Each triangle at or above the area threshold is cut into a central
//! hexagon (the emitted fragment) and three corner triangles, which are fed
//! back for the next generation. The run ends when no triangle is left to
//! split or the fragment cap is hit.
//!
//! # Example
//!
//! ```
//! use fractum::fracture::{fracture_hexagons, FractureConfig, SpawnStrategy};
//! use fractum::primitives::{Point2, Triangle2};
//!
//! let seeds = [Triangle2::new(
//!     Point2::new(-10.0_f64, 0.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(10.0, 0.0),
//! )];
//!
//! let config = FractureConfig::new(0.5, 10, SpawnStrategy::None).unwrap();
//! let outcome = fracture_hexagons(&seeds, &config).unwrap();
//!
//! assert_eq!(outcome.len(), 10);
//! assert!(outcome.is_truncated());
//! ```

mod breaker;
mod config;
mod hexagon;
mod kernel;
mod outcome;
mod sampler;
mod strategy;

pub use breaker::{fracture_hexagons, fracture_outlines, Breaker};
pub use config::FractureConfig;
pub use hexagon::{CenteredHexagon, Fragment, Hexagon};
pub use kernel::{split, subdivide, Discard, Split, Subdivision};
pub use outcome::{FractureOutcome, StopReason};
pub use sampler::{AreaHash, AreaSampler, RngSampler};
pub use strategy::SpawnStrategy;
