//! Polygon measurements and validity checks.
//!
//! Fragment outlines are small convex polygons; these helpers let callers
//! and tests check area, convexity and simplicity without pulling in a
//! full polygon-processing stack.

mod core;

pub use self::core::{
    polygon_area, polygon_is_convex, polygon_is_simple, polygon_signed_area, Polygon,
};
