//! fractum - Incircle fracturing of triangulated 2D meshes
//!
//! Shatters a polygon, given as a list of triangles, into convex hexagonal
//! fragments. Each triangle is shrunk toward its incircle: the central
//! hexagon becomes a fragment and the three leftover corner triangles are
//! split again, generation by generation, until they fall below an area
//! threshold or a fragment budget runs out.
//!
//! Triangulating the source polygon and consuming the fragments (meshes,
//! physics bodies) are left to the caller.

pub mod error;
pub mod fracture;
pub mod polygon;
pub mod primitives;

pub use error::{FractureError, FractureResult};
pub use fracture::{
    fracture_hexagons, fracture_outlines, Breaker, CenteredHexagon, FractureConfig,
    FractureOutcome, SpawnStrategy, StopReason,
};
pub use primitives::{Point2, Triangle2, Vec2};
