//! Sources of the per-triangle value consulted by the spawn strategy.
//!
//! The default [`AreaHash`] derives the value from the triangle's own area,
//! so a run is a pure function of its input. [`RngSampler`] plugs in a
//! stateful generator when a fresh pattern is wanted on every run.

use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a value in `[0, 1)` for a sub-threshold triangle of `area`.
pub trait AreaSampler<F> {
    /// Draws the value for a triangle of the given area.
    fn sample(&mut self, area: F) -> F;
}

/// Deterministic sampler hashing the bit pattern of the area.
///
/// The low decimal digits of the 52-bit mantissa (as an `f64`) are mapped to
/// `{0.000, 0.001, ..., 0.999}`. Identical areas always yield identical
/// values.
///
/// # Example
///
/// ```
/// use fractum::fracture::{AreaHash, AreaSampler};
///
/// let mut hash = AreaHash;
/// let v: f64 = hash.sample(3.75);
/// assert!((0.0..1.0).contains(&v));
/// assert_eq!(v, hash.sample(3.75));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaHash;

impl AreaHash {
    const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

    /// Hashes `area` into `[0, 1)`.
    pub fn value(area: f64) -> f64 {
        let tail = (area.to_bits() & Self::MANTISSA_MASK) % 1000;
        0.001 * tail as f64
    }
}

impl<F: Float> AreaSampler<F> for AreaHash {
    fn sample(&mut self, area: F) -> F {
        let value = area.to_f64().map_or(0.0, Self::value);
        F::from(value).unwrap_or_else(F::zero)
    }
}

/// Sampler drawing from a [`rand::Rng`], ignoring the area.
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSampler<StdRng> {
    /// Builds a sampler over a seeded [`StdRng`] for replayable runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<F: Float, R: Rng> AreaSampler<F> for RngSampler<R> {
    fn sample(&mut self, _area: F) -> F {
        F::from(self.rng.gen::<f64>()).unwrap_or_else(F::zero)
    }
}

impl<F, T> AreaSampler<F> for T
where
    T: FnMut(F) -> F,
{
    fn sample(&mut self, area: F) -> F {
        self(area)
    }
}
