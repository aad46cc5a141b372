//! Parameters for a fracture run.

use super::strategy::SpawnStrategy;
use crate::error::{FractureError, FractureResult};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for a fracture run.
///
/// Immutable once handed to a [`Breaker`](super::Breaker).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractureConfig<F> {
    /// Area below which the spawn strategy decides whether a triangle still
    /// splits. Default: 1.0
    pub min_area: F,

    /// Hard cap on emitted fragments; the run stops the moment it is
    /// reached. Default: 256
    pub max_fragments: usize,

    /// Policy for sub-threshold triangles. Default: [`SpawnStrategy::None`]
    pub spawn_strategy: SpawnStrategy,
}

impl<F: Float> Default for FractureConfig<F> {
    fn default() -> Self {
        Self {
            min_area: F::one(),
            max_fragments: 256,
            spawn_strategy: SpawnStrategy::None,
        }
    }
}

impl<F: Float> FractureConfig<F> {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`FractureConfig::validate`].
    pub fn new(
        min_area: F,
        max_fragments: usize,
        spawn_strategy: SpawnStrategy,
    ) -> FractureResult<Self> {
        let config = Self {
            min_area,
            max_fragments,
            spawn_strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the minimum area.
    #[must_use]
    pub fn with_min_area(mut self, min_area: F) -> Self {
        self.min_area = min_area;
        self
    }

    /// Set the fragment cap.
    #[must_use]
    pub fn with_max_fragments(mut self, max_fragments: usize) -> Self {
        self.max_fragments = max_fragments;
        self
    }

    /// Set the spawn strategy.
    #[must_use]
    pub fn with_spawn_strategy(mut self, spawn_strategy: SpawnStrategy) -> Self {
        self.spawn_strategy = spawn_strategy;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// [`FractureError::InvalidMinArea`] when `min_area` is negative or not
    /// finite, [`FractureError::InvalidMaxFragments`] when `max_fragments`
    /// is zero.
    pub fn validate(&self) -> FractureResult<()> {
        if !self.min_area.is_finite() || self.min_area < F::zero() {
            return Err(FractureError::InvalidMinArea(
                self.min_area.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if self.max_fragments == 0 {
            return Err(FractureError::InvalidMaxFragments(self.max_fragments));
        }
        Ok(())
    }

    /// Initial capacity for each generation buffer.
    pub(crate) fn generation_capacity(&self, seeds: usize) -> usize {
        self.max_fragments / 3 + seeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: FractureConfig<f64> = FractureConfig::default();
        assert!((config.min_area - 1.0).abs() < 1e-12);
        assert_eq!(config.max_fragments, 256);
        assert_eq!(config.spawn_strategy, SpawnStrategy::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FractureConfig::<f32>::default()
            .with_min_area(2.5)
            .with_max_fragments(10)
            .with_spawn_strategy(SpawnStrategy::RandomFade);
        assert_eq!(config, FractureConfig::new(2.5, 10, SpawnStrategy::RandomFade).unwrap());
    }

    #[test]
    fn test_zero_min_area_is_valid() {
        assert!(FractureConfig::new(0.0_f64, 1, SpawnStrategy::None).is_ok());
    }

    #[test]
    fn test_invalid_min_area() {
        assert_eq!(
            FractureConfig::new(-1.0_f64, 10, SpawnStrategy::None),
            Err(FractureError::InvalidMinArea(-1.0))
        );
        assert!(FractureConfig::new(f64::NAN, 10, SpawnStrategy::None).is_err());
        assert!(FractureConfig::new(f64::INFINITY, 10, SpawnStrategy::None).is_err());
    }

    #[test]
    fn test_invalid_max_fragments() {
        assert_eq!(
            FractureConfig::new(1.0_f64, 0, SpawnStrategy::Random),
            Err(FractureError::InvalidMaxFragments(0))
        );
    }
}
