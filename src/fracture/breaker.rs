//! Generation-by-generation scheduling of the subdivision kernel.
//!
//! Two buffers alternate between the active generation being split and the
//! pending generation collecting the corner triangles. When the active
//! buffer is drained it is cleared and the two are swapped, so memory stays
//! bounded by two generations regardless of depth. The fragment cap is
//! checked after every split, not only between generations.

use std::sync::atomic::{AtomicBool, Ordering};

use num_traits::Float;
use tracing::{debug, info, trace};

use super::config::FractureConfig;
use super::hexagon::{CenteredHexagon, Fragment};
use super::kernel::{subdivide, Discard, Subdivision};
use super::outcome::{FractureOutcome, StopReason};
use super::sampler::{AreaHash, AreaSampler};
use crate::error::FractureResult;
use crate::primitives::{Point2, Triangle2};

/// Upper bound on buffer sizes reserved ahead of a run.
const MAX_PREALLOCATION: usize = 1 << 16;

/// Fractures triangle lists into hexagonal fragments.
///
/// A breaker owns a validated [`FractureConfig`] and the sampler used by the
/// spawn strategy. Every run allocates its own buffers; the breaker only
/// needs `&mut self` because samplers may carry state.
///
/// # Example
///
/// ```
/// use fractum::fracture::{Breaker, FractureConfig, SpawnStrategy};
/// use fractum::primitives::{Point2, Triangle2};
///
/// let seeds = [Triangle2::new(
///     Point2::new(-10.0_f64, 0.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(10.0, 0.0),
/// )];
///
/// let config = FractureConfig::new(5.0, 300, SpawnStrategy::None).unwrap();
/// let mut breaker = Breaker::new(config).unwrap();
/// let outcome = breaker.divide(&seeds);
///
/// assert_eq!(outcome.len(), 3);
/// assert!(!outcome.is_truncated());
/// ```
#[derive(Debug, Clone)]
pub struct Breaker<F, S = AreaHash> {
    config: FractureConfig<F>,
    sampler: S,
}

impl<F: Float> Breaker<F, AreaHash> {
    /// Creates a breaker using the deterministic [`AreaHash`] sampler.
    ///
    /// # Errors
    ///
    /// Returns the validation error of an invalid `config`.
    pub fn new(config: FractureConfig<F>) -> FractureResult<Self> {
        Self::with_sampler(config, AreaHash)
    }
}

impl<F: Float, S: AreaSampler<F>> Breaker<F, S> {
    /// Creates a breaker with a custom sampler.
    ///
    /// # Errors
    ///
    /// Returns the validation error of an invalid `config`.
    pub fn with_sampler(config: FractureConfig<F>, sampler: S) -> FractureResult<Self> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &FractureConfig<F> {
        &self.config
    }

    /// Consumes the breaker, returning its sampler.
    pub fn into_sampler(self) -> S {
        self.sampler
    }

    /// Fractures `seeds` into absolute six-point outlines.
    pub fn divide(&mut self, seeds: &[Triangle2<F>]) -> FractureOutcome<[Point2<F>; 6]> {
        self.run(seeds)
    }

    /// Fractures `seeds` into center-relative hexagons.
    pub fn hexagon_divide(
        &mut self,
        seeds: &[Triangle2<F>],
    ) -> FractureOutcome<CenteredHexagon<F>> {
        self.run(seeds)
    }

    /// Fractures `seeds`, packaging each fragment as `T`.
    pub fn run<T: Fragment<F>>(&mut self, seeds: &[Triangle2<F>]) -> FractureOutcome<T> {
        self.drive(seeds, None)
    }

    /// Like [`Breaker::run`], stopping once `cancel` is raised.
    ///
    /// The flag is polled before each triangle, so a raised flag takes
    /// effect within one kernel call.
    pub fn run_cancellable<T: Fragment<F>>(
        &mut self,
        seeds: &[Triangle2<F>],
        cancel: &AtomicBool,
    ) -> FractureOutcome<T> {
        self.drive(seeds, Some(cancel))
    }

    fn drive<T: Fragment<F>>(
        &mut self,
        seeds: &[Triangle2<F>],
        cancel: Option<&AtomicBool>,
    ) -> FractureOutcome<T> {
        let FractureConfig {
            min_area,
            max_fragments,
            spawn_strategy,
        } = self.config;

        let capacity = self.config.generation_capacity(seeds.len()).min(MAX_PREALLOCATION);
        let mut active: Vec<Triangle2<F>> = Vec::with_capacity(capacity.max(seeds.len()));
        let mut pending: Vec<Triangle2<F>> = Vec::with_capacity(capacity);
        let mut fragments: Vec<T> = Vec::with_capacity(max_fragments.min(MAX_PREALLOCATION));
        active.extend_from_slice(seeds);

        info!(
            seeds = seeds.len(),
            max_fragments,
            strategy = %spawn_strategy,
            "Starting fracture"
        );

        let mut generations = 0;
        let mut discarded = 0;
        let mut degenerate = 0;
        let mut abandoned = 0;

        let stop_reason = 'rounds: loop {
            if active.is_empty() {
                break StopReason::Exhausted;
            }
            generations += 1;
            debug!(generation = generations, triangles = active.len(), "Splitting generation");

            for (index, triangle) in active.iter().enumerate() {
                if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                    abandoned = active.len() - index + pending.len();
                    trace!(generation = generations, index, "Cancellation requested");
                    break 'rounds StopReason::Cancelled;
                }

                match subdivide(triangle, spawn_strategy, min_area, &mut self.sampler) {
                    Subdivision::Split(split) => {
                        fragments.push(T::from_hexagon(&split.hexagon));
                        if fragments.len() >= max_fragments {
                            abandoned = active.len() - index - 1
                                + pending.len()
                                + split.children.len();
                            break 'rounds StopReason::FragmentCap;
                        }
                        pending.extend_from_slice(&split.children);
                    }
                    Subdivision::Discarded(Discard::BelowThreshold) => discarded += 1,
                    Subdivision::Discarded(Discard::Degenerate) => degenerate += 1,
                }
            }

            active.clear();
            std::mem::swap(&mut active, &mut pending);
        };

        info!(
            fragments = fragments.len(),
            generations,
            discarded,
            degenerate,
            abandoned,
            stop = %stop_reason,
            "Fracture finished"
        );

        FractureOutcome {
            fragments,
            stop_reason,
            generations,
            discarded,
            degenerate,
            abandoned,
        }
    }
}

/// Fractures `seeds` into absolute outlines with the default sampler.
///
/// # Errors
///
/// Returns the validation error of an invalid `config`.
pub fn fracture_outlines<F: Float>(
    seeds: &[Triangle2<F>],
    config: &FractureConfig<F>,
) -> FractureResult<FractureOutcome<[Point2<F>; 6]>> {
    Ok(Breaker::new(*config)?.divide(seeds))
}

/// Fractures `seeds` into center-relative hexagons with the default sampler.
///
/// # Errors
///
/// Returns the validation error of an invalid `config`.
pub fn fracture_hexagons<F: Float>(
    seeds: &[Triangle2<F>],
    config: &FractureConfig<F>,
) -> FractureResult<FractureOutcome<CenteredHexagon<F>>> {
    Ok(Breaker::new(*config)?.hexagon_divide(seeds))
}
