//! Spawn strategies for triangles below the area threshold.

use crate::error::FractureError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy deciding whether a triangle smaller than `min_area` still splits.
///
/// Triangles at or above the threshold always split; the strategy only
/// governs the fracture frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SpawnStrategy {
    /// Small triangles never split: a hard cutoff at `min_area`.
    #[default]
    None,
    /// Small triangles split when the sample is at least one half.
    Random,
    /// Small triangles split with a likelihood proportional to
    /// `area / min_area`, fading out toward the smallest pieces.
    RandomFade,
}

impl SpawnStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SpawnStrategy; 3] = [Self::None, Self::Random, Self::RandomFade];

    /// Returns the canonical configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Random => "random",
            Self::RandomFade => "randomFade",
        }
    }

    /// Returns true if a triangle of `area` should split.
    ///
    /// `sample` is the value in `[0, 1)` drawn for this triangle. It is only
    /// read when `area < min_area`.
    pub fn admits<F: Float>(self, area: F, min_area: F, sample: impl FnOnce() -> F) -> bool {
        if area >= min_area {
            return true;
        }
        match self {
            Self::None => false,
            Self::Random => sample() >= F::from(0.5).unwrap(),
            Self::RandomFade => sample() <= area / min_area,
        }
    }
}

impl fmt::Display for SpawnStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpawnStrategy {
    type Err = FractureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "none" | "no" => Ok(Self::None),
            "random" => Ok(Self::Random),
            "randomfade" => Ok(Self::RandomFade),
            _ => Err(FractureError::UnknownStrategy(s.to_string())),
        }
    }
}
