//! Result of a fracture run.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// No triangle was left to split.
    Exhausted,
    /// The fragment cap was reached.
    FragmentCap,
    /// The cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhausted => "exhausted",
            Self::FragmentCap => "fragment cap",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Fragments produced by a run, in discovery order, plus run statistics.
///
/// Discovery order is breadth-first across generations and follows the
/// seed order within a generation; it is not a spatial order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractureOutcome<T> {
    /// Emitted fragments.
    pub fragments: Vec<T>,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Number of generations that were started.
    pub generations: usize,

    /// Triangles dropped by the spawn strategy.
    pub discarded: usize,

    /// Triangles dropped as degenerate.
    pub degenerate: usize,

    /// Triangles left unsplit when the run stopped early.
    ///
    /// Counts the unvisited triangles of the current generation, the
    /// triangles queued for the next one and, on a fragment cap, the three
    /// corners of the split that reached the cap.
    pub abandoned: usize,
}

impl<T> FractureOutcome<T> {
    /// Number of fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if no fragment was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns true if the run stopped before running out of work.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        !matches!(self.stop_reason, StopReason::Exhausted)
    }

    /// Consumes the outcome, returning the fragments.
    #[inline]
    pub fn into_fragments(self) -> Vec<T> {
        self.fragments
    }
}

impl<T> fmt::Display for FractureOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fracture: {} fragments over {} generations \
             ({}, {} discarded, {} degenerate, {} abandoned)",
            self.fragments.len(),
            self.generations,
            self.stop_reason,
            self.discarded,
            self.degenerate,
            self.abandoned
        )
    }
}
