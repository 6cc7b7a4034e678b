//! Candidate pore generation over a cubic domain.
//!
//! This module defines the sampling trait used by the packing runner to draw
//! one non-overlapping candidate pore at a time, plus the grid index that keeps
//! the per-candidate overlap test local.
use rand::RngCore;

use crate::domain::{CubeDomain, RadiusRange};
use crate::pore::Pore;
use crate::sampling::grid::PoreGrid;

pub mod grid;
pub mod rejection;

pub use rejection::UniformRejectionSampling;

/// Outcome of a bounded rejection-sampling call.
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    /// Accepted pore, or `None` if every attempt was rejected.
    pub pore: Option<Pore>,
    /// Candidates drawn, including the accepted one.
    pub attempts: usize,
}

/// Trait for drawing a single non-overlapping pore.
///
/// Implementations must only return pores whose center lies within
/// `[b + r, L − b − r]` on each axis and whose surface keeps a strict
/// distance from every pore already in `existing`.
pub trait PoreSampling: Send + Sync {
    /// Try up to `max_attempts` candidates; the first valid one is returned.
    ///
    /// `max_attempts` is the caller's stall budget: a `None` pore means the
    /// budget was exhausted without a single acceptance.
    fn sample(
        &self,
        domain: &CubeDomain,
        radii: &RadiusRange,
        existing: &PoreGrid,
        max_attempts: usize,
        rng: &mut dyn RngCore,
    ) -> SampleOutcome;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0)
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain. Handles edge cases
/// safely including very small positive values and zero.
#[inline]
pub(crate) fn next_down(val: f64) -> f64 {
    if val.is_nan() {
        return f64::NAN;
    }

    if val == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    if val == f64::INFINITY {
        return f64::MAX;
    }

    if val == 0.0 {
        return -f64::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f64::from_bits(bits.saturating_sub(1))
    } else {
        f64::from_bits(bits.saturating_add(1))
    }
}
