//! Uniform rejection sampling of candidate pores.
use glam::DVec3;
use rand::RngCore;

use crate::domain::{CubeDomain, RadiusRange};
use crate::pore::Pore;
use crate::sampling::grid::PoreGrid;
use crate::sampling::{next_down, rand01, PoreSampling, SampleOutcome};

/// Uniform i.i.d. rejection sampling.
///
/// Each attempt draws one radius and one center (exactly four uniform draws,
/// which keeps runs with the same seed bit-for-bit reproducible) and rejects
/// the candidate if it overlaps any existing pore.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRejectionSampling;

impl UniformRejectionSampling {
    /// Create a new uniform rejection sampler.
    pub fn new() -> Self {
        Self
    }
}

impl PoreSampling for UniformRejectionSampling {
    fn sample(
        &self,
        domain: &CubeDomain,
        radii: &RadiusRange,
        existing: &PoreGrid,
        max_attempts: usize,
        rng: &mut dyn RngCore,
    ) -> SampleOutcome {
        for attempt in 1..=max_attempts {
            let radius = radii.min + rand01(rng) * radii.span();

            // The drawn radius fixes the valid center interval on every axis.
            let (lo, hi) = domain.center_interval(radius);
            let span = hi - lo;
            // Keep strictly inside the upper bound despite rounding.
            let max_c = next_down(hi);

            let x = (lo + rand01(rng) * span).clamp(lo, max_c);
            let y = (lo + rand01(rng) * span).clamp(lo, max_c);
            let z = (lo + rand01(rng) * span).clamp(lo, max_c);
            let center = DVec3::new(x, y, z);

            if !existing.overlaps_any(center, radius) {
                return SampleOutcome {
                    pore: Some(Pore::new(center, radius)),
                    attempts: attempt,
                };
            }
        }

        SampleOutcome {
            pore: None,
            attempts: max_attempts,
        }
    }
}
