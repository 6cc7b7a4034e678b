//! Packing generation loop with stall-guarded rejection sampling.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::domain::{CubeDomain, RadiusRange};
use crate::error::{Error, Result};
use crate::packing::config::PackingConfig;
use crate::pore::Pore;
use crate::sampling::grid::PoreGrid;
use crate::sampling::{PoreSampling, UniformRejectionSampling};

/// Result of a packing run.
///
/// Also attached to [`Error::Infeasible`] as the partial state accepted before
/// the stall guard tripped.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packing {
    /// Accepted pores in acceptance order.
    pub pores: Vec<Pore>,
    /// Sum of the accepted pore volumes.
    pub pore_volume: f64,
    /// Achieved volume fraction, `pore_volume / domain volume`.
    pub achieved_porosity: f64,
    /// Total candidates drawn.
    pub candidates_tried: usize,
    /// Candidates rejected for overlapping an accepted pore.
    pub candidates_rejected: usize,
}

impl Packing {
    /// Creates a new empty [`Packing`].
    pub fn new() -> Self {
        Self::default()
    }
}

/// Drives the sampler until the target volume fraction is reached.
pub struct PackingRunner {
    /// Configuration applied to this runner.
    pub config: PackingConfig,
}

impl PackingRunner {
    /// Validates the configuration and creates a runner.
    pub fn try_new(config: PackingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a runner without surfacing validation errors.
    pub fn new(config: PackingConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid packing configuration");
        Self { config }
    }

    /// Runs the packing with an RNG seeded from the configuration.
    pub fn run(&self) -> Result<Packing> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the packing with a caller-owned random source.
    pub fn run_with_rng(&self, rng: &mut dyn RngCore) -> Result<Packing> {
        self.run_with_sampler(&UniformRejectionSampling::new(), rng)
    }

    /// Runs the packing with a custom sampling strategy.
    pub fn run_with_sampler(
        &self,
        sampler: &dyn PoreSampling,
        rng: &mut dyn RngCore,
    ) -> Result<Packing> {
        let config = &self.config;
        let domain = CubeDomain::new(config.cube_size, config.boundary_offset);
        let domain_volume = domain.volume();
        let target_volume = config.target_porosity * domain_volume;

        let mut result = Packing::new();
        if target_volume <= 0.0 {
            info!(
                "Target porosity {} is non-positive; returning an empty packing.",
                config.target_porosity
            );
            return Ok(result);
        }

        let radii = RadiusRange::new(config.radius_min, config.radius_max);
        let mut grid = PoreGrid::new(&domain, radii.max);
        let mut pore_volume = 0.0;

        while pore_volume < target_volume {
            let outcome = sampler.sample(&domain, &radii, &grid, config.max_rejections, rng);
            result.candidates_tried += outcome.attempts;

            match outcome.pore {
                Some(pore) => {
                    result.candidates_rejected += outcome.attempts - 1;
                    pore_volume += pore.volume();
                    debug!(
                        "Accepted pore {} | r = {:.4} | volume fraction {:.4}.",
                        grid.len(),
                        pore.radius,
                        pore_volume / domain_volume,
                    );
                    grid.push(pore);
                }
                None => {
                    result.candidates_rejected += outcome.attempts;
                    result.pores = grid.into_pores();
                    result.pore_volume = pore_volume;
                    result.achieved_porosity = pore_volume / domain_volume;
                    warn!(
                        "No pore accepted within {} attempts; stopping at {} pores, volume fraction {:.4}.",
                        config.max_rejections,
                        result.pores.len(),
                        result.achieved_porosity,
                    );
                    return Err(Error::Infeasible {
                        attempts: config.max_rejections,
                        partial: Box::new(result),
                    });
                }
            }
        }

        result.pores = grid.into_pores();
        result.pore_volume = pore_volume;
        result.achieved_porosity = pore_volume / domain_volume;
        info!(
            "Packed {} pores | volume fraction {:.4}.",
            result.pores.len(),
            result.achieved_porosity,
        );

        Ok(result)
    }
}

/// Validates `config` and runs a packing seeded from it.
pub fn generate(config: &PackingConfig) -> Result<Packing> {
    PackingRunner::try_new(config.clone())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::SampleOutcome;

    fn example_config() -> PackingConfig {
        PackingConfig::new(1.0)
            .with_seed(50)
            .with_boundary_offset(0.01)
            .with_target_porosity(0.05)
            .with_radius_range(0.03, 0.1)
    }

    fn assert_invariants(packing: &Packing, config: &PackingConfig) {
        let domain = CubeDomain::new(config.cube_size, config.boundary_offset);
        for (i, a) in packing.pores.iter().enumerate() {
            assert!(domain.contains(a), "pore {i} escapes the domain");
            assert!(
                (config.radius_min..=config.radius_max).contains(&a.radius),
                "pore {i} radius out of range"
            );
            for b in &packing.pores[i + 1..] {
                let dist = a.center.distance(b.center);
                assert!(
                    dist > a.radius + b.radius,
                    "pores overlap: dist {dist} vs {}",
                    a.radius + b.radius
                );
            }
        }
    }

    #[test]
    fn example_scenario_reaches_target() {
        let config = example_config();
        let packing = generate(&config).expect("feasible configuration");

        assert!(packing.achieved_porosity >= 0.05);
        assert!(
            packing.pores.len() >= 10 && packing.pores.len() <= 100,
            "expected low tens of pores, got {}",
            packing.pores.len()
        );
        assert_invariants(&packing, &config);
    }

    #[test]
    fn volume_accounting_matches_sum_of_pores() {
        let config = example_config();
        let packing = generate(&config).expect("feasible configuration");

        // Same summation order as the loop, so the totals agree exactly.
        let sum: f64 = packing.pores.iter().map(Pore::volume).sum();
        assert_eq!(sum, packing.pore_volume);
        assert_eq!(
            packing.achieved_porosity,
            packing.pore_volume / config.cube_size.powi(3)
        );
    }

    #[test]
    fn same_seed_reproduces_the_packing_exactly() {
        let config = example_config();
        let a = generate(&config).expect("feasible configuration");
        let b = generate(&config).expect("feasible configuration");
        assert_eq!(a, b);

        let c = generate(&config.clone().with_seed(51)).expect("feasible configuration");
        assert_ne!(a.pores, c.pores);
    }

    #[test]
    fn infeasible_target_fails_with_partial_results() {
        // Two 0.4-radius spheres cannot coexist in a unit cube, so 90% is
        // unreachable and the stall guard must trip.
        let config = PackingConfig::new(1.0)
            .with_seed(7)
            .with_boundary_offset(0.01)
            .with_target_porosity(0.9)
            .with_radius_range(0.4, 0.4)
            .with_max_rejections(2_000);

        match generate(&config) {
            Err(Error::Infeasible { attempts, partial }) => {
                assert_eq!(attempts, 2_000);
                assert_eq!(partial.pores.len(), 1);
                assert!(partial.achieved_porosity > 0.0);
                assert!(partial.achieved_porosity < 0.9);
                assert_invariants(&partial, &config);
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_target_returns_empty_packing() {
        let config = example_config().with_target_porosity(0.0);
        let packing = generate(&config).expect("empty packing is not an error");
        assert!(packing.pores.is_empty());
        assert_eq!(packing.candidates_tried, 0);
        assert_eq!(packing.achieved_porosity, 0.0);

        let config = example_config().with_target_porosity(-1.0);
        assert!(generate(&config).expect("no sampling").pores.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_sampling() {
        let config = example_config().with_radius_range(0.3, 0.6);
        assert!(matches!(generate(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejection_counters_are_consistent() {
        let config = example_config();
        let packing = generate(&config).expect("feasible configuration");
        assert_eq!(
            packing.candidates_tried,
            packing.candidates_rejected + packing.pores.len()
        );
    }

    struct NeverAccepts;

    impl PoreSampling for NeverAccepts {
        fn sample(
            &self,
            _domain: &CubeDomain,
            _radii: &RadiusRange,
            _existing: &PoreGrid,
            max_attempts: usize,
            _rng: &mut dyn RngCore,
        ) -> SampleOutcome {
            SampleOutcome {
                pore: None,
                attempts: max_attempts,
            }
        }
    }

    #[test]
    fn custom_sampler_drives_the_stall_guard() {
        let runner = PackingRunner::try_new(example_config()).expect("valid config");
        let mut rng = StdRng::seed_from_u64(1);

        match runner.run_with_sampler(&NeverAccepts, &mut rng) {
            Err(Error::Infeasible { partial, .. }) => {
                assert!(partial.pores.is_empty());
                assert_eq!(partial.achieved_porosity, 0.0);
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }
}
