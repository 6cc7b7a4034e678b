//! Configuration for a packing run.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::packing::DEFAULT_MAX_REJECTIONS;

/// Configuration for generating a pore packing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingConfig {
    /// RNG seed; runs with the same seed and configuration are bit-for-bit
    /// reproducible.
    pub seed: u64,
    /// Edge length of the cubic domain.
    pub cube_size: f64,
    /// Clearance between pores and the domain faces.
    pub boundary_offset: f64,
    /// Target pore volume fraction in `[0, 1)`; `<= 0` yields an empty packing.
    pub target_porosity: f64,
    /// Smallest pore radius.
    pub radius_min: f64,
    /// Largest pore radius.
    pub radius_max: f64,
    /// Stall budget: consecutive rejected candidates tolerated before the run
    /// fails as infeasible.
    pub max_rejections: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cube_size: 0.0,
            boundary_offset: 0.0,
            target_porosity: 0.0,
            radius_min: 0.0,
            radius_max: 0.0,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }
}

impl PackingConfig {
    /// Creates a new [`PackingConfig`] for a cube of the specified edge length.
    pub fn new(cube_size: f64) -> Self {
        Self {
            cube_size,
            ..Default::default()
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the boundary offset.
    pub fn with_boundary_offset(mut self, boundary_offset: f64) -> Self {
        self.boundary_offset = boundary_offset;
        self
    }

    /// Sets the target pore volume fraction.
    pub fn with_target_porosity(mut self, target_porosity: f64) -> Self {
        self.target_porosity = target_porosity;
        self
    }

    /// Sets the pore radius range.
    pub fn with_radius_range(mut self, radius_min: f64, radius_max: f64) -> Self {
        self.radius_min = radius_min;
        self.radius_max = radius_max;
        self
    }

    /// Sets the stall budget.
    pub fn with_max_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.cube_size.is_finite() || self.cube_size <= 0.0 {
            return Err(Error::InvalidConfig("cube_size must be > 0".into()));
        }
        if !self.boundary_offset.is_finite() || self.boundary_offset < 0.0 {
            return Err(Error::InvalidConfig("boundary_offset must be >= 0".into()));
        }
        if 2.0 * self.boundary_offset >= self.cube_size {
            return Err(Error::InvalidConfig(
                "boundary_offset must be less than half the cube size".into(),
            ));
        }
        if !self.radius_min.is_finite() || self.radius_min <= 0.0 {
            return Err(Error::InvalidConfig("radius_min must be > 0".into()));
        }
        if !self.radius_max.is_finite() || self.radius_min > self.radius_max {
            return Err(Error::InvalidConfig(
                "radius_max must be >= radius_min".into(),
            ));
        }
        if self.radius_max >= self.cube_size / 2.0 - self.boundary_offset {
            return Err(Error::InvalidConfig(
                "radius_max must be less than cube_size / 2 - boundary_offset".into(),
            ));
        }
        if !self.target_porosity.is_finite() || self.target_porosity >= 1.0 {
            return Err(Error::InvalidConfig(
                "target_porosity must be less than 1".into(),
            ));
        }
        if self.max_rejections == 0 {
            return Err(Error::InvalidConfig("max_rejections must be > 0".into()));
        }

        Ok(())
    }
}
