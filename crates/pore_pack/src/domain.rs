//! Cubic domain and pore radius range.
use glam::DVec3;

use crate::pore::Pore;

/// Axis-aligned cubic domain `[0, size]³` with an inner boundary offset.
///
/// Pore centers must keep a clearance of `boundary_offset` plus their own
/// radius from every face, so a pore of radius `r` samples its center from
/// `[boundary_offset + r, size − boundary_offset − r]` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDomain {
    /// Edge length of the cube, `> 0`.
    pub size: f64,
    /// Clearance between pores and the cube faces, `≥ 0` and `< size / 2`.
    pub boundary_offset: f64,
}

impl CubeDomain {
    /// Create a new cubic domain.
    pub fn new(size: f64, boundary_offset: f64) -> Self {
        debug_assert!(size > 0.0, "size must be > 0");
        debug_assert!(
            boundary_offset >= 0.0 && 2.0 * boundary_offset < size,
            "boundary_offset must satisfy 0 <= 2b < size"
        );
        Self {
            size,
            boundary_offset,
        }
    }

    /// Volume of the cube, `size³`.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.size * self.size * self.size
    }

    /// Valid center interval `[lo, hi]` on each axis for a pore of radius `r`.
    ///
    /// Empty (`lo > hi`) when `r` is too large for the domain; configuration
    /// validation rules that out before sampling starts.
    #[inline]
    pub fn center_interval(&self, radius: f64) -> (f64, f64) {
        (
            self.boundary_offset + radius,
            self.size - self.boundary_offset - radius,
        )
    }

    /// Whether the pore's center lies within its valid interval on every axis.
    pub fn contains(&self, pore: &Pore) -> bool {
        let (lo, hi) = self.center_interval(pore.radius);
        let DVec3 { x, y, z } = pore.center;
        x >= lo && x <= hi && y >= lo && y <= hi && z >= lo && z <= hi
    }
}

/// Inclusive range of pore radii to draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusRange {
    /// Smallest radius, `> 0`.
    pub min: f64,
    /// Largest radius, `≥ min`; must also fit the domain (`max < L/2 − b`).
    pub max: f64,
}

impl RadiusRange {
    /// Create a new radius range.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min > 0.0 && min <= max, "need 0 < min <= max");
        Self { min, max }
    }

    /// Width of the range, `max − min` (zero for fixed-radius packings).
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_interval_shrinks_with_radius() {
        let domain = CubeDomain::new(1.0, 0.01);
        let (lo, hi) = domain.center_interval(0.1);
        assert_eq!(lo, 0.11);
        assert!((hi - 0.89).abs() < 1e-15);

        let (lo2, hi2) = domain.center_interval(0.2);
        assert!(lo2 > lo);
        assert!(hi2 < hi);
    }

    #[test]
    fn contains_checks_every_axis() {
        let domain = CubeDomain::new(1.0, 0.0);
        let inside = Pore::new(DVec3::splat(0.5), 0.1);
        assert!(domain.contains(&inside));

        let poking_out = Pore::new(DVec3::new(0.05, 0.5, 0.5), 0.1);
        assert!(!domain.contains(&poking_out));

        let on_edge = Pore::new(DVec3::new(0.1, 0.5, 0.5), 0.1);
        assert!(domain.contains(&on_edge));
    }

    #[test]
    fn volume_is_cubed_size() {
        let domain = CubeDomain::new(2.0, 0.1);
        assert_eq!(domain.volume(), 8.0);
    }

    #[test]
    fn radius_range_span() {
        let range = RadiusRange::new(0.03, 0.1);
        assert!((range.span() - 0.07).abs() < 1e-15);
        assert_eq!(RadiusRange::new(0.4, 0.4).span(), 0.0);
    }
}
