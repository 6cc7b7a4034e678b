//! The spherical pore value type.
use std::f64::consts::PI;

use glam::DVec3;

/// A spherical pore: center and radius in domain units.
///
/// Immutable once accepted into a packing; acceptance order is the canonical
/// output order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pore {
    /// Center of the sphere in domain coordinates.
    pub center: DVec3,
    /// Radius of the sphere, strictly positive.
    pub radius: f64,
}

impl Pore {
    /// Create a new pore from a center and radius.
    pub fn new(center: DVec3, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "radius must be > 0");
        Self { center, radius }
    }

    /// Volume of the sphere, `(4/3)·π·r³`.
    #[inline]
    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius * self.radius * self.radius
    }

    /// Whether a candidate sphere at `center` with `radius` overlaps this pore.
    ///
    /// Touching counts as overlapping: accepted pairs must satisfy the strict
    /// `‖c1 − c2‖ > r1 + r2`.
    #[inline]
    pub fn overlaps_sphere(&self, center: DVec3, radius: f64) -> bool {
        let reach = self.radius + radius;
        self.center.distance_squared(center) <= reach * reach
    }

    /// Whether this pore overlaps (or touches) another.
    #[inline]
    pub fn overlaps(&self, other: &Pore) -> bool {
        self.overlaps_sphere(other.center, other.radius)
    }

    /// Center and radius in interop types, for handing off to a geometry kernel.
    pub fn as_sphere(&self) -> (mint::Point3<f64>, f64) {
        (self.center.into(), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_matches_closed_form() {
        let p = Pore::new(DVec3::ZERO, 1.0);
        assert!((p.volume() - 4.0 / 3.0 * PI).abs() < 1e-12);

        let p = Pore::new(DVec3::ZERO, 0.5);
        assert!((p.volume() - 4.0 / 3.0 * PI * 0.125).abs() < 1e-12);
    }

    #[test]
    fn touching_spheres_count_as_overlapping() {
        let a = Pore::new(DVec3::ZERO, 1.0);
        let b = Pore::new(DVec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.overlaps(&b));

        let c = Pore::new(DVec3::new(2.0 + 1e-9, 0.0, 0.0), 1.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Pore::new(DVec3::new(0.1, 0.2, 0.3), 0.4);
        let b = Pore::new(DVec3::new(0.5, 0.2, 0.3), 0.1);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn as_sphere_round_trips_center() {
        let p = Pore::new(DVec3::new(0.25, 0.5, 0.75), 0.05);
        let (center, radius) = p.as_sphere();
        assert_eq!(DVec3::from(center), p.center);
        assert_eq!(radius, 0.05);
    }
}
