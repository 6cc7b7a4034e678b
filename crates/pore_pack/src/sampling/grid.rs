//! Grid-indexed store for accepted pores.
use glam::DVec3;

use crate::domain::CubeDomain;
use crate::pore::Pore;

/// Accepted pores in acceptance order, indexed by a uniform cell grid.
///
/// Cell edge is at least `2·max_radius`, so any pore overlapping a candidate
/// has its center within one cell of the candidate's cell and the overlap test
/// only scans the 3×3×3 neighborhood.
#[derive(Debug, Clone)]
pub struct PoreGrid {
    cell_size: f64,
    cells_per_axis: usize,
    cells: Vec<Vec<u32>>,
    pores: Vec<Pore>,
}

impl PoreGrid {
    /// Create an empty grid covering `domain` for pores up to `max_radius`.
    pub fn new(domain: &CubeDomain, max_radius: f64) -> Self {
        debug_assert!(max_radius > 0.0, "max_radius must be > 0");
        let cell_size = (2.0 * max_radius).min(domain.size);
        let cells_per_axis = ((domain.size / cell_size).ceil() as usize).max(1);

        Self {
            cell_size,
            cells_per_axis,
            cells: vec![Vec::new(); cells_per_axis * cells_per_axis * cells_per_axis],
            pores: Vec::new(),
        }
    }

    #[inline]
    fn cell_coord(&self, v: f64) -> usize {
        ((v / self.cell_size).floor() as isize).clamp(0, self.cells_per_axis as isize - 1) as usize
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.cells_per_axis + y) * self.cells_per_axis + x
    }

    /// Append an accepted pore, preserving acceptance order.
    ///
    /// The pore's radius must not exceed the `max_radius` the grid was built
    /// for, or the neighborhood scan in [`PoreGrid::overlaps_any`] misses it.
    pub fn push(&mut self, pore: Pore) {
        debug_assert!(
            2.0 * pore.radius <= self.cell_size || self.cells_per_axis == 1,
            "pore radius exceeds the max_radius this grid was built for"
        );
        let x = self.cell_coord(pore.center.x);
        let y = self.cell_coord(pore.center.y);
        let z = self.cell_coord(pore.center.z);
        let idx = self.cell_index(x, y, z);
        self.cells[idx].push(self.pores.len() as u32);
        self.pores.push(pore);
    }

    /// Whether a candidate sphere overlaps (or touches) any stored pore.
    pub fn overlaps_any(&self, center: DVec3, radius: f64) -> bool {
        let gx = self.cell_coord(center.x);
        let gy = self.cell_coord(center.y);
        let gz = self.cell_coord(center.z);

        let start_x = gx.saturating_sub(1);
        let end_x = (gx + 2).min(self.cells_per_axis);
        let start_y = gy.saturating_sub(1);
        let end_y = (gy + 2).min(self.cells_per_axis);
        let start_z = gz.saturating_sub(1);
        let end_z = (gz + 2).min(self.cells_per_axis);

        for z in start_z..end_z {
            for y in start_y..end_y {
                for x in start_x..end_x {
                    let idx = self.cell_index(x, y, z);
                    for &i in &self.cells[idx] {
                        if self.pores[i as usize].overlaps_sphere(center, radius) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Stored pores in acceptance order.
    pub fn pores(&self) -> &[Pore] {
        &self.pores
    }

    /// Number of stored pores.
    pub fn len(&self) -> usize {
        self.pores.len()
    }

    /// Whether no pore has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.pores.is_empty()
    }

    /// Consume the grid, keeping only the ordered pore list.
    pub fn into_pores(self) -> Vec<Pore> {
        self.pores
    }
}
