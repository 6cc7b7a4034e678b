//! Plain-text export and the downstream geometry-kernel seam.
//!
//! The text format is one record per line, `x, y, z, radius`, comma-separated,
//! no header, in acceptance order. Other tools depend on this exact layout.
use std::io::Write;

use crate::error::Result;
use crate::pore::Pore;

/// Write pores as `x, y, z, radius` lines in acceptance order.
pub fn write_pores_csv<W: Write>(writer: &mut W, pores: &[Pore]) -> Result<()> {
    for pore in pores {
        writeln!(
            writer,
            "{}, {}, {}, {}",
            pore.center.x, pore.center.y, pore.center.z, pore.radius
        )?;
    }
    Ok(())
}

/// Downstream geometry kernel that subtracts spheres from a solid.
///
/// The packing core only hands over opaque "cut this sphere" requests; boolean
/// subtraction, export formats, and meshing are the kernel's business.
pub trait SphereCutter {
    /// Subtract one sphere from the solid.
    fn subtract_sphere(&mut self, center: mint::Point3<f64>, radius: f64) -> Result<()>;
}

/// Hand every pore to the kernel, in acceptance order.
pub fn cut_all(kernel: &mut dyn SphereCutter, pores: &[Pore]) -> Result<()> {
    for pore in pores {
        let (center, radius) = pore.as_sphere();
        kernel.subtract_sphere(center, radius)?;
    }
    Ok(())
}
