use pore_pack::prelude::*;
use pore_pack_examples::init_tracing;

/// Stand-in for a CAD kernel: counts cuts and tracks the removed volume.
#[derive(Default)]
struct LoggingKernel {
    cuts: usize,
    removed_volume: f64,
}

impl SphereCutter for LoggingKernel {
    fn subtract_sphere(&mut self, center: mint::Point3<f64>, radius: f64) -> Result<()> {
        self.cuts += 1;
        self.removed_volume += (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
        println!(
            "cut {:>3}: center = ({:.4}, {:.4}, {:.4}), r = {:.4}",
            self.cuts, center.x, center.y, center.z, radius
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PackingConfig::new(1.0)
        .with_seed(50)
        .with_boundary_offset(0.01)
        .with_target_porosity(0.02)
        .with_radius_range(0.03, 0.08);

    let packing = generate(&config)?;

    let mut kernel = LoggingKernel::default();
    cut_all(&mut kernel, &packing.pores)?;

    println!(
        "Handed {} sphere cuts to the kernel, removed volume {:.4}",
        kernel.cuts, kernel.removed_volume
    );

    Ok(())
}
