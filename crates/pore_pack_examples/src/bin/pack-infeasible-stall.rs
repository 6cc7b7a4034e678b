use pore_pack::prelude::*;
use pore_pack_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 90% porosity from fixed 0.4-radius spheres in a unit cube is impossible:
    // a single sphere fills ~27%, and no second one fits. The stall guard turns
    // this into an explicit failure with the partial packing attached.
    let config = PackingConfig::new(1.0)
        .with_seed(7)
        .with_boundary_offset(0.01)
        .with_target_porosity(0.9)
        .with_radius_range(0.4, 0.4)
        .with_max_rejections(10_000);

    match generate(&config) {
        Ok(packing) => println!(
            "Unexpectedly reached the target with {} pores (fraction {:.4})",
            packing.pores.len(),
            packing.achieved_porosity
        ),
        Err(Error::Infeasible { attempts, partial }) => {
            println!(
                "Gave up after {attempts} consecutive rejections: {} pores placed, \
                 volume fraction {:.4} of the 0.9 target",
                partial.pores.len(),
                partial.achieved_porosity
            );
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
