use pore_pack::prelude::*;
use pore_pack_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One shared RNG across the sweep: later runs continue the draw sequence,
    // so each density level sees fresh randomness under a single seed.
    let mut rng = StdRng::seed_from_u64(2025);

    for target in [0.01, 0.02, 0.05, 0.1, 0.2] {
        let config = PackingConfig::new(1.0)
            .with_boundary_offset(0.01)
            .with_target_porosity(target)
            .with_radius_range(0.02, 0.06);

        let runner = PackingRunner::try_new(config)?;
        match runner.run_with_rng(&mut rng) {
            Ok(packing) => println!(
                "target {:.2}: {} pores, achieved {:.4}, {} candidates ({} rejected)",
                target,
                packing.pores.len(),
                packing.achieved_porosity,
                packing.candidates_tried,
                packing.candidates_rejected
            ),
            Err(Error::Infeasible { partial, .. }) => {
                println!(
                    "target {:.2}: stalled at {:.4} with {} pores",
                    target,
                    partial.achieved_porosity,
                    partial.pores.len()
                );
                break;
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(())
}
