use std::fs::File;
use std::io::BufWriter;

use pore_pack::prelude::*;
use pore_pack_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A unit cube with 5% pore volume and radii between 0.03 and 0.1.
    let config = PackingConfig::new(1.0)
        .with_seed(50)
        .with_boundary_offset(0.01)
        .with_target_porosity(0.05)
        .with_radius_range(0.03, 0.1);

    let packing = generate(&config)?;

    println!(
        "Generated {} pores, pore volume fraction = {:.4}",
        packing.pores.len(),
        packing.achieved_porosity
    );

    let out = "pore_centers_radii.csv";
    let mut writer = BufWriter::new(File::create(out)?);
    write_pores_csv(&mut writer, &packing.pores)?;
    println!("Pore centers & radii saved to {out}");

    Ok(())
}
