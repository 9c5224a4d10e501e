//! HF + MP2 energy calculation command-line interface
//!
//! Loads a YAML dataset of precomputed molecular-orbital integrals, computes
//! the restricted Hartree-Fock energy and the MP2 correlation correction,
//! and reports an energy summary.

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use tracing::info;

mod config;

use config::Args;
use hf_mp2::hf_impl::EnergyAssembler;
use hf_mp2::io::{load_dataset, log_energy_summary, setup_output, EnergySummary};
use hf_mp2::mp2_impl::{Mp2, Mp2Strategy};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.output.as_ref());

    info!("Reading molecular dataset from: {}", args.dataset_file);
    let dataset = load_dataset(&args.dataset_file)?;
    let (nuclear_repulsion, space, store) = dataset.into_parts()?;
    info!(
        "Dataset loaded: {} occupied of {} molecular orbitals, {} two-electron integrals",
        space.n_occ(),
        space.mo_num(),
        store.n_integrals()
    );

    info!("Calculating the Hartree-Fock energy...");
    let assembler = EnergyAssembler::new(&store, &space);
    let one_electron = assembler.one_electron_energy();
    let two_electron = assembler.two_electron_energy();
    let hartree_fock = assembler.hartree_fock_energy(nuclear_repulsion);

    let mp2_correction = if args.skip_mp2 {
        info!("Skipping the MP2 correction as requested.");
        None
    } else {
        let strategy = match args.mp2_strategy.to_lowercase().as_str() {
            "dense" => Mp2Strategy::Dense,
            "sparse" => Mp2Strategy::Sparse,
            other => bail!("Unknown MP2 strategy: {} (expected dense or sparse)", other),
        };
        info!("Calculating the MP2 energy correction ({:?} strategy)...", strategy);
        Some(Mp2::new(&store, &space).correction(strategy)?)
    };

    log_energy_summary(&EnergySummary {
        nuclear_repulsion,
        one_electron,
        two_electron,
        hartree_fock,
        mp2_correction,
        n_occ: space.n_occ(),
        mo_num: space.mo_num(),
        n_integrals: store.n_integrals(),
    });

    Ok(())
}
