//! Command-line argument parsing for the energy calculation binary

use clap::Parser;

/// Hartree-Fock and MP2 energies from precomputed MO integrals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML dataset with the MO integrals
    #[arg(short, long, default_value = "dataset.yaml")]
    pub dataset_file: String,

    /// Write the log to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// MP2 evaluation strategy (dense or sparse)
    #[arg(long, default_value = "dense")]
    pub mp2_strategy: String,

    /// Stop after the Hartree-Fock energy
    #[arg(long)]
    pub skip_mp2: bool,
}
