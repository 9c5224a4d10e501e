//! Output formatting and logging utilities

use std::fmt;
use std::fs::File;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => {
            if let Ok(log) = File::create(path) {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
            } else {
                eprintln!("Could not create output file: {}", path);
            }
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// Final energies of one calculation, as reported to the user.
#[derive(Debug, Clone)]
pub struct EnergySummary {
    pub nuclear_repulsion: f64,
    pub one_electron: f64,
    pub two_electron: f64,
    pub hartree_fock: f64,
    /// None when the MP2 correction was skipped.
    pub mp2_correction: Option<f64>,
    pub n_occ: usize,
    pub mo_num: usize,
    pub n_integrals: usize,
}

/// Print the energy summary through the active tracing subscriber.
pub fn log_energy_summary(summary: &EnergySummary) {
    info!("================== Energy Summary ==================");
    info!("Nuclear repulsion energy:   {:14.6} Eh", summary.nuclear_repulsion);
    info!("One-electron energy:        {:14.6} Eh", summary.one_electron);
    info!("Two-electron energy:        {:14.6} Eh", summary.two_electron);
    info!("Hartree-Fock energy:        {:14.6} Eh", summary.hartree_fock);
    match summary.mp2_correction {
        Some(corr) => {
            info!("MP2 energy correction:      {:14.6} Eh", corr);
            info!("Total energy (HF + MP2):    {:14.6} Eh", summary.hartree_fock + corr);
        }
        None => info!("MP2 energy correction:      skipped"),
    }
    info!("================ System Information ================");
    info!("Number of occupied orbitals:      {}", summary.n_occ);
    info!("Number of molecular orbitals:     {}", summary.mo_num);
    info!("Number of two-electron integrals: {}", summary.n_integrals);
}
