//! Loading of the molecular integral dataset
//!
//! The integral provider hands over one YAML document with everything a
//! single calculation needs: the nuclear repulsion constant, the orbital
//! space, the core Hamiltonian, the orbital energies and the sparse
//! two-electron integral list. Consistency between the declared sizes and
//! the actual arrays is checked here, before any energy code runs.

extern crate nalgebra as na;

use crate::integrals_impl::{EriEntry, IntegralStore, OrbitalSpace};
use color_eyre::eyre::{ensure, Result, WrapErr};
use na::{DMatrix, DVector};
use serde::Deserialize;
use std::fs;

/// One two-electron integral record as serialized by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct EriRecord {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub l: usize,
    pub value: f64,
}

/// The full provider dataset for one energy calculation.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub nuclear_repulsion: f64,
    pub n_occ: usize,
    pub mo_num: usize,
    /// Row-major mo_num x mo_num core Hamiltonian in the MO basis.
    pub core_hamiltonian: Vec<f64>,
    pub orbital_energy: Vec<f64>,
    /// Count the provider reports for the list below. A mismatch means the
    /// transfer was truncated and is a hard error.
    #[serde(default)]
    pub n_integrals: Option<usize>,
    pub eri: Vec<EriRecord>,
}

impl Dataset {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.core_hamiltonian.len() == self.mo_num * self.mo_num,
            "core Hamiltonian holds {} values, expected {} for mo_num = {}",
            self.core_hamiltonian.len(),
            self.mo_num * self.mo_num,
            self.mo_num
        );
        ensure!(
            self.orbital_energy.len() == self.mo_num,
            "dataset lists {} orbital energies, expected mo_num = {}",
            self.orbital_energy.len(),
            self.mo_num
        );
        if let Some(declared) = self.n_integrals {
            ensure!(
                declared == self.eri.len(),
                "provider reported {} two-electron integrals but the list holds {}",
                declared,
                self.eri.len()
            );
        }
        for record in &self.eri {
            let indices = [record.i, record.j, record.k, record.l];
            ensure!(
                indices.iter().all(|&p| p < self.mo_num),
                "two-electron integral ({} {} {} {}) indexes outside mo_num = {}",
                record.i,
                record.j,
                record.k,
                record.l,
                self.mo_num
            );
        }
        Ok(())
    }

    /// Split the dataset into the pieces the energy kernels consume.
    pub fn into_parts(self) -> Result<(f64, OrbitalSpace, IntegralStore)> {
        self.validate()?;
        let Dataset {
            nuclear_repulsion,
            n_occ,
            mo_num,
            core_hamiltonian,
            orbital_energy,
            n_integrals: _,
            eri,
        } = self;

        let space = OrbitalSpace::new(n_occ, mo_num, DVector::from_vec(orbital_energy))?;
        let h_core = DMatrix::from_row_slice(mo_num, mo_num, &core_hamiltonian);
        let entries = eri
            .into_iter()
            .map(|r| EriEntry::new(r.i, r.j, r.k, r.l, r.value))
            .collect();
        Ok((nuclear_repulsion, space, IntegralStore::new(h_core, entries)))
    }
}

/// Read and parse a dataset file.
pub fn load_dataset(path: &str) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read dataset file: {}", path))?;
    let dataset: Dataset =
        serde_yml::from_str(&content).wrap_err("Failed to parse dataset file")?;
    Ok(dataset)
}
