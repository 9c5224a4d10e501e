//! Core integral storage types

extern crate nalgebra as na;

use color_eyre::eyre::{ensure, Result};
use na::{DMatrix, DVector};
use std::collections::HashMap;
use tracing::info;

/// One stored two-electron integral (ij|kl), chemist notation, representing
/// its whole 8-fold permutation class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EriEntry {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub l: usize,
    pub value: f64,
}

impl EriEntry {
    pub fn new(i: usize, j: usize, k: usize, l: usize, value: f64) -> Self {
        EriEntry { i, j, k, l, value }
    }

    fn key(&self) -> [usize; 4] {
        [self.i, self.j, self.k, self.l]
    }
}

/// The 8 index permutations that leave a real-orbital (ij|kl) invariant.
fn permutations([i, j, k, l]: [usize; 4]) -> [[usize; 4]; 8] {
    [
        [i, j, k, l],
        [j, i, l, k],
        [k, l, i, j],
        [l, k, j, i],
        [k, j, i, l],
        [i, l, k, j],
        [j, k, l, i],
        [l, i, j, k],
    ]
}

/// Canonical class representative: the lexicographically smallest of the
/// 8 permutations. Every member of a class maps to the same key.
fn canonical(key: [usize; 4]) -> [usize; 4] {
    let mut best = key;
    for perm in permutations(key) {
        if perm < best {
            best = perm;
        }
    }
    best
}

/// The orbital space of a restricted closed-shell calculation.
///
/// Orbitals `[0, n_occ)` are doubly occupied, `[n_occ, mo_num)` are virtual.
#[derive(Debug, Clone)]
pub struct OrbitalSpace {
    n_occ: usize,
    mo_num: usize,
    orbital_energy: DVector<f64>,
}

impl OrbitalSpace {
    /// Build an orbital space, rejecting an occupation count that exceeds the
    /// orbital count or an energy vector of the wrong length.
    pub fn new(n_occ: usize, mo_num: usize, orbital_energy: DVector<f64>) -> Result<Self> {
        ensure!(
            n_occ <= mo_num,
            "invalid orbital space: n_occ ({}) exceeds mo_num ({})",
            n_occ,
            mo_num
        );
        ensure!(
            orbital_energy.len() == mo_num,
            "invalid orbital space: expected {} orbital energies, got {}",
            mo_num,
            orbital_energy.len()
        );
        Ok(OrbitalSpace {
            n_occ,
            mo_num,
            orbital_energy,
        })
    }

    pub fn n_occ(&self) -> usize {
        self.n_occ
    }

    pub fn mo_num(&self) -> usize {
        self.mo_num
    }

    pub fn n_virt(&self) -> usize {
        self.mo_num - self.n_occ
    }

    /// Indices of the occupied orbitals.
    pub fn occupied(&self) -> std::ops::Range<usize> {
        0..self.n_occ
    }

    /// Indices of the virtual orbitals.
    pub fn virtuals(&self) -> std::ops::Range<usize> {
        self.n_occ..self.mo_num
    }

    pub fn energy(&self, p: usize) -> f64 {
        self.orbital_energy[p]
    }
}

/// Read-only store of the one-electron matrix and the sparse two-electron
/// integral list, with symmetry-aware lookup.
pub struct IntegralStore {
    core_hamiltonian: DMatrix<f64>,
    entries: Vec<EriEntry>,
    table: HashMap<[usize; 4], f64>,
}

impl IntegralStore {
    /// Take ownership of the provider's integral data and build the
    /// canonicalized lookup table.
    ///
    /// If two stored entries fall into the same class (a provider defect,
    /// tolerated by contract) the first one in stored order wins, matching
    /// the behavior of a forward linear scan.
    pub fn new(core_hamiltonian: DMatrix<f64>, entries: Vec<EriEntry>) -> Self {
        let mut table = HashMap::with_capacity(entries.len());
        for entry in &entries {
            table.entry(canonical(entry.key())).or_insert(entry.value);
        }
        info!(
            "Integral store ready: {} two-electron integrals, {} symmetry classes",
            entries.len(),
            table.len()
        );
        IntegralStore {
            core_hamiltonian,
            entries,
            table,
        }
    }

    /// Value of (ij|kl) for an arbitrary index tuple, resolving through the
    /// 8-fold symmetry group. An index tuple with no stored class member
    /// is a screened-out integral and yields 0.0.
    pub fn lookup(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        self.table
            .get(&canonical([i, j, k, l]))
            .copied()
            .unwrap_or(0.0)
    }

    /// Reference lookup: forward scan of the stored list, testing the query
    /// against all 8 permutations of each entry. Kept as the baseline the
    /// hashed path must reproduce, including the first-match tie-break.
    pub fn lookup_scan(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        let query = [i, j, k, l];
        for entry in &self.entries {
            if permutations(entry.key()).contains(&query) {
                return entry.value;
            }
        }
        0.0
    }

    pub fn core_hamiltonian(&self) -> &DMatrix<f64> {
        &self.core_hamiltonian
    }

    pub fn entries(&self) -> &[EriEntry] {
        &self.entries
    }

    pub fn n_integrals(&self) -> usize {
        self.entries.len()
    }
}
