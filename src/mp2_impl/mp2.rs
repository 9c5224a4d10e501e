//! Core MP2 implementation

use crate::integrals_impl::{IntegralStore, OrbitalSpace};
use color_eyre::eyre::{ensure, Result};
use rayon::prelude::*;
use tracing::info;

/// How the MP2 double sum is evaluated. Both strategies produce the same
/// value up to floating-point rounding on a self-consistent integral set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mp2Strategy {
    /// Full quadruple loop over (i, j, a, b) with a symmetry lookup per term.
    Dense,
    /// Single pass over the stored list, restricted to the virtual-pair-first
    /// <ab|ij> block, with multiplicity weights replacing the double visit.
    Sparse,
}

/// MP2 correlation engine over a read-only integral store and orbital space.
pub struct Mp2<'a> {
    store: &'a IntegralStore,
    space: &'a OrbitalSpace,
}

impl<'a> Mp2<'a> {
    pub fn new(store: &'a IntegralStore, space: &'a OrbitalSpace) -> Self {
        Mp2 { store, space }
    }

    /// MP2 correlation energy with the requested evaluation strategy.
    pub fn correction(&self, strategy: Mp2Strategy) -> Result<f64> {
        match strategy {
            Mp2Strategy::Dense => self.correction_dense(),
            Mp2Strategy::Sparse => self.correction_sparse(),
        }
    }

    /// Energy denominator ε_i + ε_j - ε_a - ε_b for one excitation.
    ///
    /// A valid closed-shell reference puts every occupied orbital below
    /// every virtual one, so the denominator must be strictly negative;
    /// anything else is corrupt input data and fails the whole correction.
    fn denominator(&self, i: usize, j: usize, a: usize, b: usize) -> Result<f64> {
        let denom =
            self.space.energy(i) + self.space.energy(j) - self.space.energy(a) - self.space.energy(b);
        ensure!(
            denom < 0.0,
            "degenerate MP2 denominator {:.3e} for excitation ({} {}) -> ({} {}): \
             occupied orbital energies must lie below virtual ones",
            denom,
            i,
            j,
            a,
            b
        );
        Ok(denom)
    }

    /// Dense strategy: the literal double sum over occupied pairs (i, j) and
    /// virtual pairs (a, b), every integral fetched by symmetry lookup.
    ///
    /// The occupied pairs are processed in parallel; each pair's partial sum
    /// is accumulated sequentially and the partials are combined in fixed
    /// pair order, so the result is deterministic for a given input.
    pub fn correction_dense(&self) -> Result<f64> {
        let n_occ = self.space.n_occ();
        let n_virt = self.space.n_virt();
        if n_occ == 0 || n_virt == 0 {
            info!("No occupied or virtual orbitals, MP2 correction is zero.");
            return Ok(0.0);
        }

        let pairs: Vec<(usize, usize)> = self
            .space
            .occupied()
            .flat_map(|i| self.space.occupied().map(move |j| (i, j)))
            .collect();
        info!(
            "Computing MP2 correction over {} occupied pairs x {} virtual pairs...",
            pairs.len(),
            n_virt * n_virt
        );

        let partials: Vec<f64> = pairs
            .par_iter()
            .map(|&(i, j)| -> Result<f64> {
                let mut sum = 0.0;
                for a in self.space.virtuals() {
                    for b in self.space.virtuals() {
                        let denom = self.denominator(i, j, a, b)?;
                        let ijab = self.store.lookup(i, j, a, b);
                        let ijba = self.store.lookup(i, j, b, a);
                        sum += ijab * (2.0 * ijab - ijba) / denom;
                    }
                }
                Ok(sum)
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(partials.iter().sum())
    }

    /// Sparse strategy: one pass over the stored list.
    ///
    /// Only entries storing a virtual pair first and an occupied pair last
    /// (the <ab|ij> form, equal to <ij|ab> for real orbitals) contribute.
    /// The dense sum visits each such class twice, as (i, j, a, b) and
    /// (j, i, b, a), except when i == j and a == b, hence the weight.
    pub fn correction_sparse(&self) -> Result<f64> {
        let n_occ = self.space.n_occ();
        if n_occ == 0 || self.space.n_virt() == 0 {
            info!("No occupied or virtual orbitals, MP2 correction is zero.");
            return Ok(0.0);
        }

        let mut energy = 0.0;
        for entry in self.store.entries() {
            let (a, b, i, j) = (entry.i, entry.j, entry.k, entry.l);
            if a < n_occ || b < n_occ || i >= n_occ || j >= n_occ {
                continue;
            }
            let denom = self.denominator(i, j, a, b)?;
            let ijab = entry.value;
            let ijba = self.store.lookup(i, j, b, a);
            let weight = if i == j && a == b { 1.0 } else { 2.0 };
            energy += weight * ijab * (2.0 * ijab - ijba) / denom;
        }
        Ok(energy)
    }
}
