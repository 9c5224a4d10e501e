//! Core HF energy implementation

use crate::integrals_impl::{IntegralStore, OrbitalSpace};
use tracing::info;

/// Assembles the Hartree-Fock energy contributions from an integral store
/// and an orbital space. Holds no state of its own; every method is a pure
/// function of the borrowed inputs.
pub struct EnergyAssembler<'a> {
    store: &'a IntegralStore,
    space: &'a OrbitalSpace,
}

impl<'a> EnergyAssembler<'a> {
    pub fn new(store: &'a IntegralStore, space: &'a OrbitalSpace) -> Self {
        EnergyAssembler { store, space }
    }

    /// One-electron contribution: 2 h_ii summed over the occupied orbitals.
    /// The factor 2 is the double occupancy of a restricted spatial orbital.
    pub fn one_electron_energy(&self) -> f64 {
        let h = self.store.core_hamiltonian();
        self.space.occupied().map(|i| 2.0 * h[(i, i)]).sum()
    }

    /// Two-electron (Coulomb/exchange) contribution.
    ///
    /// A single pass over the stored list keeps the entries whose first two
    /// indices are both occupied; the filter is an index-range test on every
    /// entry, so correctness does not depend on the provider's list order.
    /// Classification of the kept representatives:
    ///
    /// - all four indices equal: the folded 2J-K self term, added once
    /// - `k == i && l == j`, an (ij|ij) shape: Coulomb, weight +4
    ///   (prefactor 2, and x2 because only one of the two orderings of the
    ///   occupied pair is stored)
    /// - `i == j && k == l`, an (ii|kk) shape: exchange, weight -2
    ///
    /// Anything else among occupied-first entries contributes nothing.
    pub fn two_electron_energy(&self) -> f64 {
        let n_occ = self.space.n_occ();
        let mut energy = 0.0;
        for entry in self.store.entries() {
            if entry.i >= n_occ || entry.j >= n_occ {
                continue;
            }
            if entry.i == entry.j && entry.j == entry.k && entry.k == entry.l {
                energy += entry.value;
            } else if entry.k == entry.i && entry.l == entry.j {
                energy += 4.0 * entry.value;
            } else if entry.i == entry.j && entry.k == entry.l {
                energy -= 2.0 * entry.value;
            }
        }
        energy
    }

    /// Total HF energy: nuclear repulsion plus both electronic contributions.
    pub fn hartree_fock_energy(&self, nuclear_repulsion: f64) -> f64 {
        let one_el = self.one_electron_energy();
        let two_el = self.two_electron_energy();
        info!("One-electron energy: {:.10} Eh", one_el);
        info!("Two-electron energy: {:.10} Eh", two_el);
        nuclear_repulsion + one_el + two_el
    }
}
