//! Hartree-Fock energy assembly from precomputed MO integrals
//!
//! This module combines the one-electron matrix and the symmetry-reduced
//! two-electron integral list into the restricted closed-shell HF energy:
//!
//! E_HF = E_nuc + Σ_i 2 h_ii + Σ_ij (2 J_ij - K_ij)
//!
//! where i, j run over the doubly occupied orbitals. Because the provider
//! stores one representative per permutation class, the two-electron sum is
//! accumulated in a single pass over the stored list with per-entry
//! classification and symmetry weights instead of an explicit double loop.

mod hf;
#[cfg(test)]
mod tests;

pub use hf::EnergyAssembler;
