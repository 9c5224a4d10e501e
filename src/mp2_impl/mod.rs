//! MP2 (Møller-Plesset perturbation theory, second order) implementation
//!
//! This module computes the MP2 correlation correction on top of a
//! Hartree-Fock energy, from already-converged orbital energies and
//! MO-basis two-electron integrals.
//!
//! # Theory
//!
//! For a restricted closed-shell reference:
//!
//! E_MP2 = Σ_{ijab} <ij|ab> * (2*<ij|ab> - <ij|ba>) / (ε_i + ε_j - ε_a - ε_b)
//!
//! where:
//! - i, j run over occupied molecular orbitals
//! - a, b run over virtual (unoccupied) molecular orbitals
//! - <ij|ab> are two-electron integrals resolved through the 8-fold
//!   permutation symmetry of the stored list
//! - ε are orbital energies
//!
//! Two evaluation strategies are provided and must agree numerically:
//! [`Mp2Strategy::Dense`] walks the full quadruple loop with one symmetry
//! lookup per integral, while [`Mp2Strategy::Sparse`] makes a single pass
//! over the stored list and weights each representative by its multiplicity
//! in the dense sum.
//!
//! # Usage
//!
//! ```ignore
//! let mp2 = Mp2::new(&store, &space);
//! let correlation_energy = mp2.correction(Mp2Strategy::Dense)?;
//! let total_energy = hf_energy + correlation_energy;
//! ```

mod mp2;

pub use mp2::{Mp2, Mp2Strategy};
