//! Storage and lookup of precomputed molecular-orbital integrals
//!
//! This module owns the integral data a single energy calculation runs on:
//! the dense one-electron (core Hamiltonian) matrix and the sparse list of
//! two-electron repulsion integrals.
//!
//! # Symmetry
//!
//! For real orbitals every two-electron integral (ij|kl) belongs to an
//! 8-fold permutation-equivalence class:
//!
//! (ij|kl) = (ji|lk) = (kl|ij) = (lk|ji) = (kj|il) = (il|kj) = (jk|li) = (li|jk)
//!
//! The provider stores one representative per class, so lookups must test
//! value equivalence under the full group rather than index the raw list.
//! [`IntegralStore::lookup`] does this through a canonicalized hash table;
//! a linear-scan variant is kept as the reference behavior and both are
//! required to return identical values (first stored entry of a class wins).

mod store;

pub use store::{EriEntry, IntegralStore, OrbitalSpace};
