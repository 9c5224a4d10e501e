// Main library file for HF + MP2 energy calculations

pub mod hf_impl;
pub mod integrals_impl;
pub mod io;
pub mod mp2_impl;
