//! Run configuration for the energy calculation binary

mod args;

pub use args::Args;
