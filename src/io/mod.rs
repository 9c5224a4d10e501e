//! Input/Output operations for energy calculations
//!
//! This module handles dataset loading, logging setup, and result reporting.

mod dataset;
mod output;

pub use dataset::{load_dataset, Dataset, EriRecord};
pub use output::{log_energy_summary, setup_output, EnergySummary};
