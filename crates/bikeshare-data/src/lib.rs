//! Data layer for the bikeshare explorer.
//!
//! Loads a city's trip file into a typed table, validates and filters it, and
//! computes the frequency and aggregate statistics shown by the reports.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use bikeshare_core as core;
