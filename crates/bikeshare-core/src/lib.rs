//! Shared vocabulary for the bikeshare explorer.
//!
//! Error type, option maps, typed trip records and schema, timestamp parsing,
//! command-line settings and small text helpers used by the data and console
//! layers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
