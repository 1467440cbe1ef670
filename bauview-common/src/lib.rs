//! Shared types for the bauview dashboard
//!
//! Holds the pieces both the service crate and its tests agree on: the
//! error taxonomy, configuration loading, and the match data model.

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
