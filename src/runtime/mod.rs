//! Runtime setup for the demo binary.
//!
//! - [`Config`] - where the catalog lives and how much of it to show
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
