//! Domain layer for ssmenv
//!
//! This module contains the core resolution model: environment maps,
//! namespace lists, the parameter store port and the errors they raise.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ResolveError, ResolveResult};
