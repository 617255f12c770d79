//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface that store adapters must implement:
//! - ParameterStore: paginated listing of parameters under a path
//!
//! The resolution services depend only on this trait, so the production
//! SSM adapter and the in-memory double are interchangeable.

pub mod parameter_store;

pub use parameter_store::{Parameter, ParameterPage, ParameterStore, StoreError};
