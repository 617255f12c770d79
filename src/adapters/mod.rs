//! Parameter store adapters.

pub mod memory;
pub mod ssm;

pub use memory::{InMemoryParameterStore, ListCall};
pub use ssm::SsmParameterStore;
