//! ssmenv - parameter store secrets for process environments
//!
//! ssmenv fetches every parameter stored below one or more namespaces of a
//! hierarchical parameter store (AWS SSM Parameter Store in production),
//! merges them so that later namespaces override earlier ones, and overlays
//! the result onto an existing environment.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): environment and namespace models, the
//!   `ParameterStore` port and resolution errors
//! - **Service Layer** (`services`): paginated fetch and ordered merge
//! - **Adapters** (`adapters`): SSM and in-memory `ParameterStore` implementations
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use ssmenv::adapters::InMemoryParameterStore;
//! use ssmenv::services::resolve_all;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = InMemoryParameterStore::new()
//!     .with_parameter("/app/shared/LOG_LEVEL", "info")
//!     .with_parameter("/app/prod/LOG_LEVEL", "warn");
//!
//! let env = resolve_all(&store, "app/shared,app/prod", ["HOME=/root"]).await.unwrap();
//! assert!(env.contains(&"LOG_LEVEL=warn".to_string()));
//! # });
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{InMemoryParameterStore, SsmParameterStore};
pub use domain::errors::{ResolveError, ResolveResult};
pub use domain::models::{Config, EnvironmentMap, Namespace, NamespaceList, SecretMap};
pub use domain::ports::{Parameter, ParameterPage, ParameterStore, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{fetch_namespace, merge_overlay, resolve_all};
