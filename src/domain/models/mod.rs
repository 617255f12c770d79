pub mod config;
pub mod environment;
pub mod namespace;

pub use config::{Config, LoggingConfig, RotationPolicy, StoreConfig};
pub use environment::{EnvironmentMap, SecretMap};
pub use namespace::{Namespace, NamespaceList, PATH_SEPARATOR};
