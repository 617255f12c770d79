//! Service layer: secret resolution.
//!
//! - `secret_fetcher`: paginated fetch of a single namespace
//! - `namespace_merger`: ordered overlay of many namespaces onto an environment

pub mod namespace_merger;
pub mod secret_fetcher;

pub use namespace_merger::{merge_overlay, overlay_namespaces, resolve_all, resolve_environment};
pub use secret_fetcher::fetch_namespace;
