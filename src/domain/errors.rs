//! Domain errors for secret resolution.

use thiserror::Error;

use crate::domain::ports::StoreError;

/// Errors that can occur while resolving secrets into an environment.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A listing call for the namespace failed on some page.
    #[error("Failed to fetch secrets for namespace '{namespace}': {source}")]
    Fetch {
        namespace: String,
        #[source]
        source: StoreError,
    },

    /// An environment entry had no `=` separator or an empty name.
    #[error("Malformed environment entry (expected KEY=VALUE): {0:?}")]
    MalformedEnvironEntry(String),
}

impl ResolveError {
    /// Wrap a store failure for the given namespace.
    pub fn fetch(namespace: impl Into<String>, source: StoreError) -> Self {
        Self::Fetch {
            namespace: namespace.into(),
            source,
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
