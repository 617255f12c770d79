//! Parameter store port - interface for hierarchical key-value stores.

use async_trait::async_trait;
use thiserror::Error;

/// A single stored parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Full hierarchical name, e.g. `/prefix/ONE_VALUE`
    pub name: String,
    /// Plain (decrypted) value
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    /// Continuation token; `None` ends the listing
    pub next_cursor: Option<String>,
}

/// Failures reported by a parameter store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Request throttled: {0}")]
    Throttled(String),

    #[error("Invalid continuation token: {0}")]
    InvalidCursor(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service error: {0}")]
    Service(String),
}

/// Port trait for listing parameters by path.
///
/// Implementations must be `Send + Sync`; the handle is shared read-only
/// across every namespace fetch of a resolve.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// List one page of parameters below `path`.
    ///
    /// `path` carries both separators (`/prefix/`). Pass the previous page's
    /// `next_cursor` to continue, `None` to start.
    async fn list_by_path(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> Result<ParameterPage, StoreError>;
}
