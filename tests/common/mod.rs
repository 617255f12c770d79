//! Common test utilities for integration tests
//!
//! Provides a closure-driven parameter store and logging setup shared
//! across integration test files.

use async_trait::async_trait;
use ssmenv::{Parameter, ParameterPage, ParameterStore, StoreError};

/// Parameter store whose pages are produced by a closure.
///
/// The closure receives the requested path and cursor, mirroring a raw
/// `GetParametersByPath` handler.
pub struct ScriptedStore<F> {
    getter: F,
}

impl<F> ScriptedStore<F>
where
    F: Fn(&str, Option<&str>) -> Result<ParameterPage, StoreError> + Send + Sync,
{
    pub fn new(getter: F) -> Self {
        Self { getter }
    }
}

#[async_trait]
impl<F> ParameterStore for ScriptedStore<F>
where
    F: Fn(&str, Option<&str>) -> Result<ParameterPage, StoreError> + Send + Sync,
{
    async fn list_by_path(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        (self.getter)(path, cursor)
    }
}

/// Build a page from `(name, value)` pairs.
pub fn page(parameters: &[(&str, &str)], next_cursor: Option<&str>) -> ParameterPage {
    ParameterPage {
        parameters: parameters
            .iter()
            .map(|(name, value)| Parameter::new(*name, *value))
            .collect(),
        next_cursor: next_cursor.map(str::to_string),
    }
}

/// Two namespaces, each spread over two pages, both defining `VALUE_IN_BOTH`.
#[allow(dead_code)]
pub fn shared_getter(path: &str, cursor: Option<&str>) -> Result<ParameterPage, StoreError> {
    let page = match (path, cursor) {
        ("/prefix/1/", None) => page(
            &[("/prefix/1/VALUE_FIRST_ONLY", "I CAME FROM PREFIX 1")],
            Some("2"),
        ),
        ("/prefix/1/", Some(_)) => {
            page(&[("/prefix/1/VALUE_IN_BOTH", "I CAME FROM PREFIX 1")], None)
        }
        ("/prefix/2/", None) => page(
            &[("/prefix/2/VALUE_SECOND_ONLY", "I CAME FROM PREFIX 2")],
            Some("2"),
        ),
        ("/prefix/2/", Some(_)) => {
            page(&[("/prefix/2/VALUE_IN_BOTH", "I CAME FROM PREFIX 2")], None)
        }
        // any other path lists nothing
        _ => page(&[], None),
    };
    Ok(page)
}

/// Sort entries so assertions do not depend on output order.
#[allow(dead_code)]
pub fn sorted(mut entries: Vec<String>) -> Vec<String> {
    entries.sort();
    entries
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
