//! CLI command implementations.

pub mod export;
pub mod run;

use anyhow::{anyhow, Context, Result};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cli::types::ResolveArgs;
use crate::domain::errors::ResolveResult;
use crate::domain::models::{Config, EnvironmentMap, NamespaceList};

impl ResolveArgs {
    /// Namespaces from the command line, falling back to the configuration.
    pub fn namespaces<'a>(&'a self, config: &'a Config) -> Result<&'a str> {
        let raw = self
            .namespaces
            .as_deref()
            .or(config.namespaces.as_deref())
            .context("No namespaces given: pass --namespaces or set `namespaces` in the configuration")?;

        if NamespaceList::parse(raw).is_empty() {
            warn!(namespaces = raw, "namespace list is empty, no secrets will be fetched");
        }
        Ok(raw)
    }

    /// Deadline for the whole resolve, if any.
    pub fn timeout(&self, config: &Config) -> Option<Duration> {
        self.timeout_secs
            .or(config.timeout_secs)
            .map(Duration::from_secs)
    }
}

/// Await `resolve`, failing if it does not finish within `timeout`.
pub async fn with_deadline<T, F>(timeout: Option<Duration>, resolve: F) -> Result<T>
where
    F: Future<Output = ResolveResult<T>>,
{
    let resolved = match timeout {
        Some(limit) => tokio::time::timeout(limit, resolve)
            .await
            .map_err(|_| anyhow!("Resolving secrets timed out after {}s", limit.as_secs()))?,
        None => resolve.await,
    };
    Ok(resolved?)
}

/// The current process environment.
///
/// Names and values are taken as the OS reports them, without splitting on
/// `=` again. Variables that are not valid UTF-8 are left out of the map;
/// a launched child still inherits them.
pub fn current_environment() -> EnvironmentMap {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let name = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                debug!(name = %name, "not a UTF-8 environment variable, leaving it out");
                None
            }
        })
        .collect()
}
