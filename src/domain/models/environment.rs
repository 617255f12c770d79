//! Environment and secret maps.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::errors::{ResolveError, ResolveResult};

/// Secrets fetched from a single namespace, keyed by their local name.
pub type SecretMap = BTreeMap<String, String>;

/// A process environment as a name to value mapping.
///
/// Keys are kept ordered so rendered output is stable, but callers must not
/// rely on the order of [`EnvironmentMap::to_environ`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `KEY=VALUE` entries into a map.
    ///
    /// Only the first `=` separates the name from the value, so
    /// `FOO_BAR=BAZ=BAZ` yields `FOO_BAR` -> `BAZ=BAZ`. An entry without `=`
    /// or with an empty name is rejected with
    /// [`ResolveError::MalformedEnvironEntry`]. A repeated name keeps the last
    /// value.
    pub fn parse_environ<I, S>(environ: I) -> ResolveResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vars = BTreeMap::new();
        for entry in environ {
            let entry = entry.as_ref();
            match entry.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    vars.insert(key.to_string(), value.to_string());
                }
                _ => return Err(ResolveError::MalformedEnvironEntry(entry.to_string())),
            }
        }
        Ok(Self(vars))
    }

    /// Set every secret on this map, replacing colliding names.
    pub fn overlay(&mut self, secrets: SecretMap) {
        self.0.extend(secrets);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render back into `KEY=VALUE` entries.
    pub fn to_environ(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }
}

/// Collect already split name and value pairs without re-parsing them.
impl FromIterator<(String, String)> for EnvironmentMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(vars: I) -> Self {
        Self(vars.into_iter().collect())
    }
}
