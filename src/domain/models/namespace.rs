//! Namespaces in the parameter store hierarchy.

use std::fmt;

/// Separator between levels of the parameter hierarchy.
pub const PATH_SEPARATOR: char = '/';

/// A single namespace, stored without surrounding separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Build a namespace from a raw token.
    ///
    /// Whitespace and leading/trailing separators are trimmed. Returns `None`
    /// when nothing is left.
    pub fn parse(token: &str) -> Option<Self> {
        let trimmed = token.trim().trim_matches(PATH_SEPARATOR);
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Listing path for this namespace, e.g. `/prefix/1/`.
    pub fn path(&self) -> String {
        format!("{PATH_SEPARATOR}{}{PATH_SEPARATOR}", self.0)
    }

    /// Strip this namespace's path from a full parameter name.
    ///
    /// Returns `None` when the name is not under the namespace.
    pub fn local_key<'a>(&self, full_name: &'a str) -> Option<&'a str> {
        full_name
            .strip_prefix(PATH_SEPARATOR)?
            .strip_prefix(self.0.as_str())?
            .strip_prefix(PATH_SEPARATOR)
            .filter(|key| !key.is_empty())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered namespaces parsed from a comma-separated list.
///
/// Later namespaces take precedence over earlier ones when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceList(Vec<Namespace>);

impl NamespaceList {
    /// Split on commas, dropping empty tokens and keeping input order.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').filter_map(Namespace::parse).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Namespace> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a NamespaceList {
    type Item = &'a Namespace;
    type IntoIter = std::slice::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
