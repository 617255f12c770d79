//! In-memory parameter store for testing.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::models::PATH_SEPARATOR;
use crate::domain::ports::{Parameter, ParameterPage, ParameterStore, StoreError};

const DEFAULT_PAGE_SIZE: usize = 10;

/// Failure injected for a listing path.
#[derive(Debug, Clone)]
struct FailurePlan {
    /// Pages served successfully before the error is returned
    after_pages: usize,
    error: StoreError,
}

/// A recorded `list_by_path` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub path: String,
    pub cursor: Option<String>,
}

/// Parameter store backed by a sorted map.
///
/// Listings are paged with a decimal offset as the cursor. Non-recursive
/// listings only return direct children of the path, like SSM.
pub struct InMemoryParameterStore {
    parameters: BTreeMap<String, String>,
    page_size: usize,
    recursive: bool,
    failures: HashMap<String, FailurePlan>,
    calls: Arc<Mutex<Vec<ListCall>>>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
            recursive: false,
            failures: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a parameter under its full name.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Number of parameters returned per page (minimum 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Fail every listing of `path` immediately.
    #[must_use]
    pub fn failing_on(self, path: impl Into<String>, error: StoreError) -> Self {
        self.failing_after(path, 0, error)
    }

    /// Serve `pages` pages of `path`, then fail.
    #[must_use]
    pub fn failing_after(mut self, path: impl Into<String>, pages: usize, error: StoreError) -> Self {
        self.failures.insert(
            path.into(),
            FailurePlan {
                after_pages: pages,
                error,
            },
        );
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ListCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn in_scope(&self, path: &str, name: &str) -> bool {
        name.strip_prefix(path).is_some_and(|rest| {
            !rest.is_empty() && (self.recursive || !rest.contains(PATH_SEPARATOR))
        })
    }
}

impl Default for InMemoryParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn list_by_path(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> Result<ParameterPage, StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ListCall {
                path: path.to_string(),
                cursor: cursor.map(str::to_string),
            });

        let offset = match cursor {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| StoreError::InvalidCursor(token.to_string()))?,
        };

        if let Some(plan) = self.failures.get(path) {
            if offset >= plan.after_pages * self.page_size {
                return Err(plan.error.clone());
            }
        }

        let matching: Vec<Parameter> = self
            .parameters
            .iter()
            .filter(|(name, _)| self.in_scope(path, name))
            .map(|(name, value)| Parameter::new(name.clone(), value.clone()))
            .collect();

        let end = (offset + self.page_size).min(matching.len());
        let parameters = matching.get(offset..end).unwrap_or_default().to_vec();
        let next_cursor = (end < matching.len()).then(|| end.to_string());

        Ok(ParameterPage {
            parameters,
            next_cursor,
        })
    }
}
