//! Fetch every secret stored under one namespace.

use tracing::{debug, warn};

use crate::domain::errors::{ResolveError, ResolveResult};
use crate::domain::models::{Namespace, SecretMap, PATH_SEPARATOR};
use crate::domain::ports::ParameterStore;

/// Retrieve all parameters below `namespace`, following pagination to the end.
///
/// Keys in the result have the `/<namespace>/` prefix removed. The first
/// failing page aborts the fetch; no partial map is returned.
pub async fn fetch_namespace(
    store: &dyn ParameterStore,
    namespace: &Namespace,
) -> ResolveResult<SecretMap> {
    let path = namespace.path();
    let mut secrets = SecretMap::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store
            .list_by_path(&path, cursor.as_deref())
            .await
            .map_err(|source| ResolveError::fetch(namespace.as_str(), source))?;
        pages += 1;

        debug!(
            namespace = %namespace,
            page = pages,
            parameters = page.parameters.len(),
            has_more = page.next_cursor.is_some(),
            "fetched parameter page"
        );

        for parameter in page.parameters {
            let key = if let Some(key) = namespace.local_key(&parameter.name) {
                key.to_string()
            } else {
                warn!(
                    namespace = %namespace,
                    name = %parameter.name,
                    "parameter outside requested namespace"
                );
                parameter.name.trim_start_matches(PATH_SEPARATOR).to_string()
            };
            secrets.insert(key, parameter.value);
        }

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(namespace = %namespace, pages, secrets = secrets.len(), "namespace fetched");
    Ok(secrets)
}
