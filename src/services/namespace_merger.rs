//! Merge secrets from several namespaces into an environment.
//!
//! Namespaces are applied strictly in list order, so a key defined in a
//! later namespace overrides the same key from an earlier one. Any fetch
//! failure aborts the whole resolve.

use tracing::{debug, info, instrument};

use crate::domain::errors::ResolveResult;
use crate::domain::models::{EnvironmentMap, NamespaceList, SecretMap};
use crate::domain::ports::ParameterStore;
use crate::services::secret_fetcher::fetch_namespace;

/// Overlay `secrets` onto `existing`, replacing colliding keys.
pub fn merge_overlay(mut existing: EnvironmentMap, secrets: SecretMap) -> EnvironmentMap {
    existing.overlay(secrets);
    existing
}

/// Fetch each namespace in order and fold its secrets into `base`.
pub async fn overlay_namespaces(
    store: &dyn ParameterStore,
    namespaces: &NamespaceList,
    base: EnvironmentMap,
) -> ResolveResult<EnvironmentMap> {
    let mut env = base;
    for namespace in namespaces {
        let secrets = fetch_namespace(store, namespace).await?;
        debug!(namespace = %namespace, secrets = secrets.len(), "applying namespace");
        env = merge_overlay(env, secrets);
    }
    Ok(env)
}

/// Overlay every namespace in `namespaces` onto `base` and return the
/// merged map.
#[instrument(skip(store, base), err)]
pub async fn resolve_environment(
    store: &dyn ParameterStore,
    namespaces: &str,
    base: EnvironmentMap,
) -> ResolveResult<EnvironmentMap> {
    let list = NamespaceList::parse(namespaces);
    let inherited = base.len();

    let env = overlay_namespaces(store, &list, base).await?;

    info!(
        namespaces = list.len(),
        inherited,
        total = env.len(),
        "environment resolved"
    );
    Ok(env)
}

/// Resolve secrets over `environ` and render the result as `KEY=VALUE`
/// entries.
///
/// `environ` is parsed before anything is fetched. The order of the returned
/// entries carries no meaning.
pub async fn resolve_all<I, S>(
    store: &dyn ParameterStore,
    namespaces: &str,
    environ: I,
) -> ResolveResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base = EnvironmentMap::parse_environ(environ)?;
    let env = resolve_environment(store, namespaces, base).await?;
    Ok(env.to_environ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryParameterStore;
    use crate::domain::errors::ResolveError;
    use crate::domain::ports::StoreError;

    fn secrets(pairs: &[(&str, &str)]) -> SecretMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn sorted(mut entries: Vec<String>) -> Vec<String> {
        entries.sort();
        entries
    }

    fn two_prefix_store() -> InMemoryParameterStore {
        InMemoryParameterStore::new()
            .with_page_size(1)
            .with_parameter("/prefix/1/VALUE_FIRST_ONLY", "I CAME FROM PREFIX 1")
            .with_parameter("/prefix/1/VALUE_IN_BOTH", "I CAME FROM PREFIX 1")
            .with_parameter("/prefix/2/VALUE_SECOND_ONLY", "I CAME FROM PREFIX 2")
            .with_parameter("/prefix/2/VALUE_IN_BOTH", "I CAME FROM PREFIX 2")
    }

    #[test]
    fn test_merge_overwrites() {
        let env = EnvironmentMap::parse_environ(["FOO_BAR=BAZ"]).unwrap();
        let merged = merge_overlay(env, secrets(&[("FOO_BAR", "SECRET_BAZ")]));
        assert_eq!(merged.to_environ(), vec!["FOO_BAR=SECRET_BAZ"]);
    }

    #[test]
    fn test_merge_appends() {
        let env = EnvironmentMap::parse_environ(["FOO_BAR=BAZ"]).unwrap();
        let merged = merge_overlay(env, secrets(&[("FOO_BOB", "SECRET_BAZ")]));
        assert_eq!(
            sorted(merged.to_environ()),
            vec!["FOO_BAR=BAZ", "FOO_BOB=SECRET_BAZ"]
        );
    }

    #[test]
    fn test_merge_appends_and_overwrites() {
        let env = EnvironmentMap::parse_environ(["FOO_BAR=BAZ"]).unwrap();
        let merged = merge_overlay(
            env,
            secrets(&[("FOO_BOB", "BLOOP"), ("FOO_BAR", "SECRET_BAZ")]),
        );
        assert_eq!(
            sorted(merged.to_environ()),
            vec!["FOO_BAR=SECRET_BAZ", "FOO_BOB=BLOOP"]
        );
    }

    #[tokio::test]
    async fn test_later_namespace_wins() {
        let store = two_prefix_store();
        let got = resolve_all(&store, "prefix/1,,,,,prefix/2", Vec::<String>::new())
            .await
            .unwrap();

        assert_eq!(
            sorted(got),
            vec![
                "VALUE_FIRST_ONLY=I CAME FROM PREFIX 1",
                "VALUE_IN_BOTH=I CAME FROM PREFIX 2",
                "VALUE_SECOND_ONLY=I CAME FROM PREFIX 2",
            ]
        );
    }

    #[tokio::test]
    async fn test_reversed_prefix_order() {
        let store = two_prefix_store();
        let got = resolve_all(&store, "prefix/2,prefix/1", Vec::<String>::new())
            .await
            .unwrap();

        assert_eq!(
            sorted(got),
            vec![
                "VALUE_FIRST_ONLY=I CAME FROM PREFIX 1",
                "VALUE_IN_BOTH=I CAME FROM PREFIX 1",
                "VALUE_SECOND_ONLY=I CAME FROM PREFIX 2",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_tokens_never_fetch() {
        let store = two_prefix_store();
        resolve_all(&store, ",prefix/1,,,", ["HOME=/root"])
            .await
            .unwrap();

        assert!(store.calls().iter().all(|c| c.path == "/prefix/1/"));
    }

    #[tokio::test]
    async fn test_no_namespaces_returns_environ() {
        let store = InMemoryParameterStore::new();
        let got = resolve_all(&store, "", ["A=1", "B=x=y"]).await.unwrap();

        assert_eq!(sorted(got), vec!["A=1", "B=x=y"]);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_secrets_override_inherited_environment() {
        let store = two_prefix_store();
        let got = resolve_all(
            &store,
            "prefix/2",
            ["VALUE_IN_BOTH=from the shell", "PATH=/usr/bin"],
        )
        .await
        .unwrap();

        assert_eq!(
            sorted(got),
            vec![
                "PATH=/usr/bin",
                "VALUE_IN_BOTH=I CAME FROM PREFIX 2",
                "VALUE_SECOND_ONLY=I CAME FROM PREFIX 2",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_resolve() {
        let store = two_prefix_store()
            .failing_on("/prefix/2/", StoreError::Service("boom".to_string()));

        let result = resolve_all(&store, "prefix/1,prefix/2", ["A=1"]).await;

        match result {
            Err(ResolveError::Fetch { namespace, .. }) => assert_eq!(namespace, "prefix/2"),
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_stops_before_later_namespaces() {
        let store = two_prefix_store()
            .failing_on("/prefix/1/", StoreError::Service("boom".to_string()));

        let result = resolve_all(&store, "prefix/1,prefix/2", Vec::<String>::new()).await;

        assert!(result.is_err());
        assert!(store.calls().iter().all(|c| c.path == "/prefix/1/"));
    }

    #[tokio::test]
    async fn test_malformed_environ_fails_before_fetching() {
        let store = two_prefix_store();
        let result = resolve_all(&store, "prefix/1", ["NO_EQUALS"]).await;

        assert!(matches!(
            result,
            Err(ResolveError::MalformedEnvironEntry(_))
        ));
        assert!(store.calls().is_empty());
    }
}
