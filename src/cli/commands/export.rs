//! Implementation of the `ssmenv export` command.

use anyhow::Result;
use serde::Serialize;

use crate::adapters::SsmParameterStore;
use crate::cli::commands::{current_environment, with_deadline};
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::ExportArgs;
use crate::domain::models::{Config, EnvironmentMap, NamespaceList};
use crate::domain::ports::ParameterStore;
use crate::services::{overlay_namespaces, resolve_environment};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ExportOutput {
    pub variables: EnvironmentMap,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        self.variables.to_environ().join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.variables).unwrap_or_default()
    }
}

/// Resolve the variables `args` asks for.
pub async fn collect(
    args: &ExportArgs,
    config: &Config,
    store: &dyn ParameterStore,
) -> Result<ExportOutput> {
    let namespaces = args.resolve.namespaces(config)?;
    let timeout = args.resolve.timeout(config);

    let variables = if args.secrets_only {
        let list = NamespaceList::parse(namespaces);
        with_deadline(
            timeout,
            overlay_namespaces(store, &list, EnvironmentMap::new()),
        )
        .await?
    } else {
        with_deadline(
            timeout,
            resolve_environment(store, namespaces, current_environment()),
        )
        .await?
    };

    Ok(ExportOutput { variables })
}

pub async fn execute(args: ExportArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = SsmParameterStore::from_config(&config.store).await;
    let result = collect(&args, config, &store).await?;
    output(&result, json_mode);
    Ok(())
}
