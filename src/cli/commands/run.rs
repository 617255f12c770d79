//! Implementation of the `ssmenv run` command.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::info;

use crate::adapters::SsmParameterStore;
use crate::cli::commands::{current_environment, with_deadline};
use crate::cli::types::RunArgs;
use crate::domain::models::{Config, EnvironmentMap};
use crate::domain::ports::ParameterStore;
use crate::services::resolve_environment;

/// A program ready to be launched with a resolved environment.
#[derive(Debug)]
pub struct PreparedCommand {
    program: String,
    args: Vec<String>,
    env: EnvironmentMap,
}

impl PreparedCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn env(&self) -> &EnvironmentMap {
        &self.env
    }

    /// Build the process with the resolved environment applied over the
    /// inherited one.
    ///
    /// Resolving only adds or replaces variables, so inherited variables the
    /// map cannot hold (such as non UTF-8 values) reach the child unchanged.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).envs(self.env.iter());
        cmd
    }

    /// Replace the current process with the program.
    ///
    /// Only returns if the program could not be executed.
    #[cfg(unix)]
    pub fn launch(self) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        let err = self.command().exec();
        Err(err).with_context(|| format!("Failed to execute {}", self.program))
    }

    /// Spawn the program, wait for it and return its exit code.
    #[cfg(not(unix))]
    pub fn launch(self) -> Result<i32> {
        let status = self
            .command()
            .status()
            .with_context(|| format!("Failed to execute {}", self.program))?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Resolve the environment for `args.command` against `store`.
pub async fn prepare(
    args: RunArgs,
    config: &Config,
    store: &dyn ParameterStore,
) -> Result<PreparedCommand> {
    let namespaces = args.resolve.namespaces(config)?;
    let env = with_deadline(
        args.resolve.timeout(config),
        resolve_environment(store, namespaces, current_environment()),
    )
    .await?;

    let mut command = args.command.into_iter();
    let program = command.next().context("No command given")?;

    info!(program = %program, variables = env.len(), "launching command");
    Ok(PreparedCommand {
        program,
        args: command.collect(),
        env,
    })
}

pub async fn execute(args: RunArgs, config: &Config) -> Result<PreparedCommand> {
    let store = SsmParameterStore::from_config(&config.store).await;
    prepare(args, config, &store).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryParameterStore;
    use crate::cli::types::ResolveArgs;

    fn run_args(namespaces: &str, command: &[&str]) -> RunArgs {
        RunArgs {
            resolve: ResolveArgs {
                namespaces: Some(namespaces.to_string()),
                timeout_secs: None,
            },
            command: command.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_prepare_merges_secrets_over_process_env() {
        let store = InMemoryParameterStore::new()
            .with_parameter("/svc/DATABASE_URL", "postgres://db")
            .with_parameter("/svc/PATH", "/opt/secret/bin");

        let prepared = prepare(
            run_args("svc", &["printenv", "DATABASE_URL"]),
            &Config::default(),
            &store,
        )
        .await
        .unwrap();

        assert_eq!(prepared.program(), "printenv");
        assert_eq!(prepared.env().get("DATABASE_URL"), Some("postgres://db"));
        assert_eq!(prepared.env().get("PATH"), Some("/opt/secret/bin"));

        let cmd = prepared.command();
        let args: Vec<String> = cmd
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["DATABASE_URL".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_child_inherits_non_utf8_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let store = InMemoryParameterStore::new().with_parameter("/svc/SECRET", "s3cr3t");
        let latin1 = OsStr::from_bytes(b"caf\xe9");

        let stdout = temp_env::with_var("SSMENV_TEST_LATIN1", Some(latin1), || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let prepared = rt
                .block_on(prepare(run_args("svc", &["env"]), &Config::default(), &store))
                .unwrap();
            prepared.command().output().unwrap().stdout
        });

        let lines: Vec<&[u8]> = stdout.split(|b| *b == b'\n').collect();
        assert!(lines.contains(&b"SSMENV_TEST_LATIN1=caf\xe9".as_slice()));
        assert!(lines.contains(&b"SECRET=s3cr3t".as_slice()));
    }

    #[tokio::test]
    async fn test_prepare_requires_namespaces() {
        let store = InMemoryParameterStore::new();
        let mut args = run_args("svc", &["true"]);
        args.resolve.namespaces = None;

        assert!(prepare(args, &Config::default(), &store).await.is_err());
    }
}
