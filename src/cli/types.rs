//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssmenv")]
#[command(about = "Resolve parameter store secrets into a process environment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .ssmenv/config.yaml)
    #[arg(short, long, global = true, env = "SSMENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a program with secrets added to its environment
    Run(RunArgs),

    /// Print the resolved environment
    Export(ExportArgs),
}

/// Options shared by every command that resolves secrets
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Comma-separated namespaces; later ones override earlier ones
    #[arg(short, long)]
    pub namespaces: Option<String>,

    /// Give up if resolving takes longer than this many seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Program to run, followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Print only the merged secrets, not the inherited environment
    #[arg(long)]
    pub secrets_only: bool,
}
