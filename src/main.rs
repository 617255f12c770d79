//! ssmenv CLI entry point.

use clap::Parser;

use ssmenv::cli::{handle_error, Cli, Commands};
use ssmenv::infrastructure::config::ConfigLoader;
use ssmenv::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let logger = match LoggerImpl::init(&config.logging, cli.verbose) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Run(args) => match ssmenv::cli::commands::run::execute(args, &config).await {
            Ok(prepared) => {
                // Flush buffered file logs before the process is replaced
                drop(logger);
                match prepared.launch() {
                    Ok(code) => std::process::exit(code),
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        },
        Commands::Export(args) => {
            ssmenv::cli::commands::export::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
