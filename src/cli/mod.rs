//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("promise-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate Kratix Promises from Kubernetes Operator manifests")
            .subcommand(commands::init::command())
            .subcommand(commands::crds::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("crds", sub_matches)) => commands::crds::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;
    use tracing::debug;

    /// Get configuration file path from arguments, the working directory or
    /// the user config directory
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<Option<PathBuf>> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(Some(crate::utils::expand_path(config_path)));
        }

        if let Some(path) = crate::utils::find_config_file(&std::env::current_dir()?) {
            return Ok(Some(path));
        }

        let user_config = crate::utils::get_config_dir()?.join("config.yaml");
        Ok(user_config.is_file().then_some(user_config))
    }

    /// Load configuration from file, falling back to defaults when none exists
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches)? {
            Some(config_path) => Ok(crate::Config::from_file(&config_path)?),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(crate::Config::default())
            }
        }
    }

    /// Create PromiseGen instance
    pub fn create_app(config: crate::Config) -> Result<crate::PromiseGen> {
        Ok(crate::PromiseGen::new(config)?)
    }

    /// Value of an argument clap already enforces as required
    pub fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
        matches
            .get_one::<String>(id)
            .ok_or_else(|| anyhow!("Missing required argument: --{}", id))
    }
}
