//! Init command implementation

use crate::cli::commands::operator_promise;
use crate::Config;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new Promise or configuration file")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(operator_promise::command())
        .subcommand(
            Command::new("config")
                .about("Initialize a new configuration file")
                .arg(
                    clap::Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file path")
                        .value_name("FILE")
                        .default_value(".promise-gen.yaml"),
                ),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("operator-promise", sub_matches)) => operator_promise::run(sub_matches).await,
        Some(("config", sub_matches)) => init_config(sub_matches).await,
        _ => {
            let _ = command().print_help();
            Ok(())
        }
    }
}

async fn init_config(matches: &ArgMatches) -> Result<()> {
    let output = crate::cli::utils::required(matches, "output")?;
    let output_path = crate::utils::expand_path(output);

    info!("Initializing configuration file: {:?}", output_path);

    Config::default().save_to_file(&output_path)?;

    info!("Configuration file created: {:?}", output_path);

    println!("Configuration file created: {}", output_path.display());
    println!("Edit the file to change the output path or the pipeline image.");

    Ok(())
}
