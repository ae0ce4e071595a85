//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("PromiseGen - Kratix Promise Generator");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    if detailed {
        println!("\nDetailed Information:");
        println!("  - Loads operator manifests from YAML and JSON files");
        println!("  - Turns an operator CRD into a Promise API");
        println!("  - Collapses the CRD to its storage version");
        println!("  - Pins kind and apiVersion in the Promise API schema");
        println!(
            "  - Generates a resource configure pipeline ({})",
            promise_generator::pipeline::DEFAULT_IMAGE
        );
    }

    Ok(())
}
