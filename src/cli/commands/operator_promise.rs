//! Operator Promise command implementation

use crate::cli::utils;
use crate::OperatorPromiseRequest;
use anyhow::Result;
use clap::{ArgMatches, Command};
use promise_crd::TargetApi;
use tracing::info;

pub fn command() -> Command {
    Command::new("operator-promise")
        .about("Generate a Promise from a given Kubernetes Operator")
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("name")
                .help("Name of the Promise")
                .value_name("PROMISE-NAME")
                .required(true),
        )
        .arg(
            clap::Arg::new("operator-manifests")
                .short('m')
                .long("operator-manifests")
                .help("The path to the directory containing the operator manifests")
                .value_name("DIR")
                .required(true),
        )
        .arg(
            clap::Arg::new("api-from")
                .short('a')
                .long("api-from")
                .help("The name of the CRD which the Promise API should be generated from")
                .value_name("CRD")
                .required(true),
        )
        .arg(
            clap::Arg::new("group")
                .short('g')
                .long("group")
                .help("The API group of the Promise")
                .value_name("GROUP")
                .required(true),
        )
        .arg(
            clap::Arg::new("kind")
                .short('k')
                .long("kind")
                .help("The kind of the Promise API")
                .value_name("KIND")
                .required(true),
        )
        .arg(
            clap::Arg::new("version")
                .short('v')
                .long("version")
                .help("The version of the Promise API; defaults to the operator's storage version")
                .value_name("VERSION"),
        )
        .arg(
            clap::Arg::new("plural")
                .short('p')
                .long("plural")
                .help("The plural name of the Promise API; defaults to the lowercased kind with an 's'")
                .value_name("PLURAL"),
        )
        .arg(
            clap::Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory the Promise files are written to")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("preserve-operator-crd")
                .long("preserve-operator-crd")
                .help("Keep the operator's original CRD in dependencies.yaml")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = utils::load_config(matches)?;

    // Override output path if specified
    if let Some(output_dir) = matches.get_one::<String>("output-dir") {
        config.output.base_path = crate::utils::expand_path(output_dir);
    }

    if matches.get_flag("preserve-operator-crd") {
        config.dependencies.preserve_operator_crd = true;
    }

    let target = TargetApi::new(
        utils::required(matches, "group")?.as_str(),
        utils::required(matches, "kind")?,
    )
    .with_plural(matches.get_one::<String>("plural").map(String::as_str))
    .with_version(matches.get_one::<String>("version").map(String::as_str));

    let request = OperatorPromiseRequest {
        name: utils::required(matches, "name")?.clone(),
        operator_manifests: crate::utils::expand_path(utils::required(
            matches,
            "operator-manifests",
        )?),
        api_from: utils::required(matches, "api-from")?.clone(),
        target,
    };

    let app = utils::create_app(config)?;
    let promise = app.operator_promise(&request)?;

    println!(
        "Operator API: {} (kind {})",
        promise.operator.api_version(),
        promise.operator.kind
    );
    println!(
        "Promise API:  {} (kind {})",
        promise.api_version().unwrap_or_default(),
        promise.api.spec.names.kind
    );

    if matches.get_flag("dry-run") {
        info!("Dry run mode - no files will be written");
        println!("Dry run mode - no files will be written");

        let base_path = &app.config().output.base_path;
        for path in promise.to_output_tree()?.file_paths() {
            println!("  would write {}", base_path.join(path).display());
        }

        return Ok(());
    }

    let result = app.write(&promise)?;

    println!("Promise {} generated successfully!", promise.name);
    println!("Output directory: {}", result.output_path.display());
    println!("Files written: {}", result.files_written());
    for file in &result.files {
        println!("  {}", file.display());
    }
    println!("Directories created: {}", result.directories_created);
    println!("Processing time: {}ms", result.processing_time_ms);

    Ok(())
}
