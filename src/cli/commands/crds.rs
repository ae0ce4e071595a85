//! CRDs command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use promise_crd::{select_storage_version, CrdFilter, CustomResourceDefinition, ManifestParser};
use serde::Serialize;
use tracing::info;

pub fn command() -> Command {
    Command::new("crds")
        .about("List the CRDs found in an operator's manifests")
        .arg(
            clap::Arg::new("operator-manifests")
                .short('m')
                .long("operator-manifests")
                .help("The path to the directory containing the operator manifests")
                .value_name("DIR")
                .required(true),
        )
        .arg(
            clap::Arg::new("filter")
                .short('f')
                .long("filter")
                .help("Only list CRDs serving an API version matching this glob (e.g. 'acme.io/*')")
                .value_name("PATTERN")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "yaml", "json"])
                .default_value("text"),
        )
}

/// What the Promise generator would use from a CRD
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CrdSummary {
    name: String,
    group: String,
    kind: String,
    versions: Vec<String>,
    storage_version: Option<String>,
}

impl CrdSummary {
    fn from_crd(crd: &CustomResourceDefinition) -> Self {
        let storage_version = select_storage_version(crd)
            .ok()
            .map(|idx| crd.spec.versions[idx].name.clone());

        Self {
            name: crd.metadata.name.clone().unwrap_or_default(),
            group: crd.spec.group.clone(),
            kind: crd.spec.names.kind.clone(),
            versions: crd.spec.versions.iter().map(|v| v.name.clone()).collect(),
            storage_version,
        }
    }
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let dir = crate::utils::expand_path(utils::required(matches, "operator-manifests")?);
    let filters: Vec<String> = matches
        .get_many::<String>("filter")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let resources = ManifestParser::new().parse_from_directory(&dir)?;
    let filter = CrdFilter::new(filters.as_slice());

    let summaries: Vec<CrdSummary> = resources
        .crds()
        .filter(|crd| filter.matches(crd))
        .map(CrdSummary::from_crd)
        .collect();

    info!("Found {} CRDs after filtering", summaries.len());

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&summaries)?),
        Some("yaml") => print!("{}", serde_yaml::to_string(&summaries)?),
        _ => print_text(&summaries, &dir),
    }

    Ok(())
}

fn print_text(summaries: &[CrdSummary], dir: &std::path::Path) {
    if summaries.is_empty() {
        println!("No CRDs found in {}", dir.display());
        return;
    }

    for summary in summaries {
        println!("{}", summary.name);
        println!("  Group: {}", summary.group);
        println!("  Kind: {}", summary.kind);

        let versions: Vec<String> = summary
            .versions
            .iter()
            .map(|v| {
                if summary.storage_version.as_ref() == Some(v) {
                    format!("{v} (storage)")
                } else {
                    v.clone()
                }
            })
            .collect();
        println!("  Versions: {}", versions.join(", "));
    }
}
