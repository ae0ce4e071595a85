use rstest::rstest;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn operator_manifests() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/operator")
}

/// Run the binary from inside `work_dir`, isolated from any user configuration
fn promise_gen(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_promise-gen"))
        .args(args)
        .current_dir(work_dir)
        .env("HOME", work_dir)
        .env("XDG_CONFIG_HOME", work_dir.join(".config"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_init_operator_promise_writes_files() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &[
            "init",
            "operator-promise",
            "widget",
            "--operator-manifests",
            manifests.to_str().unwrap(),
            "--api-from",
            "widgets.acme.io",
            "--group",
            "promise.io",
            "--kind",
            "Widget",
            "--output-dir",
            "out",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Operator API: acme.io/v1 (kind Widget)"));
    assert!(out.contains("Promise widget generated successfully!"));
    assert!(out.contains("Files written: 3"));
    assert!(out.contains("Output directory: out"));
    assert!(out.contains("Directories created: 2"));
    assert!(out.contains("Processing time: "));

    let base = temp_dir.path().join("out");
    assert!(base.join("dependencies.yaml").is_file());
    assert!(base.join("api.yaml").is_file());

    let workflow =
        std::fs::read_to_string(base.join("workflows/resource/configure/workflow.yaml")).unwrap();
    assert!(workflow.contains("OPERATOR_GROUP"));
    assert!(workflow.contains("acme.io"));
}

#[test]
fn test_init_operator_promise_short_flags_and_version() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &[
            "init",
            "operator-promise",
            "gadget",
            "-m",
            manifests.to_str().unwrap(),
            "-a",
            "gadgets.acme.io",
            "-g",
            "promise.io",
            "-k",
            "Gadget",
            "-v",
            "v1",
            "-p",
            "gadgetry",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Operator API: acme.io/v1beta1 (kind Gadget)"));
    assert!(out.contains("Promise API:  promise.io/v1 (kind Gadget)"));

    let api = std::fs::read_to_string(temp_dir.path().join("api.yaml")).unwrap();
    assert!(api.contains("gadgetry.promise.io"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &[
            "init",
            "operator-promise",
            "widget",
            "-m",
            manifests.to_str().unwrap(),
            "-a",
            "widgets.acme.io",
            "-g",
            "promise.io",
            "-k",
            "Widget",
            "-o",
            "out",
            "--dry-run",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Dry run mode"));
    assert!(out.contains("would write"));
    assert!(out.contains("api.yaml"));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_missing_crd_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &[
            "init",
            "operator-promise",
            "widget",
            "-m",
            manifests.to_str().unwrap(),
            "-a",
            "sprockets.acme.io",
            "-g",
            "promise.io",
            "-k",
            "Sprocket",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no CRD found matching name: sprockets.acme.io"));
    assert!(!temp_dir.path().join("api.yaml").exists());
}

#[test]
fn test_missing_required_flag_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = promise_gen(
        temp_dir.path(),
        &["init", "operator-promise", "widget", "-a", "widgets.acme.io"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--operator-manifests"));
}

#[rstest]
#[case("text", "Versions: v1alpha1, v1beta1 (storage)")]
#[case("yaml", "storageVersion: v1beta1")]
#[case("json", "\"storageVersion\": \"v1beta1\"")]
fn test_crds_lists_operator_crds(#[case] format: &str, #[case] expected: &str) {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &["crds", "-m", manifests.to_str().unwrap(), "--format", format],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("widgets.acme.io"));
    assert!(out.contains(expected));
}

#[test]
fn test_crds_json_with_filter() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = operator_manifests();

    let output = promise_gen(
        temp_dir.path(),
        &[
            "crds",
            "-m",
            manifests.to_str().unwrap(),
            "--filter",
            "acme.io/v1beta*",
            "--format",
            "json",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let summaries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["name"], "gadgets.acme.io");
    assert_eq!(summaries[0]["storageVersion"], "v1beta1");
}

#[test]
fn test_init_config_then_use_it() {
    let temp_dir = TempDir::new().unwrap();

    let output = promise_gen(temp_dir.path(), &["init", "config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let config_path = temp_dir.path().join(".promise-gen.yaml");
    let config = std::fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("version: '1.0'") || config.contains("version: \"1.0\""));
    assert!(config.contains("from-api-to-operator"));

    // Point the generated config at a custom image and pick it up from the working directory
    std::fs::write(
        &config_path,
        config.replace(
            "ghcr.io/syntasso/kratix-cli/from-api-to-operator:v0.1.0",
            "registry.local/translate:dev",
        ),
    )
    .unwrap();

    let manifests = operator_manifests();
    let output = promise_gen(
        temp_dir.path(),
        &[
            "init",
            "operator-promise",
            "widget",
            "-m",
            manifests.to_str().unwrap(),
            "-a",
            "widgets.acme.io",
            "-g",
            "promise.io",
            "-k",
            "Widget",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let workflow = std::fs::read_to_string(
        temp_dir
            .path()
            .join("workflows/resource/configure/workflow.yaml"),
    )
    .unwrap();
    assert!(workflow.contains("registry.local/translate:dev"));
}

#[test]
fn test_config_base_path_expands_env_vars() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target-out");
    std::fs::write(
        temp_dir.path().join(".promise-gen.yaml"),
        "output:\n  base_path: $PROMISE_OUT/promise\n",
    )
    .unwrap();

    let manifests = operator_manifests();
    let output = Command::new(env!("CARGO_BIN_EXE_promise-gen"))
        .args([
            "init",
            "operator-promise",
            "widget",
            "-m",
            manifests.to_str().unwrap(),
            "-a",
            "widgets.acme.io",
            "-g",
            "promise.io",
            "-k",
            "Widget",
        ])
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".config"))
        .env("RUST_LOG", "off")
        .env("PROMISE_OUT", &target)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(target.join("promise/api.yaml").is_file());
    assert!(!temp_dir.path().join("$PROMISE_OUT").exists());
}

#[test]
fn test_manifest_dir_with_dollar_sign() {
    let temp_dir = TempDir::new().unwrap();
    let manifests = temp_dir.path().join("ops$team");
    std::fs::create_dir_all(&manifests).unwrap();
    std::fs::copy(
        operator_manifests().join("crds/widgets.yaml"),
        manifests.join("widgets.yaml"),
    )
    .unwrap();

    let output = promise_gen(
        temp_dir.path(),
        &["crds", "-m", manifests.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("widgets.acme.io"));
}

#[test]
fn test_info() {
    let temp_dir = TempDir::new().unwrap();

    let output = promise_gen(temp_dir.path(), &["info", "--detailed"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
    assert!(out.contains("Detailed Information:"));
}
