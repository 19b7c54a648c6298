//! End-to-end tests for the `kiln` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src/core")).unwrap();
    fs::write(root.join("src/index.html"), "<!doctype html><title>app</title>").unwrap();
    fs::write(root.join("src/favicon.ico"), [0u8; 4]).unwrap();
    fs::write(root.join("src/index.js"), "import '@core/boot';").unwrap();
}

fn kiln(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.current_dir(root).env_remove("NODE_ENV").env("NO_COLOR", "1");
    cmd
}

fn plan_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn plan_in_production_hashes_and_minifies() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    let mut cmd = kiln(temp.path());
    cmd.env("NODE_ENV", "production").arg("plan");
    let plan = plan_json(&mut cmd);

    assert_eq!(plan["mode"], "production");
    assert_eq!(plan["output"]["filename"], "bundle.[hash].js");
    assert_eq!(plan["source_maps"], "none");

    let steps: Vec<_> = plan["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["step"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        steps,
        vec![
            "clear-output",
            "emit-html-shell",
            "copy-static-assets",
            "extract-stylesheet-bundle"
        ]
    );
    assert_eq!(plan["plugins"][3]["filename"], "bundle.[hash].css");

    let script_chain = &plan["rules"][0]["use"];
    assert_eq!(script_chain.as_array().unwrap().len(), 1);
}

#[test]
fn plan_without_signal_is_development() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    let plan = plan_json(kiln(temp.path()).arg("plan"));

    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["output"]["filename"], "bundle.js");
    assert_eq!(plan["dev_server"]["hot"], true);
    assert_eq!(plan["rules"][0]["use"][1]["step"], "lint");
}

#[test]
fn plan_with_unrecognised_signal_is_development() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    let mut cmd = kiln(temp.path());
    cmd.env("NODE_ENV", "Production").arg("plan");
    assert_eq!(plan_json(&mut cmd)["mode"], "development");
}

#[test]
fn plan_compact_is_single_line() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .args(["plan", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"mode\":"))
        .stdout(predicate::str::contains('\n').count(1));
}

#[test]
fn plan_accepts_root_flag() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("app");
    scaffold(&project);

    let mut cmd = kiln(temp.path());
    cmd.args(["plan", "-C", "app"]);
    let plan = plan_json(&mut cmd);

    let output_path = plan["output"]["path"].as_str().unwrap();
    assert!(output_path.ends_with("app/dist"), "{output_path}");
}

#[test]
fn duplicate_alias_fails_without_output() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());
    fs::write(
        temp.path().join("kiln.toml"),
        r#"
aliases = [
    { name = "@", path = "src" },
    { name = "@", path = "src/core" },
]
"#,
    )
    .unwrap();

    kiln(temp.path())
        .arg("plan")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'@'"));
}

#[test]
fn missing_template_fails() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());
    fs::remove_file(temp.path().join("src/index.html")).unwrap();

    kiln(temp.path())
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTML template not found"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .args(["plan", "--config", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom.toml"));
}

#[test]
fn explicit_config_is_used() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());
    fs::write(temp.path().join("custom.toml"), "output_dir = \"public\"\n").unwrap();

    let mut cmd = kiln(temp.path());
    cmd.args(["plan", "--config", "custom.toml"]);
    let plan = plan_json(&mut cmd);
    assert!(plan["output"]["path"].as_str().unwrap().ends_with("public"));
}

#[test]
fn check_reports_valid_layout() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Layout is valid"))
        .stderr(predicate::str::contains("script: transpile -> lint"));
}

#[test]
fn check_in_production_omits_lint() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .env("NODE_ENV", "production")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("script: transpile\n"));
}

#[test]
fn mode_flag_is_rejected() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["plan", "--mode", "production"])
        .assert()
        .failure();
}

#[test]
fn no_color_flag_overrides_forced_colour() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .args(["--no-color", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Layout is valid"))
        .stderr(predicate::str::contains('\x1b').not());
}

#[test]
fn forced_colour_styles_status_lines() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains('\x1b'));
}

#[test]
fn layout_no_color_setting_disables_colour() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());
    fs::write(temp.path().join("kiln.toml"), "[settings]\nno_color = true\n").unwrap();

    kiln(temp.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains('\x1b').not());
}

#[test]
fn output_dir_above_project_fails_before_planning() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    for output_dir in ["..", ".", "src"] {
        fs::write(
            temp.path().join("kiln.toml"),
            format!("output_dir = \"{output_dir}\"\n"),
        )
        .unwrap();

        kiln(temp.path())
            .env("NODE_ENV", "production")
            .arg("plan")
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("output directory"));
    }
}

#[test]
fn check_lists_plan_steps_in_order() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path());

    kiln(temp.path())
        .env("NODE_ENV", "production")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "plan: clear-output -> emit-html-shell -> copy-static-assets -> extract-stylesheet-bundle",
        ))
        .stderr(predicate::str::contains("not content-hashed").not());
}
