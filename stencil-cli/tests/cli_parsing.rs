//! CLI surface tests: argument parsing, listing, prompting, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stencil() -> Command {
    Command::cargo_bin("stencil").expect("stencil binary")
}

fn build_archive(path: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::File::create(path).unwrap();
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, contents.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Monorepo with one blueprint-bearing package and installation disabled.
fn create_temp_project() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();

    fs::write(
        root.join("package.json"),
        r#"{ "name": "monorepo", "workspaces": ["packages/kit"] }"#,
    )
    .unwrap();
    fs::write(root.join("stencil.toml"), "[install]\nenabled = false\n").unwrap();

    fs::create_dir_all(root.join("packages/kit")).unwrap();
    fs::write(
        root.join("packages/kit/package.json"),
        r#"{
            "name": "kit",
            "packageBlueprints": {
                "resolveClass": "TemplateTokenResolver",
                "packages": { "library": "blueprints/library.tar.gz" }
            }
        }"#,
    )
    .unwrap();
    build_archive(
        &root.join("packages/kit/blueprints/library.tar.gz"),
        &[("index.ts", "Hello {{PACKAGE_NAME}}")],
    );

    td
}

#[test]
fn create_list_prints_blueprints_one_per_line() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .args(["create", "--list"])
        .assert()
        .success()
        .stdout("library\n");
}

#[test]
fn list_subcommand_matches_create_list() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("library\n");
}

#[test]
fn list_has_no_side_effects() {
    let temp = create_temp_project();
    let manifest_before = fs::read_to_string(temp.path().join("package.json")).unwrap();

    stencil()
        .current_dir(temp.path())
        .args(["create", "--list"])
        .assert()
        .success();

    let manifest_after = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert_eq!(manifest_before, manifest_after);
}

#[test]
fn create_scaffolds_and_registers_the_package() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .args(["create", "library", "my-lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created my-lib"));

    let index = fs::read_to_string(temp.path().join("packages/my-lib/index.ts")).unwrap();
    assert_eq!(index, "Hello my-lib");

    let manifest = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(manifest.contains("packages/my-lib"));
}

#[test]
fn create_works_from_a_nested_directory() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path().join("packages/kit"))
        .args(["create", "library", "nested-lib"])
        .assert()
        .success();

    assert!(temp.path().join("packages/nested-lib/index.ts").exists());
}

#[test]
fn invalid_package_name_exits_with_code_2() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .args(["create", "library", "Not A Name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid package name"));

    assert!(!temp.path().join("packages/Not A Name").exists());
}

#[test]
fn unknown_blueprint_exits_with_code_2() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .args(["create", "ghost", "my-lib"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blueprint not found"));
}

#[test]
fn existing_package_exits_with_code_2() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .args(["create", "library", "kit"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn omitted_positionals_are_prompted() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .arg("create")
        .write_stdin("library\nprompted-lib\n")
        .assert()
        .success();

    assert!(temp.path().join("packages/prompted-lib/index.ts").exists());
}

#[test]
fn prompt_reasks_on_invalid_input() {
    let temp = create_temp_project();

    stencil()
        .current_dir(temp.path())
        .arg("create")
        .write_stdin("NOT VALID\nlibrary\nAlso Bad\nreasked-lib\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid value"));

    assert!(temp.path().join("packages/reasked-lib/index.ts").exists());
}

#[test]
fn missing_workspace_manifest_is_a_runtime_failure() {
    let temp = tempfile::tempdir().expect("tempdir");

    stencil()
        .current_dir(temp.path())
        .args(["create", "library", "my-lib"])
        .assert()
        .code(1);
}

#[test]
fn project_root_env_var_overrides_discovery() {
    let temp = create_temp_project();
    let elsewhere = tempfile::tempdir().expect("tempdir");

    stencil()
        .current_dir(elsewhere.path())
        .env("STENCIL_PROJECT_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("library\n");
}

#[test]
fn explicit_project_root_overrides_discovery() {
    let temp = create_temp_project();
    let elsewhere = tempfile::tempdir().expect("tempdir");

    stencil()
        .current_dir(elsewhere.path())
        .args([
            "create",
            "--project-root",
            temp.path().to_str().unwrap(),
            "library",
            "rooted-lib",
        ])
        .assert()
        .success();

    assert!(temp.path().join("packages/rooted-lib/index.ts").exists());
}
