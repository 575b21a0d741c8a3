//! Integration tests for the `well-ready` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch workspace: `templates/` holds one `express-ts` template, `work/`
/// is the directory the binary runs in, `home/` isolates user config.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let template = root.path().join("templates/express-ts");
        fs::create_dir_all(template.join("src/routes")).unwrap();
        fs::create_dir_all(template.join("public")).unwrap();
        fs::write(template.join("package.json"), r#"{"name":"starter"}"#).unwrap();
        fs::write(template.join("src/index.ts"), "console.log('hi');\n").unwrap();
        fs::write(template.join("src/routes/auth.ts"), "export {};\n").unwrap();
        fs::write(template.join(".env.example"), "PORT=3000\n").unwrap();
        fs::create_dir_all(root.path().join("work")).unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        Self { root }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn work(&self) -> std::path::PathBuf {
        self.path().join("work")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("well-ready").unwrap();
        cmd.current_dir(self.work())
            .env("HOME", self.path().join("home"))
            .env("XDG_CONFIG_HOME", self.path().join("home/.config"))
            .env("XDG_DATA_HOME", self.path().join("home/.local/share"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("WELL_READY_TEMPLATES_DIR")
            .arg("--templates-dir")
            .arg(self.path().join("templates"));
        cmd
    }
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("well-ready")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("well-ready")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    Command::cargo_bin("well-ready")
        .unwrap()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--package-manager"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn test_new_project_copies_template() {
    let sandbox = Sandbox::new();
    // The binary reports the path it sees as its working directory.
    let expected = fs::canonicalize(sandbox.work()).unwrap().join("my-api");

    sandbox
        .cmd()
        .args(["new", "my-api", "--template", "express-ts", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project setup complete!"))
        .stdout(predicate::str::contains(format!(
            "Project created at {}",
            expected.display()
        )))
        .stdout(predicate::str::contains("cd my-api"))
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("npm run dev"));

    let project = sandbox.work().join("my-api");
    assert_eq!(
        fs::read_to_string(project.join("package.json")).unwrap(),
        r#"{"name":"starter"}"#
    );
    assert!(project.join("src/routes/auth.ts").is_file());
    assert!(project.join(".env.example").is_file());
    assert!(project.join("public").is_dir());

    // The template itself is untouched.
    assert!(sandbox.path().join("templates/express-ts/package.json").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["new", "my-api", "-t", "express-ts", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("npm install"));

    assert!(!sandbox.work().join("my-api").exists());
}

#[test]
fn test_package_manager_flag_changes_next_steps() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["new", "my-api", "-t", "express-ts", "-p", "pnpm", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm install"))
        .stdout(predicate::str::contains("pnpm run dev"));
}

#[test]
fn test_list_json() {
    let sandbox = Sandbox::new();

    let out = sandbox
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 7);

    let express = entries.iter().find(|e| e["id"] == "express-ts").unwrap();
    assert_eq!(express["available"], true);
    let mern = entries.iter().find(|e| e["id"] == "mern-ts").unwrap();
    assert_eq!(mern["available"], false);
}

#[test]
fn test_list_table_marks_missing_templates() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("express-ts"))
        .stdout(predicate::str::contains("mern-ts"))
        .stdout(predicate::str::contains("(missing)"));
}

#[test]
fn test_config_get_package_manager() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["config", "get", "install.package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install.package_manager = npm"));
}

#[test]
fn test_config_env_override() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .env("WELL_READY__INSTALL__PACKAGE_MANAGER", "yarn")
        .args(["config", "get", "install.package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yarn"));
}

#[test]
fn test_init_writes_config_file() {
    let sandbox = Sandbox::new();
    let config = sandbox.path().join("cfg/well-ready.toml");

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[install]"));
    assert!(written.contains("express-ts"));

    // The written file loads back.
    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "install.skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install.skip = false"));
}

#[test]
fn test_config_file_catalog_is_used() {
    let sandbox = Sandbox::new();
    let config = sandbox.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[install]
package_manager = "npm"
skip = true

[[templates.catalog]]
id = "api"
label = "API starter"
directory = "express-ts"
run_script = "start"
"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["new", "svc", "--template", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd svc"))
        .stdout(predicate::str::contains("npm run start"));

    assert!(sandbox.work().join("svc/src/index.ts").is_file());
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("well-ready")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("well-ready"));
}

#[cfg(unix)]
#[test]
fn test_template_symlinks_are_copied_as_links() {
    let sandbox = Sandbox::new();
    let template = sandbox.path().join("templates/express-ts");
    std::os::unix::fs::symlink("src", template.join("linked")).unwrap();
    std::os::unix::fs::symlink("does-not-exist", template.join("dangling")).unwrap();

    sandbox
        .cmd()
        .args(["new", "my-api", "--template", "express-ts", "--skip-install"])
        .assert()
        .success();

    let project = sandbox.work().join("my-api");
    assert_eq!(
        fs::read_link(project.join("linked")).unwrap(),
        Path::new("src")
    );
    assert_eq!(
        fs::read_link(project.join("dangling")).unwrap(),
        Path::new("does-not-exist")
    );
    assert!(project.join("linked/index.ts").is_file());
}

#[cfg(unix)]
mod install {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Put an executable `npm` script in `sandbox/bin` and return that dir.
    fn fake_npm(sandbox: &Sandbox, body: &str) -> std::path::PathBuf {
        let bin = sandbox.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let script = bin.join("npm");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    #[test]
    fn test_install_runs_in_project_directory() {
        let sandbox = Sandbox::new();
        let bin = fake_npm(&sandbox, "echo \"$1\" > installed.txt");

        sandbox
            .cmd()
            .env("PATH", &bin)
            .args(["new", "my-api", "--template", "express-ts"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dependencies installed successfully!"))
            .stdout(predicate::str::contains("cd my-api"))
            .stdout(predicate::str::contains("npm run dev"));

        let marker = sandbox.work().join("my-api/installed.txt");
        assert_eq!(fs::read_to_string(marker).unwrap().trim(), "install");
    }

    #[test]
    fn test_install_failure_exits_5_and_keeps_files() {
        let sandbox = Sandbox::new();
        let bin = fake_npm(&sandbox, "exit 7");

        sandbox
            .cmd()
            .env("PATH", &bin)
            .args(["new", "my-api", "--template", "express-ts"])
            .assert()
            .code(5)
            .stdout(predicate::str::contains("Failed to install dependencies"))
            .stderr(predicate::str::contains("install stage failed"));

        assert!(sandbox.work().join("my-api/package.json").is_file());
    }
}
