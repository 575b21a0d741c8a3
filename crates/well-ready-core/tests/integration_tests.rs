//! Integration tests for well-ready-core against the real adapters.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use well_ready_adapters::{LocalFilesystem, MemoryFilesystem, RecordingInstaller};
use well_ready_core::{application::ApplicationError, prelude::*};

fn write(path: &Path, content: &[u8]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A templates root holding a small `express-ts` tree.
fn templates_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let t = root.path().join("express-ts");
    write(
        &t.join("package.json"),
        br#"{"name":"express-ts","scripts":{"dev":"ts-node src/server.ts"}}"#,
    );
    write(&t.join("tsconfig.json"), b"{}\n");
    write(&t.join("src/server.ts"), b"import express from 'express';\n");
    write(
        &t.join("src/controllers/authController.ts"),
        b"export const login = () => {};\n",
    );
    write(&t.join("public/favicon.ico"), &[0u8, 1, 2, 254, 255]);
    std::fs::create_dir_all(t.join("src/empty")).unwrap();
    root
}

fn service(templates: &Path, workdir: &Path, installer: RecordingInstaller) -> ScaffoldService {
    ScaffoldService::new(
        TemplateCatalog::builtin(),
        ScaffoldOptions {
            templates_root: templates.to_path_buf(),
            workdir: workdir.to_path_buf(),
            package_manager: PackageManager::Npm,
            skip_install: false,
        },
        Box::new(LocalFilesystem::new()),
        Box::new(installer),
    )
}

fn request(template: &str, name: &str) -> ScaffoldRequest {
    ScaffoldRequest::new(
        TemplateId::new(template).unwrap(),
        ProjectName::parse(name).unwrap(),
    )
}

/// Every file under `dir`, relative, with its bytes.
fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let bytes = std::fs::read(&path).unwrap();
                out.push((path.strip_prefix(dir).unwrap().to_path_buf(), bytes));
            }
        }
    }
    out.sort();
    out
}

#[test]
fn test_full_scaffold_copies_tree_byte_for_byte_then_installs() {
    let templates = templates_root();
    let work = TempDir::new().unwrap();
    let installer = RecordingInstaller::new();

    let report = service(templates.path(), work.path(), installer.clone())
        .scaffold(&request("express-ts", "my-api"))
        .unwrap();

    let dest = work.path().join("my-api");
    assert_eq!(report.destination, dest);
    assert_eq!(report.files_copied, 5);
    assert!(report.installed);
    assert_eq!(
        snapshot(&dest),
        snapshot(&templates.path().join("express-ts"))
    );
    assert!(dest.join("src/empty").is_dir());
    assert_eq!(installer.calls(), vec![(PackageManager::Npm, dest)]);
    assert_eq!(report.next_steps(), vec!["cd my-api", "npm run dev"]);
}

#[cfg(unix)]
#[test]
fn test_template_symlinks_survive_the_copy() {
    let templates = templates_root();
    let t = templates.path().join("express-ts");
    std::os::unix::fs::symlink("src/controllers", t.join("controllers")).unwrap();
    std::os::unix::fs::symlink("missing.env", t.join(".env")).unwrap();
    let work = TempDir::new().unwrap();

    let report = service(templates.path(), work.path(), RecordingInstaller::new())
        .scaffold(&request("express-ts", "my-api"))
        .unwrap();

    let dest = work.path().join("my-api");
    assert_eq!(report.files_copied, 5);
    assert_eq!(
        std::fs::read_link(dest.join("controllers")).unwrap(),
        Path::new("src/controllers")
    );
    assert_eq!(
        std::fs::read_link(dest.join(".env")).unwrap(),
        Path::new("missing.env")
    );
    assert!(dest.join("controllers/authController.ts").is_file());
}

#[test]
fn test_install_failure_keeps_copied_project() {
    let templates = templates_root();
    let work = TempDir::new().unwrap();

    let failure = service(templates.path(), work.path(), RecordingInstaller::failing(1))
        .scaffold(&request("express-ts", "my-api"))
        .unwrap_err();

    assert_eq!(failure.stage, Stage::Install);
    assert_eq!(failure.category(), well_ready_core::error::ErrorCategory::Install);
    assert!(work.path().join("my-api/package.json").is_file());
    assert!(work.path().join("my-api/src/server.ts").is_file());
}

#[test]
fn test_existing_destination_is_untouched() {
    let templates = templates_root();
    let work = TempDir::new().unwrap();
    write(&work.path().join("my-api/README.md"), b"mine");
    let installer = RecordingInstaller::new();

    let failure = service(templates.path(), work.path(), installer.clone())
        .scaffold(&request("express-ts", "my-api"))
        .unwrap_err();

    assert_eq!(failure.stage, Stage::Copy);
    assert!(matches!(
        failure.source,
        WellReadyError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert_eq!(
        snapshot(&work.path().join("my-api")),
        vec![(PathBuf::from("README.md"), b"mine".to_vec())]
    );
    assert!(installer.calls().is_empty());
}

#[test]
fn test_missing_template_directory_creates_nothing() {
    let templates = templates_root();
    let work = TempDir::new().unwrap();
    let installer = RecordingInstaller::new();

    // The builtin catalog lists mern-ts but the directory was never created.
    let failure = service(templates.path(), work.path(), installer.clone())
        .scaffold(&request("mern-ts", "shop"))
        .unwrap_err();

    assert_eq!(failure.stage, Stage::Copy);
    assert!(matches!(
        failure.source,
        WellReadyError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(!work.path().join("shop").exists());
    assert!(installer.calls().is_empty());
}

#[test]
fn test_template_service_reports_missing_directories() {
    let templates = templates_root();
    let svc = TemplateService::new(
        TemplateCatalog::builtin(),
        templates.path(),
        Box::new(LocalFilesystem::new()),
    );

    let list = svc.list();
    let express = list.iter().find(|t| t.id == "express-ts").unwrap();
    assert!(express.available);

    let missing = svc.check();
    assert_eq!(missing.len(), TemplateCatalog::builtin().len() - 1);
}

#[test]
fn test_memory_filesystem_workflow_with_custom_catalog() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/templates/api/package.json", "{}");
    fs.add_file("/templates/api/index.js", "console.log('hi')");
    fs.add_dir("/home/me");

    let catalog = TemplateCatalog::new(vec![
        TemplateEntry::new(TemplateId::new("api").unwrap(), "Plain API").with_run_script("start"),
    ])
    .unwrap();

    let installer = RecordingInstaller::new();
    let service = ScaffoldService::new(
        catalog,
        ScaffoldOptions {
            templates_root: PathBuf::from("/templates"),
            workdir: PathBuf::from("/home/me"),
            package_manager: PackageManager::Pnpm,
            skip_install: false,
        },
        Box::new(fs.clone()),
        Box::new(installer.clone()),
    );

    let report = service.scaffold(&request("api", "svc")).unwrap();

    assert_eq!(
        fs.read_file(Path::new("/home/me/svc/index.js")),
        Some(b"console.log('hi')".to_vec())
    );
    assert_eq!(installer.calls()[0].0, PackageManager::Pnpm);
    assert_eq!(report.next_steps(), vec!["cd svc", "pnpm run start"]);
}

#[test]
fn test_copy_failure_midway_leaves_partial_output() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/templates/express-ts/a.txt", "a");
    fs.add_file("/templates/express-ts/z/b.txt", "b");
    fs.add_dir("/work");
    fs.deny_writes("/work/app/z");

    let installer = RecordingInstaller::new();
    let service = ScaffoldService::new(
        TemplateCatalog::builtin(),
        ScaffoldOptions {
            templates_root: PathBuf::from("/templates"),
            workdir: PathBuf::from("/work"),
            package_manager: PackageManager::Npm,
            skip_install: false,
        },
        Box::new(fs.clone()),
        Box::new(installer.clone()),
    );

    let failure = service.scaffold(&request("express-ts", "app")).unwrap_err();

    assert_eq!(failure.stage, Stage::Copy);
    assert_eq!(fs.read_file(Path::new("/work/app/a.txt")), Some(b"a".to_vec()));
    assert!(installer.calls().is_empty());
}
