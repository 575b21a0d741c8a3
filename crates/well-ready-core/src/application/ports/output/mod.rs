//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `well-ready-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{PackageManager, Stage};
use crate::error::WellReadyResult;

/// Kind of an entry found while walking a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// A symbolic link, recreated as a link to the same `target` (which may
    /// be relative or dangling).
    Symlink { target: PathBuf },
}

/// One entry of a template tree, relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn symlink(path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Symlink {
                target: target.into(),
            },
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `well_ready_adapters::filesystem::LocalFilesystem` (production)
/// - `well_ready_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List every entry below `root` (excluding `root` itself), relative to
    /// `root`. A directory always precedes its contents. Symlinks are listed
    /// as links and never followed.
    fn walk(&self, root: &Path) -> WellReadyResult<Vec<TreeEntry>>;

    /// Create exactly one directory. Fails if `path` already exists.
    fn create_dir(&self, path: &Path) -> WellReadyResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WellReadyResult<()>;

    /// Copy one file byte-for-byte. The parent of `to` must exist.
    fn copy_file(&self, from: &Path, to: &Path) -> WellReadyResult<()>;

    /// Create a symlink at `link` pointing to `target`, verbatim.
    fn create_symlink(&self, target: &Path, link: &Path) -> WellReadyResult<()>;
}

/// Port for the external dependency installer.
///
/// Implemented by:
/// - `well_ready_adapters::installer::ProcessInstaller` (spawns the package manager)
/// - `well_ready_adapters::installer::RecordingInstaller` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Run `manager`'s install command inside `project_dir` and block until it
    /// exits. Output goes straight to the user's terminal.
    fn install(&self, manager: PackageManager, project_dir: &Path) -> WellReadyResult<()>;
}

/// Port for stage progress notifications. Every method defaults to a no-op.
pub trait ProgressObserver {
    fn stage_started(&self, _stage: Stage, _message: &str) {}

    fn stage_finished(&self, _stage: Stage, _message: &str) {}

    fn stage_failed(&self, _stage: Stage) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}
