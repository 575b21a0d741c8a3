//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;
use well_ready_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TreeEntry},
    },
    error::{WellReadyError, WellReadyResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk(&self, root: &Path) -> WellReadyResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        // Pre-order traversal; sorted so the copy order is deterministic.
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                let reason = e.to_string();
                WellReadyError::from(ApplicationError::CopyFailed { path, reason })
            })?;

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "resolve"))?
                .to_path_buf();

            // walkdir does not follow links, so a linked directory is not
            // descended into and a dangling link is still listed.
            if entry.path_is_symlink() {
                let target = std::fs::read_link(entry.path())
                    .map_err(|e| map_io_error(entry.path(), e, "read symlink"))?;
                entries.push(TreeEntry::symlink(relative, target));
            } else if entry.file_type().is_dir() {
                entries.push(TreeEntry::dir(relative));
            } else {
                entries.push(TreeEntry::file(relative));
            }
        }

        trace!(root = %root.display(), count = entries.len(), "Walked template tree");
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> WellReadyResult<()> {
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn create_dir_all(&self, path: &Path) -> WellReadyResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> WellReadyResult<()> {
        // Carries permission bits over.
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "copy file"))
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> WellReadyResult<()> {
        symlink(target, link).map_err(|e| map_io_error(link, e, "create symlink"))
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    // Windows needs to know the link kind up front; a dangling target is
    // created as a file link.
    let resolved = match link.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> WellReadyError {
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
