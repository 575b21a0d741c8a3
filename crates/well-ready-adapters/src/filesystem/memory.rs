//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use well_ready_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, TreeEntry},
    },
    error::{WellReadyError, WellReadyResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep one handle and give
/// another to the service under test.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    /// Link path to its verbatim target.
    symlinks: BTreeMap<PathBuf, PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Add an empty directory and its parents (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        insert_ancestors(&mut inner.directories, path.as_ref());
    }

    /// Add a symlink at `link` pointing to `target` (testing helper).
    pub fn add_symlink(&self, link: impl AsRef<Path>, target: impl AsRef<Path>) {
        let link = link.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = link.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.symlinks.insert(link.to_path_buf(), target.as_ref().to_path_buf());
    }

    /// Target of the symlink at `link` (testing helper).
    pub fn read_symlink(&self, link: &Path) -> Option<PathBuf> {
        let inner = self.inner.read().ok()?;
        inner.symlinks.get(link).cloned()
    }

    /// Make writes below `path` fail (testing helper).
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        inner.read_only.insert(path.as_ref().to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.symlinks.clear();
        inner.read_only.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> WellReadyResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(copy_failed(path, "Permission denied"));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> WellReadyResult<()> {
        match path.parent() {
            Some(parent)
                if !parent.as_os_str().is_empty() && !self.directories.contains(parent) =>
            {
                Err(copy_failed(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner.files.contains_key(path)
                    || inner.directories.contains(path)
                    || inner.symlinks.contains_key(path)
            })
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn walk(&self, root: &Path) -> WellReadyResult<Vec<TreeEntry>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(root))?;

        if !inner.directories.contains(root) {
            return Err(copy_failed(root, "No such directory"));
        }

        let mut entries: Vec<TreeEntry> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(root) && d.as_path() != root)
            .filter_map(|d| d.strip_prefix(root).ok())
            .map(TreeEntry::dir)
            .chain(
                inner
                    .files
                    .keys()
                    .filter_map(|f| f.strip_prefix(root).ok())
                    .map(TreeEntry::file),
            )
            .chain(inner.symlinks.iter().filter_map(|(link, target)| {
                link.strip_prefix(root)
                    .ok()
                    .map(|rel| TreeEntry::symlink(rel, target))
            }))
            .collect();

        // Path order puts every directory ahead of what it contains.
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> WellReadyResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;
        inner.check_writable(path)?;
        if inner.directories.contains(path)
            || inner.files.contains_key(path)
            || inner.symlinks.contains_key(path)
        {
            return Err(ApplicationError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.check_parent(path)?;
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> WellReadyResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;
        inner.check_writable(path)?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> WellReadyResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(to))?;
        inner.check_writable(to)?;
        inner.check_parent(to)?;

        let bytes = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| copy_failed(from, "No such file"))?;
        inner.files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> WellReadyResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(link))?;
        inner.check_writable(link)?;
        inner.check_parent(link)?;
        inner.symlinks.insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn copy_failed(path: &Path, reason: &str) -> WellReadyError {
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn lock_poisoned(path: &Path) -> WellReadyError {
    copy_failed(path, "in-memory filesystem lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use well_ready_core::application::ports::EntryKind;

    #[test]
    fn walk_is_relative_and_ordered() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/express-ts/src/server.ts", "x");
        fs.add_file("/t/express-ts/package.json", "{}");
        fs.add_dir("/t/express-ts/public");

        let entries = fs.walk(Path::new("/t/express-ts")).unwrap();

        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("package.json"),
                PathBuf::from("public"),
                PathBuf::from("src"),
                PathBuf::from("src/server.ts"),
            ]
        );
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[test]
    fn copy_requires_parent() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/a/file", "x");
        assert!(fs.copy_file(Path::new("/a/file"), Path::new("/b/file")).is_err());

        fs.create_dir_all(Path::new("/b")).unwrap();
        fs.copy_file(Path::new("/a/file"), Path::new("/b/file")).unwrap();
        assert_eq!(fs.read_file(Path::new("/b/file")), Some(b"x".to_vec()));
    }

    #[test]
    fn denied_paths_reject_writes() {
        let fs = MemoryFilesystem::new();
        fs.deny_writes("/locked");
        assert!(fs.create_dir_all(Path::new("/locked/app")).is_err());
        assert!(!fs.exists(Path::new("/locked/app")));
    }

    #[test]
    fn create_dir_fails_when_path_exists() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/work/my-api");

        let err = fs.create_dir(Path::new("/work/my-api")).unwrap_err();
        assert!(matches!(
            err,
            WellReadyError::Application(ApplicationError::DestinationExists { .. })
        ));

        fs.create_dir(Path::new("/work/other")).unwrap();
        assert!(fs.is_dir(Path::new("/work/other")));
    }

    #[test]
    fn symlinks_are_walked_and_recreated() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/app/shared/a.ts", "x");
        fs.add_symlink("/t/app/linked", "shared");

        let entries = fs.walk(Path::new("/t/app")).unwrap();
        assert!(entries.contains(&TreeEntry::symlink("linked", "shared")));

        fs.add_dir("/out");
        fs.create_symlink(Path::new("shared"), Path::new("/out/linked")).unwrap();
        assert_eq!(
            fs.read_symlink(Path::new("/out/linked")),
            Some(PathBuf::from("shared"))
        );
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.add_file("/x", "1");
        assert_eq!(handle.list_files(), vec![PathBuf::from("/x")]);
    }
}
