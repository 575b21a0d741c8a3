//! Installer that records calls instead of spawning processes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use well_ready_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::PackageManager,
    error::WellReadyResult,
};

/// Test double for [`PackageInstaller`].
///
/// Clones share the call log. Configure [`RecordingInstaller::failing`] to
/// simulate a non-zero exit.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<(PackageManager, PathBuf)>>>,
    exit_code: Option<i32>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every install fails with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<(PackageManager, PathBuf)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, manager: PackageManager, project_dir: &Path) -> WellReadyResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((manager, project_dir.to_path_buf()));
        }

        match self.exit_code {
            None => Ok(()),
            Some(code) => Err(ApplicationError::InstallFailed {
                command: manager.install_command(),
                code: Some(code),
            }
            .into()),
        }
    }
}
