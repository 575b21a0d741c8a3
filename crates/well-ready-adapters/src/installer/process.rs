//! Runs the real package manager as a child process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, instrument};
use well_ready_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::PackageManager,
    error::WellReadyResult,
};

/// Spawns `<pm> install` in the project directory and waits for it.
///
/// The child inherits stdin, stdout and stderr, so the user sees the
/// package manager's own output and can answer its prompts. It also stays
/// in our process group: a Ctrl-C at the terminal reaches both processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessInstaller {
    search_path: Option<OsString>,
}

impl ProcessInstaller {
    /// Resolve package managers from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve package managers from `search_path` instead of `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Locate the executable. On Windows this picks up `npm.cmd` style shims.
    fn resolve(&self, manager: PackageManager, project_dir: &Path) -> WellReadyResult<PathBuf> {
        let program = manager.program();
        let found = match &self.search_path {
            Some(paths) => which::which_in(program, Some(paths), project_dir),
            None => which::which(program),
        };

        found.map_err(|e| {
            ApplicationError::InstallerUnavailable {
                program: program.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl PackageInstaller for ProcessInstaller {
    #[instrument(skip(self, project_dir), fields(dir = %project_dir.display()))]
    fn install(&self, manager: PackageManager, project_dir: &Path) -> WellReadyResult<()> {
        let executable = self.resolve(manager, project_dir)?;
        let command = manager.install_command();
        debug!(executable = %executable.display(), "Resolved package manager");
        info!(%command, "Running install");

        let status = Command::new(&executable)
            .args(manager.install_args())
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::InstallerUnavailable {
                program: manager.program().to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            info!("Install finished");
            Ok(())
        } else {
            Err(ApplicationError::InstallFailed {
                command,
                code: status.code(),
            }
            .into())
        }
    }
}
