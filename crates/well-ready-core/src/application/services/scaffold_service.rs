//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the template directory for the requested id
//! 2. Copy the template tree to `<workdir>/<project>`
//! 3. Run the package manager's install command in the new directory
//!
//! Each step runs once. Nothing is retried and nothing is rolled back: a
//! failed copy leaves whatever was written, a failed install leaves the full
//! copy in place.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem, NoopObserver, PackageInstaller, ProgressObserver, TreeEntry},
    },
    domain::{
        PackageManager, ProjectName, ScaffoldReport, ScaffoldRequest, Stage, TemplateCatalog,
        TemplateEntry,
    },
    error::{ScaffoldFailure, WellReadyError, WellReadyResult},
};

/// Outcome of [`ScaffoldService::scaffold`].
pub type ScaffoldResult = Result<ScaffoldReport, ScaffoldFailure>;

/// Where templates come from, where projects go, and how they get installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Directory holding one subdirectory per template.
    pub templates_root: PathBuf,
    /// Directory the project is created in (normally the current directory).
    pub workdir: PathBuf,
    pub package_manager: PackageManager,
    /// Skip the install step entirely.
    pub skip_install: bool,
}

/// A resolved, not-yet-executed scaffold. Produced by [`ScaffoldService::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub template: TemplateEntry,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub entries: Vec<TreeEntry>,
    /// `None` when installation is skipped.
    pub install_command: Option<String>,
}

impl ScaffoldPlan {
    pub fn file_count(&self) -> usize {
        self.count(|kind| matches!(kind, EntryKind::File))
    }

    pub fn directory_count(&self) -> usize {
        self.count(|kind| matches!(kind, EntryKind::Directory))
    }

    pub fn symlink_count(&self) -> usize {
        self.count(|kind| matches!(kind, EntryKind::Symlink { .. }))
    }

    fn count(&self, pred: impl Fn(&EntryKind) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.kind)).count()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: TemplateCatalog,
    options: ScaffoldOptions,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
    observer: Box<dyn ProgressObserver>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        catalog: TemplateCatalog,
        options: ScaffoldOptions,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            catalog,
            options,
            filesystem,
            installer,
            observer: Box::new(NoopObserver),
        }
    }

    /// Report stage progress to `observer`.
    pub fn with_observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// `<workdir>/<project>`.
    pub fn destination_for(&self, project_name: &ProjectName) -> PathBuf {
        destination_path(&self.options.workdir, project_name)
    }

    /// Resolve the request and check every precondition without writing.
    ///
    /// All failures here belong to the copy stage.
    #[instrument(
        skip_all,
        fields(template = %request.template_id, project = %request.project_name)
    )]
    pub fn plan(&self, request: &ScaffoldRequest) -> Result<ScaffoldPlan, ScaffoldFailure> {
        let destination = self.destination_for(&request.project_name);
        let copy_failure = |e: WellReadyError| ScaffoldFailure::new(Stage::Copy, &destination, e);

        let template = self
            .catalog
            .get(&request.template_id)
            .ok_or_else(|| ApplicationError::UnknownTemplate {
                id: request.template_id.to_string(),
                available: self
                    .catalog
                    .entries()
                    .iter()
                    .map(|e| e.id.to_string())
                    .collect(),
            })
            .map_err(|e| copy_failure(e.into()))?;

        let source = self.options.templates_root.join(template.directory());
        if !self.filesystem.is_dir(&source) {
            return Err(copy_failure(
                ApplicationError::TemplateNotFound { path: source }.into(),
            ));
        }

        if self.filesystem.exists(&destination) {
            return Err(copy_failure(
                ApplicationError::DestinationExists {
                    path: destination.clone(),
                }
                .into(),
            ));
        }

        let entries = self.filesystem.walk(&source).map_err(copy_failure)?;
        debug!(entries = entries.len(), source = %source.display(), "Template tree listed");

        let install_command =
            (!self.options.skip_install).then(|| self.options.package_manager.install_command());

        Ok(ScaffoldPlan {
            template: template.clone(),
            source,
            destination,
            entries,
            install_command,
        })
    }

    /// Scaffold a new project: copy, then install.
    #[instrument(
        skip_all,
        fields(
            template = %request.template_id,
            project = %request.project_name,
            workdir = %self.options.workdir.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> ScaffoldResult {
        let plan = self.plan(request)?;
        info!(
            source = %plan.source.display(),
            destination = %plan.destination.display(),
            "Template resolved"
        );

        // Step A: copy
        self.observer.stage_started(
            Stage::Copy,
            &format!("Creating project folder '{}'...", request.project_name),
        );
        let files_copied = match self.copy_tree(&plan) {
            Ok(n) => n,
            Err(e) => {
                self.observer.stage_failed(Stage::Copy);
                warn!(error = %e, "Copy failed; partial output left in place");
                return Err(ScaffoldFailure::new(Stage::Copy, &plan.destination, e));
            }
        };
        self.observer
            .stage_finished(Stage::Copy, "Project folder created successfully!");
        info!(files = files_copied, "Template copied");

        // Step B: install
        let installed = if self.options.skip_install {
            info!("Install skipped");
            false
        } else {
            let pm = self.options.package_manager;
            self.observer.stage_started(
                Stage::Install,
                &format!("Installing dependencies with {pm}... This might take a few minutes"),
            );
            if let Err(e) = self.installer.install(pm, &plan.destination) {
                self.observer.stage_failed(Stage::Install);
                warn!(error = %e, "Install failed; project directory kept");
                return Err(ScaffoldFailure::new(Stage::Install, &plan.destination, e));
            }
            self.observer
                .stage_finished(Stage::Install, "Dependencies installed successfully!");
            true
        };

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            project_name: request.project_name.clone(),
            template: plan.template,
            destination: plan.destination,
            files_copied,
            package_manager: self.options.package_manager,
            installed,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Recreate the planned tree under the destination. Returns files copied.
    ///
    /// The destination root is created with `create_dir`, so a directory that
    /// appeared after `plan` checked for it is reported, never merged into.
    fn copy_tree(&self, plan: &ScaffoldPlan) -> WellReadyResult<usize> {
        self.filesystem.create_dir(&plan.destination)?;

        let mut files = 0;
        for entry in &plan.entries {
            let dest = plan.destination.join(&entry.path);
            match &entry.kind {
                EntryKind::Directory => self.filesystem.create_dir_all(&dest)?,
                EntryKind::File => {
                    self.create_parent(&dest)?;
                    self.filesystem
                        .copy_file(&plan.source.join(&entry.path), &dest)?;
                    files += 1;
                }
                EntryKind::Symlink { target } => {
                    self.create_parent(&dest)?;
                    self.filesystem.create_symlink(target, &dest)?;
                    debug!(
                        link = %dest.display(),
                        target = %target.display(),
                        "Symlink recreated"
                    );
                }
            }
        }

        Ok(files)
    }

    fn create_parent(&self, path: &Path) -> WellReadyResult<()> {
        match path.parent() {
            Some(parent) => self.filesystem.create_dir_all(parent),
            None => Ok(()),
        }
    }
}

/// Destination path for a project name under `workdir`, as the service
/// computes it.
pub fn destination_path(workdir: &Path, project_name: &ProjectName) -> PathBuf {
    workdir.join(project_name.as_str())
}
