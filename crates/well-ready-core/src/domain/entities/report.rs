//! Outcome of a successful scaffold.

use std::path::PathBuf;

use crate::domain::{
    entities::TemplateEntry,
    value_objects::{PackageManager, ProjectName},
};

/// Everything the CLI needs to print the completion banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub template: TemplateEntry,
    pub destination: PathBuf,
    pub files_copied: usize,
    pub package_manager: PackageManager,
    /// `false` when the install step was skipped on request.
    pub installed: bool,
}

impl ScaffoldReport {
    /// Commands the user runs next, in order.
    ///
    /// Always starts with `cd <project>` and ends with the template's run
    /// command; an explicit install is inserted when it was skipped.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.project_name)];
        if !self.installed {
            steps.push(self.package_manager.install_command());
        }
        steps.push(self.package_manager.run_command(&self.template.run_script));
        steps
    }
}
