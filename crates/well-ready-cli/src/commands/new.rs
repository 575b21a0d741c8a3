//! Implementation of the `well-ready new` command (and the bare `well-ready`
//! interactive wizard).
//!
//! Responsibility: collect a template and a project name (flags first, then
//! prompts), call the core scaffold service, and display results. No business
//! logic lives here.

use tracing::{debug, info, instrument};

use well_ready_adapters::{LocalFilesystem, ProcessInstaller};
use well_ready_core::{
    application::{ScaffoldOptions, ScaffoldPlan, ScaffoldService, TemplateService},
    domain::{ProjectName, ScaffoldReport, ScaffoldRequest, TemplateId},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, StageReporter},
};

/// Shown when the project name prompt gets empty or blank input.
pub const EMPTY_NAME_MESSAGE: &str = "Project name cannot be empty!";

/// Execute the `well-ready new` command.
///
/// Dispatch sequence:
/// 1. Resolve the catalog and templates root, warn about missing templates
/// 2. Take the template and name from flags, prompting for what is missing
/// 3. Early-exit if `--dry-run`
/// 4. Copy and install via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Catalog + templates
    let catalog = config.catalog()?;
    let templates_root = config.templates_root(global.templates_dir.as_deref());
    let templates = TemplateService::new(
        catalog.clone(),
        &templates_root,
        Box::new(LocalFilesystem::new()),
    );
    templates.check();

    let can_prompt = !args.yes && output.is_interactive();

    // 2. Inputs
    let template_id = match args.template.as_deref() {
        Some(id) => TemplateId::new(id)?,
        None if can_prompt => prompt_template(&templates)?,
        None => {
            return Err(CliError::NotInteractive {
                what: "template",
                flag: "--template <ID>",
            });
        }
    };

    let project_name = match args.name.as_deref() {
        Some(name) => ProjectName::parse(name)?,
        None if can_prompt => prompt_project_name()?,
        None => {
            return Err(CliError::NotInteractive {
                what: "project name",
                flag: "well-ready new <NAME>",
            });
        }
    };

    let workdir = std::env::current_dir().with_cli_context(|| "cannot read the current directory")?;
    let options = ScaffoldOptions {
        templates_root,
        workdir,
        package_manager: args
            .package_manager
            .map(Into::into)
            .unwrap_or(config.install.package_manager),
        skip_install: args.skip_install || config.install.skip,
    };
    debug!(?options, template = %template_id, "Scaffold options resolved");

    let service = ScaffoldService::new(
        catalog,
        options,
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessInstaller::new()),
    )
    .with_observer(Box::new(StageReporter::new(output.clone())));

    let request = ScaffoldRequest::new(template_id, project_name);

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&request)?;
        show_plan(&plan, &output)?;
        return Ok(());
    }

    // 4. Scaffold
    info!(
        destination = %service.destination_for(&request.project_name).display(),
        "Scaffold started"
    );
    let report = service.scaffold(&request)?;
    info!(files = report.files_copied, "Scaffold completed");

    // 5. Success + next steps
    show_next_steps(&report, &output)?;

    Ok(())
}

// ── Prompts ───────────────────────────────────────────────────────────────────

/// Why `input` is not an acceptable project name, if it isn't.
pub fn project_name_error(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return Some(EMPTY_NAME_MESSAGE.to_string());
    }
    match ProjectName::parse(input) {
        Ok(_) => None,
        Err(well_ready_core::domain::DomainError::InvalidProjectName { reason, .. }) => {
            Some(format!("Invalid project name: {reason}"))
        }
        Err(other) => Some(other.to_string()),
    }
}

#[cfg(feature = "interactive")]
fn prompt_template(templates: &TemplateService) -> CliResult<TemplateId> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let labels = templates.catalog().labels();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a project template:")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_failed)?
        .ok_or(CliError::Cancelled)?;

    let entry = labels
        .get(selection)
        .and_then(|label| templates.find_by_label(label))
        .ok_or(CliError::Cancelled)?;
    debug!(template = %entry.id, "Template selected");
    Ok(entry.id.clone())
}

#[cfg(feature = "interactive")]
fn prompt_project_name() -> CliResult<ProjectName> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your project name:")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            match project_name_error(input) {
                Some(message) => Err(message),
                None => Ok(()),
            }
        })
        .interact_text()
        .map_err(prompt_failed)?;

    Ok(ProjectName::parse(&raw)?)
}

#[cfg(feature = "interactive")]
fn prompt_failed(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: format!("prompt failed: {e}"),
        source: std::io::Error::other(e),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_template(_templates: &TemplateService) -> CliResult<TemplateId> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_project_name() -> CliResult<ProjectName> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would create {}",
        plan.destination.display()
    ))?;
    out.print(&format!("  Template:     {} ({})", plan.template.label, plan.template.id))?;
    out.print(&format!("  Source:       {}", plan.source.display()))?;
    out.print(&format!(
        "  Contents:     {} files, {} directories, {} symlinks",
        plan.file_count(),
        plan.directory_count(),
        plan.symlink_count()
    ))?;
    out.print(&format!(
        "  Install:      {}",
        plan.install_command.as_deref().unwrap_or("skipped")
    ))?;
    Ok(())
}

fn show_next_steps(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.success("Project setup complete!")?;
    out.print(&format!("Project created at {}", report.destination.display()))?;
    out.print("")?;
    out.header("Next steps:")?;
    for step in report.next_steps() {
        out.command(&step)?;
    }
    out.print("")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
