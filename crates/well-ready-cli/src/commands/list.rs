//! Implementation of the `well-ready list` command.

use well_ready_adapters::LocalFilesystem;
use well_ready_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.templates_root(global.templates_dir.as_deref());
    let service = TemplateService::new(config.catalog()?, &root, Box::new(LocalFilesystem::new()));
    let templates = service.list();

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Available templates ({}):", root.display()))?;
            let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
            for template in &templates {
                let line = format!("  {:width$}  {}", template.id, template.label);
                if template.available {
                    output.print(&line)?;
                } else {
                    output.warning(&format!("{} (missing)", line.trim_start()))?;
                }
            }
        }
        ListFormat::Json => {
            // Printed directly: JSON must stay parseable in pipes and under --quiet.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| CliError::IoError {
                message: "cannot serialise template list".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
        ListFormat::List => {
            for t in &templates {
                println!("{}", t.id);
            }
        }
        ListFormat::Csv => {
            println!("id,label,available,directory");
            for t in &templates {
                println!("{}", csv_row(t));
            }
        }
    }

    Ok(())
}

fn csv_row(t: &TemplateInfo) -> String {
    [
        t.id.clone(),
        t.label.clone(),
        t.available.to_string(),
        t.directory.display().to_string(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
