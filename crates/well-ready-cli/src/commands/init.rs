//! `well-ready init`: create a default configuration file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default well-ready configuration file.
///
/// Writes to `--config` when given, otherwise to the platform config path.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = global.config.clone().unwrap_or_else(AppConfig::config_path);

    match write_starter_config(&config_path, args.force)? {
        Written::Created => {
            info!(path = %config_path.display(), "Configuration written");
            output.success(&format!(
                "Configuration created at {}",
                config_path.display(),
            ))?;
        }
        Written::AlreadyExists => {
            output.warning(&format!(
                "Config already exists at {}  (use --force to overwrite)",
                config_path.display(),
            ))?;
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Written {
    Created,
    AlreadyExists,
}

fn write_starter_config(path: &Path, force: bool) -> CliResult<Written> {
    // Bail early if the file already exists and --force was not given.
    if path.exists() && !force {
        return Ok(Written::AlreadyExists);
    }

    let toml = toml::to_string_pretty(&AppConfig::starter())
        .with_cli_context(|| "Failed to serialise default config")?;

    // Ensure parent directory exists.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(Written::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");

        assert_eq!(write_starter_config(&path, false).unwrap(), Written::Created);

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::starter());
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert_eq!(
            write_starter_config(&path, false).unwrap(),
            Written::AlreadyExists
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        assert_eq!(write_starter_config(&path, true).unwrap(), Written::Created);
        assert!(std::fs::read_to_string(&path).unwrap().contains("[[templates.catalog]]"));
    }
}
