//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `WELL_READY__SECTION__KEY`, e.g.
//!    `WELL_READY__INSTALL__PACKAGE_MANAGER=pnpm`
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use well_ready_core::domain::{
    DomainError, PackageManager, TemplateCatalog, TemplateEntry, builtin_entries,
};

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "WELL_READY";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How dependencies get installed.
    pub install: InstallConfig,
    /// Where templates live and which ones exist.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub package_manager: PackageManager,
    /// Never run the install step.
    pub skip: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Templates root. Located next to the executable when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Replaces the built-in catalog when non-empty.
    pub catalog: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Config written by `well-ready init`: the defaults with the built-in
    /// catalog spelled out so it can be edited.
    pub fn starter() -> Self {
        let mut config = Self::default();
        config.templates.catalog = builtin_entries();
        config
    }

    /// The catalog in effect: the configured one, or the built-in one.
    pub fn catalog(&self) -> Result<TemplateCatalog, DomainError> {
        if self.templates.catalog.is_empty() {
            Ok(TemplateCatalog::builtin())
        } else {
            TemplateCatalog::new(self.templates.catalog.clone())
        }
    }

    /// Resolve the templates root.
    ///
    /// `--templates-dir` / `WELL_READY_TEMPLATES_DIR` wins, then
    /// `templates.root`, then the first existing of `<exe dir>/templates`,
    /// `<exe dir>/../templates` and `<data dir>/templates`.
    pub fn templates_root(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        if let Some(root) = &self.templates.root {
            return root.clone();
        }

        let candidates = default_template_roots();
        candidates
            .iter()
            .find(|c| c.is_dir())
            .or(candidates.last())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("templates"))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.well-ready.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "well-ready", "well-ready")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".well-ready.toml"))
    }
}

fn default_template_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir.join("templates"));
        roots.push(exe_dir.join("..").join("templates"));
    }
    if let Some(dirs) = directories::ProjectDirs::from("dev", "well-ready", "well-ready") {
        roots.push(dirs.data_dir().join("templates"));
    }
    roots
}
