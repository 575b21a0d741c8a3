//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use well_ready_core::domain::PackageManager;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "well-ready",
    bin_name = "well-ready",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Start a new JavaScript/TypeScript project from a ready-made template",
    long_about = "well-ready copies a starter template into a new folder and installs \
                  its dependencies, so the project is ready to run.\n\n\
                  Run without arguments for the interactive wizard.",
    after_help = "EXAMPLES:\n\
        \x20 well-ready\n\
        \x20 well-ready new my-api --template express-ts\n\
        \x20 well-ready new shop --template mern-ts --package-manager pnpm\n\
        \x20 well-ready list\n\
        \x20 well-ready completions bash > ~/.local/share/bash-completion/completions/well-ready",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Interactive `new` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 well-ready new                                # fully interactive\n\
            \x20 well-ready new my-api --template express-ts\n\
            \x20 well-ready new my-app --template react-vite-tailwind --skip-install\n\
            \x20 well-ready new my-app --template nextjs-app-router --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 well-ready list\n\
            \x20 well-ready list --format json"
    )]
    List(ListArgs),

    /// Initialise a well-ready configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 well-ready init           # default location\n\
            \x20 well-ready init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 well-ready completions bash > ~/.local/share/bash-completion/completions/well-ready\n\
            \x20 well-ready completions zsh  > ~/.zfunc/_well-ready\n\
            \x20 well-ready completions fish > ~/.config/fish/completions/well-ready.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the well-ready configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 well-ready config get install.package_manager\n\
            \x20 well-ready config list\n\
            \x20 well-ready config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `well-ready new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Project name. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (folder created in the current directory)")]
    pub name: Option<String>,

    /// Template id. Prompted for when omitted.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template id (see `well-ready list`)"
    )]
    pub template: Option<String>,

    /// Package manager used for the install step.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "PM",
        value_enum,
        help = "Package manager to install dependencies with"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Copy the template but do not install dependencies.
    #[arg(long = "skip-install", help = "Skip installing dependencies")]
    pub skip_install: bool,

    /// Never prompt; missing values are an error.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Never prompt (fail if NAME or --template is missing)"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Package managers selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
            PackageManagerArg::Bun => PackageManager::Bun,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `well-ready list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `well-ready init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `well-ready completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `well-ready config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `install.package_manager`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
