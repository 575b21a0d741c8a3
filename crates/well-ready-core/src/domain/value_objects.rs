//! Domain value objects: TemplateId, ProjectName, PackageManager, Stage.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Validation happens once, at construction; a `ProjectName` that exists is
//! always safe to join onto a working directory.

use crate::domain::{error::DomainError, validation::DomainValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Identifier of a catalog entry, e.g. `express-ts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateId(pub(crate) String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTemplateId {
                id,
                reason: "id cannot be empty".into(),
            });
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DomainError::InvalidTemplateId {
                id,
                reason: "id cannot contain path separators".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TemplateId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.0
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project name, usable as a single directory component.
///
/// Invariant: trimmed, non-empty, no path separators, not a reserved name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Trim and validate raw user input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        DomainValidator::validate_project_name(trimmed).map_err(|reason| {
            DomainError::InvalidProjectName {
                name: input.to_string(),
                reason: reason.to_string(),
            }
        })?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for ProjectName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// External tool that installs a scaffolded project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [Self; 4] = [Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun];

    /// Executable name looked up on `PATH`.
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.program()
    }

    pub const fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// The install invocation as a single display string.
    pub fn install_command(&self) -> String {
        format!("{} {}", self.program(), self.install_args().join(" "))
    }

    /// Command that runs a `package.json` script, e.g. `npm run dev`.
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {script}", self.program())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::UnknownPackageManager(other.to_string())),
        }
    }
}

// ── Stage ────────────────────────────────────────────────────────────────────

/// A step of the scaffold workflow that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Copy,
    Install,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Install => "install",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
