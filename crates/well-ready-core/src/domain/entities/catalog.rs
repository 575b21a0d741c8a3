//! Template catalog: the fixed set of starter templates a user can pick from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError, validation::DomainValidator, value_objects::TemplateId,
};

fn default_run_script() -> String {
    "dev".into()
}

/// One selectable template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Stable identifier, used by `--template`.
    pub id: TemplateId,
    /// Label shown in the interactive picker.
    pub label: String,
    /// Directory under the templates root. Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `package.json` script named in the "next steps" hint.
    #[serde(default = "default_run_script")]
    pub run_script: String,
}

impl TemplateEntry {
    pub fn new(id: TemplateId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            directory: None,
            description: None,
            run_script: default_run_script(),
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_run_script(mut self, script: impl Into<String>) -> Self {
        self.run_script = script.into();
        self
    }

    /// Directory name relative to the templates root.
    pub fn directory(&self) -> &Path {
        self.directory
            .as_deref()
            .unwrap_or_else(|| Path::new(self.id.as_str()))
    }
}

/// Immutable, validated list of templates.
///
/// Order is preserved: it is the order shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self, DomainError> {
        DomainValidator::validate_catalog(&entries)?;
        Ok(Self { entries })
    }

    /// The templates shipped with well-ready.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn get(&self, id: &TemplateId) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in catalog. Ids that differ from their on-disk directory carry an
/// explicit `directory`.
pub fn builtin_entries() -> Vec<TemplateEntry> {
    // Ids are hard-coded and known valid.
    let id = |s: &str| TemplateId(s.to_string());

    vec![
        TemplateEntry::new(id("nextjs-prisma"), "Next.js + Prisma")
            .with_directory("nextapp")
            .with_description("Next.js app with API routes and Prisma"),
        TemplateEntry::new(id("nextjs-app-router"), "Next.js (App Router)")
            .with_description("Next.js App Router starter with Tailwind"),
        TemplateEntry::new(id("mern-ts"), "MERN Stack (TypeScript)")
            .with_directory("MERN-TS")
            .with_description("MongoDB, Express, React and Node in TypeScript"),
        TemplateEntry::new(id("mern-basic"), "MERN Stack (JavaScript)")
            .with_directory("Mern-basic")
            .with_description("MongoDB, Express, React and Node in JavaScript"),
        TemplateEntry::new(id("mern-ts-tailwind"), "MERN + Tailwind (TypeScript)")
            .with_description("MERN TypeScript stack with a Tailwind client"),
        TemplateEntry::new(id("react-vite-tailwind"), "Vite + React (TypeScript)")
            .with_description("Vite, React and Tailwind single-page app"),
        TemplateEntry::new(id("express-ts"), "Express API (TypeScript)")
            .with_description("Express REST API with auth routes"),
    ]
}
