use std::collections::HashSet;

use crate::domain::{entities::TemplateEntry, error::DomainError};

/// Longest name npm accepts for a package; the project directory becomes one.
pub const MAX_PROJECT_NAME_LEN: usize = 214;

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check an already-trimmed project name. Returns the human-readable
    /// reason on failure; callers wrap it in [`DomainError::InvalidProjectName`].
    pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
        if name.is_empty() {
            return Err("name cannot be empty");
        }
        if name == "." || name == ".." {
            return Err("name cannot be '.' or '..'");
        }
        if name.contains(['/', '\\']) {
            return Err("name cannot contain path separators");
        }
        if name.chars().any(char::is_control) {
            return Err("name cannot contain control characters");
        }
        if name.contains([':', '*', '?', '"', '<', '>', '|']) {
            return Err("name cannot contain any of : * ? \" < > |");
        }
        if name.chars().count() > MAX_PROJECT_NAME_LEN {
            return Err("name is longer than 214 characters");
        }

        let stem = name.split('.').next().unwrap_or(name);
        if RESERVED_DEVICE_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(stem))
        {
            return Err("name is a reserved device name");
        }

        Ok(())
    }

    /// Check the catalog invariants: non-empty, unique ids and labels,
    /// relative template directories.
    pub fn validate_catalog(entries: &[TemplateEntry]) -> Result<(), DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        for entry in entries {
            if !ids.insert(entry.id.as_str()) {
                return Err(DomainError::DuplicateTemplateId {
                    id: entry.id.to_string(),
                });
            }
            if !labels.insert(entry.label.as_str()) {
                return Err(DomainError::DuplicateTemplateLabel {
                    label: entry.label.clone(),
                });
            }

            let dir = entry.directory();
            let escapes = dir
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)));
            if dir.as_os_str().is_empty() || escapes {
                return Err(DomainError::InvalidTemplateDirectory {
                    id: entry.id.to_string(),
                    directory: dir.display().to_string(),
                });
            }
        }

        Ok(())
    }
}
