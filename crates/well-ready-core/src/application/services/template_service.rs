//! Template Service - catalog queries.
//!
//! Answers "which templates exist and can they be used right now".
//! Separated from ScaffoldService for single responsibility.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{TemplateCatalog, TemplateEntry, TemplateId},
    error::WellReadyResult,
};

/// Template metadata for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub directory: PathBuf,
    /// Whether the directory exists under the templates root.
    pub available: bool,
}

/// Service for template operations.
pub struct TemplateService {
    catalog: TemplateCatalog,
    templates_root: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(
        catalog: TemplateCatalog,
        templates_root: impl Into<PathBuf>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            templates_root: templates_root.into(),
            filesystem,
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Get a template by ID.
    pub fn get(&self, id: &TemplateId) -> WellReadyResult<&TemplateEntry> {
        self.catalog.get(id).ok_or_else(|| {
            ApplicationError::UnknownTemplate {
                id: id.to_string(),
                available: self.ids(),
            }
            .into()
        })
    }

    /// Find a template by its display label.
    pub fn find_by_label(&self, label: &str) -> Option<&TemplateEntry> {
        self.catalog.find_by_label(label)
    }

    /// Absolute source directory of `entry`.
    pub fn source_dir(&self, entry: &TemplateEntry) -> PathBuf {
        self.templates_root.join(entry.directory())
    }

    /// List all templates in catalog order, with availability.
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| TemplateInfo {
                id: entry.id.to_string(),
                label: entry.label.clone(),
                description: entry.description.clone(),
                directory: self.source_dir(entry),
                available: self.filesystem.is_dir(&self.source_dir(entry)),
            })
            .collect()
    }

    /// Catalog entries whose directory is missing. Logs one warning each.
    ///
    /// Missing templates stay selectable; scaffolding one fails at the copy
    /// stage without touching the destination.
    pub fn check(&self) -> Vec<TemplateInfo> {
        let missing: Vec<TemplateInfo> = self.list().into_iter().filter(|t| !t.available).collect();
        for template in &missing {
            warn!(
                template = %template.id,
                directory = %template.directory.display(),
                "Template directory is missing"
            );
        }
        debug!(
            total = self.catalog.len(),
            missing = missing.len(),
            root = %self.templates_root.display(),
            "Catalog checked"
        );
        missing
    }

    fn ids(&self) -> Vec<String> {
        self.catalog
            .entries()
            .iter()
            .map(|e| e.id.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TreeEntry;
    use crate::error::WellReadyError;
    use std::path::Path;

    /// Only knows which directories exist.
    struct DirsOnly(Vec<PathBuf>);

    impl Filesystem for DirsOnly {
        fn exists(&self, path: &Path) -> bool {
            self.is_dir(path)
        }
        fn is_dir(&self, path: &Path) -> bool {
            self.0.iter().any(|d| d == path)
        }
        fn walk(&self, _root: &Path) -> WellReadyResult<Vec<TreeEntry>> {
            Ok(Vec::new())
        }
        fn create_dir(&self, _path: &Path) -> WellReadyResult<()> {
            Ok(())
        }
        fn create_dir_all(&self, _path: &Path) -> WellReadyResult<()> {
            Ok(())
        }
        fn copy_file(&self, _from: &Path, _to: &Path) -> WellReadyResult<()> {
            Ok(())
        }
        fn create_symlink(&self, _target: &Path, _link: &Path) -> WellReadyResult<()> {
            Ok(())
        }
    }

    fn service(present: &[&str]) -> TemplateService {
        TemplateService::new(
            TemplateCatalog::builtin(),
            "/templates",
            Box::new(DirsOnly(
                present
                    .iter()
                    .map(|d| Path::new("/templates").join(d))
                    .collect(),
            )),
        )
    }

    #[test]
    fn list_keeps_catalog_order_and_marks_availability() {
        let svc = service(&["express-ts", "nextapp"]);
        let list = svc.list();

        assert_eq!(list.len(), 7);
        assert_eq!(list[0].id, "nextjs-prisma");
        assert!(list[0].available);
        assert_eq!(list[0].directory, PathBuf::from("/templates/nextapp"));
        assert!(!list[1].available);
        assert!(list.iter().any(|t| t.id == "express-ts" && t.available));
    }

    #[test]
    fn check_reports_only_missing() {
        let svc = service(&["express-ts"]);
        let missing = svc.check();
        assert_eq!(missing.len(), 6);
        assert!(missing.iter().all(|t| t.id != "express-ts"));
    }

    #[test]
    fn get_unknown_lists_available_ids() {
        let svc = service(&[]);
        let err = svc.get(&TemplateId::new("rails").unwrap()).unwrap_err();
        match err {
            WellReadyError::Application(ApplicationError::UnknownTemplate { id, available }) => {
                assert_eq!(id, "rails");
                assert!(available.contains(&"express-ts".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn find_by_label_resolves_entry() {
        let svc = service(&[]);
        let entry = svc.find_by_label("Express API (TypeScript)").unwrap();
        assert_eq!(entry.id.as_str(), "express-ts");
    }
}
