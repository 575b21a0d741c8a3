// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for well-ready.
//!
//! Pure rules with no I/O: the template catalog, validated project names,
//! the scaffold request and its report. Filesystem and process access are
//! reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or terminal access
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    ScaffoldReport, ScaffoldRequest, TemplateCatalog, TemplateEntry,
    catalog::builtin_entries,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{DomainValidator, MAX_PROJECT_NAME_LEN};
pub use value_objects::{PackageManager, ProjectName, Stage, TemplateId};
