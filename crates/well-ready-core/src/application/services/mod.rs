//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "list templates".

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{
    ScaffoldOptions, ScaffoldPlan, ScaffoldResult, ScaffoldService, destination_path,
};
pub use template_service::{TemplateInfo, TemplateService};
