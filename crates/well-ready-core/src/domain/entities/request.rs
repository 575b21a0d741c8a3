use crate::domain::value_objects::{ProjectName, TemplateId};

/// What the user asked for: one template, one project name.
///
/// Built once per invocation and consumed by `ScaffoldService::scaffold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub template_id: TemplateId,
    pub project_name: ProjectName,
}

impl ScaffoldRequest {
    pub fn new(template_id: TemplateId, project_name: ProjectName) -> Self {
        Self {
            template_id,
            project_name,
        }
    }
}
