pub mod catalog;
pub mod report;
pub mod request;

pub use catalog::{TemplateCatalog, TemplateEntry};
pub use report::ScaffoldReport;
pub use request::ScaffoldRequest;
