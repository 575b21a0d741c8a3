//! well-ready core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the well-ready
//! project starter, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          well-ready-cli (CLI)           │
//! │     (prompts, flags, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, PackageInstaller, Observer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    well-ready-adapters (Infrastructure) │
//! │  (LocalFilesystem, ProcessInstaller)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateCatalog, ProjectName, Stage)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use well_ready_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn PackageInstaller>) { unimplemented!() }
//!
//! let (filesystem, installer) = adapters();
//! let service = ScaffoldService::new(
//!     TemplateCatalog::builtin(),
//!     ScaffoldOptions {
//!         templates_root: PathBuf::from("templates"),
//!         workdir: PathBuf::from("."),
//!         package_manager: PackageManager::Npm,
//!         skip_install: false,
//!     },
//!     filesystem,
//!     installer,
//! );
//!
//! let request = ScaffoldRequest::new(
//!     TemplateId::new("express-ts").unwrap(),
//!     ProjectName::parse("my-api").unwrap(),
//! );
//! match service.scaffold(&request) {
//!     Ok(report) => println!("{}", report.next_steps().join("\n")),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldPlan, ScaffoldResult, ScaffoldService, TemplateInfo,
        TemplateService,
        ports::{Filesystem, NoopObserver, PackageInstaller, ProgressObserver},
    };
    pub use crate::domain::{
        PackageManager, ProjectName, ScaffoldReport, ScaffoldRequest, Stage, TemplateCatalog,
        TemplateEntry, TemplateId,
    };
    pub use crate::error::{ScaffoldFailure, WellReadyError, WellReadyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
