//! Infrastructure adapters for well-ready.
//!
//! This crate implements the ports defined in `well_ready_core::application::ports`.
//! It contains all filesystem and process I/O.

pub mod filesystem;
pub mod installer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{ProcessInstaller, RecordingInstaller};
