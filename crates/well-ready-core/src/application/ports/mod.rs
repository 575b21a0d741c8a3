//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `well-ready-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: tree walking and byte-for-byte copies
//!   - `PackageInstaller`: the external `<pm> install` process
//!   - `ProgressObserver`: stage notifications for spinners and status lines

pub mod output;

pub use output::{
    EntryKind, Filesystem, NoopObserver, PackageInstaller, ProgressObserver, TreeEntry,
};

#[cfg(test)]
pub use output::MockPackageInstaller;
