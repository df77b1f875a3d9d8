//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `seedling-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: guarded directory/file provisioning
//!   - `TemplateStore`: embedded template resolution
//!   - `VcsClient` / `PackageManager`: external tool invocation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandOutput, Filesystem, PackageManager, TemplateStore, VcsClient};
