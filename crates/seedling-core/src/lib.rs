//! Seedling Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Seedling
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          seedling-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ProvisionService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Templates, Vcs)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    seedling-adapters (Infrastructure)   │
//! │  (LocalFilesystem, EmbeddedTemplates,   │
//! │          GitCli, CargoCli)              │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Profile, ProvisionStep, Options)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seedling_core::{
//!     application::ProvisionService,
//!     domain::{Options, Profile},
//! };
//!
//! // 1. Describe what to provision
//! let options = Options::new("my-project", "/tmp", Profile::Cpp, false);
//!
//! // 2. Use application service (with injected adapters)
//! let service = ProvisionService::new(filesystem, templates, vcs, package_manager);
//! service.run(&options).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProvisionService,
        ports::{CommandOutput, Filesystem, PackageManager, TemplateStore, VcsClient},
    };
    pub use crate::domain::{Options, Profile, ProvisionStep, Recipe, TemplateId};
    pub use crate::error::{SeedlingError, SeedlingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
