//! Template system for seedling project provisioning.
//!
//! Templates are embedded into the binary at compile-time via `include_str!`
//! in the [`embedded`] module — the compiled-in resource root is
//! `crates/seedling-adapters/templates/`. They are copied into generated
//! projects verbatim; there is no variable substitution.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/<profile>/`
//! 2. Add a variant to `TemplateId` in `seedling-core`
//! 3. Map it in [`embedded::content`]
//!
//! The `include_str!` paths are relative to `embedded.rs` and checked at
//! compile-time, so the files and the mapping cannot drift apart silently.

pub mod embedded;

mod store;

pub use store::{EmbeddedTemplates, MemoryTemplates};
