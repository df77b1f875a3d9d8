//! `TemplateStore` implementations.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use seedling_core::{
    application::{ProvisionError, ports::TemplateStore},
    domain::TemplateId,
    error::SeedlingResult,
};

use super::embedded;

/// Production store backed by the compile-time embedded payloads.
///
/// Resolution is total, so `get` cannot fail here; the `TemplateNotFound`
/// classification exists for stores with dynamic backing (see
/// [`MemoryTemplates`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn get(&self, id: TemplateId) -> SeedlingResult<String> {
        Ok(embedded::content(id).to_string())
    }
}

/// In-memory template store for testing.
///
/// Starts empty; tests seed exactly the templates a scenario needs, which
/// makes the missing-template abort path reachable.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    inner: Arc<RwLock<HashMap<TemplateId, String>>>,
}

impl MemoryTemplates {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with every embedded template.
    pub fn with_embedded() -> Self {
        let store = Self::new();
        for id in TemplateId::ALL {
            store.insert(id, embedded::content(id));
        }
        store
    }

    /// Insert or replace a template.
    pub fn insert(&self, id: TemplateId, content: impl Into<String>) {
        self.inner.write().unwrap().insert(id, content.into());
    }

    /// Remove a template, making subsequent `get`s fail.
    pub fn remove(&self, id: TemplateId) {
        self.inner.write().unwrap().remove(&id);
    }
}

impl TemplateStore for MemoryTemplates {
    fn get(&self, id: TemplateId) -> SeedlingResult<String> {
        self.inner
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ProvisionError::TemplateNotFound { id }.into())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_store_resolves_every_id() {
        let store = EmbeddedTemplates::new();
        for id in TemplateId::ALL {
            assert!(!store.get(id).unwrap().is_empty());
        }
    }

    #[test]
    fn embedded_store_returns_byte_identical_content() {
        let store = EmbeddedTemplates::new();
        assert_eq!(
            store.get(TemplateId::BaremetalGrubCfg).unwrap(),
            embedded::BAREMETAL_GRUB_CFG
        );
    }

    #[test]
    fn memory_store_reports_missing_templates() {
        let store = MemoryTemplates::new();
        let err = store.get(TemplateId::CppMakefile).unwrap_err();
        assert_eq!(err.kind(), "TemplateNotFound");
    }

    #[test]
    fn memory_store_with_embedded_matches_production() {
        let store = MemoryTemplates::with_embedded();
        for id in TemplateId::ALL {
            assert_eq!(store.get(id).unwrap(), embedded::content(id));
        }
    }
}
