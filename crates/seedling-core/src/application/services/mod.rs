//! Application services - use case orchestration.

pub mod provision_service;

pub use provision_service::ProvisionService;
