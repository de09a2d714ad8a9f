//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls and
//! validation. Services consume repository traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - identifier assignment and resolution

pub mod services;
