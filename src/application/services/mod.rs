//! Business logic services.

pub mod mapping_service;

pub use mapping_service::MappingService;
