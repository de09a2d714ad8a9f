//! Repository implementations.
//!
//! [`PgMappingRepository`] is the production backend; the uniqueness
//! constraints on the `url_mappings` table are the authoritative
//! race-resolution mechanism. [`InMemoryMappingRepository`] mirrors those
//! semantics for tests and local development without a database.

pub mod memory;
pub mod pg_mapping_repository;

pub use memory::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
