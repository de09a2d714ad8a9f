//! Domain layer containing the core entity and data-access contracts.
//!
//! - [`entities`] - The `UrlMapping` record
//! - [`repositories`] - Repository trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on infrastructure or presentation
//! concerns; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
