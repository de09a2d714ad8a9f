//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;

/// State shared by all request handlers.
///
/// The service owns the store handle; the system is stateless between
/// requests apart from store contents.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
}

impl AppState {
    /// Creates application state around a mapping service.
    pub fn new(mapping_service: Arc<MappingService>) -> Self {
        Self { mapping_service }
    }
}
