#![allow(dead_code)]

use std::sync::Arc;

use shorturl::application::services::MappingService;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::state::AppState;

/// Builds application state backed by the in-memory store, returning the
/// repository handle so tests can inspect stored state directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let mapping_service = Arc::new(MappingService::new(repository.clone()));

    (AppState::new(mapping_service), repository)
}
