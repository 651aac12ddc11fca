//! # todohub-api
//!
//! Axum HTTP layer for TodoHub: application state, route definitions,
//! request/response DTOs, the authentication extractor, and the mapping
//! from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
