//! # API REST
//!
//! REST API implementation for the drug label search service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Lookup clients come from the `openfda` and `emc` boundary crates; record
//! shaping and CSV export come from `dls-core`.

#![warn(rust_2018_idioms)]

pub mod dto;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
