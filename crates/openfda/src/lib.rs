//! openFDA wire/boundary support for the drug label search service.
//!
//! This crate provides **wire models** and an async **client** for the openFDA
//! drug label endpoint:
//! - JSON envelope and label entry structs matching the upstream schema
//! - translation from the wire envelope to a flat domain-level label hit
//! - a `reqwest`-backed client exposing a single lookup capability
//!
//! The lookup capability deliberately separates three outcomes: a label was
//! found, no label exists for the queried name, and the fetch itself failed.
//! Callers that need "not found" semantics must not have to parse error
//! strings to get them.
//!
//! No extraction or record shaping happens here; that belongs to `dls-core`.

pub mod client;
pub mod label;

// Re-export facades
pub use client::LabelClient;

// Re-export public domain-level types
pub use label::{LabelHit, LabelLookup, OpenFdaFields};

/// Default base URL for the openFDA drug label endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fda.gov/drug/label.json";

/// Errors returned by the `openfda` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum OpenFdaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("openFDA request failed: {0}")]
    Request(reqwest::Error),

    #[error("openFDA returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode openFDA response: {0}")]
    Decode(reqwest::Error),
}

/// Type alias for Results that can fail with an [`OpenFdaError`].
pub type OpenFdaResult<T> = Result<T, OpenFdaError>;
