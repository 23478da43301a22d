//! # DLS Core
//!
//! Core business logic for the drug label search service.
//!
//! This crate contains pure data operations:
//! - Indication phrase extraction from raw label text
//! - Drug record construction from openFDA lookup outcomes
//! - CSV export of record batches
//! - Predefined study drug lists
//!
//! **No API concerns**: HTTP routing, request marshalling and CORS belong in
//! `api-rest`; upstream fetching belongs in the `openfda` and `emc` boundary
//! crates.

pub mod config;
pub mod error;
pub mod export;
pub mod indications;
pub mod lists;
pub mod record;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use indications::IndicationExtractor;
pub use record::{DrugRecord, RecordBuilder, NOT_FOUND, NO_DATA_FOUND};
