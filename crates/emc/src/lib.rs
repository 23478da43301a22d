//! eMC (Electronic Medicines Compendium) boundary support.
//!
//! This crate looks up UK licensing text for a drug name by scraping the
//! public eMC site: search for the name, follow the first product link, and
//! pull the therapeutic indications section (SmPC section 4.1) out of the
//! product page.
//!
//! The DOM traversal is a simple lookup; only the output contract matters to
//! callers. "No UK product found" and "not found in standard format" are
//! valid results, not errors; errors are reserved for transport failures.

pub mod licensing;

// Re-export facades
pub use licensing::{EmcScraper, UkLicensing};

/// Default base URL for the eMC site.
pub const DEFAULT_BASE_URL: &str = "https://www.medicines.org.uk";

/// Errors returned by the `emc` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum EmcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("eMC request failed: {0}")]
    Request(reqwest::Error),

    #[error("eMC returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read eMC response body: {0}")]
    Body(reqwest::Error),
}

/// Type alias for Results that can fail with an [`EmcError`].
pub type EmcResult<T> = Result<T, EmcError>;
