//! Request and response bodies for the REST API.

use std::time::Duration;

use dls_core::DrugRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default pause between upstream calls in a batch query, in seconds.
pub const DEFAULT_RATE_LIMIT_DELAY: f64 = 0.3;

/// Service status response for the root endpoint.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StatusRes {
    pub message: String,
    pub status: String,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Batch query request.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct BatchQueryReq {
    /// Drug names to look up, in order.
    pub drugs: Vec<String>,
    /// Pause between upstream calls, in fractional seconds.
    #[serde(default = "default_rate_limit_delay")]
    pub rate_limit_delay: f64,
}

fn default_rate_limit_delay() -> f64 {
    DEFAULT_RATE_LIMIT_DELAY
}

impl BatchQueryReq {
    /// The inter-call pause as a `Duration`.
    ///
    /// Negative and non-finite values clamp to zero so the endpoint stays
    /// total over its input.
    pub fn delay(&self) -> Duration {
        if self.rate_limit_delay.is_finite() && self.rate_limit_delay > 0.0 {
            Duration::from_secs_f64(self.rate_limit_delay)
        } else {
            Duration::ZERO
        }
    }
}

/// One failed lookup within a batch query.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BatchError {
    pub drug: String,
    pub error: String,
}

/// Batch query response.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BatchQueryRes {
    pub results: Vec<DrugRecord>,
    pub total_processed: usize,
    pub total_found: usize,
    pub errors: Vec<BatchError>,
    /// Wall-clock time spent on the batch, in seconds.
    pub execution_time: f64,
}

/// CSV export request.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ExportReq {
    pub results: Vec<DrugRecord>,
    /// Attachment filename; a timestamped default is used when absent.
    #[serde(default)]
    pub filename: Option<String>,
}
