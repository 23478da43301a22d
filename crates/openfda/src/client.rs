//! Async client for the openFDA drug label endpoint.

use std::time::Duration;

use crate::label::{LabelEnvelope, LabelHit, LabelLookup};
use crate::{OpenFdaError, OpenFdaResult};

/// Request timeout applied to every lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for single-label lookups against the drug label endpoint.
///
/// Holds a pooled `reqwest` client and the resolved base URL; construct once
/// at startup and share between call sites.
#[derive(Clone, Debug)]
pub struct LabelClient {
    base_url: String,
    client: reqwest::Client,
}

impl LabelClient {
    /// Create a new `LabelClient` against the given base URL.
    ///
    /// # Errors
    /// Returns `OpenFdaError::InvalidInput` if `base_url` is empty, or
    /// `OpenFdaError::ClientBuild` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> OpenFdaResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(OpenFdaError::InvalidInput(
                "base_url cannot be empty".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(OpenFdaError::ClientBuild)?;

        Ok(Self { base_url, client })
    }

    /// Look up the most relevant label document for a generic drug name.
    ///
    /// Queries `{base}?search=openfda.generic_name:"{name}"&limit=1`. A
    /// successful response with at least one result yields
    /// [`LabelLookup::Found`]; a successful response with no results yields
    /// [`LabelLookup::NotFound`].
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent, the endpoint answers
    /// with a non-success status, or the body cannot be decoded. Callers
    /// decide whether to surface or collect these; "no label exists" is not
    /// an error.
    pub async fn lookup(&self, drug_name: &str) -> OpenFdaResult<LabelLookup> {
        let search = format!("openfda.generic_name:\"{}\"", drug_name);

        tracing::debug!("openFDA lookup for {}", drug_name);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("search", search.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(OpenFdaError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenFdaError::Status(status));
        }

        let envelope: LabelEnvelope =
            response.json().await.map_err(OpenFdaError::Decode)?;

        match envelope.results.into_iter().next() {
            Some(entry) => Ok(LabelLookup::Found(LabelHit::from_wire(
                envelope.meta,
                entry,
            ))),
            None => Ok(LabelLookup::NotFound),
        }
    }
}
