//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: String,
    fda_base_url: String,
    emc_base_url: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if any value is empty or whitespace.
    pub fn new(
        rest_addr: impl Into<String>,
        fda_base_url: impl Into<String>,
        emc_base_url: impl Into<String>,
    ) -> CoreResult<Self> {
        let rest_addr = rest_addr.into();
        let fda_base_url = fda_base_url.into();
        let emc_base_url = emc_base_url.into();

        if rest_addr.trim().is_empty() {
            return Err(CoreError::InvalidInput("rest_addr cannot be empty".into()));
        }
        if fda_base_url.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "fda_base_url cannot be empty".into(),
            ));
        }
        if emc_base_url.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "emc_base_url cannot be empty".into(),
            ));
        }

        Ok(Self {
            rest_addr,
            fda_base_url,
            emc_base_url,
        })
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn fda_base_url(&self) -> &str {
        &self.fda_base_url
    }

    pub fn emc_base_url(&self) -> &str {
        &self.emc_base_url
    }
}
