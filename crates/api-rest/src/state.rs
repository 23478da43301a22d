//! Shared application state for the REST API.

use std::sync::Arc;

use dls_core::{CoreConfig, RecordBuilder};
use emc::EmcScraper;
use openfda::LabelClient;

/// Application state shared across REST API handlers.
///
/// Contains the upstream clients and the record builder. Everything inside
/// is immutable after construction, so cloning per request is cheap and
/// handlers need no synchronisation.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub fda: Arc<LabelClient>,
    pub emc: Arc<EmcScraper>,
    pub records: Arc<RecordBuilder>,
}

impl AppState {
    /// Build the state from resolved configuration.
    ///
    /// # Errors
    /// Returns an error if either upstream HTTP client cannot be
    /// constructed.
    pub fn new(cfg: Arc<CoreConfig>) -> anyhow::Result<Self> {
        let fda = Arc::new(LabelClient::new(cfg.fda_base_url())?);
        let emc = Arc::new(EmcScraper::new(cfg.emc_base_url())?);

        Ok(Self {
            cfg,
            fda,
            emc,
            records: Arc::new(RecordBuilder::new()),
        })
    }
}
