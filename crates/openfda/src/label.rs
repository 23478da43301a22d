//! openFDA label wire models and translation helpers.
//!
//! Responsibilities:
//! - Define a tolerant wire model for the drug label JSON envelope
//! - Provide translation from the wire envelope to a flat domain-level hit
//!
//! Notes:
//! - Every upstream field is optional in practice; the wire model defaults
//!   missing arrays to empty rather than failing deserialisation
//! - `indications_and_usage` arrives as an array of section texts; only the
//!   first element is meaningful for this service

use serde::Deserialize;

// ============================================================================
// Wire models
// ============================================================================

/// Top-level response envelope from the drug label endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct LabelEnvelope {
    #[serde(default)]
    pub meta: Option<LabelMeta>,
    #[serde(default)]
    pub results: Vec<LabelEntry>,
}

/// Envelope metadata; only the dataset timestamp is used.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LabelMeta {
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// A single label document inside the envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LabelEntry {
    #[serde(default)]
    pub indications_and_usage: Option<Vec<String>>,
    #[serde(default)]
    pub openfda: OpenFdaFields,
}

/// The `openfda` harmonisation sub-object carried on each label entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct OpenFdaFields {
    #[serde(default)]
    pub generic_name: Vec<String>,
    #[serde(default)]
    pub brand_name: Vec<String>,
    #[serde(default)]
    pub manufacturer_name: Vec<String>,
    #[serde(default)]
    pub route: Vec<String>,
    #[serde(default)]
    pub dosage_form: Vec<String>,
    #[serde(default)]
    pub strength: Vec<String>,
    #[serde(default)]
    pub product_ndc: Vec<String>,
    #[serde(default)]
    pub application_number: Vec<String>,
    #[serde(default)]
    pub product_type: Vec<String>,
    #[serde(default)]
    pub original_packager_product_ndc: Vec<String>,
}

// ============================================================================
// Domain-level types
// ============================================================================

/// Outcome of a label lookup, with "no label exists" kept distinct from
/// transport failures (those surface as [`crate::OpenFdaError`]).
#[derive(Clone, Debug)]
pub enum LabelLookup {
    /// A label document matched the queried generic name.
    Found(LabelHit),
    /// The query succeeded but matched no label document.
    NotFound,
}

/// Flat domain-level carrier for a matched label document.
#[derive(Clone, Debug)]
pub struct LabelHit {
    /// Dataset timestamp from the envelope metadata; `"N/A"` when absent.
    pub last_updated: String,

    /// First `indications_and_usage` section text, when present and
    /// non-empty.
    pub indications_and_usage: Option<String>,

    /// Harmonised product fields.
    pub openfda: OpenFdaFields,
}

impl LabelHit {
    /// Translate the wire envelope metadata and first result entry into a
    /// flat hit.
    pub(crate) fn from_wire(meta: Option<LabelMeta>, entry: LabelEntry) -> Self {
        let last_updated = meta
            .and_then(|m| m.last_updated)
            .unwrap_or_else(|| "N/A".to_string());

        let indications_and_usage = entry
            .indications_and_usage
            .and_then(|sections| sections.into_iter().next())
            .filter(|text| !text.is_empty());

        Self {
            last_updated,
            indications_and_usage,
            openfda: entry.openfda,
        }
    }
}
