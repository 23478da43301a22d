//! Drug record schema and construction from openFDA lookups.
//!
//! A [`DrugRecord`] is the fixed result shape every endpoint speaks:
//! single search, batch query and CSV export all consume or produce it.
//! Construction copies label fields directly; the only derived field is
//! `indications`, produced by the extraction heuristic.

use openfda::LabelHit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::indications::IndicationExtractor;

/// Sentinel stored when a label document exists but carries no
/// INDICATIONS AND USAGE text.
pub const NOT_FOUND: &str = "Not found";

/// Sentinel stored when no label document matched the queried name.
pub const NO_DATA_FOUND: &str = "No data found";

/// Placeholder for an unavailable dataset timestamp.
pub const TIMESTAMP_UNAVAILABLE: &str = "N/A";

/// One queried drug, resolved against the label dataset.
///
/// Array-valued fields mirror the upstream harmonisation arrays; scalar
/// fields take the first array element. `approval_date` is sourced from the
/// original packager product NDC, a quirk preserved from the upstream field
/// mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DrugRecord {
    /// The name as queried.
    pub drug: String,
    /// Label dataset timestamp, or "N/A".
    pub last_updated: String,
    /// Raw INDICATIONS AND USAGE text, or a sentinel.
    pub indications_and_usage: String,
    /// Extracted indication phrases; `None` when extraction found nothing.
    #[serde(default)]
    pub indications: Option<Vec<String>>,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub brand_names: Option<Vec<String>>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub approval_date: Option<String>,
    #[serde(default)]
    pub route: Option<Vec<String>>,
    #[serde(default)]
    pub dosage_form: Option<Vec<String>>,
    #[serde(default)]
    pub strength: Option<Vec<String>>,
    #[serde(default)]
    pub ndc: Option<Vec<String>>,
    #[serde(default)]
    pub application_number: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
}

impl DrugRecord {
    /// Whether the lookup produced actual label data.
    ///
    /// False for both sentinels; drives the batch `total_found` count.
    pub fn has_label_data(&self) -> bool {
        self.indications_and_usage != NOT_FOUND && self.indications_and_usage != NO_DATA_FOUND
    }
}

/// Builds [`DrugRecord`]s from lookup outcomes.
///
/// Owns the indication extractor so record construction stays a pure
/// function of the lookup result.
#[derive(Clone, Debug, Default)]
pub struct RecordBuilder {
    extractor: IndicationExtractor,
}

impl RecordBuilder {
    /// Creates a new `RecordBuilder` with the default extractor.
    pub fn new() -> Self {
        Self {
            extractor: IndicationExtractor::new(),
        }
    }

    /// Build a record from a matched label document.
    ///
    /// Missing label text becomes the "Not found" sentinel; extraction runs
    /// over whatever text is stored, and an empty extraction is recorded as
    /// `indications: None`.
    pub fn from_hit(&self, drug_name: &str, hit: LabelHit) -> DrugRecord {
        let indications_and_usage = hit.indications_and_usage.unwrap_or_else(|| {
            tracing::debug!("label for {} has no indications text", drug_name);
            NOT_FOUND.to_string()
        });

        let extracted = self.extractor.extract(&indications_and_usage);
        let indications = if extracted.is_empty() {
            None
        } else {
            Some(extracted)
        };

        let fields = hit.openfda;
        DrugRecord {
            drug: drug_name.to_string(),
            last_updated: hit.last_updated,
            indications_and_usage,
            indications,
            generic_name: fields.generic_name.into_iter().next(),
            brand_names: Some(fields.brand_name),
            manufacturer: fields.manufacturer_name.into_iter().next(),
            approval_date: fields.original_packager_product_ndc.into_iter().next(),
            route: Some(fields.route),
            dosage_form: Some(fields.dosage_form),
            strength: Some(fields.strength),
            ndc: Some(fields.product_ndc),
            application_number: fields.application_number.into_iter().next(),
            product_type: fields.product_type.into_iter().next(),
        }
    }

    /// Build the record for a name that matched no label document.
    pub fn not_found(&self, drug_name: &str) -> DrugRecord {
        DrugRecord {
            drug: drug_name.to_string(),
            last_updated: TIMESTAMP_UNAVAILABLE.to_string(),
            indications_and_usage: NO_DATA_FOUND.to_string(),
            indications: None,
            generic_name: None,
            brand_names: None,
            manufacturer: None,
            approval_date: None,
            route: None,
            dosage_form: None,
            strength: None,
            ndc: None,
            application_number: None,
            product_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openfda::OpenFdaFields;

    fn sample_hit() -> LabelHit {
        LabelHit {
            last_updated: "2024-11-02".to_string(),
            indications_and_usage: Some(
                "1 INDICATIONS AND USAGE RISPERDAL is indicated for the treatment of schizophrenia in adults."
                    .to_string(),
            ),
            openfda: OpenFdaFields {
                generic_name: vec!["RISPERIDONE".to_string()],
                brand_name: vec!["RISPERDAL".to_string(), "RISPERDAL M-TAB".to_string()],
                manufacturer_name: vec!["Janssen Pharmaceuticals, Inc.".to_string()],
                route: vec!["ORAL".to_string()],
                dosage_form: vec!["TABLET".to_string()],
                strength: vec!["1 mg/1".to_string()],
                product_ndc: vec!["50458-0300".to_string()],
                application_number: vec!["NDA020272".to_string()],
                product_type: vec!["HUMAN PRESCRIPTION DRUG".to_string()],
                original_packager_product_ndc: vec!["50458-0301".to_string()],
            },
        }
    }

    #[test]
    fn test_from_hit_copies_fields_and_extracts_indications() {
        let record = RecordBuilder::new().from_hit("risperidone", sample_hit());

        assert_eq!(record.drug, "risperidone");
        assert_eq!(record.last_updated, "2024-11-02");
        assert_eq!(record.generic_name.as_deref(), Some("RISPERIDONE"));
        assert_eq!(
            record.brand_names,
            Some(vec!["RISPERDAL".to_string(), "RISPERDAL M-TAB".to_string()])
        );
        assert_eq!(
            record.manufacturer.as_deref(),
            Some("Janssen Pharmaceuticals, Inc.")
        );
        assert_eq!(record.approval_date.as_deref(), Some("50458-0301"));
        assert_eq!(record.application_number.as_deref(), Some("NDA020272"));
        assert_eq!(
            record.indications,
            Some(vec![
                "RISPERDAL is indicated for the treatment of schizophrenia in adults.".to_string()
            ])
        );
        assert!(record.has_label_data());
    }

    #[test]
    fn test_from_hit_without_label_text_stores_sentinel() {
        let mut hit = sample_hit();
        hit.indications_and_usage = None;

        let record = RecordBuilder::new().from_hit("risperidone", hit);
        assert_eq!(record.indications_and_usage, NOT_FOUND);
        assert!(record.indications.is_none());
        assert!(!record.has_label_data());
    }

    #[test]
    fn test_not_found_record_shape() {
        let record = RecordBuilder::new().not_found("zyprexa");
        assert_eq!(record.drug, "zyprexa");
        assert_eq!(record.last_updated, TIMESTAMP_UNAVAILABLE);
        assert_eq!(record.indications_and_usage, NO_DATA_FOUND);
        assert!(record.indications.is_none());
        assert!(record.generic_name.is_none());
        assert!(!record.has_label_data());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = RecordBuilder::new().from_hit("risperidone", sample_hit());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DrugRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialises_with_optional_fields_absent() {
        let json = r#"{
            "drug": "aspirin",
            "last_updated": "N/A",
            "indications_and_usage": "No data found"
        }"#;
        let record: DrugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.drug, "aspirin");
        assert!(record.indications.is_none());
        assert!(record.brand_names.is_none());
    }
}
