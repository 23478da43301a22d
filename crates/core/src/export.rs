//! CSV export of drug record batches.
//!
//! Column set and joins match the download format the frontend expects:
//! list fields are flattened into single cells, extracted indications with
//! `" | "` and the remaining lists with `", "`. Absent values export as
//! empty cells.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::record::DrugRecord;

/// One CSV line; field order defines the column order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Drug")]
    drug: &'a str,
    #[serde(rename = "Last_Updated")]
    last_updated: &'a str,
    #[serde(rename = "Indications_and_Usage")]
    indications_and_usage: &'a str,
    #[serde(rename = "Indications")]
    indications: String,
    #[serde(rename = "Generic_Name")]
    generic_name: &'a str,
    #[serde(rename = "Brand_Names")]
    brand_names: String,
    #[serde(rename = "Manufacturer")]
    manufacturer: &'a str,
    #[serde(rename = "Route")]
    route: String,
    #[serde(rename = "Dosage_Form")]
    dosage_form: String,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a DrugRecord) -> Self {
        Self {
            drug: &record.drug,
            last_updated: &record.last_updated,
            indications_and_usage: &record.indications_and_usage,
            indications: join_list(record.indications.as_deref(), " | "),
            generic_name: record.generic_name.as_deref().unwrap_or(""),
            brand_names: join_list(record.brand_names.as_deref(), ", "),
            manufacturer: record.manufacturer.as_deref().unwrap_or(""),
            route: join_list(record.route.as_deref(), ", "),
            dosage_form: join_list(record.dosage_form.as_deref(), ", "),
        }
    }
}

fn join_list(values: Option<&[String]>, separator: &str) -> String {
    values.map(|v| v.join(separator)).unwrap_or_default()
}

/// Render a batch of records as a CSV document with a header row.
///
/// # Errors
/// Returns `CoreError::InvalidInput` for an empty batch, or a CSV error if
/// serialisation fails.
pub fn render_csv(records: &[DrugRecord]) -> CoreResult<String> {
    if records.is_empty() {
        return Err(CoreError::InvalidInput("no results to export".into()));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer
            .serialize(CsvRow::from_record(record))
            .map_err(CoreError::CsvWrite)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| CoreError::CsvFlush(e.into_error()))?;
    String::from_utf8(buffer).map_err(CoreError::CsvUtf8)
}

/// Default attachment filename, stamped to the second.
pub fn default_filename(now: DateTime<Utc>) -> String {
    format!("FDA_Drug_Results_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
