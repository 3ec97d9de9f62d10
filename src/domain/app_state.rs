use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::entities::{AccountingProfile, ProcessCostProfile, TradeFootprint};

/// Full input snapshot handed to the engine and kept by the state store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeState {
    #[serde(alias = "panel1")]
    pub footprint: TradeFootprint,
    #[serde(alias = "panel2")]
    pub process: ProcessCostProfile,
    #[serde(alias = "panel3")]
    pub accounting: AccountingProfile,
}

#[derive(Debug, Error)]
pub enum FieldUpdateError {
    #[error("field path must look like <record>.<field>, got `{0}`")]
    MalformedPath(String),
    #[error("unknown record `{0}` (expected footprint, process or accounting)")]
    UnknownRecord(String),
    #[error("unknown field `{field}` on `{record}`")]
    UnknownField { record: String, field: String },
    #[error("value rejected for `{path}`: {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TradeState {
    /// Updates a single form field, addressed as `<record>.<field>` using the
    /// serialized field names (`footprint.shipmentsPerYear`). The web form's
    /// `panel1`..`panel3` record names are accepted too.
    pub fn set_field(&mut self, path: &str, value: Value) -> Result<(), FieldUpdateError> {
        let (record, field) = path
            .split_once('.')
            .filter(|(record, field)| !record.is_empty() && !field.is_empty())
            .ok_or_else(|| FieldUpdateError::MalformedPath(path.to_string()))?;

        let record_key = canonical_record(record)
            .ok_or_else(|| FieldUpdateError::UnknownRecord(record.to_string()))?;

        let invalid = |source| FieldUpdateError::InvalidValue {
            path: path.to_string(),
            source,
        };

        let mut snapshot = serde_json::to_value(&*self).map_err(invalid)?;
        let fields = snapshot
            .get_mut(record_key)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| FieldUpdateError::UnknownRecord(record.to_string()))?;

        let field_key = resolve_field(fields, field).ok_or_else(|| {
            FieldUpdateError::UnknownField {
                record: record_key.to_string(),
                field: field.to_string(),
            }
        })?;
        fields.insert(field_key, value);

        *self = serde_json::from_value(snapshot).map_err(invalid)?;
        Ok(())
    }
}

fn canonical_record(name: &str) -> Option<&'static str> {
    match name {
        "footprint" | "panel1" => Some("footprint"),
        "process" | "panel2" => Some("process"),
        "accounting" | "panel3" => Some("accounting"),
        _ => None,
    }
}

fn resolve_field(fields: &Map<String, Value>, field: &str) -> Option<String> {
    if fields.contains_key(field) {
        return Some(field.to_string());
    }
    if field == "customsComplianceCostPerShipment" {
        return Some("customsAndComplianceCostPerShipment".to_string());
    }
    // Tolerate case slips such as `tradeCogsSharePercent`.
    fields
        .keys()
        .find(|key| key.eq_ignore_ascii_case(field))
        .cloned()
}
