//! Typed views of the backend's JSON responses.
//!
//! Bodies are decoded to a `serde_json::Value` first so the raw document can
//! be re-emitted verbatim in the report; the typed structs here are decoded
//! from that value in a second step that turns any shape mismatch into a
//! `MalformedResponse` error rather than a field-access failure. Unknown
//! fields are tolerated and survive in the raw dump.

use crate::error::{CheckError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Uniform envelope the backend wraps every payload in: `success` plus
/// either `data` or `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Typed decode of an already-parsed body.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| CheckError::MalformedResponse(e.to_string()))
    }
}

impl<T> ApiResponse<T> {
    /// The `error` field, or the fixed fallback when the backend omitted it.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

/// Schema description as the backend projects it to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    pub target_namespace: String,
    pub element_form_default: String,
    pub elements: Vec<SchemaElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaElement {
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: String,
    pub min_occurs: Occurs,
    pub max_occurs: Occurs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SchemaElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<SchemaAttribute>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    #[serde(rename = "use")]
    pub usage: String,
}

impl SchemaAttribute {
    /// `use="required"` is the only usage that makes an attribute mandatory.
    pub fn is_required(&self) -> bool {
        self.usage == "required"
    }
}

/// XSD occurrence bound. The backend serializes `minOccurs` as a number and
/// `maxOccurs` as either a number or the string `"unbounded"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Occurs {
    Count(u64),
    Bound(String),
}

impl fmt::Display for Occurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occurs::Count(n) => write!(f, "{n}"),
            Occurs::Bound(s) => f.write_str(s),
        }
    }
}

/// One page of stored XML documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn occurs_accepts_numbers_and_bound_strings() {
        let min: Occurs = serde_json::from_value(json!(1)).unwrap();
        let max: Occurs = serde_json::from_value(json!("unbounded")).unwrap();

        assert_eq!(min.to_string(), "1");
        assert_eq!(max.to_string(), "unbounded");
    }

    #[test]
    fn attribute_is_required_only_for_use_required() {
        let required: SchemaAttribute = serde_json::from_value(json!({
            "name": "location", "type": "xs:string", "use": "required"
        }))
        .unwrap();
        let optional: SchemaAttribute = serde_json::from_value(json!({
            "name": "established", "type": "xs:date", "use": "optional"
        }))
        .unwrap();

        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn envelope_error_message_defaults_when_absent() {
        let with_error: ApiResponse<SchemaInfo> = ApiResponse {
            success: false,
            data: None,
            error: Some("schema not found".to_string()),
        };
        let without_error: ApiResponse<SchemaInfo> = ApiResponse {
            success: false,
            data: None,
            error: None,
        };

        assert_eq!(with_error.error_message(), "schema not found");
        assert_eq!(without_error.error_message(), "Unknown error");
    }

    #[test]
    fn envelope_shape_mismatch_is_a_malformed_response() {
        // `data` present but not a schema object.
        let value = json!({ "success": true, "data": { "targetNamespace": 42 } });

        let result = ApiResponse::<SchemaInfo>::from_value(&value);

        match result {
            Err(CheckError::MalformedResponse(_)) => {}
            other => panic!("expected malformed response, got {other:?}"),
        }
    }

    #[test]
    fn envelope_tolerates_unknown_fields() {
        let value = json!({
            "success": true,
            "data": {
                "targetNamespace": "urn:test",
                "elementFormDefault": "qualified",
                "attributeFormDefault": "unqualified",
                "schemaLocation": "library.xsd",
                "elements": []
            },
            "timestamp": "2025-01-01T00:00:00"
        });

        let envelope = ApiResponse::<SchemaInfo>::from_value(&value).unwrap();
        let info = envelope.data.unwrap();

        assert_eq!(info.target_namespace, "urn:test");
        assert!(info.elements.is_empty());
    }
}
