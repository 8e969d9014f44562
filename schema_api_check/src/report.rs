//! Rendering of the fixed console report.
//!
//! The layout is a scrape contract: numbered step headings, 3-space detail
//! indentation, 5-space `- ` bullets for nested lists, and a final 2-space
//! pretty-printed dump of the schema response. Booleans render capitalized
//! (`True`/`False`) because downstream consumers match on those tokens.

use crate::error::{CheckError, Result};
use crate::model::{ApiResponse, DocumentList, SchemaInfo};
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::Write;

pub const HEADER: &str = "Testing XML Schema API...";
pub const RULE: &str = "==================================================";

/// How many nested children/attributes/documents a listing shows.
const LIST_LIMIT: usize = 3;

fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub fn step_heading(out: &mut String, step: u32, title: &str) {
    let _ = writeln!(out, "{step}. Testing {title}...");
}

pub fn status_line(out: &mut String, status: StatusCode) {
    let _ = writeln!(out, "   Status: {}", status.as_u16());
}

/// Compact JSON body line, used by the health checks.
pub fn json_body_line(out: &mut String, body: &Value) {
    let _ = writeln!(out, "   Response: {body}");
}

/// Non-200 outcome: status-derived error plus the raw, undecoded body.
pub fn http_error(out: &mut String, status: StatusCode, body: &str) {
    let _ = writeln!(out, "   Error: HTTP {}", status.as_u16());
    let _ = writeln!(out, "   Response: {body}");
}

pub fn connection_error(out: &mut String, base_url: &str) {
    let _ = writeln!(out, "   Error: Could not connect to the server.");
    let _ = writeln!(out, "   Make sure the backend is running on {base_url}");
}

pub fn generic_error(out: &mut String, error: &CheckError) {
    let _ = writeln!(out, "   Error: {error}");
}

/// Summary of a schema envelope followed by the full pretty-printed body.
///
/// `raw` is the body as decoded, before the typed view was extracted, so the
/// dump preserves fields the typed model does not know about.
pub fn schema_report(
    out: &mut String,
    envelope: &ApiResponse<SchemaInfo>,
    raw: &Value,
) -> Result<()> {
    let _ = writeln!(out, "   Success: {}", bool_label(envelope.success));
    if !envelope.success {
        let _ = writeln!(out, "   Error: {}", envelope.error_message());
        return Ok(());
    }

    let info = envelope.data.as_ref().ok_or_else(|| {
        CheckError::MalformedResponse("success response is missing the data payload".to_string())
    })?;

    let _ = writeln!(out, "   Target Namespace: {}", info.target_namespace);
    let _ = writeln!(out, "   Element Form Default: {}", info.element_form_default);
    let _ = writeln!(out, "   Number of Elements: {}", info.elements.len());

    if let Some(first) = info.elements.first() {
        let _ = writeln!(out, "   First Element: {}", first.name);
        let _ = writeln!(out, "   Element Type: {}", first.element_type);
        let _ = writeln!(out, "   Min Occurs: {}", first.min_occurs);
        let _ = writeln!(out, "   Max Occurs: {}", first.max_occurs);

        if let Some(children) = first.children.as_deref()
            && !children.is_empty()
        {
            let _ = writeln!(out, "   Children: {}", children.len());
            for child in children.iter().take(LIST_LIMIT) {
                let _ = writeln!(out, "     - {} ({})", child.name, child.element_type);
            }
        }

        if let Some(attributes) = first.attributes.as_deref()
            && !attributes.is_empty()
        {
            let _ = writeln!(out, "   Attributes: {}", attributes.len());
            for attr in attributes.iter().take(LIST_LIMIT) {
                let _ = writeln!(
                    out,
                    "     - {} ({}, {}, required={})",
                    attr.name,
                    attr.attribute_type,
                    attr.usage,
                    bool_label(attr.is_required())
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "   Full JSON Response:");
    let _ = writeln!(out, "{}", serde_json::to_string_pretty(raw)?);
    Ok(())
}

/// Summary of a document-list envelope.
pub fn document_report(out: &mut String, envelope: &ApiResponse<DocumentList>) -> Result<()> {
    let _ = writeln!(out, "   Success: {}", bool_label(envelope.success));
    if !envelope.success {
        let _ = writeln!(out, "   Error: {}", envelope.error_message());
        return Ok(());
    }

    let list = envelope.data.as_ref().ok_or_else(|| {
        CheckError::MalformedResponse("success response is missing the data payload".to_string())
    })?;

    let _ = writeln!(out, "   Total Documents: {}", list.total);
    for doc in list.documents.iter().take(LIST_LIMIT) {
        let _ = writeln!(out, "     - {} (id {})", doc.name, doc.id);
    }
    Ok(())
}
