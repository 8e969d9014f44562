//! Sequential execution of the configured checks.
//!
//! The whole sequence runs inside one error boundary: a connection failure
//! (or any other unexpected error) in an early step aborts the later steps
//! and is rendered into the report instead of being returned to the caller.

use crate::client::{RawResponse, SchemaApiClient};
use crate::error::CheckError;
use crate::model::{ApiResponse, DocumentList, SchemaInfo};
use crate::report;
use reqwest::StatusCode;
use std::fmt::Write;
use tracing::{info, warn};

/// Which checks a run performs beyond the two core ones.
#[derive(Debug, Clone, Default)]
pub struct CheckPlan {
    /// Schema path to exercise `/api/schema/load` with.
    pub schema_path: Option<String>,
    /// Whether to also check the XML document service endpoints.
    pub with_xml: bool,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The rendered report, ready for stdout.
    pub report: String,
    /// False if any check failed: connection failure, boundary error,
    /// non-200 status, or an application-level `success: false`.
    pub healthy: bool,
}

pub struct SchemaApiChecker {
    client: SchemaApiClient,
    plan: CheckPlan,
}

impl SchemaApiChecker {
    pub fn new(client: SchemaApiClient, plan: CheckPlan) -> Self {
        Self { client, plan }
    }

    /// Runs every configured check in order. Failures are rendered into the
    /// report; this never returns an error.
    pub async fn run(&self) -> CheckOutcome {
        let mut out = String::new();
        let _ = writeln!(out, "{}", report::HEADER);
        let _ = writeln!(out, "{}", report::RULE);

        let mut healthy = true;
        if let Err(error) = self.run_sequence(&mut out, &mut healthy).await {
            healthy = false;
            warn!(%error, "check sequence aborted");
            match &error {
                CheckError::Connect { url, .. } => report::connection_error(&mut out, url),
                other => report::generic_error(&mut out, other),
            }
        }

        info!(healthy, "check run finished");
        CheckOutcome {
            report: out,
            healthy,
        }
    }

    async fn run_sequence(&self, out: &mut String, healthy: &mut bool) -> Result<(), CheckError> {
        let mut step = 0;

        report::step_heading(out, next(&mut step), "health endpoint");
        let raw = self.client.schema_health().await?;
        health_step(out, healthy, raw)?;
        let _ = writeln!(out);

        report::step_heading(out, next(&mut step), "default schema endpoint");
        let raw = self.client.default_schema().await?;
        schema_step(out, healthy, raw)?;

        if let Some(path) = &self.plan.schema_path {
            let _ = writeln!(out);
            report::step_heading(out, next(&mut step), "schema load endpoint");
            let raw = self.client.load_schema(path).await?;
            schema_step(out, healthy, raw)?;
        }

        if self.plan.with_xml {
            let _ = writeln!(out);
            report::step_heading(out, next(&mut step), "XML service health endpoint");
            let raw = self.client.xml_health().await?;
            health_step(out, healthy, raw)?;

            let _ = writeln!(out);
            report::step_heading(out, next(&mut step), "document list endpoint");
            let raw = self.client.list_documents(0, 10).await?;
            documents_step(out, healthy, raw)?;
        }

        Ok(())
    }
}

fn next(step: &mut u32) -> u32 {
    *step += 1;
    *step
}

/// Health endpoints print the status and the decoded body with no
/// structural validation.
fn health_step(out: &mut String, healthy: &mut bool, raw: RawResponse) -> Result<(), CheckError> {
    report::status_line(out, raw.status);
    if raw.status != StatusCode::OK {
        *healthy = false;
        warn!(status = %raw.status, "health endpoint returned non-200");
    }
    let body = raw.json()?;
    report::json_body_line(out, &body);
    Ok(())
}

fn schema_step(out: &mut String, healthy: &mut bool, raw: RawResponse) -> Result<(), CheckError> {
    report::status_line(out, raw.status);
    if raw.status != StatusCode::OK {
        *healthy = false;
        report::http_error(out, raw.status, &raw.body);
        return Ok(());
    }

    let value = raw.json()?;
    let envelope = ApiResponse::<SchemaInfo>::from_value(&value)?;
    if !envelope.success {
        *healthy = false;
    }
    report::schema_report(out, &envelope, &value)
}

fn documents_step(out: &mut String, healthy: &mut bool, raw: RawResponse) -> Result<(), CheckError> {
    report::status_line(out, raw.status);
    if raw.status != StatusCode::OK {
        *healthy = false;
        report::http_error(out, raw.status, &raw.body);
        return Ok(());
    }

    let value = raw.json()?;
    let envelope = ApiResponse::<DocumentList>::from_value(&value)?;
    if !envelope.success {
        *healthy = false;
    }
    report::document_report(out, &envelope)
}
