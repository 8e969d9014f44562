//! # Schema API Check
//!
//! A CLI smoke check for the XML Schema editor backend. Issues sequential
//! GET requests against a running backend, prints a human-readable report
//! of each response, and exits non-zero if any check failed.
//!
//! ## Usage
//!
//! Check the default local backend:
//! ```bash
//! schema_api_check
//! ```
//!
//! Check a different instance and include the XML document endpoints:
//! ```bash
//! schema_api_check --base-url http://staging:8080 --with-xml
//! ```

use anyhow::Result;
use clap::Parser;
use schema_api_check::checker::{CheckPlan, SchemaApiChecker};
use schema_api_check::client::SchemaApiClient;
use schema_api_check::utils::logging::init_logging;
use std::process::ExitCode;
use url::Url;

/// CLI smoke check for the XML Schema editor backend API
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Smoke-check the XML Schema editor backend API",
    long_about = "Issues sequential GET requests against a running backend, prints a human-readable report of each response, and exits non-zero if any check failed. With no arguments it checks the schema health and default schema endpoints on http://localhost:8080."
)]
struct Cli {
    /// Base URL of the backend under test
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: Url,

    /// Also check /api/schema/load with this schema path
    #[arg(long)]
    schema_path: Option<String>,

    /// Also check the XML document service endpoints
    #[arg(long)]
    with_xml: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "warn" };
    init_logging(log_level, false)?;

    let client = SchemaApiClient::new(cli.base_url);
    let plan = CheckPlan {
        schema_path: cli.schema_path,
        with_xml: cli.with_xml,
    };

    let outcome = SchemaApiChecker::new(client, plan).run().await;
    print!("{}", outcome.report);

    Ok(if outcome.healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
