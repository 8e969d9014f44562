//! Smoke-check client for the XML Schema editor backend.
//!
//! Issues sequential HTTP GET requests against a running backend and renders
//! a fixed-format diagnostic report of the JSON responses. The binary in
//! `src/main.rs` is a thin clap wrapper around [`checker::SchemaApiChecker`].

pub mod checker;
pub mod client;
pub mod error;
pub mod model;
pub mod report;
pub mod utils;
