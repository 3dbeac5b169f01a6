//! Core library for the `loadme` CLI.
//!
//! A run fans out a fixed number of HTTP requests at once, measures the
//! latency of each up to the response headers, and reduces the outcomes into
//! low/high/average statistics over the successful requests. The
//! [`app::run_load_test`] function is the library entry point; the binary
//! adds argument parsing, config files and printing around it.
pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
