use clap::Parser;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_URL};
use super::parsers::parse_bool_env;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-concurrency async HTTP load tester - fans out N requests at once and reports low/high/average latency."
)]
pub struct TesterArgs {
    /// Target URL for the load test
    #[arg(long, short, default_value = DEFAULT_URL)]
    pub url: String,

    /// HTTP verb to use (currently only `get`)
    #[arg(long, short = 'X', default_value = "get")]
    pub verb: String,

    /// Number of requests fired at once
    #[arg(long, short = 'c', default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Print captured response bodies
    #[arg(long, short = 'o')]
    pub output: bool,

    /// Summary format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./loadme.toml or ./loadme.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADME_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
