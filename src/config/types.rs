use serde::Deserialize;

use crate::args::OutputFormat;

/// Settings read from `loadme.toml` / `loadme.json`.
///
/// Every field is optional; values given on the command line win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub verb: Option<String>,
    #[serde(alias = "connections")]
    pub concurrency: Option<usize>,
    pub output: Option<bool>,
    #[serde(alias = "output_format")]
    pub format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
