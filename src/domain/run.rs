use url::Url;

use crate::args::{HttpVerb, PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

/// Immutable description of one load-test run.
///
/// Only constructed through [`RunConfig::new`], so a value of this type has
/// already passed verb, concurrency and URL validation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    target_url: Url,
    verb: HttpVerb,
    concurrency: PositiveUsize,
    capture_body: bool,
}

impl RunConfig {
    /// Validates raw run inputs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::UnsupportedVerbError`] for a verb the
    /// dispatcher cannot issue, and [`ConfigError`] for a zero concurrency or
    /// a URL that is malformed, hostless, or not http(s).
    pub fn new(url: &str, verb: &str, concurrency: usize, capture_body: bool) -> AppResult<Self> {
        let verb: HttpVerb = verb.parse()?;
        let concurrency = PositiveUsize::try_from(concurrency)
            .map_err(|_err| AppError::config(ConfigError::ConcurrencyZero))?;
        let target_url = parse_target_url(url)?;

        Ok(Self {
            target_url,
            verb,
            concurrency,
            capture_body,
        })
    }

    /// Builds a run from parsed CLI arguments (after config file overlay).
    ///
    /// # Errors
    ///
    /// Same as [`RunConfig::new`].
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        Self::new(&args.url, &args.verb, args.concurrency, args.output)
    }

    #[must_use]
    pub const fn target_url(&self) -> &Url {
        &self.target_url
    }

    #[must_use]
    pub const fn verb(&self) -> HttpVerb {
        self.verb
    }

    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency.get()
    }

    #[must_use]
    pub const fn capture_body(&self) -> bool {
        self.capture_body
    }
}

fn parse_target_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| {
        AppError::config(ConfigError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::config(ConfigError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::config(ConfigError::UrlMissingHost {
            url: raw.to_owned(),
        }));
    }
    Ok(url)
}
