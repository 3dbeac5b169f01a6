pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadme/", env!("CARGO_PKG_VERSION"));

/// Target used when neither the CLI nor a config file names one.
pub(crate) const DEFAULT_URL: &str = "http://google.com";

/// Requests fired at once when no concurrency is configured.
pub(crate) const DEFAULT_CONCURRENCY: usize = 10;
