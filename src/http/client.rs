use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Builds the client shared by every request in a run.
///
/// No request timeout is configured; each request runs until the transport
/// either answers or fails.
///
/// # Errors
///
/// Returns [`HttpError::BuildClient`] when the TLS backend or resolver
/// cannot be initialized.
pub fn build_client() -> Result<Client, HttpError> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| HttpError::BuildClient { source: err })
}
