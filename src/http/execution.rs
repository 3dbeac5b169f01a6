use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::{debug, error, warn};

use crate::args::HttpVerb;
use crate::error::HttpError;
use crate::metrics::RequestOutcome;

struct DrainedBody {
    bytes: u64,
    captured: Option<Vec<u8>>,
}

/// Issues one request and turns the result into a [`RequestOutcome`].
///
/// Latency stops at response headers. The body is then drained on its own
/// so the connection is released whatever the status or capture setting.
pub(super) async fn execute_request(
    client: &Client,
    verb: HttpVerb,
    url: &Url,
    capture_body: bool,
) -> RequestOutcome {
    let request = client.request(verb.method(), url.clone());
    let start = Instant::now();
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            let latency = start.elapsed();
            let err = HttpError::Transport { source: err };
            error!("{}", err);
            return RequestOutcome::failure(latency, err.to_string());
        }
    };
    let latency = start.elapsed();
    let status = response.status().as_u16();
    debug!("{} {} -> {} in {:?}", verb, url, status, latency);

    let mut outcome = RequestOutcome::success(latency, status);
    match drain_response_body(response, capture_body).await {
        Ok(drained) => {
            outcome.response_bytes = drained.bytes;
            outcome.body = drained.captured;
        }
        Err(err) => {
            let err = HttpError::BodyRelease { source: err };
            warn!("{}", err);
            outcome.release_error = Some(err.to_string());
        }
    }
    outcome
}

// Takes the response by value: it is dropped when this returns, on the error
// path included.
async fn drain_response_body(
    response: reqwest::Response,
    capture: bool,
) -> Result<DrainedBody, reqwest::Error> {
    let mut captured = capture.then(Vec::new);
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
        if let Some(buffer) = captured.as_mut() {
            buffer.extend_from_slice(&bytes);
        }
    }
    Ok(DrainedBody {
        bytes: total_bytes,
        captured,
    })
}
