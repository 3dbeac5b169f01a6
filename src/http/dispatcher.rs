use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::domain::RunConfig;
use crate::error::AppResult;
use crate::metrics::{RequestOutcome, RunReport, collect_outcomes};

use super::execution::execute_request;

/// Fires `concurrency` requests at once and waits for every outcome.
///
/// Each request runs on its own task and reports through a bounded channel
/// to a single collector. A failing request never cancels its siblings.
///
/// # Errors
///
/// Returns an error only when a dispatch task disappears without reporting,
/// which surfaces as an incomplete outcome set.
pub async fn dispatch(config: &RunConfig, client: &Client) -> AppResult<RunReport> {
    let concurrency = config.concurrency();
    let (outcome_tx, outcome_rx) = mpsc::channel::<RequestOutcome>(concurrency);
    let collector = tokio::spawn(collect_outcomes(outcome_rx, concurrency));

    info!(
        "Dispatching {} concurrent {} requests to {}",
        concurrency,
        config.verb(),
        config.target_url()
    );

    let mut handles = Vec::with_capacity(concurrency);
    for request_index in 0..concurrency {
        let outcome_tx = outcome_tx.clone();
        let client = client.clone();
        let url = config.target_url().clone();
        let verb = config.verb();
        let capture_body = config.capture_body();

        handles.push(tokio::spawn(async move {
            let outcome = execute_request(&client, verb, &url, capture_body).await;
            if outcome_tx.send(outcome).await.is_err() {
                warn!(
                    "Outcome collector closed before request {} reported",
                    request_index
                );
            }
        }));
    }
    drop(outcome_tx);

    for handle in handles {
        if let Err(err) = handle.await {
            error!("Dispatch task failed: {}", err);
        }
    }

    let report = collector.await??;
    Ok(report)
}
