use tokio::sync::mpsc;
use tracing::debug;

use crate::error::MetricsError;

use super::{Aggregator, RequestOutcome, RunReport};

/// Drains the outcome channel until every sender is gone, then summarizes.
///
/// The receiver is the single consumer for all dispatch tasks. Bodies and
/// error details are moved out of each outcome before it is dropped.
///
/// # Errors
///
/// Returns [`MetricsError::IncompleteOutcomes`] if the channel closes before
/// `expected` outcomes arrived, or if more than `expected` arrive.
pub async fn collect_outcomes(
    mut outcome_rx: mpsc::Receiver<RequestOutcome>,
    expected: usize,
) -> Result<RunReport, MetricsError> {
    let mut aggregator = Aggregator::new();
    let mut bodies = Vec::new();
    let mut errors = Vec::new();
    let mut release_errors: usize = 0;

    while let Some(outcome) = outcome_rx.recv().await {
        aggregator.record(&outcome);
        debug!(
            "Outcome {}/{}: success={} latency={:?}",
            aggregator.received(),
            expected,
            outcome.success,
            outcome.latency
        );
        if outcome.release_error.is_some() {
            release_errors = release_errors.saturating_add(1);
        }
        if let Some(detail) = outcome.error_detail {
            errors.push(detail);
        }
        if let Some(body) = outcome.body {
            bodies.push(body);
        }
    }

    let summary = aggregator.finish(expected)?;
    Ok(RunReport {
        summary,
        bodies,
        errors,
        release_errors,
    })
}
