use std::time::Duration;

use crate::error::MetricsError;

use super::{RequestOutcome, RunSummary};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Running min/max/sum over successful outcomes.
///
/// Every update is commutative, so the final summary does not depend on the
/// order outcomes are recorded in.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    received: usize,
    success_count: usize,
    failure_count: usize,
    min: Option<Duration>,
    max: Option<Duration>,
    latency_sum_ns: u128,
}

impl Aggregator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            received: 0,
            success_count: 0,
            failure_count: 0,
            min: None,
            max: None,
            latency_sum_ns: 0,
        }
    }

    #[must_use]
    pub const fn received(&self) -> usize {
        self.received
    }

    pub fn record(&mut self, outcome: &RequestOutcome) {
        self.received = self.received.saturating_add(1);
        if !outcome.success {
            self.failure_count = self.failure_count.saturating_add(1);
            return;
        }

        let latency = outcome.latency;
        self.success_count = self.success_count.saturating_add(1);
        self.latency_sum_ns = self.latency_sum_ns.saturating_add(latency.as_nanos());
        self.min = Some(self.min.map_or(latency, |min| min.min(latency)));
        self.max = Some(self.max.map_or(latency, |max| max.max(latency)));
    }

    /// Produces the summary once every dispatched request has reported.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::IncompleteOutcomes`] when the number of
    /// recorded outcomes differs from `expected`.
    pub fn finish(self, expected: usize) -> Result<RunSummary, MetricsError> {
        if self.received != expected {
            return Err(MetricsError::IncompleteOutcomes {
                expected,
                received: self.received,
            });
        }

        let mean_of_successes = mean_duration(self.latency_sum_ns, self.success_count);
        Ok(RunSummary {
            count: self.received,
            success_count: self.success_count,
            failure_count: self.failure_count,
            min: self.min,
            max: self.max,
            mean_of_successes,
        })
    }
}

/// Reduces a complete outcome set into a [`RunSummary`].
///
/// # Errors
///
/// Returns [`MetricsError::IncompleteOutcomes`] when the set does not hold
/// exactly `expected` outcomes.
pub fn summarize<'outcome, I>(outcomes: I, expected: usize) -> Result<RunSummary, MetricsError>
where
    I: IntoIterator<Item = &'outcome RequestOutcome>,
{
    let mut aggregator = Aggregator::new();
    for outcome in outcomes {
        aggregator.record(outcome);
    }
    aggregator.finish(expected)
}

fn mean_duration(sum_ns: u128, count: usize) -> Option<Duration> {
    let count = u128::try_from(count).ok().filter(|count| *count > 0)?;
    let mean_ns = sum_ns.checked_div(count)?;
    let secs = mean_ns.checked_div(NANOS_PER_SEC)?;
    let nanos = mean_ns.checked_rem(NANOS_PER_SEC)?;
    Some(Duration::new(
        u64::try_from(secs).unwrap_or(u64::MAX),
        u32::try_from(nanos).unwrap_or(0),
    ))
}
