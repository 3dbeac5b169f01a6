use std::time::Duration;

/// Result of a single dispatched request.
///
/// `latency` covers the span from just before the request is issued until
/// response headers arrive (or the transport fails). Body draining is not
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub latency: Duration,
    pub success: bool,
    pub error_detail: Option<String>,
    pub status: Option<u16>,
    pub response_bytes: u64,
    pub body: Option<Vec<u8>>,
    pub release_error: Option<String>,
}

impl RequestOutcome {
    #[must_use]
    pub const fn success(latency: Duration, status: u16) -> Self {
        Self {
            latency,
            success: true,
            error_detail: None,
            status: Some(status),
            response_bytes: 0,
            body: None,
            release_error: None,
        }
    }

    #[must_use]
    pub const fn failure(latency: Duration, error_detail: String) -> Self {
        Self {
            latency,
            success: false,
            error_detail: Some(error_detail),
            status: None,
            response_bytes: 0,
            body: None,
            release_error: None,
        }
    }
}

/// Aggregate statistics for one run.
///
/// `min`, `max` and `mean_of_successes` are computed over successful
/// outcomes only and are `None` when nothing succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub min: Option<Duration>,
    pub max: Option<Duration>,
    pub mean_of_successes: Option<Duration>,
}

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    /// Captured response bodies, in arrival order. Empty unless capture was on.
    pub bodies: Vec<Vec<u8>>,
    /// Transport error descriptions, in arrival order.
    pub errors: Vec<String>,
    pub release_errors: usize,
}
