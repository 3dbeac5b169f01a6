use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Expected {expected} request outcomes but received {received}.")]
    IncompleteOutcomes { expected: usize, received: usize },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
