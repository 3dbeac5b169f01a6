use thiserror::Error;

/// Raised when the requested HTTP verb has no dispatcher support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported HTTP verb '{verb}'. Supported verbs: {supported}.")]
pub struct UnsupportedVerbError {
    pub verb: String,
    pub supported: &'static str,
}
