use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::error::{UnsupportedVerbError, ValidationError};

/// HTTP verbs the dispatcher knows how to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
}

impl HttpVerb {
    pub const SUPPORTED: &'static str = "get";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
        }
    }

    #[must_use]
    pub const fn method(self) -> reqwest::Method {
        match self {
            HttpVerb::Get => reqwest::Method::GET,
        }
    }
}

impl std::str::FromStr for HttpVerb {
    type Err = UnsupportedVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            _ => Err(UnsupportedVerbError {
                verb: s.to_owned(),
                supported: HttpVerb::SUPPORTED,
            }),
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}
