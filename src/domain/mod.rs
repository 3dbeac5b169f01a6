//! Validated run inputs shared by the dispatcher and the summary output.
mod run;

pub use run::RunConfig;
