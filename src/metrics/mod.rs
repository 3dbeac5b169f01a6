//! Request outcome types, the order-independent latency reduction, and the
//! channel consumer that feeds it.
mod aggregator;
mod collector;
mod types;


pub use aggregator::{Aggregator, summarize};
pub use collector::collect_outcomes;
pub use types::{RequestOutcome, RunReport, RunSummary};
