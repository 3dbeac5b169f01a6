//! HTTP request dispatch.
mod client;
mod dispatcher;
mod execution;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_client;
pub use dispatcher::dispatch;
