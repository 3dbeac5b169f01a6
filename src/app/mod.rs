mod runner;
pub(crate) mod summary;

pub use runner::run_load_test;
pub(crate) use runner::run_local;
