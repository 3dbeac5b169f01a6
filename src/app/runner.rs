use std::io::Write;

use tracing::{error, info, warn};

use crate::{
    args::{OutputFormat, TesterArgs},
    domain::RunConfig,
    error::{AppError, AppResult, ValidationError},
    http,
    metrics::RunReport,
};

use super::summary;

/// Runs one load test: build the shared client, fan out, collect.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or a dispatch task
/// vanished without reporting. Per-request transport failures are carried
/// inside the report instead.
pub async fn run_load_test(config: &RunConfig) -> AppResult<RunReport> {
    let client = http::build_client().map_err(AppError::http)?;
    http::dispatch(config, &client).await
}

pub(crate) async fn run_local(args: &TesterArgs) -> AppResult<()> {
    let mut out = std::io::stdout();
    run_with_output(args, &mut out).await
}

/// Validates `args`, runs the load test and renders the report into `out`.
/// A run where every request failed is still rendered, then reported as an
/// error.
pub(crate) async fn run_with_output<W: Write>(args: &TesterArgs, out: &mut W) -> AppResult<()> {
    let config = RunConfig::from_args(args)
        .inspect_err(|err| error!("Invalid run configuration: {}", err))?;

    if args.output_format == OutputFormat::Text {
        writeln!(out, "{}", config.target_url())?;
        out.flush()?;
    }
    let report = run_load_test(&config).await?;

    let stats = report.summary;
    info!(
        "Run finished: {} requests, {} ok, {} failed",
        stats.count, stats.success_count, stats.failure_count
    );
    if report.release_errors > 0 {
        warn!(
            "{} response bodies could not be fully drained",
            report.release_errors
        );
    }

    summary::write_report(out, &config, &report, args.output_format)?;
    out.flush()?;

    if stats.success_count == 0 {
        error!("All {} requests failed.", stats.count);
        return Err(AppError::validation(ValidationError::AllRequestsFailed {
            count: stats.count,
        }));
    }
    Ok(())
}
