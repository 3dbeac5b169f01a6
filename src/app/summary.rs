use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::domain::RunConfig;
use crate::error::AppResult;
use crate::metrics::RunReport;

const ABSENT: &str = "n/a";

#[derive(Debug, Serialize)]
struct JsonSummary<'report> {
    url: &'report str,
    verb: &'static str,
    concurrency: usize,
    count: usize,
    success_count: usize,
    failure_count: usize,
    min_us: Option<u64>,
    max_us: Option<u64>,
    mean_us: Option<u64>,
    errors: &'report [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bodies: Vec<String>,
}

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    config: &RunConfig,
    report: &RunReport,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, config, report),
    }
}

/// The target URL is printed by the runner before dispatch, not here.
fn write_text<W: Write>(out: &mut W, report: &RunReport) -> AppResult<()> {
    let summary = &report.summary;
    for body in &report.bodies {
        writeln!(out, "{}", String::from_utf8_lossy(body))?;
    }
    writeln!(
        out,
        "Requests: {} (ok: {}, failed: {})",
        summary.count, summary.success_count, summary.failure_count
    )?;
    writeln!(out, "Low: {}", format_latency(summary.min))?;
    writeln!(out, "High: {}", format_latency(summary.max))?;
    writeln!(out, "Avg: {}", format_latency(summary.mean_of_successes))?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, config: &RunConfig, report: &RunReport) -> AppResult<()> {
    let summary = &report.summary;
    let payload = JsonSummary {
        url: config.target_url().as_str(),
        verb: config.verb().as_str(),
        concurrency: config.concurrency(),
        count: summary.count,
        success_count: summary.success_count,
        failure_count: summary.failure_count,
        min_us: summary.min.map(duration_micros),
        max_us: summary.max.map(duration_micros),
        mean_us: summary.mean_of_successes.map(duration_micros),
        errors: &report.errors,
        bodies: report
            .bodies
            .iter()
            .map(|body| String::from_utf8_lossy(body).into_owned())
            .collect(),
    };
    serde_json::to_writer(&mut *out, &payload)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn format_latency(latency: Option<Duration>) -> String {
    latency.map_or_else(|| ABSENT.to_owned(), |value| format!("{:?}", value))
}

fn duration_micros(value: Duration) -> u64 {
    u64::try_from(value.as_micros()).unwrap_or(u64::MAX)
}
