use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::TesterArgs;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Options passed explicitly on the command line are left untouched.
pub fn apply_config(args: &mut TesterArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.as_ref()
    {
        args.url.clone_from(url);
    }

    if !is_cli(matches, "verb")
        && let Some(verb) = config.verb.as_ref()
    {
        args.verb.clone_from(verb);
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output
    {
        args.output = output;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && !is_env(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn is_env(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::EnvVariable)
}
