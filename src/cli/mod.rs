// src/cli/mod.rs
//! Command-line entry point: settings, input, run, output.

pub mod args;

pub use args::Cli;

use crate::config::Config;
use crate::input::{self, InputSource};
use crate::pipeline::{self, GroupRun};
use crate::report::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Resolves settings: defaults, then the config file, then CLI flags.
///
/// # Errors
/// Returns error if the config file is malformed or an explicit one is unreadable.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::new();
            config.load_file(path)?;
            config
        }
        None => Config::load()?,
    };

    if let Some(threshold) = cli.ratio {
        config.threshold = threshold;
    }
    if cli.all {
        config.include_isolated = true;
    }
    if let Some(jobs) = cli.jobs {
        config.jobs = jobs;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.verbose = cli.verbose;
    Ok(config)
}

/// Runs the whole command.
///
/// # Errors
/// Returns error on bad settings or if output cannot be written.
/// Unreadable inputs are reported and skipped.
pub fn handle(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    if config.verbose {
        eprintln!("{}", "🔍 Grouping similar entries...".cyan());
        eprintln!("   Threshold:  {}", config.threshold);
        eprintln!("   Isolated:   {}", enabled_str(config.include_isolated));
        eprintln!("   Format:     {}", config.format);
        eprintln!();
    }

    let outcome = input::read_sources(&InputSource::from_args(&cli.input_paths()));
    for failure in &outcome.failures {
        eprintln!("{} {failure}", "Operation failed:".yellow().bold());
    }

    let run = pipeline::run(&outcome.items, &config)?;
    let rendered = render(&run, config.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if cli.stats {
        eprint!("{}", report::format_stats(&run.stats).dimmed());
    }
    Ok(())
}

/// Renders a finished run in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(run: &GroupRun, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report::format_text(&run.groups),
        OutputFormat::Json => report::format_json(&run.groups)?,
        OutputFormat::Dot => report::format_dot(&run.graph, &run.groups),
    })
}

fn enabled_str(enabled: bool) -> colored::ColoredString {
    if enabled {
        "included".green()
    } else {
        "dropped".dimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["levgroups"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(cli.ratio.is_none());
        assert!(!cli.all);
    }

    #[test]
    fn test_parse_ratio() {
        let cli = Cli::try_parse_from(["levgroups", "--ratio", "65", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.ratio.map(|t| t.value()), Some(65));
        assert_eq!(cli.files.len(), 2);

        let cli = Cli::try_parse_from(["levgroups", "--threshold", "90"]).unwrap();
        assert_eq!(cli.ratio.map(|t| t.value()), Some(90));
    }

    #[test]
    fn test_rejects_bad_ratio() {
        assert!(Cli::try_parse_from(["levgroups", "--ratio", "101"]).is_err());
        assert!(Cli::try_parse_from(["levgroups", "--ratio", "high"]).is_err());
    }

    #[test]
    fn test_files_flag_and_positional() {
        let cli = Cli::try_parse_from(["levgroups", "--files", "a.txt", "b.txt"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(
            cli.input_paths(),
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );

        let cli = Cli::try_parse_from(["levgroups", "c.txt", "--files", "d.txt", "-"]).unwrap();
        assert_eq!(
            cli.input_paths(),
            vec![PathBuf::from("c.txt"), PathBuf::from("d.txt"), PathBuf::from("-")]
        );
    }

    #[test]
    fn test_files_flag_needs_value() {
        assert!(Cli::try_parse_from(["levgroups", "--files"]).is_err());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["levgroups", "--format", "dot", "--all"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Dot));
        assert!(cli.all);
    }
}
