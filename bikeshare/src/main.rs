//! # bikeshare
//!
//! A CLI tool for exploring US bike-share trip data.
//!
//! ## Overview
//!
//! bikeshare is built on top of bikesharelib and provides a command-line
//! interface for summarizing a city's trips, optionally narrowed to one month
//! and/or one day of the week.
//!
//! ## Features
//!
//! - **Four reports**: travel times, stations, trip durations and riders
//! - **Filtering**: by month (January to June) and by day of the week
//! - **Raw data pager**: browse the selected trips five rows at a time
//! - **Multiple output formats**: Text (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # Every trip in Chicago
//! bikeshare --city chicago
//!
//! # Mondays in March, with data files in ./data
//! bikeshare -c "new york city" -m march -d monday --data-dir data
//!
//! # Output as JSON
//! bikeshare -c washington --output json
//!
//! # Skip the raw data prompt
//! bikeshare -c chicago --no-raw
//! ```

mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use bikesharelib::{
    analyze, run_pager, DataSource, FilterCriteria, RawDataPager, ReportOptions, Window,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("bikeshare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Descriptive statistics over bike-share trip data")
        .arg(
            Arg::new("city")
                .short('c')
                .long("city")
                .required(true)
                .help("City to analyze: chicago, new york city or washington"),
        )
        .arg(
            Arg::new("month")
                .short('m')
                .long("month")
                .default_value("all")
                .help("Month to filter by (january to june), or all"),
        )
        .arg(
            Arg::new("day")
                .short('d')
                .long("day")
                .default_value("all")
                .help("Day of the week to filter by (monday to sunday), or all"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .default_value(".")
                .help("Directory holding the city CSV files"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Output format"),
        )
        .arg(
            Arg::new("no-raw")
                .long("no-raw")
                .action(ArgAction::SetTrue)
                .help("Skip the raw data prompt"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Get a string argument that has a default value
fn arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let criteria = FilterCriteria::parse(
        arg(matches, "city"),
        arg(matches, "month"),
        arg(matches, "day"),
    )?;
    debug!(%criteria, "parsed filter criteria");

    let data_dir = arg(matches, "data-dir");
    let options = ReportOptions::new(criteria).data_source(DataSource::new(data_dir));
    let analysis = analyze(&options)
        .with_context(|| format!("could not load {} trip data from '{data_dir}'", criteria.city))?;

    // For JSON mode, print the raw report
    if arg(matches, "output") == "json" {
        println!("{}", serde_json::to_string_pretty(&analysis.report)?);
        return Ok(());
    }

    let report = render::render_report(&analysis.report)
        .map_err(|e| anyhow::anyhow!("failed to render report: {e}"))?;
    println!("{report}");

    if matches.get_flag("no-raw") {
        return Ok(());
    }

    let schema = analysis.table.schema();
    let render_window = |window: &Window<'_>| {
        render::render_raw_window(window, schema).map_err(|e| io::Error::other(e.to_string()))
    };
    run_pager(
        RawDataPager::new(analysis.table.rows()),
        io::stdin().lock(),
        io::stdout().lock(),
        render_window,
    )
    .context("raw data pager failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = build_command()
            .try_get_matches_from(["bikeshare", "--city", "chicago"])
            .unwrap();
        assert_eq!(arg(&matches, "month"), "all");
        assert_eq!(arg(&matches, "day"), "all");
        assert_eq!(arg(&matches, "data-dir"), ".");
        assert_eq!(arg(&matches, "output"), "text");
        assert!(!matches.get_flag("no-raw"));
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_city_is_required() {
        assert!(build_command()
            .try_get_matches_from(["bikeshare", "--month", "june"])
            .is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let matches = build_command()
            .try_get_matches_from(["bikeshare", "-c", "washington", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }
}
