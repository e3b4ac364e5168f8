#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the detention report.
//!
//! Loads the detention record CSV, then prints the year selector, the
//! report for a year (as text or JSON) or the static reference lists, or
//! starts the HTTP API. Without a subcommand an interactive menu is shown.
//!
//! Uses `indicatif-log-bridge` (via [`trace_report_cli_utils::init_logger`])
//! so the download spinner and log lines never fight for the terminal.

mod dataset;
mod interactive;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trace_report_analytics::build_report;
use trace_report_analytics::filter::year_options;
use trace_report_analytics_models::YearSelection;
use trace_report_server::SOURCE_ENV;
use trace_report_server_models::ApiTaxonomy;
use trace_report_source::cache::DatasetCache;

#[derive(Parser)]
#[command(name = "trace_report", about = "Detention record report tool")]
struct Cli {
    /// Dataset location, a URL or a file path (overrides `TRACE_REPORT_SOURCE`)
    #[arg(long, global = true)]
    source: Option<String>,
    /// Embedded dataset id
    #[arg(long, global = true)]
    dataset: Option<String>,
    /// Custom dataset definition TOML file (overrides `--dataset`)
    #[arg(long, global = true)]
    definition: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable admission years
    Years,
    /// Print the report for one year or all years
    Report {
        /// A year such as 2013, or "All Years"
        #[arg(long, default_value = "All Years")]
        year: YearSelection,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the charge, investigator and entity reference lists
    Taxonomy {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP API
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = trace_report_cli_utils::init_logger();
    let cli = Cli::parse();

    let selected = dataset::resolve(
        cli.source.as_deref(),
        cli.dataset.as_deref(),
        cli.definition.as_deref(),
        std::env::var(SOURCE_ENV).ok(),
    )?;

    let Some(command) = cli.command else {
        return interactive::run(&selected, &multi).await;
    };

    let cache = DatasetCache::new();

    match command {
        Commands::Years => {
            let table = selected.load(&cache, &multi).await?;
            print!("{}", render::years(&year_options(&table)));
        }
        Commands::Report { year, json } => {
            let table = selected.load(&cache, &multi).await?;
            let report = build_report(&table, year);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report(&report));
            }
        }
        Commands::Taxonomy { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ApiTaxonomy::current())?);
            } else {
                print!("{}", render::taxonomy());
            }
        }
        Commands::Serve => {
            let state = selected.app_state();
            // actix-web brings its own runtime; run it off the tokio worker
            // to avoid nesting runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(trace_report_server::serve(state))
            })
            .await??;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_year_parses_selection() {
        let cli = Cli::try_parse_from(["trace_report", "report", "--year", "2013", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Report {
                year: YearSelection::Year(2013),
                json: true
            })
        ));
    }

    #[test]
    fn report_defaults_to_all_years() {
        let cli = Cli::try_parse_from(["trace_report", "report"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Report {
                year: YearSelection::AllYears,
                json: false
            })
        ));
    }

    #[test]
    fn invalid_year_is_a_usage_error() {
        assert!(Cli::try_parse_from(["trace_report", "report", "--year", "someday"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["trace_report", "years", "--source", "data.csv"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some("data.csv"));
    }
}
