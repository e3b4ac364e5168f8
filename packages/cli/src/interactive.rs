//! Menu-driven mode used when no subcommand is given.

use dialoguer::{Confirm, Select};
use indicatif::MultiProgress;
use trace_report_analytics::build_report;
use trace_report_analytics::filter::year_options;
use trace_report_source::cache::DatasetCache;

use crate::dataset::Selected;
use crate::render;

/// Top-level actions in the interactive menu.
enum Action {
    Report,
    Years,
    Taxonomy,
    Serve,
}

impl Action {
    const ALL: &[Self] = &[Self::Report, Self::Years, Self::Taxonomy, Self::Serve];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Report => "View report",
            Self::Years => "List years",
            Self::Taxonomy => "Show charge & entity lists",
            Self::Serve => "Start server",
        }
    }
}

/// Runs the menu loop until the user declines to continue.
///
/// The dataset is loaded at most once per session through `cache`.
///
/// # Errors
///
/// Returns an error if a prompt fails, the dataset cannot be loaded, or the
/// server fails to start.
pub async fn run(
    selected: &Selected,
    multi: &MultiProgress,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Unforgotten Trace: detention report");
    println!();

    let cache = DatasetCache::new();
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[idx] {
            Action::Report => {
                let table = selected.load(&cache, multi).await?;
                let options = year_options(&table);
                let choice = Select::new()
                    .with_prompt("Year")
                    .items(&options)
                    .default(0)
                    .interact()?;
                print!("{}", render::report(&build_report(&table, options[choice])));
            }
            Action::Years => {
                let table = selected.load(&cache, multi).await?;
                print!("{}", render::years(&year_options(&table)));
            }
            Action::Taxonomy => print!("{}", render::taxonomy()),
            Action::Serve => {
                // actix-web brings its own runtime; run it off the tokio
                // worker to avoid nesting runtimes.
                let state = selected.app_state();
                tokio::task::spawn_blocking(move || {
                    actix_web::rt::System::new()
                        .block_on(trace_report_server::interactive::run(state))
                })
                .await??;
                return Ok(());
            }
        }

        println!();
        if !Confirm::new()
            .with_prompt("Do something else?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }
    }
}
