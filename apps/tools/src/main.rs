
use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use schedule_core::{
    load_schedule,
    markup::{render_page, NO_RESULTS_MESSAGE},
    state_codec::{from_query_string, location_for},
    FilterAction, LoadOutcome, ReferenceOrder, ScheduleController,
};
use shared::{domain::FilterCriteria, protocol::ScheduleView};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "schedule", about = "Filter and render the festival schedule")]
struct Cli {
    /// CSV file path or http(s) URL.
    #[arg(long, global = true, default_value = "./data/schedule.csv")]
    source: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the grouped schedule for a filter state.
    Render {
        /// Location query to restore, e.g. `?day=Friday&stage=Big+Barn`.
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        day: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        query: Option<String>,
        /// Show every day instead of defaulting to the first one.
        #[arg(long)]
        all_days: bool,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the ordered day and venue facets.
    Facets {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Build a shareable location for a filter state without loading data.
    Link {
        #[arg(long, default_value = "")]
        day: String,
        #[arg(long, default_value = "")]
        venue: String,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    if let Command::Link {
        day,
        venue,
        query,
        path,
    } = &cli.command
    {
        println!("{}", location_for(path, &FilterCriteria::new(day, venue, query.trim())));
        return Ok(());
    }

    let source = source::source_for(&cli.source);
    let schedule = match load_schedule(source.as_ref(), ReferenceOrder::default()).await {
        LoadOutcome::Ready(schedule) => schedule,
        LoadOutcome::Failed(failure) => {
            bail!("Failed to load schedule from {}: {}", failure.source, failure.message)
        }
    };

    match cli.command {
        Command::Render {
            location,
            day,
            venue,
            query,
            all_days,
            format,
        } => {
            let mut controller = ScheduleController::new(schedule, from_query_string(&location));
            if !all_days {
                controller = controller.with_first_day_default();
            }
            let actions = [
                day.map(FilterAction::SelectDay),
                venue.map(FilterAction::SelectVenue),
                query.map(FilterAction::Search),
            ];
            for action in actions.into_iter().flatten() {
                controller.dispatch(action);
            }

            let snapshot = controller.snapshot();
            match format {
                Format::Text => {
                    println!("{}", snapshot.location);
                    print!("{}", render_text(&snapshot.view));
                }
                Format::Html => println!("{}", render_page(&snapshot, "/")),
                Format::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            }
        }
        Command::Facets { format } => match format {
            Format::Json => println!(
                "{}",
                serde_json::json!({ "days": schedule.days(), "venues": schedule.venues() })
            ),
            Format::Text | Format::Html => {
                println!("days: {}", schedule.days().join(", "));
                println!("venues: {}", schedule.venues().join(", "));
            }
        },
        Command::Link { .. } => {}
    }

    Ok(())
}

fn render_text(view: &ScheduleView) -> String {
    if view.is_empty() {
        return format!("{NO_RESULTS_MESSAGE}\n");
    }
    let mut out = String::new();
    for group in &view.groups {
        match &group.date_label {
            Some(date) => out.push_str(&format!("{} ({date})\n", group.day)),
            None => out.push_str(&format!("{}\n", group.day)),
        }
        for event in &group.events {
            out.push_str(&format!(
                "  {:>8}-{:<8}  {:<24}  {}  [{}]\n",
                event.start_time, event.end_time, event.venue, event.title, event.category
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
