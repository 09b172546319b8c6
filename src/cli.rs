//! CLI interface for Voyagr.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//!
//! Commands split into two groups:
//!
//! - `voyagr trip new|list`, `voyagr ask`, `voyagr event ...` — no trip context needed.
//! - `voyagr --trip <id> <command>` — wizard commands operating on one planning session.
//!
//! The `--trip` flag takes a full UUID or unambiguous prefix.

mod event;
mod format;
mod trip;

use std::fs;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::config::Config;
use crate::model::{ItineraryPatch, TripSession, WizardStep};
use crate::query::{QueryParser, detect_flight_search};
use crate::storage::Storage;

use event::EventCommand;
use trip::{TripCommand, WizardCommand};

/// Voyagr — plan trips step by step.
#[derive(Debug, Parser)]
#[command(name = "voyagr", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Trip ID: full UUID or unambiguous prefix (e.g. `a3b`).
    /// Required for wizard, step, update, confirm, and daily-plan.
    #[arg(long, global = true)]
    trip: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: planning a trip
  1. voyagr trip new
     → prints a trip ID (e.g. a3b0fc12)
  2. voyagr --trip a3b step destination --data '{"destination":{"city":"Lisbon","country":"Portugal"}}'
  3. voyagr --trip a3b step dates --data '{"dates":{"startDate":"2025-05-01","endDate":"2025-05-06"}}'
  4. voyagr --trip a3b wizard status
  5. voyagr --trip a3b confirm

Step data may also be read from a file: --data @destination.json

Flights and calendar:
  voyagr ask "one-way flight from Boston to Rome in June for 2 adults"
  voyagr event add --title "Fly out" --type departure --date 2025-05-01 --time "7:45 AM""#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage planning sessions: create new ones, list existing.
    Trip {
        #[command(subcommand)]
        command: TripCommand,
    },

    /// Control the wizard for a trip.
    /// Requires `--trip`.
    Wizard {
        #[command(subcommand)]
        command: WizardCommand,
    },

    /// Complete a wizard step: merge its data, then advance if it checks out.
    ///
    /// The data is merged even when the step can't be left yet.
    /// Requires `--trip`.
    Step {
        /// Step being completed (destination, dates, travelers, ...).
        /// Must be the trip's current step.
        step: WizardStep,

        /// Itinerary fields as JSON, or `@path` to read them from a file.
        #[arg(long, default_value = "{}")]
        data: String,
    },

    /// Merge itinerary fields without advancing.
    /// Requires `--trip`.
    Update {
        /// Itinerary fields as JSON, or `@path` to read them from a file.
        #[arg(long)]
        data: String,
    },

    /// Confirm the trip: close the wizard and print the final itinerary.
    ///
    /// Uses the stored itinerary unless `--data` supplies a replacement.
    /// Requires `--trip`.
    Confirm {
        /// Final itinerary as JSON, or `@path` to read it from a file.
        #[arg(long)]
        data: Option<String>,
    },

    /// Generate a day-by-day schedule from the selected activities and store it.
    /// Requires `--trip`.
    DailyPlan,

    /// Read a free-text flight request and print search parameters as JSON.
    Ask {
        /// The request, e.g. "fly from Paris to Tokyo in May".
        text: String,
    },

    /// Manage calendar events.
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Trip { command } => match command {
            TripCommand::New => trip::cmd_new(storage),
            TripCommand::List => trip::cmd_list(storage),
        },
        Command::Wizard { command } => {
            let session = require_trip(storage, cli.trip.as_deref())?;
            trip::cmd_wizard(config, storage, session, &command)
        }
        Command::Step { step, data } => {
            let session = require_trip(storage, cli.trip.as_deref())?;
            trip::cmd_step(storage, session, step, parse_patch(&data)?)
        }
        Command::Update { data } => {
            let session = require_trip(storage, cli.trip.as_deref())?;
            trip::cmd_update(storage, session, parse_patch(&data)?)
        }
        Command::Confirm { data } => {
            let session = require_trip(storage, cli.trip.as_deref())?;
            let replacement = data.as_deref().map(parse_patch).transpose()?;
            trip::cmd_confirm(storage, session, replacement)
        }
        Command::DailyPlan => {
            let session = require_trip(storage, cli.trip.as_deref())?;
            trip::cmd_daily_plan(storage, session)
        }
        Command::Ask { text } => cmd_ask(config, &text),
        Command::Event { command } => event::run(storage, command),
    }
}

fn cmd_ask(config: &Config, text: &str) -> Result<(), String> {
    if !detect_flight_search(text) {
        eprintln!("No flight request detected.");
        return Ok(());
    }

    let parser = QueryParser::new(&config.default_origin, &config.default_destination);
    let today = jiff::Zoned::now().date();
    let params = parser.parse(text, today);

    let json = serde_json::to_string_pretty(&params)
        .map_err(|e| format!("failed to serialize search parameters: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Parse itinerary JSON given inline or as `@path`.
fn parse_patch(data: &str) -> Result<ItineraryPatch, String> {
    let json = match data.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?,
        None => data.to_string(),
    };
    serde_json::from_str(&json).map_err(|e| format!("invalid itinerary data: {e}"))
}

/// Require that `--trip` was provided and resolve it.
fn require_trip(storage: &Storage, trip_ref: Option<&str>) -> Result<TripSession, String> {
    let trip_ref = trip_ref.ok_or("this command requires --trip <id>")?;
    resolve_trip(storage, trip_ref)
}

/// Resolve a trip reference (full UUID or unambiguous prefix) to a session.
fn resolve_trip(storage: &Storage, reference: &str) -> Result<TripSession, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage
            .load_trip(id)
            .map_err(|e| format!("trip not found: {e}"));
    }

    // Try as a prefix match against all trips.
    let trips = storage
        .list_trips()
        .map_err(|e| format!("failed to list trips: {e}"))?;

    let mut matches: Vec<TripSession> = trips
        .into_iter()
        .filter(|t| t.id.to_string().starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!("no trip matching '{reference}'")),
        1 => Ok(matches.remove(0)),
        n => {
            let ids: Vec<String> = matches.iter().map(TripSession::short_id).collect();
            Err(format!(
                "'{reference}' is ambiguous — matches {n} trips: {}",
                ids.join(", ")
            ))
        }
    }
}
