//! Trip commands: session lifecycle and the wizard.

use clap::Subcommand;

use crate::aggregate::generate_daily_plan;
use crate::config::Config;
use crate::model::{ItineraryPatch, TripSession, WizardStep};
use crate::storage::Storage;

use super::format::{format_progress, format_step_line};

#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Start a new planning session. Prints the trip ID.
    New,

    /// List planning sessions.
    List,
}

#[derive(Debug, Subcommand)]
pub enum WizardCommand {
    /// Show the wizard from the first step, keeping collected data.
    Start,

    /// Hide the wizard, keeping collected data.
    End,

    /// Discard all collected data and return to the first step.
    Reset,

    /// Step back to the previous step.
    Back,

    /// Show the current step, progress, and spend.
    Status,
}

pub(super) fn cmd_new(storage: &Storage) -> Result<(), String> {
    let trip = TripSession::begin();

    storage
        .create_trip(&trip)
        .map_err(|e| format!("failed to create trip: {e}"))?;

    println!("{}", trip.id);
    Ok(())
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let trips = storage
        .list_trips()
        .map_err(|e| format!("failed to list trips: {e}"))?;

    if trips.is_empty() {
        println!("No trips");
        return Ok(());
    }

    for t in &trips {
        let status = if t.wizard.is_confirmed() {
            "confirmed"
        } else if t.wizard.is_active() {
            "planning"
        } else {
            "paused"
        };
        let destination = t
            .wizard
            .itinerary()
            .destination
            .as_ref()
            .map_or("(no destination)", |d| d.city.as_str());
        println!(
            "{}  [{status}] [{}]  {destination}",
            t.short_id(),
            t.wizard.current_step()
        );
    }

    Ok(())
}

pub(super) fn cmd_wizard(
    config: &Config,
    storage: &Storage,
    mut trip: TripSession,
    command: &WizardCommand,
) -> Result<(), String> {
    match command {
        WizardCommand::Start => trip.wizard.start_wizard(),
        WizardCommand::End => trip.wizard.end_wizard(),
        WizardCommand::Reset => trip.wizard.reset_itinerary(),
        WizardCommand::Back => {
            if !trip.wizard.go_back() {
                return Err("already on the first step".to_string());
            }
        }
        WizardCommand::Status => {
            println!("{}", format_progress(&trip.wizard, &config.currency));
            return Ok(());
        }
    }

    save(storage, &trip)?;
    eprintln!("{}", format_step_line(&trip.wizard));
    Ok(())
}

pub(super) fn cmd_step(
    storage: &Storage,
    mut trip: TripSession,
    step: WizardStep,
    patch: ItineraryPatch,
) -> Result<(), String> {
    let current = trip.wizard.current_step();
    if step != current {
        return Err(format!(
            "trip {} is on {current}, not {step}",
            trip.short_id()
        ));
    }

    let outcome = trip.wizard.handle_step_complete(step, patch);

    // The merge happened either way.
    save(storage, &trip)?;

    match outcome {
        Ok(_) => {
            eprintln!("{}", format_step_line(&trip.wizard));
            Ok(())
        }
        Err(e) => Err(format!("{e} (data saved, still on {step})")),
    }
}

pub(super) fn cmd_update(
    storage: &Storage,
    mut trip: TripSession,
    patch: ItineraryPatch,
) -> Result<(), String> {
    trip.wizard.update_itinerary(patch);
    save(storage, &trip)?;
    eprintln!("Itinerary updated");
    Ok(())
}

pub(super) fn cmd_confirm(
    storage: &Storage,
    mut trip: TripSession,
    replacement: Option<ItineraryPatch>,
) -> Result<(), String> {
    if !trip.wizard.current_step().is_terminal() {
        return Err(format!(
            "trip {} is on {}, reach review before confirming",
            trip.short_id(),
            trip.wizard.current_step()
        ));
    }

    let final_itinerary = replacement.unwrap_or_else(|| trip.wizard.itinerary().clone());
    let confirmed = trip.wizard.handle_trip_confirm(final_itinerary);
    save(storage, &trip)?;

    let json = serde_json::to_string_pretty(&confirmed)
        .map_err(|e| format!("failed to serialize itinerary: {e}"))?;
    println!("{json}");
    eprintln!("Trip {} confirmed", trip.short_id());
    Ok(())
}

pub(super) fn cmd_daily_plan(storage: &Storage, mut trip: TripSession) -> Result<(), String> {
    let plan = generate_daily_plan(trip.wizard.itinerary());
    if plan.is_empty() {
        return Err("set valid trip dates before generating a daily plan".to_string());
    }

    for day in &plan {
        let names: Vec<&str> = day.activities.iter().map(|a| a.name.as_str()).collect();
        let list = if names.is_empty() {
            "free day".to_string()
        } else {
            names.join(", ")
        };
        println!("Day {} ({}): {list}", day.day, day.date);
    }

    trip.wizard.update_itinerary(ItineraryPatch {
        daily_plan: Some(plan),
        ..ItineraryPatch::default()
    });
    save(storage, &trip)
}

fn save(storage: &Storage, trip: &TripSession) -> Result<(), String> {
    storage
        .update_trip(trip)
        .map_err(|e| format!("failed to save trip: {e}"))
}
