//! Calendar commands: add, list, remove.

use clap::Subcommand;

use crate::events::new_event_id;
use crate::model::{EventDraft, Frequency, RepeatRule};
use crate::recurrence::expand_recurrence;
use crate::storage::Storage;

use super::format::format_event;

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Add an event, expanding any repeat rule into dated occurrences.
    /// Prints the series ID.
    Add {
        #[arg(long)]
        title: String,

        /// departure, arrival, event, urgent, or meeting.
        #[arg(long = "type")]
        kind: String,

        /// Date as `YYYY-MM-DD`.
        #[arg(long)]
        date: String,

        /// Time as `H:MM AM` or `H:MM PM`.
        #[arg(long)]
        time: Option<String>,

        /// never, daily, weekly, monthly, yearly, or custom (every `--interval` days).
        #[arg(long, default_value = "never")]
        repeat: Frequency,

        /// Units of the repeat frequency between occurrences.
        #[arg(long, default_value_t = 1)]
        interval: u32,

        /// Last allowed occurrence date, inclusive.
        #[arg(long)]
        until: Option<String>,

        /// Total number of occurrences.
        #[arg(long)]
        count: Option<u32>,
    },

    /// List stored events by date.
    List,

    /// Remove every occurrence of a series.
    Remove {
        /// Series ID printed by `event add`.
        id: String,
    },
}

pub(super) fn run(storage: &Storage, command: EventCommand) -> Result<(), String> {
    match command {
        EventCommand::Add {
            title,
            kind,
            date,
            time,
            repeat,
            interval,
            until,
            count,
        } => {
            if repeat == Frequency::Never && (until.is_some() || count.is_some()) {
                return Err("--until and --count need a --repeat frequency".to_string());
            }
            let repeat = (repeat != Frequency::Never).then_some(RepeatRule {
                frequency: repeat,
                interval,
                end_date: until,
                count,
            });
            let draft = EventDraft {
                title,
                kind,
                date,
                time,
                repeat,
            };
            cmd_add(storage, draft)
        }
        EventCommand::List => cmd_list(storage),
        EventCommand::Remove { id } => cmd_remove(storage, &id),
    }
}

fn cmd_add(storage: &Storage, draft: EventDraft) -> Result<(), String> {
    let event = draft
        .into_event(new_event_id())
        .map_err(|errors| errors.join("\n"))?;

    let occurrences = expand_recurrence(&event);
    if occurrences.is_empty() {
        return Err(format!(
            "repeat ends before {}, no occurrences to add",
            event.date
        ));
    }
    storage
        .insert_events(&event.id, &occurrences)
        .map_err(|e| format!("failed to store event: {e}"))?;

    println!("{}", event.id);
    eprintln!("Added {} occurrence(s) of \"{}\"", occurrences.len(), event.title);
    Ok(())
}

fn cmd_list(storage: &Storage) -> Result<(), String> {
    let events = storage
        .list_events()
        .map_err(|e| format!("failed to list events: {e}"))?;

    if events.is_empty() {
        println!("No events");
        return Ok(());
    }

    for event in &events {
        println!("{}", format_event(event));
    }
    Ok(())
}

fn cmd_remove(storage: &Storage, id: &str) -> Result<(), String> {
    let removed = storage
        .delete_series(id)
        .map_err(|e| format!("failed to remove event: {e}"))?;

    if removed == 0 {
        return Err(format!("no event series '{id}'"));
    }
    eprintln!("Removed {removed} occurrence(s)");
    Ok(())
}
