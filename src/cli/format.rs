//! Output formatting for CLI display.

use crate::aggregate::{
    calculate_completion_percentage, calculate_total_spent, calculate_trip_duration,
    format_currency, format_date_range, is_step_complete,
};
use crate::model::{CalendarEvent, WizardStep};
use crate::wizard::TripWizard;

/// One line naming the current step, e.g. `Step 2/9: dates (When are you going?)`.
pub(super) fn format_step_line(wizard: &TripWizard) -> String {
    let step = wizard.current_step();
    format!(
        "Step {}/{}: {step} ({})",
        step.index() + 1,
        WizardStep::ALL.len(),
        step.label()
    )
}

/// Multi-line progress summary for `wizard status`.
pub(super) fn format_progress(wizard: &TripWizard, currency: &str) -> String {
    let itinerary = wizard.itinerary();
    let mut lines = vec![format_step_line(wizard)];

    let state = if wizard.is_confirmed() {
        "confirmed"
    } else if wizard.is_active() {
        "active"
    } else {
        "inactive"
    };
    lines.push(format!(
        "Wizard: {state}, {}% complete",
        calculate_completion_percentage(itinerary)
    ));

    if let Some(destination) = &itinerary.destination {
        let place = if destination.country.is_empty() {
            destination.city.clone()
        } else {
            format!("{}, {}", destination.city, destination.country)
        };
        lines.push(format!("Destination: {place}"));
    }
    if let Some(dates) = &itinerary.dates {
        let nights = calculate_trip_duration(dates.start_date, dates.end_date);
        lines.push(format!(
            "Dates: {} ({nights} night(s))",
            format_date_range(dates.start_date, dates.end_date)
        ));
    }
    lines.push(format!(
        "Spent: {}",
        format_currency(calculate_total_spent(itinerary), currency)
    ));
    if let Some(budget) = &itinerary.budget {
        lines.push(format!(
            "Budget: {}",
            format_currency(budget.total, &budget.currency)
        ));
    }

    let steps: Vec<String> = WizardStep::ALL
        .iter()
        .map(|s| {
            let mark = if is_step_complete(*s, itinerary) { "x" } else { " " };
            format!("  [{mark}] {s}")
        })
        .collect();
    lines.extend(steps);

    lines.join("\n")
}

/// One calendar row: `2025-05-01  7:45 AM  [departure]  Fly out  (id)`.
pub(super) fn format_event(event: &CalendarEvent) -> String {
    let time = event.time.as_deref().unwrap_or("all day");
    let repeat = if event.repeat.is_some() { "  ↻" } else { "" };
    format!(
        "{}  {time:>8}  [{}]  {}  ({}){repeat}",
        event.date, event.kind, event.title, event.id
    )
}
