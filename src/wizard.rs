//! The trip-planning wizard: step sequencing over a growing itinerary.
//!
//! Step data is always merged into the itinerary, then a per-step
//! advancement check decides whether the wizard moves on. A blocked step
//! keeps its merged data and stays current, so a step can be filled in
//! over several calls (a city now, its country later).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::model::{ItineraryPatch, TripItinerary, WizardStep};

/// Step data didn't satisfy the step's advancement check.
///
/// The data was still merged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot leave {step}: missing or invalid {}", .missing_fields.join(", "))]
pub struct StepValidationError {
    pub step: WizardStep,
    pub missing_fields: Vec<&'static str>,
}

/// Checks one step's data, returning the fields that block advancement.
pub type AdvancementCheck = fn(&ItineraryPatch) -> Vec<&'static str>;

/// The advancement policy table.
///
/// Steps without requirements advance unconditionally.
pub fn advancement_check(step: WizardStep) -> AdvancementCheck {
    match step {
        WizardStep::Destination => destination_named,
        WizardStep::Dates => dates_ordered,
        WizardStep::Travelers
        | WizardStep::Budget
        | WizardStep::Preferences
        | WizardStep::Flights
        | WizardStep::Hotels
        | WizardStep::Activities
        | WizardStep::Review => no_requirements,
    }
}

fn destination_named(patch: &ItineraryPatch) -> Vec<&'static str> {
    let Some(destination) = patch.destination.as_ref() else {
        return vec!["destination.city", "destination.country"];
    };
    if destination.is_complete() {
        return Vec::new();
    }

    let mut missing = Vec::new();
    if destination.city.trim().is_empty() {
        missing.push("destination.city");
    }
    if destination.country.trim().is_empty() {
        missing.push("destination.country");
    }
    missing
}

/// Dates are optional here; a reversed range is not.
fn dates_ordered(patch: &ItineraryPatch) -> Vec<&'static str> {
    match patch.dates {
        Some(dates) if !dates.is_ordered() => vec!["dates.endDate"],
        _ => Vec::new(),
    }
}

fn no_requirements(_: &ItineraryPatch) -> Vec<&'static str> {
    Vec::new()
}

/// Wizard state for one planning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripWizard {
    current_step: WizardStep,
    is_wizard_active: bool,
    itinerary: TripItinerary,
    #[serde(default)]
    confirmed: bool,
}

impl Default for TripWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TripWizard {
    /// An inactive wizard on the first step with an empty itinerary.
    pub fn new() -> Self {
        Self {
            current_step: WizardStep::Destination,
            is_wizard_active: false,
            itinerary: TripItinerary::default(),
            confirmed: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn is_active(&self) -> bool {
        self.is_wizard_active
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn itinerary(&self) -> &TripItinerary {
        &self.itinerary
    }

    /// Show the wizard from the first step. Collected data is kept.
    pub fn start_wizard(&mut self) {
        info!("wizard started");
        self.is_wizard_active = true;
        self.current_step = WizardStep::Destination;
    }

    /// Hide the wizard. Collected data is kept for the caller to decide on.
    pub fn end_wizard(&mut self) {
        info!("wizard ended on {}", self.current_step);
        self.is_wizard_active = false;
    }

    /// Discard everything: empty itinerary, first step, inactive.
    pub fn reset_itinerary(&mut self) {
        info!("itinerary reset");
        self.itinerary = TripItinerary::default();
        self.current_step = WizardStep::Destination;
        self.is_wizard_active = false;
        self.confirmed = false;
    }

    /// Shallow-merge `patch` into the itinerary.
    pub fn update_itinerary(&mut self, patch: ItineraryPatch) {
        debug!("merging itinerary patch on {}", self.current_step);
        self.itinerary.merge(patch);
    }

    /// Merge a step's data, then advance if the step's check passes.
    ///
    /// The merge happens first and always. On success returns the step
    /// now current; at `Review` there is nowhere further to go and the
    /// wizard stays put.
    pub fn handle_step_complete(
        &mut self,
        step: WizardStep,
        patch: ItineraryPatch,
    ) -> Result<WizardStep, StepValidationError> {
        let missing_fields = advancement_check(step)(&patch);
        self.update_itinerary(patch);

        if !missing_fields.is_empty() {
            debug!("{step} blocked on {}", missing_fields.join(", "));
            return Err(StepValidationError {
                step,
                missing_fields,
            });
        }

        if let Some(next) = self.current_step.next() {
            info!("advancing {} -> {next}", self.current_step);
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Step back one stage. Returns `false` at the first step.
    pub fn go_back(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                debug!("retreating {} -> {previous}", self.current_step);
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Accept the final itinerary and close the wizard.
    ///
    /// Completeness is not re-checked here: reaching review is the gate.
    pub fn handle_trip_confirm(&mut self, final_itinerary: TripItinerary) -> TripItinerary {
        self.itinerary = final_itinerary;
        self.confirmed = true;
        self.end_wizard();
        self.itinerary.clone()
    }
}
