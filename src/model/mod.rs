//! Core data model for Voyagr.
//!
//! These types represent the trip-planning domain:
//! itineraries, wizard steps, calendar events, and flight search parameters.

mod event;
mod flight;
mod itinerary;
mod step;
mod trip;

pub use event::{CalendarEvent, EventDraft, EventType, Frequency, RepeatRule};
pub use flight::{CabinClass, FlightSearchParams};
pub use itinerary::{
    Activity, Budget, BudgetBreakdown, DayPlan, FlightOption, HotelOption, ItineraryPatch, Pace,
    Place, Preferences, TravelDates, TripItinerary,
};
pub use step::WizardStep;
pub use trip::TripSession;
