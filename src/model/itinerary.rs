//! Itinerary types: the trip record built up across wizard steps.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A city on the map.
///
/// Both names default to empty so a half-filled place deserializes:
/// the wizard accepts a city before its country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Place {
    /// A place counts as complete once both city and country are named.
    pub fn is_complete(&self) -> bool {
        !self.city.trim().is_empty() && !self.country.trim().is_empty()
    }
}

/// Departure and return days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDates {
    pub start_date: Date,
    pub end_date: Date,
}

impl TravelDates {
    /// Whether the range runs forward (a same-day trip is ordered).
    pub fn is_ordered(&self) -> bool {
        self.end_date >= self.start_date
    }
}

/// Spending limit with a per-category split.
///
/// The breakdown is advisory: nothing ties its sum to `total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub total: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub breakdown: BudgetBreakdown,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetBreakdown {
    pub flights: f64,
    pub accommodation: f64,
    pub activities: f64,
    pub food: f64,
    pub other: f64,
}

/// The flight picked in the flights step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub airline: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,

    pub price: f64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

/// The hotel picked in the hotels step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub price_per_night: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Something to do at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
}

/// How full each day should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Packed,
}

impl Pace {
    /// Activities scheduled per day when building a daily plan.
    pub fn activities_per_day(self) -> usize {
        match self {
            Self::Relaxed => 2,
            Self::Moderate => 3,
            Self::Packed => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub travel_style: String,

    #[serde(default)]
    pub pace: Pace,

    #[serde(default)]
    pub interests: Vec<String>,
}

/// One day of the generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day number within the trip.
    pub day: u32,
    pub date: Date,
    pub activities: Vec<Activity>,
}

/// The trip record, partially or fully populated.
///
/// Every field is optional while the wizard runs. The same shape doubles
/// as the merge payload for a step: see [`ItineraryPatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripItinerary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Place>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Place>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<TravelDates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightOption>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<HotelOption>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_activities: Option<Vec<Activity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_plan: Option<Vec<DayPlan>>,
}

/// Step data merged into the itinerary: any subset of its top-level fields.
pub type ItineraryPatch = TripItinerary;

impl TripItinerary {
    /// Shallow merge: each field present in `patch` replaces the current value whole.
    ///
    /// Nested records are not merged field by field. A patch carrying
    /// `destination: {city}` drops a previously set country.
    pub fn merge(&mut self, patch: ItineraryPatch) {
        let ItineraryPatch {
            origin,
            destination,
            dates,
            travelers,
            budget,
            flight,
            hotel,
            selected_activities,
            preferences,
            daily_plan,
        } = patch;

        replace_if_some(&mut self.origin, origin);
        replace_if_some(&mut self.destination, destination);
        replace_if_some(&mut self.dates, dates);
        replace_if_some(&mut self.travelers, travelers);
        replace_if_some(&mut self.budget, budget);
        replace_if_some(&mut self.flight, flight);
        replace_if_some(&mut self.hotel, hotel);
        replace_if_some(&mut self.selected_activities, selected_activities);
        replace_if_some(&mut self.preferences, preferences);
        replace_if_some(&mut self.daily_plan, daily_plan);
    }

    /// Activities in selection order; empty when none were picked.
    pub fn activities(&self) -> &[Activity] {
        self.selected_activities.as_deref().unwrap_or_default()
    }
}

fn replace_if_some<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn merge_replaces_nested_records_whole() {
        let mut itinerary = TripItinerary {
            destination: Some(Place {
                city: "Paris".into(),
                country: "France".into(),
                ..Place::default()
            }),
            travelers: Some(2),
            ..TripItinerary::default()
        };

        itinerary.merge(ItineraryPatch {
            destination: Some(Place {
                city: "Lyon".into(),
                ..Place::default()
            }),
            ..ItineraryPatch::default()
        });

        let destination = itinerary.destination.unwrap();
        assert_eq!(destination.city, "Lyon");
        assert!(destination.country.is_empty());
        assert_eq!(itinerary.travelers, Some(2));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut itinerary = TripItinerary {
            travelers: Some(3),
            ..TripItinerary::default()
        };
        let before = itinerary.clone();

        itinerary.merge(ItineraryPatch::default());

        assert_eq!(itinerary, before);
    }

    #[test]
    fn partial_destination_deserializes() {
        let patch: ItineraryPatch =
            serde_json::from_str(r#"{"destination":{"city":"Paris"}}"#).unwrap();
        let destination = patch.destination.unwrap();

        assert_eq!(destination.city, "Paris");
        assert!(!destination.is_complete());
    }

    #[test]
    fn dates_use_iso_format() {
        let patch: ItineraryPatch = serde_json::from_str(
            r#"{"dates":{"startDate":"2025-06-01","endDate":"2025-06-08"}}"#,
        )
        .unwrap();

        let dates = patch.dates.unwrap();
        assert_eq!(dates.start_date, date(2025, 6, 1));
        assert!(dates.is_ordered());
    }

    #[test]
    fn pace_capacity() {
        assert_eq!(Pace::Relaxed.activities_per_day(), 2);
        assert_eq!(Pace::default().activities_per_day(), 3);
        assert_eq!(Pace::Packed.activities_per_day(), 4);
    }
}
