//! Derived figures over an itinerary: progress, spend, and display strings.
//!
//! Everything here reads the itinerary and returns a value. Nothing is stored.

use jiff::{ToSpan, civil::Date};

use crate::model::{DayPlan, TripItinerary, WizardStep};

/// Whether the itinerary holds what `step` collects.
///
/// `Review` counts as complete once every step before it is.
pub fn is_step_complete(step: WizardStep, itinerary: &TripItinerary) -> bool {
    match step {
        WizardStep::Destination => itinerary
            .destination
            .as_ref()
            .is_some_and(|d| !d.city.trim().is_empty()),
        WizardStep::Dates => itinerary.dates.is_some(),
        WizardStep::Travelers => itinerary.travelers.is_some_and(|n| n > 0),
        WizardStep::Budget => itinerary.budget.as_ref().is_some_and(|b| b.total > 0.0),
        WizardStep::Preferences => itinerary
            .preferences
            .as_ref()
            .is_some_and(|p| !p.travel_style.trim().is_empty()),
        WizardStep::Flights => itinerary.flight.is_some(),
        WizardStep::Hotels => itinerary.hotel.is_some(),
        WizardStep::Activities => !itinerary.activities().is_empty(),
        WizardStep::Review => WizardStep::ALL[..WizardStep::Review.index()]
            .iter()
            .all(|s| is_step_complete(*s, itinerary)),
    }
}

/// Share of the nine steps that are complete, rounded to a whole percent.
pub fn calculate_completion_percentage(itinerary: &TripItinerary) -> u32 {
    let total = WizardStep::ALL.len();
    let complete = WizardStep::ALL
        .iter()
        .filter(|s| is_step_complete(**s, itinerary))
        .count();
    // Rounds half up in integer arithmetic.
    let percent = (complete * 200 + total) / (2 * total);
    u32::try_from(percent).unwrap_or(100)
}

/// Whole days from `start` to `end`. Negative when the range is reversed.
pub fn calculate_trip_duration(start: Date, end: Date) -> i64 {
    start.duration_until(end).as_hours() / 24
}

/// Flight, plus hotel nights, plus every selected activity.
///
/// Missing pieces contribute nothing.
pub fn calculate_total_spent(itinerary: &TripItinerary) -> f64 {
    let flight = itinerary.flight.as_ref().map_or(0.0, |f| f.price);

    let hotel = match (&itinerary.hotel, &itinerary.dates) {
        (Some(hotel), Some(dates)) => {
            let nights = calculate_trip_duration(dates.start_date, dates.end_date);
            hotel.price_per_night * i32::try_from(nights).map_or(0.0, f64::from)
        }
        _ => 0.0,
    };

    let activities: f64 = itinerary.activities().iter().map(|a| a.price).sum();

    flight + hotel + activities
}

/// `Mar 5 - Mar 12, 2025`, or `Dec 30, 2025 - Jan 2, 2026` across years.
pub fn format_date_range(start: Date, end: Date) -> String {
    if start.year() == end.year() {
        format!(
            "{} - {}",
            start.strftime("%b %-d"),
            end.strftime("%b %-d, %Y")
        )
    } else {
        format!(
            "{} - {}",
            start.strftime("%b %-d, %Y"),
            end.strftime("%b %-d, %Y")
        )
    }
}

/// Whole-unit money string with thousands separators, e.g. `$1,235`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    let sign = if rounded < 0.0 { "-" } else { "" };

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{} {grouped}", currency.to_ascii_uppercase()),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Spread the selected activities over the trip's days in selection order.
///
/// The pace sets how many land on each day; whatever doesn't fit goes on
/// the last day. Without dates, or with a reversed range, there is no plan.
pub fn generate_daily_plan(itinerary: &TripItinerary) -> Vec<DayPlan> {
    let Some(dates) = itinerary.dates.filter(|d| d.is_ordered()) else {
        return Vec::new();
    };
    let per_day = itinerary
        .preferences
        .as_ref()
        .map(|p| p.pace)
        .unwrap_or_default()
        .activities_per_day();

    let mut plan: Vec<DayPlan> = dates
        .start_date
        .series(1.day())
        .take_while(|d| *d <= dates.end_date)
        .zip(1u32..)
        .map(|(date, day)| DayPlan {
            day,
            date,
            activities: Vec::new(),
        })
        .collect();

    let days = plan.len();
    for (i, activity) in itinerary.activities().iter().enumerate() {
        let slot = (i / per_day).min(days - 1);
        plan[slot].activities.push(activity.clone());
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::{
        Activity, Budget, FlightOption, HotelOption, Pace, Place, Preferences, TravelDates,
    };

    fn activity(name: &str, price: f64) -> Activity {
        Activity {
            id: name.to_lowercase(),
            name: name.into(),
            category: None,
            price,
            duration_hours: None,
        }
    }

    fn dates(start: Date, end: Date) -> Option<TravelDates> {
        Some(TravelDates {
            start_date: start,
            end_date: end,
        })
    }

    fn complete_itinerary() -> TripItinerary {
        TripItinerary {
            destination: Some(Place {
                city: "Lisbon".into(),
                country: "Portugal".into(),
                ..Place::default()
            }),
            dates: dates(date(2025, 5, 1), date(2025, 5, 5)),
            travelers: Some(2),
            budget: Some(Budget {
                total: 3000.0,
                ..Budget::default()
            }),
            preferences: Some(Preferences {
                travel_style: "culture".into(),
                pace: Pace::Relaxed,
                interests: vec!["food".into()],
            }),
            flight: Some(FlightOption {
                id: "tp1".into(),
                airline: "TAP".into(),
                flight_number: None,
                price: 600.0,
                currency: "USD".into(),
            }),
            hotel: Some(HotelOption {
                id: "h1".into(),
                name: "Alfama Inn".into(),
                price_per_night: 120.0,
                currency: "USD".into(),
                rating: None,
            }),
            selected_activities: Some(vec![activity("Tram", 10.0), activity("Fado", 40.0)]),
            ..TripItinerary::default()
        }
    }

    #[test]
    fn empty_itinerary_is_zero_percent() {
        assert_eq!(calculate_completion_percentage(&TripItinerary::default()), 0);
        assert!(!is_step_complete(
            WizardStep::Review,
            &TripItinerary::default()
        ));
    }

    #[test]
    fn complete_itinerary_is_one_hundred_percent() {
        let itinerary = complete_itinerary();

        assert!(is_step_complete(WizardStep::Review, &itinerary));
        assert_eq!(calculate_completion_percentage(&itinerary), 100);
    }

    #[test]
    fn partial_progress_rounds() {
        let itinerary = TripItinerary {
            destination: Some(Place {
                city: "Lisbon".into(),
                ..Place::default()
            }),
            ..TripItinerary::default()
        };
        // 1 of 9.
        assert_eq!(calculate_completion_percentage(&itinerary), 11);

        let mut itinerary = complete_itinerary();
        itinerary.hotel = None;
        // 7 of 9: review drops out with the hotel.
        assert_eq!(calculate_completion_percentage(&itinerary), 78);
    }

    #[test]
    fn zero_budget_is_incomplete() {
        let itinerary = TripItinerary {
            budget: Some(Budget::default()),
            ..TripItinerary::default()
        };
        assert!(!is_step_complete(WizardStep::Budget, &itinerary));
    }

    #[test]
    fn trip_duration_keeps_sign() {
        assert_eq!(
            calculate_trip_duration(date(2025, 5, 1), date(2025, 5, 5)),
            4
        );
        assert_eq!(
            calculate_trip_duration(date(2025, 5, 1), date(2025, 5, 1)),
            0
        );
        assert_eq!(
            calculate_trip_duration(date(2025, 5, 5), date(2025, 5, 1)),
            -4
        );
    }

    #[test]
    fn total_spent_activities_only() {
        let itinerary = TripItinerary {
            selected_activities: Some(vec![activity("A", 50.0), activity("B", 30.0)]),
            ..TripItinerary::default()
        };
        assert!((calculate_total_spent(&itinerary) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_spent_everything() {
        // 600 flight + 4 nights * 120 + 50 activities.
        let total = calculate_total_spent(&complete_itinerary());
        assert!((total - 1130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hotel_without_dates_costs_nothing() {
        let mut itinerary = complete_itinerary();
        itinerary.dates = None;
        let total = calculate_total_spent(&itinerary);
        assert!((total - 650.0).abs() < f64::EPSILON);
    }

    #[test]
    fn date_range_formats() {
        assert_eq!(
            format_date_range(date(2025, 3, 5), date(2025, 3, 12)),
            "Mar 5 - Mar 12, 2025"
        );
        assert_eq!(
            format_date_range(date(2025, 12, 30), date(2026, 1, 2)),
            "Dec 30, 2025 - Jan 2, 2026"
        );
    }

    #[test]
    fn currency_formats() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,235");
        assert_eq!(format_currency(0.0, "USD"), "$0");
        assert_eq!(format_currency(999.0, "eur"), "€999");
        assert_eq!(format_currency(1_000_000.0, "GBP"), "£1,000,000");
        assert_eq!(format_currency(-80.4, "USD"), "-$80");
        assert_eq!(format_currency(1500.0, "CHF"), "CHF 1,500");
    }

    #[test]
    fn daily_plan_follows_pace() {
        let mut itinerary = complete_itinerary();
        itinerary.dates = dates(date(2025, 5, 1), date(2025, 5, 3));
        itinerary.selected_activities = Some(
            ["a", "b", "c", "d", "e", "f", "g"]
                .iter()
                .map(|n| activity(n, 1.0))
                .collect(),
        );

        // Relaxed: two a day, the rest pile onto the last day.
        let plan = generate_daily_plan(&itinerary);
        let counts: Vec<usize> = plan.iter().map(|d| d.activities.len()).collect();
        assert_eq!(counts, [2, 2, 3]);
        assert_eq!(plan[0].day, 1);
        assert_eq!(plan[2].date, date(2025, 5, 3));
        assert_eq!(plan[0].activities[0].name, "a");
    }

    #[test]
    fn daily_plan_needs_ordered_dates() {
        let mut itinerary = complete_itinerary();
        itinerary.dates = dates(date(2025, 5, 3), date(2025, 5, 1));
        assert!(generate_daily_plan(&itinerary).is_empty());

        itinerary.dates = None;
        assert!(generate_daily_plan(&itinerary).is_empty());
    }

    #[test]
    fn single_day_trip_gets_one_day() {
        let mut itinerary = complete_itinerary();
        itinerary.dates = dates(date(2025, 5, 1), date(2025, 5, 1));

        let plan = generate_daily_plan(&itinerary);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].activities.len(), 2);
    }
}
