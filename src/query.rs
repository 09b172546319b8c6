//! Flight intent extraction from free text.
//!
//! A best-effort heuristic pass over a chat message: keyword containment
//! to decide whether it is about flights at all, then a handful of regexes
//! and substring checks to fill in [`FlightSearchParams`]. Nothing here
//! fails. Anything that can't be read falls back to a default.

use std::sync::LazyLock;

use jiff::{ToSpan, civil::Date};
use log::debug;
use regex::Regex;

use crate::model::{CabinClass, FlightSearchParams};

/// Substrings that mark a message as a flight request.
const FLIGHT_KEYWORDS: [&str; 10] = [
    "flight",
    "fly",
    "trip",
    "round-trip",
    "one-way",
    "ticket",
    "travel",
    "business class",
    "economy",
    "airline",
];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// City name (lowercase) to IATA airport code.
const CITY_AIRPORTS: &[(&str, &str)] = &[
    ("new york", "JFK"),
    ("nyc", "JFK"),
    ("los angeles", "LAX"),
    ("la", "LAX"),
    ("san francisco", "SFO"),
    ("chicago", "ORD"),
    ("miami", "MIA"),
    ("boston", "BOS"),
    ("seattle", "SEA"),
    ("washington", "IAD"),
    ("toronto", "YYZ"),
    ("mexico city", "MEX"),
    ("london", "LHR"),
    ("paris", "CDG"),
    ("rome", "FCO"),
    ("madrid", "MAD"),
    ("barcelona", "BCN"),
    ("amsterdam", "AMS"),
    ("berlin", "BER"),
    ("frankfurt", "FRA"),
    ("lisbon", "LIS"),
    ("dublin", "DUB"),
    ("istanbul", "IST"),
    ("dubai", "DXB"),
    ("tokyo", "NRT"),
    ("seoul", "ICN"),
    ("beijing", "PEK"),
    ("hong kong", "HKG"),
    ("singapore", "SIN"),
    ("bangkok", "BKK"),
    ("sydney", "SYD"),
    ("bali", "DPS"),
];

const DEFAULT_ORIGIN: &str = "JFK";
const DEFAULT_DESTINATION: &str = "LHR";

/// Round trips come back two weeks after departure.
const RETURN_AFTER_DAYS: i64 = 14;

static DESTINATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)to\s+([A-Za-z\s]+?)(?:\s+in|\s+for|\s+on|$)")
        .expect("destination pattern is valid")
});

static ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)from\s+([A-Za-z\s]+?)(?:\s+to|\s+in|\s+for|$)")
        .expect("origin pattern is valid")
});

static TRAVELERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:person|people|passenger|adult)")
        .expect("traveler pattern is valid")
});

/// Whether the message reads like a flight request.
///
/// Plain substring containment on the lowercased text.
pub fn detect_flight_search(query: &str) -> bool {
    let lower = query.to_lowercase();
    FLIGHT_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Parse with the built-in `JFK`/`LHR` fallbacks.
pub fn parse_flight_query(query: &str, today: Date) -> FlightSearchParams {
    QueryParser::default().parse(query, today)
}

/// Heuristic flight-query parser with configurable fallback airports.
#[derive(Debug, Clone)]
pub struct QueryParser {
    default_origin: String,
    default_destination: String,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

impl QueryParser {
    pub fn new(default_origin: impl Into<String>, default_destination: impl Into<String>) -> Self {
        Self {
            default_origin: default_origin.into(),
            default_destination: default_destination.into(),
        }
    }

    /// Extract flight-search parameters from `query`.
    ///
    /// `today` anchors the departure date and the month heuristic.
    pub fn parse(&self, query: &str, today: Date) -> FlightSearchParams {
        let lower = query.to_lowercase();

        let destination = capture_airport(&DESTINATION_RE, query)
            .unwrap_or_else(|| self.default_destination.clone());
        let origin =
            capture_airport(&ORIGIN_RE, query).unwrap_or_else(|| self.default_origin.clone());

        let one_way = lower.contains("one-way");
        let departure_date = departure_date(&lower, today);
        let return_date = if one_way {
            None
        } else {
            departure_date.checked_add(RETURN_AFTER_DAYS.days()).ok()
        };

        let params = FlightSearchParams {
            origin,
            destination,
            departure_date,
            return_date,
            adults: adults(query),
            cabin_class: cabin_class(&lower),
            currency_code: "USD".to_string(),
        };
        debug!(
            "parsed flight query: {} -> {} on {} ({:?}, {} adult(s))",
            params.origin,
            params.destination,
            params.departure_date,
            params.cabin_class,
            params.adults
        );
        params
    }
}

/// Look up an IATA code for a city name. Case and surrounding space are ignored.
pub fn airport_for_city(city: &str) -> Option<&'static str> {
    let wanted = city.trim().to_lowercase();
    CITY_AIRPORTS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, code)| *code)
}

fn capture_airport(re: &Regex, query: &str) -> Option<String> {
    let city = re.captures(query)?.get(1)?.as_str();
    let code = airport_for_city(city);
    if code.is_none() {
        debug!("no airport known for '{}', using default", city.trim());
    }
    code.map(String::from)
}

/// First match wins, in priority order.
fn cabin_class(lower: &str) -> CabinClass {
    if lower.contains("business") {
        CabinClass::Business
    } else if lower.contains("first") {
        CabinClass::First
    } else if lower.contains("premium") {
        CabinClass::PremiumEconomy
    } else {
        CabinClass::Economy
    }
}

/// Today, unless a month is named: then the next 1st of that month still ahead.
///
/// Months are checked January through December and every hit overwrites
/// the previous one, so the latest month in the calendar wins.
fn departure_date(lower: &str, today: Date) -> Date {
    let mut departure = today;
    for (month, name) in (1i8..).zip(MONTHS) {
        if !lower.contains(name) {
            continue;
        }
        if let Some(first) = next_first_of_month(month, today) {
            departure = first;
        }
    }
    departure
}

fn next_first_of_month(month: i8, today: Date) -> Option<Date> {
    let this_year = Date::new(today.year(), month, 1).ok()?;
    if this_year > today {
        return Some(this_year);
    }
    Date::new(today.year().checked_add(1)?, month, 1).ok()
}

/// Traveler count from "N people" style phrases, at least 1.
fn adults(query: &str) -> u32 {
    TRAVELERS_RE
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn today() -> Date {
        date(2025, 3, 15)
    }

    #[test]
    fn detects_flight_keywords() {
        assert!(detect_flight_search("I want a one-way ticket to Rome"));
        assert!(detect_flight_search("Any AIRLINE deals?"));
        assert!(!detect_flight_search("Show me hotels in Rome"));
    }

    #[test]
    fn parses_full_request() {
        let params = parse_flight_query(
            "Flights from Paris to Tokyo in business class for 2 adults",
            today(),
        );

        assert_eq!(params.origin, "CDG");
        assert_eq!(params.destination, "NRT");
        assert_eq!(params.cabin_class, CabinClass::Business);
        assert_eq!(params.adults, 2);
        assert_eq!(params.currency_code, "USD");
    }

    #[test]
    fn falls_back_to_defaults() {
        let params = parse_flight_query("take me somewhere", today());

        assert_eq!(params.origin, "JFK");
        assert_eq!(params.destination, "LHR");
        assert_eq!(params.departure_date, today());
        assert_eq!(params.return_date, Some(date(2025, 3, 29)));
        assert_eq!(params.adults, 1);
        assert_eq!(params.cabin_class, CabinClass::Economy);
    }

    #[test]
    fn unknown_city_uses_configured_default() {
        let parser = QueryParser::new("SFO", "CDG");
        let params = parser.parse("fly from Springfield to Shelbyville", today());

        assert_eq!(params.origin, "SFO");
        assert_eq!(params.destination, "CDG");
    }

    #[test]
    fn multi_word_city_resolves() {
        let params = parse_flight_query("flight from New York to London for 3 people", today());

        assert_eq!(params.origin, "JFK");
        assert_eq!(params.destination, "LHR");
        assert_eq!(params.adults, 3);
    }

    #[test]
    fn one_way_has_no_return() {
        let params = parse_flight_query("one-way to Rome", today());

        assert_eq!(params.destination, "FCO");
        assert_eq!(params.return_date, None);
    }

    #[test]
    fn cabin_priority_order() {
        assert_eq!(cabin_class("first or business"), CabinClass::Business);
        assert_eq!(cabin_class("first class please"), CabinClass::First);
        assert_eq!(cabin_class("premium seats"), CabinClass::PremiumEconomy);
        assert_eq!(cabin_class("cheapest"), CabinClass::Economy);
    }

    #[test]
    fn upcoming_month_stays_in_this_year() {
        let params = parse_flight_query("trip to Rome in june", today());

        assert_eq!(params.departure_date, date(2025, 6, 1));
        assert_eq!(params.return_date, Some(date(2025, 6, 15)));
    }

    #[test]
    fn past_month_rolls_to_next_year() {
        let params = parse_flight_query("trip to Rome in January", today());
        assert_eq!(params.departure_date, date(2026, 1, 1));

        // The 1st of the current month is not in the future.
        let params = parse_flight_query("trip in march", date(2025, 3, 1));
        assert_eq!(params.departure_date, date(2026, 3, 1));
    }

    #[test]
    fn later_month_name_wins() {
        let params = parse_flight_query("fly in january or december", today());

        assert_eq!(params.departure_date, date(2025, 12, 1));
    }

    #[test]
    fn zero_travelers_clamps_to_one() {
        let params = parse_flight_query("flight for 0 people", today());
        assert_eq!(params.adults, 1);

        let params = parse_flight_query("flight for 99999999999 people", today());
        assert_eq!(params.adults, 1);
    }

    #[test]
    fn never_panics_on_odd_input() {
        for query in ["", "   ", "to", "from to", "🛫 to 東京", "to 123 for", "FROM"] {
            let params = parse_flight_query(query, today());
            assert!(params.adults >= 1);
            assert_eq!(params.currency_code, "USD");
        }
    }
}
