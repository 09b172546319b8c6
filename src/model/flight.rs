//! Flight search parameters produced from a free-text request.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Parameters for a flight-search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchParams {
    /// IATA code.
    pub origin: String,

    /// IATA code.
    pub destination: String,

    pub departure_date: Date,

    /// Present for round trips only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<Date>,

    pub adults: u32,

    pub cabin_class: CabinClass,

    pub currency_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}
