//! Calendar event types: authored events, repeat rules, and the raw draft shape.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A dated entry on the travel calendar.
///
/// `date` stays a string (`YYYY-MM-DD`): events arrive from outside and
/// validation decides whether it parses. See [`EventDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,

    pub title: String,

    #[serde(rename = "type")]
    pub kind: EventType,

    pub date: String,

    /// `H:MM AM|PM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatRule>,
}

/// What kind of calendar entry this is. Drives icon and color in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    Departure,
    Arrival,
    Event,
    Urgent,
    Meeting,
}

impl EventType {
    pub const ALL: [Self; 5] = [
        Self::Departure,
        Self::Arrival,
        Self::Event,
        Self::Urgent,
        Self::Meeting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Arrival => "arrival",
            Self::Event => "event",
            Self::Urgent => "urgent",
            Self::Meeting => "meeting",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown event type '{s}'"))
    }
}

/// How an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    pub frequency: Frequency,

    /// Units of `frequency` between occurrences.
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Last allowed occurrence date (`YYYY-MM-DD`), inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Total occurrences, when positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

fn default_interval() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Never,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Every `interval` days.
    Custom,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(Self::Never),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown repeat frequency '{other}'")),
        }
    }
}

/// An event as authored, before validation.
///
/// Fields are raw strings so every problem can be reported at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub date: String,

    pub time: Option<String>,

    pub repeat: Option<RepeatRule>,
}
