//! Calendar event authoring: validation and id generation.
//!
//! Validation collects every problem instead of stopping at the first,
//! so the caller can show the whole list at once.

use std::sync::LazyLock;

use jiff::{Timestamp, civil::Date};
use regex::Regex;
use uuid::Uuid;

use crate::model::{CalendarEvent, EventDraft, EventType};

pub const TITLE_REQUIRED: &str = "Event title is required";
pub const INVALID_DATE: &str = "Invalid event date";
pub const INVALID_TIME: &str = "Invalid time format";
pub const INVALID_TYPE: &str = "Valid event type is required";

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:1[0-2]|0?[1-9]):[0-5][0-9] (?:AM|PM)$").expect("time pattern is valid")
});

impl EventDraft {
    /// Every validation failure, in check order. Empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if self.date.parse::<Date>().is_err() {
            errors.push(INVALID_DATE.to_string());
        }
        if let Some(time) = &self.time
            && !TIME_RE.is_match(time)
        {
            errors.push(INVALID_TIME.to_string());
        }
        if self.kind.parse::<EventType>().is_err() {
            errors.push(INVALID_TYPE.to_string());
        }

        errors
    }

    /// Validate and, when clean, build the event under `id`.
    pub fn into_event(self, id: String) -> Result<CalendarEvent, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let kind = self.kind.parse::<EventType>().map_err(|e| vec![e])?;

        Ok(CalendarEvent {
            id,
            title: self.title.trim().to_string(),
            kind,
            date: self.date,
            time: self.time,
            repeat: self.repeat,
        })
    }
}

/// A fresh event id: creation time in milliseconds plus a random suffix.
///
/// Collisions are unlikely, not impossible.
pub fn new_event_id() -> String {
    let millis = Timestamp::now().as_millisecond();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &suffix[..8])
}
