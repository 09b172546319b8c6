//! Wizard steps: the nine stages of trip planning, in fixed order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One stage of the trip-planning flow.
///
/// Declaration order is flow order. `Review` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Destination,
    Dates,
    Travelers,
    Budget,
    Preferences,
    Flights,
    Hotels,
    Activities,
    Review,
}

impl WizardStep {
    /// Every step, in flow order.
    pub const ALL: [Self; 9] = [
        Self::Destination,
        Self::Dates,
        Self::Travelers,
        Self::Budget,
        Self::Preferences,
        Self::Flights,
        Self::Hotels,
        Self::Activities,
        Self::Review,
    ];

    /// Position within [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following step, or `None` at `Review`.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` at `Destination`.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Review
    }

    /// Lowercase identifier used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Dates => "dates",
            Self::Travelers => "travelers",
            Self::Budget => "budget",
            Self::Preferences => "preferences",
            Self::Flights => "flights",
            Self::Hotels => "hotels",
            Self::Activities => "activities",
            Self::Review => "review",
        }
    }

    /// Human-facing title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Destination => "Where to?",
            Self::Dates => "When are you going?",
            Self::Travelers => "Who's coming?",
            Self::Budget => "Set your budget",
            Self::Preferences => "Travel style",
            Self::Flights => "Choose a flight",
            Self::Hotels => "Pick a hotel",
            Self::Activities => "Plan activities",
            Self::Review => "Review your trip",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|step| step.name() == wanted)
            .ok_or_else(|| format!("unknown wizard step '{s}'"))
    }
}
