//! Trip sessions: one stored planning session per trip.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wizard::TripWizard;

/// A planning session: the wizard state for one trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSession {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub wizard: TripWizard,
}

impl TripSession {
    /// A fresh session with the wizard started on the first step.
    pub fn begin() -> Self {
        let mut wizard = TripWizard::new();
        wizard.start_wizard();
        Self {
            id: Uuid::new_v4(),
            created_at: Timestamp::now(),
            wizard,
        }
    }

    /// First eight characters of the id, used in listings.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}
