//! Trip storage: create, load, update, and list planning sessions.

use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::model::TripSession;
use crate::wizard::TripWizard;

use super::{Result, Storage, StorageError};

impl Storage {
    /// Creates a new trip row.
    pub fn create_trip(&self, trip: &TripSession) -> Result<()> {
        if self.trip_exists(trip.id)? {
            return Err(StorageError::TripAlreadyExists(trip.id));
        }
        let state = serde_json::to_string(&trip.wizard)?;
        self.conn.execute(
            "INSERT INTO trip (id, created_at, state) VALUES (?1, ?2, ?3)",
            rusqlite::params![trip.id.to_string(), trip.created_at.to_string(), state],
        )?;
        Ok(())
    }

    /// Writes the trip's current wizard state.
    pub fn update_trip(&self, trip: &TripSession) -> Result<()> {
        let state = serde_json::to_string(&trip.wizard)?;
        let rows = self.conn.execute(
            "UPDATE trip SET state = ?1 WHERE id = ?2",
            rusqlite::params![state, trip.id.to_string()],
        )?;
        if rows == 0 {
            return Err(StorageError::TripNotFound(trip.id));
        }
        Ok(())
    }

    /// Loads a single trip.
    pub fn load_trip(&self, id: Uuid) -> Result<TripSession> {
        let row = self
            .conn
            .query_row(
                "SELECT id, created_at, state FROM trip WHERE id = ?1",
                [id.to_string()],
                read_columns,
            )
            .optional()?;
        match row {
            Some(columns) => decode_trip(columns),
            None => Err(StorageError::TripNotFound(id)),
        }
    }

    /// Lists all trips, oldest first.
    pub fn list_trips(&self) -> Result<Vec<TripSession>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, created_at, state FROM trip")?;
        let rows = stmt.query_map([], read_columns)?;

        let mut trips = Vec::new();
        for row in rows {
            trips.push(decode_trip(row?)?);
        }
        trips.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(trips)
    }

    fn trip_exists(&self, id: Uuid) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM trip WHERE id = ?1",
                [id.to_string()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

type TripColumns = (String, String, String);

fn read_columns(row: &Row<'_>) -> rusqlite::Result<TripColumns> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn decode_trip((id, created_at, state): TripColumns) -> Result<TripSession> {
    let id = id
        .parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid trip id: {e}")))?;
    let created_at = created_at
        .parse::<jiff::Timestamp>()
        .map_err(|e| StorageError::Corrupt(format!("invalid created_at: {e}")))?;
    let wizard: TripWizard = serde_json::from_str(&state)?;

    Ok(TripSession {
        id,
        created_at,
        wizard,
    })
}
