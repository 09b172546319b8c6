//! Event storage: calendar occurrences grouped by the series they came from.

use crate::model::CalendarEvent;

use super::{Result, Storage};

impl Storage {
    /// Stores every occurrence of one authored event in a single transaction.
    ///
    /// `base_id` is the authored event's id; it groups the series for removal.
    pub fn insert_events(&self, base_id: &str, events: &[CalendarEvent]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO event (id, base_id, date, payload) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for event in events {
                let payload = serde_json::to_string(event)?;
                stmt.execute(rusqlite::params![event.id, base_id, event.date, payload])?;
            }
        }
        tx.commit()?;
        log::debug!("stored {} occurrence(s) of {base_id}", events.len());
        Ok(())
    }

    /// All stored occurrences, by date then id.
    pub fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM event ORDER BY date, id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut events = Vec::new();
        for row in rows {
            events.push(serde_json::from_str(&row?)?);
        }
        Ok(events)
    }

    /// Removes a whole series. Returns how many occurrences were deleted.
    pub fn delete_series(&self, base_id: &str) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM event WHERE base_id = ?1", [base_id])?;
        Ok(rows)
    }
}
