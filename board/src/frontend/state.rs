use nameth::NamedEnumValues as _;
use nameth::nameth;

use crate::api::EventRecord;
use crate::event_id::EventId;

/// What the board container shows: nothing yet, the latest snapshot,
/// or the error that replaced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardState {
    Loading,
    Ready(EventsSnapshot),
    Failed(String),
}

/// An owned, versioned copy of the server's event list.
///
/// Every poll produces a whole new snapshot; snapshots are never patched
/// in place. The version only grows, so a renderer can tell stale data
/// from fresh data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventsSnapshot {
    version: u64,
    events: Vec<EventRecord>,
}

impl EventsSnapshot {
    pub fn new(version: u64, events: Vec<EventRecord>) -> Self {
        Self { version, events }
    }

    /// The rows to display, in server order.
    ///
    /// The displayed ID is the 1-based position in the snapshot, not the
    /// server-assigned identifier.
    pub fn rows(&self) -> Vec<EventRow> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, event)| EventRow {
                display_index: i + 1,
                name: event.name.clone(),
                date: event.date.clone(),
                eta: event.eta.clone(),
            })
            .collect()
    }

    /// Maps a 1-based display index back to the server-assigned ID.
    ///
    /// Fails on anything outside `[1, len]` so a stale or mistyped index
    /// never turns into a request with an undefined identifier.
    pub fn resolve(&self, display_index: usize) -> Result<EventId, DisplayIndexError> {
        let event = display_index
            .checked_sub(1)
            .and_then(|i| self.events.get(i));
        match event {
            Some(event) => Ok(event.id),
            None => Err(DisplayIndexError::OutOfRange {
                display_index,
                len: self.events.len(),
            }),
        }
    }
}

#[nameth]
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DisplayIndexError {
    #[error("[{n}] Display index {display_index} is not in 1..={len}", n = self.name())]
    OutOfRange { display_index: usize, len: usize },
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    pub display_index: usize,
    pub name: String,
    pub date: String,
    pub eta: String,
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::DisplayIndexError;
    use super::EventsSnapshot;
    use crate::api::EventRecord;

    fn snapshot() -> EventsSnapshot {
        EventsSnapshot::new(
            3,
            vec![
                event(7, "Party", "2024/01/01", "noon"),
                event(12, "Exam", "2024/02/13", "09:00"),
                event(4, "Trip", "2024/03/01", "2 days later."),
            ],
        )
    }

    fn event(id: i64, name: &str, date: &str, eta: &str) -> EventRecord {
        EventRecord {
            id: id.into(),
            name: name.to_owned(),
            date: date.to_owned(),
            eta: eta.to_owned(),
        }
    }

    #[test]
    fn rows_use_one_based_positions() {
        let rows = snapshot().rows();
        assert_that!(rows.len()).is_equal_to(3);
        for (i, row) in rows.iter().enumerate() {
            assert_that!(row.display_index).is_equal_to(i + 1);
        }
        assert_that!(rows[0].name.as_str()).is_equal_to("Party");
        assert_that!(rows[0].date.as_str()).is_equal_to("2024/01/01");
        assert_that!(rows[0].eta.as_str()).is_equal_to("noon");
    }

    #[test]
    fn resolve_maps_display_index_to_server_id() {
        let snapshot = snapshot();
        assert_that!(snapshot.resolve(1).unwrap()).is_equal_to(7.into());
        assert_that!(snapshot.resolve(2).unwrap()).is_equal_to(12.into());
        assert_that!(snapshot.resolve(3).unwrap()).is_equal_to(4.into());
    }

    #[test]
    fn snapshots_with_the_same_events_differ_by_version() {
        let events = vec![event(7, "Party", "2024/01/01", "noon")];
        let older = EventsSnapshot::new(1, events.clone());
        let newer = EventsSnapshot::new(2, events);
        assert_that!(older == newer).is_equal_to(false);
    }

    #[test]
    fn resolve_fails_outside_the_snapshot() {
        let snapshot = snapshot();
        assert_that!(snapshot.resolve(0)).is_equal_to(Err(DisplayIndexError::OutOfRange {
            display_index: 0,
            len: 3,
        }));
        assert_that!(snapshot.resolve(4)).is_equal_to(Err(DisplayIndexError::OutOfRange {
            display_index: 4,
            len: 3,
        }));
        let empty = EventsSnapshot::default();
        assert_that!(empty.resolve(1)).is_equal_to(Err(DisplayIndexError::OutOfRange {
            display_index: 1,
            len: 0,
        }));
    }
}
