use nameth::NamedType as _;
use nameth::nameth;
use serde::Deserialize;
use serde::Serialize;

/// The server-assigned identifier of an event.
///
/// Distinct from the display index, which is the 1-based position of the
/// event in the last rendered list.
#[nameth]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId {
    id: i64,
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.id.fmt(f)
    }
}

impl std::fmt::Debug for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(EventId::type_name()).field(&self.id).finish()
    }
}
