//! Domain identifiers (strongly-typed IDs).
//!
//! IDs are ULIDs wrapped in a phantom-typed `Id<T>`, so a `TaskId` can never
//! be confused with an `ActorId` at compile time. ULIDs sort by creation time
//! and can be generated on any node without coordination.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for each ID type.
///
/// Provides the prefix used by `Display` ("task-", "actor-", "object-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic ID type.
///
/// `T` is a zero-sized marker: it costs nothing at runtime and keeps the
/// different ID spaces apart at compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// Generate a fresh ID.
    pub fn generate() -> Self {
        Self::from_ulid(Ulid::new())
    }

    /// Wrap an existing ULID.
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    /// The underlying ULID.
    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker for task ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskMarker {}

impl IdMarker for TaskMarker {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Marker for actor instance ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActorMarker {}

impl IdMarker for ActorMarker {
    fn prefix() -> &'static str {
        "actor-"
    }
}

/// Marker for data object ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectMarker {}

impl IdMarker for ObjectMarker {
    fn prefix() -> &'static str {
        "object-"
    }
}

/// Identifier of a task tracked by the queue manager.
pub type TaskId = Id<TaskMarker>;

/// Identifier of the actor instance an actor method is bound to.
pub type ActorId = Id<ActorMarker>;

/// Identifier of a data object a task depends on.
pub type ObjectId = Id<ObjectMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_marker_prefix() {
        let task = TaskId::generate();
        let actor = ActorId::generate();
        let object = ObjectId::generate();

        assert!(task.to_string().starts_with("task-"));
        assert!(actor.to_string().starts_with("actor-"));
        assert!(object.to_string().starts_with("object-"));

        // The whole point: you can't accidentally mix these types.
        // (This is a compile-time property, so we just keep it as a comment.)
        // let _: TaskId = actor; // <- does not compile
    }

    #[test]
    fn ids_sort_by_creation_time() {
        let a = TaskId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = TaskId::generate();

        assert!(a < b);
    }

    #[test]
    fn ids_round_trip_through_serde() {
        let id = TaskId::generate();

        let json = serde_json::to_string(&id).unwrap();
        let back: TaskId = serde_json::from_str(&json).unwrap();

        assert_eq!(id, back);
    }

    #[test]
    fn marker_does_not_consume_memory() {
        use std::mem::size_of;

        assert_eq!(size_of::<TaskId>(), size_of::<Ulid>());
        assert_eq!(size_of::<ActorId>(), size_of::<Ulid>());
        assert_eq!(size_of::<ObjectId>(), size_of::<Ulid>());
    }
}
