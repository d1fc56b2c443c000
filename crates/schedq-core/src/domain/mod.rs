//! Domain model (ids and the opaque task envelope).

pub mod ids;
pub mod task;

pub use ids::{ActorId, Id, IdMarker, ObjectId, TaskId};
pub use task::Task;
