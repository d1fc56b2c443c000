//! schedq-core
//!
//! Task-lifecycle queue manager for a single scheduling node: the
//! authoritative answer to "which lifecycle state holds this task right now".
//!
//! Module map:
//! - **domain**: strongly-typed ids and the opaque task envelope
//! - **queue**: scheduling states, placement records, and the queue manager
//! - **error**: contract-violation error types
//! - **observability**: per-state occupancy snapshots
//!
//! The manager is pure mechanism. It guarantees that a task id lives in at
//! most one state queue, that bulk moves are all-or-nothing, and that every
//! queue keeps insertion order. Which moves are legal is the policy of the
//! scheduler that owns the instance, not of this crate.

pub mod domain;
pub mod error;
pub mod observability;
pub mod queue;

pub use domain::{ActorId, ObjectId, Task, TaskId};
pub use error::QueueError;
pub use observability::QueueCounts;
pub use queue::{SchedulingQueue, SchedulingState, TaskRecord};
