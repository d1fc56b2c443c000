//! Scheduling states for tracked tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task on a scheduling node.
///
/// The state is not stored on the task itself: it is represented structurally
/// by which queue currently holds the task (the placement record mirrors it
/// for O(1) lookup).
///
/// Expected transitions, driven by the external scheduler via explicit
/// remove + queue pairs:
/// - UncreatedActorMethod -> Waiting | ReadyMethod
/// - Waiting -> Ready | ReadyMethod
/// - Ready | ReadyMethod -> Scheduled
/// - Scheduled -> Running
/// - Running -> Blocked, or leaves the manager entirely (removed, not re-queued)
/// - Blocked -> Waiting
///
/// The manager enforces global uniqueness of task ids, never edge legality;
/// which moves are legal is scheduler policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingState {
    /// Actor method destined for an actor instance that does not exist yet.
    UncreatedActorMethod,

    /// Blocked on missing data dependencies.
    Waiting,

    /// Dependencies satisfied, awaiting scheduling (ordinary task).
    Ready,

    /// Dependencies satisfied, awaiting scheduling (actor method).
    ///
    /// Kept apart from `Ready` so per-actor dispatch order is preserved.
    ReadyMethod,

    /// Assigned to run but not yet bound to a live worker.
    Scheduled,

    /// Currently executing on a worker.
    Running,

    /// Dispatched to a worker, then found to be missing a data dependency.
    Blocked,
}

impl SchedulingState {
    /// Every state, in the deterministic order `remove_tasks` scans them.
    pub const ALL: [SchedulingState; 7] = [
        SchedulingState::UncreatedActorMethod,
        SchedulingState::Waiting,
        SchedulingState::Ready,
        SchedulingState::ReadyMethod,
        SchedulingState::Scheduled,
        SchedulingState::Running,
        SchedulingState::Blocked,
    ];

    /// Is this task dispatchable (dependencies satisfied, not yet scheduled)?
    pub fn is_ready(self) -> bool {
        matches!(self, SchedulingState::Ready | SchedulingState::ReadyMethod)
    }

    fn as_str(self) -> &'static str {
        match self {
            SchedulingState::UncreatedActorMethod => "uncreated_actor_method",
            SchedulingState::Waiting => "waiting",
            SchedulingState::Ready => "ready",
            SchedulingState::ReadyMethod => "ready_method",
            SchedulingState::Scheduled => "scheduled",
            SchedulingState::Running => "running",
            SchedulingState::Blocked => "blocked",
        }
    }
}

impl fmt::Display for SchedulingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scan_order_covers_every_state_once() {
        let unique: HashSet<_> = SchedulingState::ALL.into_iter().collect();
        assert_eq!(unique.len(), SchedulingState::ALL.len());
        assert_eq!(SchedulingState::ALL.len(), 7);
    }

    #[test]
    fn only_ready_states_are_ready() {
        for state in SchedulingState::ALL {
            let expected = matches!(
                state,
                SchedulingState::Ready | SchedulingState::ReadyMethod
            );
            assert_eq!(state.is_ready(), expected);
        }
    }

    #[test]
    fn display_matches_serde_name() {
        let json = serde_json::to_string(&SchedulingState::UncreatedActorMethod).unwrap();
        assert_eq!(json, "\"uncreated_actor_method\"");
        assert_eq!(
            SchedulingState::UncreatedActorMethod.to_string(),
            "uncreated_actor_method"
        );
    }
}
