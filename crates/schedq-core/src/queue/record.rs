//! Placement record: the arena entry behind every per-state queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SchedulingState;
use crate::domain::Task;

/// A tracked task plus its current placement.
///
/// Design:
/// - This is the single source of truth for "where is this task". Per-state
///   queues hold `TaskId` only; the record carries the state tag so
///   membership checks never walk a queue.
/// - Records are created on insert and destroyed on removal. A state change
///   is always remove + insert, never an in-place transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task: Task,
    pub state: SchedulingState,

    /// When the task entered its current state.
    pub entered_state_at: DateTime<Utc>,
}

impl TaskRecord {
    pub fn new(task: Task, state: SchedulingState) -> Self {
        Self {
            task,
            state,
            entered_state_at: Utc::now(),
        }
    }

    /// How long the task has been sitting in its current state.
    pub fn time_in_state(&self) -> chrono::Duration {
        Utc::now() - self.entered_state_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_carries_the_given_state() {
        let task = Task::new(serde_json::json!({}));
        let record = TaskRecord::new(task.clone(), SchedulingState::Waiting);

        assert_eq!(record.state, SchedulingState::Waiting);
        assert_eq!(record.task.task_id(), task.task_id());
    }

    #[test]
    fn time_in_state_is_non_negative() {
        let record = TaskRecord::new(Task::new(serde_json::json!({})), SchedulingState::Ready);
        assert!(record.time_in_state() >= chrono::Duration::zero());
    }
}
