//! Contract-violation errors.
//!
//! Both variants signal a caller bug (a desynchronized scheduler), not a
//! transient runtime condition. They are never retried internally, and the
//! failed operation leaves the queue manager completely unmodified.

use thiserror::Error;

use crate::domain::TaskId;
use crate::queue::SchedulingState;

#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    /// A `queue_*` call tried to insert a task id that is already tracked
    /// (in `state`), or repeated an id within its own batch.
    #[error("task {task_id} is already tracked in state {state}")]
    DuplicateTask {
        task_id: TaskId,
        state: SchedulingState,
    },

    /// `remove_tasks` was asked for ids that are not tracked in any state.
    #[error("tasks not tracked in any state: {}", fmt_ids(.missing))]
    TasksNotFound { missing: Vec<TaskId> },
}

fn fmt_ids(ids: &[TaskId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_task_names_the_holding_state() {
        let task_id = TaskId::generate();
        let err = QueueError::DuplicateTask {
            task_id,
            state: SchedulingState::Running,
        };

        let msg = err.to_string();
        assert!(msg.contains(&task_id.to_string()));
        assert!(msg.contains("running"));
    }

    #[test]
    fn tasks_not_found_lists_every_missing_id() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        let err = QueueError::TasksNotFound {
            missing: vec![a, b],
        };

        let msg = err.to_string();
        assert!(msg.contains(&a.to_string()));
        assert!(msg.contains(&b.to_string()));
    }
}
