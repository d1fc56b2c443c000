//! Read-only snapshots of queue occupancy.

use serde::{Deserialize, Serialize};

/// Number of tasks currently tracked in each scheduling state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub uncreated_actor_methods: usize,
    pub waiting: usize,
    pub ready: usize,
    pub ready_methods: usize,
    pub scheduled: usize,
    pub running: usize,
    pub blocked: usize,
}

impl QueueCounts {
    /// Total number of tasks tracked across all states.
    pub fn total(&self) -> usize {
        self.uncreated_actor_methods
            + self.waiting
            + self.ready
            + self.ready_methods
            + self.scheduled
            + self.running
            + self.blocked
    }
}
