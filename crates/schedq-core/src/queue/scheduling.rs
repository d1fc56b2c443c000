//! The queue manager: seven per-state queues plus a task arena.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use super::{SchedulingState, TaskRecord};
use crate::domain::{Task, TaskId};
use crate::error::QueueError;
use crate::observability::QueueCounts;

/// Task-lifecycle queue manager for a single scheduling node.
///
/// Owns one insertion-ordered queue per [`SchedulingState`] plus an arena of
/// [`TaskRecord`]s keyed by id. The arena doubles as the id -> state index,
/// so uniqueness checks are O(1) and removal only walks the queues that
/// actually hold requested ids.
///
/// Contract:
/// - A task id lives in at most one queue at a time. Inserting an id that is
///   already tracked anywhere is a caller bug; the whole batch is rejected.
/// - [`remove_tasks`](Self::remove_tasks) must find every requested id;
///   otherwise it rejects the whole call and removes nothing.
/// - The manager never moves a task between states on its own. Every
///   transition is an explicit remove + queue pair issued by the scheduler
///   that owns this instance.
///
/// Concurrency: all operations are synchronous and run to completion on the
/// caller's thread. The expected host is a single control loop; a host with
/// concurrent mutators must wrap the whole manager in one mutual-exclusion
/// scope so a half-finished move is never observable.
#[derive(Debug, Default)]
pub struct SchedulingQueue {
    /// All tracked tasks (single source of truth + id -> state index).
    records: HashMap<TaskId, TaskRecord>,

    uncreated_actor_methods: VecDeque<TaskId>,
    waiting_tasks: VecDeque<TaskId>,
    ready_tasks: VecDeque<TaskId>,
    ready_methods: VecDeque<TaskId>,
    scheduled_tasks: VecDeque<TaskId>,
    running_tasks: VecDeque<TaskId>,
    blocked_tasks: VecDeque<TaskId>,
}

impl SchedulingQueue {
    /// Create an empty queue manager. Instances are independent; tests and
    /// multiple scheduler instances each get their own.
    pub fn new() -> Self {
        Self::default()
    }

    // === Read accessors ===

    /// Actor methods whose target actor does not exist yet, in insertion order.
    pub fn uncreated_actor_methods(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::UncreatedActorMethod)
    }

    /// Tasks blocked on missing data dependencies, in insertion order.
    pub fn waiting_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::Waiting)
    }

    /// Ordinary tasks awaiting scheduling, in insertion order.
    pub fn ready_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::Ready)
    }

    /// Actor methods awaiting scheduling, in insertion order (which is also
    /// per-actor dispatch order).
    pub fn ready_methods(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::ReadyMethod)
    }

    /// Tasks assigned to run but not yet bound to a worker, in insertion order.
    pub fn scheduled_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::Scheduled)
    }

    /// Tasks currently executing on a worker, in insertion order.
    pub fn running_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::Running)
    }

    /// Tasks returned by a worker over a missing dependency, in insertion order.
    pub fn blocked_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(SchedulingState::Blocked)
    }

    /// Ordered read-only view of one state's queue.
    pub fn tasks_in(&self, state: SchedulingState) -> impl Iterator<Item = &Task> {
        self.queue(state).iter().map(|id| &self.record_for(*id).task)
    }

    /// Current placement of a task, if tracked.
    pub fn state_of(&self, task_id: TaskId) -> Option<SchedulingState> {
        self.records.get(&task_id).map(|record| record.state)
    }

    /// Placement record of a task, if tracked.
    pub fn record(&self, task_id: TaskId) -> Option<&TaskRecord> {
        self.records.get(&task_id)
    }

    /// Is this task tracked in any state?
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.records.contains_key(&task_id)
    }

    /// Number of tasks tracked across all states.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-state occupancy snapshot.
    pub fn counts_by_state(&self) -> QueueCounts {
        QueueCounts {
            uncreated_actor_methods: self.uncreated_actor_methods.len(),
            waiting: self.waiting_tasks.len(),
            ready: self.ready_tasks.len(),
            ready_methods: self.ready_methods.len(),
            scheduled: self.scheduled_tasks.len(),
            running: self.running_tasks.len(),
            blocked: self.blocked_tasks.len(),
        }
    }

    // === Bulk insertion ===

    /// Queue actor methods whose target actor has not been created yet.
    pub fn queue_uncreated_actor_methods(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::UncreatedActorMethod, tasks)
    }

    /// Queue tasks blocked on missing data dependencies.
    pub fn queue_waiting_tasks(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::Waiting, tasks)
    }

    /// Queue ordinary tasks whose dependencies are satisfied.
    pub fn queue_ready_tasks(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::Ready, tasks)
    }

    /// Queue actor methods whose dependencies are satisfied.
    pub fn queue_ready_methods(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::ReadyMethod, tasks)
    }

    /// Queue tasks assigned to run but not yet bound to a worker.
    pub fn queue_scheduled_tasks(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::Scheduled, tasks)
    }

    /// Queue tasks that started executing on a worker.
    pub fn queue_running_tasks(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::Running, tasks)
    }

    /// Queue tasks a worker returned over a missing data dependency.
    pub fn queue_blocked_tasks(&mut self, tasks: Vec<Task>) -> Result<(), QueueError> {
        self.queue_tasks(SchedulingState::Blocked, tasks)
    }

    /// Append `tasks` to one state's queue, in input order.
    ///
    /// The whole batch is validated before anything is inserted: if any input
    /// id is already tracked in any state, or repeated within the batch, the
    /// call fails and no queue changes. The manager performs no dependency or
    /// actor-existence checks; deciding that a task belongs in `state` is the
    /// caller's job.
    pub fn queue_tasks(
        &mut self,
        state: SchedulingState,
        tasks: Vec<Task>,
    ) -> Result<(), QueueError> {
        let mut batch = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            let task_id = task.task_id();
            if let Some(existing) = self.records.get(&task_id) {
                warn!(%task_id, existing_state = %existing.state, target_state = %state,
                    "rejecting insert of already-tracked task");
                return Err(QueueError::DuplicateTask {
                    task_id,
                    state: existing.state,
                });
            }
            if !batch.insert(task_id) {
                warn!(%task_id, target_state = %state, "rejecting batch with repeated task id");
                return Err(QueueError::DuplicateTask { task_id, state });
            }
        }

        for task in tasks {
            let task_id = task.task_id();
            debug!(%task_id, %state, "queueing task");
            self.queue_mut(state).push_back(task_id);
            self.records.insert(task_id, TaskRecord::new(task, state));
        }
        Ok(())
    }

    // === Bulk removal ===

    /// Remove every task in `task_ids`, wherever it currently lives, and
    /// return the removed tasks.
    ///
    /// States are scanned in [`SchedulingState::ALL`] order and each queue in
    /// insertion order, so the returned sequence is deterministic encounter
    /// order. Only queues the index reports as holding requested ids are
    /// walked.
    ///
    /// Closed world, atomic failure: if any requested id is not tracked, the
    /// call returns [`QueueError::TasksNotFound`] naming every missing id and
    /// removes nothing. An empty set is a no-op.
    pub fn remove_tasks(&mut self, task_ids: &HashSet<TaskId>) -> Result<Vec<Task>, QueueError> {
        let mut missing = Vec::new();
        let mut touched = HashSet::new();
        for task_id in task_ids {
            match self.records.get(task_id) {
                Some(record) => {
                    touched.insert(record.state);
                }
                None => missing.push(*task_id),
            }
        }
        if !missing.is_empty() {
            missing.sort_unstable();
            warn!(?missing, "rejecting removal of untracked task ids");
            return Err(QueueError::TasksNotFound { missing });
        }

        let mut removed_ids = Vec::with_capacity(task_ids.len());
        for state in SchedulingState::ALL {
            if !touched.contains(&state) {
                continue;
            }
            self.queue_mut(state).retain(|id| {
                if task_ids.contains(id) {
                    removed_ids.push(*id);
                    false
                } else {
                    true
                }
            });
        }

        let removed: Vec<Task> = removed_ids
            .into_iter()
            .map(|id| {
                self.records
                    .remove(&id)
                    .expect("queued id must have an arena record")
                    .task
            })
            .collect();
        debug!(count = removed.len(), "removed tasks");
        Ok(removed)
    }

    // === Internals ===

    fn record_for(&self, task_id: TaskId) -> &TaskRecord {
        self.records
            .get(&task_id)
            .expect("queued id must have an arena record")
    }

    fn queue(&self, state: SchedulingState) -> &VecDeque<TaskId> {
        match state {
            SchedulingState::UncreatedActorMethod => &self.uncreated_actor_methods,
            SchedulingState::Waiting => &self.waiting_tasks,
            SchedulingState::Ready => &self.ready_tasks,
            SchedulingState::ReadyMethod => &self.ready_methods,
            SchedulingState::Scheduled => &self.scheduled_tasks,
            SchedulingState::Running => &self.running_tasks,
            SchedulingState::Blocked => &self.blocked_tasks,
        }
    }

    fn queue_mut(&mut self, state: SchedulingState) -> &mut VecDeque<TaskId> {
        match state {
            SchedulingState::UncreatedActorMethod => &mut self.uncreated_actor_methods,
            SchedulingState::Waiting => &mut self.waiting_tasks,
            SchedulingState::Ready => &mut self.ready_tasks,
            SchedulingState::ReadyMethod => &mut self.ready_methods,
            SchedulingState::Scheduled => &mut self.scheduled_tasks,
            SchedulingState::Running => &mut self.running_tasks,
            SchedulingState::Blocked => &mut self.blocked_tasks,
        }
    }
}
