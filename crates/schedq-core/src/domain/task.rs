//! The opaque task envelope stored by the queue manager.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::{ActorId, ObjectId, TaskId};

/// A unit of work tracked by the queue manager.
///
/// Design:
/// - The manager stores and returns tasks by value; `task_id` is the only
///   field it ever reads.
/// - `actor_id`, `dependencies`, and `payload` are carried opaquely for the
///   external collaborators (dependency resolver, worker assignment,
///   executor) that decide where a task belongs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    task_id: TaskId,
    actor_id: Option<ActorId>,
    dependencies: Vec<ObjectId>,
    payload: Value,
}

impl Task {
    /// Create an ordinary task with a fresh id.
    pub fn new(payload: Value) -> Self {
        Self::from_parts(TaskId::generate(), None, Vec::new(), payload)
    }

    /// Create an actor method with a fresh id, bound to `actor_id`.
    pub fn actor_method(actor_id: ActorId, payload: Value) -> Self {
        Self::from_parts(TaskId::generate(), Some(actor_id), Vec::new(), payload)
    }

    /// Assemble a task from externally-owned parts.
    pub fn from_parts(
        task_id: TaskId,
        actor_id: Option<ActorId>,
        dependencies: Vec<ObjectId>,
        payload: Value,
    ) -> Self {
        Self {
            task_id,
            actor_id,
            dependencies,
            payload,
        }
    }

    /// Replace the dependency set (builder style).
    pub fn with_dependencies(mut self, dependencies: Vec<ObjectId>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn actor_id(&self) -> Option<ActorId> {
        self.actor_id
    }

    pub fn dependencies(&self) -> &[ObjectId] {
        &self.dependencies
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Is this task bound to a specific actor instance?
    pub fn is_actor_method(&self) -> bool {
        self.actor_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_task_is_not_an_actor_method() {
        let task = Task::new(serde_json::json!({ "op": "map" }));

        assert!(!task.is_actor_method());
        assert!(task.actor_id().is_none());
        assert!(task.dependencies().is_empty());
    }

    #[test]
    fn actor_method_carries_its_actor() {
        let actor = ActorId::generate();
        let task = Task::actor_method(actor, serde_json::json!({}));

        assert!(task.is_actor_method());
        assert_eq!(task.actor_id(), Some(actor));
    }

    #[test]
    fn with_dependencies_replaces_the_set() {
        let deps = vec![ObjectId::generate(), ObjectId::generate()];
        let task = Task::new(serde_json::json!({})).with_dependencies(deps.clone());

        assert_eq!(task.dependencies(), deps.as_slice());
    }

    #[test]
    fn fresh_tasks_get_distinct_ids() {
        let a = Task::new(serde_json::json!({}));
        let b = Task::new(serde_json::json!({}));

        assert_ne!(a.task_id(), b.task_id());
    }
}
