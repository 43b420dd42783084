//! Task repository implementation.

use std::sync::Arc;

use tokio::sync::RwLock;

use minutehub_core::error::AppError;
use minutehub_core::result::AppResult;
use minutehub_core::types::{MeetingId, TaskId, UserId};
use minutehub_entity::task::Task;

/// Repository for the task board.
#[derive(Debug, Clone, Default)]
pub struct TaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskRepository {
    /// Create an empty task repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a task by id.
    pub async fn find_by_id(&self, id: TaskId) -> AppResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    /// List every task in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    /// List tasks owned by one assignee.
    pub async fn find_by_assignee(&self, assignee: UserId) -> AppResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.assigned_to == assignee)
            .cloned()
            .collect())
    }

    /// List tasks that originated from one meeting.
    pub async fn find_by_meeting(&self, meeting_id: MeetingId) -> AppResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.meeting_id == Some(meeting_id))
            .cloned()
            .collect())
    }

    /// Append a new task.
    pub async fn create(&self, task: Task) -> AppResult<Task> {
        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        Ok(task)
    }

    /// Replace an existing task by id.
    pub async fn update(&self, task: &Task) -> AppResult<Task> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(task.clone())
            }
            None => Err(AppError::not_found(format!("Task {} not found", task.id))),
        }
    }

    /// Remove a task by id. Returns `true` if a record was removed.
    pub async fn delete(&self, id: TaskId) -> AppResult<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() < before)
    }

    /// Count tasks.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.tasks.read().await.len() as u64)
    }

    /// Export the full collection for snapshotting.
    pub async fn dump(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Replace the full collection from a snapshot.
    pub async fn restore(&self, tasks: Vec<Task>) {
        *self.tasks.write().await = tasks;
    }
}
