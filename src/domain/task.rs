use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            done: false,
        }
    }
}

/// Ordered task list, newest first. Persisted under the `tasks` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Prepend a task with the trimmed title.
    /// Blank titles are ignored; returns the new id otherwise.
    pub fn add_task(&mut self, title: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title.to_string());
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip `done` on the matching task. Returns false when no task has this id.
    pub fn toggle_task(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task. Returns false when no task has this id.
    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Rounded percentage of completed tasks, 0 for an empty list
    pub fn completion_percent(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        (100.0 * self.completed_count() as f64 / self.tasks.len() as f64).round() as u32
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}
