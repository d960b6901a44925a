use time::Date;

use crate::core::api::{NewTask, Task, TaskUpdate};

/// Editable state behind the admin task form. Doubles as the create and the
/// edit form; `editing` carries the id of the task being edited, if any.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<Date>,
    editing: Option<String>,
}

impl TaskDraft {
    /// Load a task into the form for editing. Due dates arrive date-only
    /// from the model, so no further normalization happens here.
    pub fn begin_edit(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.assigned_to = task.assigned_to.as_ref().map(|user| user.id.clone());
        self.due_date = task.due_date;
        self.editing = Some(task.id.clone());
    }

    /// Back to a blank create form.
    pub fn reset(&mut self) {
        *self = TaskDraft::default();
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Title and assignee are required; description and due date are not.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && self.assigned_to.is_some()
    }

    pub fn new_task(&self) -> Option<NewTask> {
        if !self.is_submittable() {
            return None;
        }
        let assigned_to = self.assigned_to.clone()?;
        Some(NewTask {
            title: self.title.trim().to_owned(),
            description: self.description.clone(),
            assigned_to,
            due_date: self.due_date,
        })
    }

    pub fn update(&self) -> TaskUpdate {
        TaskUpdate {
            title: Some(self.title.trim().to_owned()),
            description: Some(self.description.clone()),
            assigned_to: self.assigned_to.clone(),
            due_date: self.due_date,
            status: None,
        }
    }
}
