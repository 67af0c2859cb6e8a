use crate::task::{Assignee, Priority, Status, Task, TaskDraft};

/// In-memory authoritative task collection. Append-ordered; ids come from a
/// store-owned counter and are never reused.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Board as it first opens: the four demo tasks.
    pub fn seeded() -> Self {
        let tasks = vec![
            Task {
                id: 1,
                assigned_to: Assignee::User1,
                status: Status::Completed,
                due_date: "2024-10-12".to_string(),
                priority: Priority::Low,
                description: String::new(),
                comments: "This task is good".to_string(),
            },
            Task {
                id: 2,
                assigned_to: Assignee::User2,
                status: Status::InProgress,
                due_date: "2024-09-14".to_string(),
                priority: Priority::High,
                description: String::new(),
                comments: "This".to_string(),
            },
            Task {
                id: 3,
                assigned_to: Assignee::User3,
                status: Status::NotStarted,
                due_date: "2024-08-18".to_string(),
                priority: Priority::Low,
                description: String::new(),
                comments: "This".to_string(),
            },
            Task {
                id: 4,
                assigned_to: Assignee::User4,
                status: Status::InProgress,
                due_date: "2024-06-12".to_string(),
                priority: Priority::Normal,
                description: String::new(),
                comments: "This task is good".to_string(),
            },
        ];
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a new task built from the draft and returns its fresh id.
    pub fn create(&mut self, draft: TaskDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            assigned_to: draft.assigned_to,
            status: draft.status,
            due_date: draft.due_date_string(),
            priority: draft.priority,
            description: draft.description,
            comments: draft.comments,
        });
        id
    }

    /// Overwrites every field of the matching task with the draft's values,
    /// keeping the id. Returns false (and changes nothing) when no task has
    /// that id.
    pub fn update(&mut self, id: u64, draft: TaskDraft) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.assigned_to = draft.assigned_to;
            task.status = draft.status;
            task.due_date = draft.due_date_string();
            task.priority = draft.priority;
            task.description = draft.description;
            task.comments = draft.comments;
            true
        } else {
            false
        }
    }

    /// Removes the task with the matching id, if any. Idempotent.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}
