use chrono::NaiveDate;

/// Canonical storage format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignee {
    User1,
    User2,
    User3,
    User4,
}

impl Assignee {
    pub const ALL: [Assignee; 4] = [
        Assignee::User1,
        Assignee::User2,
        Assignee::User3,
        Assignee::User4,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Assignee::User1 => "User 1",
            Assignee::User2 => "User 2",
            Assignee::User3 => "User 3",
            Assignee::User4 => "User 4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub assigned_to: Assignee,
    pub status: Status,
    /// Canonical `YYYY-MM-DD` string.
    pub due_date: String,
    pub priority: Priority,
    pub description: String,
    pub comments: String,
}

/// A fully validated form submission. The store turns one of these into a
/// `Task` on create, or overwrites an existing task's fields with it on
/// update. Carries every editable field so a full overwrite cannot drop one.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub assigned_to: Assignee,
    pub status: Status,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub description: String,
    pub comments: String,
}

impl TaskDraft {
    pub fn due_date_string(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }
}
