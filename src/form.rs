use chrono::NaiveDate;

use crate::task::{Assignee, Priority, Status, Task, TaskDraft, DATE_FORMAT};

/// Which session the open form belongs to. A closed form is the absence of a
/// `TaskForm` altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AssignedTo,
    Status,
    DueDate,
    Priority,
    Description,
    Comments,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Field::AssignedTo,
        Field::Status,
        Field::DueDate,
        Field::Priority,
        Field::Description,
        Field::Comments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::AssignedTo => "Assigned To",
            Field::Status => "Status",
            Field::DueDate => "Due Date",
            Field::Priority => "Priority",
            Field::Description => "Description",
            Field::Comments => "Comments",
        }
    }

    /// Select fields cycle a fixed option set; the rest take typed input.
    pub fn is_select(self) -> bool {
        matches!(self, Field::AssignedTo | Field::Status | Field::Priority)
    }

    fn next(self) -> Field {
        let i = Field::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Field::ORDER[(i + 1) % Field::ORDER.len()]
    }

    fn prev(self) -> Field {
        let i = Field::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Field::ORDER[(i + Field::ORDER.len() - 1) % Field::ORDER.len()]
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldErrors {
    pub assigned_to: Option<&'static str>,
    pub status: Option<&'static str>,
    pub due_date: Option<&'static str>,
    pub priority: Option<&'static str>,
}

impl FieldErrors {
    pub fn for_field(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::AssignedTo => self.assigned_to,
            Field::Status => self.status,
            Field::DueDate => self.due_date,
            Field::Priority => self.priority,
            Field::Description | Field::Comments => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FieldErrors::default()
    }
}

/// One open create/edit session: the bound field values, the focused field,
/// and the messages from the last rejected submit.
#[derive(Debug)]
pub struct TaskForm {
    pub mode: FormMode,
    pub assigned_to: Option<Assignee>,
    pub status: Option<Status>,
    /// Text buffer of the date input, `YYYY-MM-DD` once valid.
    pub due_date: String,
    pub priority: Option<Priority>,
    pub description: String,
    pub comments: String,
    pub focus: Field,
    pub errors: FieldErrors,
}

impl TaskForm {
    /// Blank form for a new task.
    pub fn creating() -> Self {
        Self {
            mode: FormMode::Creating,
            assigned_to: None,
            status: None,
            due_date: String::new(),
            priority: None,
            description: String::new(),
            comments: String::new(),
            focus: Field::AssignedTo,
            errors: FieldErrors::default(),
        }
    }

    /// Form pre-populated from an existing task. The stored date string goes
    /// through `NaiveDate` on the way into the input buffer, the same
    /// representation the submit path parses it back out of.
    pub fn editing(task: &Task) -> Self {
        let due_date = match NaiveDate::parse_from_str(&task.due_date, DATE_FORMAT) {
            Ok(date) => date.format(DATE_FORMAT).to_string(),
            Err(_) => task.due_date.clone(),
        };
        Self {
            mode: FormMode::Editing(task.id),
            assigned_to: Some(task.assigned_to),
            status: Some(task.status),
            due_date,
            priority: Some(task.priority),
            description: task.description.clone(),
            comments: task.comments.clone(),
            focus: Field::AssignedTo,
            errors: FieldErrors::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "New Task",
            FormMode::Editing(_) => "Edit Task",
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Steps the focused select field through its option set. An unset select
    /// lands on the first (or last) option. Ignored on text fields.
    pub fn cycle(&mut self, step: i8) {
        match self.focus {
            Field::AssignedTo => self.assigned_to = cycled(self.assigned_to, &Assignee::ALL, step),
            Field::Status => self.status = cycled(self.status, &Status::ALL, step),
            Field::Priority => self.priority = cycled(self.priority, &Priority::ALL, step),
            Field::DueDate | Field::Description | Field::Comments => {}
        }
    }

    /// Appends a character to the focused text field. Ignored on selects.
    pub fn input(&mut self, c: char) {
        match self.focus {
            Field::DueDate => self.due_date.push(c),
            Field::Description => self.description.push(c),
            Field::Comments => self.comments.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::DueDate => {
                self.due_date.pop();
            }
            Field::Description => {
                self.description.pop();
            }
            Field::Comments => {
                self.comments.pop();
            }
            _ => {}
        }
    }

    /// Validates the bound values. On success returns the draft to commit and
    /// clears the messages; on failure records a message per offending field
    /// and returns nothing, leaving the session open.
    pub fn submit(&mut self) -> Option<TaskDraft> {
        self.errors = FieldErrors::default();

        if self.assigned_to.is_none() {
            self.errors.assigned_to = Some("Please select the assignee");
        }
        if self.status.is_none() {
            self.errors.status = Some("Please select the status");
        }
        let due_date = if self.due_date.trim().is_empty() {
            self.errors.due_date = Some("Please select the due date");
            None
        } else {
            match NaiveDate::parse_from_str(self.due_date.trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    self.errors.due_date = Some("Enter the date as YYYY-MM-DD");
                    None
                }
            }
        };
        if self.priority.is_none() {
            self.errors.priority = Some("Please select the priority");
        }

        match (self.assigned_to, self.status, due_date, self.priority) {
            (Some(assigned_to), Some(status), Some(due_date), Some(priority)) => Some(TaskDraft {
                assigned_to,
                status,
                due_date,
                priority,
                description: self.description.clone(),
                comments: self.comments.clone(),
            }),
            _ => None,
        }
    }
}

fn cycled<T: Copy + PartialEq>(current: Option<T>, options: &[T], step: i8) -> Option<T> {
    let index = match current {
        Some(value) => {
            let i = options.iter().position(|o| *o == value).unwrap_or(0) as i32;
            (i + i32::from(step)).rem_euclid(options.len() as i32) as usize
        }
        None if step < 0 => options.len() - 1,
        None => 0,
    };
    Some(options[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 7,
            assigned_to: Assignee::User3,
            status: Status::InProgress,
            due_date: "2024-09-14".to_string(),
            priority: Priority::High,
            description: "write report".to_string(),
            comments: "half done".to_string(),
        }
    }

    #[test]
    fn creating_starts_blank() {
        let form = TaskForm::creating();
        assert_eq!(form.mode, FormMode::Creating);
        assert!(form.assigned_to.is_none());
        assert!(form.status.is_none());
        assert!(form.due_date.is_empty());
        assert!(form.priority.is_none());
        assert!(form.description.is_empty());
        assert!(form.comments.is_empty());
        assert_eq!(form.focus, Field::AssignedTo);
    }

    #[test]
    fn editing_prepopulates_every_field() {
        let task = sample_task();
        let form = TaskForm::editing(&task);
        assert_eq!(form.mode, FormMode::Editing(7));
        assert_eq!(form.assigned_to, Some(Assignee::User3));
        assert_eq!(form.status, Some(Status::InProgress));
        assert_eq!(form.due_date, "2024-09-14");
        assert_eq!(form.priority, Some(Priority::High));
        assert_eq!(form.description, "write report");
        assert_eq!(form.comments, "half done");
    }

    #[test]
    fn saved_date_reopens_as_the_same_calendar_date() {
        let mut form = TaskForm::creating();
        form.assigned_to = Some(Assignee::User1);
        form.status = Some(Status::NotStarted);
        form.due_date = "2025-03-09".to_string();
        form.priority = Some(Priority::Low);
        let draft = form.submit().unwrap();

        let task = Task {
            id: 1,
            assigned_to: draft.assigned_to,
            status: draft.status,
            due_date: draft.due_date_string(),
            priority: draft.priority,
            description: draft.description,
            comments: draft.comments,
        };
        let reopened = TaskForm::editing(&task);
        assert_eq!(reopened.due_date, "2025-03-09");
    }

    #[test]
    fn blank_submit_reports_every_required_field() {
        let mut form = TaskForm::creating();
        assert!(form.submit().is_none());
        assert_eq!(form.errors.assigned_to, Some("Please select the assignee"));
        assert_eq!(form.errors.status, Some("Please select the status"));
        assert_eq!(form.errors.due_date, Some("Please select the due date"));
        assert_eq!(form.errors.priority, Some("Please select the priority"));
    }

    #[test]
    fn missing_assignee_is_the_only_error_reported() {
        let mut form = TaskForm::creating();
        form.status = Some(Status::NotStarted);
        form.due_date = "2025-01-01".to_string();
        form.priority = Some(Priority::High);
        assert!(form.submit().is_none());
        assert!(form.errors.assigned_to.is_some());
        assert!(form.errors.status.is_none());
        assert!(form.errors.due_date.is_none());
        assert!(form.errors.priority.is_none());
    }

    #[test]
    fn unparsable_date_is_rejected_with_its_own_message() {
        let mut form = TaskForm::creating();
        form.assigned_to = Some(Assignee::User1);
        form.status = Some(Status::Completed);
        form.due_date = "next tuesday".to_string();
        form.priority = Some(Priority::Normal);
        assert!(form.submit().is_none());
        assert_eq!(form.errors.due_date, Some("Enter the date as YYYY-MM-DD"));
    }

    #[test]
    fn valid_submit_produces_the_draft_and_clears_messages() {
        let mut form = TaskForm::creating();
        assert!(form.submit().is_none());
        form.assigned_to = Some(Assignee::User2);
        form.status = Some(Status::NotStarted);
        form.due_date = "2025-01-01".to_string();
        form.priority = Some(Priority::High);
        form.description = "ship it".to_string();
        form.comments = "soon".to_string();
        let draft = form.submit().unwrap();
        assert!(form.errors.is_empty());
        assert_eq!(draft.assigned_to, Assignee::User2);
        assert_eq!(draft.status, Status::NotStarted);
        assert_eq!(draft.due_date_string(), "2025-01-01");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.description, "ship it");
        assert_eq!(draft.comments, "soon");
    }

    #[test]
    fn cycling_an_unset_select_lands_on_an_option() {
        let mut form = TaskForm::creating();
        form.cycle(1);
        assert_eq!(form.assigned_to, Some(Assignee::User1));
        form.cycle(1);
        assert_eq!(form.assigned_to, Some(Assignee::User2));
        form.cycle(-1);
        assert_eq!(form.assigned_to, Some(Assignee::User1));

        form.focus = Field::Priority;
        form.cycle(-1);
        assert_eq!(form.priority, Some(Priority::High));
    }

    #[test]
    fn typing_goes_to_the_focused_text_field_only() {
        let mut form = TaskForm::creating();
        form.input('x');
        assert!(form.due_date.is_empty());

        form.focus = Field::DueDate;
        for c in "2025-01-01".chars() {
            form.input(c);
        }
        assert_eq!(form.due_date, "2025-01-01");
        form.backspace();
        assert_eq!(form.due_date, "2025-01-0");
    }

    #[test]
    fn focus_cycles_through_all_fields_and_wraps() {
        let mut form = TaskForm::creating();
        for expected in Field::ORDER.iter().skip(1) {
            form.focus_next();
            assert_eq!(form.focus, *expected);
        }
        form.focus_next();
        assert_eq!(form.focus, Field::AssignedTo);
        form.focus_prev();
        assert_eq!(form.focus, Field::Comments);
    }
}
