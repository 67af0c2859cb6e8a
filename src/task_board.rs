use crossterm::event::KeyCode;

use crate::form::{FormMode, TaskForm};
use crate::store::TaskStore;
use crate::task::Task;

/// The whole screen: the store, the row cursor, and whichever popup (form or
/// delete confirmation) is open, if any. Key events route to the popup first.
#[derive(Debug)]
pub struct TaskBoard {
    pub store: TaskStore,
    pub form: Option<TaskForm>,
    /// Id awaiting the user's yes/no before it is deleted.
    pub confirm_delete: Option<u64>,
    pub selected: usize,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::with_store(TaskStore::seeded())
    }

    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store,
            form: None,
            confirm_delete: None,
            selected: 0,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    /// One key event, handled to completion. Returns true when the app
    /// should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.confirm_delete.is_some() {
            self.handle_confirm_key(code);
            false
        } else if self.form.is_some() {
            self.handle_form_key(code);
            false
        } else {
            self.handle_table_key(code)
        }
    }

    fn handle_confirm_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(id) = self.confirm_delete.take() {
                    self.store.delete(id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm_delete = None;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                // Cancel discards the whole session, edits included.
                self.form = None;
            }
            KeyCode::Enter => {
                if let Some(draft) = form.submit() {
                    match form.mode {
                        FormMode::Creating => {
                            self.store.create(draft);
                        }
                        FormMode::Editing(id) => {
                            self.store.update(id, draft);
                        }
                    }
                    self.form = None;
                    self.clamp_selection();
                }
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.cycle(-1),
            KeyCode::Right => form.cycle(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input(c),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('n') => self.form = Some(TaskForm::creating()),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(task) = self.selected_task() {
                    self.form = Some(TaskForm::editing(task));
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.selected_task() {
                    self.confirm_delete = Some(task.id);
                }
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.store.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        false
    }

    /// There is no external data source; the board is the source of truth.
    fn refresh(&mut self) {}

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}
