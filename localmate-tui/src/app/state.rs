use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Tasks,
    Timer,
    AddTask,
    ConfirmDelete,
}

/// Which task panel has focus in the Tasks view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane {
    Today,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient on-screen feedback, auto-dismissed by the event loop.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddTaskField {
    Title,
    Description,
    DueDate,
}

#[derive(Debug, Clone)]
pub struct AddTaskForm {
    pub title: TextInput,
    pub description: TextInput,
    pub due_date: TextInput,
    pub focused: AddTaskField,
}

impl AddTaskForm {
    pub fn new(default_due: &str) -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            due_date: TextInput::from_str(default_due),
            focused: AddTaskField::Title,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            AddTaskField::Title => &mut self.title,
            AddTaskField::Description => &mut self.description,
            AddTaskField::DueDate => &mut self.due_date,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            AddTaskField::Title => AddTaskField::Description,
            AddTaskField::Description => AddTaskField::DueDate,
            AddTaskField::DueDate => AddTaskField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused = match self.focused {
            AddTaskField::Title => AddTaskField::DueDate,
            AddTaskField::Description => AddTaskField::Title,
            AddTaskField::DueDate => AddTaskField::Description,
        };
    }
}

/// The task pending deletion while the confirmation dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub task_id: i64,
    pub title: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
