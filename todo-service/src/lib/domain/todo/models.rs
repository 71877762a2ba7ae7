use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::page::Page;
use crate::domain::user::models::UserId;
use crate::todo::errors::TodoStateError;

/// A to-do owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Overwrite the fields present in `patch` and bump `updated_at`.
    pub fn apply(&mut self, patch: TodoPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        self.updated_at = now;
    }
}

/// Database-generated to-do identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workflow state of a to-do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoState {
    Draft,
    Todo,
    Doing,
    Done,
    Trash,
}

impl TodoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoState::Draft => "draft",
            TodoState::Todo => "todo",
            TodoState::Doing => "doing",
            TodoState::Done => "done",
            TodoState::Trash => "trash",
        }
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoState {
    type Err = TodoStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TodoState::Draft),
            "todo" => Ok(TodoState::Todo),
            "doing" => Ok(TodoState::Doing),
            "done" => Ok(TodoState::Done),
            "trash" => Ok(TodoState::Trash),
            other => Err(TodoStateError::Unknown(other.to_string())),
        }
    }
}

/// A to-do row that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Command to create a to-do for the calling user.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: String,
    pub state: TodoState,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
}

/// Listing filter. Title and description match by substring, state exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
    pub page: Page,
}
