use crate::index::{ListIndex, TodoIndex};
use thiserror::Error;

/// What a name belongs to, used to phrase validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    List,
    Todo,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::List => write!(f, "List"),
            Subject::Todo => write!(f, "Todo"),
        }
    }
}

/// A rejected name. The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{subject} name must be between {min} and {max} characters!")]
    InvalidLength {
        subject: Subject,
        min: usize,
        max: usize,
    },

    #[error("List name must be unique!")]
    DuplicateName,
}

/// An index that does not address anything in the store (anymore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("The specified list was not found.")]
    List(ListIndex),

    #[error("The specified todo was not found.")]
    Todo(ListIndex, TodoIndex),
}

#[derive(Error, Debug)]
pub enum ListsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ListsError {
    /// True for errors the user can fix by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ListsError::Validation(_) | ListsError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ListsError>;
