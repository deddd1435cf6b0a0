//! Name validation for lists and todos.
//!
//! Rules:
//! - List names are 1 to 50 characters and unique among the existing lists
//! - Todo names are 1 to 100 characters
//!
//! Length is checked before uniqueness, so a duplicate name that is also too long
//! reports the length error. Callers trim input before validating.

use crate::error::{Subject, ValidationError};
use crate::model::{List, LIST_NAME_MAX, LIST_NAME_MIN, TODO_NAME_MAX, TODO_NAME_MIN};

/// Validates a list name against the lists it must not collide with.
///
/// # Examples
/// ```
/// use listsapp::model::List;
/// use listsapp::validation::validate_list_name;
///
/// let lists = vec![List::new("Work")];
/// assert!(validate_list_name("Home", &lists).is_ok());
/// assert!(validate_list_name("Work", &lists).is_err());
/// assert!(validate_list_name("work", &lists).is_ok());
/// assert!(validate_list_name("", &lists).is_err());
/// ```
pub fn validate_list_name<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a List>,
) -> Result<(), ValidationError> {
    check_length(name, Subject::List, LIST_NAME_MIN, LIST_NAME_MAX)?;

    if existing.into_iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName);
    }

    Ok(())
}

/// Validates a todo name.
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    check_length(name, Subject::Todo, TODO_NAME_MIN, TODO_NAME_MAX)
}

fn check_length(
    name: &str,
    subject: Subject,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength { subject, min, max })
    }
}
