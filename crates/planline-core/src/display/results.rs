//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging and entity display.

use std::fmt;

use crate::models::{Entity, Milestone, Resource, Task, VerticalLine};

/// Human-facing name of an entity kind, used in operation messages.
pub trait EntityKind: Entity {
    const KIND: &'static str;
}

macro_rules! entity_kind {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl EntityKind for $ty {
                const KIND: &'static str = $name;
            }
        )*
    };
}

entity_kind!(
    Resource => "resource",
    Task => "task",
    Milestone => "milestone",
    VerticalLine => "vertical line",
);

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use planline_core::{display::CreateResult, models::VerticalLine};
///
/// let line = VerticalLine { id: 7, date: date(2024, 5, 6) };
/// let output = CreateResult::new(line).to_string();
/// assert!(output.starts_with("Created vertical line with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: EntityKind + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of fields that changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: EntityKind + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: EntityKind> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} with ID: {}", T::KIND, self.resource.id())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Color;

    #[test]
    fn test_update_result_lists_changes() {
        let resource = Resource {
            id: 2,
            name: "QA".to_string(),
            color: Color::rgb(0xd8, 0xd8, 0xd8),
        };
        let output =
            UpdateResult::with_changes(resource, vec!["name".to_string()]).to_string();
        assert!(output.starts_with("Updated resource with ID: 2"));
        assert!(output.contains("Changes made:\n- name"));
        assert!(output.contains("QA (`#d8d8d8`)"));
    }

    #[test]
    fn test_delete_result() {
        let task = Task {
            id: 9,
            name: "Gone".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 2),
            resource_id: None,
            line: 1,
        };
        assert_eq!(
            DeleteResult::new(task).to_string(),
            "Deleted task with ID: 9\n"
        );
    }
}
