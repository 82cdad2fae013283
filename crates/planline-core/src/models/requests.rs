//! Typed update patches for plan entities.
//!
//! Each entity kind has its own patch type enumerating the fields that may be
//! changed. `None` leaves a field untouched. For fields that are themselves
//! optional (`Task::resource_id`, `Milestone::line`) the patch holds an
//! `Option<Option<_>>`: `Some(None)` clears the field.

use jiff::civil::Date;

use super::{Color, Milestone, MilestoneKind, Resource, Task, VerticalLine};

/// Changes to apply to a [`Resource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    pub color: Option<Color>,
}

/// Changes to apply to a [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub resource_id: Option<Option<u64>>,
    pub line: Option<i64>,
}

/// Changes to apply to a [`Milestone`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneUpdate {
    pub name: Option<String>,
    pub date: Option<Date>,
    pub kind: Option<MilestoneKind>,
    pub line: Option<Option<i64>>,
}

/// Changes to apply to a [`VerticalLine`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerticalLineUpdate {
    pub date: Option<Date>,
}

impl ResourceUpdate {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }

    /// Names of the fields the patch sets.
    pub fn changed_fields(&self) -> Vec<String> {
        present(&[("name", self.name.is_some()), ("color", self.color.is_some())])
    }

    /// Writes the present fields onto `resource`.
    pub fn apply(self, resource: &mut Resource) {
        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(color) = self.color {
            resource.color = color;
        }
    }
}

impl TaskUpdate {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.resource_id.is_none()
            && self.line.is_none()
    }

    /// Names of the fields the patch sets.
    pub fn changed_fields(&self) -> Vec<String> {
        present(&[
            ("name", self.name.is_some()),
            ("start date", self.start_date.is_some()),
            ("end date", self.end_date.is_some()),
            ("resource", self.resource_id.is_some()),
            ("line", self.line.is_some()),
        ])
    }

    /// Writes the present fields onto `task`.
    pub fn apply(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(start_date) = self.start_date {
            task.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            task.end_date = end_date;
        }
        if let Some(resource_id) = self.resource_id {
            task.resource_id = resource_id;
        }
        if let Some(line) = self.line {
            task.line = line;
        }
    }
}

impl MilestoneUpdate {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.kind.is_none() && self.line.is_none()
    }

    /// Names of the fields the patch sets.
    pub fn changed_fields(&self) -> Vec<String> {
        present(&[
            ("name", self.name.is_some()),
            ("date", self.date.is_some()),
            ("type", self.kind.is_some()),
            ("line", self.line.is_some()),
        ])
    }

    /// Writes the present fields onto `milestone`.
    pub fn apply(self, milestone: &mut Milestone) {
        if let Some(name) = self.name {
            milestone.name = name;
        }
        if let Some(date) = self.date {
            milestone.date = date;
        }
        if let Some(kind) = self.kind {
            milestone.kind = kind;
        }
        if let Some(line) = self.line {
            milestone.line = line;
        }
    }
}

impl VerticalLineUpdate {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }

    /// Names of the fields the patch sets.
    pub fn changed_fields(&self) -> Vec<String> {
        present(&[("date", self.date.is_some())])
    }

    /// Writes the present fields onto `line`.
    pub fn apply(self, line: &mut VerticalLine) {
        if let Some(date) = self.date {
            line.date = date;
        }
    }
}

fn present(fields: &[(&str, bool)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| (*name).to_string())
        .collect()
}
