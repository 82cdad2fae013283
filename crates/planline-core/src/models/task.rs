//! Task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A dated bar drawn on one lane of the timeline.
///
/// `start_date` and `end_date` are not ordered: a task whose end precedes
/// its start is legal and is laid out as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the plan
    pub id: u64,

    /// Label drawn inside the bar
    pub name: String,

    /// Date the bar starts at
    pub start_date: Date,

    /// Date the bar ends at
    pub end_date: Date,

    /// Weak reference to a [`super::Resource`]; may point to nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,

    /// Lane number, clamped to the plan's lanes at layout time
    pub line: i64,
}
