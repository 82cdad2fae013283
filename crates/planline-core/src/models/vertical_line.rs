//! Vertical reference line model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A user-placed, full-height marker at a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerticalLine {
    /// Unique identifier within the plan
    pub id: u64,

    /// Date the line is drawn at
    pub date: Date,
}
