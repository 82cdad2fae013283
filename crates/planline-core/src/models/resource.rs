//! Resource model definition.

use serde::{Deserialize, Serialize};

use super::Color;

/// A named, colored category that task bars are painted with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    /// Unique identifier within the plan
    pub id: u64,

    /// Label shown in the legend
    pub name: String,

    /// Fill color of the legend swatch and of the resource's task bars
    pub color: Color,
}

impl Resource {
    /// Color given to resources added without one.
    pub const DEFAULT_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
}
