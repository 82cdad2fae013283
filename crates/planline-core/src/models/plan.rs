//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Entity, Milestone, Resource, Task, VerticalLine};

/// Maximum number of resources [`crate::Planner::add_resource`] accepts.
pub const MAX_RESOURCES: usize = 5;

/// Represents a complete plan: timeline configuration and its entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Display name of the plan
    pub name: String,

    /// Timeline origin; week 0 starts on this date
    pub start_date: Date,

    /// Horizontal extent of the timeline, in weeks (at least 1)
    pub num_weeks: u32,

    /// Number of stacked lanes (at least 1); lane 1 is the bottom one
    pub num_lines: u32,

    /// Resources in legend order
    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Task bars
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Milestone markers
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// User-defined vertical lines
    #[serde(default)]
    pub vertical_lines: Vec<VerticalLine>,
}

impl Plan {
    /// Default timeline extent of a new plan.
    pub const DEFAULT_WEEKS: u32 = 12;
    /// Default lane count of a new plan.
    pub const DEFAULT_LINES: u32 = 5;

    /// Creates an empty plan with the default extent.
    pub fn new(name: impl Into<String>, start_date: Date) -> Self {
        Self {
            name: name.into(),
            start_date,
            num_weeks: Self::DEFAULT_WEEKS,
            num_lines: Self::DEFAULT_LINES,
            resources: Vec::new(),
            tasks: Vec::new(),
            milestones: Vec::new(),
            vertical_lines: Vec::new(),
        }
    }

    /// Looks up a resource by id.
    pub fn resource(&self, id: u64) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Largest id used by any entity, or 0 for an empty plan.
    pub fn max_id(&self) -> u64 {
        let resources = self.resources.iter().map(Entity::id);
        let tasks = self.tasks.iter().map(Entity::id);
        let milestones = self.milestones.iter().map(Entity::id);
        let lines = self.vertical_lines.iter().map(Entity::id);

        resources
            .chain(tasks)
            .chain(milestones)
            .chain(lines)
            .max()
            .unwrap_or(0)
    }

    /// Whether any entity in the plan already uses `id`.
    pub fn contains_id(&self, id: u64) -> bool {
        self.resources.iter().any(|r| r.id == id)
            || self.tasks.iter().any(|t| t.id == id)
            || self.milestones.iter().any(|m| m.id == id)
            || self.vertical_lines.iter().any(|v| v.id == id)
    }

    /// Clamps a requested lane into `[1, num_lines]`.
    pub fn clamp_line(&self, line: i64) -> u32 {
        let top = i64::from(self.num_lines.max(1));
        // Bounded by `top`, which came from a u32.
        line.clamp(1, top) as u32
    }
}
