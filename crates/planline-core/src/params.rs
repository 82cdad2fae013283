//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface driving a
//! [`crate::Planner`] and carry no framework-specific derives. Interface
//! layers define their own wrappers (clap `Args` in the CLI) and convert
//! into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Creation parameters leave most fields optional; the planner fills in the
//! same defaults for every interface (see each field).

use jiff::civil::Date;

use crate::models::{Color, MilestoneKind};

/// Parameters for changing the timeline configuration.
///
/// Every field is optional; present fields are validated together before
/// any of them is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurePlan {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    /// Must be at least 1
    pub num_weeks: Option<u32>,
    /// Must be at least 1
    pub num_lines: Option<u32>,
}

impl ConfigurePlan {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.num_weeks.is_none()
            && self.num_lines.is_none()
    }
}

/// Parameters for adding a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateResource {
    /// Defaults to `Resource N`, N being the new resource count
    pub name: Option<String>,
    /// Defaults to [`crate::models::Resource::DEFAULT_COLOR`]
    pub color: Option<Color>,
}

/// Parameters for adding a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTask {
    /// Defaults to `New task`
    pub name: Option<String>,
    /// Defaults to the plan start date
    pub start_date: Option<Date>,
    /// Defaults to the task start date
    pub end_date: Option<Date>,
    /// Defaults to the first resource, if any
    pub resource_id: Option<u64>,
    /// Defaults to lane 1
    pub line: Option<i64>,
}

/// Parameters for adding a milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMilestone {
    /// Defaults to `New milestone`
    pub name: Option<String>,
    /// Defaults to the plan start date
    pub date: Option<Date>,
    /// Defaults to [`MilestoneKind::Meeting`]
    pub kind: Option<MilestoneKind>,
    /// Defaults to lane 1
    pub line: Option<i64>,
}

/// Parameters for adding a vertical line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVerticalLine {
    /// Defaults to the plan start date
    pub date: Option<Date>,
}
