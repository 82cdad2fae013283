//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::{civil::Date, Zoned};
use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::{Color, Plan, Resource},
    store,
};

/// Resources every fresh plan starts with.
const DEFAULT_RESOURCES: [(&str, Color); 3] = [
    ("Resource 1", Color::rgb(0xf1, 0xaa, 0xd0)),
    ("Resource 2", Color::rgb(0xbc, 0xe2, 0x95)),
    ("Resource 3", Color::rgb(0xd8, 0xd8, 0xd8)),
];

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    name: String,
    start_date: Option<Date>,
    num_weeks: u32,
    num_lines: u32,
    default_resources: bool,
    plan_file: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            name: "My plan".to_string(),
            start_date: None,
            num_weeks: Plan::DEFAULT_WEEKS,
            num_lines: Plan::DEFAULT_LINES,
            default_resources: true,
            plan_file: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the timeline origin. Defaults to today in the system timezone.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the number of weeks; zero is raised to one.
    pub fn with_weeks(mut self, num_weeks: u32) -> Self {
        self.num_weeks = num_weeks.max(1);
        self
    }

    /// Sets the number of lanes; zero is raised to one.
    pub fn with_lines(mut self, num_lines: u32) -> Self {
        self.num_lines = num_lines.max(1);
        self
    }

    /// Starts from an empty resource list instead of the three defaults.
    pub fn without_default_resources(mut self) -> Self {
        self.default_resources = false;
        self
    }

    /// Merges a saved plan file over the fresh plan when the file exists.
    ///
    /// A missing file is not an error; the planner then starts fresh.
    pub fn with_plan_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the planner, loading the plan file if one was given.
    ///
    /// # Errors
    ///
    /// Returns `PlanlineError::FileSystem` if the plan file exists but cannot
    /// be read, and `PlanlineError::InvalidFormat` if it is not a JSON object.
    pub async fn build(self) -> Result<Planner> {
        let start_date = self.start_date.unwrap_or_else(|| Zoned::now().date());
        let mut plan = Plan::new(self.name, start_date);
        plan.num_weeks = self.num_weeks;
        plan.num_lines = self.num_lines;

        if self.default_resources {
            plan.resources = DEFAULT_RESOURCES
                .iter()
                .zip(1..)
                .map(|(&(name, color), id)| Resource {
                    id,
                    name: name.to_string(),
                    color,
                })
                .collect();
        }

        let mut planner = Planner::new(plan);

        if let Some(path) = self.plan_file {
            if store::exists(&path).await? {
                let patch = store::load_patch(&path).await?;
                planner.apply_patch(patch);
            } else {
                debug!("Plan file {} does not exist yet", path.display());
            }
        }

        Ok(planner)
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
