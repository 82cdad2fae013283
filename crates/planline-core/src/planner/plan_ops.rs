//! Timeline configuration and resource operations for the Planner.

use jiff::civil::Date;
use log::debug;

use super::{remove_entity, update_entity, Planner};
use crate::{
    error::{PlanlineError, Result},
    models::{Resource, ResourceUpdate, MAX_RESOURCES},
    params::{ConfigurePlan, CreateResource},
};

impl Planner {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.plan.name = name.into();
    }

    pub fn set_start_date(&mut self, start_date: Date) {
        self.plan.start_date = start_date;
    }

    /// Sets the number of weeks on the timeline.
    ///
    /// # Errors
    ///
    /// Returns `PlanlineError::InvalidInput` for zero.
    pub fn set_num_weeks(&mut self, num_weeks: u32) -> Result<()> {
        validate_count("num_weeks", num_weeks)?;
        self.plan.num_weeks = num_weeks;
        Ok(())
    }

    /// Sets the number of lanes.
    ///
    /// # Errors
    ///
    /// Returns `PlanlineError::InvalidInput` for zero.
    pub fn set_num_lines(&mut self, num_lines: u32) -> Result<()> {
        validate_count("num_lines", num_lines)?;
        self.plan.num_lines = num_lines;
        Ok(())
    }

    /// Applies several configuration changes at once and returns the names
    /// of the fields that were set. Nothing is applied if any value is
    /// invalid.
    pub fn configure(&mut self, params: &ConfigurePlan) -> Result<Vec<String>> {
        if let Some(num_weeks) = params.num_weeks {
            validate_count("num_weeks", num_weeks)?;
        }
        if let Some(num_lines) = params.num_lines {
            validate_count("num_lines", num_lines)?;
        }

        let mut changes = Vec::new();
        if let Some(name) = &params.name {
            self.set_name(name.clone());
            changes.push("name".to_string());
        }
        if let Some(start_date) = params.start_date {
            self.set_start_date(start_date);
            changes.push("start date".to_string());
        }
        if let Some(num_weeks) = params.num_weeks {
            self.plan.num_weeks = num_weeks;
            changes.push("weeks".to_string());
        }
        if let Some(num_lines) = params.num_lines {
            self.plan.num_lines = num_lines;
            changes.push("lines".to_string());
        }
        Ok(changes)
    }

    /// Appends a resource, unless the plan already holds the maximum.
    ///
    /// Returns `None` without changing anything when the plan has
    /// [`MAX_RESOURCES`] resources.
    pub fn add_resource(&mut self, params: &CreateResource) -> Option<Resource> {
        if self.plan.resources.len() >= MAX_RESOURCES {
            debug!("Resource limit of {MAX_RESOURCES} reached, not adding");
            return None;
        }

        let position = self.plan.resources.len() + 1;
        let resource = Resource {
            id: self.next_id(),
            name: params
                .name
                .clone()
                .unwrap_or_else(|| format!("Resource {position}")),
            color: params.color.unwrap_or(Resource::DEFAULT_COLOR),
        };
        self.plan.resources.push(resource.clone());
        Some(resource)
    }

    /// Updates a resource; `None` if no resource has `id`.
    pub fn update_resource(&mut self, id: u64, update: ResourceUpdate) -> Option<&Resource> {
        update_entity(&mut self.plan.resources, id, |resource| update.apply(resource))
    }

    /// Removes a resource. Tasks referring to it keep the dangling id and
    /// are drawn with the fallback color.
    pub fn delete_resource(&mut self, id: u64) -> Option<Resource> {
        remove_entity(&mut self.plan.resources, id)
    }
}

fn validate_count(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(PlanlineError::invalid_input(field).with_reason("must be at least 1"));
    }
    Ok(())
}
