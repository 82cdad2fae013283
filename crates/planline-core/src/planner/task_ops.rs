//! Task operations for the Planner.

use super::{remove_entity, update_entity, Planner};
use crate::{
    models::{Task, TaskUpdate},
    params::CreateTask,
};

impl Planner {
    /// Appends a task with a fresh id.
    ///
    /// Unset fields default to: name `New task`, both dates on the plan
    /// start date (or the end on the given start), the first resource and
    /// lane 1. The task is stored as given; dates and lanes outside the
    /// timeline are only handled at layout time.
    pub fn add_task(&mut self, params: &CreateTask) -> Task {
        let start_date = params.start_date.unwrap_or(self.plan.start_date);
        let task = Task {
            id: self.next_id(),
            name: params.name.clone().unwrap_or_else(|| "New task".to_string()),
            start_date,
            end_date: params.end_date.unwrap_or(start_date),
            resource_id: params
                .resource_id
                .or_else(|| self.plan.resources.first().map(|r| r.id)),
            line: params.line.unwrap_or(1),
        };
        self.plan.tasks.push(task.clone());
        task
    }

    /// Updates a task; `None` if no task has `id`.
    pub fn update_task(&mut self, id: u64, update: TaskUpdate) -> Option<&Task> {
        update_entity(&mut self.plan.tasks, id, |task| update.apply(task))
    }

    pub fn delete_task(&mut self, id: u64) -> Option<Task> {
        remove_entity(&mut self.plan.tasks, id)
    }
}
