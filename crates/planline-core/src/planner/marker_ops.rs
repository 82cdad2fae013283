//! Milestone and vertical line operations for the Planner.

use super::{remove_entity, update_entity, Planner};
use crate::{
    models::{Milestone, MilestoneUpdate, VerticalLine, VerticalLineUpdate},
    params::{CreateMilestone, CreateVerticalLine},
};

impl Planner {
    /// Appends a milestone with a fresh id.
    ///
    /// Defaults: name `New milestone`, the plan start date, kind `meeting`,
    /// lane 1.
    pub fn add_milestone(&mut self, params: &CreateMilestone) -> Milestone {
        let milestone = Milestone {
            id: self.next_id(),
            name: params
                .name
                .clone()
                .unwrap_or_else(|| "New milestone".to_string()),
            date: params.date.unwrap_or(self.plan.start_date),
            kind: params.kind.clone().unwrap_or_default(),
            line: Some(params.line.unwrap_or(1)),
        };
        self.plan.milestones.push(milestone.clone());
        milestone
    }

    /// Updates a milestone; `None` if no milestone has `id`.
    pub fn update_milestone(&mut self, id: u64, update: MilestoneUpdate) -> Option<&Milestone> {
        update_entity(&mut self.plan.milestones, id, |milestone| {
            update.apply(milestone)
        })
    }

    pub fn delete_milestone(&mut self, id: u64) -> Option<Milestone> {
        remove_entity(&mut self.plan.milestones, id)
    }

    /// Appends a vertical line, by default on the plan start date.
    pub fn add_vertical_line(&mut self, params: &CreateVerticalLine) -> VerticalLine {
        let line = VerticalLine {
            id: self.next_id(),
            date: params.date.unwrap_or(self.plan.start_date),
        };
        self.plan.vertical_lines.push(line.clone());
        line
    }

    pub fn update_vertical_line(
        &mut self,
        id: u64,
        update: VerticalLineUpdate,
    ) -> Option<&VerticalLine> {
        update_entity(&mut self.plan.vertical_lines, id, |line| update.apply(line))
    }

    pub fn delete_vertical_line(&mut self, id: u64) -> Option<VerticalLine> {
        remove_entity(&mut self.plan.vertical_lines, id)
    }
}
