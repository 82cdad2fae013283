//! High-level planner API for editing a plan.
//!
//! [`Planner`] owns the current [`Plan`] and the id counter for new
//! entities. All mutations go through it; reading, laying out and
//! serializing borrow the plan.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Params      │    │   Operations    │    │      Plan       │
//! │ (CreateTask,    │───▶│ (plan_ops,      │───▶│   + id counter  │
//! │  TaskUpdate, …) │    │  task_ops, …)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates a [`Planner`], optionally from a saved plan file
//! - [`plan_ops`]: timeline configuration and resources
//! - [`task_ops`]: task bars
//! - [`marker_ops`]: milestones and vertical lines
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use planline_core::{params::CreateTask, PlannerBuilder};
//!
//! # async fn example() -> planline_core::Result<()> {
//! let mut planner = PlannerBuilder::new()
//!     .with_start_date(date(2024, 1, 1))
//!     .build()
//!     .await?;
//!
//! let task = planner.add_task(&CreateTask {
//!     name: Some("Design".to_string()),
//!     end_date: Some(date(2024, 1, 15)),
//!     ..Default::default()
//! });
//! assert_eq!(task.resource_id, planner.plan().resources.first().map(|r| r.id));
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::debug;

// Module declarations
pub mod builder;
pub mod marker_ops;
pub mod plan_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

use crate::{
    document::{PlanDocument, PlanPatch},
    error::Result,
    layout::{self, LayoutConfig, Scene},
    models::{Entity, Plan},
};

/// Main planner interface owning the plan being edited.
#[derive(Debug, Clone)]
pub struct Planner {
    plan: Plan,
    next_id: u64,
}

impl Planner {
    /// Wraps `plan`; new ids start above every id already in it.
    pub fn new(plan: Plan) -> Self {
        let next_id = following(plan.max_id());
        Self { plan, next_id }
    }

    /// The current plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Lays out the current plan.
    pub fn layout(&self, config: &LayoutConfig) -> Scene {
        layout::layout(&self.plan, config)
    }

    /// Document view of the current plan, stamped with `saved_at`.
    pub fn document(&self, saved_at: Timestamp) -> PlanDocument<'_> {
        PlanDocument::new(&self.plan, saved_at)
    }

    /// Serializes the current plan to JSON text.
    pub fn serialize(&self, saved_at: Timestamp) -> Result<String> {
        self.document(saved_at).to_json()
    }

    /// Merges a loaded patch into the plan and moves the id counter past
    /// every id the merged plan contains.
    pub fn apply_patch(&mut self, patch: PlanPatch) {
        let fields = patch.present_fields();
        self.plan = self.plan.merged(patch);

        let floor = following(self.plan.max_id());
        if floor > self.next_id {
            debug!("Re-seeding id counter from {} to {floor}", self.next_id);
            self.next_id = floor;
        }
        debug!("Merged fields {fields:?} into plan '{}'", self.plan.name);
    }

    /// Parses document text and merges it. On error the plan is untouched.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let patch = PlanPatch::from_json(text)?;
        self.apply_patch(patch);
        Ok(())
    }

    /// Hands out the next free id. Once the counter passes `u64::MAX` it
    /// restarts at 1 and skips ids the plan already uses.
    pub(crate) fn next_id(&mut self) -> u64 {
        let mut id = self.next_id;
        while self.plan.contains_id(id) {
            id = following(id);
        }
        self.next_id = following(id);
        id
    }
}

fn following(id: u64) -> u64 {
    id.checked_add(1).unwrap_or(1)
}

/// Applies `change` to the entity with `id`, returning the updated entity.
pub(crate) fn update_entity<T: Entity>(
    items: &mut [T],
    id: u64,
    change: impl FnOnce(&mut T),
) -> Option<&T> {
    let item = items.iter_mut().find(|item| item.id() == id)?;
    change(item);
    Some(item)
}

/// Removes and returns the entity with `id`.
pub(crate) fn remove_entity<T: Entity>(items: &mut Vec<T>, id: u64) -> Option<T> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}
