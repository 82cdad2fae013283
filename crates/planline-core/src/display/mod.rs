//! Display formatting for plans, entities, dates and operation results.
//!
//! Domain models implement [`std::fmt::Display`] as markdown (see
//! [`models`]); date wrappers in [`datetime`] are shared by the terminal
//! output and the timeline labels produced by [`crate::layout`]; result
//! wrappers in [`results`] format the outcome of CLI operations.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result & Date   │    │   Formatted     │
//! │ (Plan, Task, …) │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/SVG)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use jiff::civil::date;
//! use planline_core::{display::CreateResult, models::{Milestone, MilestoneKind}};
//!
//! let milestone = Milestone {
//!     id: 3,
//!     name: "Kick-off".to_string(),
//!     date: date(2024, 9, 2),
//!     kind: MilestoneKind::Meeting,
//!     line: None,
//! };
//! let output = CreateResult::new(milestone).to_string();
//! assert!(output.contains("Created milestone with ID: 3"));
//! assert!(output.contains("Kick-off (meeting): 02/09/2024"));
//! ```

pub mod datetime;
pub mod models;
pub mod results;

pub use datetime::{LongDate, SavedAt, ShortDate};
pub use results::{CreateResult, DeleteResult, EntityKind, UpdateResult};
