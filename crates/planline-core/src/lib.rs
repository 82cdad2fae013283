//! Core library for the planline timeline planner.
//!
//! A plan is a week-indexed timeline with stacked lanes holding task bars,
//! milestone markers and vertical date lines, colored by resource. This
//! crate owns the data model and its editing operations, the JSON document
//! format, the pure layout engine turning a plan into a positioned scene,
//! and an SVG surface to draw scenes on.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Planner    │──▶│    layout    │──▶│    Scene     │──▶│   Surface    │
//! │ (models, ops)│   │ (calendar)   │   │ (kurbo shapes│   │ (SvgSurface) │
//! └──────┬───────┘   └──────────────┘   │  + roles)    │   └──────────────┘
//!        │                              └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │ document +   │  JSON with patch-merge loading
//! │ store        │
//! └──────────────┘
//! ```
//!
//! - **Domain Models** ([`models`]): plain data, serde shape, and
//!   [`std::fmt::Display`] as markdown via [`display`]
//! - **Operations** ([`planner`]): every mutation, driven by [`params`]
//! - **Layout** ([`layout`]): deterministic and total; bad lanes are clamped
//!   and off-window entities culled
//! - **Rendering** ([`render`]): surfaces consume scenes
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use planline_core::{
//!     layout::LayoutConfig,
//!     params::{CreateMilestone, CreateTask},
//!     render::{Surface, SvgSurface},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> planline_core::Result<()> {
//! let mut planner = PlannerBuilder::new()
//!     .with_name("Launch")
//!     .with_start_date(date(2024, 1, 1))
//!     .build()
//!     .await?;
//!
//! planner.add_task(&CreateTask {
//!     name: Some("Build".to_string()),
//!     end_date: Some(date(2024, 2, 1)),
//!     ..Default::default()
//! });
//! planner.add_milestone(&CreateMilestone {
//!     name: Some("Release".to_string()),
//!     date: Some(date(2024, 2, 5)),
//!     ..Default::default()
//! });
//!
//! let scene = planner.layout(&LayoutConfig::default());
//! let mut surface = SvgSurface::new();
//! surface.draw(&scene)?;
//! println!("{}", surface.into_string());
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod display;
pub mod document;
pub mod error;
pub mod layout;
pub mod models;
pub mod params;
pub mod planner;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use calendar::Locale;
pub use display::{CreateResult, DeleteResult, UpdateResult};
pub use document::PlanPatch;
pub use error::{PlanlineError, Result};
pub use layout::{layout, LayoutConfig, Scene};
pub use models::{
    Color, Milestone, MilestoneKind, MilestoneUpdate, Plan, Resource, ResourceUpdate, Task,
    TaskUpdate, VerticalLine, VerticalLineUpdate,
};
pub use params::{ConfigurePlan, CreateMilestone, CreateResource, CreateTask, CreateVerticalLine};
pub use planner::{Planner, PlannerBuilder};
