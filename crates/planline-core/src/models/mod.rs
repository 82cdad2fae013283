//! Data models for plans and the entities drawn on their timeline.
//!
//! A [`Plan`] is the root aggregate: timeline configuration plus four entity
//! collections ([`Resource`], [`Task`], [`Milestone`], [`VerticalLine`]).
//! Display implementations live in [`crate::display`], layout in
//! [`crate::layout`]; the types here carry data and serde shape only.
//!
//! # Lanes
//!
//! Tasks and milestones sit on numbered lanes. Lane 1 is the bottom lane,
//! closest to the axis, and lane `num_lines` the top one. Lane numbers are
//! stored exactly as given and only clamped when a scene is laid out.
//!
//! # Serialized shape
//!
//! All models serialize with camelCase keys, dates as `YYYY-MM-DD` and colors
//! as `#rrggbb`, which is the persisted document format read by
//! [`crate::document`].
//!
//! ```rust
//! use planline_core::models::{Color, Resource};
//!
//! let resource = Resource {
//!     id: 1,
//!     name: "Design".to_string(),
//!     color: Color::rgb(0xf1, 0xaa, 0xd0),
//! };
//! let json = serde_json::to_string(&resource).unwrap();
//! assert_eq!(json, r##"{"id":1,"name":"Design","color":"#f1aad0"}"##);
//! ```

mod color;
mod milestone;
mod plan;
mod requests;
mod resource;
mod task;
mod vertical_line;


pub use color::Color;
pub use milestone::{Milestone, MilestoneKind};
pub use plan::{Plan, MAX_RESOURCES};
pub use requests::{MilestoneUpdate, ResourceUpdate, TaskUpdate, VerticalLineUpdate};
pub use resource::Resource;
pub use task::Task;
pub use vertical_line::VerticalLine;

/// Anything stored in a plan collection and addressed by id.
pub trait Entity {
    /// Identifier, unique within its collection.
    fn id(&self) -> u64;
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> u64 {
                    self.id
                }
            }
        )*
    };
}

impl_entity!(Resource, Task, Milestone, VerticalLine);
