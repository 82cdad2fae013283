//! Drawing scenes onto surfaces.
//!
//! A [`Surface`] consumes a laid-out [`Scene`]. The crate ships
//! [`SvgSurface`], which writes standalone SVG text; other targets only
//! need to implement [`Surface::draw`].
//!
//! [`export`] draws the scene without its editing guides (lane grid lines
//! and lane labels), which is what saved images contain. Drawing the full
//! scene is a plain `surface.draw(&scene)`.
//!
//! ```rust
//! use jiff::civil::date;
//! use planline_core::{
//!     layout::{layout, LayoutConfig},
//!     models::Plan,
//!     render::{export, SvgSurface},
//! };
//!
//! let plan = Plan::new("Roadmap", date(2024, 1, 1));
//! let scene = layout(&plan, &LayoutConfig::default());
//!
//! let mut surface = SvgSurface::new();
//! export(&scene, Some(&mut surface))?;
//! let svg = surface.into_string();
//! assert!(svg.starts_with("<svg"));
//! assert!(!svg.contains(">L1<"));
//! # Ok::<(), planline_core::PlanlineError>(())
//! ```

mod svg;

use log::debug;

pub use svg::SvgSurface;

use crate::{
    error::{PlanlineError, Result},
    layout::Scene,
};

/// A drawing target for scenes.
pub trait Surface {
    /// Draws every node of `scene` in order.
    fn draw(&mut self, scene: &Scene) -> Result<()>;
}

/// Draws `scene` without lane guides onto `surface`.
///
/// # Errors
///
/// Returns `PlanlineError::MissingCollaborator` when no surface is given;
/// otherwise whatever the surface reports.
pub fn export(scene: &Scene, surface: Option<&mut dyn Surface>) -> Result<()> {
    let surface = surface.ok_or_else(|| PlanlineError::missing_collaborator("Drawing surface"))?;
    let exported = scene.without_guides();
    debug!(
        "Exporting {} of {} scene nodes",
        exported.nodes.len(),
        scene.nodes.len()
    );
    surface.draw(&exported)
}
