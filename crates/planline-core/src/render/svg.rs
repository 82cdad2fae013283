//! SVG surface.

use std::fmt::{self, Write};

use kurbo::Rect;

use super::Surface;
use crate::{
    error::{PlanlineError, Result},
    layout::{Label, NodeRole, Scene, Shape, Stroke, TextAnchor},
    models::Color,
};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Writes scenes as standalone SVG documents.
///
/// Each node becomes one element whose `class` names its role, so styles
/// can target e.g. `.task-bar` or `.milestone-marker`.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    output: String,
    background: Option<Color>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints the whole canvas with `color` before the first node.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// SVG text of everything drawn so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn write_scene(&mut self, scene: &Scene) -> fmt::Result {
        let out = &mut self.output;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
            w = scene.width,
            h = scene.height,
        )?;
        if let Some(color) = self.background {
            writeln!(
                out,
                r#"  <rect width="100%" height="100%" fill="{color}"/>"#
            )?;
        }

        for node in &scene.nodes {
            let class = role_class(&node.role);
            match &node.shape {
                Shape::Rect {
                    rect,
                    fill,
                    opacity,
                    corner_radius,
                } => write_rect(out, class, *rect, *fill, *opacity, *corner_radius)?,
                Shape::Line { line, stroke } => {
                    write!(
                        out,
                        r#"  <line class="{class}" x1="{}" y1="{}" x2="{}" y2="{}""#,
                        line.p0.x, line.p0.y, line.p1.x, line.p1.y
                    )?;
                    write_stroke(out, stroke)?;
                    writeln!(out, "/>")?;
                }
                Shape::Circle { circle, fill } => writeln!(
                    out,
                    r#"  <circle class="{class}" cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
                    circle.center.x, circle.center.y, circle.radius
                )?,
                Shape::Polygon { points, fill } => {
                    let points: Vec<String> =
                        points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                    writeln!(
                        out,
                        r#"  <polygon class="{class}" points="{}" fill="{fill}"/>"#,
                        points.join(" ")
                    )?;
                }
                Shape::Text(label) => write_text(out, class, label)?,
            }
        }

        writeln!(out, "</svg>")
    }
}

impl Surface for SvgSurface {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        self.write_scene(scene)
            .map_err(|e| PlanlineError::Configuration {
                message: format!("Failed to write SVG: {e}"),
            })
    }
}

/// Reversed bars (end before start) are drawn over their absolute extent.
fn write_rect(
    out: &mut String,
    class: &str,
    rect: Rect,
    fill: Color,
    opacity: f64,
    corner_radius: f64,
) -> fmt::Result {
    let rect = rect.abs();
    writeln!(
        out,
        r#"  <rect class="{class}" x="{}" y="{}" width="{}" height="{}" rx="{corner_radius}" fill="{fill}" opacity="{opacity}"/>"#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}

fn write_stroke(out: &mut String, stroke: &Stroke) -> fmt::Result {
    write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color, stroke.width
    )?;
    if let Some([dash, gap]) = stroke.dash {
        write!(out, r#" stroke-dasharray="{dash},{gap}""#)?;
    }
    Ok(())
}

fn write_text(out: &mut String, class: &str, label: &Label) -> fmt::Result {
    write!(
        out,
        r#"  <text class="{class}" x="{}" y="{}" font-size="{}""#,
        label.position.x, label.position.y, label.size
    )?;
    if label.bold {
        write!(out, r#" font-weight="bold""#)?;
    }
    if let Some(fill) = label.fill {
        write!(out, r#" fill="{fill}""#)?;
    }
    if label.anchor == TextAnchor::Middle {
        write!(out, r#" text-anchor="middle""#)?;
    }
    writeln!(out, ">{}</text>", escape(&label.content))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn role_class(role: &NodeRole) -> &'static str {
    match role {
        NodeRole::LegendCaption => "legend-caption",
        NodeRole::LegendSwatch { .. } => "legend-swatch",
        NodeRole::LegendLabel { .. } => "legend-label",
        NodeRole::LaneGuide { .. } => "lane-guide",
        NodeRole::LaneLabel { .. } => "lane-label",
        NodeRole::Axis => "axis",
        NodeRole::MilestoneGuide { .. } => "milestone-guide",
        NodeRole::VerticalLine { .. } => "vertical-line",
        NodeRole::TaskBar { .. } => "task-bar",
        NodeRole::TaskName { .. } => "task-name",
        NodeRole::TaskEndDate { .. } => "task-end-date",
        NodeRole::WeekTick { .. } => "week-tick",
        NodeRole::WeekNumber { .. } => "week-number",
        NodeRole::MonthLabel { .. } => "month-label",
        NodeRole::MilestoneMarker { .. } => "milestone-marker",
        NodeRole::MilestoneName { .. } => "milestone-name",
        NodeRole::MilestoneDate { .. } => "milestone-date",
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        layout::{layout, LayoutConfig},
        models::{Plan, Resource, Task},
    };

    fn render(plan: &Plan) -> String {
        let mut surface = SvgSurface::new();
        surface
            .draw(&layout(plan, &LayoutConfig::default()))
            .unwrap();
        surface.into_string()
    }

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new("SVG", date(2024, 1, 1));
        plan.num_weeks = 4;
        plan.num_lines = 2;
        plan.resources.push(Resource {
            id: 1,
            name: "R&D <core>".to_string(),
            color: Color::rgb(0xf1, 0xaa, 0xd0),
        });
        plan
    }

    #[test]
    fn test_document_frame() {
        let svg = render(&create_test_plan());
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="280" viewBox="0 0 1200 280""#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = render(&create_test_plan());
        assert!(svg.contains(">R&amp;D &lt;core&gt;</text>"));
        assert!(!svg.contains("<core>"));
    }

    #[test]
    fn test_dashed_lane_guides() {
        let svg = render(&create_test_plan());
        assert!(svg.contains(
            r##"<line class="lane-guide" x1="50" y1="170" x2="1150" y2="170" stroke="#e0e0e0" stroke-width="1" stroke-dasharray="3,3"/>"##
        ));
        assert!(svg.contains(r#"class="lane-label""#));
    }

    #[test]
    fn test_reversed_bar_has_positive_width() {
        let mut plan = create_test_plan();
        plan.tasks.push(Task {
            id: 2,
            name: "Backwards".to_string(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 1, 8),
            resource_id: Some(1),
            line: 1,
        });
        let svg = render(&plan);
        assert!(svg.contains(
            r##"<rect class="task-bar" x="462.5" y="155" width="275" height="30" rx="5" fill="#f1aad0" opacity="0.7"/>"##
        ));
    }

    #[test]
    fn test_background_is_painted_first() {
        let mut surface = SvgSurface::new().with_background(Color::WHITE);
        surface
            .draw(&layout(&create_test_plan(), &LayoutConfig::default()))
            .unwrap();
        let svg = surface.as_str();
        let background = svg.find(r##"fill="#ffffff""##).unwrap();
        let legend = svg.find("legend-caption").unwrap();
        assert!(background < legend);
    }
}
