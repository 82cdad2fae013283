//! Timeline layout engine.
//!
//! [`layout`] maps a [`Plan`] onto a [`Scene`]: task bars, milestone markers,
//! vertical lines, lane guides, week ticks and labels, all positioned on a
//! week-indexed horizontal axis with stacked lanes.
//!
//! The function is pure and total. Out-of-range lanes are clamped and
//! entities outside the visible weeks are culled; nothing is rejected.
//!
//! ```text
//!  y
//!  15   legend
//!  50   ┬ top of vertical lines
//! 130   ├── lane N (top)
//! 170   ├── lane N-1
//!  ..   ├── ...
//!       ├── lane 1 (bottom)
//! axis  ●───●───●───●  week ticks, ISO week numbers, month labels below
//! ```

mod markers;
mod scene;


use kurbo::{Circle, Line, Point, Rect};
use log::debug;

pub use markers::Marker;
pub use scene::{Label, NodeRole, Scene, SceneNode, Shape, Stroke, TextAnchor};

use crate::{
    calendar::{iso_week_number, week_offset, week_start, Locale, MonthLabels},
    display::{LongDate, ShortDate},
    models::{Color, Milestone, Plan, Task},
};

const TEXT: Color = Color::rgb(0x33, 0x33, 0x33);
const MUTED: Color = Color::rgb(0x66, 0x66, 0x66);
const GRID: Color = Color::rgb(0xe0, 0xe0, 0xe0);
const MILESTONE_GUIDE: Color = Color::rgb(0x99, 0x99, 0x99);
const USER_LINE: Color = Color::rgb(0x4a, 0x4a, 0x4a);

/// Geometry constants and locale of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Space left of week 0, holding the lane labels
    pub left_margin: f64,
    /// Target drawing width the weeks are fitted into
    pub reference_width: f64,
    /// Part of `reference_width` not available to weeks
    pub label_reserve: f64,
    /// Lower bound for the width of one week
    pub min_week_width: f64,
    /// Y of the topmost lane
    pub base_y: f64,
    /// Vertical distance between lanes
    pub lane_height: f64,
    /// Language of month names and fixed labels
    pub locale: Locale,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_margin: 50.0,
            reference_width: 1200.0,
            label_reserve: 100.0,
            min_week_width: 30.0,
            base_y: 130.0,
            lane_height: 40.0,
            locale: Locale::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Plan-specific projection from dates and lanes to scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub week_width: f64,
    pub num_weeks: u32,
    pub num_lines: u32,
    left_margin: f64,
    base_y: f64,
    lane_height: f64,
}

impl Geometry {
    const LEGEND_Y: f64 = 15.0;
    const GUIDE_TOP: f64 = 50.0;
    const GUIDE_OVERHANG: f64 = 50.0;
    const LEGEND_START: f64 = 130.0;
    const LEGEND_PITCH: f64 = 150.0;

    pub fn new(plan: &Plan, config: &LayoutConfig) -> Self {
        let num_weeks = plan.num_weeks.max(1);
        let available = config.reference_width - config.label_reserve;
        let week_width = (available / f64::from(num_weeks)).max(config.min_week_width);

        Self {
            week_width,
            num_weeks,
            num_lines: plan.num_lines.max(1),
            left_margin: config.left_margin,
            base_y: config.base_y,
            lane_height: config.lane_height,
        }
    }

    /// Scene width: all weeks plus margins.
    pub fn width(&self) -> f64 {
        f64::from(self.num_weeks) * self.week_width + 100.0
    }

    /// Scene height: all lanes plus legend and axis labels.
    pub fn height(&self) -> f64 {
        f64::from(self.num_lines) * self.lane_height + 200.0
    }

    /// Y of lane `lane` (1 = bottom). Higher lanes get smaller y.
    pub fn lane_y(&self, lane: u32) -> f64 {
        let from_top = f64::from(self.num_lines) - f64::from(lane);
        self.base_y + from_top * self.lane_height
    }

    /// Y of the main axis, below every lane.
    pub fn axis_y(&self) -> f64 {
        self.base_y + f64::from(self.num_lines) * self.lane_height
    }

    /// X of the centre of the week cell at `offset`.
    pub fn center_x(&self, offset: f64) -> f64 {
        self.left_margin + offset * self.week_width + self.week_width / 2.0
    }

    /// X where the drawn weeks end.
    pub fn right_x(&self) -> f64 {
        self.left_margin + f64::from(self.num_weeks) * self.week_width
    }

    /// Whether a point-in-time offset falls in `[0, num_weeks)`.
    pub fn is_visible(&self, offset: f64) -> bool {
        offset >= 0.0 && offset < f64::from(self.num_weeks)
    }

    fn full_height_line(&self, x: f64) -> Line {
        Line::new(
            (x, Self::GUIDE_TOP),
            (x, self.axis_y() + Self::GUIDE_OVERHANG),
        )
    }
}

/// Lays out `plan` into a scene.
///
/// Paint order: legend, lane guides, axis, milestone guide lines, vertical
/// lines, task bars, week ticks, milestone markers.
pub fn layout(plan: &Plan, config: &LayoutConfig) -> Scene {
    let geometry = Geometry::new(plan, config);
    let mut scene = Scene::new(geometry.width(), geometry.height());

    push_legend(&mut scene, plan, config.locale);
    push_lanes(&mut scene, &geometry);
    scene.push(
        NodeRole::Axis,
        Shape::Line {
            line: Line::new(
                (config.left_margin, geometry.axis_y()),
                (geometry.right_x(), geometry.axis_y()),
            ),
            stroke: Stroke::solid(TEXT, 2.0),
        },
    );

    let visible_milestones: Vec<(&Milestone, f64)> = plan
        .milestones
        .iter()
        .map(|m| (m, week_offset(m.date, plan.start_date)))
        .filter(|&(_, offset)| geometry.is_visible(offset))
        .collect();

    for &(milestone, offset) in &visible_milestones {
        scene.push(
            NodeRole::MilestoneGuide {
                milestone_id: milestone.id,
            },
            Shape::Line {
                line: geometry.full_height_line(geometry.center_x(offset)),
                stroke: Stroke::dashed(MILESTONE_GUIDE, 2.0, 5.0, 5.0),
            },
        );
    }

    for vertical in &plan.vertical_lines {
        let offset = week_offset(vertical.date, plan.start_date);
        if !geometry.is_visible(offset) {
            continue;
        }
        scene.push(
            NodeRole::VerticalLine {
                line_id: vertical.id,
            },
            Shape::Line {
                line: geometry.full_height_line(geometry.center_x(offset)),
                stroke: Stroke::solid(USER_LINE, 4.0),
            },
        );
    }

    let mut drawn_tasks = 0;
    for task in &plan.tasks {
        if push_task(&mut scene, plan, &geometry, task) {
            drawn_tasks += 1;
        }
    }

    push_week_ticks(&mut scene, plan, &geometry, config.locale);

    for &(milestone, offset) in &visible_milestones {
        push_milestone(&mut scene, plan, &geometry, milestone, offset);
    }

    debug!(
        "Laid out plan '{}': {}/{} tasks, {}/{} milestones, {} nodes",
        plan.name,
        drawn_tasks,
        plan.tasks.len(),
        visible_milestones.len(),
        plan.milestones.len(),
        scene.nodes.len()
    );

    scene
}

fn push_legend(scene: &mut Scene, plan: &Plan, locale: Locale) {
    scene.push(
        NodeRole::LegendCaption,
        Shape::Text(
            Label::new(Point::new(50.0, 25.0), locale.legend_caption(), 12.0)
                .bold()
                .fill(TEXT),
        ),
    );

    for (index, resource) in plan.resources.iter().enumerate() {
        let x = Geometry::LEGEND_START + index as f64 * Geometry::LEGEND_PITCH;
        scene.push(
            NodeRole::LegendSwatch {
                resource_id: resource.id,
            },
            Shape::Rect {
                rect: Rect::new(x, Geometry::LEGEND_Y, x + 15.0, Geometry::LEGEND_Y + 15.0),
                fill: resource.color,
                opacity: 0.7,
                corner_radius: 2.0,
            },
        );
        scene.push(
            NodeRole::LegendLabel {
                resource_id: resource.id,
            },
            Shape::Text(Label::new(Point::new(x + 20.0, 27.0), &resource.name, 11.0).fill(TEXT)),
        );
    }
}

fn push_lanes(scene: &mut Scene, geometry: &Geometry) {
    for lane in 1..=geometry.num_lines {
        let y = geometry.lane_y(lane);
        scene.push(
            NodeRole::LaneGuide { lane },
            Shape::Line {
                line: Line::new((geometry.left_margin, y), (geometry.right_x(), y)),
                stroke: Stroke::dashed(GRID, 1.0, 3.0, 3.0),
            },
        );
        scene.push(
            NodeRole::LaneLabel { lane },
            Shape::Text(
                Label::new(Point::new(30.0, y + 5.0), format!("L{lane}"), 10.0)
                    .fill(MUTED)
                    .centered(),
            ),
        );
    }
}

/// Adds a task bar and its labels; returns false when the task is culled.
fn push_task(scene: &mut Scene, plan: &Plan, geometry: &Geometry, task: &Task) -> bool {
    let start = week_offset(task.start_date, plan.start_date);
    let end = week_offset(task.end_date, plan.start_date);
    if start >= f64::from(geometry.num_weeks) || end < 0.0 {
        return false;
    }

    let y = geometry.lane_y(plan.clamp_line(task.line));
    let x1 = geometry.center_x(start);
    let x2 = geometry.center_x(end);
    let fill = task
        .resource_id
        .and_then(|id| plan.resource(id))
        .map_or(Color::FALLBACK, |resource| resource.color);

    scene.push(
        NodeRole::TaskBar { task_id: task.id },
        Shape::Rect {
            rect: Rect::new(x1, y - 15.0, x2, y + 15.0),
            fill,
            opacity: 0.7,
            corner_radius: 5.0,
        },
    );
    scene.push(
        NodeRole::TaskName { task_id: task.id },
        Shape::Text(Label::new(Point::new(x1 + 5.0, y + 5.0), &task.name, 10.0).fill(TEXT)),
    );
    scene.push(
        NodeRole::TaskEndDate { task_id: task.id },
        Shape::Text(
            Label::new(
                Point::new(x2, y + 25.0),
                ShortDate(&task.end_date).to_string(),
                8.0,
            )
            .fill(MUTED)
            .centered(),
        ),
    );
    true
}

fn push_week_ticks(scene: &mut Scene, plan: &Plan, geometry: &Geometry, locale: Locale) {
    let axis_y = geometry.axis_y();
    let mut months = MonthLabels::new(plan.start_date, geometry.num_weeks, locale).peekable();

    for week in 0..geometry.num_weeks {
        let month = week % 4 == 0;
        let x = geometry.center_x(f64::from(week));

        scene.push(
            NodeRole::WeekTick { week, month },
            Shape::Circle {
                circle: Circle::new((x, axis_y), if month { 6.0 } else { 3.0 }),
                fill: if month { TEXT } else { MUTED },
            },
        );

        let iso_week = iso_week_number(week_start(plan.start_date, week));
        scene.push(
            NodeRole::WeekNumber { week },
            Shape::Text(
                Label::new(
                    Point::new(x, axis_y + 20.0),
                    format!("{}{iso_week}", locale.week_prefix()),
                    10.0,
                )
                .fill(MUTED)
                .centered(),
            ),
        );

        if let Some((_, label)) = months.next_if(|(index, _)| *index == week) {
            scene.push(
                NodeRole::MonthLabel { week },
                Shape::Text(
                    Label::new(Point::new(x, axis_y + 35.0), label, 14.0)
                        .bold()
                        .fill(TEXT)
                        .centered(),
                ),
            );
        }
    }
}

fn push_milestone(
    scene: &mut Scene,
    plan: &Plan,
    geometry: &Geometry,
    milestone: &Milestone,
    offset: f64,
) {
    let center = Point::new(
        geometry.center_x(offset),
        geometry.lane_y(plan.clamp_line(milestone.requested_line())),
    );
    let marker = match Marker::for_kind(&milestone.kind) {
        Marker::Glyph(glyph) => {
            Shape::Text(Label::new(Point::new(center.x, center.y + 8.0), glyph, 24.0).centered())
        }
        polygon => Shape::Polygon {
            points: polygon.outline(center).unwrap_or_default(),
            fill: milestone.kind.color(),
        },
    };
    scene.push(
        NodeRole::MilestoneMarker {
            milestone_id: milestone.id,
        },
        marker,
    );

    scene.push(
        NodeRole::MilestoneName {
            milestone_id: milestone.id,
        },
        Shape::Text(
            Label::new(Point::new(center.x, center.y - 25.0), &milestone.name, 10.0)
                .bold()
                .fill(TEXT)
                .centered(),
        ),
    );
    scene.push(
        NodeRole::MilestoneDate {
            milestone_id: milestone.id,
        },
        Shape::Text(
            Label::new(
                Point::new(center.x, center.y + 32.0),
                LongDate(&milestone.date).to_string(),
                11.0,
            )
            .bold()
            .fill(TEXT)
            .centered(),
        ),
    );
}
