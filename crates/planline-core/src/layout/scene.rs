//! Renderer-agnostic scene primitives produced by [`super::layout`].

use kurbo::{Circle, Line, Point, Rect};
use serde::Serialize;

use crate::models::Color;

/// A fully positioned timeline, ready for a [`crate::render::Surface`].
///
/// Nodes are stored in paint order: later nodes are drawn over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<SceneNode>,
}

/// One primitive together with what it represents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub role: NodeRole,
    pub shape: Shape,
}

/// What a scene node stands for in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum NodeRole {
    LegendCaption,
    LegendSwatch { resource_id: u64 },
    LegendLabel { resource_id: u64 },
    LaneGuide { lane: u32 },
    LaneLabel { lane: u32 },
    Axis,
    MilestoneGuide { milestone_id: u64 },
    VerticalLine { line_id: u64 },
    TaskBar { task_id: u64 },
    TaskName { task_id: u64 },
    TaskEndDate { task_id: u64 },
    WeekTick { week: u32, month: bool },
    WeekNumber { week: u32 },
    MonthLabel { week: u32 },
    MilestoneMarker { milestone_id: u64 },
    MilestoneName { milestone_id: u64 },
    MilestoneDate { milestone_id: u64 },
}

impl NodeRole {
    /// Lane grid lines and lane numbers, which exported images leave out.
    pub fn is_guide(&self) -> bool {
        matches!(self, NodeRole::LaneGuide { .. } | NodeRole::LaneLabel { .. })
    }
}

/// A geometric primitive in scene coordinates (y grows downwards).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A filled rectangle. `rect.x1` may be left of `rect.x0` for bars whose
    /// end precedes their start.
    ///
    /// The scene keeps that negative width as laid out. [`SvgSurface`]
    /// normalizes it, so a reversed bar is drawn spanning both dates rather
    /// than emitted with a negative `width` that SVG viewers skip.
    ///
    /// [`SvgSurface`]: crate::render::SvgSurface
    Rect {
        rect: Rect,
        fill: Color,
        opacity: f64,
        corner_radius: f64,
    },
    Line {
        line: Line,
        stroke: Stroke,
    },
    Circle {
        circle: Circle,
        fill: Color,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
    },
    Text(Label),
}

/// Stroke style of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths; `None` for a solid line
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some([dash, gap]),
        }
    }
}

/// Horizontal anchoring of a text label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

/// A positioned text label; `position` is the baseline anchor point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub position: Point,
    pub content: String,
    pub size: f64,
    pub bold: bool,
    /// `None` leaves the color to the surface (used for glyph markers)
    pub fill: Option<Color>,
    pub anchor: TextAnchor,
}

impl Label {
    pub fn new(position: Point, content: impl Into<String>, size: f64) -> Self {
        Self {
            position,
            content: content.into(),
            size,
            bold: false,
            fill: None,
            anchor: TextAnchor::Start,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.anchor = TextAnchor::Middle;
        self
    }
}

impl Scene {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, role: NodeRole, shape: Shape) {
        self.nodes.push(SceneNode { role, shape });
    }

    /// Copy of the scene without lane guides and lane labels.
    pub fn without_guides(&self) -> Scene {
        Scene {
            width: self.width,
            height: self.height,
            nodes: self
                .nodes
                .iter()
                .filter(|node| !node.role.is_guide())
                .cloned()
                .collect(),
        }
    }

    /// Nodes whose role satisfies `predicate`, in paint order.
    pub fn nodes_where<F>(&self, predicate: F) -> impl Iterator<Item = &SceneNode>
    where
        F: Fn(&NodeRole) -> bool,
    {
        self.nodes.iter().filter(move |node| predicate(&node.role))
    }

    /// The first shape carrying exactly `role`.
    pub fn shape_for(&self, role: NodeRole) -> Option<&Shape> {
        self.nodes
            .iter()
            .find(|node| node.role == role)
            .map(|node| &node.shape)
    }

    /// Bar rectangle of a task, if the task was laid out.
    pub fn task_bar(&self, task_id: u64) -> Option<Rect> {
        match self.shape_for(NodeRole::TaskBar { task_id })? {
            Shape::Rect { rect, .. } => Some(*rect),
            _ => None,
        }
    }

    /// Text of every label with the given role predicate, in paint order.
    pub fn texts_where<F>(&self, predicate: F) -> Vec<&str>
    where
        F: Fn(&NodeRole) -> bool,
    {
        self.nodes_where(predicate)
            .filter_map(|node| match &node.shape {
                Shape::Text(label) => Some(label.content.as_str()),
                _ => None,
            })
            .collect()
    }
}
