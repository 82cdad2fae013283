//! Milestone model definition and milestone kinds.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Color;

/// Kind of a milestone, which selects the marker drawn for it.
///
/// Unknown kind names are kept verbatim in [`MilestoneKind::Other`] so that a
/// loaded plan saves back unchanged; they are drawn with the default glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MilestoneKind {
    /// A meeting or review
    #[default]
    Meeting,

    /// A document delivery
    Document,

    /// An application release
    App,

    /// A production go-live, drawn as a star
    Production,

    /// Miscellaneous, drawn as a diamond
    Divers,

    /// Any other kind name
    Other(String),
}

impl MilestoneKind {
    /// Serialized name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            MilestoneKind::Meeting => "meeting",
            MilestoneKind::Document => "document",
            MilestoneKind::App => "app",
            MilestoneKind::Production => "production",
            MilestoneKind::Divers => "divers",
            MilestoneKind::Other(name) => name,
        }
    }

    /// Glyph associated with the kind.
    ///
    /// Production and divers milestones are drawn as polygons; their glyph
    /// is only used for textual output.
    pub fn glyph(&self) -> &'static str {
        match self {
            MilestoneKind::Meeting => "👥",
            MilestoneKind::Document => "📄",
            MilestoneKind::App => "📱",
            MilestoneKind::Production => "⭐",
            MilestoneKind::Divers => "◆",
            MilestoneKind::Other(_) => "📅",
        }
    }

    /// Accent color associated with the kind.
    pub fn color(&self) -> Color {
        match self {
            MilestoneKind::Meeting | MilestoneKind::Divers => Color::rgb(0x34, 0x98, 0xdb),
            MilestoneKind::Document => Color::rgb(0xf3, 0x9c, 0x12),
            MilestoneKind::App => Color::rgb(0x9b, 0x59, 0xb6),
            MilestoneKind::Production => Color::rgb(0xe7, 0x4c, 0x3c),
            MilestoneKind::Other(_) => Color::rgb(0x95, 0xa5, 0xa6),
        }
    }
}

impl From<&str> for MilestoneKind {
    fn from(s: &str) -> Self {
        match s {
            "meeting" => MilestoneKind::Meeting,
            "document" => MilestoneKind::Document,
            "app" => MilestoneKind::App,
            "production" => MilestoneKind::Production,
            "divers" => MilestoneKind::Divers,
            other => MilestoneKind::Other(other.to_string()),
        }
    }
}

impl FromStr for MilestoneKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MilestoneKind::from(s))
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MilestoneKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MilestoneKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MilestoneKind::from(raw.as_str()))
    }
}

/// A dated marker on one lane of the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Unique identifier within the plan
    pub id: u64,

    /// Label drawn above the marker
    pub name: String,

    /// Date the marker is drawn at
    pub date: Date,

    /// Marker kind, serialized as `type`
    #[serde(rename = "type", default)]
    pub kind: MilestoneKind,

    /// Lane number; `None` means lane 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
}

impl Milestone {
    /// Lane the milestone asks for before clamping.
    pub fn requested_line(&self) -> i64 {
        self.line.unwrap_or(1)
    }
}
