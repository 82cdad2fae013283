//! Milestone marker shapes.

use kurbo::Point;

use crate::models::MilestoneKind;

/// How a milestone marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Ten-point star polygon
    Star,
    /// Four-point diamond polygon
    Diamond,
    /// A glyph drawn as text
    Glyph(&'static str),
}

impl Marker {
    pub fn for_kind(kind: &MilestoneKind) -> Self {
        match kind {
            MilestoneKind::Production => Marker::Star,
            MilestoneKind::Divers => Marker::Diamond,
            other => Marker::Glyph(other.glyph()),
        }
    }

    /// Polygon outline centred on `center`, or `None` for glyph markers.
    pub fn outline(self, center: Point) -> Option<Vec<Point>> {
        let offsets: &[(f64, f64)] = match self {
            Marker::Star => &STAR,
            Marker::Diamond => &DIAMOND,
            Marker::Glyph(_) => return None,
        };
        Some(
            offsets
                .iter()
                .map(|&(dx, dy)| Point::new(center.x + dx, center.y + dy))
                .collect(),
        )
    }
}

const STAR: [(f64, f64); 10] = [
    (0.0, -12.0),
    (3.5, -3.5),
    (12.0, -3.5),
    (5.0, 2.0),
    (7.5, 11.0),
    (0.0, 6.0),
    (-7.5, 11.0),
    (-5.0, 2.0),
    (-12.0, -3.5),
    (-3.5, -3.5),
];

const DIAMOND: [(f64, f64); 4] = [(0.0, -12.0), (8.0, 0.0), (0.0, 12.0), (-8.0, 0.0)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_selection() {
        assert_eq!(Marker::for_kind(&MilestoneKind::Production), Marker::Star);
        assert_eq!(Marker::for_kind(&MilestoneKind::Divers), Marker::Diamond);
        assert_eq!(Marker::for_kind(&MilestoneKind::App), Marker::Glyph("📱"));
        assert_eq!(
            Marker::for_kind(&MilestoneKind::Other("party".to_string())),
            Marker::Glyph("📅")
        );
    }

    #[test]
    fn test_outlines_are_centred() {
        let center = Point::new(100.0, 50.0);
        let star = Marker::Star.outline(center).unwrap();
        assert_eq!(star.len(), 10);
        assert_eq!(star[0], Point::new(100.0, 38.0));

        let diamond = Marker::Diamond.outline(center).unwrap();
        assert_eq!(
            diamond,
            vec![
                Point::new(100.0, 38.0),
                Point::new(108.0, 50.0),
                Point::new(100.0, 62.0),
                Point::new(92.0, 50.0),
            ]
        );
        assert!(Marker::Glyph("👥").outline(center).is_none());
    }
}
