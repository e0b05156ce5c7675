// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leader lines connecting the pie edge to a callout.

use kurbo::{BezPath, Line, Point};
use peniko::Color;
use smallvec::{SmallVec, smallvec};

/// A stroked polyline from the pie edge to a callout anchor.
///
/// A leader line is either a straight segment or a three-point elbow. Hosts
/// draw it with [`LeaderLine::to_path`] and the stroke parameters.
#[derive(Clone, Debug)]
pub struct LeaderLine {
    points: SmallVec<[Point; 3]>,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in chart units.
    pub width: f64,
}

impl LeaderLine {
    /// Creates a line from `p1` to `p2`, continuing to `p3` when given.
    pub fn new(p1: Point, p2: Point, p3: Option<Point>, color: Color, width: f64) -> Self {
        let mut points: SmallVec<[Point; 3]> = smallvec![p1, p2];
        if let Some(p3) = p3 {
            points.push(p3);
        }
        Self {
            points,
            color,
            width,
        }
    }

    /// Polyline vertices, starting at the pie edge. Always two or three points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Starting point, on the pie edge.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Final point of the polyline.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// First segment of the polyline.
    pub fn segment(&self) -> Line {
        Line::new(self.points[0], self.points[1])
    }

    /// Whether this line has a third point.
    pub fn is_elbow(&self) -> bool {
        self.points.len() == 3
    }

    /// Open path through all vertices, for stroking.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for p in &self.points[1..] {
            path.line_to(*p);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};
    use kurbo::PathEl;

    #[test]
    fn straight_segment() {
        let line = LeaderLine::new(
            Point::new(94.0, 0.0),
            Point::new(150.0, 0.0),
            None,
            Color::BLACK,
            1.0,
        );
        assert!(!line.is_elbow());
        assert_eq!(line.start(), Point::new(94.0, 0.0));
        assert_eq!(line.end(), Point::new(150.0, 0.0));
        assert_eq!(line.segment(), Line::new((94.0, 0.0), (150.0, 0.0)));
    }

    #[test]
    fn elbow_path_visits_every_point() {
        let line = LeaderLine::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Some(Point::new(30.0, 10.0)),
            Color::BLACK,
            2.0,
        );
        assert!(line.is_elbow());
        assert_eq!(line.end(), Point::new(30.0, 10.0));
        let els: Vec<PathEl> = line.to_path().elements().to_vec();
        assert_eq!(
            els,
            vec![
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
                PathEl::LineTo(Point::new(30.0, 10.0)),
            ]
        );
    }
}
