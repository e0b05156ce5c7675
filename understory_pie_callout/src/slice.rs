// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice geometry consumed by the callout layer.

use core::f64::consts::TAU;
use core::hash::Hash;

use kurbo::{Point, Vec2};

/// Geometry of one pie wedge, as seen by the callout layer.
///
/// The host chart owns its slices; the layer only reads them and uses
/// [`PieSlice::id`] as the key of its placement cache. Angles are in radians,
/// measured from the positive x axis towards the positive y axis of the
/// chart's coordinate space.
pub trait PieSlice {
    /// Stable identity of the slice within its chart.
    type Id: Copy + Eq + Hash;

    /// Returns the slice identity.
    fn id(&self) -> Self::Id;

    /// Center of the pie this slice belongs to.
    fn center(&self) -> Point;

    /// Outer radius of the slice.
    fn outer_radius(&self) -> f64;

    /// Angle bisecting the slice's angular span.
    fn mid_angle(&self) -> f64;

    /// Distance a selected slice moves outwards along its mid-angle.
    fn selected_offset(&self) -> f64;

    /// Maximum width of a rectangle of `height`, horizontally centered at
    /// `center`, that fits into the space this slice owns.
    fn max_rect_width(&self, center: Point, height: f64) -> f64;

    /// Point at distance `offset` from `origin` along `angle`.
    fn position_at(&self, angle: f64, origin: Point, offset: f64) -> Point {
        origin + Vec2::from_angle(angle) * offset
    }
}

/// A plain pie wedge described by its angular span.
///
/// `Wedge` is a ready-made [`PieSlice`] for hosts that do not carry their own
/// slice type. Its available space is the angular region between the two
/// boundary rays; the inner and outer arcs are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge<K = u32> {
    /// Slice identity.
    pub id: K,
    /// Center of the pie.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Outward offset applied while the slice is selected.
    pub selected_offset: f64,
}

impl<K> Wedge<K> {
    /// Creates a wedge with no selection offset.
    pub fn new(
        id: K,
        center: impl Into<Point>,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center: center.into(),
            outer_radius,
            start_angle,
            end_angle,
            selected_offset: 0.0,
        }
    }

    /// Sets the selection offset.
    pub fn with_selected_offset(mut self, offset: f64) -> Self {
        self.selected_offset = offset;
        self
    }

    /// Signed angular span of the wedge.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl<K: Copy + Eq + Hash> PieSlice for Wedge<K> {
    type Id = K;

    fn id(&self) -> K {
        self.id
    }

    fn center(&self) -> Point {
        self.center
    }

    fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    fn selected_offset(&self) -> f64 {
        self.selected_offset
    }

    fn max_rect_width(&self, center: Point, height: f64) -> f64 {
        if self.sweep().abs() >= TAU {
            return f64::INFINITY;
        }
        // Each boundary ray crossing the top or bottom edge of the rectangle
        // bounds its half-width by the horizontal distance to the crossing.
        let half_height = height / 2.0;
        let mut half_width = f64::INFINITY;
        // The apex is the only other extreme point of a ray within the
        // rectangle's height band. For wedges wider than π it is the tip of
        // the excluded region.
        if (center.y - self.center.y).abs() <= half_height {
            half_width = (center.x - self.center.x).abs();
        }
        for edge_y in [center.y - half_height, center.y + half_height] {
            let dy = edge_y - self.center.y;
            for angle in [self.start_angle, self.end_angle] {
                let dir = Vec2::from_angle(angle);
                if dir.y == 0.0 {
                    continue;
                }
                let t = dy / dir.y;
                if t < 0.0 {
                    continue;
                }
                let x = self.center.x + dir.x * t;
                half_width = half_width.min((x - center.x).abs());
            }
        }
        2.0 * half_width
    }
}
