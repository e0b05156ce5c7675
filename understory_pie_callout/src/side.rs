// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal side of the chart a slice's callout falls on.

use core::f64::consts::{FRAC_PI_2, TAU};

/// Which half of the chart a slice's mid-angle points into.
///
/// Non-centered callouts are pushed away from the pie horizontally, in the
/// direction given by [`Side::direction`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Mid-angle in `(π/2, 3π/2]`.
    Left,
    /// Mid-angle in `[0, π/2]` or `(3π/2, 2π)`.
    Right,
}

impl Side {
    /// Classifies `angle` (radians, any range) after normalizing it into `[0, 2π)`.
    pub fn of_angle(angle: f64) -> Self {
        let angle = normalize_angle(angle);
        if angle <= FRAC_PI_2 || angle > 3.0 * FRAC_PI_2 {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// Sign of the horizontal offset for this side.
    pub const fn direction(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Euclidean remainder of `angle` by a full turn.
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    let r = angle % TAU;
    if r < 0.0 { r + TAU } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn quadrants() {
        for (angle, side) in [
            (0.0, Side::Right),
            (FRAC_PI_2, Side::Right),
            (FRAC_PI_2 + 1e-6, Side::Left),
            (PI, Side::Left),
            (3.0 * FRAC_PI_2, Side::Left),
            (3.0 * FRAC_PI_2 + 1e-6, Side::Right),
            (TAU - 1e-6, Side::Right),
        ] {
            assert_eq!(Side::of_angle(angle), side, "angle {angle}");
        }
    }

    #[test]
    fn angles_wrap_around() {
        for (angle, side) in [
            (TAU, Side::Right),
            (TAU + PI, Side::Left),
            (-0.1, Side::Right),
            (-PI, Side::Left),
        ] {
            assert_eq!(Side::of_angle(angle), side, "angle {angle}");
        }
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Side::Left.direction(), -1.0, "left pushes towards -x");
        assert_eq!(Side::Right.direction(), 1.0, "right pushes towards +x");
    }

    #[test]
    fn normalize_stays_in_range() {
        for angle in [-10.0, -TAU, -0.5, 0.0, 0.5, TAU, 10.0] {
            let n = normalize_angle(angle);
            assert!((0.0..=TAU).contains(&n), "{angle} normalized to {n}");
        }
    }
}
