// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a callout layer.

use peniko::Color;

bitflags::bitflags! {
    /// Placement behavior switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CalloutFlags: u8 {
        /// Center callouts on their anchor instead of pushing them away from the pie.
        const CENTERED         = 0b0000_0001;
        /// Reject callouts that do not fit the slice's angular space.
        const HIDE_ON_OVERFLOW = 0b0000_0010;
        /// Keep rejected placements in the cache, so later `add_items` calls for
        /// the same slice are no-ops until [`clear`](crate::CalloutLayer::clear).
        const CACHE_REJECTED   = 0b0000_0100;
    }
}

impl Default for CalloutFlags {
    fn default() -> Self {
        Self::CENTERED | Self::HIDE_ON_OVERFLOW
    }
}

/// Settings read on every placement.
///
/// Set these before the chart starts animating its slices in; changes only
/// affect callouts placed afterwards.
#[derive(Clone, Debug)]
pub struct CalloutSettings {
    /// Distance from the pie center to the callout anchor.
    ///
    /// `None` anchors callouts on the slice's outer radius. A leader line is
    /// drawn only when this is strictly larger than the outer radius.
    pub target_radius: Option<f64>,
    /// Leader line stroke color.
    pub line_color: Color,
    /// Leader line stroke width.
    pub line_width: f64,
    /// Length of the horizontal leg of an elbow leader line.
    ///
    /// Not used by the default placement, which draws straight lines.
    pub line_segment_length: f64,
    /// Placement behavior switches.
    pub flags: CalloutFlags,
}

impl Default for CalloutSettings {
    fn default() -> Self {
        Self {
            target_radius: None,
            line_color: Color::BLACK,
            line_width: 1.0,
            line_segment_length: 100.0,
            flags: CalloutFlags::default(),
        }
    }
}

impl CalloutSettings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor radius.
    pub fn with_target_radius(mut self, radius: f64) -> Self {
        self.target_radius = Some(radius);
        self
    }

    /// Sets the leader line color.
    pub fn with_line_color(mut self, color: impl Into<Color>) -> Self {
        self.line_color = color.into();
        self
    }

    /// Sets the leader line width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the elbow segment length.
    pub fn with_line_segment_length(mut self, length: f64) -> Self {
        self.line_segment_length = length;
        self
    }

    /// Replaces all flags.
    pub fn with_flags(mut self, flags: CalloutFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Toggles [`CalloutFlags::CENTERED`].
    pub fn centered(mut self, on: bool) -> Self {
        self.flags.set(CalloutFlags::CENTERED, on);
        self
    }

    /// Toggles [`CalloutFlags::HIDE_ON_OVERFLOW`].
    pub fn hide_on_overflow(mut self, on: bool) -> Self {
        self.flags.set(CalloutFlags::HIDE_ON_OVERFLOW, on);
        self
    }

    /// Toggles [`CalloutFlags::CACHE_REJECTED`].
    pub fn cache_rejected(mut self, on: bool) -> Self {
        self.flags.set(CalloutFlags::CACHE_REJECTED, on);
        self
    }

    /// Whether callouts are centered on their anchor.
    pub fn is_centered(&self) -> bool {
        self.flags.contains(CalloutFlags::CENTERED)
    }

    /// Whether overflowing callouts are rejected.
    pub fn hides_on_overflow(&self) -> bool {
        self.flags.contains(CalloutFlags::HIDE_ON_OVERFLOW)
    }

    /// Whether rejected placements stay cached.
    pub fn caches_rejected(&self) -> bool {
        self.flags.contains(CalloutFlags::CACHE_REJECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = CalloutSettings::default();
        assert_eq!(s.target_radius, None, "anchors default to the outer radius");
        assert_eq!(s.line_width, 1.0, "hairline leader lines");
        assert_eq!(s.line_segment_length, 100.0, "elbow leg length");
        assert!(s.is_centered(), "centered by default");
        assert!(s.hides_on_overflow(), "overflow hidden by default");
        assert!(!s.caches_rejected(), "rejected placements retried by default");
    }

    #[test]
    fn builders_toggle_flags() {
        let s = CalloutSettings::new()
            .with_target_radius(150.0)
            .centered(false)
            .hide_on_overflow(false)
            .cache_rejected(true);
        assert_eq!(s.target_radius, Some(150.0), "target radius set");
        assert_eq!(s.flags, CalloutFlags::CACHE_REJECTED, "only CACHE_REJECTED left on");
    }
}
