// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts between the callout layer and the toolkit that displays it.

use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::leader::LeaderLine;

/// Duration of the move played when a slice is selected or deselected.
pub const SELECTION_ANIMATION: Duration = Duration::from_millis(150);

/// A callout produced by the caller's view factory.
///
/// Implementations are typically lightweight handles into the toolkit's own
/// view hierarchy. Frames are in chart coordinates.
pub trait CalloutView {
    /// Current frame.
    fn frame(&self) -> Rect;

    /// Moves and resizes the view.
    fn set_frame(&mut self, frame: Rect);

    /// Current size.
    fn size(&self) -> Size {
        self.frame().size()
    }

    /// Current center.
    fn center(&self) -> Point {
        self.frame().center()
    }

    /// Moves the view so it is centered on `center`, keeping its size.
    fn set_center(&mut self, center: Point) {
        let size = self.size();
        self.set_frame(Rect::from_center_size(center, size));
    }
}

/// A bare rectangle is the simplest possible callout.
impl CalloutView for Rect {
    fn frame(&self) -> Rect {
        *self
    }

    fn set_frame(&mut self, frame: Rect) {
        *self = frame;
    }
}

/// The chart surface callouts are displayed on.
///
/// The layer only holds a weak reference to its host; when the host is gone,
/// every display write is skipped.
pub trait CalloutHost<V> {
    /// Inserts `view` into the chart's view hierarchy.
    fn add_view(&mut self, view: &V);

    /// Removes `view` from the chart's view hierarchy.
    fn remove_view(&mut self, view: &V);

    /// Inserts `line` into the chart's line layer.
    fn add_line(&mut self, line: &LeaderLine);

    /// Removes `line` from the chart's line layer.
    fn remove_line(&mut self, line: &LeaderLine);
}

/// Drives the visual transitions of callouts.
///
/// The default methods apply changes instantly; toolkits override them to
/// hook into their own animation system.
pub trait CalloutAnimator<V: CalloutView> {
    /// Plays the entry effect of a freshly displayed view.
    fn animate_entry(&mut self, _view: &mut V) {}

    /// Moves `view` so it ends up centered on `target` after `duration`.
    fn animate_center(&mut self, view: &mut V, target: Point, _duration: Duration) {
        view.set_center(target);
    }
}

/// Animator without any visual transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl<V: CalloutView> CalloutAnimator<V> for Immediate {}
