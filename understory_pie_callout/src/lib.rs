// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pie_callout --heading-base-level=0

//! Understory Pie Callout: labels placed outside pie chart slices.
//!
//! This crate positions auxiliary views (labels, badges, small cards) around a
//! pie chart and connects them to their slice with a leader line. It owns the
//! geometry and bookkeeping only; drawing the pie, hit testing, and animation
//! curves stay with the host chart.
//!
//! For each slice, the [`CalloutLayer`]:
//!
//! - Walks the slice's mid-angle ray from the pie center to find an anchor
//!   point at the configured target radius (or the outer radius).
//! - Builds a [`LeaderLine`] from just inside the pie edge to the anchor when
//!   the anchor lies outside the pie.
//! - Asks the caller's view factory for a view and tests whether it fits the
//!   horizontal room the slice has at the anchor
//!   ([`PieSlice::max_rect_width`]).
//! - Displays the view through the [`CalloutHost`], centered on the anchor or
//!   pushed away from the pie depending on the slice's [`Side`], or reports the
//!   overflow to the caller.
//!
//! Selecting a slice moves its callout outwards by the slice's selection
//! offset; [`CalloutLayer::clear`] removes everything when the chart reloads.
//!
//! ## Collaborators
//!
//! - [`PieSlice`]: read-only slice geometry and identity. [`Wedge`] is a
//!   ready-made implementation.
//! - [`CalloutView`]: a positioned view. `kurbo::Rect` implements it.
//! - [`CalloutHost`]: inserts and removes views and leader lines. The layer
//!   holds it weakly and skips display writes once it is gone.
//! - [`CalloutAnimator`]: entry effects and selection moves. [`Immediate`] is
//!   the default.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_pie_callout::{
//!     AddOutcome, CalloutHost, CalloutLayer, CalloutSettings, LeaderLine, Wedge,
//! };
//!
//! #[derive(Default)]
//! struct Chart {
//!     labels: Vec<Rect>,
//!     lines: usize,
//! }
//!
//! impl CalloutHost<Rect> for Chart {
//!     fn add_view(&mut self, view: &Rect) {
//!         self.labels.push(*view);
//!     }
//!     fn remove_view(&mut self, view: &Rect) {
//!         self.labels.retain(|r| r != view);
//!     }
//!     fn add_line(&mut self, _line: &LeaderLine) {
//!         self.lines += 1;
//!     }
//!     fn remove_line(&mut self, _line: &LeaderLine) {
//!         self.lines -= 1;
//!     }
//! }
//!
//! let chart = Rc::new(RefCell::new(Chart::default()));
//! let mut layer: CalloutLayer<Wedge, Rect, Chart> =
//!     CalloutLayer::new(CalloutSettings::new().with_target_radius(150.0));
//! layer.set_host(&chart);
//! layer.set_view_factory(|_slice, _anchor| Rect::from_origin_size(Point::ORIGIN, Size::new(40.0, 16.0)));
//!
//! let slice = Wedge::new(0, (200.0, 200.0), 100.0, -0.4, 0.4);
//! assert_eq!(layer.on_end_animation(&slice), Ok(AddOutcome::Placed));
//!
//! // The label is centered 150 units to the right of the pie center.
//! assert_eq!(chart.borrow().labels[0].center(), Point::new(350.0, 200.0));
//! assert_eq!(chart.borrow().lines, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `peniko`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! Diagnostics go through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod host;
mod layer;
mod leader;
mod settings;
mod side;
mod slice;

pub use error::{AddOutcome, CalloutError};
pub use host::{CalloutAnimator, CalloutHost, CalloutView, Immediate, SELECTION_ANIMATION};
pub use layer::{CalloutLayer, EDGE_INSET};
pub use leader::LeaderLine;
pub use settings::{CalloutFlags, CalloutSettings};
pub use side::Side;
pub use slice::{PieSlice, Wedge};
