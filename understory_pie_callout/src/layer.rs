// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The callout layer: placement, selection moves, and teardown.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace, warn};

use crate::error::{AddOutcome, CalloutError};
use crate::host::{CalloutAnimator, CalloutHost, CalloutView, Immediate, SELECTION_ANIMATION};
use crate::leader::LeaderLine;
use crate::settings::CalloutSettings;
use crate::side::Side;
use crate::slice::PieSlice;

/// Inset from the outer radius where leader lines start, so they visibly
/// attach to the slice.
pub const EDGE_INSET: f64 = 6.0;

type ViewFactory<S, V> = Box<dyn FnMut(&S, Point) -> V>;
type OverflowHandler<V> = Box<dyn FnMut(&V, Size)>;

/// Cached result of placing one slice's callout.
#[derive(Debug)]
struct Placement<V> {
    line: Option<LeaderLine>,
    view: V,
    /// Whether `view` (and `line`) were handed to the host.
    displayed: bool,
}

/// Places callouts around the slices of a pie chart.
///
/// The host chart drives the layer through [`on_end_animation`](Self::on_end_animation),
/// [`on_selected`](Self::on_selected), and [`clear`](Self::clear). Each slice
/// gets at most one placement, keyed by [`PieSlice::id`].
///
/// Views are produced by a caller-supplied factory. When
/// [`CalloutFlags::HIDE_ON_OVERFLOW`](crate::CalloutFlags::HIDE_ON_OVERFLOW)
/// is set, a view wider than the slice's available space is not displayed and
/// the overflow handler is told how much room there was.
///
/// The layer keeps only a weak reference to its host, so it may outlive the
/// chart; display writes are then skipped.
pub struct CalloutLayer<S: PieSlice, V: CalloutView, H> {
    settings: CalloutSettings,
    factory: Option<ViewFactory<S, V>>,
    on_overflow: Option<OverflowHandler<V>>,
    animator: Box<dyn CalloutAnimator<V>>,
    host: Weak<RefCell<H>>,
    placements: HashMap<S::Id, Placement<V>>,
}

impl<S: PieSlice, V: CalloutView, H> core::fmt::Debug for CalloutLayer<S, V, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CalloutLayer")
            .field("settings", &self.settings)
            .field("has_factory", &self.factory.is_some())
            .field("has_overflow_handler", &self.on_overflow.is_some())
            .field("host_alive", &(self.host.strong_count() > 0))
            .field("placements", &self.placements.len())
            .finish_non_exhaustive()
    }
}

impl<S, V, H> Default for CalloutLayer<S, V, H>
where
    S: PieSlice,
    V: CalloutView,
    H: CalloutHost<V>,
{
    fn default() -> Self {
        Self::new(CalloutSettings::default())
    }
}

impl<S, V, H> CalloutLayer<S, V, H>
where
    S: PieSlice,
    V: CalloutView,
    H: CalloutHost<V>,
{
    /// Creates a detached layer with no factory and the [`Immediate`] animator.
    pub fn new(settings: CalloutSettings) -> Self {
        Self {
            settings,
            factory: None,
            on_overflow: None,
            animator: Box::new(Immediate),
            host: Weak::new(),
            placements: HashMap::new(),
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &CalloutSettings {
        &self.settings
    }

    /// Mutable access to the settings.
    pub fn settings_mut(&mut self) -> &mut CalloutSettings {
        &mut self.settings
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: CalloutSettings) {
        self.settings = settings;
    }

    /// Attaches the layer to `host` without taking ownership of it.
    ///
    /// The host must not be borrowed while a hook runs. A chart that owns its
    /// layer should take the layer out (or release its own borrow) before
    /// calling [`on_end_animation`](Self::on_end_animation) or
    /// [`clear`](Self::clear); otherwise display writes are skipped with a
    /// warning.
    pub fn set_host(&mut self, host: &Rc<RefCell<H>>) {
        self.host = Rc::downgrade(host);
    }

    /// Registers the factory producing a view for a slice and its anchor point.
    pub fn set_view_factory(&mut self, factory: impl FnMut(&S, Point) -> V + 'static) {
        self.factory = Some(Box::new(factory));
    }

    /// Registers the handler told about views that did not fit.
    pub fn set_overflow_handler(&mut self, handler: impl FnMut(&V, Size) + 'static) {
        self.on_overflow = Some(Box::new(handler));
    }

    /// Replaces the animator.
    pub fn set_animator(&mut self, animator: impl CalloutAnimator<V> + 'static) {
        self.animator = Box::new(animator);
    }

    /// Number of cached placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no placement is cached.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether the slice `id` has a cached placement.
    pub fn contains(&self, id: S::Id) -> bool {
        self.placements.contains_key(&id)
    }

    /// The view placed for slice `id`.
    pub fn view(&self, id: S::Id) -> Option<&V> {
        self.placements.get(&id).map(|p| &p.view)
    }

    /// The leader line drawn for slice `id`, if any.
    pub fn line(&self, id: S::Id) -> Option<&LeaderLine> {
        self.placements.get(&id).and_then(|p| p.line.as_ref())
    }

    /// Chart hook: the entry animation of `slice` has finished.
    pub fn on_end_animation(&mut self, slice: &S) -> Result<AddOutcome, CalloutError> {
        self.add_items(slice)
    }

    /// Builds a leader line with the configured stroke.
    pub fn create_line(&self, p1: Point, p2: Point, p3: Option<Point>) -> LeaderLine {
        LeaderLine::new(
            p1,
            p2,
            p3,
            self.settings.line_color,
            self.settings.line_width,
        )
    }

    /// Places the callout for `slice`, unless it already has one.
    ///
    /// The anchor lies on the slice's mid-angle ray at the configured target
    /// radius (or the outer radius). A leader line from just inside the pie
    /// edge to the anchor is drawn when the target radius exceeds the outer
    /// radius.
    pub fn add_items(&mut self, slice: &S) -> Result<AddOutcome, CalloutError> {
        let id = slice.id();
        if self.placements.contains_key(&id) {
            return Ok(AddOutcome::AlreadyPlaced);
        }
        let Some(host) = self.host.upgrade() else {
            debug!("callout host is gone, skipping placement");
            return Ok(AddOutcome::Detached);
        };

        let mid_angle = slice.mid_angle();
        let origin = slice.center();
        let outer_radius = slice.outer_radius();
        let edge = slice.position_at(mid_angle, origin, outer_radius - EDGE_INSET);
        let anchor = slice.position_at(
            mid_angle,
            origin,
            self.settings.target_radius.unwrap_or(outer_radius),
        );
        let side = Side::of_angle(mid_angle);

        let line = match self.settings.target_radius {
            Some(radius) if radius > outer_radius => Some(self.create_line(edge, anchor, None)),
            _ => None,
        };

        let Some(factory) = self.factory.as_mut() else {
            warn!("{}", CalloutError::MissingFactory);
            return Err(CalloutError::MissingFactory);
        };
        let mut view = factory(slice, anchor);

        let size = view.size();
        let available = Size::new(slice.max_rect_width(anchor, size.height), size.height);
        let fits = size.width <= available.width && size.height <= available.height;

        if self.settings.hides_on_overflow() && !fits {
            debug!("callout of size {size:?} overflows available {available:?} at {anchor:?}");
            if let Some(handler) = self.on_overflow.as_mut() {
                handler(&view, available);
            }
            if self.settings.caches_rejected() {
                self.placements.insert(
                    id,
                    Placement {
                        line,
                        view,
                        displayed: false,
                    },
                );
            }
            return Ok(AddOutcome::Overflow(available));
        }

        let mut frame = Rect::from_center_size(anchor, size);
        if !self.settings.is_centered() {
            frame = frame + Vec2::new(side.direction() * size.width / 2.0, 0.0);
        }
        view.set_frame(frame);

        {
            let Ok(mut host) = host.try_borrow_mut() else {
                warn!("callout host is busy, skipping placement");
                return Ok(AddOutcome::Detached);
            };
            host.add_view(&view);
            if let Some(line) = &line {
                host.add_line(line);
            }
        }
        self.animator.animate_entry(&mut view);
        trace!("placed callout at {frame:?} ({side:?} side)");

        self.placements.insert(
            id,
            Placement {
                line,
                view,
                displayed: true,
            },
        );
        Ok(AddOutcome::Placed)
    }

    /// Chart hook: `slice` was selected or deselected.
    ///
    /// Moves the slice's callout outwards (selected) or back (deselected) by
    /// the slice's selection offset, over [`SELECTION_ANIMATION`].
    pub fn on_selected(&mut self, slice: &S, selected: bool) -> Result<(), CalloutError> {
        let Some(placement) = self.placements.get_mut(&slice.id()) else {
            warn!("{}", CalloutError::UnknownSlice);
            return Err(CalloutError::UnknownSlice);
        };
        let offset = if selected {
            slice.selected_offset()
        } else {
            -slice.selected_offset()
        };
        let target = slice.position_at(slice.mid_angle(), placement.view.center(), offset);
        self.animator
            .animate_center(&mut placement.view, target, SELECTION_ANIMATION);
        Ok(())
    }

    /// Removes every callout and leader line from the host and forgets all
    /// placements.
    pub fn clear(&mut self) {
        let host = self.host.upgrade();
        for (_, placement) in self.placements.drain() {
            if !placement.displayed {
                continue;
            }
            if let Some(host) = &host {
                let Ok(mut host) = host.try_borrow_mut() else {
                    warn!("callout host is busy, dropping placement without removing its view");
                    continue;
                };
                host.remove_view(&placement.view);
                if let Some(line) = &placement.line {
                    host.remove_line(line);
                }
            }
        }
    }
}
