// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Non-fatal failures of callout layer operations.
///
/// Both conditions are also logged; callers driving the layer from chart
/// lifecycle hooks can ignore them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalloutError {
    /// A placement was attempted before a view factory was registered.
    MissingFactory,
    /// A selection change arrived for a slice that has no placement.
    UnknownSlice,
}

impl fmt::Display for CalloutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFactory => f.write_str("no view factory registered"),
            Self::UnknownSlice => f.write_str("invalid state: slice has no placement"),
        }
    }
}

impl core::error::Error for CalloutError {}

/// Result of a successful [`add_items`](crate::CalloutLayer::add_items) call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddOutcome {
    /// The callout was displayed.
    Placed,
    /// The slice already had a placement; nothing changed.
    AlreadyPlaced,
    /// The callout did not fit the available size reported here and was not displayed.
    Overflow(Size),
    /// The host chart is gone; nothing was generated or stored.
    Detached,
}
