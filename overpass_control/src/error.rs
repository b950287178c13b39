// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for control identity and layout registration.

use overpass_event::EventKind;

/// Error returned by [`ControlIds`](crate::ControlIds) and
/// [`NearestControl`](crate::NearestControl).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// Hit-test footprints may only be registered during a layout pass.
    #[error("control footprint registered during a {0:?} pass, expected Layout")]
    OutsideLayout(EventKind),
    /// Distances must be finite and not negative.
    #[error("control footprint distance must be finite and not negative")]
    InvalidDistance,
    /// Every non-zero `u32` has been handed out.
    #[error("control id space exhausted")]
    IdsExhausted,
}
