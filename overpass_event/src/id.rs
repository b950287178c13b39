// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control identifiers.

use core::fmt;
use core::num::NonZeroU32;

/// Identifier of a logical control.
///
/// Zero is reserved by hosts to mean "no control" (or "derive one"), so it is
/// not a valid `ControlId`; use `Option<ControlId>` where the absence matters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(NonZeroU32);

impl ControlId {
    /// Wrap a raw id; `None` for zero.
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Wrap a raw non-zero id.
    #[must_use]
    pub const fn from_non_zero(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    /// The raw value, never zero.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for ControlId {
    fn from(raw: NonZeroU32) -> Self {
        Self(raw)
    }
}

impl From<ControlId> for u32 {
    fn from(id: ControlId) -> Self {
        id.get()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
