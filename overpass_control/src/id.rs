// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control id allocation and resolution.
//!
//! A receiver that manages one control is given a stable identity when it is
//! created, usually from a shared [`ControlIds`] allocator. Each pass the
//! caller may still pass an explicit id; [`resolve_control_id`] prefers it and
//! falls back to the identity. Callers that drive several controls from one
//! receiver must pass distinct explicit ids.

use overpass_event::ControlId;

use crate::error::ControlError;

/// Monotonic allocator of control identities.
///
/// Ids start at 1 and are never reused, so two receivers created from the
/// same allocator never collide.
#[derive(Clone, Debug)]
pub struct ControlIds {
    next: u32,
}

impl ControlIds {
    /// An allocator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// An allocator whose first id is `first`.
    ///
    /// Useful when some low ids are reserved for explicitly numbered controls.
    #[must_use]
    pub const fn starting_at(first: ControlId) -> Self {
        Self { next: first.get() }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> Result<ControlId, ControlError> {
        let id = ControlId::new(self.next).ok_or(ControlError::IdsExhausted)?;
        // Wrapping to 0 marks exhaustion for the following call.
        self.next = self.next.wrapping_add(1);
        Ok(id)
    }
}

impl Default for ControlIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the id a dispatch pass runs under.
///
/// Returns `explicit` when present, otherwise the receiver's `identity`.
#[must_use]
pub fn resolve_control_id(explicit: Option<ControlId>, identity: ControlId) -> ControlId {
    explicit.unwrap_or(identity)
}
