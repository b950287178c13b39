// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the host boundary.

/// Error produced while translating host input into an [`Event`](crate::Event).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The host reported an event kind ordinal outside the known set.
    ///
    /// This means the host and the dispatcher disagree about the event
    /// vocabulary. It is never silently mapped to an inert kind.
    #[error("unclassified event kind ordinal {0}")]
    UnclassifiedKind(u8),
}
