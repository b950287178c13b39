// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned interaction state and per-control kind filtering.

use overpass_event::{ControlId, Event, EventKind};

use crate::focus::{FocusState, HotControlPolicy};
use crate::layout::NearestControl;

/// Everything the host keeps between passes on behalf of its controls.
///
/// One `Interaction` exists per surface. It is handed by `&mut` to whoever is
/// dispatching the current event, so there is no global hot-control state.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    /// Hot and keyboard control slots.
    pub focus: FocusState,
    /// Footprints from the latest layout pass.
    pub layout: NearestControl,
    /// Claim and release rules.
    pub policy: HotControlPolicy,
}

impl Interaction {
    /// Fresh state with default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with a custom policy.
    #[must_use]
    pub fn with_policy(policy: HotControlPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Call once per pass before any control runs.
    ///
    /// A layout pass clears the footprints of the previous one.
    pub fn begin_pass(&mut self, event: &Event) {
        if event.kind() == EventKind::Layout {
            self.layout.begin_layout();
        }
    }

    /// The kind of `event` as seen by control `id`.
    ///
    /// - A consumed event is [`EventKind::Used`] for everyone.
    /// - While another control is hot, pointer and touch kinds are
    ///   [`EventKind::Ignore`].
    /// - While another control has keyboard focus, key kinds are
    ///   [`EventKind::Ignore`].
    /// - Otherwise the event's own kind.
    #[must_use]
    pub fn kind_for_control(&self, event: &Event, id: ControlId) -> EventKind {
        let kind = event.kind();
        let other = |slot: Option<ControlId>| slot.is_some_and(|held| held != id);
        if (kind.is_pointer() || kind.is_touch()) && other(self.focus.hot()) {
            return EventKind::Ignore;
        }
        if kind.is_keyboard() && other(self.focus.keyboard()) {
            return EventKind::Ignore;
        }
        kind
    }

    /// Control the host nominates for the next claim.
    #[must_use]
    pub fn nearest(&self) -> Option<ControlId> {
        self.layout.nearest()
    }

    /// Claim the hot slot for `id` under the stored policy.
    pub fn try_claim(&mut self, id: ControlId, event: &Event) -> bool {
        let nearest = self.layout.nearest();
        self.focus.try_claim(id, event, nearest, &self.policy)
    }

    /// Release the hot slot held by `id` under the stored policy.
    pub fn try_release(&mut self, id: ControlId, event: &Event) -> bool {
        self.focus.try_release(id, event, &self.policy)
    }

    /// True if `id` holds the hot or keyboard slot.
    #[must_use]
    pub fn is_hot(&self, id: ControlId) -> bool {
        self.focus.is_hot(id)
    }
}
