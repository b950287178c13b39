// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot and keyboard control slots.
//!
//! The host owns one [`FocusState`] and lends it to controls while they handle
//! an event. A control that claims the hot slot on a press keeps receiving the
//! following pointer events, even once the pointer has left its hit region,
//! until it releases the slot again.
//!
//! The claim and release rules live here, but nothing enforces that a control
//! uses them: they are a convention controls follow inside their handlers.
//!
//! ```
//! use kurbo::Point;
//! use overpass_control::{FocusState, HotControlPolicy};
//! use overpass_event::{ControlId, Event, MouseButton};
//!
//! let id = ControlId::new(3).unwrap();
//! let policy = HotControlPolicy::default();
//! let mut focus = FocusState::new();
//!
//! let down = Event::pointer_down(MouseButton::Left, Point::ZERO);
//! assert!(focus.try_claim(id, &down, Some(id), &policy));
//! assert!(focus.is_hot(id));
//!
//! let up = Event::pointer_up(MouseButton::Left, Point::ZERO);
//! assert!(focus.try_release(id, &up, &policy));
//! assert_eq!(focus.hot(), None);
//! ```

use overpass_event::{ControlId, Event, Modifiers, MouseButton};
use smallvec::{SmallVec, smallvec};

/// Rules for claiming and releasing the hot slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotControlPolicy {
    /// Button that may claim the hot slot.
    pub claim_button: MouseButton,
    /// Buttons that may release the hot slot.
    pub release_buttons: SmallVec<[MouseButton; 2]>,
    /// Modifiers that veto a claim. Alt is reserved for view navigation by
    /// default.
    pub reserved_modifiers: Modifiers,
    /// Whether a claim also takes the keyboard slot.
    pub claim_keyboard: bool,
}

impl Default for HotControlPolicy {
    fn default() -> Self {
        Self {
            claim_button: MouseButton::Left,
            release_buttons: smallvec![MouseButton::Left, MouseButton::Right],
            reserved_modifiers: Modifiers::ALT,
            claim_keyboard: true,
        }
    }
}

/// The hot and keyboard control slots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    hot: Option<ControlId>,
    keyboard: Option<ControlId>,
}

impl FocusState {
    /// Both slots empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hot: None,
            keyboard: None,
        }
    }

    /// Control holding pointer capture.
    #[must_use]
    pub fn hot(&self) -> Option<ControlId> {
        self.hot
    }

    /// Control holding keyboard focus.
    #[must_use]
    pub fn keyboard(&self) -> Option<ControlId> {
        self.keyboard
    }

    /// True if `id` holds either slot.
    #[must_use]
    pub fn is_hot(&self, id: ControlId) -> bool {
        self.hot == Some(id) || self.keyboard == Some(id)
    }

    /// Try to claim the hot slot for `id`.
    ///
    /// Succeeds only if `id` is the host's `nearest` candidate, the event is
    /// still unconsumed, the event's button is the policy's claim button, and
    /// no reserved modifier is held.
    pub fn try_claim(
        &mut self,
        id: ControlId,
        event: &Event,
        nearest: Option<ControlId>,
        policy: &HotControlPolicy,
    ) -> bool {
        if nearest != Some(id)
            || event.is_consumed()
            || event.button != policy.claim_button
            || event.modifiers.intersects(policy.reserved_modifiers)
        {
            return false;
        }
        self.hot = Some(id);
        if policy.claim_keyboard {
            self.keyboard = Some(id);
        }
        tracing::debug!(target: "overpass::control", %id, "hot control claimed");
        true
    }

    /// Try to release the hot slot held by `id`.
    ///
    /// Succeeds only if `id` holds the slot and the event's button is one of
    /// the policy's release buttons. The keyboard slot is left alone.
    pub fn try_release(&mut self, id: ControlId, event: &Event, policy: &HotControlPolicy) -> bool {
        if self.hot != Some(id) || !policy.release_buttons.contains(&event.button) {
            return false;
        }
        self.hot = None;
        tracing::debug!(target: "overpass::control", %id, "hot control released");
        true
    }

    /// Give keyboard focus to `id` without touching the hot slot.
    pub fn set_keyboard(&mut self, id: Option<ControlId>) {
        self.keyboard = id;
    }

    /// Drop keyboard focus.
    pub fn clear_keyboard(&mut self) {
        self.keyboard = None;
    }

    /// Empty both slots, for example when the surface loses focus.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
