// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass view handed to receiver callbacks.

use overpass_control::{ControlError, FocusState, Interaction};
use overpass_event::{ControlId, Event, EventKind};

/// Host callback surface a dispatch runs in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassContext {
    /// A plain GUI surface.
    #[default]
    Gui,
    /// A scene or viewport surface.
    SceneView,
    /// An inspector panel.
    Inspector,
    /// A read-only preview.
    Preview,
    /// An interactive preview.
    InteractivePreview,
}

/// What a receiver sees while one event is being dispatched to it.
///
/// Holds the event, the resolved control id, the kind after host filtering,
/// and the host's [`Interaction`] state so callbacks can claim or release the
/// hot slot and register layout footprints.
#[derive(Debug)]
pub struct Pass<'a> {
    pub(crate) event: &'a Event,
    pub(crate) control: ControlId,
    pub(crate) kind: EventKind,
    pub(crate) context: PassContext,
    pub(crate) interaction: &'a mut Interaction,
}

impl<'a> Pass<'a> {
    /// The current event. It has not been consumed by this dispatch yet.
    #[must_use]
    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// Control id this dispatch runs under.
    #[must_use]
    pub fn control(&self) -> ControlId {
        self.control
    }

    /// Event kind for this control after host filtering.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Surface the dispatch runs in.
    #[must_use]
    pub fn context(&self) -> PassContext {
        self.context
    }

    /// Hot and keyboard slots.
    #[must_use]
    pub fn focus(&self) -> &FocusState {
        &self.interaction.focus
    }

    /// Mutable access to the host's interaction state.
    pub fn interaction(&mut self) -> &mut Interaction {
        self.interaction
    }

    /// True if this control holds the hot or keyboard slot.
    #[must_use]
    pub fn is_hot(&self) -> bool {
        self.interaction.is_hot(self.control)
    }

    /// True if the host nominates this control for the next claim.
    #[must_use]
    pub fn is_nearest(&self) -> bool {
        self.interaction.nearest() == Some(self.control)
    }

    /// Claim the hot slot for this control.
    pub fn try_claim_hot(&mut self) -> bool {
        self.interaction.try_claim(self.control, self.event)
    }

    /// Release the hot slot held by this control.
    pub fn try_release_hot(&mut self) -> bool {
        self.interaction.try_release(self.control, self.event)
    }

    /// Register this control's footprint; only valid during layout.
    pub fn add_control(&mut self, distance: f64) -> Result<(), ControlError> {
        self.interaction
            .layout
            .add_control(self.event, self.control, distance)
    }
}
