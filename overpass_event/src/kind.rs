// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event kinds.
//!
//! [`EventKind`] is the closed set of kinds a host may report for a pass.
//! Hosts that speak numeric ordinals convert with [`EventKind::try_from`];
//! an ordinal outside the set is an integration error and is reported as
//! [`EventError::UnclassifiedKind`] instead of being mapped to something inert.

use crate::error::EventError;

/// Kind of the current event, as reported by the host.
///
/// The discriminants are the host ordinals accepted by [`EventKind::try_from`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventKind {
    /// The event should be ignored by this control.
    Ignore = 0,
    /// The event was already consumed earlier in the pass.
    Used = 1,
    /// A key was pressed, or a character was typed.
    KeyDown = 2,
    /// A key was released.
    KeyUp = 3,
    /// A pointer button was pressed.
    PointerDown = 4,
    /// A pointer button was released.
    PointerUp = 5,
    /// The pointer moved with no button held.
    PointerMove = 6,
    /// The pointer moved with a button held.
    PointerDrag = 7,
    /// The pointer entered the window.
    PointerEnterWindow = 8,
    /// The pointer left the window.
    PointerLeaveWindow = 9,
    /// A context (secondary) click was requested.
    ContextClick = 10,
    /// The scroll wheel moved.
    ScrollWheel = 11,
    /// A drag-and-drop operation moved over the surface.
    DragUpdated = 12,
    /// A drag-and-drop operation was released over the surface.
    DragPerform = 13,
    /// A drag-and-drop operation left the surface or was cancelled.
    DragExited = 14,
    /// The host asks whether a command can be executed.
    ValidateCommand = 15,
    /// The host asks to execute a command.
    ExecuteCommand = 16,
    /// Layout pass: controls register their hit-test footprint.
    Layout = 17,
    /// Repaint pass: controls draw.
    Repaint = 18,
    /// A touch began.
    TouchDown = 19,
    /// A touch ended.
    TouchUp = 20,
    /// A touch moved.
    TouchMove = 21,
    /// A touch entered the window.
    TouchEnter = 22,
    /// A touch left the window.
    TouchLeave = 23,
    /// A touch is held without moving. Hosts do not emit this in practice.
    TouchStationary = 24,
}

impl EventKind {
    /// Every kind, in ordinal order.
    pub const ALL: [Self; 25] = [
        Self::Ignore,
        Self::Used,
        Self::KeyDown,
        Self::KeyUp,
        Self::PointerDown,
        Self::PointerUp,
        Self::PointerMove,
        Self::PointerDrag,
        Self::PointerEnterWindow,
        Self::PointerLeaveWindow,
        Self::ContextClick,
        Self::ScrollWheel,
        Self::DragUpdated,
        Self::DragPerform,
        Self::DragExited,
        Self::ValidateCommand,
        Self::ExecuteCommand,
        Self::Layout,
        Self::Repaint,
        Self::TouchDown,
        Self::TouchUp,
        Self::TouchMove,
        Self::TouchEnter,
        Self::TouchLeave,
        Self::TouchStationary,
    ];

    /// Host ordinal of this kind.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// True for mouse-style pointer kinds, including context clicks and
    /// window enter/leave.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(
            self,
            Self::PointerDown
                | Self::PointerUp
                | Self::PointerMove
                | Self::PointerDrag
                | Self::PointerEnterWindow
                | Self::PointerLeaveWindow
                | Self::ContextClick
                | Self::ScrollWheel
        )
    }

    /// True for touch kinds.
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(
            self,
            Self::TouchDown
                | Self::TouchUp
                | Self::TouchMove
                | Self::TouchEnter
                | Self::TouchLeave
                | Self::TouchStationary
        )
    }

    /// True for key down/up.
    #[must_use]
    pub const fn is_keyboard(self) -> bool {
        matches!(self, Self::KeyDown | Self::KeyUp)
    }

    /// True for validate/execute command kinds.
    #[must_use]
    pub const fn is_command(self) -> bool {
        matches!(self, Self::ValidateCommand | Self::ExecuteCommand)
    }
}

impl TryFrom<u8> for EventKind {
    type Error = EventError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(EventError::UnclassifiedKind(raw))
    }
}

impl From<EventKind> for u8 {
    fn from(kind: EventKind) -> Self {
        kind.ordinal()
    }
}
