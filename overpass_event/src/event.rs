// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass event value.

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::command::Command;
use crate::error::EventError;
use crate::id::ControlId;
use crate::input::{KeyCode, Modifiers, MouseButton};
use crate::kind::EventKind;

/// The current event of one host pass.
///
/// Everything except the consumed flag is read-only once the host hands the
/// event to a dispatcher. Fields that do not apply to the event's kind keep
/// their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    kind: EventKind,
    consumed: bool,
    /// Control the host believes is under the pointer or holds focus.
    pub target: Option<ControlId>,
    /// Named key for key events; `None` for pure character input.
    pub key: Option<KeyCode>,
    /// Typed character for key-down events without a named key.
    pub character: Option<char>,
    /// Pointer position in surface coordinates.
    pub position: Point,
    /// Pointer movement since the previous pointer event.
    pub delta: Vec2,
    /// Scroll wheel movement.
    pub wheel_delta: Vec2,
    /// Button for pointer down/up events.
    pub button: MouseButton,
    /// Consecutive click count for pointer down events.
    pub click_count: u32,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Raw command token for validate/execute command events.
    pub command: Option<String>,
}

impl Event {
    /// An event of `kind` with empty payload.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            consumed: false,
            target: None,
            key: None,
            character: None,
            position: Point::ZERO,
            delta: Vec2::ZERO,
            wheel_delta: Vec2::ZERO,
            button: MouseButton::Left,
            click_count: 0,
            modifiers: Modifiers::empty(),
            command: None,
        }
    }

    /// An event from a host kind ordinal.
    pub fn from_raw_kind(raw: u8) -> Result<Self, EventError> {
        EventKind::try_from(raw).map(Self::new)
    }

    /// Key-down for a named key.
    #[must_use]
    pub fn key_down(key: KeyCode) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventKind::KeyDown)
        }
    }

    /// Key-up for a named key.
    #[must_use]
    pub fn key_up(key: KeyCode) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventKind::KeyUp)
        }
    }

    /// Key-down carrying only a typed character.
    #[must_use]
    pub fn character(c: char) -> Self {
        Self {
            character: Some(c),
            ..Self::new(EventKind::KeyDown)
        }
    }

    /// Single-click pointer press.
    #[must_use]
    pub fn pointer_down(button: MouseButton, position: Point) -> Self {
        Self {
            button,
            position,
            click_count: 1,
            ..Self::new(EventKind::PointerDown)
        }
    }

    /// Pointer release.
    #[must_use]
    pub fn pointer_up(button: MouseButton, position: Point) -> Self {
        Self {
            button,
            position,
            ..Self::new(EventKind::PointerUp)
        }
    }

    /// Pointer motion of `kind` (`PointerMove`, `PointerDrag` or `TouchMove`).
    #[must_use]
    pub fn pointer_motion(kind: EventKind, position: Point, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            ..Self::new(kind)
        }
    }

    /// Scroll wheel movement at `position`.
    #[must_use]
    pub fn scroll(position: Point, wheel_delta: Vec2) -> Self {
        Self {
            position,
            wheel_delta,
            ..Self::new(EventKind::ScrollWheel)
        }
    }

    /// Validate or execute command event with a raw token.
    #[must_use]
    pub fn command(kind: EventKind, token: impl Into<String>) -> Self {
        Self {
            command: Some(token.into()),
            ..Self::new(kind)
        }
    }

    /// Set the host's hit-test target.
    #[must_use]
    pub fn with_target(mut self, target: ControlId) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the click count.
    #[must_use]
    pub fn with_click_count(mut self, click_count: u32) -> Self {
        self.click_count = click_count;
        self
    }

    /// Set the pointer position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Effective kind: [`EventKind::Used`] once the event was consumed.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        if self.consumed {
            EventKind::Used
        } else {
            self.kind
        }
    }

    /// Kind as reported by the host, ignoring consumption.
    #[must_use]
    pub fn original_kind(&self) -> EventKind {
        self.kind
    }

    /// Whether some control consumed the event this pass.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Mark the event consumed. Irreversible for the rest of the pass.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    /// Raw command token, if any.
    #[must_use]
    pub fn command_token(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Mapped command for validate/execute command events.
    ///
    /// A command event without a token maps to [`Command::Custom`].
    #[must_use]
    pub fn command_kind(&self) -> Option<Command> {
        self.kind
            .is_command()
            .then(|| Command::from_token(self.command_token().unwrap_or_default()))
    }
}
