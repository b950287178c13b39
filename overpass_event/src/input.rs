// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input payload types: key codes, mouse buttons, and modifier flags.

use bitflags::bitflags;

/// A named key.
///
/// Key-down events carry a `KeyCode` when the host identified a physical or
/// named key. Pure text input (a typed character with no named key) carries
/// `None` instead and is delivered through the character path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Return / Enter.
    Return,
    /// Keypad Enter.
    KeypadEnter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Insert.
    Insert,
    /// Space bar.
    Space,
    /// Up arrow.
    UpArrow,
    /// Down arrow.
    DownArrow,
    /// Left arrow.
    LeftArrow,
    /// Right arrow.
    RightArrow,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Left or right shift.
    Shift,
    /// Left or right control.
    Control,
    /// Left or right alt / option.
    Alt,
    /// Command / Windows / Super.
    Command,
    /// Function key `F1`..`F15`.
    F(u8),
    /// Letter key, reported in upper case.
    Letter(char),
    /// Digit key on the main row, `0..=9`.
    Digit(u8),
    /// Host-specific key code without a named variant.
    Other(u16),
}

impl KeyCode {
    /// Letter key for `c`, normalized to upper case; `None` if `c` is not an
    /// ASCII letter.
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }

    /// True for keys that only change modifier state.
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(self, Self::Shift | Self::Control | Self::Alt | Self::Command)
    }

    /// True for Return and keypad Enter.
    #[must_use]
    pub const fn is_submit(self) -> bool {
        matches!(self, Self::Return | Self::KeypadEnter)
    }
}

/// Pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary button (host ordinal 0).
    #[default]
    Left,
    /// Secondary button (host ordinal 1).
    Right,
    /// Middle button (host ordinal 2).
    Middle,
    /// Any further button, by host ordinal.
    Other(u8),
}

impl MouseButton {
    /// Map a host button ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            n => Self::Other(n),
        }
    }

    /// Host ordinal of this button.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Other(n) => n,
        }
    }
}

bitflags! {
    /// Modifier keys held while the event was generated.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift is held.
        const SHIFT = 1 << 0;
        /// Control is held.
        const CONTROL = 1 << 1;
        /// Alt / option is held.
        const ALT = 1 << 2;
        /// Command / Windows / Super is held.
        const COMMAND = 1 << 3;
        /// The key is on the numeric keypad.
        const NUMERIC = 1 << 4;
        /// Caps lock is on.
        const CAPS_LOCK = 1 << 5;
        /// The key is a function key.
        const FUNCTION = 1 << 6;
    }
}

impl Modifiers {
    /// Control on most platforms, Command on macOS-style hosts.
    ///
    /// Hosts report both; receivers that want "the action modifier" can test
    /// this set with [`Modifiers::intersects`].
    pub const ACTION: Self = Self::CONTROL.union(Self::COMMAND);
}

/// True if `c` produces visible text (code point 32 or above).
///
/// Hosts report control characters such as `'\n'` or `'\t'` on the
/// character path too; text fields usually skip them.
#[must_use]
pub fn is_printable(c: char) -> bool {
    u32::from(c) >= 32
}
