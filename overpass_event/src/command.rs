// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command mapping for validate/execute command events.
//!
//! Hosts carry commands as raw string tokens. [`Command::from_token`] maps a
//! token onto a closed set so receivers can `match` instead of comparing
//! strings. Tokens the set does not know become [`Command::Custom`]; the raw
//! token remains available on the event via
//! [`Event::command_token`](crate::Event::command_token).
//!
//! ```
//! use overpass_event::Command;
//!
//! assert_eq!(Command::from_token("Copy"), Command::Copy);
//! assert_eq!(Command::from_token("copy"), Command::Custom);
//! assert_eq!(Command::from_token("FooBar"), Command::Custom);
//! ```

/// Known editor commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Token not in the known set. Inspect the raw token on the event.
    Custom,
    /// Copy (Ctrl+C).
    Copy,
    /// Cut (Ctrl+X).
    Cut,
    /// Paste (Ctrl+V).
    Paste,
    /// Duplicate (Ctrl+D).
    Duplicate,
    /// Delete (Shift+Del).
    Delete,
    /// Delete (Del).
    SoftDelete,
    /// Rename.
    Rename,
    /// Find (Ctrl+F).
    Find,
    /// Select all.
    SelectAll,
    /// Clear the selection.
    DeselectAll,
    /// Invert the selection.
    InvertSelection,
    /// Extend the selection to children.
    SelectChildren,
    /// Select the root of the selected prefab.
    SelectPrefabRoot,
    /// An undo or redo was performed.
    UndoRedoPerformed,
    /// The surface lost focus.
    OnLostFocus,
    /// Modifier key state changed.
    ModifierKeysChanged,
    /// Frame the selection ('F' in a scene view).
    FrameSelected,
    /// Frame and lock onto the selection (Shift+F in a scene view).
    FrameSelectedWithLock,
    /// Scene view picking (primary button).
    SceneViewPicking,
    /// Scene view camera motion took the hot control (secondary button).
    SetSceneViewMotionHotControl,
}

const TABLE: [(&str, Command); 20] = [
    ("Copy", Command::Copy),
    ("Cut", Command::Cut),
    ("Paste", Command::Paste),
    ("Duplicate", Command::Duplicate),
    ("Delete", Command::Delete),
    ("SoftDelete", Command::SoftDelete),
    ("Rename", Command::Rename),
    ("Find", Command::Find),
    ("SelectAll", Command::SelectAll),
    ("DeselectAll", Command::DeselectAll),
    ("InvertSelection", Command::InvertSelection),
    ("SelectChildren", Command::SelectChildren),
    ("SelectPrefabRoot", Command::SelectPrefabRoot),
    ("UndoRedoPerformed", Command::UndoRedoPerformed),
    ("OnLostFocus", Command::OnLostFocus),
    ("ModifierKeysChanged", Command::ModifierKeysChanged),
    ("FrameSelected", Command::FrameSelected),
    ("FrameSelectedWithLock", Command::FrameSelectedWithLock),
    ("SceneViewPicking", Command::SceneViewPicking),
    (
        "SetSceneViewMotionHotControl",
        Command::SetSceneViewMotionHotControl,
    ),
];

impl Command {
    /// Map a raw command token. Exact, case-sensitive match; never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        TABLE
            .iter()
            .find_map(|(name, command)| (*name == token).then_some(*command))
            .unwrap_or(Self::Custom)
    }

    /// Canonical token of a known command; `None` for [`Command::Custom`].
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        TABLE
            .iter()
            .find_map(|(name, command)| (*command == self).then_some(*name))
    }
}

impl From<&str> for Command {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

/// Free-function form of [`Command::from_token`].
#[must_use]
pub fn map_command(token: &str) -> Command {
    Command::from_token(token)
}
