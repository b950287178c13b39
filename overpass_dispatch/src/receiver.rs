// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The receiver capability trait.

use kurbo::{Point, Vec2};
use overpass_event::{Command, KeyCode, MouseButton};

use crate::pass::Pass;

/// Typed callbacks for one control.
///
/// Every method has a default that does nothing and returns `false`, so a
/// receiver implements only the kinds it cares about. Returning `true` asks
/// the dispatcher to consume the event, which hides it from every control
/// that runs later in the pass.
///
/// Callbacks run synchronously, one at a time, inside
/// [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
///
/// ```
/// use overpass_dispatch::{Pass, Receiver};
/// use overpass_event::KeyCode;
///
/// struct Submit {
///     submitted: u32,
/// }
///
/// impl Receiver for Submit {
///     fn on_key_down(&mut self, _pass: &mut Pass<'_>, key: KeyCode) -> bool {
///         if key.is_submit() {
///             self.submitted += 1;
///             return true;
///         }
///         false
///     }
/// }
/// ```
#[allow(unused_variables, reason = "default bodies ignore their payloads")]
pub trait Receiver {
    /// Raw hook, called first for every event.
    ///
    /// Returning `true` consumes the event and skips the typed callbacks
    /// entirely. Use it for handling that is awkward to express per kind;
    /// match on [`Pass::kind`] here.
    fn on_event(&mut self, pass: &mut Pass<'_>) -> bool {
        false
    }

    /// A named key was pressed. Repeats while the key is held.
    fn on_key_down(&mut self, pass: &mut Pass<'_>, key: KeyCode) -> bool {
        false
    }

    /// A key was released.
    fn on_key_up(&mut self, pass: &mut Pass<'_>, key: Option<KeyCode>) -> bool {
        false
    }

    /// A character was typed, with modifiers already applied. Repeats while
    /// the key is held.
    ///
    /// Use this for text input only and [`Receiver::on_key_down`] for
    /// actions: which physical key produces a character depends on the
    /// keyboard layout, caps lock and held modifiers. There is no matching
    /// "character up" callback. `'\0'` is passed when the host reported
    /// neither a named key nor a character.
    fn on_character(&mut self, pass: &mut Pass<'_>, character: char) -> bool {
        false
    }

    /// A pointer button was pressed (single click) or a touch began.
    fn on_pointer_down(&mut self, pass: &mut Pass<'_>, button: MouseButton) -> bool {
        false
    }

    /// A pointer button was double-clicked or the surface double-tapped.
    fn on_double_click(&mut self, pass: &mut Pass<'_>) -> bool {
        false
    }

    /// A pointer button was released or a touch ended.
    fn on_pointer_up(&mut self, pass: &mut Pass<'_>, button: MouseButton) -> bool {
        false
    }

    /// The pointer moved with no button held.
    fn on_pointer_move(&mut self, pass: &mut Pass<'_>, position: Point, delta: Vec2) -> bool {
        false
    }

    /// The pointer moved with a button held, or a touch moved.
    fn on_pointer_drag(&mut self, pass: &mut Pass<'_>, position: Point, delta: Vec2) -> bool {
        false
    }

    /// The pointer or a touch entered the window.
    fn on_pointer_enter_window(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// The pointer or a touch left the window.
    fn on_pointer_leave_window(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// A context menu was requested at `position`.
    fn on_context_click(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// The scroll wheel moved.
    fn on_scroll_wheel(&mut self, pass: &mut Pass<'_>, delta: Vec2) -> bool {
        false
    }

    /// A drag-and-drop operation moved over the surface.
    fn on_drag_update(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// A drag-and-drop operation was dropped on the surface.
    fn on_drag_perform(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// A drag-and-drop operation left the surface or was cancelled.
    fn on_drag_cancel(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
        false
    }

    /// The host asks whether `command` is available. Return `true` to say yes.
    ///
    /// For [`Command::Custom`] read the raw token from
    /// [`Event::command_token`](overpass_event::Event::command_token).
    fn on_validate_command(&mut self, pass: &mut Pass<'_>, command: Command) -> bool {
        false
    }

    /// The host asks to run `command`. Return `true` once handled.
    fn on_execute_command(&mut self, pass: &mut Pass<'_>, command: Command) -> bool {
        false
    }

    /// Layout pass. Register hit-test footprints here with
    /// [`Pass::add_control`]. Never consumes.
    fn on_layout(&mut self, pass: &mut Pass<'_>) {}

    /// Repaint pass. Never consumes.
    fn on_repaint(&mut self, pass: &mut Pass<'_>) {}

    /// Called right before the event is consumed.
    ///
    /// The event still reports its original kind here; once this returns it
    /// reports [`EventKind::Used`](overpass_event::EventKind::Used).
    fn on_will_consume(&mut self, pass: &Pass<'_>) {}
}
