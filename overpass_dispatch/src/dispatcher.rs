// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch engine: classify the current event and call one receiver method.
//!
//! ## Semantics
//!
//! For one call of [`Dispatcher::dispatch`]:
//!
//! 1. The control id is resolved: the explicit id if given, otherwise the
//!    dispatcher's identity.
//! 2. The session records the active pass.
//! 3. The host filters the event kind for that control
//!    ([`Interaction::kind_for_control`]).
//! 4. [`Receiver::on_event`] runs first. If it returns `true`, the typed
//!    callbacks are skipped.
//! 5. Otherwise exactly one typed callback runs, chosen by the filtered kind.
//!    Key-down goes to [`Receiver::on_key_down`] when a named key is present
//!    and to [`Receiver::on_character`] otherwise. Pointer-down goes to
//!    [`Receiver::on_double_click`] when the click count is 2 and to
//!    [`Receiver::on_pointer_down`] otherwise.
//! 6. `Ignore`, `Used` and `TouchStationary` call nothing and never consume.
//! 7. `Layout` and `Repaint` call their callback and never consume.
//! 8. If the decision is to consume, [`Receiver::on_will_consume`] runs, then
//!    the event is consumed.
//! 9. The session returns to idle, even if a callback panicked.
//!
//! Touch kinds share the pointer callbacks: `TouchDown`/`TouchUp` behave like
//! pointer down/up, `TouchMove` like a drag, `TouchEnter`/`TouchLeave` like
//! window enter/leave.
//!
//! ## Example
//!
//! ```
//! use overpass_control::Interaction;
//! use overpass_dispatch::{Dispatcher, Pass, Receiver};
//! use overpass_event::{ControlId, Event, EventKind, KeyCode};
//!
//! #[derive(Default)]
//! struct Keys(Vec<KeyCode>);
//!
//! impl Receiver for Keys {
//!     fn on_key_down(&mut self, _pass: &mut Pass<'_>, key: KeyCode) -> bool {
//!         self.0.push(key);
//!         true
//!     }
//! }
//!
//! let mut ix = Interaction::new();
//! let mut dispatcher = Dispatcher::new(Keys::default(), ControlId::new(1).unwrap());
//!
//! let mut ev = Event::key_down(KeyCode::Return);
//! assert!(dispatcher.dispatch(None, &mut ev, &mut ix));
//! assert_eq!(ev.kind(), EventKind::Used);
//! assert_eq!(dispatcher.receiver().0, vec![KeyCode::Return]);
//! assert!(dispatcher.is_idle());
//! ```

use overpass_control::{ControlError, ControlIds, Interaction, resolve_control_id};
use overpass_event::{Command, ControlId, Event, EventKind};

use crate::pass::{Pass, PassContext};
use crate::receiver::Receiver;

/// Transient record of the dispatch currently running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActivePass {
    /// Resolved control id.
    pub control: ControlId,
    /// Event kind after host filtering.
    pub kind: EventKind,
    /// Surface the dispatch runs in.
    pub context: PassContext,
}

#[derive(Debug, Default)]
struct Session {
    active: Option<ActivePass>,
}

/// Resets the session when dropped, including during unwinding.
struct SessionGuard<'s> {
    session: &'s mut Session,
}

impl<'s> SessionGuard<'s> {
    fn enter(session: &'s mut Session, active: ActivePass) -> Self {
        debug_assert!(session.active.is_none(), "dispatch session already active");
        session.active = Some(active);
        Self { session }
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.session.active = None;
    }
}

/// Dispatches per-pass events to one receiver.
///
/// The dispatcher is bound to its receiver for its whole life. The receiver's
/// identity is used as the control id whenever a dispatch call does not pass
/// an explicit one.
#[derive(Debug)]
pub struct Dispatcher<R> {
    receiver: R,
    identity: ControlId,
    session: Session,
}

impl<R: Receiver> Dispatcher<R> {
    /// Bind `receiver` under `identity`.
    pub fn new(receiver: R, identity: ControlId) -> Self {
        Self {
            receiver,
            identity,
            session: Session::default(),
        }
    }

    /// Bind `receiver` under the next identity from `ids`.
    pub fn with_ids(receiver: R, ids: &mut ControlIds) -> Result<Self, ControlError> {
        Ok(Self::new(receiver, ids.next_id()?))
    }

    /// Identity used when no explicit control id is passed.
    #[must_use]
    pub fn identity(&self) -> ControlId {
        self.identity
    }

    /// The dispatch currently running, `None` when idle.
    #[must_use]
    pub fn active(&self) -> Option<ActivePass> {
        self.session.active
    }

    /// True outside of a dispatch call.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.session.active.is_none()
    }

    /// The bound receiver.
    #[must_use]
    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    /// The bound receiver, mutably.
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    /// Unbind and return the receiver.
    pub fn into_receiver(self) -> R {
        self.receiver
    }

    /// Dispatch `event` on a plain GUI surface.
    ///
    /// Returns `true` if the event was consumed by this call.
    pub fn dispatch(
        &mut self,
        control: Option<ControlId>,
        event: &mut Event,
        interaction: &mut Interaction,
    ) -> bool {
        self.dispatch_in(PassContext::Gui, control, event, interaction)
    }

    /// Dispatch `event` on the given surface.
    ///
    /// Returns `true` if the event was consumed by this call.
    pub fn dispatch_in(
        &mut self,
        context: PassContext,
        control: Option<ControlId>,
        event: &mut Event,
        interaction: &mut Interaction,
    ) -> bool {
        let control = resolve_control_id(control, self.identity);
        let kind = interaction.kind_for_control(event, control);
        let _guard = SessionGuard::enter(
            &mut self.session,
            ActivePass {
                control,
                kind,
                context,
            },
        );
        tracing::trace!(
            target: "overpass::dispatch",
            %control,
            ?kind,
            ?context,
            "dispatching"
        );

        let consume = {
            let mut pass = Pass {
                event: &*event,
                control,
                kind,
                context,
                interaction,
            };
            let consume =
                self.receiver.on_event(&mut pass) || deliver(&mut self.receiver, &mut pass);
            if consume {
                self.receiver.on_will_consume(&pass);
            }
            consume
        };

        if consume {
            event.consume();
            tracing::debug!(target: "overpass::dispatch", %control, ?kind, "event consumed");
        }
        consume
    }
}

/// Call the typed callback for `pass.kind()` and report whether to consume.
fn deliver<R: Receiver + ?Sized>(receiver: &mut R, pass: &mut Pass<'_>) -> bool {
    let ev = pass.event();
    match pass.kind() {
        EventKind::Ignore | EventKind::Used | EventKind::TouchStationary => false,

        EventKind::KeyDown => match ev.key {
            Some(key) => receiver.on_key_down(pass, key),
            None => receiver.on_character(pass, ev.character.unwrap_or('\0')),
        },
        EventKind::KeyUp => receiver.on_key_up(pass, ev.key),

        EventKind::PointerDown | EventKind::TouchDown => {
            if ev.click_count == 2 {
                receiver.on_double_click(pass)
            } else {
                receiver.on_pointer_down(pass, ev.button)
            }
        }
        EventKind::PointerUp | EventKind::TouchUp => receiver.on_pointer_up(pass, ev.button),
        EventKind::PointerMove => receiver.on_pointer_move(pass, ev.position, ev.delta),
        EventKind::PointerDrag | EventKind::TouchMove => {
            receiver.on_pointer_drag(pass, ev.position, ev.delta)
        }
        EventKind::PointerEnterWindow | EventKind::TouchEnter => {
            receiver.on_pointer_enter_window(pass, ev.position)
        }
        EventKind::PointerLeaveWindow | EventKind::TouchLeave => {
            receiver.on_pointer_leave_window(pass, ev.position)
        }

        EventKind::ContextClick => receiver.on_context_click(pass, ev.position),
        EventKind::ScrollWheel => receiver.on_scroll_wheel(pass, ev.wheel_delta),

        EventKind::DragUpdated => receiver.on_drag_update(pass, ev.position),
        EventKind::DragPerform => receiver.on_drag_perform(pass, ev.position),
        EventKind::DragExited => receiver.on_drag_cancel(pass, ev.position),

        EventKind::ValidateCommand => receiver.on_validate_command(pass, command_of(ev)),
        EventKind::ExecuteCommand => receiver.on_execute_command(pass, command_of(ev)),

        EventKind::Layout => {
            receiver.on_layout(pass);
            false
        }
        EventKind::Repaint => {
            receiver.on_repaint(pass);
            false
        }
    }
}

fn command_of(ev: &Event) -> Command {
    Command::from_token(ev.command_token().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Vec2};
    use overpass_event::{KeyCode, Modifiers, MouseButton};
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Raw(EventKind),
        KeyDown(KeyCode),
        KeyUp(Option<KeyCode>),
        Character(char),
        PointerDown(MouseButton),
        DoubleClick,
        PointerUp(MouseButton),
        PointerMove(Point, Vec2),
        PointerDrag(Point, Vec2),
        Enter(Point),
        Leave(Point),
        ContextClick(Point),
        Scroll(Vec2),
        DragUpdate(Point),
        DragPerform(Point),
        DragCancel(Point),
        Validate(Command),
        Execute(Command),
        Layout,
        Repaint,
        WillConsume { kind: EventKind, consumed: bool },
    }

    /// Records every callback and answers with `reply`.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        reply: bool,
        raw_reply: bool,
        controls: Vec<ControlId>,
    }

    impl Recorder {
        fn replying(reply: bool) -> Self {
            Self {
                reply,
                ..Self::default()
            }
        }

        fn log(&mut self, pass: &Pass<'_>, call: Call) -> bool {
            self.controls.push(pass.control());
            self.calls.push(call);
            self.reply
        }

        /// Typed calls only, without the raw hook and pre-consume entries.
        fn typed(&self) -> Vec<Call> {
            self.calls
                .iter()
                .filter(|c| !matches!(c, Call::Raw(_) | Call::WillConsume { .. }))
                .cloned()
                .collect()
        }
    }

    impl Receiver for Recorder {
        fn on_event(&mut self, pass: &mut Pass<'_>) -> bool {
            self.calls.push(Call::Raw(pass.kind()));
            self.raw_reply
        }
        fn on_key_down(&mut self, pass: &mut Pass<'_>, key: KeyCode) -> bool {
            self.log(pass, Call::KeyDown(key))
        }
        fn on_key_up(&mut self, pass: &mut Pass<'_>, key: Option<KeyCode>) -> bool {
            self.log(pass, Call::KeyUp(key))
        }
        fn on_character(&mut self, pass: &mut Pass<'_>, character: char) -> bool {
            self.log(pass, Call::Character(character))
        }
        fn on_pointer_down(&mut self, pass: &mut Pass<'_>, button: MouseButton) -> bool {
            self.log(pass, Call::PointerDown(button))
        }
        fn on_double_click(&mut self, pass: &mut Pass<'_>) -> bool {
            self.log(pass, Call::DoubleClick)
        }
        fn on_pointer_up(&mut self, pass: &mut Pass<'_>, button: MouseButton) -> bool {
            self.log(pass, Call::PointerUp(button))
        }
        fn on_pointer_move(&mut self, pass: &mut Pass<'_>, position: Point, delta: Vec2) -> bool {
            self.log(pass, Call::PointerMove(position, delta))
        }
        fn on_pointer_drag(&mut self, pass: &mut Pass<'_>, position: Point, delta: Vec2) -> bool {
            self.log(pass, Call::PointerDrag(position, delta))
        }
        fn on_pointer_enter_window(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::Enter(position))
        }
        fn on_pointer_leave_window(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::Leave(position))
        }
        fn on_context_click(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::ContextClick(position))
        }
        fn on_scroll_wheel(&mut self, pass: &mut Pass<'_>, delta: Vec2) -> bool {
            self.log(pass, Call::Scroll(delta))
        }
        fn on_drag_update(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::DragUpdate(position))
        }
        fn on_drag_perform(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::DragPerform(position))
        }
        fn on_drag_cancel(&mut self, pass: &mut Pass<'_>, position: Point) -> bool {
            self.log(pass, Call::DragCancel(position))
        }
        fn on_validate_command(&mut self, pass: &mut Pass<'_>, command: Command) -> bool {
            self.log(pass, Call::Validate(command))
        }
        fn on_execute_command(&mut self, pass: &mut Pass<'_>, command: Command) -> bool {
            self.log(pass, Call::Execute(command))
        }
        fn on_layout(&mut self, pass: &mut Pass<'_>) {
            self.log(pass, Call::Layout);
        }
        fn on_repaint(&mut self, pass: &mut Pass<'_>) {
            self.log(pass, Call::Repaint);
        }
        fn on_will_consume(&mut self, pass: &Pass<'_>) {
            self.calls.push(Call::WillConsume {
                kind: pass.event().kind(),
                consumed: pass.event().is_consumed(),
            });
        }
    }

    fn id(raw: u32) -> ControlId {
        ControlId::new(raw).unwrap()
    }

    fn dispatcher(reply: bool) -> Dispatcher<Recorder> {
        Dispatcher::new(Recorder::replying(reply), id(777))
    }


    fn touch(kind: EventKind, position: Point) -> Event {
        let mut ev = Event::new(kind).with_position(position);
        ev.click_count = 1;
        ev
    }

    /// One representative event per kind, with the typed call it must produce.
    fn table() -> Vec<(Event, Option<Call>)> {
        let p = Point::new(4.0, 5.0);
        let d = Vec2::new(1.0, -1.0);
        let mut touch_move = touch(EventKind::TouchMove, p);
        touch_move.delta = d;
        vec![
            (Event::new(EventKind::Ignore), None),
            (Event::new(EventKind::Used), None),
            (Event::new(EventKind::TouchStationary), None),
            (Event::key_down(KeyCode::Return), Some(Call::KeyDown(KeyCode::Return))),
            (Event::character('a'), Some(Call::Character('a'))),
            (Event::key_up(KeyCode::Tab), Some(Call::KeyUp(Some(KeyCode::Tab)))),
            (
                Event::pointer_down(MouseButton::Middle, p),
                Some(Call::PointerDown(MouseButton::Middle)),
            ),
            (
                Event::pointer_down(MouseButton::Left, p).with_click_count(2),
                Some(Call::DoubleClick),
            ),
            (
                Event::pointer_up(MouseButton::Right, p),
                Some(Call::PointerUp(MouseButton::Right)),
            ),
            (
                Event::pointer_motion(EventKind::PointerMove, p, d),
                Some(Call::PointerMove(p, d)),
            ),
            (
                Event::pointer_motion(EventKind::PointerDrag, p, d),
                Some(Call::PointerDrag(p, d)),
            ),
            (
                Event::new(EventKind::PointerEnterWindow).with_position(p),
                Some(Call::Enter(p)),
            ),
            (
                Event::new(EventKind::PointerLeaveWindow).with_position(p),
                Some(Call::Leave(p)),
            ),
            (
                Event::new(EventKind::ContextClick).with_position(p),
                Some(Call::ContextClick(p)),
            ),
            (Event::scroll(p, d), Some(Call::Scroll(d))),
            (
                Event::new(EventKind::DragUpdated).with_position(p),
                Some(Call::DragUpdate(p)),
            ),
            (
                Event::new(EventKind::DragPerform).with_position(p),
                Some(Call::DragPerform(p)),
            ),
            (
                Event::new(EventKind::DragExited).with_position(p),
                Some(Call::DragCancel(p)),
            ),
            (
                Event::command(EventKind::ValidateCommand, "Copy"),
                Some(Call::Validate(Command::Copy)),
            ),
            (
                Event::command(EventKind::ExecuteCommand, "Paste"),
                Some(Call::Execute(Command::Paste)),
            ),
            (Event::new(EventKind::Layout), Some(Call::Layout)),
            (Event::new(EventKind::Repaint), Some(Call::Repaint)),
            (
                touch(EventKind::TouchDown, p),
                Some(Call::PointerDown(MouseButton::Left)),
            ),
            (
                touch(EventKind::TouchUp, p),
                Some(Call::PointerUp(MouseButton::Left)),
            ),
            (touch_move, Some(Call::PointerDrag(p, d))),
            (touch(EventKind::TouchEnter, p), Some(Call::Enter(p))),
            (touch(EventKind::TouchLeave, p), Some(Call::Leave(p))),
        ]
    }

    fn never_consumes(kind: EventKind) -> bool {
        matches!(kind, EventKind::Layout | EventKind::Repaint)
    }

    #[test]
    fn table_covers_every_kind() {
        let kinds: Vec<EventKind> = table()
            .iter()
            .map(|(ev, _)| ev.original_kind())
            .collect();
        for kind in EventKind::ALL {
            assert!(kinds.contains(&kind), "{kind:?} missing from the dispatch table");
        }
    }

    #[test]
    fn each_kind_invokes_at_most_one_typed_callback() {
        for (mut ev, expected) in table() {
            let kind = ev.original_kind();
            let mut ix = Interaction::new();
            let mut d = dispatcher(true);
            d.dispatch(None, &mut ev, &mut ix);
            let rec = d.receiver();

            assert_eq!(
                rec.calls.first(),
                Some(&Call::Raw(kind)),
                "raw hook first for {kind:?}"
            );
            assert_eq!(
                rec.calls.iter().filter(|c| matches!(c, Call::Raw(_))).count(),
                1,
                "raw hook once for {kind:?}"
            );
            assert_eq!(rec.typed(), expected.into_iter().collect::<Vec<_>>(), "{kind:?}");
        }
    }

    #[test]
    fn consume_follows_callback_result() {
        for reply in [true, false] {
            for (mut ev, expected) in table() {
                let kind = ev.original_kind();
                let mut ix = Interaction::new();
                let mut d = dispatcher(reply);
                let consumed = d.dispatch(None, &mut ev, &mut ix);

                let should = reply && expected.is_some() && !never_consumes(kind);
                assert_eq!(consumed, should, "{kind:?} with reply {reply}");
                assert_eq!(ev.is_consumed(), should, "{kind:?} with reply {reply}");

                let will = d
                    .receiver()
                    .calls
                    .iter()
                    .filter(|c| matches!(c, Call::WillConsume { .. }))
                    .count();
                assert_eq!(will, usize::from(should), "{kind:?} with reply {reply}");
            }
        }
    }

    #[test]
    fn will_consume_sees_the_unconsumed_event() {
        let mut ix = Interaction::new();
        let mut d = dispatcher(true);
        let mut ev = Event::pointer_down(MouseButton::Left, Point::ZERO);
        assert!(d.dispatch(None, &mut ev, &mut ix));
        assert_eq!(
            d.receiver().calls.last(),
            Some(&Call::WillConsume {
                kind: EventKind::PointerDown,
                consumed: false,
            })
        );
        assert_eq!(ev.kind(), EventKind::Used);
    }

    #[test]
    fn key_down_partitions_on_named_key() {
        let mut ix = Interaction::new();

        let mut with_both = Event::key_down(KeyCode::Letter('A'));
        with_both.character = Some('a');
        let mut d = dispatcher(false);
        d.dispatch(None, &mut with_both, &mut ix);
        assert_eq!(d.receiver().typed(), vec![Call::KeyDown(KeyCode::Letter('A'))]);

        let mut d = dispatcher(false);
        d.dispatch(None, &mut Event::character('é'), &mut ix);
        assert_eq!(d.receiver().typed(), vec![Call::Character('é')]);

        let mut d = dispatcher(false);
        d.dispatch(None, &mut Event::new(EventKind::KeyDown), &mut ix);
        assert_eq!(d.receiver().typed(), vec![Call::Character('\0')]);
    }

    #[test]
    fn pointer_down_partitions_on_click_count() {
        let mut ix = Interaction::new();
        for count in 0..5 {
            let mut ev =
                Event::pointer_down(MouseButton::Left, Point::ZERO).with_click_count(count);
            let mut d = dispatcher(false);
            d.dispatch(None, &mut ev, &mut ix);
            let expected = if count == 2 {
                Call::DoubleClick
            } else {
                Call::PointerDown(MouseButton::Left)
            };
            assert_eq!(d.receiver().typed(), vec![expected], "click count {count}");
        }
    }

    #[test]
    fn return_key_on_key_down_only_receiver() {
        #[derive(Default)]
        struct KeysOnly {
            keys: Vec<KeyCode>,
        }
        impl Receiver for KeysOnly {
            fn on_key_down(&mut self, _pass: &mut Pass<'_>, key: KeyCode) -> bool {
                self.keys.push(key);
                true
            }
        }

        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(KeysOnly::default(), id(1));
        let mut ev = Event::key_down(KeyCode::Return);
        assert!(d.dispatch(None, &mut ev, &mut ix));
        assert!(ev.is_consumed());
        assert_eq!(d.into_receiver().keys, vec![KeyCode::Return]);
    }

    #[test]
    fn default_receiver_consumes_nothing() {
        struct Nothing;
        impl Receiver for Nothing {}

        let mut d = Dispatcher::new(Nothing, id(1));
        for (mut ev, _) in table() {
            let mut ix = Interaction::new();
            assert!(!d.dispatch(None, &mut ev, &mut ix));
            assert!(!ev.is_consumed());
        }
    }

    #[test]
    fn identity_is_used_without_explicit_id() {
        let mut ix = Interaction::new();
        let mut d = dispatcher(true);
        let mut ev = Event::pointer_down(MouseButton::Left, Point::ZERO);
        d.dispatch(None, &mut ev, &mut ix);
        assert_eq!(d.receiver().controls, vec![id(777)]);
        assert_eq!(d.receiver().typed(), vec![Call::PointerDown(MouseButton::Left)]);
    }

    #[test]
    fn explicit_id_overrides_identity() {
        let mut ix = Interaction::new();
        let mut d = dispatcher(false);
        d.dispatch(Some(id(42)), &mut Event::key_down(KeyCode::Escape), &mut ix);
        d.dispatch(ControlId::new(0), &mut Event::key_down(KeyCode::Escape), &mut ix);
        assert_eq!(d.receiver().controls, vec![id(42), id(777)]);
    }

    #[test]
    fn commands_are_mapped_and_tokens_kept() {
        #[derive(Default)]
        struct Commands {
            seen: Vec<(Command, Option<String>)>,
        }
        impl Receiver for Commands {
            fn on_validate_command(&mut self, pass: &mut Pass<'_>, command: Command) -> bool {
                self.seen
                    .push((command, pass.event().command_token().map(String::from)));
                command == Command::Copy
            }
        }

        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(Commands::default(), id(1));
        let mut copy = Event::command(EventKind::ValidateCommand, "Copy");
        let mut foo = Event::command(EventKind::ValidateCommand, "FooBar");
        assert!(d.dispatch(None, &mut copy, &mut ix));
        assert!(!d.dispatch(None, &mut foo, &mut ix));
        assert_eq!(
            d.receiver().seen,
            vec![
                (Command::Copy, Some(String::from("Copy"))),
                (Command::Custom, Some(String::from("FooBar"))),
            ]
        );
    }

    #[test]
    fn ignore_invokes_nothing() {
        let mut ix = Interaction::new();
        let mut d = dispatcher(true);
        let mut ev = Event::new(EventKind::Ignore);
        assert!(!d.dispatch(None, &mut ev, &mut ix));
        assert!(!ev.is_consumed());
        assert!(d.receiver().typed().is_empty());
    }

    #[test]
    fn raw_hook_short_circuits_typed_dispatch() {
        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(
            Recorder {
                raw_reply: true,
                ..Recorder::default()
            },
            id(1),
        );
        let mut ev = Event::key_down(KeyCode::Return);
        assert!(d.dispatch(None, &mut ev, &mut ix));
        assert!(ev.is_consumed());
        assert_eq!(
            d.receiver().calls,
            vec![
                Call::Raw(EventKind::KeyDown),
                Call::WillConsume {
                    kind: EventKind::KeyDown,
                    consumed: false,
                },
            ]
        );
    }

    #[test]
    fn raw_hook_can_consume_informational_passes() {
        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(
            Recorder {
                raw_reply: true,
                ..Recorder::default()
            },
            id(1),
        );
        let mut ev = Event::new(EventKind::Repaint);
        assert!(d.dispatch(None, &mut ev, &mut ix));
        assert!(d.receiver().typed().is_empty());
    }

    #[test]
    fn session_resets_between_sequential_calls() {
        let mut ix = Interaction::new();
        let mut d = dispatcher(true);
        assert!(d.is_idle());

        let mut first = Event::key_down(KeyCode::Return);
        d.dispatch(Some(id(5)), &mut first, &mut ix);
        assert!(d.is_idle());
        assert_eq!(d.active(), None);

        let mut second = Event::new(EventKind::Repaint);
        d.dispatch(None, &mut second, &mut ix);
        assert!(d.is_idle());
        let raw: Vec<Call> = d
            .receiver()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Raw(_)))
            .cloned()
            .collect();
        assert_eq!(
            raw,
            vec![Call::Raw(EventKind::KeyDown), Call::Raw(EventKind::Repaint)]
        );
        assert_eq!(d.receiver().controls, vec![id(5), id(777)]);
        assert!(!second.is_consumed());
    }

    #[test]
    fn session_resets_when_a_callback_panics() {
        struct Boom;
        impl Receiver for Boom {
            fn on_key_down(&mut self, _pass: &mut Pass<'_>, _key: KeyCode) -> bool {
                panic!("receiver failure");
            }
        }

        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(Boom, id(1));
        let mut ev = Event::key_down(KeyCode::Return);
        let result = catch_unwind(AssertUnwindSafe(|| d.dispatch(None, &mut ev, &mut ix)));
        assert!(result.is_err());
        assert!(d.is_idle());
        assert!(!ev.is_consumed());
    }

    #[test]
    fn consumed_event_reaches_later_controls_as_used() {
        let mut ix = Interaction::new();
        let mut first = dispatcher(true);
        let mut second = Dispatcher::new(Recorder::replying(true), id(2));
        let mut ev = Event::pointer_down(MouseButton::Left, Point::ZERO);

        assert!(first.dispatch(None, &mut ev, &mut ix));
        assert!(!second.dispatch(None, &mut ev, &mut ix));
        assert_eq!(second.receiver().calls, vec![Call::Raw(EventKind::Used)]);
    }

    #[test]
    fn filtered_kind_hides_input_from_other_controls() {
        let mut ix = Interaction::new();
        let layout = Event::new(EventKind::Layout);
        ix.layout.add_control(&layout, id(9), 0.0).unwrap();
        assert!(ix.try_claim(id(9), &Event::pointer_down(MouseButton::Left, Point::ZERO)));

        let mut d = dispatcher(true);
        let mut drag = Event::pointer_motion(EventKind::PointerDrag, Point::ZERO, Vec2::ZERO);
        assert!(!d.dispatch(None, &mut drag, &mut ix));
        assert_eq!(d.receiver().calls, vec![Call::Raw(EventKind::Ignore)]);

        let mut key = Event::key_down(KeyCode::Delete).with_modifiers(Modifiers::SHIFT);
        assert!(!d.dispatch(None, &mut key, &mut ix));
        assert!(d.receiver().typed().is_empty());
    }

    #[test]
    fn pass_reports_context() {
        #[derive(Default)]
        struct Contexts(Vec<PassContext>);
        impl Receiver for Contexts {
            fn on_repaint(&mut self, pass: &mut Pass<'_>) {
                self.0.push(pass.context());
            }
        }

        let mut ix = Interaction::new();
        let mut d = Dispatcher::new(Contexts::default(), id(1));
        let mut ev = Event::new(EventKind::Repaint);
        d.dispatch(None, &mut ev, &mut ix);
        d.dispatch_in(PassContext::SceneView, None, &mut ev, &mut ix);
        assert_eq!(d.receiver().0, vec![PassContext::Gui, PassContext::SceneView]);
    }

    #[test]
    fn with_ids_allocates_distinct_identities() {
        let mut ids = ControlIds::new();
        let a = Dispatcher::with_ids(Recorder::default(), &mut ids).unwrap();
        let b = Dispatcher::with_ids(Recorder::default(), &mut ids).unwrap();
        assert_ne!(a.identity(), b.identity());
    }

    /// A minimal handle: claims on press when nominated, releases on release.
    #[derive(Default)]
    struct Handle {
        value: f64,
        radius: f64,
    }

    impl Receiver for Handle {
        fn on_layout(&mut self, pass: &mut Pass<'_>) {
            let distance = (pass.event().position.x - self.value).abs() - self.radius;
            pass.add_control(distance.max(0.0)).unwrap();
        }
        fn on_pointer_down(&mut self, pass: &mut Pass<'_>, _button: MouseButton) -> bool {
            pass.try_claim_hot()
        }
        fn on_pointer_drag(&mut self, pass: &mut Pass<'_>, _position: Point, delta: Vec2) -> bool {
            if pass.focus().hot() != Some(pass.control()) {
                return false;
            }
            self.value += delta.x;
            true
        }
        fn on_pointer_up(&mut self, pass: &mut Pass<'_>, _button: MouseButton) -> bool {
            pass.try_release_hot()
        }
    }

    #[test]
    fn handles_follow_the_hot_control_protocol() {
        let mut ix = Interaction::new();
        let mut near = Dispatcher::new(Handle { value: 0.0, radius: 2.0 }, id(1));
        let mut far = Dispatcher::new(Handle { value: 100.0, radius: 2.0 }, id(2));

        fn run(
            ev: &mut Event,
            ix: &mut Interaction,
            a: &mut Dispatcher<Handle>,
            b: &mut Dispatcher<Handle>,
        ) -> (bool, bool) {
            ix.begin_pass(ev);
            let used_a = a.dispatch(None, ev, ix);
            let used_b = b.dispatch(None, ev, ix);
            (used_a, used_b)
        }

        let mut layout = Event::new(EventKind::Layout).with_position(Point::new(1.0, 0.0));
        assert_eq!(run(&mut layout, &mut ix, &mut near, &mut far), (false, false));
        assert_eq!(ix.nearest(), Some(id(1)));

        let mut down = Event::pointer_down(MouseButton::Left, Point::new(1.0, 0.0));
        assert_eq!(run(&mut down, &mut ix, &mut near, &mut far), (true, false));
        assert_eq!(ix.focus.hot(), Some(id(1)));

        let mut drag = Event::pointer_motion(
            EventKind::PointerDrag,
            Point::new(61.0, 0.0),
            Vec2::new(60.0, 0.0),
        );
        assert_eq!(run(&mut drag, &mut ix, &mut near, &mut far), (true, false));
        assert_eq!(near.receiver().value, 60.0);
        assert_eq!(far.receiver().value, 100.0);

        let mut up = Event::pointer_up(MouseButton::Left, Point::new(61.0, 0.0));
        assert_eq!(run(&mut up, &mut ix, &mut near, &mut far), (true, false));
        assert_eq!(ix.focus.hot(), None);
        assert!(ix.is_hot(id(1)), "keyboard focus stays with the last claimant");
    }

    #[test]
    fn alt_press_does_not_claim() {
        let mut ix = Interaction::new();
        let mut handle = Dispatcher::new(Handle { value: 0.0, radius: 2.0 }, id(1));

        let mut layout = Event::new(EventKind::Layout);
        ix.begin_pass(&layout);
        handle.dispatch(None, &mut layout, &mut ix);

        let mut down =
            Event::pointer_down(MouseButton::Left, Point::ZERO).with_modifiers(Modifiers::ALT);
        assert!(!handle.dispatch(None, &mut down, &mut ix));
        assert_eq!(ix.focus.hot(), None);
    }
}
