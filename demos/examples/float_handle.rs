// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two draggable value handles on one surface.
//!
//! This example shows how a host drives:
//! - layout passes, where each handle registers its footprint,
//! - the hot-control protocol, where the nearest handle claims a press and
//!   keeps receiving the drag while the other handle sees `Ignore`,
//! - keyboard input, routed only to the handle holding keyboard focus.
//!
//! Run:
//! - `cargo run -p overpass_demos --example float_handle`

use kurbo::{Point, Vec2};
use overpass_control::{ControlIds, Interaction};
use overpass_dispatch::{Dispatcher, Pass, Receiver};
use overpass_event::{Event, EventKind, KeyCode, MouseButton};

/// A value on a horizontal track, drawn as a disc at `(value, 0)`.
#[derive(Debug)]
struct FloatHandle {
    name: &'static str,
    value: f64,
    radius: f64,
}

impl FloatHandle {
    fn center(&self) -> Point {
        Point::new(self.value, 0.0)
    }
}

impl Receiver for FloatHandle {
    fn on_layout(&mut self, pass: &mut Pass<'_>) {
        let center = self.center();
        let radius = self.radius;
        let event = pass.event();
        let control = pass.control();
        if let Err(err) = pass
            .interaction()
            .layout
            .add_disc(event, control, center, radius)
        {
            eprintln!("{}: layout registration failed: {err}", self.name);
        }
    }

    fn on_pointer_down(&mut self, pass: &mut Pass<'_>, _button: MouseButton) -> bool {
        let claimed = pass.try_claim_hot();
        if claimed {
            println!("{} grabbed at {:.1}", self.name, self.value);
        }
        claimed
    }

    fn on_pointer_drag(&mut self, pass: &mut Pass<'_>, _position: Point, delta: Vec2) -> bool {
        if pass.focus().hot() != Some(pass.control()) {
            return false;
        }
        self.value += delta.x;
        true
    }

    fn on_pointer_up(&mut self, pass: &mut Pass<'_>, _button: MouseButton) -> bool {
        let released = pass.try_release_hot();
        if released {
            println!("{} released at {:.1}", self.name, self.value);
        }
        released
    }

    fn on_key_down(&mut self, pass: &mut Pass<'_>, key: KeyCode) -> bool {
        if pass.focus().keyboard() != Some(pass.control()) {
            return false;
        }
        match key {
            KeyCode::LeftArrow => self.value -= 1.0,
            KeyCode::RightArrow => self.value += 1.0,
            _ => return false,
        }
        true
    }

    fn on_repaint(&mut self, pass: &mut Pass<'_>) {
        let marker = if pass.is_hot() { "*" } else { " " };
        println!("  {marker} {:<6} {:>7.1}", self.name, self.value);
    }
}

/// Run one pass over every handle, in order.
fn run_pass(
    label: &str,
    mut event: Event,
    ix: &mut Interaction,
    handles: &mut [Dispatcher<FloatHandle>],
) {
    println!("{label}:");
    ix.begin_pass(&event);
    for handle in handles.iter_mut() {
        handle.dispatch(None, &mut event, ix);
    }
    if event.is_consumed() {
        println!("  (consumed)");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut ids = ControlIds::new();
    let mut handles = vec![
        Dispatcher::with_ids(
            FloatHandle {
                name: "low",
                value: 20.0,
                radius: 4.0,
            },
            &mut ids,
        )?,
        Dispatcher::with_ids(
            FloatHandle {
                name: "high",
                value: 80.0,
                radius: 4.0,
            },
            &mut ids,
        )?,
    ];
    let mut ix = Interaction::new();

    let press_at = Point::new(81.0, 2.0);
    run_pass(
        "layout",
        Event::new(EventKind::Layout).with_position(press_at),
        &mut ix,
        &mut handles,
    );
    println!("  nearest: {:?}", ix.nearest());

    run_pass(
        "press",
        Event::pointer_down(MouseButton::Left, press_at),
        &mut ix,
        &mut handles,
    );
    run_pass(
        "drag",
        Event::pointer_motion(
            EventKind::PointerDrag,
            Point::new(51.0, 2.0),
            Vec2::new(-30.0, 0.0),
        ),
        &mut ix,
        &mut handles,
    );
    run_pass(
        "release",
        Event::pointer_up(MouseButton::Left, Point::new(51.0, 2.0)),
        &mut ix,
        &mut handles,
    );
    run_pass(
        "nudge",
        Event::key_down(KeyCode::RightArrow),
        &mut ix,
        &mut handles,
    );
    run_pass("repaint", Event::new(EventKind::Repaint), &mut ix, &mut handles);

    Ok(())
}
