// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overpass Event: the per-pass event model for immediate-mode UI.
//!
//! ## Overview
//!
//! An immediate-mode host runs every control once per pass and hands each of
//! them the same current [`Event`]. This crate models that value:
//!
//! - [`EventKind`]: the closed set of kinds a host may report, with stable
//!   ordinals for hosts that speak numbers.
//! - [`Event`]: kind plus payload (key, character, pointer position and delta,
//!   wheel delta, button, click count, modifiers, command token) and a
//!   consumed flag. Once [`Event::consume`] is called the event reports
//!   [`EventKind::Used`] for the rest of the pass.
//! - [`Command`]: the command mapper for validate/execute command events.
//! - [`ControlId`]: a non-zero control identifier.
//!
//! The event is passed explicitly; there is no ambient "current event".
//!
//! ```
//! use kurbo::Point;
//! use overpass_event::{Event, EventKind, MouseButton};
//!
//! let mut ev = Event::pointer_down(MouseButton::Left, Point::new(10.0, 20.0));
//! assert_eq!(ev.kind(), EventKind::PointerDown);
//!
//! ev.consume();
//! assert_eq!(ev.kind(), EventKind::Used);
//! assert_eq!(ev.original_kind(), EventKind::PointerDown);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod error;
mod event;
mod id;
mod input;
mod kind;

pub use command::{Command, map_command};
pub use error::EventError;
pub use event::Event;
pub use id::ControlId;
pub use input::{KeyCode, Modifiers, MouseButton, is_printable};
pub use kind::EventKind;
