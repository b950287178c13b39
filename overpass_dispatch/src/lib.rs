// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overpass Dispatch: route one per-pass event to one receiver.
//!
//! ## Overview
//!
//! An immediate-mode host runs every control once per pass. Each control owns
//! a [`Dispatcher`] bound to its [`Receiver`], and the host calls
//! [`Dispatcher::dispatch`] with the current event. The dispatcher:
//!
//! - resolves the control id (explicit id first, then the receiver's identity),
//! - asks the host's [`Interaction`](overpass_control::Interaction) which kind
//!   this control should see,
//! - calls the raw hook and then at most one typed callback,
//! - consumes the event when the callback asks for it, so controls later in
//!   the pass see [`EventKind::Used`](overpass_event::EventKind::Used).
//!
//! Callbacks receive a [`Pass`], which exposes the event, the control id, the
//! filtered kind and the hot-control protocol.
//!
//! See the [`dispatcher`] module docs for the full routing rules.
//!
//! ## Logging
//!
//! Dispatch emits `tracing` events under the `overpass::dispatch` target:
//! `trace` when a dispatch starts and `debug` when an event is consumed.
//! Nothing is printed unless the application installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
mod pass;
mod receiver;

pub use dispatcher::{ActivePass, Dispatcher};
pub use pass::{Pass, PassContext};
pub use receiver::Receiver;
