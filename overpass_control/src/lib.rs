// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overpass Control: control identity and the hot-control protocol.
//!
//! ## Overview
//!
//! Immediate-mode controls have no retained objects for the host to track, so
//! they identify themselves with a [`ControlId`](overpass_event::ControlId) on
//! every pass. This crate provides:
//!
//! - [`ControlIds`] and [`resolve_control_id`]: stable identities for
//!   receivers, with explicit per-pass ids taking precedence.
//! - [`FocusState`] and [`HotControlPolicy`]: the hot and keyboard slots and
//!   the rules for claiming and releasing them.
//! - [`NearestControl`]: footprints registered during layout passes, from
//!   which the host nominates the control allowed to claim on a press.
//! - [`Interaction`]: the bundle of the above that a host owns per surface,
//!   including the per-control kind filter
//!   ([`Interaction::kind_for_control`]).
//!
//! ## A press-drag-release cycle
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use overpass_control::{ControlIds, Interaction};
//! use overpass_event::{Event, EventKind, MouseButton};
//!
//! let mut ids = ControlIds::new();
//! let handle = ids.next_id().unwrap();
//! let other = ids.next_id().unwrap();
//! let mut ix = Interaction::new();
//!
//! // Layout: the handle sits right under the pointer.
//! let layout = Event::new(EventKind::Layout);
//! ix.begin_pass(&layout);
//! ix.layout.add_control(&layout, handle, 0.5).unwrap();
//! ix.layout.add_control(&layout, other, 30.0).unwrap();
//!
//! // Press: only the nominated control may claim.
//! let down = Event::pointer_down(MouseButton::Left, Point::ZERO);
//! assert!(!ix.try_claim(other, &down));
//! assert!(ix.try_claim(handle, &down));
//!
//! // Drag: the other control no longer sees pointer input.
//! let drag = Event::pointer_motion(EventKind::PointerDrag, Point::new(80.0, 0.0), Vec2::new(80.0, 0.0));
//! assert_eq!(ix.kind_for_control(&drag, handle), EventKind::PointerDrag);
//! assert_eq!(ix.kind_for_control(&drag, other), EventKind::Ignore);
//!
//! // Release.
//! let up = Event::pointer_up(MouseButton::Left, Point::new(80.0, 0.0));
//! assert!(ix.try_release(handle, &up));
//! assert_eq!(ix.focus.hot(), None);
//! ```
//!
//! All state is single-threaded and passed by `&mut`; nothing here is global.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod focus;
mod id;
mod interaction;
mod layout;

pub use error::ControlError;
pub use focus::{FocusState, HotControlPolicy};
pub use id::{ControlIds, resolve_control_id};
pub use interaction::Interaction;
pub use layout::{DEFAULT_PICK_DISTANCE, NearestControl};
