// Copyright 2025 the Overpass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-control registry fed during layout passes.
//!
//! During a `Layout` pass every control reports how far its hit-test shape is
//! from the pointer. On the passes that follow, the host nominates the closest
//! control within [`NearestControl::pick_distance`] as the candidate that may
//! claim the hot slot on a press.
//!
//! Registration outside a layout pass is rejected with
//! [`ControlError::OutsideLayout`].

use hashbrown::HashMap;
use kurbo::Point;
use overpass_event::{ControlId, Event, EventKind};

use crate::error::ControlError;

/// Default pick distance in surface units.
pub const DEFAULT_PICK_DISTANCE: f64 = 5.0;

#[derive(Copy, Clone, Debug)]
struct Footprint {
    distance: f64,
    seq: u32,
}

/// Hit-test footprints registered during the latest layout pass.
#[derive(Clone, Debug)]
pub struct NearestControl {
    footprints: HashMap<ControlId, Footprint>,
    seq: u32,
    /// Controls farther than this are never nominated.
    pub pick_distance: f64,
}

impl NearestControl {
    /// Empty registry with [`DEFAULT_PICK_DISTANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_pick_distance(DEFAULT_PICK_DISTANCE)
    }

    /// Empty registry with a custom pick distance.
    #[must_use]
    pub fn with_pick_distance(pick_distance: f64) -> Self {
        Self {
            footprints: HashMap::new(),
            seq: 0,
            pick_distance,
        }
    }

    /// Forget the previous layout pass.
    pub fn begin_layout(&mut self) {
        self.footprints.clear();
        self.seq = 0;
    }

    /// Register `id` at `distance` from the pointer.
    ///
    /// Re-registering a control in the same pass replaces its footprint.
    pub fn add_control(
        &mut self,
        event: &Event,
        id: ControlId,
        distance: f64,
    ) -> Result<(), ControlError> {
        let kind = event.kind();
        if kind != EventKind::Layout {
            return Err(ControlError::OutsideLayout(kind));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(ControlError::InvalidDistance);
        }
        self.seq = self.seq.wrapping_add(1);
        self.footprints.insert(
            id,
            Footprint {
                distance,
                seq: self.seq,
            },
        );
        tracing::trace!(target: "overpass::control", %id, distance, "footprint registered");
        Ok(())
    }

    /// Register `id` as a disc of `radius` around `center`.
    pub fn add_disc(
        &mut self,
        event: &Event,
        id: ControlId,
        center: Point,
        radius: f64,
    ) -> Result<(), ControlError> {
        let distance = (event.position.distance(center) - radius).max(0.0);
        self.add_control(event, id, distance)
    }

    /// Distance registered for `id` in the latest layout pass.
    #[must_use]
    pub fn distance_of(&self, id: ControlId) -> Option<f64> {
        self.footprints.get(&id).map(|f| f.distance)
    }

    /// Closest registered control within the pick distance.
    ///
    /// Equal distances resolve to the later registration, matching draw order
    /// where later controls sit on top.
    #[must_use]
    pub fn nearest(&self) -> Option<ControlId> {
        self.footprints
            .iter()
            .filter(|(_, f)| f.distance <= self.pick_distance)
            .min_by(|(_, a), (_, b)| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| b.seq.cmp(&a.seq))
            })
            .map(|(id, _)| *id)
    }

    /// Number of footprints registered in the latest layout pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    /// True when no footprint is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}

impl Default for NearestControl {
    fn default() -> Self {
        Self::new()
    }
}
