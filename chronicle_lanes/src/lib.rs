// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_lanes --heading-base-level=0

//! Chronicle Lanes: greedy lane packing for horizontally laid-out items.
//!
//! When timeline items are drawn stacked in one shared axis-relative region,
//! items whose horizontal pixel ranges overlap must land on different
//! vertical stacking slots — _lanes_. This crate assigns each item the
//! lowest-indexed lane it fits into, keeping the lane count small without
//! attempting globally optimal interval coloring.
//!
//! The packer is deliberately dumb about everything except pixels:
//!
//! - Items arrive as [`LaneItem`]s — a caller key plus a `[start, start +
//!   width]` pixel footprint. Deriving footprints from years and zoom is the
//!   caller's job (see `chronicle_view`).
//! - Keys are application-defined, like the key types accepted by the other
//!   Chronicle containers: anything `Clone + Eq + Hash`.
//! - The result is recomputed from scratch on every call and atomically
//!   replaces whatever the caller held before; the packer keeps no state
//!   between calls.
//!
//! ## Algorithm
//!
//! Items are packed in ascending `start_px` order (ties keep source order).
//! For each item the packer scans existing lanes in index order and picks the
//! first whose occupied extent ends at least `gap_px` before the item's
//! start; if none fits, a new lane is appended. This is a greedy first-fit
//! approximation of interval-graph coloring: deterministic and
//! `O(n · lanes)`, but not guaranteed to minimize the lane count.
//!
//! Two items sharing a lane are never closer than `gap_px`; a distance of
//! exactly `gap_px` is allowed, so items that touch edge-to-edge share a lane
//! under a zero gap.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_lanes::{LaneItem, assign_lanes};
//!
//! // Three eras; the third overlaps the second.
//! let items = [
//!     LaneItem { key: "antiquity", start_px: 0.0, width_px: 1229.0 },
//!     LaneItem { key: "middle-ages", start_px: 1229.0, width_px: 1016.0 },
//!     LaneItem { key: "early-modern", start_px: 2153.0, width_px: 400.0 },
//! ];
//!
//! let map = assign_lanes(&items, 0.0);
//! assert_eq!(map.lane(&"antiquity"), Some(0));
//! assert_eq!(map.lane(&"middle-ages"), Some(0)); // touches, does not overlap
//! assert_eq!(map.lane(&"early-modern"), Some(1));
//! assert_eq!(map.lane_count(), 2);
//! ```
//!
//! Pixel coordinates are expected to be finite (no NaNs).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// One item to pack: a caller key plus its horizontal pixel footprint.
///
/// A zero or negative `width_px` is treated as a point; flooring the width at
/// a minimum visual size is the caller's concern, not the packer's.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneItem<K> {
    /// Application-defined key identifying the item.
    pub key: K,
    /// Leftmost occupied pixel.
    pub start_px: f64,
    /// Horizontal extent in pixels.
    pub width_px: f64,
}

/// Lane assignments for one packed item set.
///
/// Maps each item key to a lane index in `0..lane_count()`. Lane `0` is the
/// slot closest to the axis; hosts translate indices into vertical offsets.
#[derive(Clone, Debug)]
pub struct LaneMap<K>
where
    K: Eq + Hash,
{
    lanes: HashMap<K, u32>,
    lane_count: u32,
}

impl<K> Default for LaneMap<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            lanes: HashMap::new(),
            lane_count: 0,
        }
    }
}

impl<K> LaneMap<K>
where
    K: Eq + Hash,
{
    /// The lane assigned to `key`, if the key was packed.
    #[must_use]
    pub fn lane(&self, key: &K) -> Option<u32> {
        self.lanes.get(key).copied()
    }

    /// Number of lanes used; indices are dense in `0..lane_count()`.
    #[must_use]
    pub fn lane_count(&self) -> u32 {
        self.lane_count
    }

    /// Number of packed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// `true` when nothing was packed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterates over `(key, lane)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.lanes.iter().map(|(key, &lane)| (key, lane))
    }
}

/// Assigns each item the lowest-indexed lane whose occupied extent ends at
/// least `gap_px` before the item's start.
///
/// Items are packed in ascending `start_px` order; items with equal starts
/// keep their source order (stable sort), which is the only tie-break rule.
/// Duplicate keys are not rejected — a later duplicate overwrites the
/// earlier entry in the returned map — so callers wanting one lane per item
/// must supply unique keys.
///
/// The returned map is a full recomputation; nothing is carried over between
/// calls.
#[must_use]
pub fn assign_lanes<K>(items: &[LaneItem<K>], gap_px: f64) -> LaneMap<K>
where
    K: Clone + Eq + Hash,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[a].start_px.total_cmp(&items[b].start_px));

    let mut lane_ends: SmallVec<[f64; 8]> = SmallVec::new();
    let mut lanes = HashMap::with_capacity(items.len());

    for index in order {
        let item = &items[index];
        let end_px = item.start_px + item.width_px.max(0.0);

        let fit = lane_ends
            .iter()
            .position(|&lane_end| lane_end + gap_px <= item.start_px);
        let lane = match fit {
            Some(lane) => {
                lane_ends[lane] = end_px;
                lane
            }
            None => {
                lane_ends.push(end_px);
                lane_ends.len() - 1
            }
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "lane counts are bounded by the item count, far below u32::MAX"
        )]
        let lane = lane as u32;
        lanes.insert(item.key.clone(), lane);
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "lane counts are bounded by the item count, far below u32::MAX"
    )]
    let lane_count = lane_ends.len() as u32;
    LaneMap { lanes, lane_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: u32, start_px: f64, width_px: f64) -> LaneItem<u32> {
        LaneItem {
            key,
            start_px,
            width_px,
        }
    }

    #[test]
    fn empty_input_packs_to_empty_map() {
        let map = assign_lanes::<u32>(&[], 16.0);
        assert!(map.is_empty());
        assert_eq!(map.lane_count(), 0);
    }

    #[test]
    fn touching_eras_share_a_lane_under_zero_gap() {
        // Antiquity, Middle Ages, Early Modern at one pixel per year.
        let items = [
            item(1, 0.0, 1229.0),
            item(2, 1229.0, 1016.0),
            item(3, 2153.0, 400.0),
        ];

        let map = assign_lanes(&items, 0.0);
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(0));
        assert_eq!(map.lane(&3), Some(1));
        assert_eq!(map.lane_count(), 2);
    }

    #[test]
    fn gap_pushes_touching_items_apart() {
        let items = [item(1, 0.0, 100.0), item(2, 100.0, 100.0)];

        assert_eq!(assign_lanes(&items, 0.0).lane(&2), Some(0));
        assert_eq!(assign_lanes(&items, 16.0).lane(&2), Some(1));
        // Exactly gap_px apart is allowed.
        let spaced = [item(1, 0.0, 100.0), item(2, 116.0, 100.0)];
        assert_eq!(assign_lanes(&spaced, 16.0).lane(&2), Some(0));
    }

    #[test]
    fn crowded_events_spill_into_new_lanes() {
        // 1914, 1969, 1975 as 192 px cards at two pixels per year: everything
        // collides and each event needs its own lane.
        let items = [
            item(1, 0.0, 192.0),
            item(2, 110.0, 192.0),
            item(3, 122.0, 192.0),
        ];
        let map = assign_lanes(&items, 16.0);
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(1));
        assert_eq!(map.lane(&3), Some(2));
    }

    #[test]
    fn sparse_events_share_lane_zero() {
        // The same three events at one hundred pixels per year.
        let items = [
            item(1, 0.0, 192.0),
            item(2, 5500.0, 192.0),
            item(3, 6100.0, 192.0),
        ];
        let map = assign_lanes(&items, 16.0);
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(0));
        assert_eq!(map.lane(&3), Some(0));
        assert_eq!(map.lane_count(), 1);
    }

    #[test]
    fn input_order_does_not_matter_for_distinct_starts() {
        let sorted = [item(1, 0.0, 50.0), item(2, 10.0, 50.0), item(3, 200.0, 50.0)];
        let shuffled = [item(3, 200.0, 50.0), item(1, 0.0, 50.0), item(2, 10.0, 50.0)];

        let a = assign_lanes(&sorted, 16.0);
        let b = assign_lanes(&shuffled, 16.0);
        for key in [1, 2, 3] {
            assert_eq!(a.lane(&key), b.lane(&key));
        }
    }

    #[test]
    fn equal_starts_keep_source_order() {
        let items = [item(1, 100.0, 50.0), item(2, 100.0, 50.0)];
        let map = assign_lanes(&items, 16.0);
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(1));

        // Swapping the source order swaps the lanes.
        let swapped = [item(2, 100.0, 50.0), item(1, 100.0, 50.0)];
        let map = assign_lanes(&swapped, 16.0);
        assert_eq!(map.lane(&2), Some(0));
        assert_eq!(map.lane(&1), Some(1));
    }

    #[test]
    fn negative_width_is_treated_as_a_point() {
        let items = [item(1, 100.0, -50.0), item(2, 100.0, 10.0)];
        let map = assign_lanes(&items, 0.0);
        // Item 1 occupies [100, 100], so item 2 cannot join its lane at the
        // same start, but a later point can.
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(1));

        let later = [item(1, 100.0, -50.0), item(2, 150.0, 10.0)];
        assert_eq!(assign_lanes(&later, 0.0).lane(&2), Some(0));
    }

    #[test]
    fn first_fit_reuses_the_lowest_free_lane() {
        let items = [
            item(1, 0.0, 100.0),
            item(2, 50.0, 100.0),
            item(3, 300.0, 100.0),
        ];
        let map = assign_lanes(&items, 16.0);
        assert_eq!(map.lane(&1), Some(0));
        assert_eq!(map.lane(&2), Some(1));
        // Lane 0 freed up well before 300.
        assert_eq!(map.lane(&3), Some(0));
        assert_eq!(map.lane_count(), 2);
    }
}
