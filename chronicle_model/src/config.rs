// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared layout and interaction configuration.

/// Layout and interaction constants shared across the engine.
///
/// The defaults mirror a card-style timeline: 192 px event cards, a 16 px
/// lane gap, an operating zoom range of `[1, 100]`, and drag-to-pan at twice
/// pointer speed. Hosts with other item designs override the fields and pass
/// the config into `chronicle_view`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Fixed pixel footprint of a point event at any zoom.
    pub event_width_px: f64,
    /// Minimum horizontal distance between two items sharing a lane.
    pub lane_gap_px: f64,
    /// Lower bound of the operating zoom range.
    pub min_zoom: f64,
    /// Upper bound of the operating zoom range.
    pub max_zoom: f64,
    /// Scroll distance per pointer distance while dragging.
    pub drag_gain: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            event_width_px: 192.0,
            lane_gap_px: 16.0,
            min_zoom: 1.0,
            max_zoom: 100.0,
            drag_gain: 2.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the config with the zoom bounds ordered so that
    /// `min_zoom <= max_zoom`.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.min_zoom <= self.max_zoom {
            self
        } else {
            Self {
                min_zoom: self.max_zoom,
                max_zoom: self.min_zoom,
                ..self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_orders_zoom_bounds() {
        let config = LayoutConfig {
            min_zoom: 500.0,
            max_zoom: 0.1,
            ..LayoutConfig::default()
        };
        let normalized = config.normalized();
        assert_eq!(normalized.min_zoom, 0.1);
        assert_eq!(normalized.max_zoom, 500.0);
    }

    #[test]
    fn default_bounds_are_already_normalized() {
        let config = LayoutConfig::default();
        assert_eq!(config, config.normalized());
    }
}
