// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan state: pointer movement into scroll offsets at a fixed gain.

use kurbo::{Point, Vec2};

/// Scroll distance per pointer distance when no gain is configured.
const DEFAULT_GAIN: f64 = 2.0;

/// Tracks one drag-to-pan gesture.
///
/// On pointer down, [`DragPan::begin`] records the pointer position and the
/// scroll offset at that moment. While the flag is set, [`DragPan::update`]
/// yields the scroll offset that keeps the content following the pointer at
/// `gain` times pointer speed, anchored to the gesture start (no incremental
/// drift). Pointer up and pointer leaving the surface both go through
/// [`DragPan::end`]. There is no momentum.
///
/// Both axes are tracked, so horizontally and vertically scrolling variants
/// share the controller; callers apply whichever components their viewport
/// scrolls on.
#[derive(Clone, Copy, Debug)]
pub struct DragPan {
    gain: f64,
    anchor: Option<Anchor>,
}

#[derive(Clone, Copy, Debug)]
struct Anchor {
    pointer: Point,
    scroll: Vec2,
}

impl Default for DragPan {
    fn default() -> Self {
        Self::new(DEFAULT_GAIN)
    }
}

impl DragPan {
    /// Creates a controller with the given gain factor.
    #[must_use]
    pub fn new(gain: f64) -> Self {
        Self { gain, anchor: None }
    }

    /// The configured gain factor.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Starts a gesture at `pointer`, with the viewport currently scrolled
    /// to `scroll`.
    pub fn begin(&mut self, pointer: Point, scroll: Vec2) {
        self.anchor = Some(Anchor { pointer, scroll });
    }

    /// Target scroll offset for the new pointer position, or `None` when no
    /// gesture is active.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        let anchor = self.anchor?;
        let walk = (pointer - anchor.pointer) * self.gain;
        Some(anchor.scroll - walk)
    }

    /// Ends the gesture and resets state.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
