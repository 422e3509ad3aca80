// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_scale --heading-base-level=0

//! Chronicle Scale: year ↔ screen coordinate mapping for timeline views.
//!
//! This crate provides the pure coordinate half of the Chronicle layout
//! engine:
//!
//! - [`TimelineScale`]: maps calendar years onto a zoomed horizontal axis,
//!   both as a normalized percentage of the full span and as an absolute
//!   pixel offset.
//! - [`ruler`]: picks a year step for ruler markings from the visible range
//!   and generates markers snapped to step multiples, with century and
//!   half-century emphasis.
//!
//! A scale is a plain value built per layout pass from three inputs: the
//! derived [`TimelineSpan`](chronicle_model::TimelineSpan) of the item set,
//! the current zoom factor, and the measured width of the rendering surface.
//! There is no dependency tracking here — callers rebuild the scale whenever
//! any input changes, exactly as they recompute the span when the item set
//! changes.
//!
//! The reference width is measured from the rendering surface and is not
//! known until first layout. Treat "not yet measured" as a distinct state on
//! the caller side (an `Option`), never as zero: [`TimelineScale::new`]
//! rejects non-positive widths, and it rejects degenerate spans (every item
//! on one year) rather than inventing positions for them.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_model::TimelineSpan;
//! use chronicle_scale::TimelineScale;
//!
//! // 2777 years across a 1280 px surface at 2x zoom.
//! let span = TimelineSpan::new(-753, 2024);
//! let scale = TimelineScale::new(span, 2.0, 1280.0).unwrap();
//!
//! assert_eq!(scale.position_percent(-753.0), 0.0);
//! assert_eq!(scale.position_percent(2024.0), 100.0);
//! assert_eq!(scale.timeline_width(), 2560.0);
//!
//! // Pixel positions scale with zoom and measured width.
//! let px = scale.pixel_position(476.0);
//! assert!((px - 1229.0 * scale.pixels_per_year()).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ruler;
mod scale;

pub use scale::{ScaleError, TimelineScale};
