// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_view --heading-base-level=0

//! Chronicle View: interactive session state for timeline views.
//!
//! This crate assembles the Chronicle layout engine into a headless,
//! caller-driven view model:
//!
//! - [`TimelineView`]: owns the item set, zoom, scroll, drag, and selection
//!   state, and recomputes a full [`TimelineLayout`] on demand (lane
//!   assignments via `chronicle_lanes`, ruler markers via
//!   `chronicle_scale`).
//! - [`ZoomControl`]: clamped zoom factor, ×1.5 step controls, and the
//!   suggestion state machine — single-flight requests, token-matched
//!   responses, stale-response rejection.
//! - [`DragPan`]: drag-to-pan at a fixed gain, shared by horizontally and
//!   vertically scrolling variants.
//!
//! The crate owns no widgets and installs no logger; it emits `log` records
//! at zoom transitions and suggestion failures for whatever logging the host
//! wires up. Everything runs synchronously on the caller's thread: the only
//! suspended operation — the external zoom suggestion — is modeled as a
//! request value going out and a response value coming back.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_model::{Event, ItemId, LayoutConfig};
//! use chronicle_view::TimelineView;
//!
//! let events = vec![
//!     Event::new(ItemId(1), "Start of World War I", 1914, "", None),
//!     Event::new(ItemId(2), "Moon Landing", 1969, "", None),
//! ];
//! let mut view = TimelineView::new(Vec::new(), events, LayoutConfig::default());
//!
//! // Nothing can be placed until the surface is measured.
//! assert!(view.layout().is_empty());
//!
//! view.set_reference_width(1280.0);
//! let layout = view.layout();
//! assert_eq!(layout.event_lanes.len(), 2);
//! ```
//!
//! ## Suggestion round-trip
//!
//! ```rust
//! use chronicle_model::{Event, ItemId, LayoutConfig};
//! use chronicle_view::{SuggestionOutcome, TimelineView, ZoomSuggestion};
//!
//! let events = vec![
//!     Event::new(ItemId(1), "Start of World War I", 1914, "", None),
//!     Event::new(ItemId(2), "Moon Landing", 1969, "", None),
//! ];
//! let mut view = TimelineView::new(Vec::new(), events, LayoutConfig::default());
//! view.set_reference_width(1280.0);
//!
//! let pending = view.request_zoom_suggestion().unwrap();
//! // ... hand `pending.request` to the collaborator, await its answer ...
//! let outcome = view.resolve_zoom_suggestion(
//!     pending.token,
//!     Ok(ZoomSuggestion { suggested_zoom: 150.0, reason: "dense cluster".into() }),
//! );
//!
//! // The operating range caps the applied factor.
//! assert!(matches!(outcome, SuggestionOutcome::Applied { zoom, .. } if zoom == 100.0));
//! assert_eq!(view.zoom().factor(), 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod view;
mod zoom;

pub use drag::DragPan;
pub use view::{TimelineLayout, TimelineView, VisibleRange};
pub use zoom::{
    PendingSuggestion, SuggestionError, SuggestionFailure, SuggestionOutcome, SuggestionRequest,
    SuggestionToken, ZoomControl, ZoomPhase, ZoomSuggestion,
};
