// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_model --heading-base-level=0

//! Chronicle Model: item records and derived spans for timeline views.
//!
//! This crate holds the data half of the Chronicle layout engine:
//!
//! - [`Era`]: a named historical interval with inclusive start and end years.
//! - [`Event`]: a named point-in-time occurrence, optionally carrying an
//!   image reference for a detail panel.
//! - [`TimelineItem`]: an explicit tagged union over the two record kinds,
//!   with a borrowed counterpart ([`TimelineItemRef`]) for lookups.
//! - [`TimelineSpan`]: the derived year range covering a whole item set.
//! - [`LayoutConfig`]: the shared layout and interaction constants (item
//!   widths, lane gap, zoom bounds, drag gain).
//!
//! Records are immutable after construction and owned by the caller; the
//! layout crates only ever borrow them. Derived values such as
//! [`TimelineSpan`] are never stored — recompute them whenever the item set
//! changes and let the result replace the previous value.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_model::{ColorToken, Era, Event, ItemId, TimelineSpan};
//!
//! let eras = [Era::new(
//!     ItemId(1),
//!     "Antiquity",
//!     -753,
//!     476,
//!     "Classical civilizations.",
//!     ColorToken("era/red".into()),
//! )
//! .unwrap()];
//! let events = [Event::new(ItemId(2), "Moon Landing", 1969, "Apollo 11.", None)];
//!
//! let span = TimelineSpan::from_items(&eras, &events).unwrap();
//! assert_eq!(span.min_year(), -753);
//! assert_eq!(span.max_year(), 1969);
//! assert_eq!(span.total_years(), 2722);
//! ```
//!
//! With the `serde` feature enabled, the record and configuration types
//! implement `Serialize`/`Deserialize` so item sets can be loaded from
//! caller-side data files.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod item;
mod span;

pub use config::LayoutConfig;
pub use item::{
    ColorToken, Era, Event, ImageRef, ItemId, ItemKind, ModelError, TimelineItem, TimelineItemRef,
};
pub use span::TimelineSpan;
