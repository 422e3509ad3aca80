// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived year span over an item set.

use crate::{Era, Event, TimelineItem};

/// The inclusive year range covering all loaded items.
///
/// A span is derived, never stored: recompute it whenever the item set
/// changes. `min_year <= max_year` always holds; a span where the two are
/// equal is degenerate and cannot be mapped onto an axis (see
/// `chronicle_scale`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineSpan {
    min_year: i32,
    max_year: i32,
}

impl TimelineSpan {
    /// Creates a span from explicit bounds, swapping them if reversed.
    #[must_use]
    pub fn new(min_year: i32, max_year: i32) -> Self {
        if min_year <= max_year {
            Self { min_year, max_year }
        } else {
            Self {
                min_year: max_year,
                max_year: min_year,
            }
        }
    }

    /// Computes the span covering every era start/end year and event year.
    ///
    /// Returns `None` for an empty item set.
    pub fn from_items<'a>(
        eras: impl IntoIterator<Item = &'a Era>,
        events: impl IntoIterator<Item = &'a Event>,
    ) -> Option<Self> {
        let era_years = eras
            .into_iter()
            .flat_map(|era| [era.start_year(), era.end_year()]);
        let event_years = events.into_iter().map(Event::year);
        let mut years = era_years.chain(event_years);

        let first = years.next()?;
        let (min_year, max_year) = years.fold((first, first), |(min, max), year| {
            (min.min(year), max.max(year))
        });
        Some(Self { min_year, max_year })
    }

    /// Computes the span of a mixed item list.
    ///
    /// Returns `None` for an empty list.
    pub fn of(items: &[TimelineItem]) -> Option<Self> {
        let mut years = items
            .iter()
            .flat_map(|item| [item.start_year(), item.end_year()]);
        let first = years.next()?;
        let (min_year, max_year) = years.fold((first, first), |(min, max), year| {
            (min.min(year), max.max(year))
        });
        Some(Self { min_year, max_year })
    }

    /// Earliest year in the span.
    #[must_use]
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Latest year in the span.
    #[must_use]
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Width of the span in years (`max_year - min_year`).
    #[must_use]
    pub fn total_years(&self) -> i32 {
        self.max_year - self.min_year
    }

    /// `true` when every item sits on the same year.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min_year == self.max_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorToken, ItemId};

    fn era(id: u64, start: i32, end: i32) -> Era {
        Era::new(ItemId(id), "era", start, end, "", ColorToken("era".into())).unwrap()
    }

    fn event(id: u64, year: i32) -> Event {
        Event::new(ItemId(id), "event", year, "", None)
    }

    #[test]
    fn span_covers_era_and_event_years() {
        let eras = [era(1, -753, 476), era(2, 476, 1492)];
        let events = [event(3, 1969), event(4, 2024)];

        let span = TimelineSpan::from_items(&eras, &events).unwrap();
        assert_eq!(span.min_year(), -753);
        assert_eq!(span.max_year(), 2024);
        assert_eq!(span.total_years(), 2777);
        assert!(!span.is_degenerate());
    }

    #[test]
    fn span_of_empty_set_is_none() {
        assert_eq!(TimelineSpan::from_items(&[], &[]), None);
        assert_eq!(TimelineSpan::of(&[]), None);
    }

    #[test]
    fn span_from_events_only() {
        let events = [event(1, 1914), event(2, 1969)];
        let span = TimelineSpan::from_items(&[], &events).unwrap();
        assert_eq!(span.min_year(), 1914);
        assert_eq!(span.max_year(), 1969);
    }

    #[test]
    fn single_year_span_is_degenerate() {
        let events = [event(1, 1969), event(2, 1969)];
        let span = TimelineSpan::from_items(&[], &events).unwrap();
        assert!(span.is_degenerate());
        assert_eq!(span.total_years(), 0);
    }

    #[test]
    fn new_swaps_reversed_bounds() {
        let span = TimelineSpan::new(1969, -753);
        assert_eq!(span.min_year(), -753);
        assert_eq!(span.max_year(), 1969);
    }

    #[test]
    fn span_of_mixed_items_matches_from_items() {
        let items = [
            TimelineItem::Era(era(1, -753, 476)),
            TimelineItem::Event(event(2, 1969)),
        ];
        let span = TimelineSpan::of(&items).unwrap();
        assert_eq!(span.min_year(), -753);
        assert_eq!(span.max_year(), 1969);
    }
}
