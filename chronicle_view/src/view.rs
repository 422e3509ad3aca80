// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive timeline view: items, zoom, pan, selection, and layout.

use alloc::vec::Vec;

use chrono::{Datelike, NaiveDate, NaiveTime};
use kurbo::{Point, Vec2};

use chronicle_lanes::{LaneItem, LaneMap, assign_lanes};
use chronicle_model::{Era, Event, ItemId, LayoutConfig, TimelineItem, TimelineItemRef, TimelineSpan};
use chronicle_scale::ruler::{self, RulerMarker};
use chronicle_scale::TimelineScale;

use crate::zoom::{PendingSuggestion, SuggestionError, SuggestionOutcome, SuggestionRequest, SuggestionToken, ZoomControl, ZoomSuggestion};
use crate::{DragPan, SuggestionFailure};

/// Year interval currently visible through the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange {
    /// Earliest visible year (fractional).
    pub start_year: f64,
    /// Latest visible year (fractional).
    pub end_year: f64,
}

/// Fully derived layout for one frame.
///
/// Recomputed from scratch by [`TimelineView::layout`]; the caller replaces
/// its previous layout wholesale, so there are no partially updated reads.
/// When the rendering surface has not been measured yet, or the item set is
/// empty or degenerate, the layout is empty: no lanes, no markers, zeroed
/// pixel metrics.
#[derive(Clone, Debug)]
pub struct TimelineLayout {
    /// Span of the item set, when the set is non-empty.
    pub span: Option<TimelineSpan>,
    /// Lane per era.
    pub era_lanes: LaneMap<ItemId>,
    /// Lane per event.
    pub event_lanes: LaneMap<ItemId>,
    /// Ruler markings for the current zoom.
    pub markers: Vec<RulerMarker>,
    /// Device pixels covered by one year; `0.0` in an empty layout.
    pub pixels_per_year: f64,
    /// Total rendered width at the current zoom; `0.0` in an empty layout.
    pub timeline_width: f64,
}

impl TimelineLayout {
    fn empty(span: Option<TimelineSpan>) -> Self {
        Self {
            span,
            era_lanes: LaneMap::default(),
            event_lanes: LaneMap::default(),
            markers: Vec::new(),
            pixels_per_year: 0.0,
            timeline_width: 0.0,
        }
    }

    /// `true` when no lane assignments were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.era_lanes.is_empty() && self.event_lanes.is_empty()
    }
}

/// Interactive session state over one item set.
///
/// The view owns copies of the caller's records (read-only to the engine's
/// logic), the zoom machine, the drag controller, the scroll offset, and the
/// current selection. It performs no dependency tracking: call
/// [`TimelineView::layout`] after anything relevant changes and use the
/// returned value in place of the previous one.
///
/// The scroll offset is stored unclamped; bounding it to the scrollable
/// extent is the rendering host's responsibility, as it is the host that
/// knows the surface's actual scroll model.
#[derive(Clone, Debug)]
pub struct TimelineView {
    eras: Vec<Era>,
    events: Vec<Event>,
    config: LayoutConfig,
    zoom: ZoomControl,
    drag: DragPan,
    scroll: Vec2,
    selected: Option<ItemId>,
    reference_width: Option<f64>,
}

impl TimelineView {
    /// Creates a view over separate era and event lists.
    #[must_use]
    pub fn new(eras: Vec<Era>, events: Vec<Event>, config: LayoutConfig) -> Self {
        let config = config.normalized();
        Self {
            eras,
            events,
            config,
            zoom: ZoomControl::new(config.min_zoom, config.max_zoom),
            drag: DragPan::new(config.drag_gain),
            scroll: Vec2::ZERO,
            selected: None,
            reference_width: None,
        }
    }

    /// Creates a view from a mixed item list.
    #[must_use]
    pub fn from_items(items: Vec<TimelineItem>, config: LayoutConfig) -> Self {
        let mut eras = Vec::new();
        let mut events = Vec::new();
        for item in items {
            match item {
                TimelineItem::Era(era) => eras.push(era),
                TimelineItem::Event(event) => events.push(event),
            }
        }
        Self::new(eras, events, config)
    }

    /// The loaded eras.
    #[must_use]
    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// The loaded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The zoom machine.
    #[must_use]
    pub fn zoom(&self) -> &ZoomControl {
        &self.zoom
    }

    /// Mutable access to the zoom machine, for direct input plumbing.
    pub fn zoom_mut(&mut self) -> &mut ZoomControl {
        &mut self.zoom
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Sets the scroll offset directly (for example from a scrollbar).
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// The measured surface width, if measurement has happened.
    #[must_use]
    pub fn reference_width(&self) -> Option<f64> {
        self.reference_width
    }

    /// Records the measured width of the rendering surface.
    ///
    /// The width is unknown until the host's first layout pass; until then
    /// [`TimelineView::layout`] returns the empty layout. Non-positive or
    /// non-finite measurements reset the view to unmeasured.
    pub fn set_reference_width(&mut self, width: f64) {
        self.reference_width = (width.is_finite() && width > 0.0).then_some(width);
    }

    /// The derived span of the item set, `None` when the set is empty.
    #[must_use]
    pub fn span(&self) -> Option<TimelineSpan> {
        TimelineSpan::from_items(&self.eras, &self.events)
    }

    fn scale(&self) -> Option<TimelineScale> {
        let width = self.reference_width?;
        let span = self.span()?;
        TimelineScale::new(span, self.zoom.factor(), width).ok()
    }

    /// Recomputes the full layout for the current inputs.
    ///
    /// Eras and events pack into separate lane sets, mirroring the two
    /// stacked regions they are drawn in: an era's footprint is its duration
    /// at the current pixels-per-year, an event's is the fixed configured
    /// card width.
    #[must_use]
    pub fn layout(&self) -> TimelineLayout {
        let span = self.span();
        let Some(scale) = self.scale() else {
            return TimelineLayout::empty(span);
        };
        let pixels_per_year = scale.pixels_per_year();

        let era_items: Vec<LaneItem<ItemId>> = self
            .eras
            .iter()
            .map(|era| LaneItem {
                key: era.id(),
                start_px: scale.pixel_position(f64::from(era.start_year())),
                width_px: f64::from(era.duration_years()) * pixels_per_year,
            })
            .collect();
        let event_items: Vec<LaneItem<ItemId>> = self
            .events
            .iter()
            .map(|event| LaneItem {
                key: event.id(),
                start_px: scale.pixel_position(f64::from(event.year())),
                width_px: self.config.event_width_px,
            })
            .collect();

        TimelineLayout {
            span,
            era_lanes: assign_lanes(&era_items, self.config.lane_gap_px),
            event_lanes: assign_lanes(&event_items, self.config.lane_gap_px),
            markers: ruler::markers(&scale),
            pixels_per_year,
            timeline_width: scale.timeline_width(),
        }
    }

    /// Year interval currently visible through the viewport.
    ///
    /// `None` until the surface is measured and the item set yields a
    /// non-degenerate span.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        let scale = self.scale()?;
        let span = scale.span();
        let total = f64::from(span.total_years());
        let min = f64::from(span.min_year());
        let timeline_width = scale.timeline_width();

        let start_ratio = (self.scroll.x / timeline_width).clamp(0.0, 1.0);
        let end_ratio = ((self.scroll.x + scale.reference_width()) / timeline_width).clamp(0.0, 1.0);
        Some(VisibleRange {
            start_year: min + start_ratio * total,
            end_year: min + end_ratio * total,
        })
    }

    /// Builds the suggestion request for the current viewport and enters the
    /// pending state.
    ///
    /// The payload carries the visible range endpoints as Unix-millisecond
    /// timestamps plus the counts of events inside and eras overlapping the
    /// range. Fails with [`SuggestionError::NoVisibleRange`] before the
    /// surface is measured, and with [`SuggestionError::AlreadyPending`]
    /// while an earlier round is still in flight.
    pub fn request_zoom_suggestion(&mut self) -> Result<PendingSuggestion, SuggestionError> {
        let range = self.visible_range().ok_or(SuggestionError::NoVisibleRange)?;

        let visible_events = self
            .events
            .iter()
            .filter(|event| {
                let year = f64::from(event.year());
                year >= range.start_year && year <= range.end_year
            })
            .count();
        let visible_eras = self
            .eras
            .iter()
            .filter(|era| {
                f64::from(era.start_year()) <= range.end_year
                    && f64::from(era.end_year()) >= range.start_year
            })
            .count();

        self.zoom.begin_suggestion(SuggestionRequest {
            view_start_ms: year_start_millis(floor_year(range.start_year)),
            view_end_ms: year_start_millis(floor_year(range.end_year)),
            visible_events,
            visible_eras,
        })
    }

    /// Feeds a suggestion response back into the zoom machine.
    pub fn resolve_zoom_suggestion(
        &mut self,
        token: SuggestionToken,
        result: Result<ZoomSuggestion, SuggestionFailure>,
    ) -> SuggestionOutcome {
        self.zoom.resolve_suggestion(token, result)
    }

    /// Selects the item with `id`, if it exists. Returns whether it did.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.item(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the selection (the detail panel's close signal).
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The currently selected item, for detail presentation.
    #[must_use]
    pub fn selected_item(&self) -> Option<TimelineItemRef<'_>> {
        self.item(self.selected?)
    }

    /// Looks up an item by id across both record kinds.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<TimelineItemRef<'_>> {
        if let Some(era) = self.eras.iter().find(|era| era.id() == id) {
            return Some(TimelineItemRef::Era(era));
        }
        self.events
            .iter()
            .find(|event| event.id() == id)
            .map(TimelineItemRef::Event)
    }

    /// Pointer-down on the scroll surface: starts a drag gesture.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.begin(pointer, self.scroll);
    }

    /// Pointer movement: scrolls while a gesture is active.
    ///
    /// Returns whether the scroll offset changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        match self.drag.update(pointer) {
            Some(scroll) => {
                self.scroll = scroll;
                true
            }
            None => false,
        }
    }

    /// Pointer-up: ends the gesture.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer leaving the surface: ends the gesture.
    pub fn pointer_left(&mut self) {
        self.drag.end();
    }

    /// `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

/// Largest integer year at or below `year`.
fn floor_year(year: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the cast saturates; the truncated value is adjusted below"
    )]
    let mut floored = year as i64;
    if floored as f64 > year {
        floored -= 1;
    }
    let clamped = floored.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped into i32 range on the previous line"
    )]
    let year = clamped as i32;
    year
}

/// Unix-epoch milliseconds for January 1, 00:00 UTC of `year`, in the
/// proleptic Gregorian calendar. Years outside chrono's representable range
/// are clamped to it.
fn year_start_millis(year: i32) -> i64 {
    let year = year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_year_rounds_toward_negative_infinity() {
        assert_eq!(floor_year(1969.9), 1969);
        assert_eq!(floor_year(1969.0), 1969);
        assert_eq!(floor_year(-752.1), -753);
        assert_eq!(floor_year(-753.0), -753);
        assert_eq!(floor_year(0.5), 0);
        assert_eq!(floor_year(-0.5), -1);
    }

    #[test]
    fn year_start_millis_matches_known_epochs() {
        assert_eq!(year_start_millis(1970), 0);
        // 1971 starts 365 days after the epoch.
        assert_eq!(year_start_millis(1971), 365 * 86_400_000);
        // Years before the epoch are negative.
        assert!(year_start_millis(1969) < 0);
        assert!(year_start_millis(-753) < year_start_millis(476));
    }

    #[test]
    fn year_start_millis_is_monotonic_across_the_era_boundary() {
        let years = [-753, -1, 0, 1, 476, 1492, 1969, 2024];
        let stamps: Vec<i64> = years.iter().map(|&y| year_start_millis(y)).collect();
        assert!(stamps.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
