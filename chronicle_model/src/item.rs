// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Era and event records plus the tagged item union.

use alloc::string::String;

use thiserror::Error;

/// Opaque handle identifying one era or event within an item set.
///
/// Handles share a single id space across both record kinds and must be
/// unique within one item set. Callers loading string-keyed data are expected
/// to intern their keys into handles at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

/// Opaque token naming the color treatment of an era.
///
/// The engine never interprets the token; it is passed through to whatever
/// theme layer the host uses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorToken(pub String);

/// Opaque reference to an image asset attached to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(pub String);

/// Errors produced when constructing model records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An era's start year was later than its end year.
    #[error("era range is inverted: start year {start} is after end year {end}")]
    InvertedEra {
        /// The offending start year.
        start: i32,
        /// The offending end year.
        end: i32,
    },
}

/// A named historical interval with inclusive start and end years.
///
/// `start_year <= end_year` holds for every constructed value; a single-year
/// era (`start_year == end_year`) is valid and packs as a zero-width item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Era {
    id: ItemId,
    name: String,
    start_year: i32,
    end_year: i32,
    description: String,
    color: ColorToken,
}

impl Era {
    /// Creates an era, rejecting inverted year ranges.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        start_year: i32,
        end_year: i32,
        description: impl Into<String>,
        color: ColorToken,
    ) -> Result<Self, ModelError> {
        if start_year > end_year {
            return Err(ModelError::InvertedEra {
                start: start_year,
                end: end_year,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            start_year,
            end_year,
            description: description.into(),
            color,
        })
    }

    /// The era's handle.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First year covered by the era.
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year covered by the era.
    #[must_use]
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Long-form description for detail presentation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Presentation color token.
    #[must_use]
    pub fn color(&self) -> &ColorToken {
        &self.color
    }

    /// Number of years spanned (`end_year - start_year`).
    #[must_use]
    pub fn duration_years(&self) -> i32 {
        self.end_year - self.start_year
    }
}

/// A named point-in-time historical occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    id: ItemId,
    name: String,
    year: i32,
    description: String,
    image: Option<ImageRef>,
}

impl Event {
    /// Creates an event.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        year: i32,
        description: impl Into<String>,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            year,
            description: description.into(),
            image,
        }
    }

    /// The event's handle.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Year the event occurred.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Long-form description for detail presentation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Optional image reference for detail presentation.
    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

/// Which variant a [`TimelineItem`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A year range.
    Era,
    /// A point-in-time occurrence.
    Event,
}

/// A timeline item: either an era or an event.
///
/// The union is discriminated by an explicit tag rather than by field
/// presence, so mixed item lists can be matched on directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimelineItem {
    /// A year range.
    Era(Era),
    /// A point-in-time occurrence.
    Event(Event),
}

impl TimelineItem {
    /// The item's handle.
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            Self::Era(era) => era.id(),
            Self::Event(event) => event.id(),
        }
    }

    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Era(_) => ItemKind::Era,
            Self::Event(_) => ItemKind::Event,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Era(era) => era.name(),
            Self::Event(event) => event.name(),
        }
    }

    /// Long-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Era(era) => era.description(),
            Self::Event(event) => event.description(),
        }
    }

    /// First year the item occupies (an event's single year).
    #[must_use]
    pub fn start_year(&self) -> i32 {
        match self {
            Self::Era(era) => era.start_year(),
            Self::Event(event) => event.year(),
        }
    }

    /// Last year the item occupies (an event's single year).
    #[must_use]
    pub fn end_year(&self) -> i32 {
        match self {
            Self::Era(era) => era.end_year(),
            Self::Event(event) => event.year(),
        }
    }

    /// Borrowed view of this item.
    #[must_use]
    pub fn as_ref(&self) -> TimelineItemRef<'_> {
        match self {
            Self::Era(era) => TimelineItemRef::Era(era),
            Self::Event(event) => TimelineItemRef::Event(event),
        }
    }
}

/// Borrowed view of a timeline item, as handed to detail presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineItemRef<'a> {
    /// A year range.
    Era(&'a Era),
    /// A point-in-time occurrence.
    Event(&'a Event),
}

impl TimelineItemRef<'_> {
    /// The item's handle.
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            Self::Era(era) => era.id(),
            Self::Event(event) => event.id(),
        }
    }

    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Era(_) => ItemKind::Era,
            Self::Event(_) => ItemKind::Event,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Era(era) => era.name(),
            Self::Event(event) => event.name(),
        }
    }

    /// Long-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Era(era) => era.description(),
            Self::Event(event) => event.description(),
        }
    }
}
