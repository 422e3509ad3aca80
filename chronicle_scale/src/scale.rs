// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronicle_model::TimelineSpan;
use thiserror::Error;

/// Errors produced when building a [`TimelineScale`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ScaleError {
    /// Every item sits on a single year, so there is no axis to map onto.
    #[error("degenerate span: all items share year {year}, positions are undefined")]
    DegenerateSpan {
        /// The single year every item occupies.
        year: i32,
    },
    /// The measured reference width was zero, negative, or not finite.
    #[error("reference width must be positive and finite, got {width}")]
    InvalidReferenceWidth {
        /// The rejected width.
        width: f64,
    },
    /// The zoom factor was zero, negative, or not finite.
    #[error("zoom factor must be positive and finite, got {zoom}")]
    InvalidZoom {
        /// The rejected zoom factor.
        zoom: f64,
    },
}

/// Pure mapping from calendar years onto a zoomed horizontal axis.
///
/// The axis is conventionally horizontal; a vertically scrolling variant uses
/// the same mapping along Y. All methods are pure functions of the captured
/// span, zoom, and reference width — rebuild the scale whenever any of those
/// change.
#[derive(Clone, Copy, Debug)]
pub struct TimelineScale {
    span: TimelineSpan,
    zoom: f64,
    reference_width: f64,
}

impl TimelineScale {
    /// Creates a scale over `span` at `zoom`, rendered across
    /// `reference_width` device pixels.
    ///
    /// Fails fast on a degenerate span (`total_years == 0`) and on
    /// non-positive or non-finite zoom/width inputs.
    pub fn new(span: TimelineSpan, zoom: f64, reference_width: f64) -> Result<Self, ScaleError> {
        if span.is_degenerate() {
            return Err(ScaleError::DegenerateSpan {
                year: span.min_year(),
            });
        }
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ScaleError::InvalidZoom { zoom });
        }
        if !reference_width.is_finite() || reference_width <= 0.0 {
            return Err(ScaleError::InvalidReferenceWidth {
                width: reference_width,
            });
        }
        Ok(Self {
            span,
            zoom,
            reference_width,
        })
    }

    /// The span the scale was built over.
    #[must_use]
    pub fn span(&self) -> TimelineSpan {
        self.span
    }

    /// The zoom factor the scale was built with.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The measured reference width the scale was built with.
    #[must_use]
    pub fn reference_width(&self) -> f64 {
        self.reference_width
    }

    /// Normalized horizontal position of `year` within the span.
    ///
    /// Years inside the span map to `[0, 100]`; years outside map beyond
    /// those bounds proportionally.
    #[must_use]
    pub fn position_percent(&self, year: f64) -> f64 {
        let min = f64::from(self.span.min_year());
        let total = f64::from(self.span.total_years());
        ((year - min) / total) * 100.0
    }

    /// Total rendered width of the timeline at the current zoom.
    #[must_use]
    pub fn timeline_width(&self) -> f64 {
        self.reference_width * self.zoom
    }

    /// Device pixels covered by one year.
    #[must_use]
    pub fn pixels_per_year(&self) -> f64 {
        self.timeline_width() / f64::from(self.span.total_years())
    }

    /// Absolute pixel offset of `year` from the start of the timeline.
    #[must_use]
    pub fn pixel_position(&self, year: f64) -> f64 {
        (year - f64::from(self.span.min_year())) * self.pixels_per_year()
    }
}
