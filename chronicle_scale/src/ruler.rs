// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler markings: year-step selection and marker generation.
//!
//! The step ladder keeps marker density roughly constant as the view zooms:
//! the wider the visible year range, the coarser the step. Markers snap to
//! multiples of the chosen step, and centuries/half-centuries are flagged so
//! hosts can render them with more emphasis.

use alloc::vec::Vec;

use crate::TimelineScale;

/// Visual emphasis of a ruler marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerWeight {
    /// A century multiple.
    Major,
    /// A half-century multiple that is not a century.
    Minor,
    /// Any other step multiple.
    Regular,
}

/// A single marking on the year axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerMarker {
    /// The marked year.
    pub year: i32,
    /// Normalized position within the span, in `[0, 100]`.
    pub percent: f64,
    /// Rendering emphasis.
    pub weight: MarkerWeight,
}

/// Year increment between ruler markings for a given visible year range.
#[must_use]
pub fn year_step(years_per_view: f64) -> i32 {
    if years_per_view > 5000.0 {
        1000
    } else if years_per_view > 2000.0 {
        500
    } else if years_per_view > 1000.0 {
        200
    } else if years_per_view > 500.0 {
        100
    } else if years_per_view > 200.0 {
        50
    } else if years_per_view > 100.0 {
        20
    } else if years_per_view > 50.0 {
        10
    } else if years_per_view > 20.0 {
        5
    } else if years_per_view > 10.0 {
        2
    } else {
        1
    }
}

/// Generates ruler markers for `scale`, snapped to multiples of the step.
///
/// The first marker is the smallest step multiple at or after the span
/// start; markers continue through the span end. Each carries its normalized
/// position and a [`MarkerWeight`].
#[must_use]
pub fn markers(scale: &TimelineScale) -> Vec<RulerMarker> {
    let span = scale.span();
    let years_per_view = f64::from(span.total_years()) / scale.zoom();
    let step = year_step(years_per_view);

    let mut out = Vec::new();
    let mut year = ceil_to_step(span.min_year(), step);
    while year <= span.max_year() {
        let percent = scale.position_percent(f64::from(year));
        if (0.0..=100.0).contains(&percent) {
            out.push(RulerMarker {
                year,
                percent,
                weight: weight_for(year),
            });
        }
        year += step;
    }
    out
}

fn weight_for(year: i32) -> MarkerWeight {
    if year % 100 == 0 {
        MarkerWeight::Major
    } else if year % 50 == 0 {
        MarkerWeight::Minor
    } else {
        MarkerWeight::Regular
    }
}

/// Smallest multiple of `step` at or above `year`. Works for negative years.
fn ceil_to_step(year: i32, step: i32) -> i32 {
    let rem = year.rem_euclid(step);
    if rem == 0 { year } else { year - rem + step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_model::TimelineSpan;

    #[test]
    fn step_ladder_thresholds() {
        assert_eq!(year_step(5001.0), 1000);
        assert_eq!(year_step(5000.0), 500);
        assert_eq!(year_step(2777.0), 500);
        assert_eq!(year_step(1500.0), 200);
        assert_eq!(year_step(600.0), 100);
        assert_eq!(year_step(300.0), 50);
        assert_eq!(year_step(150.0), 20);
        assert_eq!(year_step(60.0), 10);
        assert_eq!(year_step(30.0), 5);
        assert_eq!(year_step(15.0), 2);
        assert_eq!(year_step(10.0), 1);
        assert_eq!(year_step(3.0), 1);
    }

    #[test]
    fn ceil_to_step_snaps_up_including_negative_years() {
        assert_eq!(ceil_to_step(-753, 500), -500);
        assert_eq!(ceil_to_step(-753, 100), -700);
        assert_eq!(ceil_to_step(-500, 500), -500);
        assert_eq!(ceil_to_step(1, 500), 500);
        assert_eq!(ceil_to_step(0, 500), 0);
    }

    #[test]
    fn century_and_half_century_emphasis() {
        assert_eq!(weight_for(-700), MarkerWeight::Major);
        assert_eq!(weight_for(1900), MarkerWeight::Major);
        assert_eq!(weight_for(1950), MarkerWeight::Minor);
        assert_eq!(weight_for(-650), MarkerWeight::Minor);
        assert_eq!(weight_for(1914), MarkerWeight::Regular);
    }

    #[test]
    fn markers_cover_the_historical_span_at_unit_zoom() {
        let span = TimelineSpan::new(-753, 2024);
        let scale = TimelineScale::new(span, 1.0, 1280.0).unwrap();

        // 2777 years per view selects a 500-year step.
        let markers = markers(&scale);
        let years: Vec<i32> = markers.iter().map(|m| m.year).collect();
        assert_eq!(years, [-500, 0, 500, 1000, 1500, 2000]);
        assert!(markers.iter().all(|m| m.weight == MarkerWeight::Major));
        assert!(
            markers
                .iter()
                .all(|m| (0.0..=100.0).contains(&m.percent))
        );
    }

    #[test]
    fn zooming_in_refines_the_step() {
        let span = TimelineSpan::new(-753, 2024);
        let coarse = markers(&TimelineScale::new(span, 1.0, 1280.0).unwrap());
        let fine = markers(&TimelineScale::new(span, 20.0, 1280.0).unwrap());
        assert!(fine.len() > coarse.len());

        // 2777 / 20 ≈ 139 years per view selects a 20-year step.
        assert_eq!(fine[1].year - fine[0].year, 20);
    }

    #[test]
    fn marker_positions_are_monotonic() {
        let span = TimelineSpan::new(-753, 2024);
        let markers = markers(&TimelineScale::new(span, 5.0, 1280.0).unwrap());
        assert!(
            markers.windows(2).all(|pair| pair[0].percent < pair[1].percent)
        );
    }
}
