// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom state: a clamped factor, step controls, and the suggestion machine.
//!
//! Direct zoom input applies immediately and clamps into the operating
//! range. Suggested zoom goes through a small state machine instead: at most
//! one suggestion request is in flight, responses are matched back to their
//! request by token, and anything stale — a response for a superseded or
//! abandoned request — is ignored rather than applied.

use alloc::string::String;

use thiserror::Error;

/// Multiplier applied by [`ZoomControl::step_in`] and
/// [`ZoomControl::step_out`].
const STEP_FACTOR: f64 = 1.5;

/// Observable phase of the zoom state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomPhase {
    /// No zoom interaction has happened, or the last suggestion failed.
    Idle,
    /// The factor was last changed by direct user input.
    UserZooming,
    /// A suggestion request is in flight.
    AiPending,
    /// The factor was last changed by an applied suggestion.
    AiApplied,
}

/// Token tying a suggestion response back to the request that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionToken(u64);

/// Request payload for the external zoom suggestion collaborator.
///
/// Timestamps are Unix-epoch milliseconds for January 1, 00:00 UTC of the
/// respective year. Counts cover the items inside the visible range at the
/// time the request was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Visible range start.
    pub view_start_ms: i64,
    /// Visible range end.
    pub view_end_ms: i64,
    /// Events whose year falls inside the visible range.
    pub visible_events: usize,
    /// Eras overlapping the visible range.
    pub visible_eras: usize,
}

/// Response payload from the external suggestion collaborator.
///
/// The collaborator declares its own suggestion range (nominally `[1, 10]`);
/// that range and the view's operating range are not assumed equal, so the
/// value is clamped before it is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomSuggestion {
    /// Suggested zoom factor, in the collaborator's own range.
    pub suggested_zoom: f64,
    /// Human-readable rationale, surfaced by the presentation layer.
    pub reason: String,
}

/// An accepted suggestion request awaiting its response.
#[derive(Clone, Copy, Debug)]
pub struct PendingSuggestion {
    /// Token to hand back with the response.
    pub token: SuggestionToken,
    /// Payload for the collaborator.
    pub request: SuggestionRequest,
}

/// Failure reported by the external collaborator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("zoom suggestion failed: {0}")]
pub struct SuggestionFailure(pub String);

/// Errors starting a suggestion request.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// A request is already in flight; it must resolve or fail first.
    #[error("a zoom suggestion is already pending")]
    AlreadyPending,
    /// The view has no visible range to describe (surface not yet measured
    /// or the item set is empty).
    #[error("no visible range to describe")]
    NoVisibleRange,
}

/// Outcome of resolving a suggestion response.
///
/// The failure arm replaces the original design's global notification side
/// channel: the caller receives the outcome as a value and decides how to
/// surface it.
#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionOutcome {
    /// The suggestion was applied; `zoom` is the clamped factor now in
    /// effect.
    Applied {
        /// The factor after clamping into the operating range.
        zoom: f64,
        /// The collaborator's rationale.
        reason: String,
    },
    /// The collaborator failed; the zoom factor is unchanged.
    Failed(SuggestionFailure),
    /// The response did not match the in-flight request and was ignored.
    Stale,
}

/// Clamped zoom factor plus the suggestion state machine.
#[derive(Clone, Debug)]
pub struct ZoomControl {
    factor: f64,
    min: f64,
    max: f64,
    phase: ZoomPhase,
    in_flight: Option<SuggestionToken>,
    next_token: u64,
}

impl ZoomControl {
    /// Creates a control with the given operating range.
    ///
    /// The range is normalized so that `min <= max`; the initial factor is
    /// `1.0` clamped into the range.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            factor: 1.0_f64.clamp(min, max),
            min,
            max,
            phase: ZoomPhase::Idle,
            in_flight: None,
            next_token: 0,
        }
    }

    /// The current zoom factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The operating range as `(min, max)`.
    #[must_use]
    pub fn limits(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// The current machine phase.
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// `true` while a suggestion request is in flight.
    #[must_use]
    pub fn is_suggestion_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies direct zoom input, clamped into the operating range.
    ///
    /// Allowed while a suggestion is pending; only the suggestion path
    /// itself is single-flight. Non-finite input is ignored.
    pub fn set(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.factor = zoom.clamp(self.min, self.max);
        if self.in_flight.is_none() {
            self.phase = ZoomPhase::UserZooming;
        }
        log::debug!("zoom set to {}", self.factor);
    }

    /// Zooms in one step.
    pub fn step_in(&mut self) {
        self.set(self.factor * STEP_FACTOR);
    }

    /// Zooms out one step.
    pub fn step_out(&mut self) {
        self.set(self.factor / STEP_FACTOR);
    }

    /// Starts a suggestion round, entering [`ZoomPhase::AiPending`].
    ///
    /// Refuses while another request is in flight; the caller surfaces the
    /// refusal and keeps the existing request running.
    pub fn begin_suggestion(
        &mut self,
        request: SuggestionRequest,
    ) -> Result<PendingSuggestion, SuggestionError> {
        if self.in_flight.is_some() {
            return Err(SuggestionError::AlreadyPending);
        }
        let token = SuggestionToken(self.next_token);
        self.next_token += 1;
        self.in_flight = Some(token);
        self.phase = ZoomPhase::AiPending;
        log::debug!(
            "zoom suggestion requested: {} events, {} eras in view",
            request.visible_events,
            request.visible_eras
        );
        Ok(PendingSuggestion { token, request })
    }

    /// Feeds the collaborator's response back into the machine.
    ///
    /// A token that does not match the in-flight request — a late response
    /// for a superseded round, or any response after teardown and rebuild —
    /// yields [`SuggestionOutcome::Stale`] and changes nothing. On success
    /// the suggested factor is clamped into the operating range and applied;
    /// on failure the factor is untouched and the machine returns to
    /// [`ZoomPhase::Idle`].
    pub fn resolve_suggestion(
        &mut self,
        token: SuggestionToken,
        result: Result<ZoomSuggestion, SuggestionFailure>,
    ) -> SuggestionOutcome {
        if self.in_flight != Some(token) {
            log::debug!("ignoring stale zoom suggestion response");
            return SuggestionOutcome::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(suggestion) => {
                let zoom = suggestion.suggested_zoom.clamp(self.min, self.max);
                self.factor = zoom;
                self.phase = ZoomPhase::AiApplied;
                log::debug!(
                    "zoom suggestion applied: {} (suggested {})",
                    zoom,
                    suggestion.suggested_zoom
                );
                SuggestionOutcome::Applied {
                    zoom,
                    reason: suggestion.reason,
                }
            }
            Err(failure) => {
                self.phase = ZoomPhase::Idle;
                log::warn!("{failure}");
                SuggestionOutcome::Failed(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            view_start_ms: 0,
            view_end_ms: 1,
            visible_events: 3,
            visible_eras: 2,
        }
    }

    fn suggestion(zoom: f64) -> ZoomSuggestion {
        ZoomSuggestion {
            suggested_zoom: zoom,
            reason: "denser view".to_string(),
        }
    }

    #[test]
    fn new_control_starts_idle_within_range() {
        let control = ZoomControl::new(1.0, 100.0);
        assert_eq!(control.factor(), 1.0);
        assert_eq!(control.phase(), ZoomPhase::Idle);
        assert!(!control.is_suggestion_pending());

        // Reversed limits are normalized; the initial factor clamps in.
        let control = ZoomControl::new(10.0, 2.0);
        assert_eq!(control.limits(), (2.0, 10.0));
        assert_eq!(control.factor(), 2.0);
    }

    #[test]
    fn set_clamps_into_the_operating_range() {
        let mut control = ZoomControl::new(1.0, 100.0);
        control.set(250.0);
        assert_eq!(control.factor(), 100.0);
        control.set(0.001);
        assert_eq!(control.factor(), 1.0);
        assert_eq!(control.phase(), ZoomPhase::UserZooming);
    }

    #[test]
    fn set_ignores_non_finite_input() {
        let mut control = ZoomControl::new(1.0, 100.0);
        control.set(5.0);
        control.set(f64::NAN);
        control.set(f64::INFINITY);
        assert_eq!(control.factor(), 5.0);
    }

    #[test]
    fn steps_multiply_and_divide() {
        let mut control = ZoomControl::new(1.0, 100.0);
        control.set(4.0);
        control.step_in();
        assert_eq!(control.factor(), 6.0);
        control.step_out();
        assert_eq!(control.factor(), 4.0);

        // Steps clamp at the bounds.
        control.set(1.0);
        control.step_out();
        assert_eq!(control.factor(), 1.0);
    }

    #[test]
    fn only_one_suggestion_may_be_pending() {
        let mut control = ZoomControl::new(1.0, 100.0);
        let pending = control.begin_suggestion(request()).unwrap();
        assert_eq!(control.phase(), ZoomPhase::AiPending);

        let err = control.begin_suggestion(request()).unwrap_err();
        assert_eq!(err, SuggestionError::AlreadyPending);

        // Resolving frees the slot.
        control.resolve_suggestion(pending.token, Ok(suggestion(2.0)));
        assert!(control.begin_suggestion(request()).is_ok());
    }

    #[test]
    fn out_of_range_suggestion_is_clamped_to_the_bound() {
        let mut control = ZoomControl::new(1.0, 100.0);
        let pending = control.begin_suggestion(request()).unwrap();

        let outcome = control.resolve_suggestion(pending.token, Ok(suggestion(150.0)));
        assert_eq!(control.factor(), 100.0);
        assert_eq!(control.phase(), ZoomPhase::AiApplied);
        match outcome {
            SuggestionOutcome::Applied { zoom, .. } => assert_eq!(zoom, 100.0),
            other => panic!("expected applied outcome, got {other:?}"),
        }
    }

    #[test]
    fn failure_leaves_zoom_unchanged_and_returns_to_idle() {
        let mut control = ZoomControl::new(1.0, 100.0);
        control.set(7.0);
        let pending = control.begin_suggestion(request()).unwrap();

        let failure = SuggestionFailure("collaborator unavailable".to_string());
        let outcome = control.resolve_suggestion(pending.token, Err(failure.clone()));
        assert_eq!(outcome, SuggestionOutcome::Failed(failure));
        assert_eq!(control.factor(), 7.0);
        assert_eq!(control.phase(), ZoomPhase::Idle);
        assert!(!control.is_suggestion_pending());
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut control = ZoomControl::new(1.0, 100.0);
        let first = control.begin_suggestion(request()).unwrap();
        control.resolve_suggestion(first.token, Err(SuggestionFailure("timeout".to_string())));

        // A second round begins; the first round's token is now stale.
        let second = control.begin_suggestion(request()).unwrap();
        let outcome = control.resolve_suggestion(first.token, Ok(suggestion(50.0)));
        assert_eq!(outcome, SuggestionOutcome::Stale);
        assert_eq!(control.factor(), 1.0);
        assert!(control.is_suggestion_pending());

        // The live round still resolves normally.
        let outcome = control.resolve_suggestion(second.token, Ok(suggestion(50.0)));
        assert!(matches!(outcome, SuggestionOutcome::Applied { .. }));
        assert_eq!(control.factor(), 50.0);
    }

    #[test]
    fn direct_zoom_is_allowed_while_pending() {
        let mut control = ZoomControl::new(1.0, 100.0);
        let pending = control.begin_suggestion(request()).unwrap();
        control.set(9.0);
        assert_eq!(control.factor(), 9.0);
        assert_eq!(control.phase(), ZoomPhase::AiPending);

        control.resolve_suggestion(pending.token, Ok(suggestion(3.0)));
        assert_eq!(control.factor(), 3.0);
    }
}
