//! Scan station: QR capture + claim workflow + backend.
//!
//! Each network call blocks the station; the capture stays suspended from the
//! moment a token is accepted until the workflow is scannable again, so a
//! double trigger never reaches the backend twice.

use crate::api::ConferenceApi;
use crate::core::capture::{CaptureError, QrCapture};
use crate::core::workflow::{ClaimGuard, ClaimOutcome, ClaimWorkflow, Command, State};
use crate::models::meal::{ConferenceDay, MealType};
use crate::models::participant::Participant;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum StationEvent {
    /// Input dropped: blank, or capture suspended.
    Ignored,
    Found(Participant),
    LookupFailed {
        qr_token: String,
        message: String,
    },
    Claimed {
        participant: Participant,
        meal: MealType,
        day: ConferenceDay,
        confirmation: String,
    },
    Rejected {
        participant: Participant,
        meal: MealType,
        day: ConferenceDay,
        message: String,
        duplicate: bool,
    },
    Refused(ClaimGuard),
}

pub struct ScanStation<'a, A: ConferenceApi + ?Sized> {
    api: &'a A,
    capture: QrCapture,
    workflow: ClaimWorkflow,
    day: Option<ConferenceDay>,
}

impl<'a, A: ConferenceApi + ?Sized> ScanStation<'a, A> {
    pub fn new(api: &'a A, day: Option<ConferenceDay>, reset_delay: Duration) -> Self {
        Self {
            api,
            capture: QrCapture::new(),
            workflow: ClaimWorkflow::new(reset_delay),
            day,
        }
    }

    pub fn day(&self) -> Option<ConferenceDay> {
        self.day
    }

    pub fn state(&self) -> &State {
        self.workflow.state()
    }

    pub fn workflow(&self) -> &ClaimWorkflow {
        &self.workflow
    }

    pub fn capture(&self) -> &QrCapture {
        &self.capture
    }

    /// Try the camera; manual entry keeps working whatever the result.
    pub fn start_camera(&mut self) -> Result<(), CaptureError> {
        self.capture.start_camera()
    }

    fn sync_capture(&mut self) {
        if self.workflow.is_scannable() {
            self.capture.resume();
        }
    }

    /// Operator scanned or typed a token.
    pub fn scan(&mut self, raw: &str) -> StationEvent {
        let Some(token) = self.capture.submit(raw) else {
            debug!("scan ignored, capture suspended or blank input");
            return StationEvent::Ignored;
        };

        let Some(Command::Lookup { ticket, qr_token }) = self.workflow.scan(token.as_str()) else {
            return StationEvent::Ignored;
        };

        let result = self.api.lookup(&qr_token);
        self.workflow.lookup_finished(ticket, result);

        let event = match self.workflow.state() {
            State::ReadyToClaim { participant, .. } => StationEvent::Found(participant.clone()),
            State::LookupFailed { message } => StationEvent::LookupFailed {
                qr_token,
                message: message.clone(),
            },
            _ => StationEvent::Ignored,
        };
        self.sync_capture();
        event
    }

    /// Operator picked a meal for the participant on screen.
    pub fn claim(&mut self, meal: MealType, now: Instant) -> StationEvent {
        let (ticket, payload) = match self.workflow.submit(meal, self.day) {
            Ok(Command::Claim { ticket, payload }) => (ticket, payload),
            Ok(Command::Lookup { .. }) => return StationEvent::Ignored,
            Err(guard) => return StationEvent::Refused(guard),
        };
        let day = payload.day;

        let result = self.api.claim_meal(&payload);
        let Some(outcome) = self.workflow.claim_finished(ticket, result, now) else {
            return StationEvent::Ignored;
        };
        let participant = self.workflow.participant().cloned();

        match (outcome, participant) {
            (ClaimOutcome::Claimed(confirmation), Some(participant)) => StationEvent::Claimed {
                participant,
                meal,
                day,
                confirmation,
            },
            (ClaimOutcome::Duplicate(message), Some(participant)) => StationEvent::Rejected {
                participant,
                meal,
                day,
                message,
                duplicate: true,
            },
            (ClaimOutcome::Failed(message), Some(participant)) => StationEvent::Rejected {
                participant,
                meal,
                day,
                message,
                duplicate: false,
            },
            (_, None) => StationEvent::Ignored,
        }
    }

    /// Let the post-claim delay run out. Returns true when the station went
    /// back to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        let fired = self.workflow.tick(now);
        self.sync_capture();
        fired
    }

    /// Time left before the auto reset, if a claim is on screen.
    pub fn reset_in(&self, now: Instant) -> Option<Duration> {
        match self.workflow.state() {
            State::Claimed { reset_at, .. } => Some(reset_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.workflow.reset();
        self.capture.resume();
    }
}
