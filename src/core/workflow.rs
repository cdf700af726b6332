//! Meal-claim workflow.
//!
//! ```text
//! Idle --scan--> LookingUp --ok--> ReadyToClaim --submit--> Claiming --ok--> Claimed --delay--> Idle
//!                    \--err--> LookupFailed          ^                 |
//!                                                    \---- error -----/
//! ```
//!
//! The machine performs no I/O. `scan` and `submit` return the `Command` the
//! driver has to execute; the driver feeds the result back with the ticket it
//! got. Results carrying a ticket that is no longer in flight (the operator
//! reset in the meantime) are dropped.

use crate::api::error::ApiError;
use crate::api::{MealScanPayload, MealScanResponse};
use crate::models::meal::{ConferenceDay, MealType};
use crate::models::participant::Participant;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(2);

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup { ticket: Ticket, qr_token: String },
    Claim { ticket: Ticket, payload: MealScanPayload },
}

/// Why a submit was refused before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimGuard {
    #[error("no participant is ready to claim, scan a QR code first")]
    NotReady,
    #[error("today is not a conference day")]
    OutsideConference,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    LookingUp {
        qr_token: String,
        ticket: Ticket,
    },
    LookupFailed {
        message: String,
    },
    ReadyToClaim {
        qr_token: String,
        participant: Participant,
        error: Option<String>,
    },
    Claiming {
        qr_token: String,
        participant: Participant,
        meal: MealType,
        ticket: Ticket,
    },
    Claimed {
        participant: Participant,
        meal: MealType,
        confirmation: String,
        reset_at: Instant,
    },
}

/// What a finished claim meant for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed(String),
    Duplicate(String),
    Failed(String),
}

#[derive(Debug)]
pub struct ClaimWorkflow {
    state: State,
    next_ticket: u64,
    reset_delay: Duration,
}

impl Default for ClaimWorkflow {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ClaimWorkflow {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            state: State::Idle,
            next_ticket: 0,
            reset_delay,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// New scans are accepted only here.
    pub fn is_scannable(&self) -> bool {
        matches!(self.state, State::Idle | State::LookupFailed { .. })
    }

    pub fn participant(&self) -> Option<&Participant> {
        match &self.state {
            State::ReadyToClaim { participant, .. }
            | State::Claiming { participant, .. }
            | State::Claimed { participant, .. } => Some(participant),
            _ => None,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    pub fn scan(&mut self, qr_token: &str) -> Option<Command> {
        if !self.is_scannable() {
            return None;
        }
        let ticket = self.issue_ticket();
        self.state = State::LookingUp {
            qr_token: qr_token.to_string(),
            ticket,
        };
        Some(Command::Lookup {
            ticket,
            qr_token: qr_token.to_string(),
        })
    }

    /// Feed back a lookup result. Returns false when the result was stale.
    pub fn lookup_finished(&mut self, ticket: Ticket, result: Result<Participant, ApiError>) -> bool {
        let qr_token = match &self.state {
            State::LookingUp {
                qr_token,
                ticket: current,
            } if *current == ticket => qr_token.clone(),
            _ => return false,
        };

        self.state = match result {
            Ok(participant) => State::ReadyToClaim {
                qr_token,
                participant,
                error: None,
            },
            Err(e) => State::LookupFailed { message: e.message },
        };
        true
    }

    pub fn submit(&mut self, meal: MealType, day: Option<ConferenceDay>) -> Result<Command, ClaimGuard> {
        let State::ReadyToClaim {
            qr_token,
            participant,
            ..
        } = &self.state
        else {
            return Err(ClaimGuard::NotReady);
        };
        let day = day.ok_or(ClaimGuard::OutsideConference)?;

        let qr_token = qr_token.clone();
        let participant = participant.clone();
        let ticket = self.issue_ticket();
        let payload = MealScanPayload {
            qr_data: qr_token.clone(),
            day,
            meal_type: meal,
        };

        self.state = State::Claiming {
            qr_token,
            participant,
            meal,
            ticket,
        };
        Ok(Command::Claim { ticket, payload })
    }

    /// Feed back a claim result. `None` means the result was stale.
    pub fn claim_finished(
        &mut self,
        ticket: Ticket,
        result: Result<MealScanResponse, ApiError>,
        now: Instant,
    ) -> Option<ClaimOutcome> {
        let (qr_token, participant, meal) = match &self.state {
            State::Claiming {
                qr_token,
                participant,
                meal,
                ticket: current,
            } if *current == ticket => (qr_token.clone(), participant.clone(), *meal),
            _ => return None,
        };

        let (outcome, message) = match result {
            Ok(resp) if resp.success => {
                let confirmation = format!("{} claimed successfully!", meal.as_str().to_uppercase());
                self.state = State::Claimed {
                    participant,
                    meal,
                    confirmation: confirmation.clone(),
                    reset_at: now + self.reset_delay,
                };
                return Some(ClaimOutcome::Claimed(confirmation));
            }
            Ok(resp) => {
                let message = if resp.message.is_empty() {
                    "Failed to claim meal".to_string()
                } else {
                    resp.message.clone()
                };
                if resp.is_duplicate() {
                    (ClaimOutcome::Duplicate(message.clone()), message)
                } else {
                    (ClaimOutcome::Failed(message.clone()), message)
                }
            }
            Err(e) if e.is_duplicate() => {
                (ClaimOutcome::Duplicate(e.message.clone()), e.message)
            }
            Err(e) => (ClaimOutcome::Failed(e.message.clone()), e.message),
        };

        // participant stays on screen, the operator can pick another meal
        self.state = State::ReadyToClaim {
            qr_token,
            participant,
            error: Some(message),
        };
        Some(outcome)
    }

    /// Auto reset after a successful claim. Returns true when it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.state {
            State::Claimed { reset_at, .. } if now >= *reset_at => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }

    /// Manual escape hatch: drop everything, invalidate in-flight tickets.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}
