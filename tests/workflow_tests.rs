use confkiosk::api::error::{ApiError, ApiErrorKind};
use confkiosk::core::workflow::{ClaimGuard, ClaimOutcome, ClaimWorkflow, Command, State};
use confkiosk::models::meal::{ConferenceDay, MealType};
use std::time::{Duration, Instant};

mod common;
use common::{already_claimed, asha, claimed};

fn ready(wf: &mut ClaimWorkflow) {
    let Some(Command::Lookup { ticket, .. }) = wf.scan("QR-100") else {
        panic!("idle workflow must accept a scan");
    };
    assert!(wf.lookup_finished(ticket, Ok(asha())));
}

#[test]
fn scan_is_accepted_once_until_lookup_finishes() {
    let mut wf = ClaimWorkflow::default();

    let first = wf.scan("QR-100");
    assert!(matches!(first, Some(Command::Lookup { ref qr_token, .. }) if qr_token == "QR-100"));
    assert!(!wf.is_scannable());
    assert!(wf.scan("QR-100").is_none());
}

#[test]
fn lookup_failure_keeps_the_station_scannable() {
    let mut wf = ClaimWorkflow::default();
    let Some(Command::Lookup { ticket, .. }) = wf.scan("BAD") else {
        panic!("scan refused");
    };

    assert!(wf.lookup_finished(ticket, Err(ApiError::new(ApiErrorKind::NotFound, "Participant not found"))));
    assert_eq!(
        wf.state(),
        &State::LookupFailed {
            message: "Participant not found".to_string()
        }
    );
    assert!(wf.is_scannable());
    assert!(wf.scan("QR-100").is_some());
}

#[test]
fn result_of_a_reset_lookup_is_dropped() {
    let mut wf = ClaimWorkflow::default();
    let Some(Command::Lookup { ticket: stale, .. }) = wf.scan("QR-100") else {
        panic!("scan refused");
    };
    wf.reset();
    let Some(Command::Lookup { ticket: fresh, .. }) = wf.scan("QR-200") else {
        panic!("scan refused after reset");
    };

    assert!(!wf.lookup_finished(stale, Ok(asha())));
    assert!(matches!(wf.state(), State::LookingUp { qr_token, .. } if qr_token == "QR-200"));
    assert!(wf.lookup_finished(fresh, Err(ApiError::network("backend unreachable"))));
}

#[test]
fn submit_needs_a_participant() {
    let mut wf = ClaimWorkflow::default();
    assert_eq!(wf.submit(MealType::Lunch, Some(ConferenceDay::One)), Err(ClaimGuard::NotReady));
}

#[test]
fn submit_outside_conference_is_refused_and_keeps_participant() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);

    assert_eq!(wf.submit(MealType::Lunch, None), Err(ClaimGuard::OutsideConference));
    assert!(matches!(wf.state(), State::ReadyToClaim { .. }));
    assert_eq!(wf.participant().map(|p| p.name.as_str()), Some("Asha"));
}

#[test]
fn successful_claim_confirms_then_resets_after_delay() {
    let mut wf = ClaimWorkflow::new(Duration::from_millis(2000));
    ready(&mut wf);

    let Ok(Command::Claim { ticket, payload }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };
    assert_eq!(payload.qr_data, "QR-100");
    assert_eq!(payload.day, ConferenceDay::One);
    assert_eq!(payload.meal_type, MealType::Lunch);

    let now = Instant::now();
    let outcome = wf.claim_finished(ticket, Ok(claimed()), now);
    assert_eq!(outcome, Some(ClaimOutcome::Claimed("LUNCH claimed successfully!".to_string())));

    assert!(!wf.tick(now + Duration::from_millis(1999)));
    assert!(matches!(wf.state(), State::Claimed { .. }));
    assert!(wf.tick(now + Duration::from_millis(2000)));
    assert_eq!(wf.state(), &State::Idle);
}

#[test]
fn duplicate_claim_keeps_participant_with_error() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };

    let outcome = wf.claim_finished(ticket, Ok(already_claimed()), Instant::now());
    assert_eq!(outcome, Some(ClaimOutcome::Duplicate("Already claimed".to_string())));

    match wf.state() {
        State::ReadyToClaim { participant, error, .. } => {
            assert_eq!(participant.name, "Asha");
            assert_eq!(error.as_deref(), Some("Already claimed"));
        }
        other => panic!("unexpected state {other:?}"),
    }
    // another meal can be picked right away
    assert!(wf.submit(MealType::HiTea, Some(ConferenceDay::One)).is_ok());
}

#[test]
fn conflict_status_counts_as_duplicate() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Breakfast, Some(ConferenceDay::Two)) else {
        panic!("submit refused");
    };

    let outcome = wf.claim_finished(
        ticket,
        Err(ApiError::new(ApiErrorKind::Duplicate, "Meal already taken")),
        Instant::now(),
    );
    assert_eq!(outcome, Some(ClaimOutcome::Duplicate("Meal already taken".to_string())));
}

#[test]
fn failed_claim_without_message_gets_a_default() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };

    let mut resp = already_claimed();
    resp.message.clear();
    let outcome = wf.claim_finished(ticket, Ok(resp), Instant::now());
    assert_eq!(outcome, Some(ClaimOutcome::Failed("Failed to claim meal".to_string())));
}

#[test]
fn claim_result_after_reset_is_ignored() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };
    wf.reset();

    assert_eq!(wf.claim_finished(ticket, Ok(claimed()), Instant::now()), None);
    assert_eq!(wf.state(), &State::Idle);
}

#[test]
fn rejected_request_mentioning_already_counts_as_duplicate() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };

    let outcome = wf.claim_finished(
        ticket,
        Err(ApiError::new(ApiErrorKind::Validation, "All meals already consumed")),
        Instant::now(),
    );
    assert_eq!(
        outcome,
        Some(ClaimOutcome::Duplicate("All meals already consumed".to_string()))
    );
}

#[test]
fn other_rejected_request_is_a_plain_failure() {
    let mut wf = ClaimWorkflow::default();
    ready(&mut wf);
    let Ok(Command::Claim { ticket, .. }) = wf.submit(MealType::Lunch, Some(ConferenceDay::One)) else {
        panic!("submit refused");
    };

    let outcome = wf.claim_finished(
        ticket,
        Err(ApiError::new(ApiErrorKind::Validation, "Invalid meal type")),
        Instant::now(),
    );
    assert_eq!(outcome, Some(ClaimOutcome::Failed("Invalid meal type".to_string())));
}
