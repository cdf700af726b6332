use confkiosk::api::error::ApiErrorKind;
use confkiosk::api::{ConferenceApi, HttpApi, MealScanPayload};
use confkiosk::models::meal::{ConferenceDay, MealType};
use confkiosk::models::participant::RegistrationPayload;

mod common;
use common::{Route, stub_backend};

const ASHA: &str = r#"{"id":"p-1","name":"Asha","email":"asha@example.org","category":"attendee","qr_code":"QR-100"}"#;

fn api(routes: Vec<Route>) -> HttpApi {
    HttpApi::new(&stub_backend(routes), 5).expect("client")
}

fn lunch() -> MealScanPayload {
    MealScanPayload {
        qr_data: "QR-100".to_string(),
        day: ConferenceDay::One,
        meal_type: MealType::Lunch,
    }
}

#[test]
fn lookup_decodes_participant() {
    let api = api(vec![Route {
        method: "GET",
        path: "/api/lookup?qr_data=QR-100",
        status: 200,
        body: ASHA,
    }]);

    let p = api.lookup("QR-100").expect("lookup");
    assert_eq!(p.name, "Asha");
    assert_eq!(p.qr_token, "QR-100");
}

#[test]
fn not_found_uses_backend_message() {
    let api = api(vec![Route {
        method: "GET",
        path: "/api/lookup",
        status: 404,
        body: r#"{"message":"Participant not found"}"#,
    }]);

    let err = api.lookup("QR-404").unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.message, "Participant not found");
}

#[test]
fn error_field_and_fallback_message() {
    let api = api(vec![
        Route {
            method: "POST",
            path: "/api/registration/onspot",
            status: 400,
            body: r#"{"error":"Email already registered"}"#,
        },
        Route {
            method: "GET",
            path: "/api/summary",
            status: 500,
            body: "oops",
        },
    ]);

    let payload = RegistrationPayload::from_form("Asha", "asha@example.org", "1", "IIT", "a").expect("form");
    let err = api.register(&payload).unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert_eq!(err.message, "Email already registered");

    let err = api.summary().unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Server);
    assert_eq!(err.message, "Failed to fetch summary (HTTP 500)");
}

#[test]
fn claim_answers_are_passed_through() {
    let api = api(vec![Route {
        method: "POST",
        path: "/api/meal/scan",
        status: 200,
        body: r#"{"success":false,"message":"Already claimed"}"#,
    }]);

    let resp = api.claim_meal(&lunch()).expect("claim");
    assert!(!resp.success);
    assert!(resp.is_duplicate());
}

#[test]
fn conflict_is_a_duplicate() {
    let api = api(vec![Route {
        method: "POST",
        path: "/api/meal/scan",
        status: 409,
        body: r#"{"message":"Already claimed"}"#,
    }]);

    let err = api.claim_meal(&lunch()).unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Duplicate);
}

#[test]
fn login_failure_is_unauthorized() {
    let api = api(vec![Route {
        method: "POST",
        path: "/api/admin/login",
        status: 200,
        body: r#"{"success":false}"#,
    }]);

    let err = api.login("admin@example.org", "wrong").unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn unreachable_backend_is_a_network_error() {
    // nothing listens on the discard port
    let api = HttpApi::new("http://127.0.0.1:9/api", 2).expect("client");
    let err = api.lookup("QR-100").unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert!(err.message.starts_with("QR lookup failed"));
}

#[test]
fn bad_request_with_already_message_is_a_duplicate() {
    let api = api(vec![Route {
        method: "POST",
        path: "/api/meal/scan",
        status: 400,
        body: r#"{"error":"All meals already consumed"}"#,
    }]);

    let err = api.claim_meal(&lunch()).unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Duplicate);
    assert_eq!(err.message, "All meals already consumed");
}

#[test]
fn bad_request_without_already_stays_validation() {
    let api = api(vec![Route {
        method: "POST",
        path: "/api/meal/scan",
        status: 400,
        body: r#"{"error":"Invalid meal type"}"#,
    }]);

    let err = api.claim_meal(&lunch()).unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Validation);
}
