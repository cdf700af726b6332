use confkiosk::core::session::{SessionContext, protected_error};
use confkiosk::api::error::{ApiError, ApiErrorKind};
use confkiosk::db::pool::DbPool;
use confkiosk::db::store::{self, KEY_EMAIL, KEY_ISSUED_AT, KEY_ROLE, KEY_TOKEN};
use confkiosk::errors::AppError;
use confkiosk::models::session::Role;

mod common;
use common::FakeApi;

fn fresh() -> SessionContext {
    SessionContext::new(DbPool::in_memory().expect("in-memory db"))
}

#[test]
fn no_session_means_login_required() {
    let session = fresh();
    assert_eq!(session.current().expect("read"), None);
    assert!(matches!(session.require(), Err(AppError::LoginRequired)));
}

#[test]
fn login_persists_every_session_key() {
    let mut session = fresh();
    let api = FakeApi::default();
    api.answer_login("tok-1", Some("food_mobile"));

    let logged = session.login(&api, "desk@example.org", "secret").expect("login");
    assert_eq!(logged.token, "tok-1");
    assert_eq!(logged.role, Role::FoodMobile);

    let conn = &session.db().conn;
    assert_eq!(store::get(conn, KEY_TOKEN).expect("get").as_deref(), Some("tok-1"));
    assert_eq!(store::get(conn, KEY_ROLE).expect("get").as_deref(), Some("food_mobile"));
    assert_eq!(store::get(conn, KEY_EMAIL).expect("get").as_deref(), Some("desk@example.org"));
    assert!(store::get(conn, KEY_ISSUED_AT).expect("get").is_some());

    assert_eq!(session.current().expect("read"), Some(logged));
}

#[test]
fn login_without_role_is_admin() {
    let mut session = fresh();
    let api = FakeApi::default();
    api.answer_login("tok-2", None);

    let logged = session.login(&api, "admin@example.org", "secret").expect("login");
    assert_eq!(logged.role, Role::Admin);
}

#[test]
fn rejected_login_stores_nothing() {
    let mut session = fresh();
    let api = FakeApi::default();

    let err = session.login(&api, "admin@example.org", "wrong").unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert_eq!(session.current().expect("read"), None);
}

#[test]
fn unknown_role_from_backend_is_refused() {
    let mut session = fresh();
    let api = FakeApi::default();
    api.answer_login("tok-3", Some("volunteer"));

    assert!(matches!(
        session.login(&api, "x@example.org", "pw"),
        Err(AppError::InvalidRole(r)) if r == "volunteer"
    ));
    assert_eq!(session.current().expect("read"), None);
}

#[test]
fn gate_accepts_any_known_role() {
    let mut session = fresh();
    let api = FakeApi::default();
    api.answer_login("tok-4", Some("food_mobile"));
    session.login(&api, "food@example.org", "pw").expect("login");

    let gated = session.require().expect("session present");
    assert_eq!(gated.role, Role::FoodMobile);
    assert_eq!(gated.email.as_deref(), Some("food@example.org"));
}

#[test]
fn logout_clears_every_key_and_is_idempotent() {
    let mut session = fresh();
    let api = FakeApi::default();
    api.answer_login("tok-6", Some("admin"));
    session.login(&api, "admin@example.org", "pw").expect("login");

    let previous = session.logout().expect("logout");
    assert_eq!(previous.map(|s| s.token), Some("tok-6".to_string()));

    let conn = &session.db().conn;
    for key in [KEY_TOKEN, KEY_ROLE, KEY_EMAIL, KEY_ISSUED_AT] {
        assert_eq!(store::get(conn, key).expect("get"), None, "key {key}");
    }
    assert_eq!(session.logout().expect("second logout"), None);
}

#[test]
fn unrecognized_stored_role_counts_as_no_session() {
    let session = fresh();
    let conn = &session.db().conn;
    store::set(conn, KEY_TOKEN, "tok").expect("set");
    store::set(conn, KEY_ROLE, "retired_role").expect("set");

    assert_eq!(session.current().expect("read"), None);
}

#[test]
fn expired_token_on_protected_call_asks_for_login() {
    let err = protected_error(ApiError::new(ApiErrorKind::Unauthorized, "jwt expired"));
    assert!(matches!(err, AppError::LoginRequired));

    let err = protected_error(ApiError::network("backend unreachable"));
    assert_eq!(err.to_string(), "backend unreachable");
}

#[test]
fn logout_clears_keys_even_when_stored_session_is_unreadable() {
    let mut session = fresh();
    {
        let conn = &session.db().conn;
        store::set(conn, KEY_TOKEN, "tok").expect("set");
        // a blob cannot be read back as text
        conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value) VALUES ('role', x'00ff')",
            [],
        )
        .expect("corrupt role");
    }
    assert!(session.current().is_err());

    assert_eq!(session.logout().expect("logout"), None);
    assert_eq!(store::get(&session.db().conn, KEY_TOKEN).expect("get"), None);
    assert!(session.current().expect("read").is_none());
}
