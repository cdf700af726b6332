//! Operator session gate.
//!
//! `SessionContext` is built once per run and handed to every command. It owns
//! the local database; `login` and `logout` are the only writers of the
//! session keys, everything else reads.

use crate::api::ConferenceApi;
use crate::api::error::{ApiError, ApiErrorKind};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{self, KEY_EMAIL, KEY_ISSUED_AT, KEY_ROLE, KEY_TOKEN, SESSION_KEYS};
use crate::errors::{AppError, AppResult};
use crate::models::session::{AdminSession, Role};
use chrono::Local;
use tracing::debug;

pub struct SessionContext {
    pool: DbPool,
}

impl SessionContext {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Local database, for the journal and the audit log.
    pub fn db(&self) -> &DbPool {
        &self.pool
    }

    /// The persisted session, if any. A stored role this build does not know
    /// counts as no session.
    pub fn current(&self) -> AppResult<Option<AdminSession>> {
        let conn = &self.pool.conn;
        let Some(token) = store::get(conn, KEY_TOKEN)?.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let role = match store::get(conn, KEY_ROLE)? {
            Some(raw) => match Role::from_db_str(&raw) {
                Some(r) => r,
                None => {
                    debug!(role = %raw, "stored role not recognized");
                    return Ok(None);
                }
            },
            None => Role::Admin,
        };

        Ok(Some(AdminSession {
            token,
            role,
            email: store::get(conn, KEY_EMAIL)?,
            issued_at: store::get(conn, KEY_ISSUED_AT)?,
        }))
    }

    /// Gate for protected commands: any stored session passes, the role only
    /// decides where the operator lands after login.
    pub fn require(&self) -> AppResult<AdminSession> {
        self.current()?.ok_or(AppError::LoginRequired)
    }

    pub fn login<A: ConferenceApi + ?Sized>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
    ) -> AppResult<AdminSession> {
        let response = api.login(email, password)?;

        let token = Some(&response)
            .filter(|r| r.success)
            .and_then(|r| r.token())
            .ok_or_else(|| ApiError::new(ApiErrorKind::Unauthorized, "Invalid email or password"))?
            .to_string();
        let role = match response.role() {
            Some(raw) => Role::from_db_str(raw).ok_or_else(|| AppError::InvalidRole(raw.to_string()))?,
            None => Role::Admin,
        };
        let issued_at = Local::now().to_rfc3339();

        store::set_many(
            &mut self.pool.conn,
            &[
                (KEY_TOKEN, token.as_str()),
                (KEY_ROLE, role.as_str()),
                (KEY_EMAIL, email),
                (KEY_ISSUED_AT, issued_at.as_str()),
            ],
        )?;
        ttlog_quiet(&self.pool.conn, "login", email, &format!("Logged in as {}", role.as_str()));

        Ok(AdminSession {
            token,
            role,
            email: Some(email.to_string()),
            issued_at: Some(issued_at),
        })
    }

    /// Drop every session key, whether or not a session exists.
    pub fn logout(&mut self) -> AppResult<Option<AdminSession>> {
        let previous = self.current().unwrap_or_else(|e| {
            debug!(error = %e, "previous session unreadable, clearing anyway");
            None
        });
        store::remove_many(&mut self.pool.conn, &SESSION_KEYS)?;
        let who = previous
            .as_ref()
            .and_then(|s| s.email.clone())
            .unwrap_or_default();
        ttlog_quiet(&self.pool.conn, "logout", &who, "Session cleared");
        Ok(previous)
    }
}

/// Errors of protected calls: an authorization failure means the stored
/// token is stale and the operator has to log in again. No retry.
pub fn protected_error(e: ApiError) -> AppError {
    if e.is_unauthorized() {
        AppError::LoginRequired
    } else {
        AppError::Api(e)
    }
}
