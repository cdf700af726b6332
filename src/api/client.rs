//! Blocking HTTP implementation of `ConferenceApi`.

use super::error::{ApiError, ApiErrorKind};
use super::{ConferenceApi, LoginPayload, LoginResponse, MealScanPayload, MealScanResponse};
use crate::errors::AppResult;
use crate::models::participant::{Participant, RegistrationPayload};
use crate::models::summary::DashboardSummary;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct HttpApi {
    client: Client,
    base_url: String,
    bearer: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: None,
        })
    }

    /// Attach the operator's session token to every following request.
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        match &self.bearer {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body, folding every failure into
    /// an `ApiError` whose message falls back to `fallback`.
    fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.prepare(builder).send().map_err(|e| {
            warn!(error = %e, "request failed before a response");
            ApiError::network(transport_message(&e, fallback))
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "response received");

        if status.is_success() {
            return response
                .json::<T>()
                .map_err(|e| ApiError::network(format!("{fallback}: unreadable response ({e})")));
        }

        Err(error_from_response(response, fallback))
    }
}

fn transport_message(e: &reqwest::Error, fallback: &str) -> String {
    if e.is_timeout() {
        format!("{fallback}: request timed out")
    } else if e.is_connect() {
        format!("{fallback}: backend unreachable")
    } else {
        format!("{fallback}: {e}")
    }
}

/// Build the normalized error for a non-2xx response, preferring the
/// backend's own `message` / `error` field.
fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let kind = ApiError::kind_for_status(status);
    let body = response.text().unwrap_or_default();
    let message = message_from_body(&body).unwrap_or_else(|| format!("{fallback} (HTTP {status})"));
    ApiError::new(kind, message)
}

pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

impl ConferenceApi for HttpApi {
    fn register(&self, payload: &RegistrationPayload) -> Result<Participant, ApiError> {
        debug!(email = %payload.email, "POST /registration/onspot");
        self.send(
            self.client.post(self.url("/registration/onspot")).json(payload),
            "Registration failed",
        )
    }

    fn lookup(&self, qr_token: &str) -> Result<Participant, ApiError> {
        debug!(qr_token, "GET /lookup");
        self.send(
            self.client
                .get(self.url("/lookup"))
                .query(&[("qr_data", qr_token)]),
            "QR lookup failed",
        )
    }

    fn claim_meal(&self, payload: &MealScanPayload) -> Result<MealScanResponse, ApiError> {
        debug!(
            qr_token = %payload.qr_data,
            day = payload.day.number(),
            meal = payload.meal_type.as_str(),
            "POST /meal/scan"
        );
        self.send(
            self.client.post(self.url("/meal/scan")).json(payload),
            "Meal scan failed",
        )
        .map_err(|e| {
            if e.is_duplicate() {
                ApiError::new(ApiErrorKind::Duplicate, e.message)
            } else {
                e
            }
        })
    }

    fn summary(&self) -> Result<DashboardSummary, ApiError> {
        debug!("GET /summary");
        self.send(self.client.get(self.url("/summary")), "Failed to fetch summary")
    }

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        debug!(email, "POST /admin/login");
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .send(
                self.client.post(self.url("/admin/login")).json(&payload),
                "Login failed",
            )
            .map_err(|e| match e.kind {
                ApiErrorKind::Unauthorized | ApiErrorKind::Validation => {
                    ApiError::new(ApiErrorKind::Unauthorized, e.message)
                }
                _ => e,
            })?;

        if !response.success || response.token().is_none() {
            return Err(ApiError::new(
                ApiErrorKind::Unauthorized,
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Invalid email or password".to_string()),
            ));
        }

        Ok(response)
    }
}
