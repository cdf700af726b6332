//! Contracts of the external REST backend.
//!
//! `ConferenceApi` is the seam between the kiosk and the network: the scan
//! station and the command handlers only see this trait, `HttpApi` is the
//! production implementation.

pub mod client;
pub mod error;

use crate::models::meal::{ConferenceDay, MealClaim, MealType};
use crate::models::participant::{Participant, RegistrationPayload};
use crate::models::summary::DashboardSummary;
use error::ApiError;
use serde::{Deserialize, Serialize};

pub use client::HttpApi;

/// Body of `POST /meal/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealScanPayload {
    pub qr_data: String,
    pub day: ConferenceDay,
    pub meal_type: MealType,
}

/// Response of `POST /meal/scan`. `success` is authoritative even on HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealScanResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub claim: Option<MealClaim>,
}

impl MealScanResponse {
    /// The backend reports duplicates only through its message text.
    // TODO: switch to a structured error code once /meal/scan returns one.
    pub fn is_duplicate(&self) -> bool {
        !self.success && error::mentions_duplicate(&self.message)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response of `POST /admin/login`.
///
/// Older backends answer `{success, token}`; the per-station deployment nests
/// `{token, role}` under `data`. Both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or_else(|| self.data.as_ref().and_then(|d| d.token.as_deref()))
            .filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .or_else(|| self.data.as_ref().and_then(|d| d.role.as_deref()))
    }
}

pub trait ConferenceApi {
    fn register(&self, payload: &RegistrationPayload) -> Result<Participant, ApiError>;

    fn lookup(&self, qr_token: &str) -> Result<Participant, ApiError>;

    fn claim_meal(&self, payload: &MealScanPayload) -> Result<MealScanResponse, ApiError>;

    fn summary(&self) -> Result<DashboardSummary, ApiError>;

    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
}
