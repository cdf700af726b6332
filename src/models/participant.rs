use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Presenter,
    Attendee,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Presenter => "presenter",
            Category::Attendee => "attendee",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase, P/A shortcuts)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "presenter" | "p" => Some(Category::Presenter),
            "attendee" | "a" => Some(Category::Attendee),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Presenter => "Presenter",
            Category::Attendee => "Attendee",
        }
    }
}

/// A registered participant as returned by the backend.
///
/// `qr_token` is the durable external identifier; the backend calls it
/// `qr_code`, older deployments `qr_token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    pub category: Category,
    #[serde(rename = "qr_code", alias = "qr_token")]
    pub qr_token: String,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

/// Body of `POST /registration/onspot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub category: Category,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
    })
}

fn required(field: &'static str, value: &str, message: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation {
            field,
            message: message.to_string(),
        });
    }
    Ok(v.to_string())
}

impl RegistrationPayload {
    /// Build a payload from raw form input, trimming every field.
    /// Fails on the first missing or malformed field, before anything is sent.
    pub fn from_form(
        name: &str,
        email: &str,
        phone: &str,
        college: &str,
        category: &str,
    ) -> AppResult<Self> {
        let name = required("name", name, "Name is required")?;
        let email = required("email", email, "Email is required")?;
        if !email_pattern().is_match(&email) {
            return Err(AppError::Validation {
                field: "email",
                message: "Invalid email address".to_string(),
            });
        }
        let phone = required("phone", phone, "Phone number is required")?;
        let college = required("college", college, "College is required")?;
        let category =
            Category::from_code(category).ok_or_else(|| AppError::InvalidCategory(category.to_string()))?;

        Ok(Self {
            name,
            email,
            phone,
            college,
            category,
        })
    }
}
