use serde::{Deserialize, Serialize};

/// Where an operator lands after logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    RegistrationDesk,
    MealScan,
    Dashboard,
}

impl Destination {
    /// The subcommand that opens this destination.
    pub fn command(&self) -> &'static str {
        match self {
            Destination::RegistrationDesk => "confkiosk register",
            Destination::MealScan => "confkiosk scan",
            Destination::Dashboard => "confkiosk dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    LaptopRegistration,
    PhoneRegistration,
    FoodMobile,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::LaptopRegistration,
        Role::PhoneRegistration,
        Role::FoodMobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::LaptopRegistration => "laptop_registration",
            Role::PhoneRegistration => "phone_registration",
            Role::FoodMobile => "food_mobile",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn destination(&self) -> Destination {
        match self {
            Role::Admin => Destination::Dashboard,
            Role::LaptopRegistration | Role::PhoneRegistration => Destination::RegistrationDesk,
            Role::FoodMobile => Destination::MealScan,
        }
    }

    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// A persisted operator session. The token is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub role: Role,
    pub email: Option<String>,
    pub issued_at: Option<String>,
}
