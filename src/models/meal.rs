use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MEAL_TYPES: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::HiTea];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "breakfast")]
    Breakfast,
    #[serde(rename = "lunch")]
    Lunch,
    #[serde(rename = "hitea")]
    HiTea,
}

impl MealType {
    /// Wire / DB string
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::HiTea => "hitea",
        }
    }

    /// Helper: convert input code from CLI (b/l/h shortcuts accepted)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "breakfast" | "b" => Some(MealType::Breakfast),
            "lunch" | "l" => Some(MealType::Lunch),
            "hitea" | "hi-tea" | "high tea" | "tea" | "h" => Some(MealType::HiTea),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::HiTea => "High Tea",
        }
    }
}

/// One of the two conference days. Serialized as the bare number 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceDay {
    One,
    Two,
}

impl ConferenceDay {
    pub fn number(&self) -> u8 {
        match self {
            ConferenceDay::One => 1,
            ConferenceDay::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(ConferenceDay::One),
            2 => Some(ConferenceDay::Two),
            _ => None,
        }
    }
}

impl Serialize for ConferenceDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for ConferenceDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        ConferenceDay::from_number(n)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid conference day {n}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealClaim {
    pub id: String,
    pub participant_id: String,
    pub day: ConferenceDay,
    pub meal_type: MealType,
    pub claimed_at: String,
}
