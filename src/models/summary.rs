use super::meal::{MealClaim, MealType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub presenters: u64,
    pub attendees: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealsByType {
    pub breakfast: u64,
    pub lunch: u64,
    pub hitea: u64,
}

impl MealsByType {
    pub fn count(&self, meal: MealType) -> u64 {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::HiTea => self.hitea,
        }
    }
}

/// Read-only projection computed by the server for `GET /summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_participants: u64,
    pub meals_day1: u64,
    pub meals_day2: u64,
    pub category_breakdown: CategoryBreakdown,
    pub meals_by_type: MealsByType,
    #[serde(default)]
    pub latest_claims: Vec<MealClaim>,
}

impl DashboardSummary {
    pub fn total_meals(&self) -> u64 {
        self.meals_day1 + self.meals_day2
    }
}
