use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

pub const MAX_DAYS: u32 = 30;
pub const MAX_PEOPLE: u32 = 20;

/// Daily per-person budget tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    #[default]
    MidRange,
    Luxury,
}

impl BudgetTier {
    /// Label shown to travelers
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget ($0-$50/day)",
            BudgetTier::MidRange => "Mid-range ($50-$150/day)",
            BudgetTier::Luxury => "Luxury ($150+/day)",
        }
    }

    /// Resolve either a short code (`budget`, `mid-range`, `luxury`) or a full label.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        [BudgetTier::Budget, BudgetTier::MidRange, BudgetTier::Luxury]
            .into_iter()
            .find(|tier| {
                normalized == tier.code() || normalized == tier.label().to_ascii_lowercase()
            })
    }

    pub fn code(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value).ok_or_else(|| {
            PlannerError::Config(format!(
                "Unknown budget tier '{}' (expected budget, mid-range or luxury)",
                value
            ))
        })
    }
}

/// Parameters collected from the traveler for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    pub destination: String,
    pub budget: BudgetTier,
    pub num_people: u32,
    pub num_days: u32,
    pub interests: Vec<String>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            budget: BudgetTier::default(),
            num_people: 2,
            num_days: 3,
            interests: Vec::new(),
        }
    }

    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_people(mut self, num_people: u32) -> Self {
        self.num_people = num_people;
        self
    }

    pub fn with_days(mut self, num_days: u32) -> Self {
        self.num_days = num_days;
        self
    }

    /// Set interest tags; blanks are dropped and repeats keep their first position.
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.clear();
        for interest in interests {
            let interest = interest.into().trim().to_string();
            if !interest.is_empty() && !self.interests.contains(&interest) {
                self.interests.push(interest);
            }
        }
        self
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|tag| tag == interest)
    }

    /// Collect every problem with the request rather than stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.destination.trim().chars().count() < 2 {
            problems.push("Please enter a valid destination".to_string());
        }
        if self.interests.is_empty() {
            problems.push("Please select at least one interest".to_string());
        }
        if !(1..=MAX_DAYS).contains(&self.num_days) {
            problems.push(format!("Trip duration must be between 1 and {} days", MAX_DAYS));
        }
        if !(1..=MAX_PEOPLE).contains(&self.num_people) {
            problems.push(format!(
                "Number of people must be between 1 and {}",
                MAX_PEOPLE
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(PlannerError::Validation(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tier_from_str() {
        assert_eq!("Budget".parse::<BudgetTier>().unwrap(), BudgetTier::Budget);

        let err = "cheap".parse::<BudgetTier>().unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("'cheap'"));
    }

    #[test]
    fn test_budget_tier_parse() {
        assert_eq!(BudgetTier::parse("luxury"), Some(BudgetTier::Luxury));
        assert_eq!(
            BudgetTier::parse("Mid-range ($50-$150/day)"),
            Some(BudgetTier::MidRange)
        );
        assert_eq!(BudgetTier::parse(" BUDGET "), Some(BudgetTier::Budget));
        assert_eq!(BudgetTier::parse("cheap"), None);
    }

    #[test]
    fn test_interests_are_deduplicated_in_order() {
        let request = TripRequest::new("Lisbon").with_interests(["food", "museums", "food", " "]);
        assert_eq!(request.interests, vec!["food", "museums"]);
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let request = TripRequest::new(" ").with_days(31).with_people(0);
        match request.validate() {
            Err(PlannerError::Validation(problems)) => assert_eq!(problems.len(), 4),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let request = TripRequest::new("Rome")
            .with_interests(["culture"])
            .with_days(30)
            .with_people(20);
        assert!(request.validate().is_ok());
    }
}
