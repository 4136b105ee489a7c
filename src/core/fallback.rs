//! Deterministic stand-ins for sections that extraction could not fill.

use crate::types::{ActivityRecord, DailyPlan, FoodRecord};

pub const GENERIC_TIPS: [&str; 4] = [
    "Check local weather conditions before your trip",
    "Learn basic local phrases for better communication",
    "Keep copies of important documents",
    "Research local customs and etiquette",
];

/// One generic full-day activity per requested day, keyed `Day N`.
pub fn basic_daily_plan(day_count: u32) -> DailyPlan {
    let mut plan = DailyPlan::new();
    for day in 1..=day_count {
        let label = day_label(day);
        let activity = ActivityRecord::new(
            format!("Explore {} highlights", label),
            "Full day",
            "Based on AI recommendations and your interests",
        )
        .with_cost("Varies by activity");
        plan.insert(label, vec![activity]);
    }
    plan
}

pub fn generic_food(destination: &str) -> Vec<FoodRecord> {
    vec![FoodRecord {
        name: format!("Traditional {} cuisine", destination),
        description: "Authentic local dishes".to_string(),
        price_range: "Moderate".to_string(),
        restaurant: Some("Local restaurants".to_string()),
    }]
}

pub fn generic_tips() -> Vec<String> {
    GENERIC_TIPS.iter().map(|tip| tip.to_string()).collect()
}

pub fn day_label(day: u32) -> String {
    format!("Day {}", day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_daily_plan_labels() {
        let plan = basic_daily_plan(3);
        let labels: Vec<&str> = plan.labels().collect();
        assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3"]);
        assert_eq!(plan.get("Day 2").unwrap()[0].name, "Explore Day 2 highlights");
    }
}
