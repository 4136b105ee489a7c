//! Turns free-form generated itinerary text into a day-keyed plan, food list and tips.
//!
//! The scan is a single pass over the text's lines. A header line moves the scan into
//! the daily, food or tips section, and bullet lines are collected into whichever
//! section is active. Each section that comes up empty is backfilled independently,
//! so extraction always succeeds; [`Provenance`] records which sections were backfilled.

use serde::{Deserialize, Serialize};

use super::fallback;
use crate::types::{ActivityRecord, DailyPlan, FoodRecord, MAX_DAYS};

pub const MAX_FOOD_RECOMMENDATIONS: usize = 5;
pub const MAX_TRAVEL_TIPS: usize = 8;

const DAY_KEYWORDS: [&str; 6] = ["day 1", "day 2", "day 3", "day one", "day two", "day three"];
const FOOD_KEYWORDS: [&str; 4] = ["food", "restaurant", "cuisine", "dining"];
const TIP_KEYWORDS: [&str; 4] = ["tip", "advice", "recommendation", "note"];
const TIME_WORDS: [&str; 5] = ["morning", "afternoon", "evening", "am", "pm"];

const DEFAULT_ACTIVITY_TIME: &str = "Flexible timing";
const DEFAULT_ACTIVITY_DESCRIPTION: &str = "Activity details from AI recommendation";
const DEFAULT_ACTIVITY_COST: &str = "Varies";
const DEFAULT_FOOD_DESCRIPTION: &str = "Local specialty dish";
const DEFAULT_FOOD_PRICE: &str = "Moderate";

/// Whether a section came from the text or from a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionSource {
    Extracted,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub days: SectionSource,
    pub food: SectionSource,
    pub tips: SectionSource,
}

impl Provenance {
    pub fn is_fully_extracted(&self) -> bool {
        self.fallback_sections().is_empty()
    }

    /// Names of the sections that were backfilled, in output order
    pub fn fallback_sections(&self) -> Vec<&'static str> {
        [
            ("daily plan", self.days),
            ("food recommendations", self.food),
            ("travel tips", self.tips),
        ]
        .into_iter()
        .filter(|(_, source)| *source == SectionSource::Fallback)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Output of [`extract`]: every section is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub daily_plan: DailyPlan,
    pub food_recommendations: Vec<FoodRecord>,
    pub travel_tips: Vec<String>,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    None,
    Daily,
    Food,
    Tips,
}

#[derive(Debug, Default)]
struct Scan {
    section: Section,
    current_day: Option<String>,
    daily_plan: DailyPlan,
    food: Vec<FoodRecord>,
    tips: Vec<String>,
}

impl Scan {
    fn consume(mut self, line: &str) -> Self {
        let lower = line.to_ascii_lowercase();

        if contains_any(&lower, &DAY_KEYWORDS) {
            self.daily_plan.open_day(line);
            self.current_day = Some(line.to_string());
            self.section = Section::Daily;
            return self;
        }
        if contains_any(&lower, &FOOD_KEYWORDS) {
            self.section = Section::Food;
            return self;
        }
        if contains_any(&lower, &TIP_KEYWORDS) {
            self.section = Section::Tips;
            return self;
        }
        if !is_bullet(line) || strip_marker(line).is_empty() {
            return self;
        }

        match self.section {
            Section::Daily => {
                if let Some(day) = self.current_day.as_deref() {
                    self.daily_plan.push_activity(day, parse_activity(line));
                }
            }
            Section::Food => self.food.extend(parse_food_item(line)),
            Section::Tips => self.tips.push(strip_marker(line).to_string()),
            Section::None => {}
        }
        self
    }
}

/// Extract a daily plan, food recommendations and travel tips from `text`.
///
/// `day_count` is clamped to `1..=MAX_DAYS` and only matters when no day headers
/// are found.
pub fn extract(text: &str, destination: &str, day_count: u32) -> Extraction {
    let day_count = day_count.clamp(1, MAX_DAYS);

    let scan = text
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Scan::default(), Scan::consume);

    let (daily_plan, days) = if scan.daily_plan.is_empty() {
        (fallback::basic_daily_plan(day_count), SectionSource::Fallback)
    } else {
        (scan.daily_plan, SectionSource::Extracted)
    };

    let (mut food_recommendations, food) = if scan.food.is_empty() {
        (fallback::generic_food(destination), SectionSource::Fallback)
    } else {
        (scan.food, SectionSource::Extracted)
    };
    food_recommendations.truncate(MAX_FOOD_RECOMMENDATIONS);

    let (mut travel_tips, tips) = if scan.tips.is_empty() {
        (fallback::generic_tips(), SectionSource::Fallback)
    } else {
        (scan.tips, SectionSource::Extracted)
    };
    travel_tips.truncate(MAX_TRAVEL_TIPS);

    Extraction {
        daily_plan,
        food_recommendations,
        travel_tips,
        provenance: Provenance { days, food, tips },
    }
}

fn parse_activity(line: &str) -> ActivityRecord {
    let lower = line.to_ascii_lowercase();

    if contains_any(&lower, &TIME_WORDS) {
        if let Some((time, name)) = line.split_once(':') {
            let time = strip_marker(time);
            let name = name.trim();
            if !time.is_empty() && !name.is_empty() {
                return ActivityRecord::new(name, time, DEFAULT_ACTIVITY_DESCRIPTION)
                    .with_cost(DEFAULT_ACTIVITY_COST);
            }
        }
    }

    ActivityRecord::new(
        strip_marker(line),
        DEFAULT_ACTIVITY_TIME,
        DEFAULT_ACTIVITY_DESCRIPTION,
    )
    .with_cost(DEFAULT_ACTIVITY_COST)
}

/// `None` when nothing is left of the dish name once the restaurant is split off.
fn parse_food_item(line: &str) -> Option<FoodRecord> {
    let (name, restaurant) = match split_restaurant(line) {
        Some((name, restaurant)) => (strip_marker(name), Some(restaurant)),
        None => (strip_marker(line), None),
    };
    if name.is_empty() {
        return None;
    }

    Some(FoodRecord {
        name: name.to_string(),
        description: DEFAULT_FOOD_DESCRIPTION.to_string(),
        price_range: DEFAULT_FOOD_PRICE.to_string(),
        restaurant: restaurant
            .map(str::trim)
            .filter(|restaurant| !restaurant.is_empty())
            .map(str::to_string),
    })
}

/// Split `dish @ place` or `dish at place` on the first separator.
fn split_restaurant(line: &str) -> Option<(&str, &str)> {
    if let Some(split) = line.split_once('@') {
        return Some(split);
    }
    // ASCII lowercasing keeps byte offsets aligned with `line`.
    let index = line.to_ascii_lowercase().find(" at ")?;
    Some((&line[..index], &line[index + " at ".len()..]))
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(|c: char| matches!(c, '-' | '•' | '*'))
}

fn strip_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '-' | '•' | '*' | ' '))
        .trim()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("- item"), "item");
        assert_eq!(strip_marker("• item "), "item");
        assert_eq!(strip_marker("*-* item"), "item");
        assert_eq!(strip_marker("-"), "");
    }

    #[test]
    fn test_parse_activity_with_time() {
        let activity = parse_activity("- Afternoon: Boat tour: harbour loop");
        assert_eq!(activity.time, "Afternoon");
        assert_eq!(activity.name, "Boat tour: harbour loop");
    }

    #[test]
    fn test_parse_activity_colon_without_time_word() {
        let activity = parse_activity("- Lunch: tapas bar");
        assert_eq!(activity.time, DEFAULT_ACTIVITY_TIME);
        assert_eq!(activity.name, "Lunch: tapas bar");
    }

    #[test]
    fn test_parse_activity_time_word_without_colon() {
        let activity = parse_activity("* Evening stroll by the river");
        assert_eq!(activity.time, DEFAULT_ACTIVITY_TIME);
        assert_eq!(activity.name, "Evening stroll by the river");
        assert_eq!(activity.estimated_cost.as_deref(), Some("Varies"));
    }

    #[test]
    fn test_split_restaurant_case_insensitive() {
        let food = parse_food_item("- Pastel de nata AT Manteigaria").unwrap();
        assert_eq!(food.name, "Pastel de nata");
        assert_eq!(food.restaurant.as_deref(), Some("Manteigaria"));
    }

    #[test]
    fn test_at_sign_wins_over_word() {
        let food = parse_food_item("- Sardines at lunch @ Casa Sao Miguel").unwrap();
        assert_eq!(food.name, "Sardines at lunch");
        assert_eq!(food.restaurant.as_deref(), Some("Casa Sao Miguel"));
    }

    #[test]
    fn test_parse_activity_empty_time_part() {
        let activity = parse_activity("- : morning");
        assert_eq!(activity.time, DEFAULT_ACTIVITY_TIME);
        assert_eq!(activity.name, ": morning");
    }

    #[test]
    fn test_food_without_dish_name_is_skipped() {
        assert_eq!(parse_food_item("- @"), None);
        assert_eq!(parse_food_item("- @ Cervejaria Ramiro"), None);

        let result = extract("Food\n- @\n-  at Ramiro", "Lisbon", 1);
        assert_eq!(result.provenance.food, SectionSource::Fallback);
        assert_eq!(result.food_recommendations[0].name, "Traditional Lisbon cuisine");
    }

    #[test]
    fn test_day_header_beats_food_keyword() {
        let text = "Day 2 - food crawl\n- Market hall";
        let result = extract(text, "Lisbon", 2);
        assert_eq!(
            result.daily_plan.get("Day 2 - food crawl").unwrap()[0].name,
            "Market hall"
        );
        assert_eq!(result.provenance.food, SectionSource::Fallback);
    }

    #[test]
    fn test_bullets_before_any_header_are_ignored() {
        let result = extract("- stray bullet\n- another", "Oslo", 1);
        assert_eq!(result.provenance.days, SectionSource::Fallback);
        assert_eq!(result.provenance.tips, SectionSource::Fallback);
    }

    #[test]
    fn test_zero_day_count_is_clamped() {
        let result = extract("", "Oslo", 0);
        assert_eq!(result.daily_plan.len(), 1);
    }

    #[test]
    fn test_fallback_sections_listing() {
        let provenance = Provenance {
            days: SectionSource::Extracted,
            food: SectionSource::Fallback,
            tips: SectionSource::Fallback,
        };
        assert_eq!(
            provenance.fallback_sections(),
            vec!["food recommendations", "travel tips"]
        );
        assert!(!provenance.is_fully_extracted());
    }
}
