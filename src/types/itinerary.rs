use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One scheduled item within a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityRecord {
    /// Short name of the activity (e.g., "Visit the old town")
    pub name: String,
    /// Free-text time-of-day label (e.g., "Morning", "Flexible timing")
    pub time: String,
    /// Longer description of the activity
    pub description: String,
    /// Named places visited during the activity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_places: Vec<String>,
    /// Named food items worth trying nearby
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub food_items: Vec<String>,
    /// Named restaurants close to the activity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby_restaurants: Vec<String>,
    /// Display-only cost range (e.g., "$15-40"); never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

impl ActivityRecord {
    pub fn new(
        name: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            description: description.into(),
            specific_places: Vec::new(),
            food_items: Vec::new(),
            nearby_restaurants: Vec::new(),
            estimated_cost: None,
        }
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.estimated_cost = Some(cost.into());
        self
    }

    pub fn with_places(mut self, places: Vec<String>) -> Self {
        self.specific_places = places;
        self
    }

    pub fn with_food_items(mut self, food_items: Vec<String>) -> Self {
        self.food_items = food_items;
        self
    }

    pub fn with_nearby_restaurants(mut self, restaurants: Vec<String>) -> Self {
        self.nearby_restaurants = restaurants;
        self
    }
}

/// A recommended dish or food experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FoodRecord {
    pub name: String,
    pub description: String,
    /// Display-only price range (e.g., "Moderate", "$3-12")
    pub price_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
}

/// Activities planned for one labelled day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayEntry {
    /// Day label as written (e.g., "Day 1" or "Day 1: Arrival")
    pub label: String,
    pub activities: Vec<ActivityRecord>,
}

/// Ordered mapping from day label to activities.
///
/// Labels are unique and keep the order in which they were first opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DailyPlan {
    days: Vec<DayEntry>,
}

impl DailyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a day for new activities.
    ///
    /// A label seen before keeps its position but its activity list is cleared.
    pub fn open_day(&mut self, label: impl Into<String>) {
        let label = label.into();
        match self.position(&label) {
            Some(index) => self.days[index].activities.clear(),
            None => self.days.push(DayEntry {
                label,
                activities: Vec::new(),
            }),
        }
    }

    /// Append an activity to a day, opening the day if needed.
    pub fn push_activity(&mut self, label: &str, activity: ActivityRecord) {
        let index = match self.position(label) {
            Some(index) => index,
            None => {
                self.days.push(DayEntry {
                    label: label.to_string(),
                    activities: Vec::new(),
                });
                self.days.len() - 1
            }
        };
        self.days[index].activities.push(activity);
    }

    /// Insert a complete day, replacing the activities of an existing label.
    pub fn insert(&mut self, label: impl Into<String>, activities: Vec<ActivityRecord>) {
        let label = label.into();
        match self.position(&label) {
            Some(index) => self.days[index].activities = activities,
            None => self.days.push(DayEntry { label, activities }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[ActivityRecord]> {
        self.position(label)
            .map(|index| self.days[index].activities.as_slice())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|day| day.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayEntry> {
        self.days.iter()
    }

    /// Total number of activities across all days
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|day| day.label == label)
    }
}

impl<'a> IntoIterator for &'a DailyPlan {
    type Item = &'a DayEntry;
    type IntoIter = std::slice::Iter<'a, DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// How an itinerary record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItinerarySource {
    /// Extracted from hosted text generation output
    Generated,
    /// Built deterministically from templates and the landmark table
    Template,
}

/// Structured output of planning for one trip request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryRecord {
    /// Destination as entered by the traveler
    pub destination: String,
    /// Budget tier label (e.g., "Mid-range ($50-$150/day)")
    pub budget: String,
    /// Number of travelers
    pub num_people: u32,
    /// Trip duration in days
    pub num_days: u32,
    /// Interest tags in the order they were selected
    pub interests: Vec<String>,
    /// Day-by-day activities
    pub daily_plan: DailyPlan,
    /// At most five food recommendations
    pub food_recommendations: Vec<FoodRecord>,
    /// At most eight travel tips
    pub travel_tips: Vec<String>,
    /// Display-only total cost range for the whole group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_estimated_cost: Option<String>,
    /// Raw generated text the record was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    pub source: ItinerarySource,
}

impl ItineraryRecord {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a record previously written with [`ItineraryRecord::to_json_pretty`].
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str) -> ActivityRecord {
        ActivityRecord::new(name, "Morning", "test")
    }

    #[test]
    fn test_daily_plan_preserves_first_seen_order() {
        let mut plan = DailyPlan::new();
        plan.open_day("Day 2");
        plan.open_day("Day 1");
        plan.push_activity("Day 2", activity("a"));

        let labels: Vec<&str> = plan.labels().collect();
        assert_eq!(labels, vec!["Day 2", "Day 1"]);
        assert_eq!(plan.get("Day 2").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_activity_count_spans_days() {
        let mut plan = DailyPlan::new();
        plan.push_activity("Day 1", activity("a"));
        plan.push_activity("Day 1", activity("b"));
        plan.push_activity("Day 2", activity("c"));
        plan.open_day("Day 3");

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.activity_count(), 3);
    }

    #[test]
    fn test_record_json() {
        let raw = r#"{
            "destination": "Lisbon",
            "budget": "Budget ($0-$50/day)",
            "num_people": 2,
            "num_days": 1,
            "interests": ["food"],
            "daily_plan": [{"label": "Day 1", "activities": []}],
            "food_recommendations": [],
            "travel_tips": ["Wear good shoes"],
            "source": "template"
        }"#;

        let record = ItineraryRecord::from_json(raw).unwrap();
        assert_eq!(record.daily_plan.labels().collect::<Vec<_>>(), vec!["Day 1"]);
        assert_eq!(record.total_estimated_cost, None);

        let pretty = record.to_json_pretty().unwrap();
        assert!(pretty.contains("\"source\": \"template\""));
        assert!(!pretty.contains("raw_response"));

        let err = ItineraryRecord::from_json("{\"destination\": 3}").unwrap_err();
        assert!(matches!(err, crate::error::PlannerError::Serialization(_)));
    }

    #[test]
    fn test_reopening_day_clears_activities_in_place() {
        let mut plan = DailyPlan::new();
        plan.push_activity("Day 1", activity("a"));
        plan.open_day("Day 2");
        plan.open_day("Day 1");

        let labels: Vec<&str> = plan.labels().collect();
        assert_eq!(labels, vec!["Day 1", "Day 2"]);
        assert!(plan.get("Day 1").unwrap().is_empty());
    }

    #[test]
    fn test_daily_plan_serializes_as_ordered_array() {
        let mut plan = DailyPlan::new();
        plan.insert("Day 1", vec![activity("a").with_cost("$1-2")]);

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value[0]["label"], "Day 1");
        assert_eq!(value[0]["activities"][0]["estimated_cost"], "$1-2");
        assert!(value[0]["activities"][0].get("food_items").is_none());
    }
}
