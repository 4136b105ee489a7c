//! Plain-text presentation of an itinerary for the terminal

use std::fmt;

use crate::{
    knowledge::Landmark,
    types::{ActivityRecord, ItineraryRecord},
};

const RULE: &str = "----------------------------------------";

/// Display adapter over an itinerary and the landmarks of its destination.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryView<'a> {
    pub record: &'a ItineraryRecord,
    pub landmarks: &'a [Landmark],
}

/// Render the itinerary, famous places, trip summary and travel tips.
pub fn render_itinerary(record: &ItineraryRecord, landmarks: &[Landmark]) -> String {
    ItineraryView { record, landmarks }.to_string()
}

impl fmt::Display for ItineraryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_daily_plan(f)?;
        self.fmt_landmarks(f)?;
        self.fmt_summary(f)?;
        self.fmt_tips(f)
    }
}

impl ItineraryView<'_> {
    fn fmt_daily_plan(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Your Personalized Itinerary ==")?;
        for day in &self.record.daily_plan {
            writeln!(f)?;
            writeln!(f, "{}", day.label)?;
            for activity in &day.activities {
                fmt_activity(f, activity)?;
            }
        }

        if !self.record.food_recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Food Recommendations")?;
            for food in &self.record.food_recommendations {
                write!(f, "  * {}: {} ({})", food.name, food.description, food.price_range)?;
                match &food.restaurant {
                    Some(restaurant) => writeln!(f, " at {}", restaurant)?,
                    None => writeln!(f)?,
                }
            }
        }
        Ok(())
    }

    fn fmt_landmarks(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.landmarks.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "== Famous Places & Their Specialties ==")?;
        writeln!(
            f,
            "Here are the most famous places to visit in {} and their signature foods:",
            self.record.destination
        )?;
        for landmark in self.landmarks {
            writeln!(f)?;
            writeln!(f, "{} [{}]", landmark.name, landmark.kind)?;
            writeln!(f, "  {}", landmark.description)?;
            fmt_list(f, "Famous Foods to Try", &landmark.famous_foods)?;
            fmt_list(f, "Where to Find Them", &landmark.nearby_food_spots)?;
        }
        Ok(())
    }

    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f)?;
        writeln!(f, "== Trip Summary ==")?;
        writeln!(f, "Destination: {}", record.destination)?;
        writeln!(f, "Duration: {} days", record.num_days)?;
        writeln!(f, "Travelers: {} people", record.num_people)?;
        writeln!(f, "Budget Range: {}", record.budget)?;
        if let Some(cost) = &record.total_estimated_cost {
            writeln!(f, "Estimated Total Cost: {}", cost)?;
        }
        if !record.interests.is_empty() {
            writeln!(f, "Interests: {}", record.interests.join(", "))?;
        }
        Ok(())
    }

    fn fmt_tips(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.record.travel_tips.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "== Travel Tips ==")?;
        for tip in &self.record.travel_tips {
            writeln!(f, "  * {}", tip)?;
        }
        Ok(())
    }
}

fn fmt_activity(f: &mut fmt::Formatter<'_>, activity: &ActivityRecord) -> fmt::Result {
    writeln!(f, "  {}", activity.name)?;
    writeln!(f, "    Time: {}", activity.time)?;
    writeln!(f, "    Description: {}", activity.description)?;
    fmt_nested_list(f, "Places to Visit", &activity.specific_places)?;
    fmt_nested_list(f, "Famous Food to Try", &activity.food_items)?;
    fmt_nested_list(f, "Recommended Restaurants", &activity.nearby_restaurants)?;
    if let Some(cost) = &activity.estimated_cost {
        writeln!(f, "    Estimated cost: {}", cost)?;
    }
    writeln!(f, "  {}", RULE)
}

fn fmt_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "  {}:", title)?;
    for item in items {
        writeln!(f, "    * {}", item)?;
    }
    Ok(())
}

fn fmt_nested_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "    {}:", title)?;
    for item in items {
        writeln!(f, "      * {}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::TravelPlanner, knowledge::landmarks_for, types::TripRequest};

    #[test]
    fn test_render_template_itinerary() {
        let request = TripRequest::new("Paris")
            .with_days(2)
            .with_interests(["food", "history"]);
        let record = TravelPlanner::new().template_itinerary(&request);
        let landmarks = landmarks_for("Paris");

        let text = render_itinerary(&record, &landmarks);

        assert!(text.starts_with("== Your Personalized Itinerary =="));
        assert!(text.contains("Day 1"));
        assert!(text.contains("Day 2"));
        assert!(text.contains("Eiffel Tower"));
        assert!(text.contains("Estimated Total Cost: $400 - $480"));
        assert!(text.contains("Interests: food, history"));
        assert!(text.contains("== Travel Tips =="));
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let request = TripRequest::new("Oslo").with_interests(["nature"]);
        let mut record = TravelPlanner::new().template_itinerary(&request);
        record.total_estimated_cost = None;
        record.travel_tips.clear();

        let text = render_itinerary(&record, &[]);

        assert!(!text.contains("Estimated Total Cost"));
        assert!(!text.contains("Famous Places"));
        assert!(!text.contains("Travel Tips"));
    }
}
