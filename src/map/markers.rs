use rand::Rng;
use serde::Serialize;
use tracing::warn;

use super::{
    geocoder::{Coordinates, Geocoder},
    html::escape_html,
};
use crate::types::ItineraryRecord;

/// Map centre used when the destination cannot be geocoded (New York City).
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 12;

const MAX_ACTIVITY_MARKERS: usize = 10;
const MAX_FOOD_MARKERS: usize = 5;
const ACTIVITY_SPREAD: f64 = 0.01;
const FOOD_SPREAD: f64 = 0.015;

const DAY_COLORS: [&str; 10] = [
    "blue",
    "green",
    "purple",
    "orange",
    "darkred",
    "lightred",
    "beige",
    "darkblue",
    "darkgreen",
    "cadetblue",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Destination,
    Activity,
    Food,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinates,
    pub kind: MarkerKind,
    pub tooltip: String,
    /// Pre-escaped HTML shown when the marker is clicked
    pub popup_html: String,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Markers scattered around a destination, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelMap {
    pub title: String,
    pub center: Coordinates,
    pub zoom: u8,
    /// False when [`DEFAULT_CENTER`] stood in for a failed lookup
    pub geocoded: bool,
    pub markers: Vec<MapMarker>,
}

/// Builds illustrative maps for itineraries.
///
/// Activity and food positions are jittered around the destination and carry no
/// geographic meaning.
#[derive(Debug)]
pub struct MapBuilder<G> {
    geocoder: G,
}

impl<G: Geocoder> MapBuilder<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub async fn build<R: Rng>(
        &self,
        destination: &str,
        itinerary: &ItineraryRecord,
        rng: &mut R,
    ) -> TravelMap {
        let located = match self.geocoder.locate(destination).await {
            Ok(found) => found,
            Err(err) => {
                warn!(destination, error = %err, "could not geocode destination");
                None
            }
        };

        let (center, geocoded) = match located {
            Some(center) => (center, true),
            None => {
                warn!(destination, "using default map location");
                (DEFAULT_CENTER, false)
            }
        };

        layout_markers(destination, itinerary, center, geocoded, rng)
    }
}

/// Place markers around a known centre without any network access.
pub fn layout_markers<R: Rng>(
    destination: &str,
    itinerary: &ItineraryRecord,
    center: Coordinates,
    geocoded: bool,
    rng: &mut R,
) -> TravelMap {
    let mut markers = vec![MapMarker {
        position: center,
        kind: MarkerKind::Destination,
        tooltip: destination.to_string(),
        popup_html: format!("<b>{}</b><br>Your destination", escape_html(destination)),
        color: "red",
        icon: "star",
    }];

    let activities = itinerary
        .daily_plan
        .iter()
        .flat_map(|day| day.activities.iter().map(move |activity| (day, activity)))
        .take(MAX_ACTIVITY_MARKERS);

    for (index, (day, activity)) in activities.enumerate() {
        let slot = day_color_slot(&day.label).unwrap_or((index + 1) % DAY_COLORS.len());
        let popup_html = format!(
            "<div style=\"width: 200px;\"><b>{}</b><br><i>{}</i><br><small>{}</small><br><small>Time: {}</small><br><small>Cost: {}</small></div>",
            escape_html(&activity.name),
            escape_html(&day.label),
            escape_html(&activity.description),
            escape_html(&activity.time),
            escape_html(activity.estimated_cost.as_deref().unwrap_or("")),
        );

        markers.push(MapMarker {
            position: jitter(center, ACTIVITY_SPREAD, rng),
            kind: MarkerKind::Activity,
            tooltip: activity.name.clone(),
            popup_html,
            color: DAY_COLORS[slot],
            icon: "info-sign",
        });
    }

    for food in itinerary.food_recommendations.iter().take(MAX_FOOD_MARKERS) {
        let popup_html = format!(
            "<div style=\"width: 180px;\"><b>{}</b><br><small>{}</small><br><small>Price: {}</small><br><small>Location: {}</small></div>",
            escape_html(&food.name),
            escape_html(&food.description),
            escape_html(&food.price_range),
            escape_html(food.restaurant.as_deref().unwrap_or("Various")),
        );

        markers.push(MapMarker {
            position: jitter(center, FOOD_SPREAD, rng),
            kind: MarkerKind::Food,
            tooltip: food.name.clone(),
            popup_html,
            color: "orange",
            icon: "cutlery",
        });
    }

    TravelMap {
        title: destination.to_string(),
        center,
        zoom: DEFAULT_ZOOM,
        geocoded,
        markers,
    }
}

/// The digits of a day label read as one number, reduced modulo the palette size.
///
/// The reduction happens digit by digit, so labels with arbitrarily long digit
/// runs still pick a colour.
fn day_color_slot(label: &str) -> Option<usize> {
    if !label.to_ascii_lowercase().contains("day") {
        return None;
    }
    label
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|digit| digit as usize)
        .fold(None, |slot, digit| {
            Some((slot.unwrap_or(0) * 10 + digit) % DAY_COLORS.len())
        })
}

fn jitter<R: Rng>(center: Coordinates, spread: f64, rng: &mut R) -> Coordinates {
    Coordinates::new(
        center.lat + rng.gen_range(-spread..=spread),
        center.lon + rng.gen_range(-spread..=spread),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityRecord, DailyPlan, FoodRecord, ItinerarySource};
    use rand::{rngs::StdRng, SeedableRng};

    fn itinerary(days: u32, per_day: usize, food: usize) -> ItineraryRecord {
        let mut daily_plan = DailyPlan::new();
        for day in 1..=days {
            let activities = (0..per_day)
                .map(|i| ActivityRecord::new(format!("Stop {i}"), "Morning", "<b>bold</b>"))
                .collect();
            daily_plan.insert(format!("Day {day}"), activities);
        }
        ItineraryRecord {
            destination: "Lima".to_string(),
            budget: "Budget ($0-$50/day)".to_string(),
            num_people: 1,
            num_days: days,
            interests: vec!["food".to_string()],
            daily_plan,
            food_recommendations: (0..food)
                .map(|i| FoodRecord {
                    name: format!("Dish {i}"),
                    description: "tasty".to_string(),
                    price_range: "Moderate".to_string(),
                    restaurant: None,
                })
                .collect(),
            travel_tips: Vec::new(),
            total_estimated_cost: None,
            raw_response: None,
            source: ItinerarySource::Template,
        }
    }

    #[test]
    fn test_marker_counts_are_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        let map = layout_markers("Lima", &itinerary(5, 3, 8), DEFAULT_CENTER, true, &mut rng);

        let count = |kind| map.markers.iter().filter(|m| m.kind == kind).count();
        assert_eq!(count(MarkerKind::Destination), 1);
        assert_eq!(count(MarkerKind::Activity), 10);
        assert_eq!(count(MarkerKind::Food), 5);
    }

    #[test]
    fn test_jitter_stays_within_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let center = Coordinates::new(-12.05, -77.04);
        let map = layout_markers("Lima", &itinerary(3, 2, 2), center, true, &mut rng);

        for marker in &map.markers {
            let spread = match marker.kind {
                MarkerKind::Destination => 0.0,
                MarkerKind::Activity => ACTIVITY_SPREAD,
                MarkerKind::Food => FOOD_SPREAD,
            };
            assert!((marker.position.lat - center.lat).abs() <= spread + 1e-12);
            assert!((marker.position.lon - center.lon).abs() <= spread + 1e-12);
        }
    }

    #[test]
    fn test_day_colors_and_escaping() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = layout_markers("Lima", &itinerary(2, 1, 0), DEFAULT_CENTER, true, &mut rng);

        assert_eq!(map.markers[1].color, "green");
        assert_eq!(map.markers[2].color, "purple");
        assert!(map.markers[1].popup_html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(map.markers[1].popup_html.contains("<i>Day 1</i>"));
    }

    #[test]
    fn test_day_color_slot() {
        assert_eq!(day_color_slot("Day 12: Coast"), Some(2));
        assert_eq!(day_color_slot("Day 7"), Some(7));
        assert_eq!(day_color_slot("Arrival"), None);
        assert_eq!(day_color_slot("Day three"), None);
        assert_eq!(
            day_color_slot("Day 123456789012345678901234567893"),
            Some(3)
        );
    }

    #[test]
    fn test_label_without_digits_uses_position() {
        let mut itinerary = itinerary(0, 0, 0);
        itinerary.daily_plan.insert(
            "Day one",
            vec![ActivityRecord::new("Harbour", "Morning", "boats")],
        );
        let mut rng = StdRng::seed_from_u64(5);

        let map = layout_markers("Lima", &itinerary, DEFAULT_CENTER, true, &mut rng);

        assert_eq!(map.markers[1].color, "green");
    }
}
