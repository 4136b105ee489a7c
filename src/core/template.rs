//! Deterministic itinerary built from templates and the landmark table, used
//! whenever hosted generation is unavailable.

use crate::{
    knowledge::Landmark,
    types::{ActivityRecord, BudgetTier, DailyPlan, FoodRecord, TripRequest},
};

use super::{extractor::MAX_TRAVEL_TIPS, fallback::day_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateItinerary {
    pub daily_plan: DailyPlan,
    pub food_recommendations: Vec<FoodRecord>,
    pub travel_tips: Vec<String>,
}

pub fn build_template(request: &TripRequest, landmarks: &[Landmark]) -> TemplateItinerary {
    let mut daily_plan = DailyPlan::new();
    for day in 1..=request.num_days {
        daily_plan.insert(day_label(day), day_activities(request, landmarks, day));
    }

    TemplateItinerary {
        daily_plan,
        food_recommendations: destination_food(&request.destination),
        travel_tips: destination_tips(request),
    }
}

fn day_activities(request: &TripRequest, landmarks: &[Landmark], day: u32) -> Vec<ActivityRecord> {
    let destination = request.destination.as_str();

    if day == 1 {
        let arrival = ActivityRecord::new(
            format!("Arrival in {}", destination),
            "Morning",
            "Check into accommodation and get oriented with the city center",
        )
        .with_cost("$20-50");

        let second = match landmarks.first() {
            Some(landmark) => ActivityRecord::new(
                format!("Visit {}", landmark.name),
                "Afternoon",
                format!("{} - {}", landmark.description, landmark.kind),
            )
            .with_places(vec![landmark.name.clone()])
            .with_food_items(landmark.famous_foods.clone())
            .with_nearby_restaurants(landmark.nearby_food_spots.clone())
            .with_cost("$15-40"),
            None => ActivityRecord::new(
                format!("{} City Walking Tour", destination),
                "Afternoon",
                "Explore main streets, landmarks, and get your bearings",
            )
            .with_cost("$0-30"),
        };
        return vec![arrival, second];
    }

    if day == request.num_days {
        return vec![
            ActivityRecord::new(
                "Last-minute Shopping & Souvenirs",
                "Morning",
                "Visit local markets or shops for gifts and mementos",
            )
            .with_cost("$30-100"),
            ActivityRecord::new(
                "Departure Preparations",
                "Afternoon",
                "Check out, travel to airport/station",
            )
            .with_cost("$20-50"),
        ];
    }

    let morning = match landmarks.get(day as usize - 1) {
        Some(landmark) => ActivityRecord::new(
            format!("Explore {}", landmark.name),
            "Morning",
            format!(
                "{} - Experience this {} and discover its cultural significance.",
                landmark.description,
                landmark.kind.to_lowercase()
            ),
        )
        .with_places(vec![landmark.name.clone()])
        .with_food_items(landmark.famous_foods.clone())
        .with_nearby_restaurants(landmark.nearby_food_spots.clone())
        .with_cost("$20-60"),
        None => interest_activity(request, TimeOfDay::Morning),
    };

    vec![
        morning,
        interest_activity(request, TimeOfDay::Afternoon),
        interest_activity(request, TimeOfDay::Evening),
    ]
}

/// Generic activity for a time slot, nudged by the traveler's interests.
pub fn interest_activity(request: &TripRequest, slot: TimeOfDay) -> ActivityRecord {
    let destination = request.destination.as_str();

    let (name, description, place, food) = match slot {
        TimeOfDay::Morning if request.has_interest("museums") => (
            format!("{} Museum District", destination),
            "Explore local museums and cultural sites".to_string(),
            "Museum District",
            "Museum cafe classics",
        ),
        TimeOfDay::Morning if request.has_interest("nature") => (
            format!("{} Parks and Gardens", destination),
            "Enjoy outdoor spaces and natural attractions".to_string(),
            "Parks and Gardens",
            "Picnic provisions from local markets",
        ),
        TimeOfDay::Morning => (
            format!("{} Historic Landmarks Tour", destination),
            format!(
                "Visit the most iconic landmarks and monuments in {}.",
                destination
            ),
            "Historic City Center",
            "Traditional breakfast items",
        ),
        TimeOfDay::Afternoon => (
            format!("{} Cultural Districts & Neighborhoods", destination),
            format!(
                "Explore diverse neighborhoods that showcase the cultural heart of {}.",
                destination
            ),
            "Artist Quarters",
            "Neighborhood specialties",
        ),
        TimeOfDay::Evening => (
            format!("{} Entertainment & Nightlife", destination),
            format!("Experience the vibrant evening scene of {}.", destination),
            "Entertainment Districts",
            "Evening dining specialties",
        ),
    };

    ActivityRecord::new(name, slot.label(), description)
        .with_places(vec![place.to_string()])
        .with_food_items(vec![food.to_string()])
        .with_cost("$25-70")
}

fn destination_food(destination: &str) -> Vec<FoodRecord> {
    vec![
        FoodRecord {
            name: format!("Traditional {} Breakfast Experience", destination),
            description: format!("Start your day with an authentic {} breakfast.", destination),
            price_range: "$8-18".to_string(),
            restaurant: Some("Traditional breakfast cafes".to_string()),
        },
        FoodRecord {
            name: format!("{} Street Food Adventure", destination),
            description: format!("Dive into the vibrant street food scene of {}.", destination),
            price_range: "$3-12".to_string(),
            restaurant: Some("Street vendors".to_string()),
        },
    ]
}

fn destination_tips(request: &TripRequest) -> Vec<String> {
    let destination = request.destination.as_str();
    let mut tips = vec![
        format!(
            "Research {}'s local customs and etiquette before your trip",
            destination
        ),
        format!(
            "Check the weather forecast for {} and pack accordingly",
            destination
        ),
        "Download offline maps and translation apps for easier navigation".to_string(),
        "Keep digital and physical copies of important documents".to_string(),
        "Inform your bank about travel plans to avoid card blocks".to_string(),
    ];

    if request.num_people > 2 {
        tips.push("Book group activities and restaurant reservations in advance".to_string());
        tips.push("Designate a group leader for each day to help coordinate activities".to_string());
    }

    let tier_tips: &[&str] = match request.budget {
        BudgetTier::Budget => &[
            "Look for free walking tours and public spaces",
            "Shop at local markets for affordable meals and snacks",
            "Use public transportation instead of taxis when possible",
        ],
        BudgetTier::Luxury => &[
            "Book premium experiences and skip-the-line tickets",
            "Consider hiring private guides for personalized experiences",
            "Make reservations at high-end restaurants well in advance",
        ],
        BudgetTier::MidRange => &[],
    };
    tips.extend(tier_tips.iter().map(|tip| tip.to_string()));

    tips.truncate(MAX_TRAVEL_TIPS);
    tips
}
