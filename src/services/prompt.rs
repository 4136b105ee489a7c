use crate::{
    knowledge::title_case,
    types::{BudgetTier, TripRequest},
};

/// Readable per-person daily range for a budget tier
pub fn parse_budget_range(budget: BudgetTier) -> &'static str {
    match budget {
        BudgetTier::Budget => "$0-50 per day",
        BudgetTier::MidRange => "$50-150 per day",
        BudgetTier::Luxury => "$150+ per day",
    }
}

/// Display name for an interest code; unknown codes are title-cased
pub fn interest_display_name(interest: &str) -> String {
    let known = match interest {
        "food" => "Food & Dining",
        "beaches" => "Beaches",
        "museums" => "Museums",
        "nightlife" => "Nightlife",
        "adventure" => "Adventure Activities",
        "shopping" => "Shopping",
        "nature" => "Nature & Parks",
        "culture" => "History & Culture",
        "architecture" => "Architecture",
        "photography" => "Photography",
        other => return title_case(other),
    };
    known.to_string()
}

/// Join interests as natural English: `A`, `A and B`, `A, B, and C`
pub fn format_interests(interests: &[String]) -> String {
    let names: Vec<String> = interests
        .iter()
        .map(|interest| interest_display_name(interest))
        .collect();

    match names.as_slice() {
        [] => "general sightseeing".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Build the instruction prompt sent to the text generation model
pub fn create_prompt(request: &TripRequest) -> String {
    let budget_range = parse_budget_range(request.budget);
    let interests_text = format_interests(&request.interests);

    format!(
        "Create a detailed {days}-day travel itinerary for {destination} for {people} people with a {budget} budget.\n\n\
Traveler interests: {interests}\n\n\
Please provide:\n\
1. Day-by-day itinerary with specific places to visit\n\
2. Recommended local food and restaurants\n\
3. Estimated costs for activities\n\
4. Travel tips specific to {destination}\n\
5. Best times to visit each location\n\n\
Format the response as a structured plan with clear daily schedules, including:\n\
- Morning, afternoon, and evening activities\n\
- Specific restaurant recommendations with cuisine types\n\
- Estimated costs per person\n\
- Transportation suggestions between locations\n\
- Cultural etiquette tips\n\n\
Budget range: {range} per person per day\n\
Duration: {days} days\n\
Group size: {people} people\n\
Destination: {destination}\n",
        days = request.num_days,
        destination = request.destination,
        people = request.num_people,
        budget = request.budget.label(),
        interests = interests_text,
        range = budget_range,
    )
}
