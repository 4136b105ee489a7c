pub mod itinerary;
pub mod request;

pub use itinerary::{
    ActivityRecord, DailyPlan, DayEntry, FoodRecord, ItineraryRecord, ItinerarySource,
};
pub use request::{BudgetTier, TripRequest, MAX_DAYS, MAX_PEOPLE};
