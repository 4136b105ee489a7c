//! trip-planner-rs: personalized travel itineraries from free-form model output
//!
//! The planner asks a hosted text-generation model for an itinerary, extracts a
//! day-by-day plan, food recommendations and travel tips from whatever text comes
//! back, and falls back to a landmark-based template whenever generation fails.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{BudgetTier, TravelPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TravelPlanner::from_env();
//!     let request = TripRequest::new("Lisbon")
//!         .with_budget(BudgetTier::Budget)
//!         .with_days(4)
//!         .with_interests(["food", "history"]);
//!
//!     let outcome = planner.generate_itinerary(&request).await?;
//!     println!("{}", serde_json::to_string_pretty(&outcome.itinerary)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod knowledge;
pub mod map;
pub mod render;
pub mod services;
pub mod types;

pub use core::{
    extract, Extraction, NoticeLevel, PlanOutcome, PlannerNotice, Provenance, SectionSource,
    TravelPlanner,
};
pub use error::{PlannerError, Result};
pub use knowledge::{landmarks_for, Landmark};
pub use map::{MapBuilder, NominatimGeocoder, TravelMap};
pub use render::render_itinerary;
pub use services::{InferenceClient, TextGenerator};
pub use types::{
    ActivityRecord, BudgetTier, DailyPlan, FoodRecord, ItineraryRecord, ItinerarySource,
    TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
