pub mod cost;
pub mod extractor;
pub mod fallback;
pub mod planner;
pub mod template;

pub use cost::{daily_estimate, estimate_trip_cost};
pub use extractor::{extract, Extraction, Provenance, SectionSource};
pub use planner::{NoticeLevel, PlanOutcome, PlannerNotice, TravelPlanner};
pub use template::{build_template, TemplateItinerary, TimeOfDay};
