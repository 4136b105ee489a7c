use std::{fmt, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::{cost::estimate_trip_cost, extractor, template};
use crate::{
    error::{PlannerError, Result},
    knowledge::landmarks_for,
    services::{
        inference::{InferenceClient, TextGenerator},
        prompt::create_prompt,
    },
    types::{ItineraryRecord, ItinerarySource, TripRequest},
};

/// Generated text shorter than this (after trimming) is treated as unusable.
const MIN_GENERATED_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-facing message about how the itinerary was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl PlannerNotice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for PlannerNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", prefix, self.message)
    }
}

/// Result of one planning request
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub itinerary: ItineraryRecord,
    pub notices: Vec<PlannerNotice>,
}

impl PlanOutcome {
    pub fn is_generated(&self) -> bool {
        self.itinerary.source == ItinerarySource::Generated
    }
}

/// Orchestrates hosted generation, extraction and the template fallback.
#[derive(Debug, Clone, Default)]
pub struct TravelPlanner {
    generator: Option<Arc<dyn TextGenerator>>,
    inference: Option<InferenceClient>,
}

impl TravelPlanner {
    /// Planner that always uses templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner backed by the hosted inference API
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            generator: None,
            inference: Some(InferenceClient::new(api_key)),
        }
    }

    /// Planner backed by any text generator, e.g. a local model or a test double
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            inference: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        if let Some(client) = self.inference.as_mut() {
            client.set_model(model);
        }
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        if let Some(client) = self.inference.as_mut() {
            client.set_base_url(base_url);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if let Some(client) = self.inference.as_mut() {
            client.set_timeout(timeout);
        }
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        if let Some(client) = self.inference.as_mut() {
            client.set_max_retries(max_retries);
        }
        self
    }

    /// Read `HUGGING_FACE_API_KEY`, `HF_API_BASE_URL` and `HF_MODEL`.
    ///
    /// A missing or blank key yields a template-only planner.
    pub fn from_env() -> Self {
        let api_key = std::env::var("HUGGING_FACE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let Some(api_key) = api_key else {
            return Self::new();
        };

        let mut planner = Self::with_api_key(api_key);
        if let Ok(base_url) = std::env::var("HF_API_BASE_URL") {
            planner = planner.with_base_url(base_url);
        }
        if let Ok(model) = std::env::var("HF_MODEL") {
            planner = planner.with_model(model);
        }
        planner
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some() || self.inference.is_some()
    }

    fn active_generator(&self) -> Option<&dyn TextGenerator> {
        match (&self.generator, &self.inference) {
            (Some(generator), _) => Some(generator.as_ref()),
            (None, Some(client)) => Some(client),
            (None, None) => None,
        }
    }

    /// Produce an itinerary for `request`.
    ///
    /// Only an invalid request is an error; every generation failure falls back to
    /// the template path and is reported as a notice.
    pub async fn generate_itinerary(&self, request: &TripRequest) -> Result<PlanOutcome> {
        request.validate()?;

        let mut notices = Vec::new();

        if let Some(generator) = self.active_generator() {
            if let Some(client) = &self.inference {
                debug!(model = client.model(), "requesting hosted itinerary");
            }
            match self.try_generation(generator, request, &mut notices).await {
                Some(itinerary) => return Ok(PlanOutcome { itinerary, notices }),
                None => info!(destination = %request.destination, "falling back to template itinerary"),
            }
        } else {
            info!("no text generator configured");
        }

        notices.push(PlannerNotice::new(
            NoticeLevel::Info,
            "Using template-based itinerary generation...",
        ));
        Ok(PlanOutcome {
            itinerary: self.template_itinerary(request),
            notices,
        })
    }

    async fn try_generation(
        &self,
        generator: &dyn TextGenerator,
        request: &TripRequest,
        notices: &mut Vec<PlannerNotice>,
    ) -> Option<ItineraryRecord> {
        let prompt = create_prompt(request);

        let text = match generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                let notice = generation_failure_notice(&err);
                match notice.level {
                    NoticeLevel::Error => error!(error = %err, "text generation failed"),
                    _ => warn!(error = %err, "text generation failed"),
                }
                notices.push(notice);
                return None;
            }
        };

        if text.trim().chars().count() <= MIN_GENERATED_CHARS {
            warn!(chars = text.trim().chars().count(), "generated text too short to use");
            notices.push(PlannerNotice::new(
                NoticeLevel::Warning,
                "AI response was too short to build an itinerary. Using template generation.",
            ));
            return None;
        }

        Some(self.generated_itinerary(request, text, notices))
    }

    fn generated_itinerary(
        &self,
        request: &TripRequest,
        text: String,
        notices: &mut Vec<PlannerNotice>,
    ) -> ItineraryRecord {
        let extraction = extractor::extract(&text, &request.destination, request.num_days);
        info!(
            days = extraction.daily_plan.len(),
            activities = extraction.daily_plan.activity_count(),
            "extracted generated itinerary"
        );

        let backfilled = extraction.provenance.fallback_sections();
        if !backfilled.is_empty() {
            info!(sections = ?backfilled, "backfilled sections missing from generated text");
            notices.push(PlannerNotice::new(
                NoticeLevel::Info,
                format!(
                    "Some sections were not found in the AI response and use general suggestions: {}",
                    backfilled.join(", ")
                ),
            ));
        }

        ItineraryRecord {
            destination: request.destination.clone(),
            budget: request.budget.label().to_string(),
            num_people: request.num_people,
            num_days: request.num_days,
            interests: request.interests.clone(),
            daily_plan: extraction.daily_plan,
            food_recommendations: extraction.food_recommendations,
            travel_tips: extraction.travel_tips,
            total_estimated_cost: Some(estimate_trip_cost(
                request.budget,
                request.num_people,
                request.num_days,
            )),
            raw_response: Some(text),
            source: ItinerarySource::Generated,
        }
    }

    /// Deterministic itinerary that needs no network access
    pub fn template_itinerary(&self, request: &TripRequest) -> ItineraryRecord {
        let landmarks = landmarks_for(&request.destination);
        let built = template::build_template(request, &landmarks);

        ItineraryRecord {
            destination: request.destination.clone(),
            budget: request.budget.label().to_string(),
            num_people: request.num_people,
            num_days: request.num_days,
            interests: request.interests.clone(),
            daily_plan: built.daily_plan,
            food_recommendations: built.food_recommendations,
            travel_tips: built.travel_tips,
            total_estimated_cost: Some(estimate_trip_cost(
                request.budget,
                request.num_people,
                request.num_days,
            )),
            raw_response: None,
            source: ItinerarySource::Template,
        }
    }
}

fn generation_failure_notice(err: &PlannerError) -> PlannerNotice {
    match err {
        PlannerError::Unauthorized => PlannerNotice::new(
            NoticeLevel::Error,
            "Invalid Hugging Face API key. Please check your configuration.",
        ),
        PlannerError::ModelLoading => PlannerNotice::new(
            NoticeLevel::Warning,
            "AI model is loading. Using template generation for now.",
        ),
        PlannerError::Api { status, .. } => PlannerNotice::new(
            NoticeLevel::Warning,
            format!("API returned status {}. Using template generation.", status),
        ),
        PlannerError::Http(_) | PlannerError::Timeout(_) => PlannerNotice::new(
            NoticeLevel::Warning,
            format!("Network error: {}. Using template generation.", err),
        ),
        other => PlannerNotice::new(
            NoticeLevel::Warning,
            format!("API error: {}. Using template generation.", other),
        ),
    }
}
