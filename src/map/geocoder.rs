use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "travel_planner_app";
const ATTEMPTS: usize = 3;
const RETRY_PAUSE: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + std::fmt::Debug {
    /// `Ok(None)` means the service answered but knows no such place.
    async fn locate(&self, place: &str) -> Result<Option<Coordinates>>;
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Geocoder backed by an OpenStreetMap Nominatim instance.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    retry_pause: Duration,
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            retry_pause: RETRY_PAUSE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry_pause(mut self, retry_pause: Duration) -> Self {
        self.retry_pause = retry_pause;
        self
    }

    async fn search(&self, client: &reqwest::Client, place: &str) -> Result<Option<Coordinates>> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let response = client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Geocoding(format!(
                "geocoding service returned status {}",
                status
            )));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let lat = hit.lat.parse::<f64>();
        let lon = hit.lon.parse::<f64>();
        match (lat, lon) {
            (Ok(lat), Ok(lon)) => Ok(Some(Coordinates::new(lat, lon))),
            _ => Err(PlannerError::Geocoding(format!(
                "unparseable coordinates '{}', '{}'",
                hit.lat, hit.lon
            ))),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, place: &str) -> Result<Option<Coordinates>> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(place, attempt, "geocoding");

            match self.search(&client, place).await {
                Err(PlannerError::Http(err)) if err.is_timeout() && attempt < ATTEMPTS => {
                    warn!(place, attempt, "geocoding timed out, retrying");
                    tokio::time::sleep(self.retry_pause).await;
                }
                Err(PlannerError::Http(err)) if err.is_timeout() => {
                    return Err(PlannerError::Timeout(format!(
                        "geocoding '{}' timed out after {} attempts",
                        place, ATTEMPTS
                    )));
                }
                other => return other,
            }
        }
    }
}
