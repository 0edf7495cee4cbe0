//! Remote prediction services and the strategy that consults them.

use crate::error::{ScanForgeError, SfResult};
use crate::simulate::SimulationParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// How long a single prediction request may take before it fails.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Candidates requested per query unless the caller says otherwise.
pub const DEFAULT_NUM_PREDICTIONS: usize = 5;

/// What kind of unit the remote service is asked to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    Letter,
    Word,
}

/// Known remote services, each with its own endpoint and request shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceProfile {
    Ppm,
    Imagineville,
}

impl ServiceProfile {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServiceProfile::Ppm => "https://ppmpredictor.openassistive.org/predict",
            ServiceProfile::Imagineville => "https://api.imagineville.org/predict",
        }
    }
}

#[derive(Debug, Serialize)]
struct PpmRequest<'a> {
    input: &'a str,
    level: String,
    #[serde(rename = "numPredictions")]
    num_predictions: usize,
}

#[derive(Debug, Serialize)]
struct ImaginevilleRequest<'a> {
    context: &'a str,
    max_predictions: usize,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    predictions: Vec<String>,
}

/// Anything that can turn typed-so-far context into ranked candidates.
///
/// The simulator depends on this trait, never on the HTTP client directly;
/// tests substitute canned implementations.
pub trait PredictionService {
    fn predict(
        &self,
        context: &str,
        granularity: Granularity,
        num_predictions: usize,
    ) -> SfResult<Vec<String>>;
}

/// Blocking HTTP client for a [`ServiceProfile`].
pub struct HttpPredictionService {
    profile: ServiceProfile,
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPredictionService {
    pub fn new(profile: ServiceProfile) -> SfResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            profile,
            endpoint: profile.endpoint().to_string(),
            client,
        })
    }

    /// Point the client somewhere other than the profile default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(
        &self,
        context: &str,
        granularity: Granularity,
        num_predictions: usize,
    ) -> SfResult<Vec<String>> {
        // Both services reject an empty context field.
        let context = if context.is_empty() { " " } else { context };
        debug!(
            "🌐 Querying {} for {} {} candidates",
            self.profile, num_predictions, granularity
        );
        let request = self.client.post(&self.endpoint);
        let response = match self.profile {
            ServiceProfile::Ppm => request
                .json(&PpmRequest {
                    input: context,
                    level: granularity.to_string(),
                    num_predictions,
                })
                .send()?,
            ServiceProfile::Imagineville => request
                .json(&ImaginevilleRequest {
                    context,
                    max_predictions: num_predictions,
                })
                .send()?,
        };
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ScanForgeError::Service { status, body });
        }
        let body = response.text()?;
        let parsed: PredictionResponse = serde_json::from_str(&body)?;
        Ok(parsed.predictions)
    }
}

/// Strategy that asks a [`PredictionService`] before every unit.
///
/// A unit found at slot `i` of the candidate list costs
/// `(i + 1) * step_time`, as if the candidates were a scanned strip in
/// front of the grid. A miss falls back to the plain technique.
pub struct RemotePredictor<'a> {
    service: &'a dyn PredictionService,
    granularity: Granularity,
    num_predictions: usize,
}

impl<'a> RemotePredictor<'a> {
    pub fn new(
        service: &'a dyn PredictionService,
        granularity: Granularity,
        num_predictions: usize,
    ) -> Self {
        Self {
            service,
            granularity,
            num_predictions,
        }
    }

    pub(crate) fn offer(
        &self,
        context: &str,
        target: &str,
        params: &SimulationParams,
    ) -> SfResult<Option<f32>> {
        let candidates = self
            .service
            .predict(context, self.granularity, self.num_predictions)?;
        let hit = candidates
            .iter()
            .position(|candidate| candidate.as_str() == target);
        Ok(hit.map(|slot| (slot as f32 + 1.0) * params.step_time))
    }
}

impl fmt::Debug for RemotePredictor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemotePredictor")
            .field("granularity", &self.granularity)
            .field("num_predictions", &self.num_predictions)
            .finish_non_exhaustive()
    }
}
