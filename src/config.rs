use crate::error::{ScanForgeError, SfResult};
use crate::prediction::{Granularity, ServiceProfile, DEFAULT_NUM_PREDICTIONS};
use crate::simulate::{ContextScope, SimulationParams};
use clap::Args;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct TimingOptions {
    /// Seconds the scanner dwells on each step
    #[arg(long, default_value_t = 0.5)]
    pub step_time: f32,

    /// Extra seconds for a sustained press (long-hold completions)
    #[arg(long, default_value_t = 1.0)]
    pub hold_time: f32,

    /// Clear the prediction context at each utterance boundary
    #[arg(long, default_value_t = false)]
    pub utterance_context: bool,
}

impl TimingOptions {
    pub fn to_params(&self) -> SimulationParams {
        let context_scope = if self.utterance_context {
            ContextScope::Utterance
        } else {
            ContextScope::Run
        };
        SimulationParams {
            step_time: self.step_time,
            hold_time: self.hold_time,
            context_scope,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServiceOptions {
    /// Remote prediction service to include in the battery (ppm | imagineville)
    #[arg(long)]
    pub service: Option<String>,

    /// Unit the remote service completes (letter | word)
    #[arg(long, default_value = "letter")]
    pub granularity: String,

    /// Candidates requested per query
    #[arg(long, default_value_t = DEFAULT_NUM_PREDICTIONS)]
    pub num_predictions: usize,

    /// Override the service endpoint, mostly for testing
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl ServiceOptions {
    pub fn profile(&self) -> SfResult<Option<ServiceProfile>> {
        match &self.service {
            None => Ok(None),
            Some(name) => ServiceProfile::from_str(name).map(Some).map_err(|_| {
                ScanForgeError::Config(format!(
                    "invalid prediction service '{}', choose 'ppm' or 'imagineville'",
                    name
                ))
            }),
        }
    }

    pub fn granularity(&self) -> SfResult<Granularity> {
        Granularity::from_str(&self.granularity).map_err(|_| {
            ScanForgeError::Config(format!(
                "invalid granularity '{}', choose 'letter' or 'word'",
                self.granularity
            ))
        })
    }
}
