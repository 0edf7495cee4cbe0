//! The utterance simulator: walks phrases through a grid and totals the
//! selection time under one technique plus an optional predictive strategy.

use crate::error::{ScanForgeError, SfResult};
use crate::grid::Grid;
use crate::metrics::AccuracyCounters;
use crate::prediction::Predictor;
use crate::scanning::Technique;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// How long the prediction context survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ContextScope {
    /// Context accumulates across every utterance of the run.
    #[default]
    Run,
    /// Context is cleared at each utterance boundary.
    Utterance,
}

/// Timing knobs and context policy for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Seconds the scanner dwells on each step.
    pub step_time: f32,
    /// Extra seconds for a sustained press (long-hold completions).
    pub hold_time: f32,
    pub context_scope: ContextScope,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            step_time: 0.5,
            hold_time: 1.0,
            context_scope: ContextScope::Run,
        }
    }
}

impl SimulationParams {
    /// Rejects timings no scanner could realize. The negated comparisons
    /// also reject NaN.
    pub fn validate(&self) -> SfResult<()> {
        if !(self.step_time > 0.0) {
            return Err(ScanForgeError::Config(format!(
                "step_time must be positive, got {}",
                self.step_time
            )));
        }
        if !(self.hold_time >= 0.0) {
            return Err(ScanForgeError::Config(format!(
                "hold_time must be non-negative, got {}",
                self.hold_time
            )));
        }
        Ok(())
    }
}

/// One phrase to produce, split into selection units.
///
/// The normal unit is a single character. Whole-word units exist so that
/// word-completion strategies can be exercised: a word unit is either
/// claimed by the predictor or skipped, it is never spelled implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    units: Vec<String>,
}

impl Utterance {
    /// One unit per character.
    pub fn spelled(text: &str) -> Self {
        Self {
            units: text.chars().map(String::from).collect(),
        }
    }

    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }

    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The concatenated text, mostly for logs.
    pub fn text(&self) -> String {
        self.units.concat()
    }
}

impl From<&str> for Utterance {
    fn from(text: &str) -> Self {
        Self::spelled(text)
    }
}

pub(crate) fn single_char(unit: &str) -> Option<char> {
    let mut chars = unit.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

/// Total selection time in seconds for `utterances` on `grid`.
///
/// Each unit is priced by the predictor first (one accuracy attempt per
/// consultation) and falls back to the technique's scan from cell 0 when
/// no shortcut is offered. Units the layout cannot produce and no strategy
/// claims are skipped outright: no time, no attempt, no context growth.
pub fn simulate(
    grid: &Grid,
    utterances: &[Utterance],
    technique: Technique,
    predictor: Option<&Predictor<'_>>,
    params: &SimulationParams,
    counters: &mut AccuracyCounters,
) -> SfResult<f32> {
    params.validate()?;

    let mut total = 0.0f32;
    let mut context = String::new();

    for utterance in utterances {
        if params.context_scope == ContextScope::Utterance {
            context.clear();
        }
        let before = total;
        for unit in utterance.units() {
            let in_grid = single_char(unit).map(|c| grid.contains(c)).unwrap_or(false);
            let claimed = predictor.map(|p| p.claims(unit)).unwrap_or(false);
            if !in_grid && !claimed {
                continue;
            }

            let mut shortcut = None;
            if let Some(predictor) = predictor {
                shortcut = predictor.offer(grid, &context, unit, params)?;
                counters.record(shortcut.is_some());
            }

            match shortcut {
                Some(cost) => total += cost,
                None => match single_char(unit) {
                    Some(symbol) => {
                        // Every scan starts over from cell 0.
                        total += technique.scan(grid, symbol, 0, params.step_time)?.elapsed;
                    }
                    // A claimed word unit always takes the shortcut.
                    None => continue,
                },
            }
            context.push_str(unit);
        }
        debug!("🗣️  '{}' took {:.2}s", utterance.text(), total - before);
    }

    Ok(total)
}
