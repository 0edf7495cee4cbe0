//! Predictive shortcut strategies layered on top of plain scanning.
//!
//! Every strategy answers the same question for each unit of an utterance:
//! given the text produced so far, can it offer the unit at a cheaper cost
//! than scanning the full grid would? A `Some(cost)` answer replaces the
//! scan for that unit; `None` falls back to the configured technique.

pub mod remote;

use crate::error::SfResult;
use crate::grid::Grid;
use crate::scanning::linear_scan;
use crate::simulate::{single_char, SimulationParams};

pub use remote::{
    Granularity, HttpPredictionService, PredictionService, RemotePredictor, ServiceProfile,
    DEFAULT_NUM_PREDICTIONS,
};

/// A fixed bank of prediction cells, scanned before the main grid.
///
/// The bank models dedicated prediction slots on an AAC device: a short
/// strip of cells the scanner visits first. If the target letter sits in
/// slot `i`, selecting it costs `(i + 1) * step_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCellPredictor {
    cells: Vec<char>,
}

impl FixedCellPredictor {
    pub fn new(cells: Vec<char>) -> Self {
        Self { cells }
    }

    /// The conventional bank: the first row of the grid itself.
    pub fn from_first_row(grid: &Grid) -> Self {
        Self::new(grid.row(0).to_vec())
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    fn offer(&self, target: &str, params: &SimulationParams) -> Option<f32> {
        let symbol = single_char(target)?;
        let slot = self.cells.iter().position(|&c| c == symbol)?;
        Some((slot as f32 + 1.0) * params.step_time)
    }
}

/// Letter-to-word completions triggered by holding a cell.
///
/// Holding the trigger letter instead of tapping it commits the whole
/// mapped word: the cost is a normal linear scan to the letter plus the
/// configured hold surcharge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongHoldPredictor {
    completions: Vec<(char, String)>,
}

impl LongHoldPredictor {
    pub fn new<I>(completions: I) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        Self {
            completions: completions.into_iter().collect(),
        }
    }

    fn trigger_for(&self, word: &str) -> Option<char> {
        self.completions
            .iter()
            .find(|(_, completion)| completion == word)
            .map(|&(trigger, _)| trigger)
    }

    fn offer(&self, grid: &Grid, target: &str, params: &SimulationParams) -> SfResult<Option<f32>> {
        let trigger = match self.trigger_for(target) {
            Some(trigger) => trigger,
            None => return Ok(None),
        };
        let scan = linear_scan(grid, trigger, 0, params.step_time)?;
        Ok(Some(scan.elapsed + params.hold_time))
    }

    fn claims(&self, unit: &str) -> bool {
        self.trigger_for(unit).is_some()
    }
}

/// Which strategy, if any, runs ahead of the scanning technique.
///
/// A simulation either scans plainly (`None` predictor) or carries exactly
/// one of these variants.
#[derive(Debug)]
pub enum Predictor<'a> {
    FixedCell(FixedCellPredictor),
    LongHold(LongHoldPredictor),
    Remote(RemotePredictor<'a>),
}

impl Predictor<'_> {
    /// Price the unit through this strategy, or `None` to fall back to scanning.
    pub fn offer(
        &self,
        grid: &Grid,
        context: &str,
        target: &str,
        params: &SimulationParams,
    ) -> SfResult<Option<f32>> {
        match self {
            Predictor::FixedCell(bank) => Ok(bank.offer(target, params)),
            Predictor::LongHold(completions) => completions.offer(grid, target, params),
            Predictor::Remote(remote) => remote.offer(context, target, params),
        }
    }

    /// Whether the strategy can produce `unit` even though the grid cannot.
    ///
    /// Units that neither the grid nor the active strategy can produce are
    /// skipped by the simulator; long-hold word completions are the one
    /// case where a multi-character unit is still reachable.
    pub fn claims(&self, unit: &str) -> bool {
        match self {
            Predictor::LongHold(completions) => completions.claims(unit),
            Predictor::FixedCell(_) | Predictor::Remote(_) => false,
        }
    }
}
