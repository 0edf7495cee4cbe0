/// Prediction bookkeeping for one or more simulation runs.
///
/// A counters value is owned by the caller and threaded `&mut` through
/// `simulate`, so separate runs (and parallel tests) never share state.
/// One attempt is recorded per retained unit whenever a predictive strategy
/// is consulted; the attempt is correct iff the strategy produced a shortcut.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyCounters {
    pub total_predictions: u64,
    pub correct_predictions: u64,
}

impl AccuracyCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        self.total_predictions += 1;
        if correct {
            self.correct_predictions += 1;
        }
    }

    /// Accuracy in percent, or `None` when nothing was predicted yet.
    pub fn accuracy(&self) -> Option<f32> {
        if self.total_predictions == 0 {
            return None;
        }
        Some(self.correct_predictions as f32 / self.total_predictions as f32 * 100.0)
    }

    /// The line a battery report ends with, zero-attempt wording included.
    pub fn summary(&self) -> String {
        match self.accuracy() {
            Some(pct) => format!(
                "Prediction Accuracy: {}/{} ({:.2}%)",
                self.correct_predictions, self.total_predictions, pct
            ),
            None => "No predictions were made.".to_string(),
        }
    }
}
