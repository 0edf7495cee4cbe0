use rstest::rstest;
use scanforge::error::{ScanForgeError, SfResult};
use scanforge::grid::Grid;
use scanforge::prediction::{
    FixedCellPredictor, Granularity, LongHoldPredictor, PredictionService, Predictor,
    RemotePredictor, DEFAULT_NUM_PREDICTIONS,
};
use scanforge::simulate::SimulationParams;

fn abc() -> Grid {
    Grid::alphabetical(5, 6).unwrap()
}

fn params() -> SimulationParams {
    SimulationParams::default() // step 0.5, hold 1.0
}

/// Serves a fixed candidate list, honoring the requested limit.
struct CannedService {
    candidates: Vec<String>,
}

impl CannedService {
    fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PredictionService for CannedService {
    fn predict(
        &self,
        _context: &str,
        _granularity: Granularity,
        num_predictions: usize,
    ) -> SfResult<Vec<String>> {
        Ok(self
            .candidates
            .iter()
            .take(num_predictions)
            .cloned()
            .collect())
    }
}

// --- FIXED-CELL TESTS ---

#[test]
fn test_bank_is_the_first_row() {
    let bank = FixedCellPredictor::from_first_row(&abc());
    assert_eq!(bank.cells(), ['A', 'B', 'C', 'D', 'E', 'F']);
}

#[rstest]
#[case("A", 0.5)] // slot 0
#[case("C", 1.5)] // slot 2
#[case("F", 3.0)] // slot 5
fn test_fixed_cell_hit_costs(#[case] target: &str, #[case] expected: f32) {
    let predictor = Predictor::FixedCell(FixedCellPredictor::from_first_row(&abc()));
    let cost = predictor
        .offer(&abc(), "", target, &params())
        .unwrap()
        .unwrap();
    assert!((cost - expected).abs() < 1e-6, "cost for '{}'", target);
}

#[rstest]
#[case("N")] // not in the bank
#[case("TH")] // multi-character unit, bank holds single symbols
#[case("")]
fn test_fixed_cell_misses(#[case] target: &str) {
    let predictor = Predictor::FixedCell(FixedCellPredictor::from_first_row(&abc()));
    assert_eq!(predictor.offer(&abc(), "", target, &params()).unwrap(), None);
}

#[test]
fn test_fixed_cell_claims_nothing() {
    let predictor = Predictor::FixedCell(FixedCellPredictor::from_first_row(&abc()));
    assert!(!predictor.claims("A"));
    assert!(!predictor.claims("HELLO"));
}

// --- LONG-HOLD TESTS ---

fn hello_completions() -> LongHoldPredictor {
    LongHoldPredictor::new([('H', "HELLO".to_string()), ('T', "THANK_YOU".to_string())])
}

#[test]
fn test_long_hold_word_cost_is_scan_plus_hold() {
    let predictor = Predictor::LongHold(hello_completions());
    // H sits at index 7: 8 steps * 0.5s + 1.0s hold
    let cost = predictor
        .offer(&abc(), "", "HELLO", &params())
        .unwrap()
        .unwrap();
    assert!((cost - 5.0).abs() < 1e-6);
}

#[test]
fn test_long_hold_literal_letter_falls_back() {
    let predictor = Predictor::LongHold(hello_completions());
    assert_eq!(predictor.offer(&abc(), "", "H", &params()).unwrap(), None);
    assert_eq!(predictor.offer(&abc(), "", "YES", &params()).unwrap(), None);
}

#[test]
fn test_long_hold_claims_only_mapped_words() {
    let predictor = Predictor::LongHold(hello_completions());
    assert!(predictor.claims("HELLO"));
    assert!(predictor.claims("THANK_YOU"));
    assert!(!predictor.claims("H"));
    assert!(!predictor.claims("GOODBYE"));
}

#[test]
fn test_long_hold_trigger_missing_from_grid() {
    // Grid without H: the claimed word cannot actually be produced
    let grid = Grid::custom(2, 2, vec!['X', 'Y', 'Z']).unwrap();
    let predictor = Predictor::LongHold(hello_completions());
    let err = predictor.offer(&grid, "", "HELLO", &params()).unwrap_err();
    assert!(matches!(err, ScanForgeError::NotFound(_)));
}

// --- REMOTE TESTS ---

#[test]
fn test_remote_hit_is_priced_by_slot() {
    let service = CannedService::new(&["E", "T", "A"]);
    let predictor = Predictor::Remote(RemotePredictor::new(&service, Granularity::Letter, 5));
    let cost = predictor.offer(&abc(), "", "T", &params()).unwrap().unwrap();
    assert!((cost - 1.0).abs() < 1e-6); // slot 1 -> 2 * 0.5s
}

#[test]
fn test_remote_miss_returns_none() {
    let service = CannedService::new(&["E", "T", "A"]);
    let predictor = Predictor::Remote(RemotePredictor::new(&service, Granularity::Letter, 5));
    assert_eq!(predictor.offer(&abc(), "", "Z", &params()).unwrap(), None);
}

#[test]
fn test_remote_respects_candidate_limit() {
    let service = CannedService::new(&["E", "T", "A"]);
    // Limit 1 truncates the list before T is reached
    let predictor = Predictor::Remote(RemotePredictor::new(&service, Granularity::Letter, 1));
    assert_eq!(predictor.offer(&abc(), "", "T", &params()).unwrap(), None);
    assert!(predictor
        .offer(&abc(), "", "E", &params())
        .unwrap()
        .is_some());
}

#[test]
fn test_remote_claims_nothing() {
    let service = CannedService::new(&["HELLO"]);
    let predictor = Predictor::Remote(RemotePredictor::new(&service, Granularity::Word, 5));
    // Whether a word is served depends on context, so nothing is claimed
    assert!(!predictor.claims("HELLO"));
}

#[test]
fn test_default_candidate_limit() {
    // The clap default and the remote strategy share this constant
    assert_eq!(DEFAULT_NUM_PREDICTIONS, 5);
}
