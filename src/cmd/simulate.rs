use crate::reports;
use clap::Args;
use scanforge::config::{ServiceOptions, TimingOptions};
use scanforge::error::SfResult;
use scanforge::frequencies::FrequencyTable;
use scanforge::grid::Grid;
use scanforge::metrics::AccuracyCounters;
use scanforge::prediction::{
    FixedCellPredictor, HttpPredictionService, LongHoldPredictor, Predictor, RemotePredictor,
};
use scanforge::scanning::Technique;
use scanforge::simulate::{simulate, Utterance};

/// The standard battery phrases, underscores marking word blanks.
pub const STANDARD_UTTERANCES: [&str; 5] = ["HELLO", "YES", "NO", "THANK_YOU", "I_NEED_HELP"];

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub timing: TimingOptions,

    #[command(flatten)]
    pub service: ServiceOptions,

    /// Print the grids before the timings
    #[arg(long, default_value_t = false)]
    pub show_grids: bool,
}

pub fn run(args: SimulateArgs, table: &FrequencyTable) -> SfResult<()> {
    let params = args.timing.to_params();
    params.validate()?;
    let profile = args.service.profile()?;
    let granularity = args.service.granularity()?;

    let abc = Grid::alphabetical(5, 6)?;
    let freq = Grid::frequency(6, 6, table)?;

    if args.show_grids {
        reports::print_grid("Alphabetical (5x6)", &abc);
        reports::print_grid("Frequency (6x6)", &freq);
        let qwerty = Grid::qwerty(4, 10)?;
        reports::print_grid("QWERTY (4x10)", &qwerty);
    }

    let spelled: Vec<Utterance> = STANDARD_UTTERANCES
        .iter()
        .map(|text| Utterance::spelled(text))
        .collect();

    println!("\n=== ⏱️  SCANNING BATTERY ===");
    println!(
        "Utterances: {} | step {}s | hold {}s",
        STANDARD_UTTERANCES.join(", "),
        params.step_time,
        params.hold_time
    );

    let mut counters = AccuracyCounters::new();
    let mut rows: Vec<(String, f32)> = Vec::new();

    for (label, grid, technique) in [
        ("Linear (Alphabetical)", &abc, Technique::Linear),
        ("Linear (Frequency)", &freq, Technique::Linear),
        ("Row-Column (Alphabetical)", &abc, Technique::RowColumn),
        ("Row-Column (Frequency)", &freq, Technique::RowColumn),
    ] {
        let total = simulate(grid, &spelled, technique, None, &params, &mut counters)?;
        rows.push((label.to_string(), total));
    }

    let fixed = Predictor::FixedCell(FixedCellPredictor::from_first_row(&abc));
    let total = simulate(
        &abc,
        &spelled,
        Technique::Linear,
        Some(&fixed),
        &params,
        &mut counters,
    )?;
    rows.push(("Fixed-Cell + Linear (Alphabetical)".to_string(), total));

    let long_hold = Predictor::LongHold(LongHoldPredictor::new([
        ('H', "HELLO".to_string()),
        ('T', "THANK_YOU".to_string()),
    ]));
    let total = simulate(
        &freq,
        &spelled,
        Technique::Linear,
        Some(&long_hold),
        &params,
        &mut counters,
    )?;
    rows.push(("Long-Hold + Linear (Frequency, spelled)".to_string(), total));

    let total = simulate(
        &freq,
        &word_unit_battery(),
        Technique::Linear,
        Some(&long_hold),
        &params,
        &mut counters,
    )?;
    rows.push(("Long-Hold + Linear (Frequency, words)".to_string(), total));

    if let Some(profile) = profile {
        let mut service = HttpPredictionService::new(profile)?;
        if let Some(endpoint) = &args.service.endpoint {
            service = service.with_endpoint(endpoint);
        }
        let remote = Predictor::Remote(RemotePredictor::new(
            &service,
            granularity,
            args.service.num_predictions,
        ));
        let total = simulate(
            &freq,
            &spelled,
            Technique::Linear,
            Some(&remote),
            &params,
            &mut counters,
        )?;
        rows.push((format!("Remote {} + Linear (Frequency)", profile), total));
    }

    reports::print_timings(&rows);
    reports::print_accuracy(&counters);
    Ok(())
}

/// The same phrases with the long-hold completions given as word units.
fn word_unit_battery() -> Vec<Utterance> {
    vec![
        Utterance::from_units(["HELLO"]),
        Utterance::spelled("YES"),
        Utterance::spelled("NO"),
        Utterance::from_units(["THANK_YOU"]),
        Utterance::spelled("I_NEED_HELP"),
    ]
}
