use crate::error::{ScanForgeError, SfResult};
use crate::grid::Grid;
use strum_macros::{Display, EnumIter, EnumString};

/// How the cursor moves through the grid to reach a target cell.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Technique {
    Linear,
    RowColumn,
}

/// Result of one scan: the charged time and where the cursor ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOutcome {
    pub elapsed: f32,
    pub steps: usize,
    pub landing: usize,
}

impl Technique {
    pub fn scan(
        &self,
        grid: &Grid,
        target: char,
        start: usize,
        step_time: f32,
    ) -> SfResult<ScanOutcome> {
        match self {
            Self::Linear => linear_scan(grid, target, start, step_time),
            Self::RowColumn => row_column_scan(grid, target, start, step_time),
        }
    }
}

/// Scans cells one by one in row-major order from `start`, inclusive.
///
/// Cost is (distance to the first qualifying occurrence + 1) x `step_time`.
/// The scan never wraps: when every occurrence of `target` lies before
/// `start`, this fails with `NotFound` because the target is unreachable
/// from that origin.
pub fn linear_scan(grid: &Grid, target: char, start: usize, step_time: f32) -> SfResult<ScanOutcome> {
    let hits = grid.locate(target)?;
    let landing = hits.into_iter().find(|&i| i >= start).ok_or_else(|| {
        ScanForgeError::NotFound(format!(
            "'{}' at or after start index {} (no wraparound)",
            target, start
        ))
    })?;

    let steps = landing - start + 1;
    Ok(ScanOutcome {
        elapsed: steps as f32 * step_time,
        steps,
        landing,
    })
}

/// Two-phase scan: down to the target's row, then across to its column.
///
/// Cost is (|row delta| + |col delta| + 1) x `step_time`, the +1 being the
/// final selection. The first occurrence of `target` in row-major order is
/// always the one scanned to.
pub fn row_column_scan(
    grid: &Grid,
    target: char,
    start: usize,
    step_time: f32,
) -> SfResult<ScanOutcome> {
    // locate() never returns an empty hit list on success.
    let landing = grid.locate(target)?[0];
    let (target_row, target_col) = grid.to_row_col(landing);
    let (start_row, start_col) = grid.to_row_col(start);

    let steps = target_row.abs_diff(start_row) + target_col.abs_diff(start_col) + 1;
    Ok(ScanOutcome {
        elapsed: steps as f32 * step_time,
        steps,
        landing,
    })
}
