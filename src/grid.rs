use crate::error::{ScanForgeError, SfResult};
use crate::frequencies::FrequencyTable;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The space/separator key. Every grid carries it exactly once per tiling
/// cycle; orderings that lack it get it appended.
pub const BLANK: char = '_';

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Physical keyboard reading order (row-major over the three letter rows).
pub const QWERTY_ORDER: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// An immutable rows x cols arrangement of symbols, row-major.
///
/// Built once from a symbol ordering and never mutated. Orderings shorter
/// than rows*cols are tiled cyclically, so every cell is always occupied and
/// the same symbol may appear at several indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Tiles `ordering` row-major into a rows x cols grid, appending the
    /// blank first if the ordering lacks it.
    pub fn build(ordering: Vec<char>, rows: usize, cols: usize) -> SfResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ScanForgeError::Config(format!(
                "Grid dimensions must be positive (got {}x{})",
                rows, cols
            )));
        }

        let mut ordering = ordering;
        if !ordering.contains(&BLANK) {
            ordering.push(BLANK);
        }
        // Non-empty is guaranteed from here on: even an empty caller list
        // now holds the blank.

        let size = rows * cols;
        let cells = (0..size).map(|i| ordering[i % ordering.len()]).collect();

        Ok(Self { cells, rows, cols })
    }

    /// A..Z in reading order, blank last.
    pub fn alphabetical(rows: usize, cols: usize) -> SfResult<Self> {
        Self::build(ALPHABET.chars().collect(), rows, cols)
    }

    /// Weight-descending ordering from `table` (ties keep table order).
    pub fn frequency(rows: usize, cols: usize, table: &FrequencyTable) -> SfResult<Self> {
        Self::build(table.sorted_symbols(), rows, cols)
    }

    /// Fixed physical-keyboard ordering, blank last.
    pub fn qwerty(rows: usize, cols: usize) -> SfResult<Self> {
        Self::build(QWERTY_ORDER.chars().collect(), rows, cols)
    }

    /// Caller-supplied ordering, auto-completed with the blank if missing.
    pub fn custom(rows: usize, cols: usize, symbols: Vec<char>) -> SfResult<Self> {
        Self::build(symbols, rows, cols)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    /// The cells of row `r`, for rendering.
    pub fn row(&self, r: usize) -> &[char] {
        let start = r * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.cells.contains(&symbol)
    }

    /// Every linear index holding `symbol`, in row-major order.
    pub fn locate(&self, symbol: char) -> SfResult<Vec<usize>> {
        let hits: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == symbol)
            .map(|(i, _)| i)
            .collect();

        if hits.is_empty() {
            return Err(ScanForgeError::not_found(symbol));
        }
        Ok(hits)
    }

    /// Linear index -> (row, col). Pure arithmetic over `cols`.
    pub fn to_row_col(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.cells.len());
        (index / self.cols, index % self.cols)
    }

    /// (row, col) -> linear index. Inverse of [`Grid::to_row_col`].
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

/// The named symbol orderings a grid can be built from.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum GridOrdering {
    Alphabetical,
    Frequency,
    Qwerty,
}

impl GridOrdering {
    /// The shape each ordering is conventionally shown at.
    pub fn default_shape(&self) -> (usize, usize) {
        match self {
            Self::Alphabetical => (5, 6),
            Self::Frequency => (6, 6),
            Self::Qwerty => (4, 10),
        }
    }

    pub fn build(&self, rows: usize, cols: usize, table: &FrequencyTable) -> SfResult<Grid> {
        match self {
            Self::Alphabetical => Grid::alphabetical(rows, cols),
            Self::Frequency => Grid::frequency(rows, cols, table),
            Self::Qwerty => Grid::qwerty(rows, cols),
        }
    }
}

/// All named orderings at their conventional shapes.
pub fn standard_grids(table: &FrequencyTable) -> SfResult<Vec<(GridOrdering, Grid)>> {
    GridOrdering::iter()
        .map(|ordering| {
            let (rows, cols) = ordering.default_shape();
            Ok((ordering, ordering.build(rows, cols, table)?))
        })
        .collect()
}
