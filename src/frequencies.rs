use crate::error::{ScanForgeError, SfResult};
use crate::grid::BLANK;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// English letter weights (percent of use), blank included as the word
/// separator. Order matters: ties in weight keep their position here.
pub const ENGLISH_WEIGHTS: [(char, f32); 27] = [
    ('E', 12.49),
    ('T', 9.28),
    ('A', 8.04),
    ('O', 7.64),
    ('I', 7.57),
    ('N', 7.23),
    ('S', 6.51),
    ('R', 6.28),
    ('H', 5.05),
    ('L', 4.07),
    ('D', 3.82),
    ('C', 3.34),
    ('U', 2.73),
    ('M', 2.51),
    ('F', 2.40),
    ('P', 2.14),
    ('G', 1.87),
    ('W', 1.68),
    ('Y', 1.66),
    ('B', 1.48),
    ('V', 1.05),
    ('K', 0.54),
    ('X', 0.23),
    ('J', 0.16),
    ('Q', 0.12),
    ('Z', 0.09),
    (BLANK, 15.00),
];

/// An ordered symbol-to-weight table used to derive frequency grid layouts.
///
/// Input order is preserved so that equal weights sort deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(char, f32)>,
}

impl FrequencyTable {
    /// The built-in English table (weights from a general-usage corpus,
    /// blank weighted like a frequent separator key).
    pub fn english() -> Self {
        Self {
            entries: ENGLISH_WEIGHTS.to_vec(),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> SfResult<Self>
    where
        I: IntoIterator<Item = (char, f32)>,
    {
        let entries: Vec<(char, f32)> = pairs.into_iter().collect();
        if entries.is_empty() {
            return Err(ScanForgeError::Config(
                "Frequency table must contain at least one symbol".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// Loads a `symbol,weight` CSV (header row expected). Rows with a
    /// missing column, an empty symbol, or an unparsable weight fail the
    /// whole load.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> SfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (row_idx, result) in rdr.records().enumerate() {
            let rec = result?;
            if rec.len() < 2 {
                return Err(ScanForgeError::Config(format!(
                    "Frequency row {} has {} columns, expected symbol,weight",
                    row_idx + 1,
                    rec.len()
                )));
            }

            let raw = rec[0].trim();
            let mut chars = raw.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ScanForgeError::Config(format!(
                        "Frequency row {}: '{}' is not a single symbol",
                        row_idx + 1,
                        raw
                    )))
                }
            };

            let weight: f32 = rec[1].trim().parse().map_err(|_| {
                ScanForgeError::Config(format!(
                    "Frequency row {}: invalid weight '{}'",
                    row_idx + 1,
                    rec[1].trim()
                ))
            })?;

            entries.push((symbol, weight));
        }

        if entries.is_empty() {
            return Err(ScanForgeError::Config(
                "Frequency table is empty".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.iter().any(|&(s, _)| s == symbol)
    }

    /// Symbols in weight-descending order. The sort is stable, so equal
    /// weights keep their table order.
    pub fn sorted_symbols(&self) -> Vec<char> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted.into_iter().map(|(s, _)| s).collect()
    }
}
