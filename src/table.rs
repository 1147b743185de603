//! Outcome tables.
//!
//! A played game stores its results as an `OutcomeTable` in wide form:
//! one row per roll, one column per die. `NarrowTable` is the stacked
//! form with one row per (roll, die) pair.
//!
//! Row and column numbers exposed by these types are 1-based.

use crate::error::DiceError;
use crate::face::{check_distinct, Face};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout requested from `Game::show_results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultForm {
    /// One row per roll, one column per die.
    #[default]
    Wide,
    /// One row per (roll, die) pair with a single outcome column.
    Narrow,
}

impl FromStr for ResultForm {
    type Err = DiceError;

    /// Parse `"wide"` or `"narrow"`, ignoring case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(ResultForm::Wide),
            "narrow" => Ok(ResultForm::Narrow),
            _ => Err(DiceError::invalid_argument(format!(
                "unknown result form {:?}, expected \"wide\" or \"narrow\"",
                s
            ))),
        }
    }
}

impl fmt::Display for ResultForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultForm::Wide => f.write_str("wide"),
            ResultForm::Narrow => f.write_str("narrow"),
        }
    }
}

/// Wide outcome table: `rolls` rows by `dice` columns of face labels.
///
/// # Examples
///
/// ```rust
/// use montecarlo::{Face, OutcomeTable};
///
/// let table = OutcomeTable::from_rows(
///     [1, 2, 3],
///     vec![vec![1, 1], vec![3, 2]],
/// ).unwrap();
///
/// assert_eq!(table.shape(), (2, 2));
/// assert_eq!(table.get(2, 1), Some(&Face::Int(3)));
/// ```
///
/// Deserialization goes through [`OutcomeTable::from_rows`], so a table
/// read from JSON is checked the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct OutcomeTable {
    /// The shared face set of the dice, in die order.
    faces: Vec<Face>,
    rows: Vec<Vec<Face>>,
}

#[derive(Deserialize)]
struct RawTable {
    faces: Vec<Face>,
    rows: Vec<Vec<Face>>,
}

impl TryFrom<RawTable> for OutcomeTable {
    type Error = DiceError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        OutcomeTable::from_rows(raw.faces, raw.rows)
    }
}

impl OutcomeTable {
    /// Build a table from rows that are already known to be well formed.
    pub(crate) fn from_columns(faces: Vec<Face>, columns: Vec<Vec<Face>>) -> Self {
        let rolls = columns.first().map_or(0, Vec::len);
        let rows = (0..rolls)
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();
        Self { faces, rows }
    }

    /// Build a table from caller-supplied rows.
    ///
    /// Useful to analyze fixed data without rolling.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidArgument` if `faces` repeats a face, there are no
    /// rows, a row is empty, rows differ in length, or a cell holds a face
    /// outside `faces`.
    pub fn from_rows<I, F, R, C>(faces: I, rows: R) -> Result<Self, DiceError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
        R: IntoIterator<Item = Vec<C>>,
        C: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        check_distinct(&faces)?;
        let rows: Vec<Vec<Face>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(DiceError::invalid_argument(
                    "an outcome table needs at least one roll and one die",
                ))
            }
        };

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DiceError::invalid_argument(format!(
                    "roll {} has {} outcomes, expected {}",
                    r + 1,
                    row.len(),
                    width
                )));
            }
            if let Some(stray) = row.iter().find(|cell| !faces.contains(cell)) {
                return Err(DiceError::invalid_argument(format!(
                    "roll {} contains {}, which is not a face of the dice",
                    r + 1,
                    stray
                )));
            }
        }

        Ok(Self { faces, rows })
    }

    /// The face set the outcomes are drawn from.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of rolls (rows).
    pub fn rolls(&self) -> usize {
        self.rows.len()
    }

    /// Number of dice (columns).
    pub fn dice(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(rolls, dice)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.dice())
    }

    /// Outcome of die `die` on roll `roll` (both 1-based).
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        self.row(roll)?.get(die.checked_sub(1)?)
    }

    /// All outcomes of roll `roll` (1-based), in die order.
    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        self.rows.get(roll.checked_sub(1)?).map(Vec::as_slice)
    }

    /// Iterate `(roll_number, outcomes)` pairs, roll numbers starting at 1.
    pub fn iter_rows(&self) -> impl Iterator<Item = (usize, &[Face])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }

    /// All outcomes of die `die` (1-based), in roll order.
    pub fn column(&self, die: usize) -> Option<Vec<Face>> {
        let idx = die.checked_sub(1)?;
        if idx >= self.dice() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[idx].clone()).collect())
    }

    /// Stack into narrow form: one row per (roll, die) pair.
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .iter_rows()
            .flat_map(|(roll, outcomes)| {
                outcomes.iter().enumerate().map(move |(d, outcome)| NarrowRow {
                    roll,
                    die: d + 1,
                    outcome: outcome.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

/// One row of a narrow table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrowRow {
    pub roll: usize,
    pub die: usize,
    pub outcome: Face,
}

/// Narrow outcome table indexed by `(roll, die)` with a single
/// `outcome` column. Rows are ordered by roll, then die.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    /// Name of the single value column.
    pub const VALUE_COLUMN: &'static str = "outcome";

    /// `(rolls * dice, 1)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 1)
    }

    /// Number of rows, `rolls * dice`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True only for a table with no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Outcome at index `(roll, die)`, both 1-based.
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        self.rows
            .iter()
            .find(|row| row.roll == roll && row.die == die)
            .map(|row| &row.outcome)
    }

    /// Iterate rows, ordered by roll, then die.
    pub fn iter(&self) -> impl Iterator<Item = &NarrowRow> {
        self.rows.iter()
    }
}

/// Results in the form requested from `Game::show_results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", content = "table", rename_all = "lowercase")]
pub enum ResultTable {
    Wide(OutcomeTable),
    Narrow(NarrowTable),
}

impl ResultTable {
    /// `(rows, columns)` of the underlying table.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            ResultTable::Wide(t) => t.shape(),
            ResultTable::Narrow(t) => t.shape(),
        }
    }

    /// Which layout this table is in.
    pub fn form(&self) -> ResultForm {
        match self {
            ResultTable::Wide(_) => ResultForm::Wide,
            ResultTable::Narrow(_) => ResultForm::Narrow,
        }
    }
}
