//! Analyzer module.
//!
//! Descriptive statistics over a game's outcome table: jackpots, per-roll
//! face counts, and counts of distinct combinations and permutations.
//!
//! The statistics are defined on [`OutcomeTable`] so they can run on any
//! table; [`Analyzer`] is the front end bound to a played [`Game`].

use crate::error::DiceError;
use crate::face::Face;
use crate::game::Game;
use crate::table::OutcomeTable;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Read-only statistics over the most recent play of a [`Game`].
///
/// Every method fails with `DiceError::InvalidState` if the game has not
/// been played.
///
/// # Examples
///
/// ```rust
/// use montecarlo::{Analyzer, Die, Game};
///
/// let dice = vec![Die::new(["H", "T"]).unwrap(), Die::new(["H", "T"]).unwrap()];
/// let mut game = Game::new(dice).unwrap();
/// game.play(50).unwrap();
///
/// let analyzer = Analyzer::new(&game);
/// let combos = analyzer.combo_count().unwrap();
/// assert_eq!(combos.total(), 50);
/// assert!(combos.len() <= 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'g> {
    game: &'g Game,
}

impl<'g> Analyzer<'g> {
    pub fn new(game: &'g Game) -> Self {
        Self { game }
    }

    /// The game under analysis.
    pub fn game(&self) -> &'g Game {
        self.game
    }

    fn table(&self) -> Result<&'g OutcomeTable, DiceError> {
        self.game.outcomes()
    }

    /// Number of rolls in which every die shows the same face.
    pub fn jackpot_count(&self) -> Result<usize, DiceError> {
        Ok(self.table()?.jackpot_count())
    }

    /// Per-roll histogram of faces over all dice.
    pub fn face_count(&self) -> Result<FaceCounts, DiceError> {
        Ok(self.table()?.face_count())
    }

    /// Counts of distinct order-independent combinations.
    pub fn combo_count(&self) -> Result<TupleCounts, DiceError> {
        Ok(self.table()?.combo_count())
    }

    /// Counts of distinct order-dependent permutations.
    pub fn permutation_count(&self) -> Result<TupleCounts, DiceError> {
        Ok(self.table()?.permutation_count())
    }
}

impl OutcomeTable {
    /// Number of rows whose cells are all equal.
    pub fn jackpot_count(&self) -> usize {
        self.iter_rows()
            .filter(|(_, row)| row.windows(2).all(|w| w[0] == w[1]))
            .count()
    }

    /// One row per roll, one column per face (in face order), each cell
    /// the number of dice showing that face on that roll.
    pub fn face_count(&self) -> FaceCounts {
        let column_of: HashMap<&Face, usize> = self
            .faces()
            .iter()
            .enumerate()
            .map(|(i, f)| (f, i))
            .collect();

        let counts = self
            .iter_rows()
            .map(|(_, row)| {
                let mut counts = vec![0; self.faces().len()];
                for face in row {
                    if let Some(&col) = column_of.get(face) {
                        counts[col] += 1;
                    }
                }
                counts
            })
            .collect();

        FaceCounts {
            faces: self.faces().to_vec(),
            counts,
        }
    }

    /// Group rolls by their sorted outcomes.
    pub fn combo_count(&self) -> TupleCounts {
        TupleCounts::tally(self.iter_rows().map(|(_, row)| {
            let mut key = row.to_vec();
            key.sort();
            key
        }))
    }

    /// Group rolls by their outcomes in die order.
    pub fn permutation_count(&self) -> TupleCounts {
        TupleCounts::tally(self.iter_rows().map(|(_, row)| row.to_vec()))
    }
}

/// Per-roll face histogram.
///
/// Rows are indexed by roll number (1-based); columns span the full face
/// set, so faces not rolled show a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCounts {
    faces: Vec<Face>,
    counts: Vec<Vec<usize>>,
}

impl FaceCounts {
    /// Column labels, in face order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// `(rolls, faces)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.counts.len(), self.faces.len())
    }

    /// Counts for roll `roll` (1-based), one per face.
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        self.counts.get(roll.checked_sub(1)?).map(Vec::as_slice)
    }

    /// How many dice showed `face` on roll `roll`.
    pub fn get(&self, roll: usize, face: impl Into<Face>) -> Option<usize> {
        let face = face.into();
        let col = self.faces.iter().position(|f| *f == face)?;
        self.row(roll).map(|counts| counts[col])
    }

    /// Iterate `(roll_number, counts)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| (i + 1, c.as_slice()))
    }
}

/// Count of rolls per distinct tuple of faces.
///
/// Keys hold one face per die position and iterate in ascending order.
/// Serializes as a list of `{"faces": [...], "Count": n}` rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TupleCounts {
    counts: BTreeMap<Vec<Face>, usize>,
}

impl TupleCounts {
    /// Name of the count column.
    pub const VALUE_COLUMN: &'static str = "Count";

    fn tally(keys: impl Iterator<Item = Vec<Face>>) -> Self {
        let mut counts = BTreeMap::new();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of rolls that produced `key`; zero if none did.
    pub fn get(&self, key: &[Face]) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct tuples.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, which equals the number of rolls.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Face], usize)> {
        self.counts.iter().map(|(k, v)| (k.as_slice(), *v))
    }
}

#[derive(Serialize)]
struct CountRow<'a> {
    faces: &'a [Face],
    #[serde(rename = "Count")]
    count: usize,
}

impl Serialize for TupleCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|(faces, count)| CountRow { faces, count }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::Die;

    fn faces(v: &[i64]) -> Vec<Face> {
        v.iter().map(|&n| Face::Int(n)).collect()
    }

    fn table() -> OutcomeTable {
        OutcomeTable::from_rows(
            1..=6,
            vec![
                vec![3, 1, 2, 1],
                vec![2, 2, 2, 2],
                vec![1, 1, 2, 3],
                vec![5, 5, 5, 5],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_jackpot_count() {
        assert_eq!(table().jackpot_count(), 2);
    }

    #[test]
    fn test_single_die_is_always_jackpot() {
        let t = OutcomeTable::from_rows([1, 2], vec![vec![1], vec![2], vec![1]]).unwrap();
        assert_eq!(t.jackpot_count(), 3);
    }

    #[test]
    fn test_face_count() {
        let counts = table().face_count();
        assert_eq!(counts.shape(), (4, 6));
        assert_eq!(counts.row(1), Some(&[2, 1, 1, 0, 0, 0][..]));
        assert_eq!(counts.get(2, 2), Some(4));
        assert_eq!(counts.get(4, 6), Some(0));
        assert_eq!(counts.get(5, 1), None);
        assert!(counts.iter().all(|(_, row)| row.iter().sum::<usize>() == 4));
    }

    #[test]
    fn test_face_count_text_faces_in_die_order() {
        let t = OutcomeTable::from_rows(["z", "a"], vec![vec!["a", "a"]]).unwrap();
        let counts = t.face_count();
        assert_eq!(counts.faces(), &[Face::from("z"), Face::from("a")]);
        assert_eq!(counts.row(1), Some(&[0, 2][..]));
    }

    #[test]
    fn test_combo_count() {
        let combos = table().combo_count();
        assert_eq!(combos.len(), 3);
        assert_eq!(combos.get(&faces(&[1, 1, 2, 3])), 2);
        assert_eq!(combos.get(&faces(&[2, 2, 2, 2])), 1);
        assert_eq!(combos.get(&faces(&[3, 1, 2, 1])), 0);
        assert_eq!(combos.total(), 4);
    }

    #[test]
    fn test_permutation_count() {
        let perms = table().permutation_count();
        assert_eq!(perms.len(), 4);
        assert_eq!(perms.get(&faces(&[3, 1, 2, 1])), 1);
        assert_eq!(perms.get(&faces(&[1, 1, 2, 3])), 1);
        assert_eq!(perms.total(), 4);
    }

    #[test]
    fn test_combo_keys_are_ordered() {
        let keys: Vec<Vec<Face>> = table()
            .combo_count()
            .iter()
            .map(|(k, _)| k.to_vec())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_tuple_counts_json() {
        let t = OutcomeTable::from_rows(["H", "T"], vec![vec!["T", "H"], vec!["H", "T"]]).unwrap();
        let json = serde_json::to_string(&t.combo_count()).unwrap();
        assert_eq!(json, r#"[{"faces":["H","T"],"Count":2}]"#);
    }

    #[test]
    fn test_analyzer_requires_play() {
        let game = Game::new(vec![Die::new(1..=6).unwrap()]).unwrap();
        let analyzer = Analyzer::new(&game);
        assert!(matches!(analyzer.jackpot_count(), Err(DiceError::InvalidState(_))));
        assert!(matches!(analyzer.face_count(), Err(DiceError::InvalidState(_))));
        assert!(matches!(analyzer.combo_count(), Err(DiceError::InvalidState(_))));
        assert!(matches!(
            analyzer.permutation_count(),
            Err(DiceError::InvalidState(_))
        ));
    }

    #[test]
    fn test_analyzer_on_played_game() {
        let mut game = Game::new(vec![Die::new(1..=6).unwrap(); 3]).unwrap();
        game.play(25).unwrap();
        let analyzer = Analyzer::new(&game);
        assert_eq!(analyzer.face_count().unwrap().shape(), (25, 6));
        assert_eq!(analyzer.permutation_count().unwrap().total(), 25);
        assert!(analyzer.jackpot_count().unwrap() <= 25);
    }
}
