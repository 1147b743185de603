//! Game module.
//!
//! A `Game` rolls a set of similar dice together a given number of times
//! and keeps the outcome table of its most recent play.

use crate::die::Die;
use crate::error::DiceError;
use crate::face::Face;
use crate::table::{NarrowTable, OutcomeTable, ResultForm, ResultTable};
use log::debug;
use rand::Rng;

/// A game of one or more similar dice.
///
/// All dice share the same ordered face set; their weights may differ.
/// Only the results of the most recent [`play`](Game::play) are kept.
///
/// # Examples
///
/// ```rust
/// use montecarlo::{Die, Game};
///
/// let dice = vec![Die::new(1..=6).unwrap(), Die::new(1..=6).unwrap()];
/// let mut game = Game::new(dice).unwrap();
///
/// game.play(10).unwrap();
/// assert_eq!(game.show_results("wide").unwrap().shape(), (10, 2));
/// assert_eq!(game.show_results("narrow").unwrap().shape(), (20, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    dice: Vec<Die>,
    last_result: Option<OutcomeTable>,
}

impl Game {
    /// Create a game from a non-empty list of dice with identical faces.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidArgument` if `dice` is empty or any die's faces
    /// (labels or order) differ from the first die's.
    pub fn new(dice: Vec<Die>) -> Result<Self, DiceError> {
        let first = dice
            .first()
            .ok_or_else(|| DiceError::invalid_argument("a game needs at least one die"))?;

        if let Some(pos) = dice.iter().position(|d| d.faces() != first.faces()) {
            return Err(DiceError::invalid_argument(format!(
                "all dice must have the same faces, die {} differs from die 1",
                pos + 1
            )));
        }

        debug!(
            "new game with {} dice of {} faces",
            dice.len(),
            first.len()
        );
        Ok(Self {
            dice,
            last_result: None,
        })
    }

    /// The dice of this game, in position order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// The face set shared by every die.
    pub fn faces(&self) -> &[Face] {
        self.dice[0].faces()
    }

    /// Whether `play` has been called at least once.
    pub fn is_played(&self) -> bool {
        self.last_result.is_some()
    }

    /// Roll every die `rolls` times with the thread-local generator.
    ///
    /// # Errors
    ///
    /// * `DiceError::InvalidArgument` if `rolls` is zero
    /// * `DiceError::InvalidState` if some die has only zero weights
    pub fn play(&mut self, rolls: usize) -> Result<(), DiceError> {
        self.play_with(&mut rand::thread_rng(), rolls)
    }

    /// Roll every die `rolls` times drawing from `rng`.
    ///
    /// Die 1 is rolled `rolls` times first, then die 2, and so on. The
    /// previous result is replaced only if every die rolls successfully.
    pub fn play_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rolls: usize,
    ) -> Result<(), DiceError> {
        if rolls == 0 {
            return Err(DiceError::invalid_argument("rolls must be positive"));
        }

        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with(&mut *rng, rolls))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("played {} rolls of {} dice", rolls, self.dice.len());
        self.last_result = Some(OutcomeTable::from_columns(
            self.faces().to_vec(),
            columns,
        ));
        Ok(())
    }

    /// Stored outcome table of the most recent play.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidState` if the game has not been played.
    pub fn outcomes(&self) -> Result<&OutcomeTable, DiceError> {
        self.last_result
            .as_ref()
            .ok_or_else(|| DiceError::invalid_state("the game has not been played yet"))
    }

    /// Copy of the most recent results in wide form.
    pub fn wide_results(&self) -> Result<OutcomeTable, DiceError> {
        self.outcomes().cloned()
    }

    /// The most recent results in narrow form.
    pub fn narrow_results(&self) -> Result<NarrowTable, DiceError> {
        Ok(self.outcomes()?.to_narrow())
    }

    /// The most recent results in the form named by `form`
    /// (`"wide"` or `"narrow"`).
    ///
    /// # Errors
    ///
    /// * `DiceError::InvalidArgument` for any other form name
    /// * `DiceError::InvalidState` if the game has not been played
    pub fn show_results(&self, form: &str) -> Result<ResultTable, DiceError> {
        self.results(form.parse()?)
    }

    /// The most recent results in the given form.
    pub fn results(&self, form: ResultForm) -> Result<ResultTable, DiceError> {
        match form {
            ResultForm::Wide => self.wide_results().map(ResultTable::Wide),
            ResultForm::Narrow => self.narrow_results().map(ResultTable::Narrow),
        }
    }
}
