//! Declarative game setup.
//!
//! A `GameConfig` describes a set of dice, their weights and how many
//! rolls to play. It can be loaded from JSON and turned into a `Game`.
//!
//! ```json
//! {
//!   "dice": [
//!     { "faces": [1, 2, 3, 4, 5, 6], "weights": [{ "face": 6, "weight": "3" }] },
//!     { "faces": [1, 2, 3, 4, 5, 6] }
//!   ],
//!   "rolls": 100,
//!   "seed": 42
//! }
//! ```

use crate::die::Die;
use crate::error::DiceError;
use crate::face::Face;
use crate::game::Game;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// One weight override in a [`DieConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub face: Face,
    /// A number or a numeric string.
    pub weight: serde_json::Value,
}

/// Faces of one die and any weights that differ from 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieConfig {
    pub faces: Vec<Face>,
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
}

impl DieConfig {
    /// Build the die, applying weight overrides in order.
    pub fn build(&self) -> Result<Die, DiceError> {
        let mut die = Die::new(self.faces.iter())?;
        for entry in &self.weights {
            die.set_weight(&entry.face, &entry.weight)?;
        }
        Ok(die)
    }
}

/// A complete game description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dice: Vec<DieConfig>,
    pub rolls: usize,
    /// Seed for a reproducible play. Without one, the thread-local
    /// generator is used.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidArgument` if the text is not a valid config.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montecarlo::GameConfig;
    ///
    /// let config = GameConfig::from_json(r#"{
    ///     "dice": [{ "faces": ["H", "T"] }, { "faces": ["H", "T"] }],
    ///     "rolls": 8,
    ///     "seed": 1
    /// }"#).unwrap();
    ///
    /// let game = config.run().unwrap();
    /// assert_eq!(game.outcomes().unwrap().shape(), (8, 2));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DiceError> {
        serde_json::from_str(json)
            .map_err(|e| DiceError::invalid_argument(format!("invalid game config: {}", e)))
    }

    /// Serialize this config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DiceError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DiceError::invalid_argument(format!("cannot serialize config: {}", e)))
    }

    /// Build the dice and the (unplayed) game.
    pub fn build(&self) -> Result<Game, DiceError> {
        let dice = self
            .dice
            .iter()
            .map(DieConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Game::new(dice)
    }

    /// Build the game and play it for `rolls` rolls.
    pub fn run(&self) -> Result<Game, DiceError> {
        let mut game = self.build()?;
        match self.seed {
            Some(seed) => {
                debug!("playing with seed {}", seed);
                game.play_with(&mut StdRng::seed_from_u64(seed), self.rolls)?;
            }
            None => game.play(self.rolls)?,
        }
        Ok(game)
    }
}
