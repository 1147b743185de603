//! # montecarlo - Weighted Dice Simulation and Statistics
//!
//! A small Monte Carlo toolkit built from three pieces:
//! - **Weighted dice** with arbitrary numeric or text faces
//! - **Games** that roll several similar dice together and keep the results
//! - **Analyzers** that derive descriptive statistics from those results
//!
//! ## Core Concepts
//!
//! Data flows one way:
//!
//! ```text
//! [Die] → [Game] → [OutcomeTable] → [Analyzer]
//! ```
//!
//! 1. A **Die** has a fixed set of distinct faces; each face has a weight
//!    (1.0 by default) that can be changed at any time
//! 2. A **Game** rolls all of its dice N times and stores an N × dice
//!    outcome table, replacing the previous one
//! 3. An **Analyzer** reads that table: jackpots, per-roll face counts,
//!    combination counts and permutation counts
//!
//! ## Example
//!
//! ```rust
//! use montecarlo::*;
//!
//! let mut loaded = Die::new(1..=6).unwrap();
//! loaded.set_weight(6, 5.0).unwrap();
//!
//! let mut game = Game::new(vec![Die::new(1..=6).unwrap(), loaded]).unwrap();
//! game.play(1000).unwrap();
//!
//! let analyzer = Analyzer::new(&game);
//! let faces = analyzer.face_count().unwrap();
//! assert_eq!(faces.shape(), (1000, 6));
//! assert_eq!(analyzer.combo_count().unwrap().total(), 1000);
//! ```
//!
//! ## Modules
//!
//! - [`face`] - Face labels
//! - [`weight`] - Weight coercion from numbers, strings and JSON
//! - [`die`] - Weighted die
//! - [`game`] - Multi-die game
//! - [`table`] - Wide and narrow outcome tables
//! - [`analyzer`] - Statistics over outcome tables
//! - [`config`] - JSON game descriptions
//! - [`error`] - Error types

pub mod analyzer;
pub mod config;
pub mod die;
pub mod error;
pub mod face;
pub mod game;
pub mod table;
pub mod weight;

// Re-export main types for convenience
pub use analyzer::{Analyzer, FaceCounts, TupleCounts};
pub use config::{DieConfig, GameConfig, WeightEntry};
pub use die::{Die, DieState};
pub use error::{DiceError, ErrorKind};
pub use face::Face;
pub use game::Game;
pub use table::{NarrowRow, NarrowTable, OutcomeTable, ResultForm, ResultTable};
pub use weight::WeightValue;
