//! Weighted die module.
//!
//! Provides the `Die` type, a die with a fixed set of distinct faces and
//! a mutable weight per face, and the `DieState` snapshot returned by
//! `Die::state()`.

use crate::error::DiceError;
use crate::face::{check_distinct, Face};
use crate::weight::WeightValue;
use log::trace;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A die with N distinct faces and a weight per face.
///
/// Every face starts with weight 1.0. Rolling selects a face with
/// probability `weight / sum(weights)`, independently on each draw.
///
/// # Examples
///
/// ```rust
/// use montecarlo::Die;
///
/// let mut die = Die::new(1..=6).unwrap();
/// die.set_weight(6, 5.0).unwrap();
///
/// let rolls = die.roll(10).unwrap();
/// assert_eq!(rolls.len(), 10);
/// assert_eq!(die.state().weight(&6i64.into()), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: Vec<Face>,
    /// Parallel to `faces`.
    weights: Vec<f64>,
}

impl Die {
    /// Create a die from an ordered collection of distinct faces.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidArgument` if the collection is empty or holds
    /// the same face twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montecarlo::Die;
    ///
    /// let coin = Die::new(["H", "T"]).unwrap();
    /// assert_eq!(coin.len(), 2);
    ///
    /// assert!(Die::new([1, 2, 2]).is_err());
    /// ```
    pub fn new<I, F>(faces: I) -> Result<Self, DiceError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(DiceError::invalid_argument("a die needs at least one face"));
        }

        check_distinct(&faces)?;

        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// The faces of this die, in construction order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false; a die has at least one face.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn index_of(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    /// Current weight of `face`, or `None` if the die has no such face.
    pub fn weight(&self, face: impl Into<Face>) -> Option<f64> {
        let face = face.into();
        self.index_of(&face).map(|i| self.weights[i])
    }

    /// Change the weight of one face.
    ///
    /// The weight may be given as any number, a numeric string or a JSON
    /// value (see [`WeightValue`]). The new weight applies to the next
    /// roll.
    ///
    /// # Errors
    ///
    /// * `DiceError::NotFound` if `face` is not on this die
    /// * `DiceError::InvalidArgument` if the weight is not a finite,
    ///   non-negative number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montecarlo::{Die, DiceError, Face};
    ///
    /// let mut die = Die::new([1, 2, 3]).unwrap();
    /// die.set_weight(2, "3.5").unwrap();
    /// assert_eq!(die.weight(2), Some(3.5));
    ///
    /// assert_eq!(die.set_weight(9, 1.0), Err(DiceError::NotFound(Face::Int(9))));
    /// ```
    pub fn set_weight(
        &mut self,
        face: impl Into<Face>,
        weight: impl WeightValue,
    ) -> Result<(), DiceError> {
        let face = face.into();
        let idx = self
            .index_of(&face)
            .ok_or_else(|| DiceError::NotFound(face.clone()))?;
        let weight = weight.into_weight()?;

        trace!("face {} weight {} -> {}", face, self.weights[idx], weight);
        self.weights[idx] = weight;
        Ok(())
    }

    fn sampler(&self) -> Result<WeightedIndex<f64>, DiceError> {
        let scaled = scaled_weights(&self.weights).ok_or_else(|| {
            DiceError::invalid_state("cannot roll a die whose weights are all zero")
        })?;
        WeightedIndex::new(&scaled)
            .map_err(|e| DiceError::invalid_state(format!("cannot roll die: {}", e)))
    }

    /// Roll the die `times` times with the thread-local generator.
    ///
    /// # Errors
    ///
    /// `DiceError::InvalidState` if every weight is zero.
    pub fn roll(&self, times: usize) -> Result<Vec<Face>, DiceError> {
        self.roll_with(&mut rand::thread_rng(), times)
    }

    /// Roll the die once.
    pub fn roll_once(&self) -> Result<Face, DiceError> {
        self.roll_with(&mut rand::thread_rng(), 1)?
            .pop()
            .ok_or_else(|| DiceError::invalid_state("roll produced no outcome"))
    }

    /// Roll the die `times` times drawing from `rng`.
    ///
    /// Draws are independent and with replacement. Use a seeded generator
    /// for reproducible rolls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montecarlo::Die;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let die = Die::new(1..=4).unwrap();
    /// let a = die.roll_with(&mut StdRng::seed_from_u64(7), 5).unwrap();
    /// let b = die.roll_with(&mut StdRng::seed_from_u64(7), 5).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn roll_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        times: usize,
    ) -> Result<Vec<Face>, DiceError> {
        let dist = self.sampler()?;
        let outcomes: Vec<Face> = (0..times)
            .map(|_| self.faces[dist.sample(&mut *rng)].clone())
            .collect();
        trace!("rolled {} times", outcomes.len());
        Ok(outcomes)
    }

    /// Snapshot of the faces and their current weights.
    ///
    /// The snapshot is detached: later weight changes do not affect it.
    pub fn state(&self) -> DieState {
        DieState {
            entries: self
                .faces
                .iter()
                .cloned()
                .zip(self.weights.iter().copied())
                .collect(),
        }
    }
}

/// Weights divided by the largest one, so their sum stays finite even when
/// individual weights are near `f64::MAX`. `None` if no weight is positive.
fn scaled_weights(weights: &[f64]) -> Option<Vec<f64>> {
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    Some(weights.iter().map(|w| w / max).collect())
}

/// Detached snapshot of a die: its faces and weights, in face order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieState {
    /// `(face, weight)` pairs in face order.
    pub entries: Vec<(Face, f64)>,
}

impl DieState {
    /// Weight of `face` at the time of the snapshot.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.entries
            .iter()
            .find(|(f, _)| f == face)
            .map(|(_, w)| *w)
    }

    /// Sum of all weights. May be infinite when weights are near `f64::MAX`.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Probability of rolling `face`, or `None` if the face is unknown or
    /// every weight is zero.
    pub fn probability(&self, face: &Face) -> Option<f64> {
        let idx = self.entries.iter().position(|(f, _)| f == face)?;
        let total = self.total_weight();
        if total.is_finite() {
            return (total > 0.0).then(|| self.entries[idx].1 / total);
        }
        let weights: Vec<f64> = self.entries.iter().map(|(_, w)| *w).collect();
        let scaled = scaled_weights(&weights)?;
        Some(scaled[idx] / scaled.iter().sum::<f64>())
    }

    /// Iterate the faces, in face order.
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.entries.iter().map(|(f, _)| f)
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a snapshot with no faces.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
