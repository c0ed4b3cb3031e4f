//! Pignistic (betting) transformation.
//!
//! BetP(s) = Σ over focal elements A containing s, A ≠ ∅, of
//! m(A) / |A| · 1/(1−K), where K is the conflict mass. Ambiguous mass is
//! split evenly among the hypotheses it covers and the result is
//! renormalized to exclude the conflict, so singleton probabilities sum
//! to 1.

use geomatch_core::types::mass_triple::MASS_SUM_TOLERANCE;
use geomatch_core::MatchError;

use crate::mass::MassFunction;

/// Round half away from zero at `digits` decimal places.
///
/// The decision rule compares probabilities for exact equality at this
/// precision, so every reported probability goes through here first.
/// Idempotent: rounding twice equals rounding once.
pub fn round_half_away_from_zero(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    let bumped = if scaled >= 0.0 {
        scaled + 0.5
    } else {
        scaled - 0.5
    };
    bumped.trunc() / scale
}

/// Probabilities over the frame's singleton hypotheses, indexed by
/// hypothesis handle and already rounded.
#[derive(Debug, Clone)]
pub struct PignisticDistribution {
    values: Vec<f64>,
}

impl PignisticDistribution {
    /// Derive the distribution from one combined mass function.
    ///
    /// Fails with [`MatchError::TotalConflict`] when (1−K) vanishes: fully
    /// contradictory evidence admits no betting probabilities.
    pub fn from_mass_function(mass: &MassFunction, digits: u32) -> Result<Self, MatchError> {
        let conflict = mass.conflict();
        let normalizer = 1.0 - conflict;
        if normalizer <= MASS_SUM_TOLERANCE {
            return Err(MatchError::TotalConflict { conflict });
        }

        let mut values = vec![0.0; mass.frame_len()];
        for (set, weight) in mass.focal_elements() {
            if set.is_empty() {
                continue;
            }
            let share = weight / set.count() as f64;
            for idx in set.iter() {
                values[idx] += share;
            }
        }
        for value in &mut values {
            *value = round_half_away_from_zero(*value / normalizer, digits);
        }
        Ok(Self { values })
    }

    /// Probability of one hypothesis handle.
    pub fn value(&self, idx: usize) -> f64 {
        self.values[idx]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
