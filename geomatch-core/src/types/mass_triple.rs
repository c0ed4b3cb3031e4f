//! The three-valued mass assignment a criterion reports for one comparison.

use crate::errors::MatchError;

/// Tolerance for the sum-to-one invariant on mass assignments.
pub const MASS_SUM_TOLERANCE: f64 = 1e-9;

/// Belief masses one criterion assigns to (match, non-match, ignorance)
/// for a single (reference, candidate) comparison.
///
/// The components must be non-negative and sum to 1; the engine validates
/// this and never renormalizes a bad triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassTriple {
    pub matched: f64,
    pub unmatched: f64,
    pub ignorance: f64,
}

impl MassTriple {
    pub fn new(matched: f64, unmatched: f64, ignorance: f64) -> Self {
        Self {
            matched,
            unmatched,
            ignorance,
        }
    }

    /// The total-ignorance triple (0, 0, 1), used when a criterion cannot
    /// be computed (e.g. name similarity without a reference name).
    pub fn ignorant() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn sum(&self) -> f64 {
        self.matched + self.unmatched + self.ignorance
    }

    /// Validate non-negativity and the sum-to-one invariant.
    ///
    /// `criterion` and `candidate` only provide error context.
    pub fn validate(&self, criterion: &str, candidate: &str) -> Result<(), MatchError> {
        let negative = self.matched < 0.0 || self.unmatched < 0.0 || self.ignorance < 0.0;
        if negative || (self.sum() - 1.0).abs() > MASS_SUM_TOLERANCE {
            return Err(MatchError::InvalidMassTriple {
                criterion: criterion.to_string(),
                candidate: candidate.to_string(),
                masses: [self.matched, self.unmatched, self.ignorance],
                sum: self.sum(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_triple_passes() {
        assert!(MassTriple::new(0.6, 0.3, 0.1).validate("crit", "c1").is_ok());
    }

    #[test]
    fn test_sum_within_tolerance_passes() {
        let t = MassTriple::new(0.6, 0.3, 0.1 + 5e-10);
        assert!(t.validate("crit", "c1").is_ok());
    }

    #[test]
    fn test_bad_sum_rejected() {
        let err = MassTriple::new(0.6, 0.3, 0.2).validate("crit", "c1");
        assert!(matches!(err, Err(MatchError::InvalidMassTriple { .. })));
    }

    #[test]
    fn test_negative_component_rejected() {
        let err = MassTriple::new(-0.1, 0.6, 0.5).validate("crit", "c1");
        assert!(matches!(err, Err(MatchError::InvalidMassTriple { .. })));
    }

    #[test]
    fn test_ignorant_triple() {
        let t = MassTriple::ignorant();
        assert_eq!(t, MassTriple::new(0.0, 0.0, 1.0));
        assert!(t.validate("name", "c1").is_ok());
    }
}
