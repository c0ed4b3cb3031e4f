//! Mass functions over the discernment frame.

use geomatch_core::types::mass_triple::MASS_SUM_TOLERANCE;
use geomatch_core::{MassTriple, MatchError};
use rustc_hash::FxHashMap;

use crate::frame::{DiscernmentFrame, FocalSet};

/// An assignment of belief weight to focal elements of one frame.
///
/// Directly-built functions (one per criterion × candidate) carry exactly
/// the three canonical focal elements; combined functions carry arbitrary
/// intersections, including possibly the empty set (the conflict).
#[derive(Debug, Clone)]
pub struct MassFunction {
    frame_len: usize,
    focal: FxHashMap<FocalSet, f64>,
}

impl MassFunction {
    pub fn new(frame_len: usize) -> Self {
        Self {
            frame_len,
            focal: FxHashMap::default(),
        }
    }

    /// Accumulate weight on a focal element. Zero weights are not stored.
    pub fn add(&mut self, set: FocalSet, weight: f64) {
        debug_assert_eq!(set.frame_len(), self.frame_len);
        if weight != 0.0 {
            *self.focal.entry(set).or_insert(0.0) += weight;
        }
    }

    /// Weight on one focal element (0 when unassigned).
    pub fn weight(&self, set: &FocalSet) -> f64 {
        self.focal.get(set).copied().unwrap_or(0.0)
    }

    /// Weight on the empty set: the irreconcilable part of combined evidence.
    pub fn conflict(&self) -> f64 {
        self.weight(&FocalSet::empty(self.frame_len))
    }

    pub fn focal_elements(&self) -> impl Iterator<Item = (&FocalSet, f64)> {
        self.focal.iter().map(|(set, weight)| (set, *weight))
    }

    /// Number of focal elements with non-zero weight.
    pub fn focal_count(&self) -> usize {
        self.focal.len()
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Total weight across focal elements, the empty set included.
    pub fn total(&self) -> f64 {
        self.focal.values().sum()
    }

    /// Validate the sum-to-one invariant. Failure indicates a combination
    /// bug or corrupted upstream evidence, not a recoverable condition.
    pub fn check(&self) -> Result<(), MatchError> {
        let total = self.total();
        if (total - 1.0).abs() > MASS_SUM_TOLERANCE {
            return Err(MatchError::MassFunctionInvariant { total });
        }
        Ok(())
    }
}

/// Package one criterion's mass triple for one candidate as a mass
/// function over the frame's canonical focal elements.
pub fn criterion_mass_function(
    frame: &DiscernmentFrame,
    candidate: usize,
    triple: &MassTriple,
) -> MassFunction {
    let mut mass = MassFunction::new(frame.len());
    mass.add(frame.match_set(candidate), triple.matched);
    mass.add(frame.non_match_set(candidate), triple.unmatched);
    mass.add(frame.ignorance(), triple.ignorance);
    mass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DiscernmentFrame {
        DiscernmentFrame::new(vec!["x".to_string(), "y".to_string()]).unwrap()
    }

    #[test]
    fn test_criterion_mass_function_has_three_focal_elements() {
        let frame = frame();
        let mass = criterion_mass_function(&frame, 0, &MassTriple::new(0.6, 0.3, 0.1));
        assert_eq!(mass.focal_count(), 3);
        assert_eq!(mass.weight(&frame.match_set(0)), 0.6);
        assert_eq!(mass.weight(&frame.non_match_set(0)), 0.3);
        assert_eq!(mass.weight(&frame.ignorance()), 0.1);
        mass.check().unwrap();
    }

    #[test]
    fn test_zero_weights_are_not_stored() {
        let frame = frame();
        let mass = criterion_mass_function(&frame, 0, &MassTriple::ignorant());
        assert_eq!(mass.focal_count(), 1);
        mass.check().unwrap();
    }

    #[test]
    fn test_add_accumulates_on_the_same_set() {
        let frame = frame();
        let mut mass = MassFunction::new(frame.len());
        mass.add(frame.ignorance(), 0.4);
        mass.add(frame.ignorance(), 0.6);
        assert_eq!(mass.focal_count(), 1);
        assert!((mass.weight(&frame.ignorance()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_check_rejects_bad_total() {
        let frame = frame();
        let mut mass = MassFunction::new(frame.len());
        mass.add(frame.ignorance(), 0.8);
        assert!(matches!(
            mass.check(),
            Err(MatchError::MassFunctionInvariant { total }) if (total - 0.8).abs() < 1e-12
        ));
    }

    #[test]
    fn test_conflict_reads_empty_set_weight() {
        let frame = frame();
        let mut mass = MassFunction::new(frame.len());
        mass.add(FocalSet::empty(frame.len()), 0.25);
        mass.add(frame.ignorance(), 0.75);
        assert_eq!(mass.conflict(), 0.25);
        mass.check().unwrap();
    }
}
