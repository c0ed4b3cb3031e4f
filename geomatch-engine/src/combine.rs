//! Unnormalized conjunctive (Dempster-style) combination.
//!
//! The combined mass of a focal element A is the sum over all pairs
//! (B, C) with B ∩ C = A of m1(B)·m2(C). Pairs with an empty intersection
//! are kept: their mass accumulates on ∅ as the conflict rather than
//! being redistributed.

use geomatch_core::MatchError;

use crate::mass::MassFunction;

/// Combine a non-empty collection of mass functions over the same frame.
///
/// The rule is associative and commutative, so the fold order only moves
/// floating-point rounding; callers must not rely on input ordering for
/// anything else.
pub fn combine<'a, I>(functions: I) -> Result<MassFunction, MatchError>
where
    I: IntoIterator<Item = &'a MassFunction>,
{
    let mut iter = functions.into_iter();
    let first = iter.next().ok_or(MatchError::EmptyInput)?;
    let mut combined = first.clone();
    for function in iter {
        combined = combine_pair(&combined, function);
    }
    Ok(combined)
}

fn combine_pair(left: &MassFunction, right: &MassFunction) -> MassFunction {
    debug_assert_eq!(left.frame_len(), right.frame_len());
    let mut out = MassFunction::new(left.frame_len());
    for (left_set, left_weight) in left.focal_elements() {
        for (right_set, right_weight) in right.focal_elements() {
            out.add(left_set.intersection(right_set), left_weight * right_weight);
        }
    }
    out
}
