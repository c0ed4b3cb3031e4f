//! The criterion collaborator trait.
//!
//! Criteria own their similarity math; the engine only consumes the mass
//! triple and the raw distance. One `evaluate` call scopes the criterion
//! to a single (reference, candidate) comparison.

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::types::attributes::Feature;
use crate::types::mass_triple::MassTriple;

/// The family of distance a criterion is built on.
///
/// The engine treats [`DistanceKind::NameSimilarity`] specially: when the
/// reference feature carries no name attribute, the criterion is bypassed
/// and total ignorance is assumed, because name similarity is undefined
/// without a name to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceKind {
    /// Toponym / name similarity (Samal-style in the original criteria).
    NameSimilarity,
    /// Geometric distance between the features.
    Spatial,
    /// Semantic distance between feature natures/classes.
    Semantic,
    Other,
}

/// What one criterion reports for one comparison.
#[derive(Debug, Clone, Copy)]
pub struct CriterionOutcome {
    /// Belief masses over (match, non-match, ignorance).
    pub masses: MassTriple,
    /// The raw distance the masses were derived from, kept for result rows.
    pub distance: f64,
}

/// A matching criterion.
///
/// `Send + Sync` so the engine can evaluate all (criterion, candidate)
/// pairs on the rayon pool; evaluation must be a pure function of its
/// arguments.
pub trait MatchCriterion: Send + Sync {
    /// Criterion name, used in logs and error context.
    fn name(&self) -> &str;

    /// Name of the underlying distance, attached to result rows.
    fn distance_name(&self) -> &str;

    /// The distance family this criterion belongs to.
    fn distance_kind(&self) -> DistanceKind;

    /// Compare one reference feature with one candidate.
    fn evaluate(&self, reference: &Feature, candidate: &Feature)
        -> Result<CriterionOutcome, MatchError>;
}
