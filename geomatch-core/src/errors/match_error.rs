//! Errors raised by the evidence-fusion and decision pipeline.
//!
//! All of these are fatal for the current matching call; the engine never
//! retries or suppresses partial results, because the decision is only
//! valid over the complete evidence set. Callers looping over reference
//! entities handle each call's error independently.

use super::error_code::{self, GeomatchErrorCode};

/// Errors from one matching call.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A criterion produced masses that are negative or do not sum to 1.
    #[error(
        "criterion {criterion} produced an invalid mass triple {masses:?} \
         (sum = {sum}) for candidate {candidate}"
    )]
    InvalidMassTriple {
        criterion: String,
        candidate: String,
        masses: [f64; 3],
        sum: f64,
    },

    /// A combined mass function fails its sum-to-one check — an internal
    /// bug in combination or corrupted upstream evidence.
    #[error("combined mass function weights sum to {total}, expected 1")]
    MassFunctionInvariant { total: f64 },

    /// Combination invoked with zero mass functions (caller defect,
    /// e.g. no criteria configured).
    #[error("mass combination requires at least one mass function")]
    EmptyInput,

    /// A required identifier attribute is absent.
    #[error("required attribute {attribute:?} is absent on the {entity} feature")]
    MissingAttribute { attribute: String, entity: String },

    /// The candidate list is empty; the decision rule is undefined with a
    /// lone NA hypothesis.
    #[error("no candidates supplied for matching")]
    NoCandidates,

    /// Two candidates share an identifier (or a candidate collides with
    /// the reserved NA label), making hypotheses ambiguous.
    #[error("duplicate candidate identifier {id:?} in the discernment frame")]
    DuplicateCandidate { id: String },

    /// All combined mass landed on the empty set; the pignistic transform
    /// is undefined.
    #[error("evidence is fully contradictory (conflict = {conflict}); no probability can be derived")]
    TotalConflict { conflict: f64 },

    /// Configuration could not be parsed.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl GeomatchErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMassTriple { .. } => error_code::INVALID_MASS_TRIPLE,
            Self::MassFunctionInvariant { .. } => error_code::MASS_FUNCTION_INVARIANT,
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::MissingAttribute { .. } => error_code::MISSING_ATTRIBUTE,
            Self::NoCandidates => error_code::NO_CANDIDATES,
            Self::DuplicateCandidate { .. } => error_code::DUPLICATE_CANDIDATE,
            Self::TotalConflict { .. } => error_code::TOTAL_CONFLICT,
            Self::Config { .. } => error_code::CONFIG_ERROR,
        }
    }
}
