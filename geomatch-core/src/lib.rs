//! # geomatch-core
//!
//! Foundation crate for the geomatch evidence-fusion engine.
//! Defines the feature/attribute model, collaborator traits, errors,
//! config, and tracing setup. The engine crate depends on this.

pub mod config;
pub mod errors;
pub mod schema;
pub mod trace;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MatchConfig;
pub use errors::error_code::GeomatchErrorCode;
pub use errors::MatchError;
pub use schema::EntitySchema;
pub use traits::criterion::{CriterionOutcome, DistanceKind, MatchCriterion};
pub use types::attributes::{AttributeValue, Feature, Point};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::mass_triple::MassTriple;
