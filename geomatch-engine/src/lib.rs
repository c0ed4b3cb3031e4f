//! # geomatch-engine
//!
//! Evidence-fusion and decision engine for geographic entity matching.
//! Builds the discernment frame from a candidate set, derives one mass
//! function per (criterion, candidate) pair, fuses everything with the
//! unnormalized conjunctive rule, transforms the result into pignistic
//! probabilities, and applies the thresholded decision rule.

pub mod combine;
pub mod decision;
pub mod export;
pub mod frame;
pub mod mass;
pub mod matcher;
pub mod pignistic;

pub use decision::{DistanceRecord, LinkGeometry, MatchResultRow, Verdict};
pub use frame::{DiscernmentFrame, FocalSet, NA_LABEL};
pub use mass::MassFunction;
pub use matcher::FeatureMatcher;
pub use pignistic::PignisticDistribution;
