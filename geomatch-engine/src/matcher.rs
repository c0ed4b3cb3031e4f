//! Pipeline orchestration for one matching call.

use geomatch_core::{
    DistanceKind, EntitySchema, Feature, MassTriple, MatchConfig, MatchCriterion, MatchError,
};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::combine::combine;
use crate::decision::{decide, DistanceRecord, LinkGeometry, MatchResultRow, Verdict};
use crate::frame::{DiscernmentFrame, NA_LABEL};
use crate::mass::{criterion_mass_function, MassFunction};
use crate::pignistic::{round_half_away_from_zero, PignisticDistribution};

/// Evidence produced for one (criterion, candidate) pair.
struct PairEvidence {
    mass: MassFunction,
    distance: Option<f64>,
}

/// Matches one reference feature against candidate sets by fusing all
/// configured criteria with Dempster-Shafer evidence theory.
///
/// One `match_features` call is synchronous and side-effect-free; the
/// matcher holds no per-call state, so independent calls (one per
/// reference feature) can run concurrently from a worker pool.
pub struct FeatureMatcher {
    config: MatchConfig,
    reference_schema: EntitySchema,
    candidate_schema: EntitySchema,
    criteria: Vec<Box<dyn MatchCriterion>>,
}

impl FeatureMatcher {
    pub fn new(
        reference_schema: EntitySchema,
        candidate_schema: EntitySchema,
        criteria: Vec<Box<dyn MatchCriterion>>,
    ) -> Self {
        Self::with_config(reference_schema, candidate_schema, criteria, MatchConfig::default())
    }

    pub fn with_config(
        reference_schema: EntitySchema,
        candidate_schema: EntitySchema,
        criteria: Vec<Box<dyn MatchCriterion>>,
        config: MatchConfig,
    ) -> Self {
        Self {
            config,
            reference_schema,
            candidate_schema,
            criteria,
        }
    }

    /// Decide which candidate (if any) is the same real-world object as
    /// the reference feature.
    ///
    /// Returns the ordered row list: NA row first, then one row per
    /// candidate in input order.
    pub fn match_features(
        &self,
        reference: &Feature,
        candidates: &[Feature],
    ) -> Result<Vec<MatchResultRow>, MatchError> {
        let reference_id = self.required_text(reference, &self.reference_schema.key, "reference")?;
        let reference_name = reference.text(&self.reference_schema.name);

        info!(
            reference = %reference_id,
            candidates = candidates.len(),
            "matching reference against candidate set"
        );

        if self.criteria.is_empty() {
            return Err(MatchError::EmptyInput);
        }
        if candidates.is_empty() {
            return Err(MatchError::NoCandidates);
        }

        let candidate_ids: Vec<String> = candidates
            .iter()
            .map(|candidate| self.required_text(candidate, &self.candidate_schema.key, "candidate"))
            .collect::<Result<_, _>>()?;
        let frame = DiscernmentFrame::new(candidate_ids)?;

        // One mass function per (criterion, candidate) pair, indexed by
        // integer handles. Pair evaluation has no cross-pair dependency.
        let table = self.build_mass_table(&frame, reference, reference_name.as_deref(), candidates)?;

        if self.config.effective_check_per_candidate() {
            // Intermediate per-candidate fusion across criteria; the
            // decision does not consume it, only its consistency check.
            for candidate in 0..frame.candidate_count() {
                combine(table.iter().map(|row| &row[candidate].mass))?.check()?;
            }
        }

        // Global fusion across every criterion and every candidate. This
        // is the combination the decision consumes; it needs the complete
        // evidence set, so it runs only after the whole table exists.
        let global = combine(table.iter().flatten().map(|pair| &pair.mass))?;
        global.check()?;
        info!(conflict = global.conflict(), "global combination complete");

        let digits = self.config.effective_rounding_digits();
        let distribution = PignisticDistribution::from_mass_function(&global, digits)?;
        for idx in 0..frame.len() {
            debug!(
                hypothesis = frame.label(idx),
                probability = distribution.value(idx),
                "pignistic probability"
            );
        }

        let mut rows = self.build_rows(
            &frame,
            &distribution,
            &table,
            reference,
            reference_id,
            reference_name,
            candidates,
        );
        decide(&mut rows, self.config.effective_indecision_threshold());
        Ok(rows)
    }

    fn build_mass_table(
        &self,
        frame: &DiscernmentFrame,
        reference: &Feature,
        reference_name: Option<&str>,
        candidates: &[Feature],
    ) -> Result<Vec<Vec<PairEvidence>>, MatchError> {
        let candidate_count = frame.candidate_count();
        let pairs: Vec<(usize, usize)> = (0..self.criteria.len())
            .flat_map(|criterion| (0..candidate_count).map(move |candidate| (criterion, candidate)))
            .collect();

        let evaluate = |&(criterion_idx, candidate_idx): &(usize, usize)| {
            self.evaluate_pair(frame, reference, reference_name, candidates, criterion_idx, candidate_idx)
        };

        let evaluated: Vec<PairEvidence> = if self.config.effective_parallel() {
            pairs.par_iter().map(evaluate).collect::<Result<_, _>>()?
        } else {
            pairs.iter().map(evaluate).collect::<Result<_, _>>()?
        };

        // Pairs were generated row-major, so chunking restores the
        // criterion-indexed table.
        let mut table = Vec::with_capacity(self.criteria.len());
        let mut remaining = evaluated;
        for _ in 0..self.criteria.len() {
            let rest = remaining.split_off(candidate_count);
            table.push(remaining);
            remaining = rest;
        }
        Ok(table)
    }

    fn evaluate_pair(
        &self,
        frame: &DiscernmentFrame,
        reference: &Feature,
        reference_name: Option<&str>,
        candidates: &[Feature],
        criterion_idx: usize,
        candidate_idx: usize,
    ) -> Result<PairEvidence, MatchError> {
        let criterion = &self.criteria[criterion_idx];
        let candidate_id = frame.label(candidate_idx);
        let digits = self.config.effective_rounding_digits();

        let (triple, distance) = if criterion.distance_kind() == DistanceKind::NameSimilarity
            && reference_name.is_none()
        {
            // Name similarity is undefined without a reference name:
            // bypass the criterion and assume total ignorance.
            debug!(
                criterion = criterion.name(),
                candidate = candidate_id,
                "reference has no name, forcing ignorance"
            );
            (MassTriple::ignorant(), None)
        } else {
            let outcome = criterion.evaluate(reference, &candidates[candidate_idx])?;
            outcome.masses.validate(criterion.name(), candidate_id)?;
            (
                outcome.masses,
                Some(round_half_away_from_zero(outcome.distance, digits)),
            )
        };

        debug!(
            criterion = criterion.name(),
            candidate = candidate_id,
            masses = ?[triple.matched, triple.unmatched, triple.ignorance],
            ?distance,
            "pair evidence"
        );
        Ok(PairEvidence {
            mass: criterion_mass_function(frame, candidate_idx, &triple),
            distance,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_rows(
        &self,
        frame: &DiscernmentFrame,
        distribution: &PignisticDistribution,
        table: &[Vec<PairEvidence>],
        reference: &Feature,
        reference_id: String,
        reference_name: Option<String>,
        candidates: &[Feature],
    ) -> Vec<MatchResultRow> {
        let mut rows = Vec::with_capacity(frame.len());

        // Synthetic NA row first; it carries no distances.
        rows.push(MatchResultRow {
            reference_id: reference_id.clone(),
            reference_name: reference_name.clone(),
            candidate_id: NA_LABEL.to_string(),
            candidate_name: None,
            distances: self
                .criteria
                .iter()
                .map(|criterion| DistanceRecord {
                    name: criterion.distance_name().to_string(),
                    value: None,
                })
                .collect(),
            probability: distribution.value(frame.na_index()),
            gap: None,
            verdict: Verdict::Indecisive,
            link: None,
        });

        for (candidate_idx, candidate) in candidates.iter().enumerate() {
            let link = reference
                .centroid()
                .zip(candidate.centroid())
                .map(|(reference, candidate)| LinkGeometry {
                    reference,
                    candidate,
                });
            rows.push(MatchResultRow {
                reference_id: reference_id.clone(),
                reference_name: reference_name.clone(),
                candidate_id: frame.label(candidate_idx).to_string(),
                candidate_name: candidate.text(&self.candidate_schema.name),
                distances: self
                    .criteria
                    .iter()
                    .enumerate()
                    .map(|(criterion_idx, criterion)| DistanceRecord {
                        name: criterion.distance_name().to_string(),
                        value: table[criterion_idx][candidate_idx].distance,
                    })
                    .collect(),
                probability: distribution.value(candidate_idx),
                gap: None,
                verdict: Verdict::Indecisive,
                link,
            });
        }
        rows
    }

    fn required_text(
        &self,
        feature: &Feature,
        attribute: &str,
        entity: &str,
    ) -> Result<String, MatchError> {
        feature
            .text(attribute)
            .ok_or_else(|| MatchError::MissingAttribute {
                attribute: attribute.to_string(),
                entity: entity.to_string(),
            })
    }
}
