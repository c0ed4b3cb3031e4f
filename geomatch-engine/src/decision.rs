//! Result rows and the thresholded decision rule.

use std::fmt;

use geomatch_core::Point;
use serde::Serialize;

use crate::frame::NA_LABEL;

/// Verdict of one result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The accepted match.
    #[serde(rename = "true")]
    Match,
    /// Rejected: some other hypothesis won.
    #[serde(rename = "false")]
    NonMatch,
    /// No hypothesis separated itself; the decision is deferred.
    #[serde(rename = "indecisive")]
    Indecisive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "true"),
            Self::NonMatch => write!(f, "false"),
            Self::Indecisive => write!(f, "indecisive"),
        }
    }
}

/// One criterion's raw distance for a row. `value` is `None` when the
/// criterion was bypassed (name fallback) or the row is the synthetic NA
/// row.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceRecord {
    pub name: String,
    pub value: Option<f64>,
}

/// Reference and candidate centroids, for downstream link export.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinkGeometry {
    pub reference: Point,
    pub candidate: Point,
}

/// One output record per (reference, hypothesis) pair.
///
/// Created once per matching call and never mutated after the decision
/// phase; ownership passes to the caller with the returned list.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResultRow {
    pub reference_id: String,
    pub reference_name: Option<String>,
    /// Candidate identifier, or [`NA_LABEL`] on the synthetic no-match row.
    pub candidate_id: String,
    pub candidate_name: Option<String>,
    /// Per-criterion distances, in criterion order.
    pub distances: Vec<DistanceRecord>,
    /// Rounded pignistic probability of this hypothesis.
    pub probability: f64,
    /// |second − max| probability gap, attached when a decision was reached.
    pub gap: Option<f64>,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkGeometry>,
}

impl MatchResultRow {
    /// Whether this is the synthetic no-match row.
    pub fn is_na(&self) -> bool {
        self.candidate_id == NA_LABEL
    }

    /// Whether this row is an accepted match with a real candidate.
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Match && !self.is_na()
    }
}

/// Apply the indecision rule to a full row list (NA row plus one row per
/// candidate, probabilities already rounded).
///
/// 1. If two or more hypotheses tie for the maximum probability, every
///    row is `Indecisive`.
/// 2. Otherwise, if the gap to the runner-up is below `threshold`, every
///    row is `Indecisive`.
/// 3. Otherwise the winner's row is `Match`, the rest `NonMatch`, and the
///    gap is attached to every row.
pub fn decide(rows: &mut [MatchResultRow], threshold: f64) {
    debug_assert!(rows.len() >= 2, "NA row plus at least one candidate");

    let mut max = f64::NEG_INFINITY;
    let mut id_max = String::new();
    let mut tie_count = 0usize;
    for row in rows.iter() {
        if row.probability > max {
            max = row.probability;
            id_max = row.candidate_id.clone();
            tie_count = 1;
        } else if row.probability == max {
            tie_count += 1;
        }
    }

    // Second-highest including duplicates of the maximum.
    let mut sorted: Vec<f64> = rows.iter().map(|row| row.probability).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let second = sorted[sorted.len() - 2];
    let gap = (second - max).abs();

    if tie_count > 1 || gap < threshold {
        for row in rows.iter_mut() {
            row.verdict = Verdict::Indecisive;
            row.gap = None;
        }
        return;
    }

    for row in rows.iter_mut() {
        row.gap = Some(gap);
        row.verdict = if row.candidate_id == id_max {
            Verdict::Match
        } else {
            Verdict::NonMatch
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(candidate_id: &str, probability: f64) -> MatchResultRow {
        MatchResultRow {
            reference_id: "ref".to_string(),
            reference_name: Some("Reference".to_string()),
            candidate_id: candidate_id.to_string(),
            candidate_name: None,
            distances: Vec::new(),
            probability,
            gap: None,
            verdict: Verdict::Indecisive,
            link: None,
        }
    }

    #[test]
    fn test_clear_winner_is_accepted() {
        let mut rows = vec![row(NA_LABEL, 0.1), row("a", 0.7), row("b", 0.2)];
        decide(&mut rows, 0.2);
        assert_eq!(rows[1].verdict, Verdict::Match);
        assert_eq!(rows[0].verdict, Verdict::NonMatch);
        assert_eq!(rows[2].verdict, Verdict::NonMatch);
        for r in &rows {
            assert_eq!(r.gap, Some(0.5));
        }
    }

    #[test]
    fn test_gap_below_threshold_defers() {
        let mut rows = vec![row(NA_LABEL, 0.2), row("a", 0.45), row("b", 0.35)];
        decide(&mut rows, 0.2);
        for r in &rows {
            assert_eq!(r.verdict, Verdict::Indecisive);
            assert_eq!(r.gap, None);
        }
    }

    #[test]
    fn test_tie_for_maximum_defers_regardless_of_threshold() {
        let mut rows = vec![row(NA_LABEL, 0.0), row("a", 0.5), row("b", 0.5)];
        decide(&mut rows, 0.2);
        for r in &rows {
            assert_eq!(r.verdict, Verdict::Indecisive);
        }
    }

    #[test]
    fn test_na_can_win() {
        let mut rows = vec![row(NA_LABEL, 0.8), row("a", 0.1), row("b", 0.1)];
        decide(&mut rows, 0.2);
        assert_eq!(rows[0].verdict, Verdict::Match);
        assert!(!rows[0].is_accepted(), "NA winning is not an accepted match");
        assert_eq!(rows[1].verdict, Verdict::NonMatch);
    }

    #[test]
    fn test_gap_exactly_at_threshold_is_decided() {
        // The rule defers strictly below the threshold.
        let mut rows = vec![row(NA_LABEL, 0.1), row("a", 0.55), row("b", 0.35)];
        decide(&mut rows, 0.2);
        assert_eq!(rows[1].verdict, Verdict::Match);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Match.to_string(), "true");
        assert_eq!(Verdict::NonMatch.to_string(), "false");
        assert_eq!(Verdict::Indecisive.to_string(), "indecisive");
    }
}
