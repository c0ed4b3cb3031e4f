//! The frame of discernment and its focal-element bitsets.
//!
//! Hypotheses are integer handles into the frame: candidate indices in
//! input order, then the NA (no-match) hypothesis last. Focal elements
//! are bitsets over those handles, so the intersections the conjunctive
//! rule needs are word-ANDs rather than repeated membership tests.

use geomatch_core::MatchError;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Label of the reserved no-match hypothesis.
pub const NA_LABEL: &str = "NA";

const WORD_BITS: usize = 64;

/// A subset of the frame's hypotheses, as a fixed-width bitset.
///
/// All sets built from one frame share the same width; intersecting sets
/// from different frames is a logic error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocalSet {
    len: usize,
    words: SmallVec<[u64; 2]>,
}

impl FocalSet {
    /// The empty set over a frame of `len` hypotheses.
    pub fn empty(len: usize) -> Self {
        let word_count = len.div_ceil(WORD_BITS);
        Self {
            len,
            words: SmallVec::from_elem(0, word_count),
        }
    }

    /// The universal set (every hypothesis) over a frame of `len` hypotheses.
    pub fn full(len: usize) -> Self {
        let mut set = Self::empty(len);
        for idx in 0..len {
            set.insert(idx);
        }
        set
    }

    /// A one-hypothesis set.
    pub fn singleton(len: usize, idx: usize) -> Self {
        let mut set = Self::empty(len);
        set.insert(idx);
        set
    }

    pub fn insert(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx / WORD_BITS] |= 1 << (idx % WORD_BITS);
    }

    pub fn remove(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx / WORD_BITS] &= !(1 << (idx % WORD_BITS));
    }

    pub fn contains(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        self.words[idx / WORD_BITS] & (1 << (idx % WORD_BITS)) != 0
    }

    /// Word-wise AND with a set over the same frame.
    pub fn intersection(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len, other.len);
        Self {
            len: self.len,
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(a, b)| a & b)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Number of hypotheses in the set.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Width of the underlying frame.
    pub fn frame_len(&self) -> usize {
        self.len
    }

    /// Hypothesis indices contained in the set, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |idx| self.contains(*idx))
    }
}

/// The exhaustive hypothesis universe for one matching call: every
/// candidate identifier plus NA. Immutable once built.
#[derive(Debug, Clone)]
pub struct DiscernmentFrame {
    labels: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl DiscernmentFrame {
    /// Build the frame from candidate identifiers in input order.
    ///
    /// NA is always appended; duplicate identifiers (or a candidate using
    /// the reserved NA label) are rejected. An empty candidate list still
    /// yields the NA-only frame; refusing to *decide* over it is the
    /// matcher's job.
    pub fn new(candidate_ids: Vec<String>) -> Result<Self, MatchError> {
        let mut labels = candidate_ids;
        labels.push(NA_LABEL.to_string());

        let mut index = FxHashMap::default();
        for (idx, id) in labels.iter().enumerate() {
            if index.insert(id.clone(), idx).is_some() {
                return Err(MatchError::DuplicateCandidate { id: id.clone() });
            }
        }
        Ok(Self { labels, index })
    }

    /// Total hypothesis count, NA included. Never zero: NA is always present.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Number of candidate hypotheses (NA excluded).
    pub fn candidate_count(&self) -> usize {
        self.labels.len() - 1
    }

    /// Handle of the NA hypothesis.
    pub fn na_index(&self) -> usize {
        self.labels.len() - 1
    }

    /// Label of a hypothesis handle.
    pub fn label(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    /// Handle of an identifier, if it is in the frame.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// `Match(c)` = {c}.
    pub fn match_set(&self, candidate: usize) -> FocalSet {
        debug_assert!(candidate < self.candidate_count());
        FocalSet::singleton(self.len(), candidate)
    }

    /// `NonMatch(c)` = (all candidates ≠ c) ∪ {NA}.
    pub fn non_match_set(&self, candidate: usize) -> FocalSet {
        debug_assert!(candidate < self.candidate_count());
        let mut set = FocalSet::full(self.len());
        set.remove(candidate);
        set
    }

    /// `Ignorance` = the whole frame.
    pub fn ignorance(&self) -> FocalSet {
        FocalSet::full(self.len())
    }

    /// Singleton set for any hypothesis handle, NA included.
    pub fn singleton(&self, idx: usize) -> FocalSet {
        debug_assert!(idx < self.len());
        FocalSet::singleton(self.len(), idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_frame_appends_na_last() {
        let frame = DiscernmentFrame::new(ids(&["a", "b"])).unwrap();
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.candidate_count(), 2);
        assert_eq!(frame.label(frame.na_index()), NA_LABEL);
        assert_eq!(frame.index_of("b"), Some(1));
    }

    #[test]
    fn test_duplicate_candidate_rejected() {
        let err = DiscernmentFrame::new(ids(&["a", "b", "a"]));
        assert!(matches!(err, Err(MatchError::DuplicateCandidate { id }) if id == "a"));
    }

    #[test]
    fn test_candidate_named_na_rejected() {
        let err = DiscernmentFrame::new(ids(&["a", "NA"]));
        assert!(matches!(err, Err(MatchError::DuplicateCandidate { id }) if id == "NA"));
    }

    #[test]
    fn test_zero_candidates_yield_na_only_frame() {
        let frame = DiscernmentFrame::new(Vec::new()).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.candidate_count(), 0);
        assert_eq!(frame.label(0), NA_LABEL);
    }

    #[test]
    fn test_canonical_sets_partition() {
        let frame = DiscernmentFrame::new(ids(&["a", "b", "c"])).unwrap();
        let matched = frame.match_set(1);
        let unmatched = frame.non_match_set(1);

        // Match(c) and NonMatch(c) are disjoint and together cover the frame.
        assert!(matched.intersection(&unmatched).is_empty());
        assert_eq!(matched.count() + unmatched.count(), frame.len());
        assert!(unmatched.contains(frame.na_index()));
        assert!(!unmatched.contains(1));

        let ignorance = frame.ignorance();
        assert_eq!(ignorance.count(), frame.len());
    }

    #[test]
    fn test_focal_set_over_word_boundary() {
        // Frames larger than one bitset word still intersect correctly.
        let len = 130;
        let full = FocalSet::full(len);
        let single = FocalSet::singleton(len, 129);
        let inter = full.intersection(&single);
        assert_eq!(inter.count(), 1);
        assert!(inter.contains(129));
    }

    #[test]
    fn test_focal_set_iter() {
        let mut set = FocalSet::empty(5);
        set.insert(0);
        set.insert(3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3]);
    }
}
