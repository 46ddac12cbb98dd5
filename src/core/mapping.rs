//! Positional pairing of originals with edited names.

use crate::core::pathset::WorkingSet;
use crate::core::session::CandidateSet;
use crate::error::{RenameError, Result};

/// One original/candidate correspondence at position `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub index: usize,
    pub original: String,
    pub candidate: String,
}

impl RenamePair {
    /// Exact, case-sensitive string equality.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.candidate
    }
}

/// Zip `set` with `candidates`. Any line-count difference aborts the whole
/// batch; correspondences are never guessed.
pub fn pair_up(set: &WorkingSet, candidates: CandidateSet) -> Result<Vec<RenamePair>> {
    if set.len() != candidates.len() {
        return Err(RenameError::CardinalityMismatch {
            expected: set.len(),
            actual: candidates.len(),
        });
    }

    Ok(set
        .entries()
        .iter()
        .zip(candidates)
        .enumerate()
        .map(|(index, (original, candidate))| RenamePair {
            index,
            original: original.clone(),
            candidate,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> WorkingSet {
        WorkingSet::new(entries.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn lines(entries: &[&str]) -> CandidateSet {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_follow_working_set_order() {
        let pairs = pair_up(&set(&["a.txt", "b.txt"]), lines(&["a.txt", "c.txt"])).unwrap();

        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].is_unchanged());
        assert_eq!(pairs[1].index, 1);
        assert_eq!(pairs[1].original, "b.txt");
        assert_eq!(pairs[1].candidate, "c.txt");
    }

    #[test]
    fn deleted_line_is_rejected() {
        let err = pair_up(&set(&["a", "b", "c"]), lines(&["a", "c"])).unwrap_err();
        assert!(matches!(
            err,
            RenameError::CardinalityMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn added_line_is_rejected() {
        let err = pair_up(&set(&["a"]), lines(&["a", "b"])).unwrap_err();
        assert!(matches!(
            err,
            RenameError::CardinalityMismatch { expected: 1, actual: 2 }
        ));
    }

    #[test]
    fn case_only_change_is_a_change() {
        let pairs = pair_up(&set(&["Readme"]), lines(&["README"])).unwrap();
        assert!(!pairs[0].is_unchanged());
    }
}
