//! Working set construction: explicit paths or the default wildcard.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::error::RenameError;
use crate::infra::walk::EntryWalker;

/// Ordered source paths for one session. Sorted by path string; duplicates
/// are kept in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    entries: Vec<String>,
}

impl WorkingSet {
    /// Sort `entries` and wrap them. Fails on an empty list.
    pub fn new(mut entries: Vec<String>) -> Result<Self, RenameError> {
        if entries.is_empty() {
            return Err(RenameError::EmptySet);
        }
        entries.sort();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-joined edit buffer, no trailing newline.
    pub fn to_buffer(&self) -> String {
        self.entries.join("\n")
    }
}

/// Use `explicit` when given, otherwise every visible entry under `root`.
#[instrument(skip(explicit), fields(given = explicit.len()))]
pub fn build(explicit: Vec<String>, root: &Path) -> Result<WorkingSet> {
    let entries = if explicit.is_empty() {
        let walker = EntryWalker::new()?;
        walker
            .list_entries(root)
            .into_iter()
            .map(|p| p.into_string())
            .collect()
    } else {
        explicit
    };

    debug!(count = entries.len(), "collected working set");
    Ok(WorkingSet::new(entries)?)
}
