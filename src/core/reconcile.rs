//! Rename reconciliation: decide, per pair, whether to skip, ask or rename.
//!
//! Pairs are processed strictly in order. For each one:
//! 1. unchanged names are skipped silently;
//! 2. without `force`, an existing destination triggers the overwrite
//!    prompt (default no);
//! 3. only if nothing was asked yet, `interactive` triggers the rename
//!    prompt (default yes);
//! 4. on agreement the rename runs, replacing a destination directory.
//!
//! At most one prompt is shown per pair and the overwrite prompt wins.
//! Filesystem failures abort the batch; earlier renames stay applied.

use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::core::mapping::RenamePair;
use crate::error::{RenameError, Result};
use crate::infra::config::PolicyConfig;
use crate::infra::fs_ops::FileSystem;
use crate::infra::prompt::Prompter;

/// What happened to one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Declined,
    Renamed {
        /// A prompt was answered for this pair
        prompted: bool,
        /// An existing destination directory was removed first
        replaced_dir: bool,
    },
}

/// Per-pair outcomes of a completed pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub entries: Vec<(RenamePair, Outcome)>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Renamed { .. }))
    }

    pub fn declined(&self) -> usize {
        self.count(|o| *o == Outcome::Declined)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == Outcome::Unchanged)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Applies rename pairs under a [`PolicyConfig`].
pub struct Reconciler<'a, F: ?Sized, P: ?Sized, W> {
    policy: &'a PolicyConfig,
    fs: &'a F,
    prompter: &'a mut P,
    /// Verbose progress lines
    out: W,
}

impl<'a, F, P, W> Reconciler<'a, F, P, W>
where
    F: FileSystem + ?Sized,
    P: Prompter + ?Sized,
    W: Write,
{
    pub fn new(policy: &'a PolicyConfig, fs: &'a F, prompter: &'a mut P, out: W) -> Self {
        Self {
            policy,
            fs,
            prompter,
            out,
        }
    }

    /// Reconcile every pair in order.
    #[instrument(skip_all, fields(pairs = pairs.len()))]
    pub fn run(&mut self, pairs: Vec<RenamePair>) -> Result<RenameReport> {
        let mut report = RenameReport::default();

        for pair in pairs {
            let outcome = self.apply(&pair)?;
            debug!(index = pair.index, ?outcome, "pair reconciled");
            report.entries.push((pair, outcome));
        }

        Ok(report)
    }

    /// Reconcile a single pair.
    pub fn apply(&mut self, pair: &RenamePair) -> Result<Outcome> {
        if pair.is_unchanged() {
            return Ok(Outcome::Unchanged);
        }

        let src = Path::new(&pair.original);
        let dst = Path::new(&pair.candidate);

        let mut agree = true;
        let mut asked = false;

        if !self.policy.force && self.fs.exists(dst) {
            agree = self.prompter.confirm(
                &format!("Path '{}' already exists. Overwrite? (y/N)", pair.candidate),
                false,
            );
            asked = true;
        }

        if !asked && self.policy.interactive {
            agree = self.prompter.confirm(
                &format!("Rename '{}' -> '{}'? (Y/n)", pair.original, pair.candidate),
                true,
            );
            asked = true;
        }

        if !agree {
            return Ok(Outcome::Declined);
        }

        if !asked && self.policy.verbose {
            writeln!(self.out, "Renaming {} -> {}", pair.original, pair.candidate)
                .map_err(RenameError::Output)?;
        }

        // A directory in the way goes first, unless it is the source itself
        let replaced_dir = self.fs.is_dir(dst) && !self.fs.same_entry(src, dst);
        if replaced_dir {
            self.fs
                .remove_dir_all(dst)
                .map_err(|source| RenameError::Filesystem {
                    op: "remove",
                    path: dst.to_path_buf(),
                    source,
                })?;
        }

        self.fs
            .rename(src, dst)
            .map_err(|source| RenameError::Filesystem {
                op: "rename",
                path: src.to_path_buf(),
                source,
            })?;

        Ok(Outcome::Renamed {
            prompted: asked,
            replaced_dir,
        })
    }
}
