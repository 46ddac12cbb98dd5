//! The rename pipeline: working set → edit session → mapping → reconciliation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{info, instrument};

use crate::cli::Cli;
use crate::core::mapping::pair_up;
use crate::core::pathset;
use crate::core::reconcile::{Reconciler, RenameReport};
use crate::core::session::{EditSession, Editor, ProcessEditor};
use crate::error::RenameError;
use crate::infra::config::{PolicyConfig, load_policy};
use crate::infra::fs_ops::{FileSystem, StdFileSystem};
use crate::infra::prompt::{LinePrompter, Prompter};

/// Collaborators a run talks to.
pub struct Io<'a, W: Write> {
    pub editor: &'a dyn Editor,
    pub fs: &'a dyn FileSystem,
    pub prompter: &'a mut dyn Prompter,
    pub out: W,
}

/// Entry point for the binary: real config, editor, filesystem and terminal.
pub fn run(cli: Cli) -> Result<RenameReport> {
    let policy = load_policy(&cli)?;

    let mut prompter = LinePrompter::stdio();
    let io = Io {
        editor: &ProcessEditor,
        fs: &StdFileSystem,
        prompter: &mut prompter,
        out: io::stdout(),
    };

    // Default entries come out as `./name`
    run_with(&policy, cli.files, Path::new("."), io)
}

/// Run one session with explicit collaborators. `root` is only consulted
/// when `files` is empty.
#[instrument(skip_all, fields(files = files.len()))]
pub fn run_with<W: Write>(
    policy: &PolicyConfig,
    files: Vec<String>,
    root: &Path,
    mut io: Io<'_, W>,
) -> Result<RenameReport> {
    let set = pathset::build(files, root)?;
    let editor_args = policy.editor_args()?;

    let session = EditSession::create(&set)?;
    if policy.verbose {
        writeln!(io.out, "Using temporary file {}", session.path().display())
            .map_err(RenameError::Output)?;
    }

    session.edit(io.editor, &policy.editor, &editor_args)?;
    let candidates = session.read_candidates()?;
    session.close();

    let pairs = pair_up(&set, candidates)?;
    let report = Reconciler::new(policy, io.fs, io.prompter, &mut io.out).run(pairs)?;

    info!(
        renamed = report.renamed(),
        declined = report.declined(),
        unchanged = report.unchanged(),
        "rename session finished"
    );
    Ok(report)
}
