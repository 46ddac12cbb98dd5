//! Error taxonomy for a rename session.
//!
//! Every variant is fatal. Declining a prompt is not an error and never
//! shows up here.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum RenameError {
    /// Config file present but unusable
    #[error("{0}")]
    #[diagnostic(
        code(irename::config),
        help("the config file needs an [irename] section with editor, editor_arguments, force, interactive or verbose keys")
    )]
    Config(String),

    /// Nothing to rename after defaulting
    #[error("can't find any files")]
    #[diagnostic(code(irename::empty_set))]
    EmptySet,

    /// Edited buffer lost or gained lines
    #[error("number of lines does not match: expected {expected}, found {actual}")]
    #[diagnostic(
        code(irename::cardinality),
        help("keep exactly one line per file; nothing was renamed")
    )]
    CardinalityMismatch { expected: usize, actual: usize },

    /// Editor process could not be spawned
    #[error("failed to launch editor `{command}`")]
    #[diagnostic(
        code(irename::editor),
        help("set --editor, the `editor` key in ~/.irename.rc, or $EDITOR")
    )]
    EditorLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Temporary buffer could not be written or read back
    #[error("edit buffer {path}")]
    #[diagnostic(code(irename::session))]
    Session {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A move or remove failed mid-batch
    #[error("failed to {op} {path}")]
    #[diagnostic(
        code(irename::filesystem),
        help("renames before this one have already been applied")
    )]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Progress output could not be written (e.g. closed pipe)
    #[error("failed to write to standard output")]
    #[diagnostic(code(irename::output))]
    Output(#[source] io::Error),

    /// SIGINT/SIGTERM arrived while the editor was open
    #[error("interrupted, nothing was renamed")]
    #[diagnostic(code(irename::interrupted))]
    Interrupted,
}

impl RenameError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RenameError::EmptySet => 2,
            RenameError::Interrupted => 130,
            _ => 1,
        }
    }
}

pub type Result<T, E = RenameError> = std::result::Result<T, E>;
