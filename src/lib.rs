//! **irename** - Rename files in bulk by editing their names in your text editor
//!
//! The file list is written to a temporary buffer, opened in the user's editor,
//! and every edited line is applied as a rename of the file on the same line.

/// Command-line interface with clap integration
pub mod cli;

/// Error taxonomy and exit codes
pub mod error;

/// Core rename pipeline
pub mod core {
    /// Working set construction (explicit paths or the default wildcard)
    pub mod pathset;
    pub use pathset::WorkingSet;

    /// Temporary edit buffer and external editor launch
    pub mod session;
    pub use session::{EditSession, Editor, ProcessEditor};

    /// Positional pairing of originals with edited names
    pub mod mapping;
    pub use mapping::{RenamePair, pair_up};

    /// Per-pair skip/prompt/rename state machine
    pub mod reconcile;
    pub use reconcile::{Outcome, Reconciler, RenameReport};

    /// End-to-end session wiring
    pub mod workflow;
    pub use workflow::run;
}

/// Infrastructure - Configuration, filesystem, prompts and directory listing
pub mod infra {
    /// Three-tier policy resolution (defaults, ~/.irename.rc, CLI)
    pub mod config;
    pub use self::config::{PolicyConfig, load_policy};

    /// Signal handling that keeps the edit buffer from leaking
    pub mod interrupt;

    /// Filesystem primitives behind a trait
    pub mod fs_ops;
    pub use fs_ops::{FileSystem, StdFileSystem};

    /// Blocking yes/no prompts
    pub mod prompt;
    pub use prompt::{LinePrompter, Prompter};

    /// Shell-style listing of a directory
    pub mod walk;
    pub use walk::EntryWalker;
}

// Strategic re-exports for clean CLI interface
pub use cli::Cli;
pub use crate::core::run;
pub use error::RenameError;
pub use infra::PolicyConfig;
