//! Edit session: the working set as a temporary text file, opened in the
//! user's editor and read back as candidate names.
//!
//! The session owns its temporary file. It is removed when the session is
//! closed or dropped, so every exit path (including `?` propagation and
//! panics) releases it. A SIGINT/SIGTERM while the editor is open surfaces
//! as [`RenameError::Interrupted`] and unwinds the same way; one at any other
//! moment is handled by [`crate::infra::interrupt`]. Removal is best-effort;
//! a file that is already gone is not a problem.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::TempPath;
use tracing::{debug, instrument, warn};

use crate::core::pathset::WorkingSet;
use crate::error::{RenameError, Result};
use crate::infra::interrupt::{self, EditorWait, TrackedBuffer};

/// How the editor process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorExit {
    /// `None` when terminated by a signal
    pub code: Option<i32>,
}

impl EditorExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches an editor on a file and blocks until it exits.
pub trait Editor {
    fn launch(&self, command: &str, args: &[String], file: &Path) -> Result<EditorExit>;
}

/// Spawns the editor as a child process inheriting the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEditor;

impl Editor for ProcessEditor {
    fn launch(&self, command: &str, args: &[String], file: &Path) -> Result<EditorExit> {
        let status = Command::new(command)
            .args(args)
            .arg(file)
            .status()
            .map_err(|source| RenameError::EditorLaunch {
                command: command.to_string(),
                source,
            })?;

        Ok(EditorExit {
            code: status.code(),
        })
    }
}

/// Trimmed lines of the edited buffer, in order.
pub type CandidateSet = Vec<String>;

/// One temporary edit buffer.
#[derive(Debug)]
pub struct EditSession {
    // Unregistered before the file goes away
    tracked: TrackedBuffer,
    path: TempPath,
}

impl EditSession {
    /// Create a fresh temporary file holding the working set, one path per line.
    #[instrument(skip_all, fields(entries = set.len()))]
    pub fn create(set: &WorkingSet) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("irename_")
            .tempfile()
            .map_err(|source| RenameError::Session {
                path: std::env::temp_dir(),
                source,
            })?;

        file.write_all(set.to_buffer().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| RenameError::Session {
                path: file.path().to_path_buf(),
                source,
            })?;

        // Close our handle; the editor gets the file to itself
        let path = file.into_temp_path();
        let session = Self {
            tracked: TrackedBuffer::new(&path),
            path,
        };

        debug!(path = %session.path().display(), "edit buffer written");
        Ok(session)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the editor on the buffer. A non-zero exit is logged, not fatal;
    /// an interrupt while it runs is.
    #[instrument(skip(self, editor, args))]
    pub fn edit<E: Editor + ?Sized>(
        &self,
        editor: &E,
        command: &str,
        args: &[String],
    ) -> Result<EditorExit> {
        let exit = {
            let _wait = EditorWait::begin();
            editor.launch(command, args, self.path())?
        };

        if interrupt::take_interrupted() {
            return Err(RenameError::Interrupted);
        }

        if !exit.success() {
            warn!(code = ?exit.code, "editor exited unsuccessfully, reading buffer as-is");
        }

        Ok(exit)
    }

    /// Re-read the buffer; one trimmed candidate per line.
    pub fn read_candidates(&self) -> Result<CandidateSet> {
        let content = fs::read_to_string(self.path()).map_err(|e| self.io_error(e))?;
        Ok(parse_candidates(&content))
    }

    /// Remove the buffer now. Failure is ignored.
    pub fn close(self) {
        let Self { tracked, path } = self;
        drop(tracked);

        let shown = path.display().to_string();
        if let Err(e) = path.close() {
            debug!(path = %shown, error = %e, "temporary file already gone");
        }
    }

    fn io_error(&self, source: std::io::Error) -> RenameError {
        RenameError::Session {
            path: self.path().to_path_buf(),
            source,
        }
    }
}

/// Split on `\n` / `\r\n` and trim each line.
pub fn parse_candidates(content: &str) -> CandidateSet {
    content.lines().map(|l| l.trim().to_string()).collect()
}
