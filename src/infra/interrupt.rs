//! SIGINT / SIGTERM handling for a rename session.
//!
//! While the editor owns the terminal a signal only raises a flag; the
//! session checks it once the editor returns and unwinds, dropping the
//! buffer on the way out. Outside that window the handler removes the live
//! buffer itself and exits with [`INTERRUPT_EXIT`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Conventional 128 + SIGINT
pub const INTERRUPT_EXIT: i32 = 130;

static STATE: SignalState = SignalState::new();

/// What the handler should do with a signal.
#[derive(Debug, PartialEq, Eq)]
enum Disposition {
    /// Editor is running; picked up when it returns
    Deferred,
    /// Remove this buffer (if any) and exit
    Exit(Option<PathBuf>),
}

struct SignalState {
    interrupted: AtomicBool,
    editor_open: AtomicBool,
    buffer: Mutex<Option<PathBuf>>,
}

impl SignalState {
    const fn new() -> Self {
        Self {
            interrupted: AtomicBool::new(false),
            editor_open: AtomicBool::new(false),
            buffer: Mutex::new(None),
        }
    }

    fn on_signal(&self) -> Disposition {
        if self.editor_open.load(Ordering::SeqCst) {
            self.interrupted.store(true, Ordering::SeqCst);
            return Disposition::Deferred;
        }
        Disposition::Exit(self.set_buffer(None))
    }

    fn set_buffer(&self, path: Option<PathBuf>) -> Option<PathBuf> {
        let mut slot = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, path)
    }

    fn take_interrupted(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}

/// Install the process-wide handler. Call once, early in `main`.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        if let Disposition::Exit(buffer) = STATE.on_signal() {
            if let Some(path) = buffer {
                fs::remove_file(&path).ok();
            }
            std::process::exit(INTERRUPT_EXIT);
        }
    })
}

/// Registers the live edit buffer for removal on a signal; unregisters on drop.
#[derive(Debug)]
pub struct TrackedBuffer(());

impl TrackedBuffer {
    pub fn new(path: &Path) -> Self {
        STATE.set_buffer(Some(path.to_path_buf()));
        Self(())
    }
}

impl Drop for TrackedBuffer {
    fn drop(&mut self) {
        STATE.set_buffer(None);
    }
}

/// Marks the editor as running; signals are deferred until it is dropped.
#[derive(Debug)]
pub struct EditorWait(());

impl EditorWait {
    pub fn begin() -> Self {
        STATE.editor_open.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for EditorWait {
    fn drop(&mut self) {
        STATE.editor_open.store(false, Ordering::SeqCst);
    }
}

/// Whether a signal arrived since the last call; clears the flag.
pub fn take_interrupted() -> bool {
    let hit = STATE.take_interrupted();
    if hit {
        debug!("interrupt received while the editor was open");
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_during_editor_is_deferred() {
        let state = SignalState::new();
        state.editor_open.store(true, Ordering::SeqCst);
        state.set_buffer(Some(PathBuf::from("/tmp/irename_x")));

        assert_eq!(state.on_signal(), Disposition::Deferred);
        assert!(state.take_interrupted());
        assert!(!state.take_interrupted());
    }

    #[test]
    fn signal_outside_editor_hands_over_the_buffer() {
        let state = SignalState::new();
        state.set_buffer(Some(PathBuf::from("/tmp/irename_y")));

        assert_eq!(
            state.on_signal(),
            Disposition::Exit(Some(PathBuf::from("/tmp/irename_y")))
        );
        assert_eq!(state.on_signal(), Disposition::Exit(None));
        assert!(!state.take_interrupted());
    }
}
