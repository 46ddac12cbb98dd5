//! Filesystem primitives used by the reconciler.
//!
//! Kept behind a trait so reconciliation can be driven against an in-memory
//! tree in tests.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Existence checks, recursive removal and move.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Both paths name the same filesystem object.
    fn same_entry(&self, a: &Path, b: &Path) -> bool;

    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move `from` to `to`, replacing an existing file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks still occupy the name
        path.exists() || path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn same_entry(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from, to) {
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                debug!(from = %from.display(), to = %to.display(), "cross-device move, copying");
                copy_then_remove(from, to)
            }
            other => other,
        }
    }
}

/// Fallback for moves across mount points.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(from)?;

    if meta.file_type().is_symlink() {
        let target = fs::read_link(from)?;
        if to.symlink_metadata().is_ok() {
            fs::remove_file(to)?;
        }
        make_symlink(&target, to)?;
        return fs::remove_file(from);
    }

    if meta.is_dir() {
        copy_tree(from, to)?;
        return fs::remove_dir_all(from);
    }

    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let ty = entry.file_type()?;

        if ty.is_symlink() {
            make_symlink(&fs::read_link(&src)?, &dst)?;
        } else if ty.is_dir() {
            copy_tree(&src, &dst)?;
        } else {
            fs::copy(&src, &dst)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
