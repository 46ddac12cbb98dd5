//! Filepath: src/infra/walk.rs
//! Default file set enumeration: the shell-style `./*` of a directory.
//! - Immediate children only (files and directories)
//! - Dotfiles are not matched by `*`, just like a shell glob
//! - No .gitignore handling; every visible entry is a rename candidate
//! - Non-UTF-8 names are skipped (the edit buffer is text)
//!
//! Backed by ripgrep's `ignore` crate and `globset`.

use std::path::Path;

use anyhow::Result;
use camino::Utf8PathBuf;
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use tracing::warn;

/// Wildcard matched against each entry name
const DEFAULT_PATTERN: &str = "*";

/// Lists the visible entries of one directory, like a shell's `*`.
pub struct EntryWalker
{
    /// Compiled wildcard, matched against the bare entry name
    matcher: GlobMatcher,
}

impl EntryWalker
{
    pub fn new() -> Result<Self>
    {
        let glob = Glob::new(DEFAULT_PATTERN)?;

        Ok(Self { matcher: glob.compile_matcher() })
    }

    /// Internal: a depth-1 WalkBuilder with every ignore filter disabled.
    fn build_walk(
        &self,
        root: &Path,
    ) -> WalkBuilder
    {
        let mut b = WalkBuilder::new(root);

        // Plain listing: no .gitignore/.ignore/parent rules
        b.standard_filters(false);

        // hidden(true) skips dotfiles, matching the shell glob
        b.hidden(true);

        b.follow_links(false);
        b.max_depth(Some(1));

        b
    }

    /// List matching entries of `root` as `root/name` strings.
    /// Order follows the walker; callers sort.
    pub fn list_entries<P: AsRef<Path>>(
        &self,
        root: P,
    ) -> Vec<Utf8PathBuf>
    {
        let root_path = root.as_ref();
        let walker = self
            .build_walk(root_path)
            .build();

        walker
            // Drop entries with IO errors
            .filter_map(|res| res.ok())
            // Depth 0 is the root itself
            .filter(|entry| entry.depth() == 1)
            .filter(|entry| {
                self.matcher
                    .is_match(entry.file_name())
            })
            .filter_map(|entry| {
                let path = entry.into_path();
                match Utf8PathBuf::from_path_buf(path)
                {
                    Ok(p) => Some(p),
                    Err(raw) =>
                    {
                        warn!(path = %raw.display(), "skipping entry with non UTF-8 name");
                        None
                    }
                }
            })
            .collect()
    }
}
