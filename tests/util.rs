//! Shared test utilities for CLI integration tests
//!
//! Builds an isolated working directory, a fake HOME, and a shell-script
//! "editor" that rewrites the edit buffer with fixed lines.
#![cfg(unix)]
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Working tree, HOME and a scratch dir for editor scripts.
pub struct Fixture
{
    pub work: TempDir,
    pub home: TempDir,
    pub tools: TempDir,
}

impl Fixture
{
    /// Create a fixture whose working directory holds `files` (content = name).
    pub fn with_files(files: &[&str]) -> Self
    {
        let fx = Self {
            work: TempDir::new().expect("work dir"),
            home: TempDir::new().expect("home dir"),
            tools: TempDir::new().expect("tools dir"),
        };

        for f in files
        {
            fx.work
                .child(f)
                .write_str(f)
                .expect("write fixture file");
        }

        fx
    }

    /// Write `~/.irename.rc` in the fake HOME.
    pub fn write_rc(
        &self,
        body: &str,
    )
    {
        self.home
            .child(".irename.rc")
            .write_str(body)
            .expect("write rc");
    }

    /// Editor script that records the buffer, then replaces it with `lines`
    /// (or leaves it untouched for `None`). Returns the script path.
    pub fn editor(
        &self,
        lines: Option<&[&str]>,
    ) -> PathBuf
    {
        let tools = self.tools.path();
        let mut body = String::from("#!/bin/sh\n");

        body.push_str(&format!("cp \"$1\" {}\n", sh_quote(&tools.join("before"))));
        body.push_str(&format!(
            "printf '%s' \"$1\" > {}\n",
            sh_quote(&tools.join("buffer_path"))
        ));

        if let Some(lines) = lines
        {
            let quoted: Vec<String> = lines
                .iter()
                .map(|l| sh_quote(Path::new(l)))
                .collect();
            body.push_str(&format!("printf '%s\\n' {} > \"$1\"\n", quoted.join(" ")));
        }

        let script = tools.join("edit.sh");
        fs::write(&script, body).expect("write editor script");
        script
    }

    /// Editor script that records the buffer path, rewrites the buffer to
    /// `b`, then sends SIGINT to `irename` and keeps running for a moment.
    pub fn interrupting_editor(&self) -> PathBuf
    {
        let tools = self.tools.path();
        let body = format!(
            "#!/bin/sh\nprintf '%s' \"$1\" > {}\nprintf 'b\\n' > \"$1\"\nkill -INT $PPID\nsleep 1\n",
            sh_quote(&tools.join("buffer_path"))
        );

        let script = tools.join("interrupt.sh");
        fs::write(&script, body).expect("write editor script");
        script
    }

    /// Buffer content as the editor first saw it.
    pub fn buffer_before_edit(&self) -> String
    {
        fs::read_to_string(
            self.tools
                .path()
                .join("before"),
        )
        .expect("editor ran")
    }

    /// Path of the temporary buffer handed to the editor.
    pub fn buffer_path(&self) -> PathBuf
    {
        PathBuf::from(
            fs::read_to_string(
                self.tools
                    .path()
                    .join("buffer_path"),
            )
            .expect("editor ran"),
        )
    }

    /// `irename` running in the work dir with an isolated environment.
    pub fn irename(&self) -> Command
    {
        let mut cmd = Command::cargo_bin("irename").expect("irename binary");
        cmd.current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .env_remove("IRENAME_LOG");
        cmd
    }

    /// `irename -e sh -c <script>` for the given edit.
    pub fn irename_editing(
        &self,
        lines: Option<&[&str]>,
    ) -> Command
    {
        let script = self.editor(lines);
        let mut cmd = self.irename();
        cmd.arg("-e")
            .arg("sh")
            .arg("-c")
            .arg(&script);
        cmd
    }

    pub fn path(
        &self,
        rel: &str,
    ) -> PathBuf
    {
        self.work
            .path()
            .join(rel)
    }

    pub fn read(
        &self,
        rel: &str,
    ) -> String
    {
        fs::read_to_string(self.path(rel)).expect("read work file")
    }
}

/// Single-quote for /bin/sh.
fn sh_quote(p: &Path) -> String
{
    format!("'{}'", p.display().to_string().replace('\'', r"'\''"))
}
