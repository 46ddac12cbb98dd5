use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::{RenameError, Result};

/// User config file location (tilde expanded at load time)
pub const CONFIG_FILE: &str = "~/.irename.rc";

/// INI section holding the policy keys
pub const CONFIG_SECTION: &str = "irename";

/// Editor used when neither config nor environment name one
pub const FALLBACK_EDITOR: &str = "vim";

/// Fully resolved settings for one run; read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig
{
    pub editor: String,
    pub editor_arguments: String,
    pub force: bool,
    pub interactive: bool,
    pub verbose: bool,
}

impl PolicyConfig
{
    /// Split `editor_arguments` with POSIX shell rules.
    pub fn editor_args(&self) -> Result<Vec<String>>
    {
        shlex::split(&self.editor_arguments).ok_or_else(|| {
            RenameError::Config(format!(
                "invalid editor arguments (unbalanced quotes): {}",
                self.editor_arguments
            ))
        })
    }
}

/// Built-in defaults, seeded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults
{
    pub editor: String,
    pub editor_arguments: String,
    pub force: bool,
    pub interactive: bool,
    pub verbose: bool,
}

impl Defaults
{
    /// Read `$EDITOR`, then `$VISUAL`, from the process environment.
    pub fn from_env() -> Self
    {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Defaults::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let editor = ["EDITOR", "VISUAL"]
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

        Self {
            editor,
            editor_arguments: String::new(),
            force: false,
            interactive: false,
            verbose: false,
        }
    }
}

/// Values found in the `[irename]` section; absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileSettings
{
    pub editor: Option<String>,
    pub editor_arguments: Option<String>,
    pub force: Option<bool>,
    pub interactive: Option<bool>,
    pub verbose: Option<bool>,
}

/// Keys read from the `[irename]` section; anything else is ignored.
const SECTION_KEYS: [&str; 5] = ["editor", "editor_arguments", "force", "interactive", "verbose"];

/// Command-line overrides. Switches can only turn a flag on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides
{
    pub editor: Option<String>,
    pub editor_arguments: Option<String>,
    pub force: bool,
    pub interactive: bool,
    pub verbose: bool,
}

impl From<&Cli> for CliOverrides
{
    fn from(cli: &Cli) -> Self
    {
        Self {
            editor: cli
                .editor
                .clone(),
            editor_arguments: cli
                .editor_arguments
                .clone(),
            force: cli.force,
            interactive: cli.interactive,
            verbose: cli.verbose,
        }
    }
}

/// Merge the three tiers: CLI > config file > built-in default.
pub fn resolve(
    defaults: &Defaults,
    file: &FileSettings,
    cli: &CliOverrides,
) -> PolicyConfig
{
    let editor = cli
        .editor
        .clone()
        .or_else(|| {
            file.editor
                .clone()
        })
        .unwrap_or_else(|| {
            defaults
                .editor
                .clone()
        });

    let editor_arguments = cli
        .editor_arguments
        .clone()
        .or_else(|| {
            file.editor_arguments
                .clone()
        })
        .unwrap_or_else(|| {
            defaults
                .editor_arguments
                .clone()
        });

    PolicyConfig {
        editor,
        editor_arguments,
        force: cli.force
            || file
                .force
                .unwrap_or(defaults.force),
        interactive: cli.interactive
            || file
                .interactive
                .unwrap_or(defaults.interactive),
        verbose: cli.verbose
            || file
                .verbose
                .unwrap_or(defaults.verbose),
    }
}

/// Resolve [`CONFIG_FILE`] against the current user's home directory.
pub fn default_config_path() -> PathBuf
{
    PathBuf::from(
        shellexpand::tilde(CONFIG_FILE).into_owned(),
    )
}

/// Load the `[irename]` section from an INI file.
///
/// A missing file yields empty settings. A file that exists but cannot be
/// parsed, or has no `[irename]` section, is a [`RenameError::Config`].
pub fn load_file_settings(path: &Path) -> Result<FileSettings>
{
    if !path.exists()
    {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FileSettings::default());
    }

    // Values are taken verbatim: no escape or quote processing
    let opts = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, opts).map_err(|e| {
        RenameError::Config(format!("failed to read config file {}: {e}", path.display()))
    })?;

    let section = ini
        .section(Some(CONFIG_SECTION))
        .ok_or_else(|| {
            RenameError::Config(format!(
                "Missing '{CONFIG_SECTION}' section in config file {}",
                path.display()
            ))
        })?;

    let mut builder = config::Config::builder();
    for key in SECTION_KEYS
    {
        if let Some(value) = section.get(key)
        {
            builder = builder
                .set_override(key, value)
                .map_err(|e| invalid_file(path, e))?;
        }
    }

    builder
        .build()
        .and_then(|cfg| cfg.try_deserialize())
        .map_err(|e| invalid_file(path, e))
}

fn invalid_file(
    path: &Path,
    err: config::ConfigError,
) -> RenameError
{
    RenameError::Config(format!("invalid config file {}: {err}", path.display()))
}

/// Build the run's [`PolicyConfig`] from the environment, the user's config
/// file and the parsed command line.
pub fn load_policy(cli: &Cli) -> Result<PolicyConfig>
{
    let file = load_file_settings(&default_config_path())?;
    let policy = resolve(&Defaults::from_env(), &file, &CliOverrides::from(cli));

    debug!(?policy, "resolved policy");
    Ok(policy)
}
