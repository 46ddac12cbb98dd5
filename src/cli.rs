use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "irename")]
#[command(about = "Rename files in bulk by editing their names in your text editor")]
#[command(version, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Change default editor
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Pass additional arguments to editor
    #[arg(short = 'c', long, value_name = "ARGUMENTS", allow_hyphen_values = true)]
    pub editor_arguments: Option<String>,

    /// Be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Ask before every rename
    #[arg(short, long)]
    pub interactive: bool,

    /// Do not ask if destination file already exists
    #[arg(short, long)]
    pub force: bool,

    /// Files to rename (defaults to every entry in the current directory)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}
