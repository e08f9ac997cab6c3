use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Wiper - wipe out files like *.orig leftovers created by editors
#[derive(Parser, Debug)]
#[command(name = "wiper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory to scan [default: home directory]
    #[arg(short, long, env = "WIPER_BASE_DIR", value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// File names to wipe (can be specified multiple times)
    #[arg(short, long, env = "WIPER_WIPE_OUT", value_name = "NAME", value_delimiter = ',')]
    pub wipe_out: Vec<String>,

    /// Regular expressions for file names to wipe (can be specified multiple times)
    #[arg(short = 'p', long, env = "WIPER_WIPE_OUT_PATTERN", value_name = "REGEX")]
    pub wipe_out_pattern: Vec<String>,

    /// Directory names to wipe with their whole content
    #[arg(long, env = "WIPER_WIPE_OUT_DIRS", value_name = "NAME", value_delimiter = ',')]
    pub wipe_out_dir: Vec<String>,

    /// Regular expressions for directory names to wipe
    #[arg(long, env = "WIPER_WIPE_OUT_PATTERN_DIRS", value_name = "REGEX")]
    pub wipe_out_dir_pattern: Vec<String>,

    /// File names that are never wiped
    #[arg(short = 'f', long, env = "WIPER_EXCLUDE_FILE", value_name = "NAME", value_delimiter = ',')]
    pub exclude_file: Vec<String>,

    /// Directory names that are neither wiped nor scanned
    #[arg(short, long, env = "WIPER_EXCLUDE_DIR", value_name = "NAME", value_delimiter = ',')]
    pub exclude_dir: Vec<String>,

    /// Move matches to the trash ($HOME/.Trash) instead of deleting them
    #[arg(short = 't', long, env = "WIPER_USE_TRASH")]
    pub use_trash: bool,

    /// Trash directory to use instead of $HOME/.Trash
    #[arg(long, env = "WIPER_TRASH_DIR", value_name = "PATH")]
    pub trash_dir: Option<PathBuf>,

    /// Show what would be wiped without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Path to configuration file [default: $HOME/.config/wiper/config.toml]
    #[arg(short, long, env = "WIPER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "WIPER_DEBUG")]
    pub debug: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
