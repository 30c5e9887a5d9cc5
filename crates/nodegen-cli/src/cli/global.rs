//! Flags accepted before or after any subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log run phases (`-v`), applied intents (`-vv`) or everything (`-vvv`).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more of the run on stderr (-v, -vv, -vvv)",
        long_help = "How much of a scaffold run is logged to stderr:
    (none)  - merge warnings and errors
    -v      - run phases and the chosen plan groups
    -vv     - each intent and file write as it is applied
    -vvv    - trace level"
    )]
    pub verbose: u8,

    /// Print errors only; the project is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. Also switched on by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print the report without colour"
    )]
    pub no_color: bool,

    /// TOML/JSON/YAML file with author and license defaults.
    ///
    /// Without it, the per-user config file is read if present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read author and license defaults from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Also write logs to FILE, without colour"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print the run report"
    )]
    pub output_format: OutputFormat,
}

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured intent list with a success line.
    Human,
    /// The same list without colour.
    Plain,
    /// One JSON object: plan groups, intents, warnings and the manifest.
    Json,
}
