//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nodegen",
    bin_name = "nodegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Node.js projects, safely re-runnable",
    long_about = "nodegen writes package.json, README and the usual dotfiles for a \
                  Node.js project. Running it again on an existing project merges \
                  into package.json instead of overwriting what is already there.",
    after_help = "EXAMPLES:\n\
        \x20 nodegen generate my-lib --description \"Does things\" --author-name \"Ada\"\n\
        \x20 nodegen generate . --answers answers.json --no-travis\n\
        \x20 nodegen new my-proxy --jsc --dry-run\n\
        \x20 nodegen completions bash > /usr/share/bash-completion/completions/nodegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new project or update an existing one.
    #[command(
        visible_alias = "new",
        about = "Scaffold or update a project",
        after_help = "EXAMPLES:\n\
            \x20 nodegen generate my-lib\n\
            \x20 nodegen generate my-lib --coveralls --cli --keyword tools --keyword json\n\
            \x20 nodegen generate . --generate-into packages/core --no-boilerplate"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nodegen completions bash > ~/.local/share/bash-completion/completions/nodegen\n\
            \x20 nodegen completions zsh  > ~/.zfunc/_nodegen\n\
            \x20 nodegen completions fish > ~/.config/fish/completions/nodegen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `nodegen generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Destination root. Defaults to the current directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Destination directory")]
    pub dir: PathBuf,

    /// Read prompt answers from a JSON file instead of asking.
    #[arg(long = "answers", value_name = "FILE", help = "JSON answers file")]
    pub answers: Option<PathBuf>,

    // ── answers ──────────────────────────────────────────────────────────
    /// Package name. Defaults to the destination directory name.
    #[arg(long = "name", value_name = "NAME", help = "Package name")]
    pub name: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Package description")]
    pub description: Option<String>,

    #[arg(long = "homepage", value_name = "URL", help = "Project homepage")]
    pub homepage: Option<String>,

    #[arg(long = "author-name", value_name = "NAME", help = "Author's name")]
    pub author_name: Option<String>,

    #[arg(long = "author-email", value_name = "EMAIL", help = "Author's email")]
    pub author_email: Option<String>,

    #[arg(long = "author-url", value_name = "URL", help = "Author's homepage")]
    pub author_url: Option<String>,

    /// Repeat for several keywords; order is kept.
    #[arg(
        short = 'k',
        long = "keyword",
        value_name = "WORD",
        action = clap::ArgAction::Append,
        help = "Package keyword (repeatable)"
    )]
    pub keywords: Vec<String>,

    // ── options ──────────────────────────────────────────────────────────
    /// Skip the `git config` lookup and use this origin URL.
    #[arg(long = "origin-url", value_name = "URL", help = "Repository origin URL")]
    pub origin_url: Option<String>,

    /// SPDX identifier; `UNLICENSED` writes no LICENSE file.
    #[arg(long = "license-type", value_name = "SPDX", help = "License identifier")]
    pub license_type: Option<String>,

    /// Custom README body replacing the Installation and Usage sections.
    #[arg(long = "readme", value_name = "FILE", help = "File holding a custom README body")]
    pub readme: Option<PathBuf>,

    /// Relocate the generated project below DIR.
    #[arg(long = "generate-into", value_name = "PATH", help = "Sub-directory to generate into")]
    pub generate_into: Option<PathBuf>,

    #[arg(long = "no-license", help = "Do not write a LICENSE")]
    pub no_license: bool,

    #[arg(long = "no-editorconfig", help = "Do not write .editorconfig")]
    pub no_editorconfig: bool,

    #[arg(long = "no-git", help = "Do not write .gitignore/.gitattributes")]
    pub no_git: bool,

    #[arg(long = "no-travis", help = "Do not write .travis.yml")]
    pub no_travis: bool,

    #[arg(long = "no-boilerplate", help = "Do not write lib/index.js and its test")]
    pub no_boilerplate: bool,

    #[arg(long = "no-eslint", help = "Do not configure eslint")]
    pub no_eslint: bool,

    #[arg(long = "coveralls", help = "Report coverage to coveralls.io")]
    pub coveralls: bool,

    #[arg(long = "cli", help = "Add a command-line entry point")]
    pub cli: bool,

    #[arg(long = "jsc", help = "Add an API proxy JavaScript callout")]
    pub jsc: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nodegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_defaults_to_current_directory() {
        let args = generate_args(&["nodegen", "generate"]);
        assert_eq!(args.dir, PathBuf::from("."));
        assert!(!args.dry_run);
        assert!(args.keywords.is_empty());
    }

    #[test]
    fn new_is_an_alias_for_generate() {
        let args = generate_args(&["nodegen", "new", "my-lib", "--dry-run"]);
        assert_eq!(args.dir, PathBuf::from("my-lib"));
        assert!(args.dry_run);
    }

    #[test]
    fn keywords_are_repeatable_and_ordered() {
        let args = generate_args(&[
            "nodegen", "generate", "-k", "foo", "--keyword", "bar", "-k", "baz",
        ]);
        assert_eq!(args.keywords, ["foo", "bar", "baz"]);
    }

    #[test]
    fn feature_switches_parse() {
        let args = generate_args(&[
            "nodegen",
            "generate",
            "--no-travis",
            "--no-license",
            "--coveralls",
            "--jsc",
        ]);
        assert!(args.no_travis && args.no_license && args.coveralls && args.jsc);
        assert!(!args.no_git && !args.cli);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["nodegen", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_file_is_global() {
        let cli = Cli::parse_from(["nodegen", "generate", "--log-file", "run.log"]);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    }
}
