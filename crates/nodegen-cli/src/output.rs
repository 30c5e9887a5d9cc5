//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves to Human on a TTY, Plain otherwise.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", Style::new().green(), msg)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{26a0}", Style::new().yellow(), msg)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2139}", Style::new().blue(), msg)
    }

    /// Indented `• <msg>` list entry.
    pub fn item(&self, msg: &str) -> io::Result<()> {
        self.marked("  \u{2022}", Style::new().dimmed(), msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout. Written even in quiet mode, since a
    /// caller asking for JSON is parsing stdout.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    fn marked(&self, mark: &str, style: Style, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {}", mark.style(style.bold()), msg.style(style))
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
