//! Terminal output for the pnm CLI.
//!
//! Status lines go to stderr with the verb right-aligned in a fixed column,
//! the way Cargo reports progress. stdout stays free for `info` and
//! `completions` output.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Column the verbs are right-aligned to.
const VERB_WIDTH: usize = 12;

/// ANSI styles used on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Progress,
    Warning,
    Path,
    Detail,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Progress => "\x1b[1;32m",
            Style::Warning => "\x1b[1;33m",
            Style::Path => "\x1b[36m",
            Style::Detail => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Writes status lines to stderr, coloured only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress line, e.g. `     Reading photo.png`.
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Style::Progress, verb, message);
    }

    /// Something worth a second look that does not stop the command.
    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Style::Warning, verb, message);
    }

    /// A path, shown relative to the working directory when possible.
    pub fn path(&self, path: &Path) -> String {
        self.paint(Style::Path, display_path(path))
    }

    /// Secondary detail such as dimensions.
    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::Detail, text)
    }

    fn paint(&self, style: Style, text: impl Display) -> String {
        if self.color {
            format!("{}{}{}", style.code(), text, RESET)
        } else {
            text.to_string()
        }
    }

    fn emit(&self, style: Style, verb: &str, message: &str) {
        let verb = format!("{verb:>VERB_WIDTH$}");
        let _ = writeln!(io::stderr().lock(), "{} {}", self.paint(style, verb), message);
    }
}

/// `plural(1, "shape", "shapes")` is "1 shape", any other count takes the
/// plural form.
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let noun = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, noun)
}

/// `path` relative to the working directory, or as given when it lies
/// elsewhere.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
