//! Terminal output for the iconpack CLI.
//!
//! Status lines are Cargo-style: a right-aligned coloured verb followed by a
//! message. Everything goes to stderr so stdout stays free for the
//! machine-readable output of `iconpack atlas --java`.

use std::cell::Cell;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Counts the warnings it prints so a build can summarise how many icons
/// were skipped along the way.
pub struct Printer {
    color: bool,
    warnings: Cell<usize>,
}

impl Printer {
    /// Colour is enabled when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            warnings: Cell::new(0),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            warnings: Cell::new(0),
        }
    }

    /// e.g. "     Copying 412 icons"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a yellow warning line and bump the warning counter.
    pub fn warning(&self, verb: &str, message: &str) {
        self.warnings.set(self.warnings.get() + 1);
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Number of warnings printed so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.get()
    }

    /// Format a path in cyan.
    pub fn path(&self, path: &Path) -> String {
        let text = display_path(path);
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "icon", "icons")` → "1 icon".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "icon", "icons"), "1 icon");
        assert_eq!(plural(0, "icon", "icons"), "0 icons");
        assert_eq!(plural(7, "mapping", "mappings"), "7 mappings");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/pack/pack.mcmeta");
        assert_eq!(display_path(p), "/nonexistent/pack/pack.mcmeta");
    }

    #[test]
    fn test_warning_counter() {
        let printer = Printer::plain();
        assert_eq!(printer.warning_count(), 0);

        printer.status("Copying", "stick");
        printer.warning("Missing", "stone");
        printer.warning("Missing", "dirt");

        assert_eq!(printer.warning_count(), 2);
    }

    #[test]
    fn test_plain_path_has_no_escapes() {
        let printer = Printer::plain();
        let text = printer.path(Path::new("/tmp/pack"));
        assert!(!text.contains('\x1b'));
    }
}
