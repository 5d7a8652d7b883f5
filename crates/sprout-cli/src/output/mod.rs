//! Terminal output formatting and utilities.
//!
//! Commands print two kinds of lines: data (requirement entries, package
//! names, rendered metadata) and narration (progress, counts, warnings).
//! Data goes to stdout so it can be piped; narration goes to stderr.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print a data line, unstyled, to stdout
    pub fn entry(&self, line: &str) {
        println!("{}", line);
    }

    /// Print a success message to stdout
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print an info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{}", self.colors.dim(message));
    }

    /// Print a warning to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.colors.red("✗"), message);
    }

    /// Print a step message with emoji to stderr
    pub fn step(&self, emoji: &str, message: &str) {
        eprintln!("{} {}", emoji, message);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
