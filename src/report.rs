//! Diagnostic reporting for per-icon warnings
//!
//! Conversion never logs directly; every non-fatal problem goes through a
//! [`Reporter`] injected into the call. This keeps the core decoupled from
//! any particular logging destination and lets tests capture diagnostics.

/// Sink for non-fatal, per-icon diagnostics.
///
/// Messages are single-line and human-readable; the icon name is passed
/// separately so implementations decide how to present it.
pub trait Reporter {
    /// Report a non-fatal problem encountered while converting `icon`.
    fn warn(&mut self, icon: &str, message: &str);
}

/// Reporter that writes one line per warning to stderr.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn warn(&mut self, icon: &str, message: &str) {
        eprintln!("warning [{icon}]: {message}");
    }
}

/// Reporter that collects warnings in memory.
///
/// Used by tests to assert on emitted diagnostics without touching stderr.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    /// Collected warnings, formatted as `"<icon>: <message>"`.
    pub warnings: Vec<String>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn warn(&mut self, icon: &str, message: &str) {
        self.warnings.push(format!("{icon}: {message}"));
    }
}
