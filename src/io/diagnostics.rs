//! Human-readable progress messages emitted while margins are built
//!
//! The core never requires a sink. Callers that want the narrative pass a
//! closure or a [`Transcript`]; everything else goes to the `log` facade.

/// Receiver for diagnostic progress strings
pub trait DiagnosticSink {
    /// Accept one message; may span several lines
    fn emit(&mut self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, message: &str) {
        self(message);
    }
}

/// Forwards every message to `log::debug!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, message: &str) {
        log::debug!("{message}");
    }
}

/// Collects messages in order
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Messages received so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl DiagnosticSink for Transcript {
    fn emit(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
