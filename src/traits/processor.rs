use std::fmt;

use async_trait::async_trait;

/// Classification outcome of validation.
///
/// A closed set; validation never produces a free-form string and never
/// fails. Weak inputs resolve to `Invalid` or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
            Verdict::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies which processor variant produced a result.
///
/// The kind name is embedded in every log line the variant writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    Text,
    File,
}

impl ProcessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::Text => "text",
            ProcessorKind::File => "file",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait Processor: Send + Sync {
    /// Classify the input without transforming it.
    ///
    /// Logs one line, runs the slow admission check, then applies the
    /// variant's classification rules in order. Never fails.
    async fn validate(&self, data: &str) -> Verdict;

    /// Transform the input into the variant's output string.
    ///
    /// Logs one line and round-trips the data through scratch storage
    /// before transforming. Deterministic for identical inputs.
    async fn process(&self, data: &str) -> String;

    /// The variant's kind; constant for a given implementation.
    fn kind(&self) -> ProcessorKind;
}
