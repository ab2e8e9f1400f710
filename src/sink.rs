//! Log sinks
//!
//! The library talks to logging through the `LogSink` capability: an
//! info-level write for instrumentation lines and an error-level write for
//! contained failures. When no sink is configured the profiler falls back to
//! direct stdout/stderr writes, so zero-configuration use still produces
//! output.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Severity of a captured message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkLevel {
    /// Instrumentation lines ("Starting ...", "Finished ...").
    Info,
    /// Contained failures (binding, rendering, template interpolation).
    Error,
}

/// Message sink capability: accepts rendered log lines.
///
/// Implementations must be safe for concurrent use; the wrapper never locks
/// around emission.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Routes messages to the `tracing` facade under target "medir".
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "medir", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "medir", "{}", message);
    }
}

/// In-memory capture sink for tests and examples.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(SinkLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages in emission order.
    pub fn messages(&self) -> Vec<(SinkLevel, String)> {
        self.lock().clone()
    }

    /// Captured info-level lines, in emission order.
    pub fn info_lines(&self) -> Vec<String> {
        self.lines(SinkLevel::Info)
    }

    /// Captured error-level lines, in emission order.
    pub fn error_lines(&self) -> Vec<String> {
        self.lines(SinkLevel::Error)
    }

    /// True when any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|(_, m)| m.contains(needle))
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lines(&self, level: SinkLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SinkLevel, String)>> {
        // Emission happens during unwinding too; a poisoned buffer is still
        // a valid buffer.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.lock().push((SinkLevel::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lock().push((SinkLevel::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.info("first");
        sink.error("second");
        sink.info("third");

        assert_eq!(sink.info_lines(), vec!["first", "third"]);
        assert_eq!(sink.error_lines(), vec!["second"]);
        assert_eq!(sink.messages().len(), 3);
    }

    #[test]
    fn test_memory_sink_contains() {
        let sink = MemorySink::new();
        sink.info("Finished demo.multiply()");

        assert!(sink.contains("demo.multiply"));
        assert!(!sink.contains("demo.divide"));
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.info("line");
        sink.clear();
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        let sink = TracingSink::new();
        sink.info("no subscriber installed");
        sink.error("still fine");
    }
}
