//! Contained instrumentation failures

use thiserror::Error;

/// Failures the profiler contains internally.
///
/// None of these ever reach the caller of an instrumented function: they are
/// reported through the error path of the configured sink (stderr when no
/// sink is set) and the log call continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Supplied arguments do not match the declared signature.
    #[error("cannot bind arguments: {0}")]
    Binding(String),

    /// A value's `Debug`/`Display` rendering panicked.
    #[error("rendering argument `{0}` panicked")]
    Render(String),

    /// A custom message template referenced a name with no bound value.
    #[error("missing key '{0}'")]
    MissingKey(String),
}
