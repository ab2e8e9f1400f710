//! Call-time argument values
//!
//! Arguments are captured type-erased and rendered lazily to their canonical
//! `Debug` form. Rendering runs under panic containment: a value whose
//! `Debug` impl panics is reported and omitted from the log line instead of
//! crashing the instrumented call.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

trait Render: Send + Sync {
    fn render(&self) -> String;
}

struct DebugRender<T>(T);

impl<T: fmt::Debug + Send + Sync> Render for DebugRender<T> {
    fn render(&self) -> String {
        format!("{:?}", self.0)
    }
}

struct DisplayRender<T>(T);

impl<T: fmt::Display + Send + Sync> Render for DisplayRender<T> {
    fn render(&self) -> String {
        format!("{}", self.0)
    }
}

/// A type-erased argument value.
///
/// Cheap to clone: one capture is shared between a signature's defaults and
/// every per-call bound set. Captured values must be owned (`'static`), so
/// borrowed data is cloned at the call site; the `call_args!` macro does
/// this implicitly for literals.
#[derive(Clone)]
pub struct ArgValue {
    inner: Arc<dyn Render>,
}

impl ArgValue {
    /// Capture a value; log lines show its `Debug` form.
    pub fn of<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(DebugRender(value)),
        }
    }

    /// Capture a value rendered through `Display` instead of `Debug`.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(DisplayRender(value)),
        }
    }

    /// Render to the canonical string form.
    ///
    /// `None` means the value's `Debug`/`Display` impl panicked; the caller
    /// decides how to report that.
    pub fn try_repr(&self) -> Option<String> {
        panic::catch_unwind(AssertUnwindSafe(|| self.inner.render())).ok()
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_repr() {
            Some(repr) => f.write_str(&repr),
            None => f.write_str("<unrenderable>"),
        }
    }
}

/// Strip the surrounding quotes from a string-shaped repr.
///
/// Custom message templates read as prose, so `"akbar"` interpolates as
/// `akbar` while args clauses keep the quoted canonical form.
pub(crate) fn unquoted(repr: &str) -> &str {
    if repr.len() >= 2 && repr.starts_with('"') && repr.ends_with('"') {
        &repr[1..repr.len() - 1]
    } else {
        repr
    }
}
