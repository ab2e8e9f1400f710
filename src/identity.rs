//! Callable identity resolution
//!
//! The human-readable name on every log line: `module.Type.method` for
//! methods, `module.function` for free functions, `module.<closure>` for
//! unnamed closures, with the module omitted (no leading dot) when unknown.
//! The kind is decided once at wrap time from how the target was declared,
//! never inspected per call.

use std::fmt;

/// Anonymous marker used for unnamed closures.
pub const CLOSURE_NAME: &str = "<closure>";

/// How the wrapped target was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableKind {
    /// Free function.
    Function,
    /// Method on a receiver type.
    Method {
        /// The receiver type's name, e.g. "OrderBook".
        type_name: String,
    },
    /// Unnamed closure.
    Closure,
}

/// Fully qualified identity for log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    module: Option<String>,
    name: String,
    kind: CallableKind,
}

impl Identity {
    /// Identity of a free function. An empty module is treated as unknown.
    pub fn function(module: &str, name: &str) -> Self {
        Self {
            module: non_empty(module),
            name: name.to_string(),
            kind: CallableKind::Function,
        }
    }

    /// Identity of a method on `type_name`.
    pub fn method(module: &str, type_name: &str, name: &str) -> Self {
        Self {
            module: non_empty(module),
            name: name.to_string(),
            kind: CallableKind::Method {
                type_name: type_name.to_string(),
            },
        }
    }

    /// Identity of an unnamed closure.
    pub fn closure(module: &str) -> Self {
        Self {
            module: non_empty(module),
            name: CLOSURE_NAME.to_string(),
            kind: CallableKind::Closure,
        }
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CallableKind {
        &self.kind
    }

    /// The dotted name used in log lines.
    pub fn full_name(&self) -> String {
        let base = match &self.kind {
            CallableKind::Method { type_name } => format!("{}.{}", type_name, self.name),
            CallableKind::Function | CallableKind::Closure => self.name.clone(),
        };
        match &self.module {
            Some(module) => format!("{}.{}", module, base),
            None => base,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Normalize a `module_path!()` string to the dotted form used in log
/// lines, e.g. `my_app::orders` becomes `my_app.orders`.
pub fn dotted_module_path(path: &str) -> String {
    path.replace("::", ".")
}

fn non_empty(module: &str) -> Option<String> {
    if module.is_empty() {
        None
    } else {
        Some(module.to_string())
    }
}
