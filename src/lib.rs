//! Medir - call instrumentation with argument-aware timing and structured logging
//!
//! Wrap a function once, call it many times: every invocation emits
//! "Starting"/"Finished" log lines with wall-clock timing and selected
//! argument values, with graceful degradation when argument rendering fails.
//! The wrapped call's result, panic, or cancellation always passes through
//! unchanged, and "Finished" is logged on every exit path.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use medir::config::ProfileConfig;
//! use medir::identity::Identity;
//! use medir::sink::MemorySink;
//! use medir::wrapper::Instrumented;
//! use medir::{call_args, signature};
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = ProfileConfig::builder()
//!     .logger(sink.clone())
//!     .log_all_args(true)
//!     .build();
//!
//! let multiply = Instrumented::new(
//!     Identity::function("demo", "multiply"),
//!     signature![a, b, c = 1],
//!     config,
//! );
//!
//! let product = multiply.call(call_args![2, 3], || 2 * 3 * 1);
//! assert_eq!(product, 6);
//! assert!(sink.contains("Finished demo.multiply()"));
//! assert!(sink.contains("with args: a=2, b=3, c=1"));
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod identity;
pub mod macros;
pub mod profiler;
pub mod signature;
pub mod sink;
pub mod template;
pub mod value;
pub mod wrapper;
