//! Instrumented call wrapper
//!
//! `Instrumented` adapts one target callable without altering its observable
//! result or failure behavior. Each invocation gets its own `Profiler`; a
//! drop guard runs `end()` on every exit path, so "Finished" is logged even
//! when the target panics or an async call is dropped mid-await, with
//! elapsed time reflecting time to failure.

use std::future::Future;
use std::sync::Arc;

use crate::config::ProfileConfig;
use crate::identity::Identity;
use crate::profiler::Profiler;
use crate::signature::{CallArgs, Signature};

/// A wrapped callable: identity, declared signature, and configuration,
/// shared by every invocation.
///
/// Invocations share no mutable state, so one `Instrumented` may be called
/// concurrently from any number of threads or tasks without locking.
#[derive(Debug, Clone)]
pub struct Instrumented {
    identity: Arc<Identity>,
    signature: Arc<Signature>,
    config: Arc<ProfileConfig>,
}

impl Instrumented {
    pub fn new(identity: Identity, signature: Signature, config: ProfileConfig) -> Self {
        Self {
            identity: Arc::new(identity),
            signature: Arc::new(signature),
            config: Arc::new(config),
        }
    }

    /// A `Profiler` bound to one concrete invocation.
    pub fn profiler(&self, args: CallArgs) -> Profiler {
        Profiler::new(
            self.identity.clone(),
            self.signature.clone(),
            args,
            self.config.clone(),
        )
    }

    /// Invoke a synchronous target under instrumentation.
    ///
    /// The result passes through unchanged; a panic propagates unchanged
    /// after "Finished" has been logged.
    pub fn call<R>(&self, args: CallArgs, f: impl FnOnce() -> R) -> R {
        let mut profiler = self.profiler(args);
        profiler.start();
        let _finish = FinishGuard { profiler };
        f()
    }

    /// Invoke an asynchronous target under instrumentation.
    ///
    /// Only awaiting `fut` suspends; the bookkeeping itself never does.
    /// Dropping the returned future before completion (cancellation) still
    /// logs "Finished" with elapsed time up to that point.
    pub async fn call_async<R>(&self, args: CallArgs, fut: impl Future<Output = R>) -> R {
        let mut profiler = self.profiler(args);
        profiler.start();
        let _finish = FinishGuard { profiler };
        fut.await
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }
}

/// Runs `end()` when dropped: on return, panic, and cancellation alike.
struct FinishGuard {
    profiler: Profiler,
}

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.profiler.end();
    }
}
