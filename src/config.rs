//! Per-wrapped-function configuration
//!
//! A `ProfileConfig` is built once when a function is wrapped and shared by
//! every invocation; nothing in it mutates afterwards.

use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, MonotonicClock};
use crate::sink::LogSink;
use crate::template::MessageTemplate;

/// Immutable instrumentation options for one wrapped function.
///
/// When a custom message is set and `log_variables` was not supplied
/// explicitly, the effective variable list is derived from the template's
/// placeholders at build time; an explicit list is never overwritten.
#[derive(Clone)]
pub struct ProfileConfig {
    logger: Option<Arc<dyn LogSink>>,
    clock: Arc<dyn Clock>,
    log_start: bool,
    log_variables: Vec<String>,
    log_all_args: bool,
    custom_message: Option<MessageTemplate>,
}

impl ProfileConfig {
    pub fn builder() -> ProfileConfigBuilder {
        ProfileConfigBuilder::default()
    }

    pub fn logger(&self) -> Option<&Arc<dyn LogSink>> {
        self.logger.as_ref()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn log_start(&self) -> bool {
        self.log_start
    }

    /// The effective ordered variable list (explicit, or derived from the
    /// custom message's placeholders).
    pub fn log_variables(&self) -> &[String] {
        &self.log_variables
    }

    pub fn log_all_args(&self) -> bool {
        self.log_all_args
    }

    pub fn custom_message(&self) -> Option<&MessageTemplate> {
        self.custom_message.as_ref()
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for ProfileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileConfig")
            .field("logger", &self.logger.is_some())
            .field("log_start", &self.log_start)
            .field("log_variables", &self.log_variables)
            .field("log_all_args", &self.log_all_args)
            .field("custom_message", &self.custom_message.as_ref().map(MessageTemplate::source))
            .finish()
    }
}

/// Builder for `ProfileConfig`.
#[derive(Default)]
pub struct ProfileConfigBuilder {
    logger: Option<Arc<dyn LogSink>>,
    clock: Option<Arc<dyn Clock>>,
    log_start: bool,
    log_variables: Option<Vec<String>>,
    log_all_args: bool,
    custom_message: Option<String>,
}

impl ProfileConfigBuilder {
    /// Route log lines through `sink`; absent, lines go to stdout.
    pub fn logger(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.logger = Some(sink);
        self
    }

    /// Substitute the monotonic time source (tests).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Emit the "Starting" line as well. Off by default.
    pub fn log_start(mut self, on: bool) -> Self {
        self.log_start = on;
        self
    }

    /// Render exactly these parameter names, in this order. Names that do
    /// not resolve on a call are dropped silently.
    pub fn log_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.log_variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Render every bound parameter, overriding `log_variables`.
    pub fn log_all_args(mut self, on: bool) -> Self {
        self.log_all_args = on;
        self
    }

    /// Replace the default format with a `{name}`-placeholder template.
    pub fn custom_message(mut self, template: &str) -> Self {
        self.custom_message = Some(template.to_string());
        self
    }

    pub fn build(self) -> ProfileConfig {
        let custom_message = self.custom_message.map(|s| MessageTemplate::parse(&s));
        let log_variables = match self.log_variables {
            Some(explicit) => explicit,
            None => custom_message
                .as_ref()
                .map(|t| t.placeholders().to_vec())
                .unwrap_or_default(),
        };

        ProfileConfig {
            logger: self.logger,
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(MonotonicClock::new())),
            log_start: self.log_start,
            log_variables,
            log_all_args: self.log_all_args,
            custom_message,
        }
    }
}
