//! Per-call instrumentation state
//!
//! One `Profiler` exists per invocation: it owns the call's bound arguments,
//! the start reading, and the one-shot custom-message state. `start()` and
//! `end()` never fail. Binding, rendering, and interpolation failures are
//! contained and reported through the error path while the log line itself
//! still goes out; the wrapped call's result is never affected.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ProfileConfig;
use crate::error::ProfileError;
use crate::identity::Identity;
use crate::signature::{CallArgs, Signature};
use crate::template::MessageTemplate;

/// Instrumentation state for a single call.
pub struct Profiler {
    identity: Arc<Identity>,
    signature: Arc<Signature>,
    args: CallArgs,
    config: Arc<ProfileConfig>,
    /// Cleared permanently after the first interpolation failure.
    custom_message: Option<MessageTemplate>,
    t0: Option<Duration>,
}

impl Profiler {
    /// Never fails; inputs are validated lazily when a message is
    /// formatted.
    pub fn new(
        identity: Arc<Identity>,
        signature: Arc<Signature>,
        args: CallArgs,
        config: Arc<ProfileConfig>,
    ) -> Self {
        let custom_message = config.custom_message().cloned();
        Self {
            identity,
            signature,
            args,
            config,
            custom_message,
            t0: None,
        }
    }

    /// Record t0, then emit the "Starting" line if configured.
    ///
    /// The reading is taken before any formatting so a formatting failure
    /// cannot skew the measurement.
    pub fn start(&mut self) {
        self.t0 = Some(self.config.clock().now());
        if self.config.log_start() {
            self.log_message("Starting", None);
        }
    }

    /// Compute elapsed time and emit the "Finished" line.
    pub fn end(&mut self) {
        let now = self.config.clock().now();
        let elapsed = match self.t0 {
            Some(t0) => now.saturating_sub(t0),
            None => Duration::ZERO,
        };
        self.log_message("Finished", Some(elapsed));
    }

    /// Whether the custom message template is still in effect.
    pub fn custom_message_active(&self) -> bool {
        self.custom_message.is_some()
    }

    /// Resolve and render the variable set for this call.
    ///
    /// A total binding failure degrades to an empty set; a value whose
    /// rendering panics is dropped. Both are reported through the error
    /// path and never abort the log call.
    fn format_variables(&self) -> Vec<(String, String)> {
        let bound = match self.signature.bind(&self.args) {
            Ok(bound) => bound,
            Err(err) => {
                self.report(&err);
                return Vec::new();
            }
        };

        let mut rendered = Vec::new();
        if self.config.log_all_args() {
            for (name, value) in bound.iter() {
                match value.try_repr() {
                    Some(repr) => rendered.push((name.to_string(), repr)),
                    None => self.report(&ProfileError::Render(name.to_string())),
                }
            }
        } else {
            for name in self.config.log_variables() {
                let Some(value) = bound.get(name) else {
                    // Unresolvable names are dropped silently.
                    continue;
                };
                match value.try_repr() {
                    Some(repr) => rendered.push((name.clone(), repr)),
                    None => self.report(&ProfileError::Render(name.clone())),
                }
            }
        }
        rendered
    }

    /// Assemble and emit one log line: custom template if active, else the
    /// default `{action} {full_name}()` format with elapsed and args
    /// clauses.
    fn log_message(&mut self, action: &str, elapsed: Option<Duration>) {
        let variables = self.format_variables();

        let message = match self.render_custom(&variables) {
            Some(mut text) => {
                if let Some(elapsed) = elapsed {
                    push_elapsed_clause(&mut text, elapsed);
                }
                text
            }
            None => {
                let mut line = format!("{} {}()", action, self.identity.full_name());
                if let Some(elapsed) = elapsed {
                    push_elapsed_clause(&mut line, elapsed);
                }
                if !variables.is_empty() {
                    let joined = variables
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, value))
                        .collect::<Vec<_>>()
                        .join(", ");
                    line.push_str(" with args: ");
                    line.push_str(&joined);
                }
                line
            }
        };

        self.emit(&message);
    }

    /// Interpolate the custom template if still active.
    ///
    /// On a missing key: report the one-shot diagnostic, clear the template,
    /// and return `None` so this and every later message from this call use
    /// the default format.
    fn render_custom(&mut self, variables: &[(String, String)]) -> Option<String> {
        let template = self.custom_message.as_ref()?;
        match template.render(variables) {
            Ok(text) => Some(text),
            Err(err) => {
                self.report_diagnostic(&format!(
                    "Error in custom message: {}. Using default format.",
                    err
                ));
                self.custom_message = None;
                None
            }
        }
    }

    fn emit(&self, message: &str) {
        match self.config.logger() {
            Some(sink) => sink.info(message),
            None => println!("{}", message),
        }
    }

    fn report(&self, err: &ProfileError) {
        self.report_diagnostic(&format!("{}: {}", self.identity.full_name(), err));
    }

    fn report_diagnostic(&self, line: &str) {
        match self.config.logger() {
            Some(sink) => sink.error(line),
            None => eprintln!("{}", line),
        }
    }
}

fn push_elapsed_clause(line: &mut String, elapsed: Duration) {
    line.push_str(&format!(
        " (execution time: {:.4} secs)",
        elapsed.as_secs_f64()
    ));
}
