//! Custom message templates
//!
//! `{name}` placeholders, scanned once at build time with the `\{(\w+)\}`
//! rule, so positional captures ("0", "1", ...) are addressable too.
//! Anything that does not match stays literal text. Parsing never fails;
//! interpolation fails on the first placeholder with no bound value.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ProfileError;
use crate::value;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is a valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed custom message template.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
    placeholders: Vec<String>,
}

impl MessageTemplate {
    /// Parse a template. Never fails: malformed braces stay literal.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut placeholders = Vec::new();
        let mut cursor = 0;

        for capture in placeholder_regex().captures_iter(source) {
            // Both groups always exist when the pattern matches.
            let whole = match capture.get(0) {
                Some(m) => m,
                None => continue,
            };
            let name = match capture.get(1) {
                Some(m) => m.as_str(),
                None => continue,
            };
            if whole.start() > cursor {
                segments.push(Segment::Literal(source[cursor..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            placeholders.push(name.to_string());
            cursor = whole.end();
        }
        if cursor < source.len() {
            segments.push(Segment::Literal(source[cursor..].to_string()));
        }

        Self {
            source: source.to_string(),
            segments,
            placeholders,
        }
    }

    /// The raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in occurrence order (duplicates kept).
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitute every placeholder from `vars` (name, rendered-value
    /// pairs; first match wins). String-shaped values interpolate in their
    /// unquoted form. Fails with the first name that has no bound value.
    pub fn render(&self, vars: &[(String, String)]) -> Result<String, ProfileError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let found = vars.iter().find(|(k, _)| k == name);
                    match found {
                        Some((_, rendered)) => out.push_str(value::unquoted(rendered)),
                        None => return Err(ProfileError::MissingKey(name.clone())),
                    }
                }
            }
        }
        Ok(out)
    }
}
