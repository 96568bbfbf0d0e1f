//! # Triggers
//!
//! A trigger defines one class of mentions: a pattern plus the `name` and
//! optional `color` copied onto every mention it produces. The pattern is
//! either a literal prefix (`@`, `##`) or a regular expression, resolved once
//! when the trigger is built.
//!
//! Trigger lists are ordered. At a given offset the first trigger in list
//! order that matches wins, even if a later trigger would match more text.

use regex::Regex;

use super::token::{TokenizerError, TokenizerResult};

/// How a [`TriggerConfig`](crate::config::TriggerConfig) pattern string is
/// interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum PatternKind {
    #[default]
    #[strum(to_string = "simple", serialize = "literal")]
    Simple,
    #[strum(to_string = "regex", serialize = "pattern")]
    Regex,
}

#[derive(Debug, Clone)]
pub enum TriggerPattern {
    /// Matched by prefix comparison. The mention runs on to the next space or
    /// newline after the literal.
    Literal(String),
    /// Matched only when the regex match starts exactly at the scan offset.
    /// The mention spans the regex match.
    Pattern(Regex),
}

#[derive(Debug, Clone)]
pub struct Trigger {
    name: String,
    pattern: TriggerPattern,
    color: Option<String>,
}

impl Trigger {
    /// Creates a literal-prefix trigger. Empty literals are rejected.
    pub fn literal(name: impl Into<String>, literal: impl Into<String>) -> TokenizerResult<Self> {
        let name = name.into();
        let literal = literal.into();
        if literal.is_empty() {
            return Err(TokenizerError::EmptyLiteral { name });
        }
        Ok(Self {
            name,
            pattern: TriggerPattern::Literal(literal),
            color: None,
        })
    }

    /// Creates a regex trigger from its source.
    pub fn regex(name: impl Into<String>, source: &str) -> TokenizerResult<Self> {
        let name = name.into();
        let regex = Regex::new(source).map_err(|source| TokenizerError::InvalidRegex {
            name: name.clone(),
            source,
        })?;
        Ok(Self::from_regex(name, regex))
    }

    pub fn from_regex(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            pattern: TriggerPattern::Pattern(regex),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn pattern(&self) -> &TriggerPattern {
        &self.pattern
    }

    /// Attempts a match starting exactly at `cursor`, returning the end
    /// offset of the mention.
    ///
    /// `skip_until` is per-scan state for regex triggers: the regex is known
    /// not to match anywhere before that offset. A search from `cursor`
    /// returns the leftmost match, so when that match starts later, nothing
    /// can start in between.
    pub(crate) fn match_at(&self, text: &str, cursor: usize, skip_until: &mut usize) -> Option<usize> {
        match &self.pattern {
            TriggerPattern::Literal(literal) => {
                if !text[cursor..].starts_with(literal.as_str()) {
                    return None;
                }
                let body = cursor + literal.len();
                let end = text[body..]
                    .find(|c: char| c == ' ' || c == '\n')
                    .map_or(text.len(), |offset| body + offset);
                Some(end)
            }
            TriggerPattern::Pattern(regex) => {
                if cursor < *skip_until {
                    return None;
                }
                match regex.find_at(text, cursor) {
                    // Zero-length matches would produce empty segments.
                    Some(found) if found.start() == cursor => {
                        (found.end() > cursor).then_some(found.end())
                    }
                    Some(found) => {
                        *skip_until = found.start();
                        None
                    }
                    None => {
                        *skip_until = usize::MAX;
                        None
                    }
                }
            }
        }
    }
}
