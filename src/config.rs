use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    tokenizer::{
        options::ParserOptions,
        token::{MentionTokenizer, TokenizerError, TokenizerResult},
        trigger::{PatternKind, Trigger},
    },
    Error, InternalResult,
};

/// Serializable tokenizer setup: an ordered trigger list plus parser options.
///
/// A missing `triggers` key falls back to the default trigger set; an explicit
/// empty list disables mentions entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_triggers")]
    pub triggers: Vec<TriggerConfig>,

    #[serde(default)]
    pub options: ParserOptions,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            triggers: default_triggers(),
            options: ParserOptions::default(),
        }
    }
}

impl TokenizerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    /// Compiles every trigger in list order, stopping at the first invalid one.
    pub fn compile_triggers(&self) -> TokenizerResult<Vec<Trigger>> {
        self.triggers
            .iter()
            .map(|trigger| {
                trigger.compile().inspect_err(|e| {
                    tracing::error!("{}", e);
                })
            })
            .collect()
    }

    pub fn build(&self) -> InternalResult<MentionTokenizer> {
        let triggers = self.compile_triggers()?;
        tracing::debug!(triggers = triggers.len(), options = ?self.options, "tokenizer built");
        Ok(MentionTokenizer::new(triggers, self.options))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub name: String,

    pub pattern: String,

    /// `simple`/`literal` or `regex`/`pattern`.
    #[serde(rename = "type", default = "default_pattern_kind")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TriggerConfig {
    pub fn simple(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            kind: PatternKind::Simple.to_string(),
            color: None,
        }
    }

    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            kind: PatternKind::Regex.to_string(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn compile(&self) -> TokenizerResult<Trigger> {
        let kind = self
            .kind
            .parse::<PatternKind>()
            .map_err(|_| TokenizerError::UnsupportedPattern {
                name: self.name.clone(),
                kind: self.kind.clone(),
            })?;

        let trigger = match kind {
            PatternKind::Simple => Trigger::literal(&self.name, &self.pattern)?,
            PatternKind::Regex => Trigger::regex(&self.name, &self.pattern)?,
        };

        Ok(match &self.color {
            Some(color) => trigger.with_color(color),
            None => trigger,
        })
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_pattern_kind() -> String {
    PatternKind::default().to_string()
}

fn default_triggers() -> Vec<TriggerConfig> {
    vec![
        TriggerConfig::simple("at-mention", "@").with_color("green"),
        TriggerConfig::simple("hash-team-mention", "##").with_color("purple"),
        TriggerConfig::regex("curly-mention", r"\{\{[^}]*\}\}").with_color("blue"),
    ]
}
