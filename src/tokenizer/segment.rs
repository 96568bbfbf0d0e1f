use serde::{Deserialize, Serialize};

use super::trigger::Trigger;

/// One contiguous, non-empty piece of tokenized text.
///
/// Segments serialize with camelCase keys (`isMention`, `triggerName`,
/// `isNewline`); absent optional fields and a false `isNewline` are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub text: String,
    pub is_mention: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_newline: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TextSegment {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_mention: false,
            trigger_name: None,
            color: None,
            is_newline: false,
        }
    }

    pub fn newline() -> Self {
        Self {
            text: "\n".to_string(),
            is_mention: false,
            trigger_name: None,
            color: None,
            is_newline: true,
        }
    }

    /// Builds a mention segment carrying the trigger's name and color.
    pub fn mention(text: &str, trigger: &Trigger) -> Self {
        Self {
            text: text.to_string(),
            is_mention: true,
            trigger_name: Some(trigger.name().to_string()),
            color: trigger.color().map(str::to_string),
            is_newline: false,
        }
    }

    pub fn is_plain(&self) -> bool {
        !self.is_mention && !self.is_newline
    }
}

impl std::fmt::Display for TextSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_newline {
            return write!(f, "newline");
        }
        match (&self.trigger_name, &self.color) {
            (Some(name), Some(color)) => write!(f, "mention[{}, {}] {:?}", name, color, self.text),
            (Some(name), None) => write!(f, "mention[{}] {:?}", name, self.text),
            _ => write!(f, "text {:?}", self.text),
        }
    }
}

/// Concatenates segment texts back into the tokenized input.
pub fn reconstruct(segments: &[TextSegment]) -> String {
    segments.iter().map(|segment| segment.text.as_str()).collect()
}
