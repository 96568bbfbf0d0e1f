use serde::{Deserialize, Serialize};

/// Per-call parser options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Emit every `\n` as a dedicated newline segment instead of folding it
    /// into whitespace runs.
    pub handle_newlines: bool,
}

impl ParserOptions {
    pub fn with_newlines() -> Self {
        Self {
            handle_newlines: true,
        }
    }
}
