//! # mentionize: mention highlighting for text inputs
//!
//! `mentionize` splits the contents of an `<input>`, `<textarea>` or
//! `contenteditable` element into display segments so a renderer can overlay
//! styled mentions on top of the raw text.
//!
//! ```text
//! text + triggers + options → Tokenizer → [plain | mention | newline]
//! ```
//!
//! - Tokenization ([`tokenizer`])
//! - Trigger setup from JSON ([`config`])
//! - Error handling ([`error`])
//!
//! Rendering lives with the caller: mention segments map to styled elements
//! keyed by `trigger_name`/`color`, newline segments to line breaks, plain
//! segments to text nodes.

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{
    options::ParserOptions,
    segment::{reconstruct, TextSegment},
    token::{tokenize, MentionTokenizer, TokenizerError},
    trigger::{PatternKind, Trigger, TriggerPattern},
};
