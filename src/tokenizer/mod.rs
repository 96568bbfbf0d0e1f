//! # Mention Tokenizer
//!
//! The tokenizer classifies free-form text into display segments: plain text,
//! mentions, and (optionally) newlines. A mention is a span claimed by a
//! [`Trigger`](trigger::Trigger), either a literal prefix such as `@` or a
//! regular expression such as `\{\{[^}]*\}\}`.
//!
//! ## Design Principles
//!
//! * **Lossless**: concatenating the output segments reproduces the input
//!   exactly. No segment is ever empty.
//! * **Ordered priority**: triggers are tried in list order and the first match
//!   wins; there is no longest-match rule across triggers.
//! * **Word granularity**: unclaimed text is emitted as whole words and
//!   whitespace runs, never split inside a word.
//! * **Pure**: no caching, no shared state, no I/O. Callers that re-render on
//!   every keystroke may memoize on their side.
//!
//! ## Component Structure
//!
//! * [`token`]: the scan itself, [`MentionTokenizer`](token::MentionTokenizer)
//!   and [`TokenizerError`](token::TokenizerError)
//! * [`trigger`]: trigger definitions and offset-anchored matching
//! * [`segment`]: the [`TextSegment`](segment::TextSegment) output type
//! * [`options`]: per-call [`ParserOptions`](options::ParserOptions)
//! * [`whitespace`]: word/whitespace run parsing and plain-text decomposition
//!
//! ## Usage Example
//!
//! ```rust
//! use mentionize::tokenizer::{options::ParserOptions, token::tokenize, trigger::Trigger};
//!
//! let triggers = vec![
//!     Trigger::literal("at-mention", "@").unwrap(),
//!     Trigger::regex("curly-mention", r"\{\{[^}]*\}\}").unwrap(),
//! ];
//! let segments = tokenize("ping @ana about {{ ticket }}", &triggers, ParserOptions::default());
//!
//! let mentions: Vec<_> = segments.iter().filter(|s| s.is_mention).map(|s| s.text.as_str()).collect();
//! assert_eq!(mentions, vec!["@ana", "{{ ticket }}"]);
//! ```

pub mod options;
pub mod segment;
pub mod token;
pub mod trigger;
pub mod whitespace;
