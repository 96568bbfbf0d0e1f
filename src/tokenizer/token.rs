use thiserror::Error;

use super::{
    options::ParserOptions,
    segment::TextSegment,
    trigger::Trigger,
    whitespace::split_plain,
};

/// A trigger list and parser options, ready to tokenize any number of texts.
///
/// Tokenizing is a pure function of the text; a `MentionTokenizer` can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct MentionTokenizer {
    triggers: Vec<Trigger>,
    options: ParserOptions,
}

impl MentionTokenizer {
    pub fn new(triggers: Vec<Trigger>, options: ParserOptions) -> Self {
        Self { triggers, options }
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn tokenize(&self, text: &str) -> Vec<TextSegment> {
        tokenize(text, &self.triggers, self.options)
    }
}

/// Splits `text` into plain, mention and newline segments in one
/// left-to-right pass.
///
/// Triggers are tried in list order at the start of the text, after every
/// space, after every mention and, with newline handling on, after every
/// `\n`; the first that matches claims the mention. Plain text accumulates
/// until the next mention, newline or end of input and is then flushed as
/// word and whitespace runs. Concatenating the returned segments yields
/// `text`.
#[tracing::instrument(level = "debug", skip(text, triggers), fields(len = text.len(), triggers = triggers.len()))]
pub fn tokenize(text: &str, triggers: &[Trigger], options: ParserOptions) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut skip_until = vec![0; triggers.len()];
    let mut cursor = 0;
    // Start of plain text that has been scanned but not yet emitted.
    let mut pending = 0;

    while cursor < text.len() {
        let remaining = &text[cursor..];

        if options.handle_newlines && remaining.starts_with('\n') {
            split_plain(&text[pending..cursor], options.handle_newlines, &mut segments);
            segments.push(TextSegment::newline());
            cursor += 1;
            pending = cursor;
            continue;
        }

        let matched = triggers
            .iter()
            .zip(skip_until.iter_mut())
            .find_map(|(trigger, skip)| trigger.match_at(text, cursor, skip).map(|end| (trigger, end)));

        if let Some((trigger, end)) = matched {
            split_plain(&text[pending..cursor], options.handle_newlines, &mut segments);
            tracing::trace!(trigger = trigger.name(), start = cursor, end, "mention");
            segments.push(TextSegment::mention(&text[cursor..end], trigger));
            cursor = end;
            pending = cursor;
            continue;
        }

        // No mention here: skip past the next space, or stop at the next
        // handled newline so it gets its own segment.
        let next_break =
            remaining.find(|c: char| c == ' ' || (options.handle_newlines && c == '\n'));
        cursor = match next_break {
            Some(offset) if remaining[offset..].starts_with('\n') => cursor + offset,
            Some(offset) => cursor + offset + 1,
            None => text.len(),
        };
    }

    split_plain(&text[pending..], options.handle_newlines, &mut segments);
    segments
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Trigger construction errors. Text content never fails to tokenize.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Unsupported pattern type `{kind}` for trigger `{name}`")]
    UnsupportedPattern { name: String, kind: String },
    #[error("Invalid regex for trigger `{name}`: {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("Empty literal pattern for trigger `{name}`")]
    EmptyLiteral { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at_and_hash() -> Vec<Trigger> {
        vec![
            Trigger::literal("at", "@").unwrap(),
            Trigger::literal("hash", "##").unwrap(),
        ]
    }

    fn curly() -> Trigger {
        Trigger::regex("curly", r"\{\{[^}]*\}\}").unwrap().with_color("blue")
    }

    fn texts(segments: &[TextSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn mentions(segments: &[TextSegment]) -> Vec<(&str, &str)> {
        segments
            .iter()
            .filter(|s| s.is_mention)
            .map(|s| (s.text.as_str(), s.trigger_name.as_deref().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", &at_and_hash(), ParserOptions::default()).is_empty());
        assert!(tokenize("", &[], ParserOptions::with_newlines()).is_empty());
    }

    #[test]
    fn test_no_triggers_splits_on_whitespace_runs() {
        let segments = tokenize("a  b", &[], ParserOptions::default());
        assert_eq!(
            segments,
            vec![
                TextSegment::plain("a"),
                TextSegment::plain("  "),
                TextSegment::plain("b"),
            ]
        );
    }

    #[test]
    fn test_single_word() {
        let segments = tokenize("word", &[], ParserOptions::default());
        assert_eq!(segments, vec![TextSegment::plain("word")]);
    }

    #[test]
    fn test_first_trigger_in_list_wins() {
        let triggers = vec![
            Trigger::literal("a", "@").unwrap(),
            Trigger::literal("b", "@@").unwrap(),
        ];
        let segments = tokenize("@@x", &triggers, ParserOptions::default());
        assert_eq!(mentions(&segments), vec![("@@x", "a")]);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_literal_mentions_extend_to_next_break() {
        let segments = tokenize(
            "Hello @user1 and ##team! end",
            &at_and_hash(),
            ParserOptions::default(),
        );
        assert_eq!(
            texts(&segments),
            vec!["Hello", " ", "@user1", " ", "and", " ", "##team!", " ", "end"]
        );
        assert_eq!(mentions(&segments), vec![("@user1", "at"), ("##team!", "hash")]);
    }

    #[test]
    fn test_pattern_mention_exact_span() {
        let segments = tokenize("pre {{ v }} post", &[curly()], ParserOptions::default());
        assert_eq!(texts(&segments), vec!["pre", " ", "{{ v }}", " ", "post"]);
        assert_eq!(segments[2].trigger_name.as_deref(), Some("curly"));
        assert_eq!(segments[2].color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_newline_toggle() {
        let segments = tokenize("a\nb", &at_and_hash(), ParserOptions::with_newlines());
        assert_eq!(
            segments,
            vec![
                TextSegment::plain("a"),
                TextSegment::newline(),
                TextSegment::plain("b"),
            ]
        );

        let segments = tokenize("a\nb", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["a", "\n", "b"]);
        assert!(segments.iter().all(|s| !s.is_newline));
    }

    #[test]
    fn test_literal_mention_stops_at_newline() {
        let segments = tokenize("@user\nnext", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["@user", "\n", "next"]);
        assert!(segments[0].is_mention);
    }

    #[test]
    fn test_nested_trigger_inside_literal_mention() {
        let segments = tokenize("@##team", &at_and_hash(), ParserOptions::default());
        assert_eq!(mentions(&segments), vec![("@##team", "at")]);
    }

    #[test]
    fn test_triggers_not_tried_mid_word() {
        let segments = tokenize("mail me@host.com", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["mail", " ", "me@host.com"]);
        assert!(mentions(&segments).is_empty());
    }

    #[test]
    fn test_triggers_not_tried_after_tab() {
        let segments = tokenize("a\t@b", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["a", "\t", "@b"]);
        assert!(mentions(&segments).is_empty());
    }

    #[test]
    fn test_triggers_after_newline_need_newline_handling() {
        let segments = tokenize("hi\n@bob", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["hi", "\n", "@bob"]);
        assert!(mentions(&segments).is_empty());

        let segments = tokenize("hi\n@bob", &at_and_hash(), ParserOptions::with_newlines());
        assert_eq!(texts(&segments), vec!["hi", "\n", "@bob"]);
        assert_eq!(mentions(&segments), vec![("@bob", "at")]);
    }

    #[test]
    fn test_regex_matching_later_is_rejected() {
        let digits = Trigger::regex("digits", r"\d+").unwrap();
        let segments = tokenize("ab12 34", &[digits], ParserOptions::default());
        assert_eq!(texts(&segments), vec!["ab12", " ", "34"]);
        assert_eq!(mentions(&segments), vec![("34", "digits")]);
    }

    #[test]
    fn test_zero_length_regex_never_emits() {
        let xs = Trigger::regex("xs", "x*").unwrap();
        let segments = tokenize("xx ab", &[xs], ParserOptions::default());
        assert_eq!(texts(&segments), vec!["xx", " ", "ab"]);
        assert_eq!(mentions(&segments), vec![("xx", "xs")]);
    }

    #[test]
    fn test_regex_mention_followed_by_word() {
        let segments = tokenize("{{a}}bc d", &[curly()], ParserOptions::default());
        assert_eq!(texts(&segments), vec!["{{a}}", "bc", " ", "d"]);
    }

    #[test]
    fn test_unicode_text() {
        let segments = tokenize("héllo @ünï wörld", &at_and_hash(), ParserOptions::default());
        assert_eq!(texts(&segments), vec!["héllo", " ", "@ünï", " ", "wörld"]);
        assert_eq!(mentions(&segments), vec![("@ünï", "at")]);
    }

    #[test]
    fn test_crlf_with_newlines() {
        let segments = tokenize("a\r\nb", &[], ParserOptions::with_newlines());
        assert_eq!(texts(&segments), vec!["a", "\r", "\n", "b"]);
        assert!(segments[2].is_newline);
    }

    #[test]
    fn test_multiline_sample() {
        let mut triggers = at_and_hash();
        triggers.push(curly());
        let text = "Hello @user\nand\n##team!\n\nWe need the {{ variable }} here.";
        let segments = tokenize(text, &triggers, ParserOptions::with_newlines());

        assert_eq!(
            texts(&segments),
            vec![
                "Hello", " ", "@user", "\n", "and", "\n", "##team!", "\n", "\n", "We", " ", "need",
                " ", "the", " ", "{{ variable }}", " ", "here."
            ]
        );
        assert_eq!(segments.iter().filter(|s| s.is_newline).count(), 4);
        assert_eq!(
            mentions(&segments),
            vec![("@user", "at"), ("##team!", "hash"), ("{{ variable }}", "curly")]
        );
    }

    #[test]
    fn test_tokenizer_value() {
        let tokenizer = MentionTokenizer::new(at_and_hash(), ParserOptions::with_newlines());
        assert_eq!(tokenizer.triggers().len(), 2);
        assert!(tokenizer.options().handle_newlines);

        let first = tokenizer.tokenize("hi @there\n##all");
        let second = tokenizer.tokenize("hi @there\n##all");
        assert_eq!(first, second);
        assert_eq!(mentions(&first), vec![("@there", "at"), ("##all", "hash")]);
    }
}
