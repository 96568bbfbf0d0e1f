//! # Plain Run Handling
//!
//! Text that no trigger claims is cut into plain runs: a maximal run of
//! non-whitespace characters (a word) or a maximal run of whitespace. Every
//! run becomes one plain [`TextSegment`], so renderers can wrap and style per
//! word without ever splitting a word in two.
//!
//! ## Newlines
//!
//! When newline handling is enabled a whitespace run stops right before `\n`,
//! and each `\n` becomes a dedicated [`TextSegment::newline`] segment. When it
//! is disabled `\n` is ordinary whitespace and is folded into the surrounding
//! whitespace run.

use nom::{
    bytes::complete::take_while1,
    error::{context, VerboseError},
    IResult,
};

use super::segment::TextSegment;

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Parses a word: a maximal run of non-whitespace characters.
///
/// # Examples
///
/// ```
/// # use mentionize::tokenizer::whitespace::parse_word;
/// let (rest, word) = parse_word("hello world").unwrap();
/// assert_eq!(word, "hello");
/// assert_eq!(rest, " world");
/// ```
pub fn parse_word(input: &str) -> ParserResult<&str> {
    context("word expected", take_while1(|c: char| !c.is_whitespace()))(input)
}

/// Parses a maximal run of whitespace.
///
/// With `handle_newlines` set the run never includes `\n`, so newlines can be
/// emitted as segments of their own.
pub fn parse_spacing(input: &str, handle_newlines: bool) -> ParserResult<&str> {
    context(
        "whitespace expected",
        take_while1(move |c: char| c.is_whitespace() && !(handle_newlines && c == '\n')),
    )(input)
}

/// Parses the next plain run, a word or a whitespace run.
///
/// Fails only on empty input, or on a leading `\n` while `handle_newlines`
/// is set.
pub fn parse_run(input: &str, handle_newlines: bool) -> ParserResult<&str> {
    match parse_word(input) {
        Err(nom::Err::Error(_)) => parse_spacing(input, handle_newlines),
        parsed => parsed,
    }
}

/// Decomposes plain text into newline segments and plain runs, appending
/// them to `segments` in order.
#[tracing::instrument(level = "trace", skip(input, segments))]
pub fn split_plain(input: &str, handle_newlines: bool, segments: &mut Vec<TextSegment>) {
    let mut remaining = input;

    while !remaining.is_empty() {
        if handle_newlines && remaining.starts_with('\n') {
            segments.push(TextSegment::newline());
            remaining = &remaining[1..];
            continue;
        }

        match parse_run(remaining, handle_newlines) {
            Ok((rest, run)) => {
                segments.push(TextSegment::plain(run));
                remaining = rest;
            }
            Err(_) => {
                segments.push(TextSegment::plain(remaining));
                break;
            }
        }
    }
}
