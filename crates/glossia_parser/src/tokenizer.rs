//! Per-language tokenization strategies.
//!
//! The engine holds no universal segmentation rule. Each language registers a
//! [`Tokenizer`] at load time; the registry dispatches to it. Two strategies
//! cover the shipped language set:
//!
//! - [`SpaceDelimited`] for scripts that separate words with whitespace
//!   (Latin, Cyrillic, Hangul, Devanagari);
//! - [`HanScript`] for Chinese and Japanese, which segments contiguous CJK
//!   runs against a known-word vocabulary.
//!
//! Both preserve quoted strings as atomic tokens, recognize selector sigils
//! (`#id`, `.class`, `@attr`), and report byte offsets for diagnostics.

use std::collections::HashSet;

use glossia_language::text::normalize;

use crate::token::{LanguageToken, TokenKind, TokenStream};

/// A per-language tokenization strategy.
pub trait Tokenizer: Send + Sync {
    /// Splits raw input into a token stream.
    fn tokenize(&self, input: &str) -> TokenStream;
}

/// Characters stripped as sentence punctuation in both strategies.
const STRIP_PUNCTUATION: &str = ",!?;:、。，！？；：（）「」()";

fn is_strip_punctuation(ch: char) -> bool {
    STRIP_PUNCTUATION.contains(ch)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Selector names are ASCII (CSS identifiers); a particle or word glued onto
/// a selector in an unspaced script splits off as its own token.
fn is_selector_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Tokenizer for whitespace-separated scripts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpaceDelimited;

impl SpaceDelimited {
    /// Creates the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SpaceDelimited {
    fn tokenize(&self, input: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let mut i = 0;

        while i < chars.len() {
            let (start, ch) = chars[i];

            if ch.is_whitespace() || is_strip_punctuation(ch) {
                i += 1;
                continue;
            }

            if ch == '"' || ch == '\'' {
                i = lex_quoted(input, &chars, i, &mut tokens);
                continue;
            }

            if let Some(kind) = selector_kind(ch) {
                if next_is(&chars, i + 1, is_selector_char) {
                    i = lex_selector(input, &chars, i, kind, &mut tokens);
                    continue;
                }
            }

            if ch.is_ascii_digit() {
                i = lex_number(input, &chars, i, &mut tokens);
                continue;
            }

            // A word runs to the next whitespace, quote, or stripped
            // punctuation. Interior dots stay (property paths); trailing
            // dots are sentence punctuation and get trimmed.
            let mut j = i;
            while j < chars.len() {
                let (_, c) = chars[j];
                if c.is_whitespace() || c == '"' || c == '\'' || is_strip_punctuation(c) {
                    break;
                }
                j += 1;
            }
            let end = byte_end(input, &chars, j);
            let mut text = &input[start..end];
            while let Some(stripped) = text.strip_suffix('.') {
                text = stripped;
            }
            if !text.is_empty() {
                tokens.push(LanguageToken::new(
                    TokenKind::Word,
                    text,
                    normalize(text),
                    start,
                    start + text.len(),
                ));
            }
            i = j;
        }

        TokenStream::new(input, tokens)
    }
}

/// Tokenizer for Chinese and Japanese text.
///
/// Contiguous CJK runs are segmented greedily against a vocabulary of known
/// words (command keywords and role markers); unknown stretches between
/// known words stay together as one token. Embedded Latin identifiers,
/// numbers, selectors, and quoted strings tokenize as in [`SpaceDelimited`].
#[derive(Clone, Debug, Default)]
pub struct HanScript {
    vocabulary: HashSet<String>,
    max_word_chars: usize,
}

impl HanScript {
    /// Creates the strategy from the language's known-word vocabulary.
    #[must_use]
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: HashSet<String> = vocabulary.into_iter().map(Into::into).collect();
        let max_word_chars = vocabulary
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(1);
        Self {
            vocabulary,
            max_word_chars,
        }
    }

    /// Longest vocabulary word starting at `chars[i]`, as a char count.
    fn longest_word_at(&self, chars: &[(usize, char)], i: usize) -> Option<usize> {
        let available = chars.len() - i;
        for len in (1..=self.max_word_chars.min(available)).rev() {
            let candidate: String = chars[i..i + len].iter().map(|(_, c)| *c).collect();
            if self.vocabulary.contains(&candidate) {
                return Some(len);
            }
        }
        None
    }
}

impl Tokenizer for HanScript {
    fn tokenize(&self, input: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let mut i = 0;

        while i < chars.len() {
            let (start, ch) = chars[i];

            if ch.is_whitespace() || is_strip_punctuation(ch) {
                i += 1;
                continue;
            }

            if ch == '"' || ch == '\'' {
                i = lex_quoted(input, &chars, i, &mut tokens);
                continue;
            }

            if let Some(kind) = selector_kind(ch) {
                if next_is(&chars, i + 1, is_selector_char) {
                    i = lex_selector(input, &chars, i, kind, &mut tokens);
                    continue;
                }
            }

            if ch.is_ascii_digit() {
                i = lex_number(input, &chars, i, &mut tokens);
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                let mut j = i;
                while j < chars.len() && is_ident_char(chars[j].1) {
                    j += 1;
                }
                let end = byte_end(input, &chars, j);
                let text = &input[start..end];
                tokens.push(LanguageToken::new(
                    TokenKind::Word,
                    text,
                    normalize(text),
                    start,
                    end,
                ));
                i = j;
                continue;
            }

            // CJK text: emit known words eagerly; accumulate unknown chars
            // until the next known word, boundary, or end of run.
            if let Some(len) = self.longest_word_at(&chars, i) {
                let end = byte_end(input, &chars, i + len);
                let text = &input[start..end];
                tokens.push(LanguageToken::new(
                    TokenKind::Word,
                    text,
                    normalize(text),
                    start,
                    end,
                ));
                i += len;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() {
                let (_, c) = chars[j];
                let boundary = c.is_whitespace()
                    || is_strip_punctuation(c)
                    || c.is_ascii()
                    || self.longest_word_at(&chars, j).is_some();
                if boundary {
                    break;
                }
                j += 1;
            }
            let end = byte_end(input, &chars, j);
            let text = &input[start..end];
            tokens.push(LanguageToken::new(
                TokenKind::Word,
                text,
                normalize(text),
                start,
                end,
            ));
            i = j;
        }

        TokenStream::new(input, tokens)
    }
}

fn selector_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '#' => Some(TokenKind::IdSelector),
        '.' => Some(TokenKind::ClassSelector),
        '@' => Some(TokenKind::AttributeRef),
        _ => None,
    }
}

fn next_is(chars: &[(usize, char)], i: usize, pred: impl Fn(char) -> bool) -> bool {
    chars.get(i).is_some_and(|(_, c)| pred(*c))
}

/// Byte offset just past `chars[j - 1]`, or the input length at the end.
fn byte_end(input: &str, chars: &[(usize, char)], j: usize) -> usize {
    chars.get(j).map_or(input.len(), |(idx, _)| *idx)
}

fn lex_quoted(
    input: &str,
    chars: &[(usize, char)],
    i: usize,
    tokens: &mut Vec<LanguageToken>,
) -> usize {
    let (start, quote) = chars[i];
    let mut j = i + 1;
    while j < chars.len() && chars[j].1 != quote {
        j += 1;
    }
    // Include the closing quote when present; an unterminated quote runs to
    // the end of input.
    let j = if j < chars.len() { j + 1 } else { j };
    let end = byte_end(input, chars, j);
    let text = &input[start..end];
    tokens.push(LanguageToken::new(TokenKind::Quoted, text, text, start, end));
    j
}

fn lex_selector(
    input: &str,
    chars: &[(usize, char)],
    i: usize,
    kind: TokenKind,
    tokens: &mut Vec<LanguageToken>,
) -> usize {
    let (start, _) = chars[i];
    let mut j = i + 1;
    while j < chars.len() && is_selector_char(chars[j].1) {
        j += 1;
    }
    let end = byte_end(input, chars, j);
    let text = &input[start..end];
    tokens.push(LanguageToken::new(kind, text, text, start, end));
    j
}

fn lex_number(
    input: &str,
    chars: &[(usize, char)],
    i: usize,
    tokens: &mut Vec<LanguageToken>,
) -> usize {
    let (start, _) = chars[i];
    let mut j = i + 1;
    let mut seen_dot = false;
    while j < chars.len() {
        let (_, c) = chars[j];
        if c.is_ascii_digit() {
            j += 1;
        } else if c == '.' && !seen_dot && next_is(chars, j + 1, |d| d.is_ascii_digit()) {
            seen_dot = true;
            j += 1;
        } else {
            break;
        }
    }
    let end = byte_end(input, chars, j);
    let text = &input[start..end];
    tokens.push(LanguageToken::new(TokenKind::Number, text, text, start, end));
    j
}
