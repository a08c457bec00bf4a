//! Left-to-right scanner for bare URLs and `@mentions` in a text run.
//!
//! Produces non-overlapping spans. At any position a URL is tried before a
//! mention, so URL spans take precedence when both could start.

use crate::utils::{MAX_MENTION_CHARS, safe_url};

const URL_PREFIXES: &[&str] = &["https://", "http://", "www."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Url,
    Mention,
}

/// Byte range `[start, end)` of a recognized token.
///
/// For URLs the range excludes trailing punctuation, which stays plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

/// Closing brackets, quotes, and Latin/CJK sentence punctuation.
fn is_trailing_punct(c: char) -> bool {
    matches!(
        c,
        ')' | ']' | '}' | '.' | ',' | '!' | '?' | ';' | ':' | '，' | '。' | '！' | '？' | '；'
            | '：' | '）' | '】' | '〕' | '〉' | '〗' | '》' | '」' | '』' | '”' | '’' | '"'
            | '\''
    )
}

/// Characters that may precede `@` in a mention.
fn is_mention_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '(' | '（' | '【' | '[' | '{' | '>' | '《' | '“' | '‘' | '\'' | '"' | '、' | '，' | '。'
                | '！' | '？' | ';' | ':'
        )
}

fn is_mention_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '·' | '\u{4e00}'..='\u{9fa5}')
}

fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Outcome of trying a URL at one position.
enum UrlMatch {
    /// No URL prefix here.
    NoMatch,
    /// A link ending at this byte offset.
    Link(usize),
    /// A URL prefix whose run failed validation; resume scanning at this
    /// byte offset (the end of the whitespace-free run).
    Rejected(usize),
}

/// Match a URL starting at byte `start`.
fn match_url(text: &str, start: usize, prev: Option<char>) -> UrlMatch {
    if prev.is_some_and(is_ascii_word) {
        return UrlMatch::NoMatch;
    }
    let rest = &text[start..];
    let Some(prefix) = URL_PREFIXES
        .iter()
        .find(|p| starts_with_ignore_case(rest, p))
    else {
        return UrlMatch::NoMatch;
    };

    let run_len = rest
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(rest.len());
    let linked = rest[..run_len].trim_end_matches(is_trailing_punct);
    if linked.len() > prefix.len() && safe_url(linked).is_some() {
        UrlMatch::Link(start + linked.len())
    } else {
        UrlMatch::Rejected(start + run_len)
    }
}

/// Match a mention starting at byte `start` (which must hold `@`).
fn match_mention(text: &str, start: usize, prev: Option<char>) -> Option<usize> {
    if prev.is_some_and(|c| !is_mention_boundary(c)) {
        return None;
    }
    let name_start = start + '@'.len_utf8();
    let name_len: usize = text[name_start..]
        .chars()
        .take_while(|c| is_mention_char(*c))
        .take(MAX_MENTION_CHARS)
        .map(char::len_utf8)
        .sum();
    (name_len > 0).then_some(name_start + name_len)
}

/// Scan `text` for URL and mention spans.
#[must_use]
pub fn scan(text: &str, linkify: bool, mentionify: bool) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    if !linkify && !mentionify {
        return spans;
    }

    let mut prev: Option<char> = None;
    let mut pos = 0;
    while pos < text.len() {
        let Some(c) = text[pos..].chars().next() else {
            break;
        };

        if linkify {
            match match_url(text, pos, prev) {
                UrlMatch::Link(end) => {
                    spans.push(TokenSpan {
                        start: pos,
                        end,
                        kind: SpanKind::Url,
                    });
                    prev = text[..end].chars().next_back();
                    pos = end;
                    continue;
                }
                // Later prefixes in the same run would re-validate it.
                UrlMatch::Rejected(run_end) => {
                    prev = text[..run_end].chars().next_back();
                    pos = run_end;
                    continue;
                }
                UrlMatch::NoMatch => {}
            }
        }

        if mentionify
            && c == '@'
            && let Some(end) = match_mention(text, pos, prev)
        {
            spans.push(TokenSpan {
                start: pos,
                end,
                kind: SpanKind::Mention,
            });
            prev = text[..end].chars().next_back();
            pos = end;
            continue;
        }

        prev = Some(c);
        pos += c.len_utf8();
    }

    spans
}
