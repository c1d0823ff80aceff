//! Emoticon and emoji-code replacement.
//!
//! Three families are recognized: named `:code:` emoji codes, classic
//! text emoticons (`:)`, `:-(`, …), and bracketed shorthand (`(y)`,
//! `(!)`, …). Text emoticons and shorthand only match on word
//! boundaries: start of line or whitespace on the left, end of line,
//! whitespace, or sentence punctuation on the right. The boundary checks
//! are explicit scans; the regex crate has no lookaround.

use std::sync::LazyLock;

use regex::Regex;

static NAMED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_-]+):").expect("invalid emoji code regex"));

/// Wiki-style `:name:` emoji codes.
fn named_emoji(name: &str) -> Option<&'static str> {
    Some(match name {
        "smile" => "\u{1f60a}",
        "sad" => "\u{1f641}",
        "laugh" => "\u{1f604}",
        "wink" => "\u{1f609}",
        "thumbs-up" => "\u{1f44d}",
        "thumbs_down" => "\u{1f44e}",
        "information" => "\u{2139}\u{fe0f}",
        "warning" => "\u{26a0}\u{fe0f}",
        "question" => "\u{2753}",
        "check" => "\u{2705}",
        "cross" => "\u{274c}",
        "star" => "\u{2b50}",
        _ => return None,
    })
}

/// Classic text emoticons, longest form first so `:-)` wins over `:)`.
const SIMPLE: &[(&str, &str)] = &[
    (":-)", "\u{1f60a}"),
    (":-(", "\u{1f641}"),
    (":-D", "\u{1f604}"),
    (";-)", "\u{1f609}"),
    (":)", "\u{1f60a}"),
    (":(", "\u{1f641}"),
    (":D", "\u{1f604}"),
    (";)", "\u{1f609}"),
];

/// Single-letter shorthand inside parentheses, case-insensitive.
fn shorthand_emoji(code: char) -> Option<&'static str> {
    Some(match code.to_ascii_lowercase() {
        'y' => "\u{1f44d}",
        'n' => "\u{1f44e}",
        'i' => "\u{2139}\u{fe0f}",
        '!' => "\u{26a0}\u{fe0f}",
        '?' => "\u{2753}",
        '/' => "\u{2705}",
        'x' => "\u{274c}",
        '*' => "\u{2b50}",
        _ => return None,
    })
}

/// Replace all three emoticon families in `text`.
pub fn replace_emoticons(text: &str) -> String {
    let text = NAMED_CODE.replace_all(text, |caps: &regex::Captures| {
        named_emoji(&caps[1].to_lowercase())
            .map_or_else(|| caps[0].to_owned(), ToOwned::to_owned)
    });
    let text = replace_simple(&text);
    replace_shorthand(&text)
}

fn is_left_boundary(prev: Option<char>) -> bool {
    prev.is_none_or(char::is_whitespace)
}

fn is_right_boundary(next: Option<char>) -> bool {
    next.is_none_or(|c| c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
}

fn replace_simple(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut rest = text;

    'outer: while !rest.is_empty() {
        if is_left_boundary(prev) {
            for (pattern, emoji) in SIMPLE {
                if let Some(tail) = rest.strip_prefix(pattern) {
                    if is_right_boundary(tail.chars().next()) {
                        out.push_str(emoji);
                        prev = emoji.chars().last();
                        rest = tail;
                        continue 'outer;
                    }
                }
            }
        }
        let ch = rest.chars().next().expect("non-empty remainder");
        out.push(ch);
        prev = Some(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Parse `(y)`-style shorthand at the start of `rest`.
///
/// Accepts interior spaces and an optional backslash escape before the
/// code character: `( y )`, `(\!)`.
fn parse_shorthand(rest: &str) -> Option<(&'static str, usize)> {
    let inner = rest.strip_prefix('(')?;
    let trimmed = inner.trim_start_matches(' ');
    let trimmed = trimmed.strip_prefix('\\').unwrap_or(trimmed);
    let code = trimmed.chars().next()?;
    let emoji = shorthand_emoji(code)?;
    let after_code = &trimmed[code.len_utf8()..];
    let after_spaces = after_code.trim_start_matches(' ');
    let tail = after_spaces.strip_prefix(')')?;
    if !is_right_boundary(tail.chars().next()) {
        return None;
    }
    Some((emoji, rest.len() - tail.len()))
}

fn replace_shorthand(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut rest = text;

    while !rest.is_empty() {
        if is_left_boundary(prev) && rest.starts_with('(') {
            if let Some((emoji, consumed)) = parse_shorthand(rest) {
                out.push_str(emoji);
                prev = emoji.chars().last();
                rest = &rest[consumed..];
                continue;
            }
        }
        let ch = rest.chars().next().expect("non-empty remainder");
        out.push(ch);
        prev = Some(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn named_codes_replaced() {
        assert_eq!(replace_emoticons("a :smile: b"), "a \u{1f60a} b");
        assert_eq!(replace_emoticons(":check::cross:"), "\u{2705}\u{274c}");
    }

    #[test]
    fn named_codes_case_insensitive() {
        assert_eq!(replace_emoticons(":SMILE:"), "\u{1f60a}");
    }

    #[test]
    fn unknown_named_code_kept() {
        assert_eq!(replace_emoticons(":nope:"), ":nope:");
    }

    #[test]
    fn simple_emoticon_at_line_start() {
        assert_eq!(replace_emoticons(":) hello"), "\u{1f60a} hello");
    }

    #[test]
    fn simple_emoticon_needs_boundaries() {
        // Embedded in a word: untouched.
        assert_eq!(replace_emoticons("http://example.com:)x"), "http://example.com:)x");
        assert_eq!(replace_emoticons("see :-( here"), "see \u{1f641} here");
        assert_eq!(replace_emoticons("done :D."), "done \u{1f604}.");
    }

    #[test]
    fn long_form_wins_over_short() {
        assert_eq!(replace_emoticons("ok :-) then"), "ok \u{1f60a} then");
        assert_eq!(replace_emoticons("ok ;-) then"), "ok \u{1f609} then");
    }

    #[test]
    fn shorthand_variants() {
        assert_eq!(replace_emoticons("(y)"), "\u{1f44d}");
        assert_eq!(replace_emoticons("vote (N) now"), "vote \u{1f44e} now");
        assert_eq!(replace_emoticons("( i )"), "\u{2139}\u{fe0f}");
        assert_eq!(replace_emoticons("(\\!)"), "\u{26a0}\u{fe0f}");
        assert_eq!(replace_emoticons("(/) done"), "\u{2705} done");
    }

    #[test]
    fn shorthand_needs_boundaries() {
        assert_eq!(replace_emoticons("f(x)"), "f(x)");
        assert_eq!(replace_emoticons("(x)y"), "(x)y");
    }

    #[test]
    fn time_of_day_untouched() {
        assert_eq!(replace_emoticons("meet at 10:30:45 sharp"), "meet at 10:30:45 sharp");
    }
}
