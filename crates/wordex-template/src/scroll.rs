//! Legacy `$scroll.x` placeholder dialect translation.
//!
//! Three passes over raw packaged XML text, in a fixed order:
//!
//! 1. [`normalize_split_placeholders`]: Word authoring tools split
//!    tokens across text runs, typically isolating the leading `$`.
//!    The `$` is moved into the run that carries the rest of the token.
//!    Must run before translation or split tokens will not match.
//! 2. [`convert_placeholders`]: `$scroll.<name>` / `$!scroll.<name>`
//!    with an optional `.("<pattern>")` date clause become native
//!    `{{ ... }}` tokens with a filter chain, the date filter before
//!    the default filter.
//! 3. [`promote_content_placeholder`]: the content placeholder moves
//!    from inline run text to its own paragraph-level insertion marker,
//!    preserving section-break metadata carried by the replaced
//!    paragraph.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Legacy variable name → native variable name.
pub const SCROLL_MAPPINGS: [(&str, &str); 18] = [
    ("title", "title"),
    ("content", "content"),
    ("creator.fullName", "author"),
    ("creator.email", "authorEmail"),
    ("modifier.fullName", "modifier"),
    ("modifier.email", "modifierEmail"),
    ("creationdate", "created"),
    ("modificationdate", "modified"),
    ("pageid", "pageId"),
    ("pageurl", "pageUrl"),
    ("tinyurl", "tinyUrl"),
    ("pagelabels", "labels"),
    ("space.key", "spaceKey"),
    ("space.name", "spaceName"),
    ("space.url", "spaceUrl"),
    ("exporter.fullName", "exportedBy"),
    ("exportdate", "exportDate"),
    ("template.name", "templateName"),
];

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\$(!)?scroll\.([A-Za-z][A-Za-z0-9]*(?:\.[A-Za-z][A-Za-z0-9]*)*)(?:\.?\("([^"]*)"\))?"#,
    )
    .expect("invalid placeholder regex")
});
static SPLIT_DOLLAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<w:t[^>]*>)\$</w:t>((?:</w:r>)?(?:<[^>]+>)*?)(<w:t[^>]*>)(!?scroll\.)")
        .expect("invalid split token regex")
});
static CONTENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*content\s*\}\}").expect("invalid content token regex"));
static PARAGRAPH_PROPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:pPr.*?</w:pPr>").expect("invalid pPr regex"));

/// Map a legacy variable name to its native name; unknown names pass
/// through unchanged.
fn map_variable(name: &str) -> &str {
    SCROLL_MAPPINGS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map_or(name, |(_, native)| native)
}

/// Translate all legacy placeholders in `text` to native syntax.
///
/// Already-native `{{ ... }}` tokens and plain prose are untouched;
/// the pass is idempotent.
pub fn convert_placeholders(text: &str) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let null_safe = caps.get(1).is_some();
            let variable = map_variable(&caps[2]);
            let date_pattern = caps.get(3).map(|m| m.as_str());

            let mut token = format!("{{{{ {variable}");
            if let Some(pattern) = date_pattern {
                token.push_str(&format!(" | date('{pattern}')"));
            }
            if null_safe {
                token.push_str(" | default('')");
            }
            token.push_str(" }}");
            token
        })
        .into_owned()
}

/// Move a `$` isolated in its own text run onto the run that starts
/// with `scroll.` / `!scroll.`, leaving intervening markup untouched.
pub fn normalize_split_placeholders(xml: &str) -> String {
    SPLIT_DOLLAR
        .replace_all(xml, |caps: &Captures| {
            format!("{}</w:t>{}{}${}", &caps[1], &caps[2], &caps[3], &caps[4])
        })
        .into_owned()
}

/// Replace the paragraph holding the inline `{{ content }}` token with
/// a paragraph-level insertion marker.
///
/// Fragment insertion needs its own paragraph; the whole `<w:p>`
/// element is replaced by `{{p content }}`. If the paragraph's
/// properties carried section-break metadata, that metadata is
/// re-emitted as a trailing empty paragraph so section boundaries are
/// not lost.
pub fn promote_content_placeholder(xml: &str) -> String {
    if !CONTENT_TOKEN.is_match(xml) {
        return xml.to_owned();
    }

    let mut out = String::with_capacity(xml.len());
    let mut i = 0;
    while i < xml.len() {
        let Some(start) = find_paragraph_start(xml, i) else {
            out.push_str(&xml[i..]);
            break;
        };
        out.push_str(&xml[i..start]);

        let Some(end) = find_paragraph_end(xml, start) else {
            out.push_str(&xml[start..]);
            break;
        };

        let paragraph = &xml[start..end];
        if CONTENT_TOKEN.is_match(paragraph) {
            out.push_str("{{p content }}");
            if let Some(props) = PARAGRAPH_PROPS.find(paragraph) {
                if props.as_str().contains("<w:sectPr") {
                    out.push_str("<w:p>");
                    out.push_str(props.as_str());
                    out.push_str("</w:p>");
                }
            }
        } else {
            out.push_str(paragraph);
        }
        i = end;
    }
    out
}

fn is_open_paragraph_at(bytes: &[u8], idx: usize) -> bool {
    bytes[idx..].starts_with(b"<w:p") && matches!(bytes.get(idx + 4), Some(b' ' | b'>'))
}

fn is_close_paragraph_at(bytes: &[u8], idx: usize) -> bool {
    bytes[idx..].starts_with(b"</w:p") && matches!(bytes.get(idx + 5), None | Some(b' ' | b'>'))
}

fn find_paragraph_start(xml: &str, from: usize) -> Option<usize> {
    let bytes = xml.as_bytes();
    (from..xml.len()).find(|&idx| is_open_paragraph_at(bytes, idx))
}

/// Balanced-depth scan for the end of the paragraph starting at
/// `start`. Paragraphs do not normally nest, but nested constructs
/// (text boxes) can contain further `<w:p>` elements, and `<w:pPr>` or
/// `<w:pgSz>` must not be mistaken for paragraph markers.
fn find_paragraph_end(xml: &str, start: usize) -> Option<usize> {
    let bytes = xml.as_bytes();
    let mut depth = 0usize;
    let mut idx = start;
    while idx < xml.len() {
        if is_open_paragraph_at(bytes, idx) {
            depth += 1;
        } else if is_close_paragraph_at(bytes, idx) {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                let close = xml[idx..].find('>')?;
                return Some(idx + close + 1);
            }
        }
        idx += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn simple_placeholder_translates() {
        assert_eq!(convert_placeholders("$scroll.title"), "{{ title }}");
    }

    #[test]
    fn mapped_names_translate_to_native_variables() {
        assert_eq!(convert_placeholders("$scroll.creator.fullName"), "{{ author }}");
        assert_eq!(convert_placeholders("$scroll.space.key"), "{{ spaceKey }}");
        assert_eq!(convert_placeholders("$scroll.pagelabels"), "{{ labels }}");
    }

    #[test]
    fn unmapped_names_pass_through_as_identity() {
        assert_eq!(convert_placeholders("$scroll.customField"), "{{ customField }}");
    }

    #[test]
    fn every_mapped_name_translates() {
        for (legacy, native) in SCROLL_MAPPINGS {
            let input = format!("$scroll.{legacy}");
            assert_eq!(convert_placeholders(&input), format!("{{{{ {native} }}}}"));
        }
    }

    #[test]
    fn null_safe_adds_default_filter() {
        assert_eq!(
            convert_placeholders("$!scroll.tinyurl"),
            "{{ tinyUrl | default('') }}"
        );
    }

    #[test]
    fn date_clause_adds_date_filter() {
        assert_eq!(
            convert_placeholders(r#"$scroll.creationdate.("yyyy-MM-dd")"#),
            "{{ created | date('yyyy-MM-dd') }}"
        );
        assert_eq!(
            convert_placeholders(r#"$scroll.modificationdate("dd.MM.yyyy")"#),
            "{{ modified | date('dd.MM.yyyy') }}"
        );
    }

    #[test]
    fn null_safe_with_date_orders_date_before_default() {
        assert_eq!(
            convert_placeholders(r#"$!scroll.creationdate.("yyyy-MM-dd")"#),
            "{{ created | date('yyyy-MM-dd') | default('') }}"
        );
    }

    #[test]
    fn already_native_tokens_untouched() {
        assert_eq!(convert_placeholders("{{ title }}"), "{{ title }}");
        assert_eq!(
            convert_placeholders("{{ created | date('yyyy') }}"),
            "{{ created | date('yyyy') }}"
        );
    }

    #[test]
    fn plain_prose_untouched() {
        let prose = "costs $5 at scroll.example.com";
        assert_eq!(convert_placeholders(prose), prose);
    }

    #[test]
    fn trailing_punctuation_stays_outside_token() {
        assert_eq!(convert_placeholders("$scroll.title."), "{{ title }}.");
        assert_eq!(convert_placeholders("$scroll.title</w:t>"), "{{ title }}</w:t>");
    }

    #[test]
    fn translation_is_idempotent() {
        let once = convert_placeholders("$scroll.title and $!scroll.pageurl");
        assert_eq!(convert_placeholders(&once), once);
    }

    #[test]
    fn split_dollar_moves_onto_token_run() {
        let xml = r"<w:r><w:t>$</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>scroll.title</w:t></w:r>";
        let repaired = normalize_split_placeholders(xml);
        assert_eq!(
            repaired,
            r"<w:r><w:t></w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>$scroll.title</w:t></w:r>"
        );
    }

    #[test]
    fn split_repair_then_translate_equals_joined_translation() {
        let split = r"<w:r><w:t>$</w:t></w:r><w:r><w:t>!scroll.pageurl</w:t></w:r>";
        let repaired = convert_placeholders(&normalize_split_placeholders(split));
        assert!(repaired.contains("{{ pageUrl | default('') }}"));

        let joined = convert_placeholders(r"<w:r><w:t>$!scroll.pageurl</w:t></w:r>");
        assert!(joined.contains("{{ pageUrl | default('') }}"));
    }

    #[test]
    fn split_repair_ignores_prose_dollar_runs() {
        let xml = r"<w:r><w:t>price: 5$</w:t></w:r><w:r><w:t>scroll.title</w:t></w:r>";
        assert_eq!(normalize_split_placeholders(xml), xml);
    }

    #[test]
    fn promotion_replaces_whole_paragraph() {
        let xml = "<w:body><w:p><w:r><w:t>{{ content }}</w:t></w:r></w:p></w:body>";
        assert_eq!(
            promote_content_placeholder(xml),
            "<w:body>{{p content }}</w:body>"
        );
    }

    #[test]
    fn promotion_keeps_other_paragraphs() {
        let xml = "<w:p><w:r><w:t>intro</w:t></w:r></w:p><w:p><w:r><w:t>{{ content }}</w:t></w:r></w:p>";
        assert_eq!(
            promote_content_placeholder(xml),
            "<w:p><w:r><w:t>intro</w:t></w:r></w:p>{{p content }}"
        );
    }

    #[test]
    fn promotion_preserves_section_break_metadata() {
        let xml = "<w:p><w:pPr><w:sectPr><w:pgSz/></w:sectPr></w:pPr><w:r><w:t>{{ content }}</w:t></w:r></w:p>";
        assert_eq!(
            promote_content_placeholder(xml),
            "{{p content }}<w:p><w:pPr><w:sectPr><w:pgSz/></w:sectPr></w:pPr></w:p>"
        );
    }

    #[test]
    fn promotion_without_content_token_is_identity() {
        let xml = "<w:p><w:r><w:t>nothing here</w:t></w:r></w:p>";
        assert_eq!(promote_content_placeholder(xml), xml);
    }

    #[test]
    fn promotion_ignores_lookalike_markers() {
        // w:pPr and w:pgSz must not be treated as paragraph boundaries.
        let xml = "<w:p><w:pPr><w:jc w:val=\"left\"/></w:pPr><w:r><w:t>{{ content }}</w:t></w:r></w:p><w:sectPr><w:pgSz/></w:sectPr>";
        assert_eq!(
            promote_content_placeholder(xml),
            "{{p content }}<w:sectPr><w:pgSz/></w:sectPr>"
        );
    }

    #[test]
    fn promotion_handles_nested_paragraph_markup() {
        let xml = "<w:p><w:r><w:pict><w:txbxContent><w:p><w:r><w:t>boxed</w:t></w:r></w:p></w:txbxContent></w:pict><w:t>{{ content }}</w:t></w:r></w:p>";
        assert_eq!(promote_content_placeholder(xml), "{{p content }}");
    }
}
