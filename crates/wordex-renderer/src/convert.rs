//! Markdown-to-fragment conversion driver.
//!
//! Owns the per-conversion state (heading-numbering table, embedded
//! image map, macro collections, heading accumulator) and runs the
//! pipeline: macro preprocessing, markdown-to-HTML, HTML tree parse,
//! tree walk, fragment serialization.
//!
//! Nested macro bodies are rendered through a plain markdown pass that
//! shares none of this state, so headings inside an expand block never
//! leak into the outer conversion's heading list.

use std::collections::HashMap;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser};
use regex::Regex;

use crate::error::Result;
use crate::fragment::{self, RenderedFragment};
use crate::html;
use crate::preprocess::preprocess;
use crate::walker::{DocxWalker, WalkContext};

static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("invalid heading line regex"));
static MARKDOWN_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\\`*_{}\[\]()+\-.!])").expect("invalid escape regex"));

/// An embedded image payload from the page export.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    /// Base64-encoded image bytes.
    pub data: String,
    /// Declared MIME type (informational; the bytes decide).
    pub mime_type: String,
}

/// A titled link to another page (children / content-by-label entries).
#[derive(Debug, Clone)]
pub struct PageLink {
    /// Display title.
    pub title: String,
    /// Target URL; plain text is rendered when absent.
    pub url: Option<String>,
}

/// One content-by-label group supplied by the exporter.
#[derive(Debug, Clone)]
pub struct ContentByLabelGroup {
    /// Comma-separated label list the group was queried with.
    pub labels: String,
    /// Comma-separated space list the group was queried with.
    pub spaces: String,
    /// Matching pages.
    pub items: Vec<PageLink>,
}

/// Per-heading-level "the template numbers this automatically" table.
///
/// Computed once per conversion from the target template's styles and
/// immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct HeadingNumbering {
    numbered: [bool; 6],
}

impl HeadingNumbering {
    /// No level is auto-numbered.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Table from per-level flags, index 0 = heading level 1.
    #[must_use]
    pub fn from_levels(numbered: [bool; 6]) -> Self {
        Self { numbered }
    }

    /// Whether the given heading level (1-6) is auto-numbered.
    #[must_use]
    pub fn is_numbered(&self, level: usize) -> bool {
        (1..=6).contains(&level) && self.numbered[level - 1]
    }
}

/// Conversion inputs beyond the markdown itself.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Embedded images keyed by bare filename.
    pub images: HashMap<String, EmbeddedImage>,
    /// Entries for the `children` macro.
    pub macro_children: Vec<PageLink>,
    /// Groups for the `content-by-label` macro.
    pub content_by_label: Vec<ContentByLabelGroup>,
    /// Template heading-numbering table.
    pub heading_numbering: HeadingNumbering,
    /// Whether the TOC macro emits a field (`false` drops it).
    pub render_toc_macro: bool,
}

impl ConvertOptions {
    /// Options with no external collections and the TOC macro enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            render_toc_macro: true,
            ..Self::default()
        }
    }
}

/// Converts markdown text to Word document fragments.
pub struct MarkdownConverter {
    options: ConvertOptions,
    headings: Vec<(u8, String)>,
}

impl MarkdownConverter {
    /// Create a converter for one page export.
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            headings: Vec::new(),
        }
    }

    /// Convert markdown to a serialized document fragment.
    pub fn convert(&mut self, markdown: &str) -> Result<RenderedFragment> {
        self.headings = extract_headings(markdown);

        let preprocessed = preprocess(markdown, &markdown_to_html);
        let html_text = markdown_to_html(&preprocessed);
        let root = html::parse_fragment(&html_text);

        let ctx = WalkContext {
            images: &self.options.images,
            macro_children: &self.options.macro_children,
            content_by_label: &self.options.content_by_label,
            heading_numbering: &self.options.heading_numbering,
            render_toc_macro: self.options.render_toc_macro,
        };
        let (docx, emitted_toc) = DocxWalker::new(&ctx).walk(&root);
        fragment::serialize(docx, emitted_toc)
    }

    /// Headings (level, text) of the last converted markdown.
    #[must_use]
    pub fn headings(&self) -> &[(u8, String)] {
        &self.headings
    }
}

/// Markdown → HTML through the external renderer. Tables are enabled;
/// soft breaks are promoted to hard breaks so single newlines survive
/// (the wiki dialect treats them as line breaks).
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut html_text = String::new();
    pulldown_cmark::html::push_html(&mut html_text, parser);
    html_text
}

/// Extract `#`-style headings from raw markdown, with markdown escapes
/// removed.
fn extract_headings(markdown: &str) -> Vec<(u8, String)> {
    let mut headings = Vec::new();
    for line in markdown.lines() {
        if !line.starts_with('#') {
            continue;
        }
        let Some(caps) = HEADING_LINE.captures(line) else {
            continue;
        };
        let level = u8::try_from(caps[1].len()).unwrap_or(6);
        let text = MARKDOWN_ESCAPE.replace_all(caps[2].trim(), "$1").into_owned();
        if !text.is_empty() {
            headings.push((level, text));
        }
    }
    headings
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use pretty_assertions::assert_eq;

    use super::*;

    fn convert(markdown: &str) -> RenderedFragment {
        MarkdownConverter::new(ConvertOptions::new())
            .convert(markdown)
            .expect("conversion succeeds")
    }

    fn convert_with(markdown: &str, options: ConvertOptions) -> RenderedFragment {
        MarkdownConverter::new(options)
            .convert(markdown)
            .expect("conversion succeeds")
    }

    /// A tiny valid PNG, encoded on the fly so the bytes are always
    /// well-formed.
    fn png_base64(width: u32, height: u32) -> String {
        let mut bytes = Vec::new();
        image::DynamicImage::new_rgba8(width, height)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("png encode");
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn heading_gets_heading_style() {
        let fragment = convert("## Section");
        assert!(fragment.body_xml.contains("Heading2"));
        assert!(fragment.body_xml.contains("Section"));
    }

    #[test]
    fn numbered_heading_prefix_stripped_when_flagged() {
        let options = ConvertOptions {
            heading_numbering: HeadingNumbering::from_levels([true, false, false, false, false, false]),
            ..ConvertOptions::new()
        };
        let fragment = convert_with("# 6. Title Text", options);
        assert!(fragment.body_xml.contains(">Title Text<"));
        assert!(!fragment.body_xml.contains("6. Title Text"));
    }

    #[test]
    fn numbered_heading_prefix_kept_when_not_flagged() {
        let fragment = convert("# 6. Title Text");
        assert!(fragment.body_xml.contains("6. Title Text"));
    }

    #[test]
    fn bold_and_italic_runs() {
        let fragment = convert("**bold** and *italic*");
        assert!(fragment.body_xml.contains("<w:b"));
        assert!(fragment.body_xml.contains("<w:i"));
    }

    #[test]
    fn inline_code_uses_monospace_font() {
        let fragment = convert("call `frob()` now");
        assert!(fragment.body_xml.contains("Courier New"));
        assert!(fragment.body_xml.contains("frob()"));
    }

    #[test]
    fn soft_breaks_become_hard_breaks() {
        let fragment = convert("line one\nline two");
        assert!(fragment.body_xml.contains("<w:br"));
    }

    #[test]
    fn unordered_list_gets_bullets_and_indent() {
        let fragment = convert("- alpha\n- beta");
        assert!(fragment.body_xml.contains("\u{2022} "));
        assert!(fragment.body_xml.contains("alpha"));
        assert!(fragment.body_xml.contains(r#"w:left="360""#));
    }

    #[test]
    fn ordered_list_gets_numeric_prefixes() {
        let fragment = convert("1. first\n2. second");
        assert!(fragment.body_xml.contains("1. "));
        assert!(fragment.body_xml.contains("2. "));
    }

    #[test]
    fn nested_list_indents_deeper() {
        let fragment = convert("- outer\n    - inner");
        assert!(fragment.body_xml.contains(r#"w:left="360""#));
        assert!(fragment.body_xml.contains(r#"w:left="720""#));
    }

    #[test]
    fn task_list_items_get_checkboxes() {
        let fragment = convert("- [ ] open\n- [x] done");
        assert!(fragment.body_xml.contains('\u{2610}'));
        assert!(fragment.body_xml.contains('\u{2611}'));
        assert!(fragment.body_xml.contains(">open<"));
        assert!(fragment.body_xml.contains(">done<"));
        assert!(!fragment.body_xml.contains("[x]"));
    }

    #[test]
    fn table_renders_with_bold_header() {
        let fragment = convert("| Name | Value |\n| --- | --- |\n| a | 1 |");
        assert!(fragment.body_xml.contains("<w:tbl>"));
        assert!(fragment.body_xml.contains("Name"));
        assert!(fragment.body_xml.contains("<w:b"));
        assert!(fragment.body_xml.contains(">a<"));
    }

    #[test]
    fn code_block_gets_code_box_treatment() {
        let fragment = convert("```\nlet x = 1;\nlet y = 2;\n```");
        assert!(fragment.body_xml.contains("F5F5F5"));
        assert!(fragment.body_xml.contains("CCCCCC"));
        assert!(fragment.body_xml.contains("Courier New"));
        assert!(fragment.body_xml.contains("let x = 1;"));
        assert!(fragment.body_xml.contains("let y = 2;"));
    }

    #[test]
    fn blockquote_is_indented_italic() {
        let fragment = convert("> quoted words");
        assert!(fragment.body_xml.contains(r#"w:left="720""#));
        assert!(fragment.body_xml.contains("<w:i"));
        assert!(fragment.body_xml.contains("quoted words"));
    }

    #[test]
    fn hyperlink_styled_blue_with_relationship() {
        let fragment = convert("[docs](https://example.com/docs)");
        assert!(fragment.body_xml.contains("<w:hyperlink"));
        assert!(fragment.body_xml.contains("0563C1"));
        let hyperlinks: Vec<_> = fragment
            .relationships
            .iter()
            .filter(|rel| rel.kind == crate::RelationshipKind::Hyperlink)
            .collect();
        assert_eq!(hyperlinks.len(), 1);
        assert_eq!(hyperlinks[0].target, "https://example.com/docs");
    }

    #[test]
    fn embedded_image_sized_to_fixed_width() {
        let mut options = ConvertOptions::new();
        options.images.insert(
            "diagram.png".to_owned(),
            EmbeddedImage { data: png_base64(4, 2), mime_type: "image/png".to_owned() },
        );
        let fragment = convert_with("![Arch](attachments/diagram.png?version=3)", options);
        assert!(fragment.body_xml.contains("4572000"));
        assert!(fragment.body_xml.contains("2286000"));
        assert!(!fragment.body_xml.contains("[Image:"));
        assert!(!fragment.media.is_empty());
    }

    #[test]
    fn missing_image_degrades_to_placeholder() {
        let fragment = convert("![Arch](missing.png)");
        assert!(fragment.body_xml.contains("[Image: Arch]"));
        assert!(fragment.body_xml.contains("808080"));
    }

    #[test]
    fn undecodable_image_degrades_to_placeholder() {
        let mut options = ConvertOptions::new();
        options.images.insert(
            "bad.png".to_owned(),
            EmbeddedImage { data: "!!!notbase64!!!".to_owned(), mime_type: "image/png".to_owned() },
        );
        let fragment = convert_with("![](bad.png)", options);
        assert!(fragment.body_xml.contains("[Image: bad.png]"));
    }

    #[test]
    fn panel_macro_renders_styled_box() {
        let fragment = convert(":::info Be aware\nPanel body text.\n:::");
        assert!(fragment.body_xml.contains("DEEBFF"));
        assert!(fragment.body_xml.contains("0052CC"));
        assert!(fragment.body_xml.contains("\u{2139}\u{fe0f} Be aware"));
        assert!(fragment.body_xml.contains("Panel body text."));
    }

    #[test]
    fn untitled_panel_leads_with_icon() {
        let fragment = convert(":::tip\nHandy.\n:::");
        assert!(fragment.body_xml.contains("E3FCEF"));
        assert!(fragment.body_xml.contains("\u{1f4a1} "));
        assert!(fragment.body_xml.contains("Handy."));
    }

    #[test]
    fn panel_body_markdown_is_rendered() {
        let fragment = convert(":::warning\n- first\n- second\n:::");
        assert!(fragment.body_xml.contains("FFFAE6"));
        assert!(fragment.body_xml.contains("\u{2022} "));
        assert!(fragment.body_xml.contains("first"));
    }

    #[test]
    fn expand_macro_renders_box_with_title() {
        let fragment = convert(":::expand Long story\nDetails here.\n:::");
        assert!(fragment.body_xml.contains("\u{25b8} Long story"));
        assert!(fragment.body_xml.contains("7A869A"));
        assert!(fragment.body_xml.contains("Details here."));
    }

    #[test]
    fn hidden_excerpt_produces_no_output() {
        let fragment = convert(":::excerpt hidden\nSecret text\n:::");
        assert!(!fragment.body_xml.contains("Secret text"));
    }

    #[test]
    fn visible_excerpt_renders_content() {
        let fragment = convert(":::excerpt\nShared intro\n:::");
        assert!(fragment.body_xml.contains("Shared intro"));
    }

    #[test]
    fn status_badge_rendering() {
        let fragment = convert("state: {color:green}[SHIPPED]{color}");
        assert!(fragment.body_xml.contains(" SHIPPED "));
        assert!(fragment.body_xml.contains("green"));
        assert!(fragment.body_xml.contains("FFFFFF"));
    }

    #[test]
    fn unknown_badge_color_falls_back_to_gray() {
        let fragment = convert("{color:chartreuse}[ODD]{color}");
        assert!(fragment.body_xml.contains("lightGray"));
        assert!(fragment.body_xml.contains("000000"));
    }

    #[test]
    fn toc_macro_emits_field_construct() {
        let fragment = convert(":::toc\n:::");
        assert!(fragment.has_toc);
        assert!(fragment.body_xml.contains(r#"<w:docPartGallery w:val="Table of Contents"/>"#));
        assert!(fragment.body_xml.contains(r#"TOC \o "1-3" \h \z \u"#));
        assert!(!fragment.body_xml.contains("wordex:toc-field"));
    }

    #[test]
    fn toc_macro_suppressed_when_disabled() {
        let options = ConvertOptions {
            render_toc_macro: false,
            ..ConvertOptions::new()
        };
        let fragment = convert_with(":::toc\n:::", options);
        assert!(!fragment.has_toc);
        assert!(!fragment.body_xml.contains("docPartGallery"));
    }

    #[test]
    fn children_macro_lists_links() {
        let options = ConvertOptions {
            macro_children: vec![
                PageLink { title: "Child A".to_owned(), url: Some("https://wiki/a".to_owned()) },
                PageLink { title: "Child B".to_owned(), url: None },
            ],
            ..ConvertOptions::new()
        };
        let fragment = convert_with(":::children\n:::", options);
        assert!(fragment.body_xml.contains("Child A"));
        assert!(fragment.body_xml.contains("Child B"));
        assert!(fragment.body_xml.contains("\u{2022} "));
        assert!(fragment.relationships.iter().any(|rel| rel.target == "https://wiki/a"));
    }

    #[test]
    fn children_macro_without_entries_renders_nothing() {
        let fragment = convert(":::children\n:::");
        assert!(!fragment.body_xml.contains("\u{2022}"));
    }

    #[test]
    fn content_by_label_matches_by_set_equality() {
        let options = ConvertOptions {
            content_by_label: vec![ContentByLabelGroup {
                labels: "docs, api".to_owned(),
                spaces: "DEV".to_owned(),
                items: vec![PageLink { title: "Guide".to_owned(), url: None }],
            }],
            ..ConvertOptions::new()
        };
        // Reversed label order still matches.
        let fragment = convert_with(":::content-by-label labels=\"api,docs\" spaces=DEV\n:::", options);
        assert!(fragment.body_xml.contains("Guide"));
    }

    #[test]
    fn content_by_label_without_match_renders_nothing() {
        let fragment = convert(":::content-by-label labels=\"nothing\"\n:::");
        assert!(!fragment.body_xml.contains("\u{2022}"));
    }

    #[test]
    fn emoticons_and_strikethrough_survive_pipeline() {
        let fragment = convert("good (y) and ~gone~");
        assert!(fragment.body_xml.contains('\u{1f44d}'));
        assert!(fragment.body_xml.contains("<w:strike"));
        assert!(fragment.body_xml.contains("gone"));
    }

    #[test]
    fn heading_extraction_unescapes_and_records_levels() {
        let mut converter = MarkdownConverter::new(ConvertOptions::new());
        converter
            .convert("# Top\n\ntext\n\n### A \\*literal\\* star")
            .expect("conversion succeeds");
        assert_eq!(
            converter.headings(),
            &[(1, "Top".to_owned()), (3, "A *literal* star".to_owned())]
        );
    }

    #[test]
    fn nested_fragment_render_does_not_pollute_headings() {
        let mut converter = MarkdownConverter::new(ConvertOptions::new());
        converter
            .convert("# Outer\n\n:::expand T\n# Inner\n:::")
            .expect("conversion succeeds");
        assert_eq!(converter.headings(), &[(1, "Outer".to_owned())]);
    }

    #[test]
    fn plain_text_paragraph_roundtrip() {
        let fragment = convert("just a paragraph");
        assert!(fragment.body_xml.contains("just a paragraph"));
    }

    #[test]
    fn empty_markdown_produces_empty_body() {
        let fragment = convert("");
        assert!(!fragment.body_xml.contains("<w:t"));
    }
}
