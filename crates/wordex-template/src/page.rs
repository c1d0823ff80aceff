//! Input page data model.
//!
//! Mirrors the JSON payload the exporter hands to the CLI. Every field
//! is optional in the wire format; missing values default to empty so
//! a minimal `{"title": ..., "markdown": ...}` payload renders.

use std::collections::HashMap;

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// A person reference (author, modifier).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
}

/// An embedded image payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePayload {
    /// Base64-encoded bytes.
    pub data: String,
    /// Declared MIME type.
    pub mime_type: String,
}

/// A child page with its own markdown body, exposed to template loops.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildPage {
    /// Child page title.
    pub title: String,
    /// Child page markdown body.
    pub markdown: String,
    /// Any further fields pass through to the template context.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A `{title, pageUrl}` entry for the children macro.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroChild {
    /// Display title.
    pub title: String,
    /// Target page URL.
    pub page_url: Option<String>,
}

/// A content-by-label group: the queried label/space lists and the
/// matching pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentByLabelEntry {
    /// Comma-separated label list.
    pub labels: String,
    /// Comma-separated space list.
    pub spaces: String,
    /// Matching pages.
    pub items: Vec<MacroChild>,
}

/// The page export payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageData {
    /// Page title.
    pub title: String,
    /// Page body markdown.
    pub markdown: String,
    /// Page author.
    pub author: Person,
    /// Last modifier; falls back to the author when absent.
    pub modifier: Option<Person>,
    /// Creation timestamp (ISO-8601).
    pub created: String,
    /// Modification timestamp (ISO-8601).
    pub modified: String,
    /// Page identifier.
    pub page_id: String,
    /// Full page URL.
    pub page_url: String,
    /// Short link.
    pub tiny_url: String,
    /// Page labels.
    pub labels: Vec<String>,
    /// Space key.
    pub space_key: String,
    /// Space name.
    pub space_name: String,
    /// Space URL.
    pub space_url: String,
    /// Who ran the export.
    pub exported_by: String,
    /// Template display name.
    pub template_name: String,
    /// Attachment records, passed through for template loops.
    #[serde(default = "empty_array")]
    pub attachments: serde_json::Value,
    /// Embedded images keyed by filename.
    pub images: HashMap<String, ImagePayload>,
    /// Child pages with markdown bodies.
    pub children: Vec<ChildPage>,
    /// Entries for the children macro.
    pub macro_children: Vec<MacroChild>,
    /// Groups for the content-by-label macro.
    pub macro_content_by_label: Vec<ContentByLabelEntry>,
    /// Suppress the TOC refresh prompt in the output.
    pub no_toc_prompt: bool,
    /// Whether the TOC macro renders a field (on by default).
    #[serde(default = "default_true")]
    pub render_toc_macro: bool,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            title: String::new(),
            markdown: String::new(),
            author: Person::default(),
            modifier: None,
            created: String::new(),
            modified: String::new(),
            page_id: String::new(),
            page_url: String::new(),
            tiny_url: String::new(),
            labels: Vec::new(),
            space_key: String::new(),
            space_name: String::new(),
            space_url: String::new(),
            exported_by: String::new(),
            template_name: String::new(),
            attachments: empty_array(),
            images: HashMap::new(),
            children: Vec::new(),
            macro_children: Vec::new(),
            macro_content_by_label: Vec::new(),
            no_toc_prompt: false,
            render_toc_macro: true,
        }
    }
}

impl PageData {
    /// The effective modifier: the modifier when present, else the
    /// author.
    #[must_use]
    pub fn effective_modifier(&self) -> &Person {
        self.modifier.as_ref().unwrap_or(&self.author)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_payload_parses_with_defaults() {
        let page: PageData =
            serde_json::from_str(r##"{"title": "T", "markdown": "# hi"}"##).expect("parse");
        assert_eq!(page.title, "T");
        assert!(page.render_toc_macro);
        assert!(!page.no_toc_prompt);
        assert!(page.attachments.is_array());
        assert_eq!(page.effective_modifier().display_name, "");
    }

    #[test]
    fn full_payload_parses() {
        let json = r##"{
            "title": "Page",
            "markdown": "body",
            "author": {"displayName": "Ada", "email": "ada@example.com"},
            "modifier": {"displayName": "Brin", "email": "brin@example.com"},
            "created": "2025-01-05T04:30:00Z",
            "pageId": "123",
            "labels": ["a", "b"],
            "images": {"x.png": {"data": "AAAA", "mimeType": "image/png"}},
            "children": [{"title": "C1", "markdown": "# c", "pageUrl": "https://wiki/c1"}],
            "macroChildren": [{"title": "C1", "pageUrl": "https://wiki/c1"}],
            "macroContentByLabel": [{"labels": "a,b", "spaces": "DEV", "items": []}],
            "noTocPrompt": true,
            "renderTocMacro": false
        }"##;
        let page: PageData = serde_json::from_str(json).expect("parse");
        assert_eq!(page.author.display_name, "Ada");
        assert_eq!(page.effective_modifier().display_name, "Brin");
        assert_eq!(page.images["x.png"].mime_type, "image/png");
        assert_eq!(page.children[0].extra["pageUrl"], "https://wiki/c1");
        assert_eq!(page.macro_children[0].page_url.as_deref(), Some("https://wiki/c1"));
        assert!(page.no_toc_prompt);
        assert!(!page.render_toc_macro);
    }

    #[test]
    fn modifier_falls_back_to_author() {
        let page: PageData = serde_json::from_str(
            r#"{"author": {"displayName": "Ada", "email": "a@x"}}"#,
        )
        .expect("parse");
        assert_eq!(page.effective_modifier().display_name, "Ada");
    }
}
