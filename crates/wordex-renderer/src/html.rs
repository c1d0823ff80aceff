//! Lenient HTML fragment tree.
//!
//! Parses the HTML produced by the markdown renderer (plus the raw
//! markup injected by the macro preprocessor) into a small tree the
//! walker can dispatch over. The input is machine-generated and mostly
//! well-formed, but user markdown can smuggle in raw HTML, so the parser
//! tolerates unclosed void elements, mismatched end tags, and named
//! entities. Parsing never fails a conversion: input that cannot be
//! read as markup at all degrades to a single text node.

use std::collections::HashMap;
use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

/// Synthetic wrapper tag so fragments with multiple roots parse.
const ROOT_TAG: &str = "wordex-root";

/// HTML elements that never carry content and may appear unclosed.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([a-zA-Z]+);").expect("invalid entity regex"));

/// A node in the parsed HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// An element with a tag name, attributes and children.
    Element(HtmlElement),
    /// A text run (entities already decoded).
    Text(String),
}

/// An HTML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    /// Lowercased tag name.
    pub tag: String,
    /// Attribute map (values unescaped).
    pub attrs: HashMap<String, String>,
    /// Ordered child nodes.
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    fn new(tag: String, attrs: HashMap<String, String>) -> Self {
        Self {
            tag,
            attrs,
            children: Vec::new(),
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the `class` attribute contains the given class name.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Iterator over the element's class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Flattened text content of the element and all descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Child elements (text nodes skipped).
    pub fn child_elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|node| match node {
            HtmlNode::Element(el) => Some(el),
            HtmlNode::Text(_) => None,
        })
    }

    /// First child element matching a tag and class.
    #[must_use]
    pub fn find_child(&self, tag: &str, class: &str) -> Option<&HtmlElement> {
        self.child_elements()
            .find(|el| el.tag == tag && el.has_class(class))
    }
}

fn collect_text(nodes: &[HtmlNode], out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// Parse an HTML fragment into a synthetic root element.
///
/// Never fails: markup that quick-xml cannot read at all comes back as
/// one text node under the root.
#[must_use]
pub fn parse_fragment(html: &str) -> HtmlElement {
    match try_parse(html) {
        Ok(root) => root,
        Err(err) => {
            tracing::debug!("HTML fragment not parseable as markup, degrading to text: {err}");
            let mut root = HtmlElement::new(ROOT_TAG.to_owned(), HashMap::new());
            root.children.push(HtmlNode::Text(html.to_owned()));
            root
        }
    }
}

fn try_parse(html: &str) -> Result<HtmlElement, quick_xml::Error> {
    let prepared = convert_html_entities(html);
    let wrapped = format!("<{ROOT_TAG}>{prepared}</{ROOT_TAG}>");

    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = false;

    // Stack of open elements; index 0 is the synthetic root.
    let mut stack: Vec<HtmlElement> = vec![HtmlElement::new(ROOT_TAG.to_owned(), HashMap::new())];

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = decode_tag(&reader, &e);
                let element = HtmlElement::new(tag.clone(), decode_attrs(&reader, &e));
                if tag == ROOT_TAG {
                    continue;
                }
                if VOID_TAGS.contains(&tag.as_str()) {
                    attach(&mut stack, element);
                } else {
                    stack.push(element);
                }
            }
            Event::Empty(e) => {
                let element = HtmlElement::new(decode_tag(&reader, &e), decode_attrs(&reader, &e));
                attach(&mut stack, element);
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e).map(std::borrow::Cow::into_owned);
                if let Ok(text) = text {
                    append_text(&mut stack, &text);
                }
            }
            Event::GeneralRef(e) => {
                if let Ok(entity) = reader.decoder().decode(&e) {
                    append_text(&mut stack, &decode_entity(&entity));
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut stack, &text);
            }
            Event::End(e) => {
                let tag = decode_tag_name(&reader, e.name().as_ref());
                if tag == ROOT_TAG {
                    continue;
                }
                close_element(&mut stack, &tag);
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    // Anything left open is implicitly closed at end of input.
    while stack.len() > 1 {
        let element = stack.pop().expect("non-root stack entry");
        attach(&mut stack, element);
    }
    Ok(stack.pop().expect("root element"))
}

fn attach(stack: &mut [HtmlElement], element: HtmlElement) {
    stack
        .last_mut()
        .expect("element stack is never empty")
        .children
        .push(HtmlNode::Element(element));
}

fn append_text(stack: &mut [HtmlElement], text: &str) {
    let children = &mut stack
        .last_mut()
        .expect("element stack is never empty")
        .children;
    if let Some(HtmlNode::Text(existing)) = children.last_mut() {
        existing.push_str(text);
    } else {
        children.push(HtmlNode::Text(text.to_owned()));
    }
}

/// Close the innermost open element with the given tag; stray end tags
/// with no matching open element are ignored.
fn close_element(stack: &mut Vec<HtmlElement>, tag: &str) {
    let Some(pos) = stack.iter().rposition(|el| el.tag == tag) else {
        return;
    };
    if pos == 0 {
        return;
    }
    while stack.len() > pos {
        let element = stack.pop().expect("stack entries above match position");
        attach(stack, element);
    }
}

fn decode_tag<R>(reader: &Reader<R>, e: &BytesStart<'_>) -> String {
    decode_tag_name(reader, e.name().as_ref())
}

fn decode_tag_name<R>(reader: &Reader<R>, name: &[u8]) -> String {
    reader
        .decoder()
        .decode(name)
        .map_or_else(
            |_| String::from_utf8_lossy(name).into_owned(),
            std::borrow::Cow::into_owned,
        )
        .to_lowercase()
}

fn decode_attrs<R>(reader: &Reader<R>, e: &BytesStart<'_>) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.insert(key.to_lowercase(), value);
    }
    attrs
}

/// Decode a general entity reference (name without `&`/`;`).
fn decode_entity(entity: &str) -> String {
    match entity {
        "amp" => "&".to_owned(),
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "quot" => "\"".to_owned(),
        "apos" => "'".to_owned(),
        _ => {
            if let Some(num) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                if let Some(ch) = u32::from_str_radix(num, 16).ok().and_then(char::from_u32) {
                    return ch.to_string();
                }
            } else if let Some(num) = entity.strip_prefix('#') {
                if let Some(ch) = num.parse::<u32>().ok().and_then(char::from_u32) {
                    return ch.to_string();
                }
            }
            format!("&{entity};")
        }
    }
}

/// Convert named HTML entities the XML parser does not know to their
/// Unicode characters. Standard XML entities stay as-is.
fn convert_html_entities(html: &str) -> String {
    ENTITY_PATTERN
        .replace_all(html, |caps: &regex::Captures| {
            let name = &caps[1];
            if matches!(name, "amp" | "lt" | "gt" | "quot" | "apos") {
                caps[0].to_owned()
            } else {
                named_entity(name).map_or_else(|| caps[0].to_owned(), ToOwned::to_owned)
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{00b0}",
        "middot" => "\u{00b7}",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn first_element(root: &HtmlElement) -> &HtmlElement {
        root.child_elements().next().expect("at least one element")
    }

    #[test]
    fn parses_simple_paragraph() {
        let root = parse_fragment("<p>hello <strong>world</strong></p>");
        let p = first_element(&root);
        assert_eq!(p.tag, "p");
        assert_eq!(p.text(), "hello world");
        assert_eq!(p.children.len(), 2);
    }

    #[test]
    fn multiple_roots_under_synthetic_root() {
        let root = parse_fragment("<h1>a</h1>\n<p>b</p>");
        let tags: Vec<_> = root.child_elements().map(|el| el.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "p"]);
    }

    #[test]
    fn attributes_and_classes() {
        let root = parse_fragment(r#"<div class="panel panel-info" data-x="1"></div>"#);
        let div = first_element(&root);
        assert!(div.has_class("panel"));
        assert!(div.has_class("panel-info"));
        assert_eq!(div.attr("data-x"), Some("1"));
    }

    #[test]
    fn unclosed_void_tags_tolerated() {
        let root = parse_fragment("<p>a<br>b</p>");
        let p = first_element(&root);
        assert_eq!(p.children.len(), 3);
        assert_eq!(p.text(), "ab");
    }

    #[test]
    fn self_closed_image_parses() {
        let root = parse_fragment(r#"<p><img src="pic.png" alt="Alt" /></p>"#);
        let img = first_element(first_element(&root));
        assert_eq!(img.tag, "img");
        assert_eq!(img.attr("src"), Some("pic.png"));
    }

    #[test]
    fn stray_end_tag_ignored() {
        let root = parse_fragment("<p>a</em>b</p>");
        let p = first_element(&root);
        assert_eq!(p.text(), "ab");
    }

    #[test]
    fn unclosed_element_closed_at_eof() {
        let root = parse_fragment("<p>open");
        let p = first_element(&root);
        assert_eq!(p.text(), "open");
    }

    #[test]
    fn xml_entities_decoded() {
        let root = parse_fragment("<p>a &amp; b &lt;c&gt;</p>");
        assert_eq!(first_element(&root).text(), "a & b <c>");
    }

    #[test]
    fn named_html_entities_decoded() {
        let root = parse_fragment("<p>a&nbsp;b &mdash; c</p>");
        assert_eq!(first_element(&root).text(), "a\u{00a0}b \u{2014} c");
    }

    #[test]
    fn numeric_entities_decoded() {
        let root = parse_fragment("<p>&#65;&#x42;</p>");
        assert_eq!(first_element(&root).text(), "AB");
    }

    #[test]
    fn nested_lists_preserve_structure() {
        let root = parse_fragment("<ul><li>a<ul><li>b</li></ul></li></ul>");
        let ul = first_element(&root);
        let li = first_element(ul);
        assert_eq!(li.tag, "li");
        let nested = li.child_elements().find(|el| el.tag == "ul").expect("nested ul");
        assert_eq!(first_element(nested).text(), "b");
    }
}
