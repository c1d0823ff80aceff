//! Heading-numbering detection from the template's style definitions.
//!
//! A heading level counts as auto-numbered when its paragraph style,
//! or any style it is based on, carries a `w:numPr` numbering
//! reference. The inheritance walk keeps a visited set; a cycle in the
//! `w:basedOn` chain terminates the walk and reports "not numbered".

use std::collections::{HashMap, HashSet};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use wordex_renderer::HeadingNumbering;

#[derive(Debug, Default)]
struct StyleRecord {
    style_id: String,
    style_type: String,
    name: String,
    based_on: Option<String>,
    has_numbering: bool,
}

/// Compute the heading-numbering table from `word/styles.xml` text.
///
/// Styles that cannot be parsed yield the all-unnumbered table; a
/// broken template should degrade, not fail the export.
#[must_use]
pub fn detect_heading_numbering(styles_xml: &str) -> HeadingNumbering {
    let styles = match parse_styles(styles_xml) {
        Ok(styles) => styles,
        Err(err) => {
            tracing::debug!("styles.xml not parseable, assuming unnumbered headings: {err}");
            return HeadingNumbering::none();
        }
    };

    let by_id: HashMap<&str, &StyleRecord> = styles
        .iter()
        .map(|style| (style.style_id.as_str(), style))
        .collect();

    let mut numbered = [false; 6];
    for (index, slot) in numbered.iter_mut().enumerate() {
        let target = format!("heading {}", index + 1);
        let style = styles.iter().find(|style| {
            style.style_type == "paragraph" && style.name.eq_ignore_ascii_case(&target)
        });
        if let Some(style) = style {
            *slot = chain_has_numbering(style, &by_id);
        }
    }
    HeadingNumbering::from_levels(numbered)
}

/// Walk the basedOn chain until numbering is found or the chain is
/// exhausted. The visited set makes cycle termination defined
/// behavior: stop, report not numbered.
fn chain_has_numbering(style: &StyleRecord, by_id: &HashMap<&str, &StyleRecord>) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = Some(style);
    while let Some(style) = current {
        if !visited.insert(style.style_id.as_str()) {
            return false;
        }
        if style.has_numbering {
            return true;
        }
        current = style
            .based_on
            .as_deref()
            .and_then(|id| by_id.get(id).copied());
    }
    false
}

fn attr_value<R>(reader: &Reader<R>, e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        if attr.key.as_ref() == name.as_bytes() {
            reader
                .decoder()
                .decode(&attr.value)
                .ok()
                .map(std::borrow::Cow::into_owned)
        } else {
            None
        }
    })
}

fn parse_styles(styles_xml: &str) -> Result<Vec<StyleRecord>, quick_xml::Error> {
    let mut reader = Reader::from_str(styles_xml);
    reader.config_mut().trim_text(true);

    let mut styles = Vec::new();
    let mut current: Option<StyleRecord> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"w:style" => {
                    current = Some(StyleRecord {
                        style_id: attr_value(&reader, &e, "w:styleId").unwrap_or_default(),
                        style_type: attr_value(&reader, &e, "w:type").unwrap_or_default(),
                        ..StyleRecord::default()
                    });
                }
                b"w:name" => {
                    if let Some(style) = current.as_mut() {
                        style.name = attr_value(&reader, &e, "w:val").unwrap_or_default();
                    }
                }
                b"w:basedOn" => {
                    if let Some(style) = current.as_mut() {
                        style.based_on = attr_value(&reader, &e, "w:val");
                    }
                }
                b"w:numPr" => {
                    if let Some(style) = current.as_mut() {
                        style.has_numbering = true;
                    }
                }
                _ => {}
            },
            Event::End(e) => {
                if e.name().as_ref() == b"w:style" {
                    if let Some(style) = current.take() {
                        styles.push(style);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(id: &str, name: &str, based_on: Option<&str>, numbered: bool) -> String {
        let based = based_on.map_or_else(String::new, |b| format!(r#"<w:basedOn w:val="{b}"/>"#));
        let numbering = if numbered {
            r#"<w:pPr><w:numPr><w:numId w:val="1"/></w:numPr></w:pPr>"#
        } else {
            ""
        };
        format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/>{based}{numbering}</w:style>"#
        )
    }

    fn styles_xml(styles: &[String]) -> String {
        format!(r#"<?xml version="1.0"?><w:styles>{}</w:styles>"#, styles.join(""))
    }

    #[test]
    fn directly_numbered_heading_detected() {
        let xml = styles_xml(&[style("Heading1", "heading 1", None, true)]);
        let numbering = detect_heading_numbering(&xml);
        assert!(numbering.is_numbered(1));
        assert!(!numbering.is_numbered(2));
    }

    #[test]
    fn numbering_inherited_through_based_on_chain() {
        let xml = styles_xml(&[
            style("ListBase", "list base", None, true),
            style("HMid", "intermediate", Some("ListBase"), false),
            style("Heading2", "heading 2", Some("HMid"), false),
        ]);
        let numbering = detect_heading_numbering(&xml);
        assert!(numbering.is_numbered(2));
    }

    #[test]
    fn heading_name_match_is_case_insensitive() {
        let xml = styles_xml(&[style("H3", "Heading 3", None, true)]);
        assert!(detect_heading_numbering(&xml).is_numbered(3));
    }

    #[test]
    fn unnumbered_chain_reports_false() {
        let xml = styles_xml(&[
            style("Base", "base", None, false),
            style("Heading1", "heading 1", Some("Base"), false),
        ]);
        assert!(!detect_heading_numbering(&xml).is_numbered(1));
    }

    #[test]
    fn based_on_cycle_terminates_as_not_numbered() {
        let xml = styles_xml(&[
            style("A", "heading 1", Some("B"), false),
            style("B", "b", Some("A"), false),
        ]);
        assert!(!detect_heading_numbering(&xml).is_numbered(1));
    }

    #[test]
    fn character_styles_ignored() {
        let xml = r#"<w:styles><w:style w:type="character" w:styleId="X"><w:name w:val="heading 1"/><w:pPr><w:numPr/></w:pPr></w:style></w:styles>"#;
        assert!(!detect_heading_numbering(xml).is_numbered(1));
    }

    #[test]
    fn garbage_input_degrades_to_unnumbered() {
        let numbering = detect_heading_numbering("<<<not xml");
        for level in 1..=6 {
            assert!(!numbering.is_numbered(level));
        }
    }

    #[test]
    fn missing_heading_styles_unnumbered() {
        let xml = styles_xml(&[style("Normal", "Normal", None, false)]);
        let numbering = detect_heading_numbering(&xml);
        for level in 1..=6 {
            assert!(!numbering.is_numbered(level));
        }
    }
}
