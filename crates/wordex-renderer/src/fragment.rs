//! Fragment serialization.
//!
//! Packs the walker's document, reads the package back, and extracts
//! the pieces a template needs to splice the fragment in: the body XML,
//! the hyperlink/image relationships, and the media payloads. The TOC
//! sentinel paragraph is swapped for the native field construct here,
//! at the XML layer, where the construct's exact shape is controlled.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use docx_rs::Docx;
use regex::Regex;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::walker::TOC_SENTINEL;

/// Relationship types carried over into the host document.
const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
const IMAGE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Native table-of-contents field: SDT-wrapped field-character sequence
/// requesting outline levels 1-3 with hyperlinks, identified through the
/// "Table of Contents" document-part gallery so post-processing can
/// find it.
const TOC_FIELD_XML: &str = concat!(
    r#"<w:sdt><w:sdtPr><w:docPartObj>"#,
    r#"<w:docPartGallery w:val="Table of Contents"/><w:docPartUnique/>"#,
    r#"</w:docPartObj></w:sdtPr><w:sdtContent><w:p>"#,
    r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#,
    r#"<w:r><w:instrText xml:space="preserve"> TOC \o "1-3" \h \z \u </w:instrText></w:r>"#,
    r#"<w:r><w:fldChar w:fldCharType="separate"/></w:r>"#,
    r#"<w:r><w:t>Table of Contents - Update to populate</w:t></w:r>"#,
    r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#,
    r#"</w:p></w:sdtContent></w:sdt>"#,
);

static RELATIONSHIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Relationship\b[^>]*>").expect("invalid relationship regex"));
static REL_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(Id|Type|Target)="([^"]*)""#).expect("invalid relationship attr regex")
});

/// What a fragment relationship points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// External hyperlink target.
    Hyperlink,
    /// Embedded image part.
    Image,
}

/// A hyperlink or image relationship the fragment carries.
#[derive(Debug, Clone)]
pub struct FragmentRelationship {
    /// Relationship id as referenced from the body XML.
    pub id: String,
    /// Relationship kind.
    pub kind: RelationshipKind,
    /// Relationship target (URL or media path relative to `word/`).
    pub target: String,
}

/// A serialized document fragment, ready to be spliced into a host
/// document at a paragraph-level placeholder.
#[derive(Debug, Clone)]
pub struct RenderedFragment {
    /// Inner body XML (no `<w:body>` wrapper, no section properties).
    pub body_xml: String,
    /// Hyperlink/image relationships referenced by the body.
    pub relationships: Vec<FragmentRelationship>,
    /// Media payloads keyed by archive path (`word/media/...`).
    pub media: Vec<(String, Vec<u8>)>,
    /// Whether the fragment contains a table-of-contents field.
    pub has_toc: bool,
}

/// Pack the fragment document and extract body, relationships and
/// media from the resulting package.
pub(crate) fn serialize(docx: Docx, emitted_toc: bool) -> Result<RenderedFragment> {
    let mut docx = docx;
    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|err| Error::Pack(err.to_string()))?;

    let mut archive = ZipArchive::new(Cursor::new(buffer.as_slice()))?;

    let document = read_part(&mut archive, "word/document.xml")?;
    let rels = read_part(&mut archive, "word/_rels/document.xml.rels").unwrap_or_default();

    let mut media = Vec::new();
    let names: Vec<String> = archive.file_names().map(ToOwned::to_owned).collect();
    for name in names {
        if name.starts_with("word/media/") {
            let mut file = archive.by_name(&name)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            media.push((name, bytes));
        }
    }

    let mut body_xml = extract_body(&document);
    if emitted_toc {
        body_xml = replace_sentinel_paragraph(&body_xml, TOC_SENTINEL, TOC_FIELD_XML);
    }

    Ok(RenderedFragment {
        body_xml,
        relationships: parse_relationships(&rels),
        media,
        has_toc: emitted_toc,
    })
}

fn read_part(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String> {
    let mut file = archive.by_name(name)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Extract the inner body XML, dropping the trailing section
/// properties the document model always appends.
fn extract_body(document: &str) -> String {
    let Some(start) = document.find("<w:body>") else {
        return String::new();
    };
    let Some(end) = document.rfind("</w:body>") else {
        return String::new();
    };
    let mut inner = document["<w:body>".len() + start..end].to_owned();

    if let Some(sect_start) = inner.rfind("<w:sectPr") {
        match inner[sect_start..].find("</w:sectPr>") {
            Some(offset) => {
                let sect_end = sect_start + offset + "</w:sectPr>".len();
                inner.replace_range(sect_start..sect_end, "");
            }
            // Self-closing or truncated: the section properties are the
            // last element, drop the tail.
            None => inner.truncate(sect_start),
        }
    }
    inner
}

fn parse_relationships(rels_xml: &str) -> Vec<FragmentRelationship> {
    let mut relationships = Vec::new();
    for entry in RELATIONSHIP.find_iter(rels_xml) {
        let mut id = None;
        let mut rel_type = None;
        let mut target = None;
        for caps in REL_ATTR.captures_iter(entry.as_str()) {
            match &caps[1] {
                "Id" => id = Some(caps[2].to_owned()),
                "Type" => rel_type = Some(caps[2].to_owned()),
                "Target" => target = Some(caps[2].to_owned()),
                _ => {}
            }
        }
        let (Some(id), Some(rel_type), Some(target)) = (id, rel_type, target) else {
            continue;
        };
        let kind = match rel_type.as_str() {
            HYPERLINK_REL_TYPE => RelationshipKind::Hyperlink,
            IMAGE_REL_TYPE => RelationshipKind::Image,
            _ => continue,
        };
        relationships.push(FragmentRelationship { id, kind, target });
    }
    relationships
}

/// Replace the whole `<w:p>` element containing `needle` with
/// `replacement`. Paragraph boundaries are found with a boundary-aware
/// scan so `<w:pPr>` does not count as a paragraph start.
fn replace_sentinel_paragraph(xml: &str, needle: &str, replacement: &str) -> String {
    let Some(pos) = xml.find(needle) else {
        return xml.to_owned();
    };
    let Some(start) = paragraph_start_before(xml, pos) else {
        return xml.to_owned();
    };
    let Some(end) = paragraph_end_after(xml, pos) else {
        return xml.to_owned();
    };
    let mut out = String::with_capacity(xml.len());
    out.push_str(&xml[..start]);
    out.push_str(replacement);
    out.push_str(&xml[end..]);
    out
}

fn is_paragraph_tag_at(bytes: &[u8], idx: usize, open: bool) -> bool {
    let tag: &[u8] = if open { b"<w:p" } else { b"</w:p" };
    if !bytes[idx..].starts_with(tag) {
        return false;
    }
    matches!(bytes.get(idx + tag.len()), None | Some(b' ' | b'>' | b'/'))
}

fn paragraph_start_before(xml: &str, pos: usize) -> Option<usize> {
    let bytes = xml.as_bytes();
    (0..=pos).rev().find(|&idx| is_paragraph_tag_at(bytes, idx, true))
}

fn paragraph_end_after(xml: &str, pos: usize) -> Option<usize> {
    let bytes = xml.as_bytes();
    let close = b"</w:p";
    (pos..xml.len())
        .find(|&idx| is_paragraph_tag_at(bytes, idx, false))
        .map(|idx| {
            let after = idx + close.len();
            xml[after..]
                .find('>')
                .map_or(xml.len(), |offset| after + offset + 1)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extract_body_strips_wrapper_and_section_properties() {
        let doc = "<w:document><w:body><w:p><w:r><w:t>hi</w:t></w:r></w:p><w:sectPr><w:pgSz/></w:sectPr></w:body></w:document>";
        assert_eq!(extract_body(doc), "<w:p><w:r><w:t>hi</w:t></w:r></w:p>");
    }

    #[test]
    fn extract_body_without_section_properties() {
        let doc = "<w:document><w:body><w:p/></w:body></w:document>";
        assert_eq!(extract_body(doc), "<w:p/>");
    }

    #[test]
    fn relationship_parsing_keeps_hyperlinks_and_images() {
        let rels = concat!(
            r#"<Relationships>"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            r#"<Relationship Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>"#,
            r#"<Relationship Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>"#,
            r#"</Relationships>"#,
        );
        let parsed = parse_relationships(rels);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, "rId5");
        assert_eq!(parsed[0].kind, RelationshipKind::Hyperlink);
        assert_eq!(parsed[1].target, "media/image1.png");
        assert_eq!(parsed[1].kind, RelationshipKind::Image);
    }

    #[test]
    fn sentinel_paragraph_replaced_wholesale() {
        let xml = format!(
            "<w:p><w:r><w:t>before</w:t></w:r></w:p><w:p><w:pPr><w:jc/></w:pPr><w:r><w:t>{TOC_SENTINEL}</w:t></w:r></w:p><w:p/>"
        );
        let out = replace_sentinel_paragraph(&xml, TOC_SENTINEL, "<TOC/>");
        assert_eq!(out, "<w:p><w:r><w:t>before</w:t></w:r></w:p><TOC/><w:p/>");
    }

    #[test]
    fn toc_field_requests_levels_one_to_three() {
        assert!(TOC_FIELD_XML.contains(r#"TOC \o "1-3" \h \z \u"#));
        assert!(TOC_FIELD_XML.contains(r#"<w:docPartGallery w:val="Table of Contents"/>"#));
    }

    #[test]
    fn missing_sentinel_leaves_xml_unchanged() {
        let xml = "<w:p><w:r><w:t>plain</w:t></w:r></w:p>";
        assert_eq!(replace_sentinel_paragraph(xml, TOC_SENTINEL, "<TOC/>"), xml);
    }
}
