//! Splicing rendered fragments into a template package.
//!
//! A fragment arrives with its own relationship ids and media names,
//! allocated against the fragment's throwaway package. Before its body
//! XML can live inside the template's `word/document.xml`, every
//! hyperlink/image relationship is renumbered past the template's
//! highest existing id, the body references are rewritten in one pass,
//! and media payloads are copied under fresh names.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use wordex_renderer::{RelationshipKind, RenderedFragment};

const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
const IMAGE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Paragraph-level content insertion marker left by placeholder
/// promotion (or authored directly in native templates).
static CONTENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{p\s+content\s*\}\}").expect("invalid content marker regex"));

static REL_ID_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Id="rId(\d+)""#).expect("invalid rel id regex"));
static BODY_REL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"r:(id|embed)="([^"]+)""#).expect("invalid rel ref regex"));

/// An empty relationships part for templates that carry none.
const EMPTY_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#,
);

/// Result of merging fragments into a template's document part.
pub(crate) struct MergedFragments {
    /// Updated `word/_rels/document.xml.rels` text.
    pub rels_xml: String,
    /// Updated `[Content_Types].xml` text.
    pub content_types_xml: String,
    /// Fragment bodies with relationship references rewritten, in
    /// input order.
    pub bodies: Vec<String>,
    /// Media parts to add to the package: (archive path, bytes).
    pub media: Vec<(String, Vec<u8>)>,
}

/// Renumber the fragments' relationships against the template's
/// existing relationship part and rewrite their bodies accordingly.
pub(crate) fn merge_fragments(
    rels_xml: Option<&str>,
    content_types_xml: &str,
    fragments: &[&RenderedFragment],
) -> MergedFragments {
    let mut rels_xml = rels_xml.unwrap_or(EMPTY_RELS).to_owned();
    let mut content_types_xml = content_types_xml.to_owned();

    let mut next_id = 1 + REL_ID_NUMBER
        .captures_iter(&rels_xml)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let mut media_index = 1u64;

    let mut new_entries = String::new();
    let mut media = Vec::new();
    let mut bodies = Vec::new();

    for fragment in fragments {
        let mut id_map: Vec<(String, String)> = Vec::new();

        for rel in &fragment.relationships {
            let new_id = format!("rId{next_id}");
            next_id += 1;

            match rel.kind {
                RelationshipKind::Hyperlink => {
                    new_entries.push_str(&format!(
                        r#"<Relationship Id="{new_id}" Type="{HYPERLINK_REL_TYPE}" Target="{}" TargetMode="External"/>"#,
                        rel.target
                    ));
                }
                RelationshipKind::Image => {
                    let Some((_, bytes)) = fragment
                        .media
                        .iter()
                        .find(|(path, _)| path.ends_with(rel.target.trim_start_matches("media/")))
                    else {
                        tracing::debug!("fragment image relationship {} has no media part", rel.id);
                        continue;
                    };
                    let extension = rel.target.rsplit('.').next().unwrap_or("png").to_lowercase();
                    let media_name = format!("media/wordex{media_index}.{extension}");
                    media_index += 1;

                    ensure_content_type_default(&mut content_types_xml, &extension);
                    media.push((format!("word/{media_name}"), bytes.clone()));
                    new_entries.push_str(&format!(
                        r#"<Relationship Id="{new_id}" Type="{IMAGE_REL_TYPE}" Target="{media_name}"/>"#,
                    ));
                }
            }
            id_map.push((rel.id.clone(), new_id));
        }

        bodies.push(rewrite_references(&fragment.body_xml, &id_map));
    }

    if let Some(close) = rels_xml.rfind("</Relationships>") {
        rels_xml.insert_str(close, &new_entries);
    }

    MergedFragments {
        rels_xml,
        content_types_xml,
        bodies,
        media,
    }
}

/// Rewrite `r:id`/`r:embed` references through the id map in one pass,
/// so renumbering never cascades (rId1 -> rId2 -> ...).
fn rewrite_references(body_xml: &str, id_map: &[(String, String)]) -> String {
    if id_map.is_empty() {
        return body_xml.to_owned();
    }
    BODY_REL_REF
        .replace_all(body_xml, |caps: &Captures| {
            let attr = &caps[1];
            let old = &caps[2];
            let id = id_map
                .iter()
                .find(|(from, _)| from == old)
                .map_or(old, |(_, to)| to.as_str());
            format!(r#"r:{attr}="{id}""#)
        })
        .into_owned()
}

/// Make sure the package declares a default content type for a media
/// extension.
fn ensure_content_type_default(content_types_xml: &mut String, extension: &str) {
    let content_type = match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    };
    let marker = format!(r#"Extension="{extension}""#);
    if content_types_xml.contains(&marker) {
        return;
    }
    if let Some(close) = content_types_xml.rfind("</Types>") {
        content_types_xml.insert_str(
            close,
            &format!(r#"<Default Extension="{extension}" ContentType="{content_type}"/>"#),
        );
    }
}

/// Replace `{{p content }}` markers with a placeholder the template
/// engine will not touch. Returns the protected text and whether a
/// marker was present.
pub(crate) fn protect_content_marker(xml: &str, sentinel: &str) -> (String, bool) {
    if !CONTENT_MARKER.is_match(xml) {
        return (xml.to_owned(), false);
    }
    (CONTENT_MARKER.replace_all(xml, sentinel).into_owned(), true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wordex_renderer::FragmentRelationship;

    use super::*;

    fn fragment(
        body: &str,
        rels: Vec<FragmentRelationship>,
        media: Vec<(String, Vec<u8>)>,
    ) -> RenderedFragment {
        RenderedFragment {
            body_xml: body.to_owned(),
            relationships: rels,
            media,
            has_toc: false,
        }
    }

    fn hyperlink_rel(id: &str, target: &str) -> FragmentRelationship {
        FragmentRelationship {
            id: id.to_owned(),
            kind: RelationshipKind::Hyperlink,
            target: target.to_owned(),
        }
    }

    fn image_rel(id: &str, target: &str) -> FragmentRelationship {
        FragmentRelationship {
            id: id.to_owned(),
            kind: RelationshipKind::Image,
            target: target.to_owned(),
        }
    }

    const TEMPLATE_RELS: &str = r#"<?xml version="1.0"?><Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId7" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings" Target="settings.xml"/></Relationships>"#;
    const TEMPLATE_TYPES: &str = r#"<?xml version="1.0"?><Types><Default Extension="xml" ContentType="application/xml"/></Types>"#;

    #[test]
    fn hyperlink_renumbered_past_existing_ids() {
        let frag = fragment(
            r#"<w:hyperlink r:id="rId1"><w:r/></w:hyperlink>"#,
            vec![hyperlink_rel("rId1", "https://example.com")],
            Vec::new(),
        );
        let merged = merge_fragments(Some(TEMPLATE_RELS), TEMPLATE_TYPES, &[&frag]);

        assert!(merged.bodies[0].contains(r#"r:id="rId8""#));
        assert!(merged.rels_xml.contains(
            r#"<Relationship Id="rId8" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>"#
        ));
        // Existing entries untouched.
        assert!(merged.rels_xml.contains(r#"Id="rId1""#));
    }

    #[test]
    fn image_gets_fresh_media_name_and_content_type() {
        let frag = fragment(
            r#"<a:blip r:embed="rIdImage5"/>"#,
            vec![image_rel("rIdImage5", "media/pic.png")],
            vec![("word/media/pic.png".to_owned(), vec![1, 2, 3])],
        );
        let merged = merge_fragments(Some(TEMPLATE_RELS), TEMPLATE_TYPES, &[&frag]);

        assert!(merged.bodies[0].contains(r#"r:embed="rId8""#));
        assert_eq!(merged.media.len(), 1);
        assert_eq!(merged.media[0].0, "word/media/wordex1.png");
        assert_eq!(merged.media[0].1, vec![1, 2, 3]);
        assert!(merged.rels_xml.contains(r#"Target="media/wordex1.png""#));
        assert!(merged.content_types_xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn renumbering_does_not_cascade() {
        // rId1 -> rId8 and rId2 -> rId9 in one pass; the rewritten rId8
        // must not be rewritten again.
        let frag = fragment(
            r#"<w:hyperlink r:id="rId1"/><w:hyperlink r:id="rId2"/>"#,
            vec![
                hyperlink_rel("rId1", "https://a.example"),
                hyperlink_rel("rId2", "https://b.example"),
            ],
            Vec::new(),
        );
        let merged = merge_fragments(Some(TEMPLATE_RELS), TEMPLATE_TYPES, &[&frag]);
        assert!(merged.bodies[0].contains(r#"r:id="rId8""#));
        assert!(merged.bodies[0].contains(r#"r:id="rId9""#));
    }

    #[test]
    fn multiple_fragments_share_the_id_space() {
        let first = fragment(
            r#"<w:hyperlink r:id="rId1"/>"#,
            vec![hyperlink_rel("rId1", "https://a.example")],
            Vec::new(),
        );
        let second = fragment(
            r#"<w:hyperlink r:id="rId1"/>"#,
            vec![hyperlink_rel("rId1", "https://b.example")],
            Vec::new(),
        );
        let merged = merge_fragments(Some(TEMPLATE_RELS), TEMPLATE_TYPES, &[&first, &second]);
        assert!(merged.bodies[0].contains(r#"r:id="rId8""#));
        assert!(merged.bodies[1].contains(r#"r:id="rId9""#));
        assert!(merged.rels_xml.contains("https://a.example"));
        assert!(merged.rels_xml.contains("https://b.example"));
    }

    #[test]
    fn missing_rels_part_gets_created() {
        let frag = fragment(
            r#"<w:hyperlink r:id="rId1"/>"#,
            vec![hyperlink_rel("rId1", "https://a.example")],
            Vec::new(),
        );
        let merged = merge_fragments(None, TEMPLATE_TYPES, &[&frag]);
        assert!(merged.rels_xml.starts_with("<?xml"));
        assert!(merged.bodies[0].contains(r#"r:id="rId1""#));
        assert!(merged.rels_xml.contains("https://a.example"));
    }

    #[test]
    fn existing_content_type_not_duplicated() {
        let types = r#"<Types><Default Extension="png" ContentType="image/png"/></Types>"#;
        let frag = fragment(
            r#"<a:blip r:embed="rId1"/>"#,
            vec![image_rel("rId1", "media/x.png")],
            vec![("word/media/x.png".to_owned(), vec![0])],
        );
        let merged = merge_fragments(Some(TEMPLATE_RELS), types, &[&frag]);
        assert_eq!(merged.content_types_xml.matches(r#"Extension="png""#).count(), 1);
    }

    #[test]
    fn content_marker_protection() {
        let (protected, found) =
            protect_content_marker("<w:body>{{p content }}</w:body>", "<!-- c -->");
        assert!(found);
        assert_eq!(protected, "<w:body><!-- c --></w:body>");

        let (unchanged, found) = protect_content_marker("<w:body/>", "<!-- c -->");
        assert!(!found);
        assert_eq!(unchanged, "<w:body/>");
    }
}
