//! Table-of-contents post-processing over packaged XML text.
//!
//! TOC fields are identified through their SDT wrapper's document-part
//! gallery; the stale ("dirty") flag belongs on the field-begin
//! character, which makes the consuming word processor prompt for a
//! refresh on open.

use std::sync::LazyLock;

use regex::Regex;

const GALLERY_MARKER: &str = r#"<w:docPartGallery w:val="Table of Contents""#;

static FIELD_BEGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<w:fldChar\b[^>]*w:fldCharType="begin"[^>]*>"#).expect("invalid fldChar regex")
});

/// Whether the document XML contains a TOC field construct.
#[must_use]
pub fn has_toc_field(xml: &str) -> bool {
    xml.contains(GALLERY_MARKER)
}

/// Mark every TOC field stale by setting `w:dirty="true"` on the first
/// field-begin character inside each TOC construct.
#[must_use]
pub fn mark_toc_dirty(xml: &str) -> String {
    let mut result = xml.to_owned();
    let mut search_from = 0;

    while let Some(found) = result[search_from..].find(GALLERY_MARKER) {
        let after_gallery = search_from + found + GALLERY_MARKER.len();

        let Some(begin) = FIELD_BEGIN.find(&result[after_gallery..]) else {
            break;
        };
        let start = after_gallery + begin.start();
        let end = after_gallery + begin.end();
        let tag = &result[start..end];

        if tag.contains("w:dirty") {
            search_from = end;
            continue;
        }

        let insert_at = if tag.ends_with("/>") { end - 2 } else { end - 1 };
        result.insert_str(insert_at, r#" w:dirty="true""#);
        search_from = insert_at + r#" w:dirty="true""#.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn toc_sdt(field: &str) -> String {
        format!(
            r#"<w:sdt><w:sdtPr><w:docPartObj><w:docPartGallery w:val="Table of Contents"/><w:docPartUnique/></w:docPartObj></w:sdtPr><w:sdtContent><w:p>{field}</w:p></w:sdtContent></w:sdt>"#
        )
    }

    #[test]
    fn detection_requires_gallery_marker() {
        assert!(has_toc_field(&toc_sdt("")));
        assert!(!has_toc_field("<w:sdt><w:sdtContent/></w:sdt>"));
    }

    #[test]
    fn marks_field_begin_dirty() {
        let xml = toc_sdt(r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#);
        let marked = mark_toc_dirty(&xml);
        assert!(marked.contains(r#"<w:fldChar w:fldCharType="begin" w:dirty="true"/>"#));
    }

    #[test]
    fn already_dirty_field_untouched() {
        let xml = toc_sdt(r#"<w:r><w:fldChar w:fldCharType="begin" w:dirty="true"/></w:r>"#);
        assert_eq!(mark_toc_dirty(&xml), xml);
    }

    #[test]
    fn only_the_toc_field_is_marked() {
        let other = r#"<w:p><w:r><w:fldChar w:fldCharType="begin"/></w:r></w:p>"#;
        let xml = format!("{other}{}", toc_sdt(r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#));
        let marked = mark_toc_dirty(&xml);
        // The standalone field before the TOC stays clean.
        assert!(marked.starts_with(other));
        assert_eq!(marked.matches("w:dirty").count(), 1);
    }

    #[test]
    fn multiple_toc_fields_all_marked() {
        let one = toc_sdt(r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#);
        let xml = format!("{one}{one}");
        let marked = mark_toc_dirty(&xml);
        assert_eq!(marked.matches(r#"w:dirty="true""#).count(), 2);
    }

    #[test]
    fn gallery_without_field_is_harmless() {
        let xml = toc_sdt("");
        assert_eq!(mark_toc_dirty(&xml), xml);
    }

    #[test]
    fn non_self_closing_begin_tag_supported() {
        let xml = toc_sdt(r#"<w:r><w:fldChar w:fldCharType="begin"></w:fldChar></w:r>"#);
        let marked = mark_toc_dirty(&xml);
        assert!(marked.contains(r#"<w:fldChar w:fldCharType="begin" w:dirty="true">"#));
    }
}
