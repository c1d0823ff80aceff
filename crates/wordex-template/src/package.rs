//! Macro-enabled package conversion and template preparation.
//!
//! A macro-enabled template differs from a standard one only in the
//! declared content type of its main document part; converting between
//! the two rewrites `[Content_Types].xml` and copies every other part
//! unchanged. Embedded macro payloads are preserved byte-for-byte but
//! become inert. When placeholder conversion is requested, each
//! document/header/footer part runs through the translator pipeline:
//! split repair, then dialect translation, then content-placeholder
//! promotion. Parts that do not decode as text are copied through.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::TemplateError;
use crate::scroll;

/// Declared content type of a macro-enabled main document part.
pub const MACRO_ENABLED_CONTENT_TYPE: &str =
    "application/vnd.ms-word.document.macroEnabled.main+xml";
/// Declared content type of a standard main document part.
pub const STANDARD_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// The XML parts that may carry placeholders.
pub const PLACEHOLDER_PARTS: [&str; 7] = [
    "word/document.xml",
    "word/header1.xml",
    "word/header2.xml",
    "word/header3.xml",
    "word/footer1.xml",
    "word/footer2.xml",
    "word/footer3.xml",
];

/// Whether the path names a macro-enabled template.
#[must_use]
pub fn is_macro_enabled(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docm"))
}

/// Whether any document/header/footer part contains a legacy
/// placeholder. Unreadable packages and undecodable parts count as
/// "no".
#[must_use]
pub fn has_legacy_placeholders(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let Ok(mut archive) = ZipArchive::new(file) else {
        return false;
    };
    for name in PLACEHOLDER_PARTS {
        let Ok(mut part) = archive.by_name(name) else {
            continue;
        };
        let mut text = String::new();
        if part.read_to_string(&mut text).is_err() {
            continue;
        }
        if text.contains("$scroll.") || text.contains("$!scroll.") {
            return true;
        }
    }
    false
}

/// Full translator pipeline for one XML part. Order matters: split
/// repair must precede translation, promotion consumes translated
/// tokens.
fn convert_part(xml: &str) -> String {
    let normalized = scroll::normalize_split_placeholders(xml);
    let converted = scroll::convert_placeholders(&normalized);
    scroll::promote_content_placeholder(&converted)
}

/// Rewrite a template package into `dest`.
///
/// `rewrite_content_type` swaps the macro-enabled main-part type for
/// the standard one; `convert_placeholders` runs the translator over
/// the placeholder parts.
fn rewrite_package(
    source: &Path,
    dest: &Path,
    rewrite_content_type: bool,
    convert_placeholders: bool,
) -> Result<(), TemplateError> {
    let mut archive = ZipArchive::new(File::open(source)?)?;
    let mut writer = ZipWriter::new(File::create(dest)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for index in 0..archive.len() {
        let mut part = archive.by_index(index)?;
        let name = part.name().to_owned();
        let mut bytes = Vec::new();
        part.read_to_end(&mut bytes)?;

        let bytes = if rewrite_content_type && name == "[Content_Types].xml" {
            match String::from_utf8(bytes) {
                Ok(text) => text
                    .replace(MACRO_ENABLED_CONTENT_TYPE, STANDARD_CONTENT_TYPE)
                    .into_bytes(),
                Err(err) => err.into_bytes(),
            }
        } else if convert_placeholders && PLACEHOLDER_PARTS.contains(&name.as_str()) {
            match String::from_utf8(bytes) {
                Ok(text) => convert_part(&text).into_bytes(),
                // Not decodable as text: copy through unchanged.
                Err(err) => err.into_bytes(),
            }
        } else {
            bytes
        };

        writer.start_file(name, options)?;
        writer.write_all(&bytes)?;
    }
    writer.finish()?;
    Ok(())
}

/// A template path ready for rendering, with any temporary conversion
/// cleaned up on drop.
///
/// The lifecycle has three states: unconverted (the original path is
/// used directly, nothing owed), converted-temp (a converted copy
/// lives in a temp directory owned by this guard), and released (the
/// guard dropped, temp dir removed). Dropping runs exactly once on
/// every exit path, including panics; removal errors are suppressed.
#[derive(Debug)]
pub struct PreparedTemplate {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl PreparedTemplate {
    /// The path to load the template from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a temporary converted copy is in use.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        self.temp.is_some()
    }
}

/// Prepare a template for rendering.
///
/// Macro-enabled input is converted to a temporary standard-format
/// copy (placeholders translated along the way); standard input with
/// legacy placeholders gets a temporary translated copy; anything else
/// passes through untouched.
pub fn prepare_template(template: &Path) -> Result<PreparedTemplate, TemplateError> {
    if !template.is_file() {
        return Err(TemplateError::NotFound(template.to_path_buf()));
    }

    if is_macro_enabled(template) {
        let temp = tempfile::Builder::new().prefix("wordex_").tempdir()?;
        let stem = template
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("template");
        let dest = temp.path().join(format!("{stem}.docx"));
        tracing::debug!("converting macro-enabled template {} -> {}", template.display(), dest.display());
        rewrite_package(template, &dest, true, true)?;
        return Ok(PreparedTemplate { path: dest, temp: Some(temp) });
    }

    if has_legacy_placeholders(template) {
        let temp = tempfile::Builder::new().prefix("wordex_").tempdir()?;
        let name = template
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("template.docx");
        let dest = temp.path().join(name);
        tracing::debug!("translating legacy placeholders in {}", template.display());
        rewrite_package(template, &dest, false, true)?;
        return Ok(PreparedTemplate { path: dest, temp: Some(temp) });
    }

    Ok(PreparedTemplate {
        path: template.to_path_buf(),
        temp: None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_package(path: &Path, parts: &[(&str, &str)]) {
        let mut writer = ZipWriter::new(File::create(path).expect("create zip"));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in parts {
            writer.start_file(*name, options).expect("start file");
            writer.write_all(content.as_bytes()).expect("write part");
        }
        writer.finish().expect("finish zip");
    }

    fn read_part(path: &Path, name: &str) -> String {
        let mut archive = ZipArchive::new(File::open(path).expect("open zip")).expect("read zip");
        let mut part = archive.by_name(name).expect("part exists");
        let mut text = String::new();
        part.read_to_string(&mut text).expect("decode part");
        text
    }

    fn content_types(main_type: &str) -> String {
        format!(
            r#"<?xml version="1.0"?><Types><Override PartName="/word/document.xml" ContentType="{main_type}"/></Types>"#
        )
    }

    fn doc_with(text: &str) -> String {
        format!("<w:document><w:body><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:body></w:document>")
    }

    #[test]
    fn macro_enabled_detection_is_case_insensitive() {
        assert!(is_macro_enabled(Path::new("a/b/template.docm")));
        assert!(is_macro_enabled(Path::new("template.DOCM")));
        assert!(!is_macro_enabled(Path::new("template.docx")));
    }

    #[test]
    fn legacy_placeholder_detection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let with = dir.path().join("with.docx");
        write_package(&with, &[("word/document.xml", "<w:t>$scroll.title</w:t>")]);
        assert!(has_legacy_placeholders(&with));

        let null_safe = dir.path().join("nullsafe.docx");
        write_package(&null_safe, &[("word/header1.xml", "<w:t>$!scroll.title</w:t>")]);
        assert!(has_legacy_placeholders(&null_safe));

        let without = dir.path().join("without.docx");
        write_package(&without, &[("word/document.xml", "<w:t>{{ title }}</w:t>")]);
        assert!(!has_legacy_placeholders(&without));
    }

    #[test]
    fn detection_tolerates_missing_file_and_bad_zip() {
        assert!(!has_legacy_placeholders(Path::new("/no/such/file.docx")));

        let dir = tempfile::tempdir().expect("tempdir");
        let bogus = dir.path().join("bogus.docx");
        std::fs::write(&bogus, b"not a zip at all").expect("write file");
        assert!(!has_legacy_placeholders(&bogus));
    }

    #[test]
    fn macro_enabled_conversion_swaps_content_type_and_translates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docm = dir.path().join("report.docm");
        write_package(
            &docm,
            &[
                ("[Content_Types].xml", &content_types(MACRO_ENABLED_CONTENT_TYPE)),
                ("word/document.xml", &doc_with("$scroll.title")),
                ("word/vbaProject.bin", "binary macro payload"),
            ],
        );

        let prepared = prepare_template(&docm).expect("prepare");
        assert!(prepared.is_converted());
        assert_eq!(prepared.path().extension().and_then(|e| e.to_str()), Some("docx"));

        let types = read_part(prepared.path(), "[Content_Types].xml");
        assert!(types.contains(STANDARD_CONTENT_TYPE));
        assert!(!types.contains(MACRO_ENABLED_CONTENT_TYPE));

        let document = read_part(prepared.path(), "word/document.xml");
        assert!(document.contains("{{ title }}"));

        // Macro payload preserved byte-for-byte, just inert.
        assert_eq!(read_part(prepared.path(), "word/vbaProject.bin"), "binary macro payload");
    }

    #[test]
    fn placeholder_only_conversion_keeps_content_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docx = dir.path().join("report.docx");
        write_package(
            &docx,
            &[
                ("[Content_Types].xml", &content_types(STANDARD_CONTENT_TYPE)),
                ("word/document.xml", &doc_with("$scroll.content")),
            ],
        );

        let prepared = prepare_template(&docx).expect("prepare");
        assert!(prepared.is_converted());

        let document = read_part(prepared.path(), "word/document.xml");
        assert!(document.contains("{{p content }}"));
    }

    #[test]
    fn plain_template_passes_through_without_temp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docx = dir.path().join("plain.docx");
        write_package(
            &docx,
            &[
                ("[Content_Types].xml", &content_types(STANDARD_CONTENT_TYPE)),
                ("word/document.xml", &doc_with("{{ title }}")),
            ],
        );

        let prepared = prepare_template(&docx).expect("prepare");
        assert!(!prepared.is_converted());
        assert_eq!(prepared.path(), docx);
    }

    #[test]
    fn temp_directory_removed_on_drop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docm = dir.path().join("report.docm");
        write_package(
            &docm,
            &[
                ("[Content_Types].xml", &content_types(MACRO_ENABLED_CONTENT_TYPE)),
                ("word/document.xml", &doc_with("text")),
            ],
        );

        let prepared = prepare_template(&docm).expect("prepare");
        let temp_path = prepared.path().to_path_buf();
        assert!(temp_path.exists());
        drop(prepared);
        assert!(!temp_path.exists());
    }

    #[test]
    fn missing_template_is_an_error() {
        let err = prepare_template(Path::new("/no/such/template.docx")).expect_err("must fail");
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn round_trip_preserves_textual_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docm = dir.path().join("pages.docm");
        let body = "<w:document><w:body><w:p><w:r><w:t>one</w:t></w:r></w:p><w:p><w:r><w:t>two</w:t></w:r></w:p></w:body></w:document>";
        write_package(
            &docm,
            &[
                ("[Content_Types].xml", &content_types(MACRO_ENABLED_CONTENT_TYPE)),
                ("word/document.xml", body),
            ],
        );

        let prepared = prepare_template(&docm).expect("prepare");
        let document = read_part(prepared.path(), "word/document.xml");
        assert_eq!(document.matches("<w:p>").count(), 2);
        assert!(document.contains("one"));
        assert!(document.contains("two"));
    }
}
