//! Render orchestration.
//!
//! Pipeline: prepare the template (format conversion + placeholder
//! translation, scoped cleanup) → read the package → detect heading
//! numbering → convert markdown fragments → merge fragment
//! relationships → render each placeholder part through the template
//! engine → splice the content fragment at its paragraph-level marker
//! → TOC post-processing → write the output package.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::context;
use crate::error::RenderError;
use crate::filters;
use crate::package::{self, PLACEHOLDER_PARTS};
use crate::page::PageData;
use crate::scroll;
use crate::styles;
use crate::subdoc;
use crate::toc;

/// Marker that survives the template engine untouched; replaced by the
/// content fragment body after rendering.
const CONTENT_SENTINEL: &str = "<!--wordex:content-->";

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Result of a successful render.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Path of the written package.
    pub output: PathBuf,
    /// Whether the final document contains a TOC field.
    pub has_toc: bool,
}

/// Render a template with page data into an output package.
pub fn render_template(
    template_path: &Path,
    page: &PageData,
    output_path: &Path,
) -> Result<RenderOutcome, RenderError> {
    let prepared = package::prepare_template(template_path)?;
    let parts = read_package(prepared.path())?;

    let numbering = parts
        .iter()
        .find(|(name, _)| name == "word/styles.xml")
        .and_then(|(_, bytes)| std::str::from_utf8(bytes).ok())
        .map_or_else(
            wordex_renderer::HeadingNumbering::none,
            styles::detect_heading_numbering,
        );

    let fragments = context::convert_fragments(page, &numbering)?;

    let rels_text = part_text(&parts, DOCUMENT_RELS_PART);
    let types_text =
        part_text(&parts, CONTENT_TYPES_PART).unwrap_or_else(|| "<Types></Types>".to_owned());
    let all_fragments: Vec<&wordex_renderer::RenderedFragment> =
        std::iter::once(&fragments.content).chain(fragments.children.iter()).collect();
    let merged = subdoc::merge_fragments(rels_text.as_deref(), &types_text, &all_fragments);
    let (content_body, child_bodies) = merged
        .bodies
        .split_first()
        .expect("merge returns one body per fragment");

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_name| AutoEscape::Html);
    filters::register_filters(&mut env);
    let vars = context::build_vars(page, child_bodies);

    let mut replacements: HashMap<String, Vec<u8>> = HashMap::new();
    let mut spliced = false;

    for (name, bytes) in &parts {
        if !PLACEHOLDER_PARTS.contains(&name.as_str()) {
            continue;
        }
        // Parts that do not decode as text are copied through.
        let Ok(text) = std::str::from_utf8(bytes) else {
            tracing::debug!("part {name} is not UTF-8 text, copying through");
            continue;
        };

        let rendered = if name == DOCUMENT_PART {
            // Native templates may still carry an inline content
            // token; promote it to paragraph level before rendering.
            let promoted = scroll::promote_content_placeholder(text);
            let (protected, has_marker) =
                subdoc::protect_content_marker(&promoted, CONTENT_SENTINEL);
            let mut rendered = env.render_str(&protected, &vars)?;
            if has_marker {
                rendered = rendered.replace(CONTENT_SENTINEL, content_body);
                spliced = true;
            }
            rendered
        } else {
            env.render_str(text, &vars)?
        };
        replacements.insert(name.clone(), rendered.into_bytes());
    }

    // TOC post-processing over the final document text.
    let document_text = replacements
        .get(DOCUMENT_PART)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(ToOwned::to_owned);
    let has_toc = document_text.as_deref().is_some_and(toc::has_toc_field);
    if has_toc && !page.no_toc_prompt {
        let marked = toc::mark_toc_dirty(&document_text.unwrap_or_default());
        replacements.insert(DOCUMENT_PART.to_owned(), marked.into_bytes());
    }

    // Relationship and content-type parts only change when a fragment
    // was spliced into the document.
    if spliced {
        replacements.insert(DOCUMENT_RELS_PART.to_owned(), merged.rels_xml.into_bytes());
        replacements.insert(
            CONTENT_TYPES_PART.to_owned(),
            merged.content_types_xml.into_bytes(),
        );
    }

    write_package(
        output_path,
        &parts,
        &replacements,
        if spliced { &merged.media } else { &[] },
    )?;

    Ok(RenderOutcome {
        output: output_path.to_path_buf(),
        has_toc,
    })
}

fn read_package(path: &Path) -> Result<Vec<(String, Vec<u8>)>, RenderError> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut parts = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut part = archive.by_index(index)?;
        if part.is_dir() {
            continue;
        }
        let name = part.name().to_owned();
        let mut bytes = Vec::new();
        part.read_to_end(&mut bytes)?;
        parts.push((name, bytes));
    }
    Ok(parts)
}

fn part_text(parts: &[(String, Vec<u8>)], name: &str) -> Option<String> {
    parts
        .iter()
        .find(|(part_name, _)| part_name == name)
        .and_then(|(_, bytes)| String::from_utf8(bytes.clone()).ok())
}

fn write_package(
    output_path: &Path,
    parts: &[(String, Vec<u8>)],
    replacements: &HashMap<String, Vec<u8>>,
    media: &[(String, Vec<u8>)],
) -> Result<(), RenderError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = ZipWriter::new(File::create(output_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut wrote_rels = false;
    for (name, bytes) in parts {
        let payload = replacements.get(name).unwrap_or(bytes);
        writer.start_file(name.clone(), options)?;
        writer.write_all(payload)?;
        if name == DOCUMENT_RELS_PART {
            wrote_rels = true;
        }
    }

    // A template without a document rels part gains one when
    // fragments brought relationships along.
    if !wrote_rels {
        if let Some(rels) = replacements.get(DOCUMENT_RELS_PART) {
            writer.start_file(DOCUMENT_RELS_PART.to_owned(), options)?;
            writer.write_all(rels)?;
        }
    }

    for (name, bytes) in media {
        writer.start_file(name.clone(), options)?;
        writer.write_all(bytes)?;
    }

    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_template(path: &Path, document: &str, extra: &[(&str, &str)]) {
        let mut writer = ZipWriter::new(File::create(path).expect("create template"));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut parts: Vec<(&str, String)> = vec![
            (
                CONTENT_TYPES_PART,
                format!(
                    r#"<?xml version="1.0"?><Types><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="{}"/></Types>"#,
                    package::STANDARD_CONTENT_TYPE
                ),
            ),
            ("word/document.xml", document.to_owned()),
            (
                DOCUMENT_RELS_PART,
                r#"<?xml version="1.0"?><Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#.to_owned(),
            ),
            (
                "word/styles.xml",
                r#"<w:styles><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr></w:pPr></w:style></w:styles>"#.to_owned(),
            ),
        ];
        for (name, content) in extra {
            parts.push((name, (*content).to_owned()));
        }
        for (name, content) in parts {
            writer.start_file(name, options).expect("start file");
            writer.write_all(content.as_bytes()).expect("write part");
        }
        writer.finish().expect("finish template");
    }

    fn read_output_part(path: &Path, name: &str) -> String {
        let mut archive = ZipArchive::new(File::open(path).expect("open output")).expect("zip");
        let mut part = archive.by_name(name).expect("part exists");
        let mut text = String::new();
        part.read_to_string(&mut text).expect("utf8 part");
        text
    }

    fn page(markdown: &str) -> PageData {
        serde_json::from_str(&serde_json::json!({
            "title": "Release Notes",
            "markdown": markdown,
            "author": {"displayName": "Ada", "email": "ada@example.com"},
            "created": "2025-01-05T04:30:00Z",
        }).to_string())
        .expect("page data")
    }

    const LEGACY_DOCUMENT: &str = concat!(
        "<w:document><w:body>",
        "<w:p><w:r><w:t>$scroll.title</w:t></w:r></w:p>",
        "<w:p><w:r><w:t>$scroll.content</w:t></w:r></w:p>",
        "<w:sectPr><w:pgSz/></w:sectPr>",
        "</w:body></w:document>",
    );

    #[test]
    fn legacy_template_renders_end_to_end() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        let outcome = render_template(&template, &page("# Intro\n\nHello **world**"), &output)
            .expect("render succeeds");
        assert_eq!(outcome.output, output);
        assert!(!outcome.has_toc);

        let document = read_output_part(&output, "word/document.xml");
        assert!(document.contains("Release Notes"));
        assert!(document.contains("Hello "));
        assert!(document.contains("Heading1"));
        assert!(!document.contains("$scroll."));
        assert!(!document.contains("{{"));
        assert!(!document.contains(CONTENT_SENTINEL));
    }

    #[test]
    fn numbered_heading_prefix_stripped_via_template_styles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        render_template(&template, &page("# 3. Numbered"), &output).expect("render succeeds");
        let document = read_output_part(&output, "word/document.xml");
        assert!(document.contains(">Numbered<"));
        assert!(!document.contains("3. Numbered"));
    }

    #[test]
    fn split_legacy_tokens_repaired_before_translation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        let document = concat!(
            "<w:document><w:body>",
            "<w:p><w:r><w:t>$</w:t></w:r><w:r><w:t>scroll.title</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        write_template(&template, document, &[]);

        render_template(&template, &page("body"), &output).expect("render succeeds");
        let rendered = read_output_part(&output, "word/document.xml");
        assert!(rendered.contains("Release Notes"));
        assert!(!rendered.contains("scroll.title"));
    }

    #[test]
    fn toc_macro_marks_field_dirty_by_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        let outcome = render_template(&template, &page(":::toc\n:::\n\n# One"), &output)
            .expect("render succeeds");
        assert!(outcome.has_toc);

        let document = read_output_part(&output, "word/document.xml");
        assert!(document.contains(r#"w:docPartGallery w:val="Table of Contents""#));
        assert!(document.contains(r#"w:dirty="true""#));
    }

    #[test]
    fn toc_prompt_suppression_skips_dirty_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        let mut page = page(":::toc\n:::");
        page.no_toc_prompt = true;
        let outcome = render_template(&template, &page, &output).expect("render succeeds");
        assert!(outcome.has_toc);

        let document = read_output_part(&output, "word/document.xml");
        assert!(!document.contains(r#"w:dirty="true""#));
    }

    #[test]
    fn hyperlink_relationships_merged_into_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        render_template(&template, &page("[site](https://example.com/site)"), &output)
            .expect("render succeeds");
        let rels = read_output_part(&output, DOCUMENT_RELS_PART);
        assert!(rels.contains("https://example.com/site"));
        assert!(rels.contains("TargetMode=\"External\""));

        let document = read_output_part(&output, "word/document.xml");
        assert!(document.contains("<w:hyperlink"));
    }

    #[test]
    fn section_break_survives_content_promotion() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        let document = concat!(
            "<w:document><w:body>",
            "<w:p><w:pPr><w:sectPr><w:pgSz w:w=\"11906\"/></w:sectPr></w:pPr>",
            "<w:r><w:t>$scroll.content</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        write_template(&template, document, &[]);

        render_template(&template, &page("after the break"), &output).expect("render succeeds");
        let rendered = read_output_part(&output, "word/document.xml");
        assert!(rendered.contains("after the break"));
        assert!(rendered.contains("<w:sectPr><w:pgSz w:w=\"11906\"/></w:sectPr>"));
    }

    #[test]
    fn scalar_values_are_xml_escaped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        let mut page = page("body");
        page.title = "Q&A <notes>".to_owned();
        render_template(&template, &page, &output).expect("render succeeds");
        let document = read_output_part(&output, "word/document.xml");
        assert!(document.contains("Q&amp;A &lt;notes&gt;"));
    }

    #[test]
    fn header_placeholders_render_with_date_filter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(
            &template,
            LEGACY_DOCUMENT,
            &[(
                "word/header1.xml",
                r#"<w:hdr><w:p><w:r><w:t>$scroll.creationdate.("yyyy-MM-dd")</w:t></w:r></w:p></w:hdr>"#,
            )],
        );

        render_template(&template, &page("body"), &output).expect("render succeeds");
        let header = read_output_part(&output, "word/header1.xml");
        assert!(header.contains("2025-01-05"));
    }

    #[test]
    fn children_loop_renders_scalar_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        let document = concat!(
            "<w:document><w:body>",
            "<w:p><w:r><w:t>{% for child in children %}[{{ child.title }}]{% endfor %}</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        write_template(&template, document, &[]);

        let mut page = page("body");
        page.children = serde_json::from_str(
            r#"[{"title": "Alpha", "markdown": "a"}, {"title": "Beta", "markdown": "b"}]"#,
        )
        .expect("children");
        render_template(&template, &page, &output).expect("render succeeds");
        let rendered = read_output_part(&output, "word/document.xml");
        assert!(rendered.contains("[Alpha][Beta]"));
    }

    #[test]
    fn embedded_image_media_lands_in_output_package() {
        use base64::Engine;

        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.docx");
        let output = dir.path().join("out.docx");
        write_template(&template, LEGACY_DOCUMENT, &[]);

        let mut png = Vec::new();
        image::DynamicImage::new_rgba8(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("png encode");
        let mut page = page("![d](d.png)");
        page.images = serde_json::from_str(&serde_json::json!({
            "d.png": {
                "data": base64::engine::general_purpose::STANDARD.encode(png),
                "mimeType": "image/png"
            }
        }).to_string())
        .expect("images");

        render_template(&template, &page, &output).expect("render succeeds");
        let rels = read_output_part(&output, DOCUMENT_RELS_PART);
        assert!(rels.contains("media/wordex1.png"));
        let types = read_output_part(&output, CONTENT_TYPES_PART);
        assert!(types.contains(r#"Extension="png""#));

        let mut archive = ZipArchive::new(File::open(&output).expect("open")).expect("zip");
        assert!(archive.by_name("word/media/wordex1.png").is_ok());
    }

    #[test]
    fn missing_template_surfaces_typed_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("out.docx");
        let err = render_template(Path::new("/no/such.docx"), &page("x"), &output)
            .expect_err("must fail");
        assert!(matches!(
            err,
            RenderError::Template(crate::error::TemplateError::NotFound(_))
        ));
    }
}
