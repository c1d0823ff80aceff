//! Template variable construction from page data.
//!
//! Scalar variables mirror the legacy exporter's vocabulary (the
//! translation table in [`crate::scroll`] maps onto these names).
//! Markdown bodies are converted to fragments through the renderer
//! crate; their XML enters the context as pre-escaped safe strings.

use std::collections::BTreeMap;

use minijinja::value::Value;
use wordex_renderer::{
    ContentByLabelGroup, ConvertOptions, EmbeddedImage, HeadingNumbering, MarkdownConverter,
    PageLink, RenderedFragment,
};

use crate::error::RenderError;
use crate::page::{MacroChild, PageData};

/// The converted fragments of one export: the page body and each
/// child page body, in payload order.
pub(crate) struct PageFragments {
    pub content: RenderedFragment,
    pub children: Vec<RenderedFragment>,
}

fn page_link(child: &MacroChild) -> PageLink {
    PageLink {
        title: child.title.clone(),
        url: child.page_url.clone(),
    }
}

fn convert_options(page: &PageData, numbering: &HeadingNumbering) -> ConvertOptions {
    ConvertOptions {
        images: page
            .images
            .iter()
            .map(|(name, payload)| {
                (
                    name.clone(),
                    EmbeddedImage {
                        data: payload.data.clone(),
                        mime_type: payload.mime_type.clone(),
                    },
                )
            })
            .collect(),
        macro_children: page.macro_children.iter().map(page_link).collect(),
        content_by_label: page
            .macro_content_by_label
            .iter()
            .map(|group| ContentByLabelGroup {
                labels: group.labels.clone(),
                spaces: group.spaces.clone(),
                items: group.items.iter().map(page_link).collect(),
            })
            .collect(),
        heading_numbering: numbering.clone(),
        render_toc_macro: page.render_toc_macro,
    }
}

/// Convert the page markdown and every child markdown to fragments.
pub(crate) fn convert_fragments(
    page: &PageData,
    numbering: &HeadingNumbering,
) -> Result<PageFragments, RenderError> {
    let mut converter = MarkdownConverter::new(convert_options(page, numbering));
    let content = converter.convert(&page.markdown)?;

    let mut children = Vec::with_capacity(page.children.len());
    for child in &page.children {
        children.push(converter.convert(&child.markdown)?);
    }

    Ok(PageFragments { content, children })
}

/// Build the template variable map. `child_bodies` are the children's
/// fragment XML bodies after relationship merging, in payload order.
pub(crate) fn build_vars(page: &PageData, child_bodies: &[String]) -> BTreeMap<String, Value> {
    let modifier = page.effective_modifier();

    let mut vars = BTreeMap::new();
    vars.insert("title".to_owned(), Value::from(page.title.clone()));
    vars.insert("author".to_owned(), Value::from(page.author.display_name.clone()));
    vars.insert("authorEmail".to_owned(), Value::from(page.author.email.clone()));
    vars.insert("modifier".to_owned(), Value::from(modifier.display_name.clone()));
    vars.insert("modifierEmail".to_owned(), Value::from(modifier.email.clone()));
    vars.insert("created".to_owned(), Value::from(page.created.clone()));
    vars.insert("modified".to_owned(), Value::from(page.modified.clone()));
    vars.insert("pageId".to_owned(), Value::from(page.page_id.clone()));
    vars.insert("pageUrl".to_owned(), Value::from(page.page_url.clone()));
    vars.insert("tinyUrl".to_owned(), Value::from(page.tiny_url.clone()));
    vars.insert("labels".to_owned(), Value::from(page.labels.join(", ")));
    vars.insert("spaceKey".to_owned(), Value::from(page.space_key.clone()));
    vars.insert("spaceName".to_owned(), Value::from(page.space_name.clone()));
    vars.insert("spaceUrl".to_owned(), Value::from(page.space_url.clone()));
    vars.insert("exportedBy".to_owned(), Value::from(page.exported_by.clone()));
    vars.insert(
        "exportDate".to_owned(),
        Value::from(chrono::Local::now().to_rfc3339()),
    );
    vars.insert("templateName".to_owned(), Value::from(page.template_name.clone()));
    vars.insert("attachments".to_owned(), Value::from_serialize(&page.attachments));

    let children: Vec<Value> = page
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let mut entry = BTreeMap::new();
            entry.insert("title".to_owned(), Value::from(child.title.clone()));
            entry.insert("markdown".to_owned(), Value::from(child.markdown.clone()));
            for (key, value) in &child.extra {
                entry.insert(key.clone(), Value::from_serialize(value));
            }
            if let Some(body) = child_bodies.get(index) {
                entry.insert("content".to_owned(), Value::from_safe_string(body.clone()));
            }
            Value::from_serialize(&entry)
        })
        .collect();
    vars.insert("children".to_owned(), Value::from(children));

    vars
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_page() -> PageData {
        serde_json::from_str(
            r##"{
                "title": "Sample",
                "markdown": "# One",
                "author": {"displayName": "Ada", "email": "ada@example.com"},
                "created": "2025-01-05T04:30:00Z",
                "labels": ["api", "docs"],
                "children": [
                    {"title": "Kid", "markdown": "child body", "pageUrl": "https://wiki/kid"}
                ]
            }"##,
        )
        .expect("parse page")
    }

    #[test]
    fn scalar_variables_populated() {
        let page = sample_page();
        let vars = build_vars(&page, &[]);
        assert_eq!(vars["title"].as_str(), Some("Sample"));
        assert_eq!(vars["author"].as_str(), Some("Ada"));
        // Modifier falls back to the author.
        assert_eq!(vars["modifier"].as_str(), Some("Ada"));
        assert_eq!(vars["labels"].as_str(), Some("api, docs"));
        assert!(!vars["exportDate"].as_str().unwrap_or_default().is_empty());
    }

    #[test]
    fn children_entries_carry_extra_fields_and_content() {
        let page = sample_page();
        let vars = build_vars(&page, &["<w:p/>".to_owned()]);
        let children = &vars["children"];
        let child = children.get_item(&Value::from(0)).expect("child entry");
        assert_eq!(
            child.get_attr("title").expect("title").as_str(),
            Some("Kid")
        );
        assert_eq!(
            child.get_attr("pageUrl").expect("pageUrl").as_str(),
            Some("https://wiki/kid")
        );
        assert_eq!(
            child.get_attr("content").expect("content").as_str(),
            Some("<w:p/>")
        );
    }

    #[test]
    fn fragments_convert_page_and_children() {
        let page = sample_page();
        let fragments =
            convert_fragments(&page, &HeadingNumbering::none()).expect("conversion succeeds");
        assert!(fragments.content.body_xml.contains("One"));
        assert_eq!(fragments.children.len(), 1);
        assert!(fragments.children[0].body_xml.contains("child body"));
    }
}
