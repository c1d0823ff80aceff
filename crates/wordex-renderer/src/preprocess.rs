//! Block-macro preprocessor.
//!
//! Rewrites the wiki macro dialect into intermediate HTML before the
//! markdown parser runs. The stages form a fixed, ordered pipeline;
//! later stages assume earlier ones already ran (the panel stage, for
//! example, must not see `:::expand` fences, and the emoticon stage
//! operates on text the status stage has already consumed). Each stage
//! function documents its required predecessors.
//!
//! Macro bodies that contain markdown are rendered through the
//! caller-supplied fragment renderer, a separate throwaway markdown pass
//! that shares no state with the outer conversion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::emoticons::replace_emoticons;

/// Renders a nested markdown fragment to HTML, independently of the
/// outer conversion.
pub type FragmentRenderer<'a> = dyn Fn(&str) -> String + 'a;

/// The five fixed panel macro types.
pub const PANEL_TYPES: [&str; 5] = ["info", "warning", "note", "tip", "error"];

static TOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":::toc\s*\n:::").expect("invalid toc regex"));
static EXPAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s):::expand(?: ([^\n]*))?\n(.*?)\n:::").expect("invalid expand regex"));
static EXCERPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s):::excerpt(?: ([^\n]*))?\n(.*?)\n:::").expect("invalid excerpt regex"));
static CHILDREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s):::children(?: ([^\n]*))?\n:::").expect("invalid children regex"));
static CONTENT_BY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s):::content-by-label(?: ([^\n]*))?\n:::").expect("invalid content-by-label regex")
});
static PAGE_PROPERTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s):::page-properties(?: ([^\n]*))?\n(.*?)\n:::").expect("invalid page-properties regex")
});
static PANEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s):::(info|warning|note|tip|error)(?: ([^\n]*))?\n(.*?)\n:::")
        .expect("invalid panel regex")
});
static STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{color:(\w+)\}\\?\[([^\]\\]+)\\?\]\{color\}").expect("invalid status regex")
});
static STRIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~([^~]+)~").expect("invalid strike regex"));
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{anchor:[^}]+\}").expect("invalid anchor regex"));
static PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z-]+)\s*=\s*("[^"]*"|\S+)"#).expect("invalid param regex")
});

/// Apply every preprocessor stage in the fixed pipeline order.
pub fn preprocess(input: &str, render_fragment: &FragmentRenderer) -> String {
    let out = rewrite_toc(input);
    let out = rewrite_expand(&out, render_fragment);
    let out = rewrite_excerpt(&out, render_fragment);
    let out = rewrite_children(&out);
    let out = rewrite_content_by_label(&out);
    let out = rewrite_page_properties(&out, render_fragment);
    let out = rewrite_panels(&out);
    let out = rewrite_status(&out);
    let out = replace_emoticons(&out);
    let out = rewrite_strikethrough(&out);
    strip_anchors(&out)
}

/// Extract a `key="value"` or `key=value` parameter from a macro
/// parameter string.
fn parse_param(params: &str, key: &str) -> Option<String> {
    PARAM.captures_iter(params).find_map(|caps| {
        if &caps[1] == key {
            Some(caps[2].trim_matches('"').to_owned())
        } else {
            None
        }
    })
}

/// Escape text placed into an HTML attribute value.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Strip blank lines so a pre-rendered HTML body stays a single raw
/// HTML block when the outer markdown pass sees it.
fn collapse_blank_lines(html: &str) -> String {
    html.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stage 1: `:::toc` with an empty body becomes a TOC placeholder div.
///
/// Runs first so the expand/panel stages never see the fence.
fn rewrite_toc(input: &str) -> String {
    TOC.replace_all(input, r#"<div class="toc-macro"></div>"#)
        .into_owned()
}

/// Stage 2: `:::expand [title]` blocks. Requires stage 1.
///
/// The body is independently rendered to HTML before embedding.
fn rewrite_expand(input: &str, render_fragment: &FragmentRenderer) -> String {
    EXPAND
        .replace_all(input, |caps: &Captures| {
            let title = caps
                .get(1)
                .map_or("Click to expand", |m| m.as_str().trim());
            let title = if title.is_empty() { "Click to expand" } else { title };
            let html = collapse_blank_lines(&render_fragment(caps[2].trim()));
            format!(
                r#"<div class="expand" data-title="{}">{html}</div>"#,
                escape_attr(title)
            )
        })
        .into_owned()
}

/// Stage 3: `:::excerpt [params]` blocks with optional `name` parameter
/// and bare `hidden` flag. Requires stage 2.
fn rewrite_excerpt(input: &str, render_fragment: &FragmentRenderer) -> String {
    EXCERPT
        .replace_all(input, |caps: &Captures| {
            let params = caps.get(1).map_or("", |m| m.as_str()).trim();
            let html = collapse_blank_lines(&render_fragment(caps[2].trim()));
            let name_attr = parse_param(params, "name")
                .map(|name| format!(r#" data-name="{}""#, escape_attr(&name)))
                .unwrap_or_default();
            let hidden_attr = if params.split_whitespace().any(|tok| tok == "hidden") {
                r#" data-hidden="true""#
            } else {
                ""
            };
            format!(r#"<div class="excerpt"{name_attr}{hidden_attr}>{html}</div>"#)
        })
        .into_owned()
}

/// Stage 4: `:::children [params]` placeholder with optional `depth`.
/// Requires stage 3.
fn rewrite_children(input: &str) -> String {
    CHILDREN
        .replace_all(input, |caps: &Captures| {
            let params = caps.get(1).map_or("", |m| m.as_str()).trim();
            let depth_attr = parse_param(params, "depth")
                .map(|depth| format!(r#" data-depth="{}""#, escape_attr(&depth)))
                .unwrap_or_default();
            format!(r#"<div class="children"{depth_attr}></div>"#)
        })
        .into_owned()
}

/// Stage 5: `:::content-by-label [params]` placeholder with optional
/// `labels`, `spaces` and `max` parameters. Requires stage 4.
fn rewrite_content_by_label(input: &str) -> String {
    CONTENT_BY_LABEL
        .replace_all(input, |caps: &Captures| {
            let params = caps.get(1).map_or("", |m| m.as_str()).trim();
            let mut attrs = String::new();
            for (key, attr) in [("labels", "data-labels"), ("spaces", "data-spaces"), ("max", "data-max")] {
                if let Some(value) = parse_param(params, key) {
                    attrs.push_str(&format!(r#" {attr}="{}""#, escape_attr(&value)));
                }
            }
            format!(r#"<div class="content-by-label"{attrs}></div>"#)
        })
        .into_owned()
}

/// Stage 6: `:::page-properties [params]` blocks with optional `id`.
/// Requires stage 5. The body is independently rendered.
fn rewrite_page_properties(input: &str, render_fragment: &FragmentRenderer) -> String {
    PAGE_PROPERTIES
        .replace_all(input, |caps: &Captures| {
            let params = caps.get(1).map_or("", |m| m.as_str()).trim();
            let html = collapse_blank_lines(&render_fragment(caps[2].trim()));
            let id_attr = parse_param(params, "id")
                .map(|id| format!(r#" data-id="{}""#, escape_attr(&id)))
                .unwrap_or_default();
            format!(r#"<div class="page-properties"{id_attr}>{html}</div>"#)
        })
        .into_owned()
}

/// Stage 7: the five fixed panel types. Requires stages 1-6 so the
/// other `:::` fences are already gone.
///
/// The body stays raw markdown, separated from the container markup by
/// blank lines, so the outer markdown pass renders it in place.
fn rewrite_panels(input: &str) -> String {
    PANEL
        .replace_all(input, |caps: &Captures| {
            let panel_type = caps[1].to_lowercase();
            let title = caps.get(2).map_or("", |m| m.as_str()).trim();
            let content = caps[3].trim();
            if title.is_empty() {
                format!("<div class=\"panel panel-{panel_type}\">\n\n{content}\n\n</div>")
            } else {
                format!(
                    "<div class=\"panel panel-{panel_type}\"><div class=\"panel-title\">{title}</div>\n\n{content}\n\n</div>"
                )
            }
        })
        .into_owned()
}

/// Stage 8: `{color:<name>}[TEXT]{color}` status badges, with optionally
/// backslash-escaped brackets. Requires stage 7.
fn rewrite_status(input: &str) -> String {
    STATUS
        .replace_all(input, |caps: &Captures| {
            let color = caps[1].to_lowercase();
            let text = &caps[2];
            format!(r#"<span class="status status-{color}">{text}</span>"#)
        })
        .into_owned()
}

/// Stage 10: single-tilde strikethrough to `<del>`. Requires stage 9
/// (emoticons) so tildes inside replaced codes are gone.
fn rewrite_strikethrough(input: &str) -> String {
    STRIKE.replace_all(input, "<del>$1</del>").into_owned()
}

/// Stage 11: `{anchor:name}` macros are dropped entirely. Requires
/// stage 8 so `{color:..}` spans are already consumed.
fn strip_anchors(input: &str) -> String {
    ANCHOR.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn passthrough(md: &str) -> String {
        format!("<p>{md}</p>")
    }

    fn run(input: &str) -> String {
        preprocess(input, &passthrough)
    }

    #[test]
    fn toc_macro_becomes_placeholder_div() {
        assert_eq!(run(":::toc\n:::"), r#"<div class="toc-macro"></div>"#);
    }

    #[test]
    fn every_panel_type_gets_container_and_title() {
        for panel_type in PANEL_TYPES {
            let input = format!(":::{panel_type} Heads up\nbody text\n:::");
            let output = run(&input);
            assert!(
                output.contains(&format!(r#"<div class="panel panel-{panel_type}">"#)),
                "missing container for {panel_type}: {output}"
            );
            assert!(
                output.contains(r#"<div class="panel-title">Heads up</div>"#),
                "missing title for {panel_type}: {output}"
            );
            assert!(output.contains("\n\nbody text\n\n"));
        }
    }

    #[test]
    fn panel_without_title_has_no_title_div() {
        let output = run(":::info\njust text\n:::");
        assert!(output.contains(r#"<div class="panel panel-info">"#));
        assert!(!output.contains("panel-title"));
    }

    #[test]
    fn expand_renders_body_and_defaults_title() {
        let output = run(":::expand\n* item\n:::");
        assert_eq!(
            output,
            r#"<div class="expand" data-title="Click to expand"><p>* item</p></div>"#
        );
    }

    #[test]
    fn expand_with_title() {
        let output = run(":::expand More detail\ntext\n:::");
        assert!(output.contains(r#"data-title="More detail""#));
    }

    #[test]
    fn excerpt_parameters() {
        let output = run(":::excerpt name=\"summary\" hidden\nbody\n:::");
        assert!(output.contains(r#"class="excerpt""#));
        assert!(output.contains(r#" data-name="summary""#));
        assert!(output.contains(r#" data-hidden="true""#));
    }

    #[test]
    fn excerpt_without_parameters() {
        let output = run(":::excerpt\nbody\n:::");
        assert_eq!(output, r#"<div class="excerpt"><p>body</p></div>"#);
    }

    #[test]
    fn children_macro_with_depth() {
        assert_eq!(
            run(":::children depth=2\n:::"),
            r#"<div class="children" data-depth="2"></div>"#
        );
        assert_eq!(run(":::children\n:::"), r#"<div class="children"></div>"#);
    }

    #[test]
    fn content_by_label_attributes() {
        let output = run(":::content-by-label labels=\"api, docs\" spaces=DEV max=5\n:::");
        assert_eq!(
            output,
            r#"<div class="content-by-label" data-labels="api, docs" data-spaces="DEV" data-max="5"></div>"#
        );
    }

    #[test]
    fn page_properties_with_id() {
        let output = run(":::page-properties id=props-1\n| a | b |\n:::");
        assert!(output.starts_with(r#"<div class="page-properties" data-id="props-1">"#));
    }

    #[test]
    fn status_badge_with_and_without_escaped_brackets() {
        assert_eq!(
            run("{color:green}[DONE]{color}"),
            r#"<span class="status status-green">DONE</span>"#
        );
        assert_eq!(
            run(r"{color:Red}\[BLOCKED\]{color}"),
            r#"<span class="status status-red">BLOCKED</span>"#
        );
    }

    #[test]
    fn single_tilde_strikethrough() {
        assert_eq!(run("a ~gone~ b"), "a <del>gone</del> b");
    }

    #[test]
    fn anchors_removed() {
        assert_eq!(run("before {anchor:section-1} after"), "before  after");
    }

    #[test]
    fn emoticons_run_before_strikethrough() {
        assert_eq!(run("ok (y)"), "ok \u{1f44d}");
    }

    #[test]
    fn nested_body_markdown_uses_fragment_renderer() {
        let rendered = preprocess(
            ":::expand T\n**bold**\n:::",
            &|md: &str| format!("<strong>{}</strong>", md.trim_matches('*')),
        );
        assert_eq!(
            rendered,
            r#"<div class="expand" data-title="T"><strong>bold</strong></div>"#
        );
    }

    #[test]
    fn blank_lines_collapsed_in_rendered_bodies() {
        let rendered = preprocess(
            ":::excerpt\nbody\n:::",
            &|_md: &str| "<p>a</p>\n\n<p>b</p>".to_owned(),
        );
        assert_eq!(rendered, "<div class=\"excerpt\"><p>a</p>\n<p>b</p></div>");
    }
}
