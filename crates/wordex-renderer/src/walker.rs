//! HTML-to-document tree walker.
//!
//! Walks the HTML tree produced by the markdown renderer and emits an
//! ordered list of document-model blocks (paragraphs and tables) through
//! `docx-rs`. Dispatch happens over a closed [`BlockTag`] set with an
//! explicit fallback arm: unrecognized markup is treated as a paragraph
//! and its inline content recursed into, never rejected.

use std::collections::HashSet;
use std::sync::LazyLock;

use base64::Engine;
use docx_rs::*;
use image::GenericImageView;
use regex::Regex;

use crate::convert::{ContentByLabelGroup, EmbeddedImage, HeadingNumbering, PageLink};
use crate::html::{HtmlElement, HtmlNode};

/// Sentinel run text swapped for the native TOC field construct during
/// fragment serialization.
pub(crate) const TOC_SENTINEL: &str = "[[wordex:toc-field]]";

/// Fixed output width for embedded images: 5 inches in EMU.
const IMAGE_WIDTH_EMU: u32 = 4_572_000;

/// Left indent per list nesting level, in twips (0.25 inch).
const LIST_INDENT_STEP: i32 = 360;

static HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+(?:\.\d+)*\.\s+").expect("invalid heading prefix regex"));
static TASK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([ xX])\]\s*").expect("invalid task marker regex"));

/// Visual style of a boxed container (panel, expand, code box).
struct BoxStyle {
    fill: &'static str,
    border: &'static str,
    border_size: usize,
    icon: &'static str,
}

/// Panel palette. The colors are fixed; do not derive them.
fn panel_style(panel_type: &str) -> Option<&'static BoxStyle> {
    Some(match panel_type {
        "info" => &BoxStyle { fill: "DEEBFF", border: "0052CC", border_size: 12, icon: "\u{2139}\u{fe0f}" },
        "warning" => &BoxStyle { fill: "FFFAE6", border: "FF8B00", border_size: 12, icon: "\u{26a0}\u{fe0f}" },
        "note" => &BoxStyle { fill: "EAE6FF", border: "6554C0", border_size: 12, icon: "\u{1f4dd}" },
        "tip" => &BoxStyle { fill: "E3FCEF", border: "00875A", border_size: 12, icon: "\u{1f4a1}" },
        "error" => &BoxStyle { fill: "FFEBE6", border: "DE350B", border_size: 12, icon: "\u{274c}" },
        _ => return None,
    })
}

const EXPAND_STYLE: BoxStyle = BoxStyle {
    fill: "F5F5F5",
    border: "7A869A",
    border_size: 12,
    icon: "\u{25b8}",
};

const CODE_BOX_STYLE: BoxStyle = BoxStyle {
    fill: "F5F5F5",
    border: "CCCCCC",
    border_size: 4,
    icon: "",
};

/// Highlight approximation and contrasting text color for a status
/// badge color name. Dark text goes on the light backgrounds
/// (grey/gray/yellow and the unknown-name fallback); everything else
/// gets white text.
fn badge_colors(name: Option<&str>) -> (&'static str, &'static str) {
    match name {
        Some("green") => ("green", "FFFFFF"),
        Some("yellow") => ("yellow", "000000"),
        Some("red") => ("red", "FFFFFF"),
        Some("blue") => ("blue", "FFFFFF"),
        Some("grey" | "gray") => ("lightGray", "000000"),
        Some("purple") => ("darkMagenta", "FFFFFF"),
        _ => ("lightGray", "000000"),
    }
}

/// Closed set of recognized block-level element kinds.
enum BlockTag {
    Heading(usize),
    Paragraph,
    UnorderedList,
    OrderedList,
    CodeBlock,
    Image,
    Blockquote,
    Table,
    Rule,
    Div,
    Container,
    Other,
}

impl BlockTag {
    fn classify(tag: &str) -> Self {
        match tag {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "pre" => Self::CodeBlock,
            "img" => Self::Image,
            "blockquote" => Self::Blockquote,
            "table" => Self::Table,
            "hr" => Self::Rule,
            "div" => Self::Div,
            "section" | "article" => Self::Container,
            _ => Self::Other,
        }
    }
}

/// Inline formatting inherited while descending into nested markup.
#[derive(Clone, Copy, Default)]
struct InlineFormat {
    bold: bool,
    italic: bool,
    strike: bool,
    code: bool,
}

/// Tracks the once-per-heading numeric prefix strip.
struct StripState {
    active: bool,
    done: bool,
}

impl StripState {
    fn inactive() -> Self {
        Self { active: false, done: false }
    }

    fn for_level(numbering: &HeadingNumbering, level: usize) -> Self {
        Self { active: numbering.is_numbered(level), done: false }
    }

    /// Strip the prefix from the first text segment where it matches.
    fn apply(&mut self, text: &str) -> String {
        if !self.active || self.done {
            return text.to_owned();
        }
        let stripped = HEADING_PREFIX.replacen(text, 1, "");
        if stripped != text {
            self.done = true;
        }
        stripped.into_owned()
    }
}

/// External collections consumed by the walker.
pub(crate) struct WalkContext<'a> {
    pub images: &'a std::collections::HashMap<String, EmbeddedImage>,
    pub macro_children: &'a [PageLink],
    pub content_by_label: &'a [ContentByLabelGroup],
    pub heading_numbering: &'a HeadingNumbering,
    pub render_toc_macro: bool,
}

/// One emitted block element.
enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

pub(crate) struct DocxWalker<'a> {
    ctx: &'a WalkContext<'a>,
    blocks: Vec<Block>,
    emitted_toc: bool,
}

impl<'a> DocxWalker<'a> {
    pub(crate) fn new(ctx: &'a WalkContext<'a>) -> Self {
        Self {
            ctx,
            blocks: Vec::new(),
            emitted_toc: false,
        }
    }

    /// Walk the fragment root and fold the emitted blocks into a
    /// document. Returns the document and whether a TOC was emitted.
    pub(crate) fn walk(mut self, root: &HtmlElement) -> (Docx, bool) {
        self.walk_children(root);
        let mut docx = Docx::new();
        for block in self.blocks {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(p),
                Block::Table(t) => docx.add_table(t),
            };
        }
        (docx, self.emitted_toc)
    }

    fn walk_children(&mut self, el: &HtmlElement) {
        for node in &el.children {
            match node {
                HtmlNode::Element(child) => self.block(child),
                HtmlNode::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        self.push_paragraph(
                            Paragraph::new().add_run(Run::new().add_text(trimmed)),
                        );
                    }
                }
            }
        }
    }

    fn push_paragraph(&mut self, p: Paragraph) {
        self.blocks.push(Block::Paragraph(p));
    }

    fn push_table(&mut self, t: Table) {
        self.blocks.push(Block::Table(t));
    }

    fn block(&mut self, el: &HtmlElement) {
        match BlockTag::classify(&el.tag) {
            BlockTag::Heading(level) => self.heading(el, level),
            BlockTag::Paragraph => {
                let p = self.inline_content(
                    el,
                    Paragraph::new(),
                    InlineFormat::default(),
                    &mut StripState::inactive(),
                );
                self.push_paragraph(p);
            }
            BlockTag::UnorderedList => {
                let mut paras = Vec::new();
                self.list(el, false, 0, &mut paras);
                for p in paras {
                    self.push_paragraph(p);
                }
            }
            BlockTag::OrderedList => {
                let mut paras = Vec::new();
                self.list(el, true, 0, &mut paras);
                for p in paras {
                    self.push_paragraph(p);
                }
            }
            BlockTag::CodeBlock => self.code_block(el),
            BlockTag::Image => {
                let run = self.image_run(
                    el.attr("src").unwrap_or_default(),
                    el.attr("alt").unwrap_or_default(),
                );
                self.push_paragraph(Paragraph::new().add_run(run));
            }
            BlockTag::Blockquote => self.blockquote(el),
            BlockTag::Table => self.table(el),
            BlockTag::Rule => self.push_paragraph(Paragraph::new()),
            BlockTag::Div => self.div(el),
            BlockTag::Container => self.walk_children(el),
            BlockTag::Other => {
                // Unknown block element: degrade to a paragraph.
                let p = self.inline_content(
                    el,
                    Paragraph::new(),
                    InlineFormat::default(),
                    &mut StripState::inactive(),
                );
                self.push_paragraph(p);
            }
        }
    }

    fn heading(&mut self, el: &HtmlElement, level: usize) {
        let mut strip = StripState::for_level(self.ctx.heading_numbering, level);
        let p = Paragraph::new().style(&format!("Heading{level}"));
        let p = self.inline_content(el, p, InlineFormat::default(), &mut strip);
        self.push_paragraph(p);
    }

    fn div(&mut self, el: &HtmlElement) {
        if el.has_class("toc-macro") {
            self.toc_macro();
            return;
        }
        if el.has_class("expand") {
            self.expand(el);
            return;
        }
        if el.has_class("excerpt") && el.attr("data-hidden") == Some("true") {
            return;
        }
        if el.has_class("children") {
            self.children_macro();
            return;
        }
        if el.has_class("content-by-label") {
            self.content_by_label_macro(el);
            return;
        }
        let panel_type = el
            .classes()
            .find(|class| class.starts_with("panel-") && *class != "panel-title")
            .map(|class| class.trim_start_matches("panel-").to_owned());
        if let Some(style) = panel_type.as_deref().and_then(panel_style) {
            self.panel(el, style);
            return;
        }
        // Regular div (excerpt, page-properties, pass-through markup).
        self.walk_children(el);
    }

    // --- inline content -------------------------------------------------

    fn styled_run(text: &str, fmt: InlineFormat) -> Run {
        let mut run = Run::new().add_text(text);
        if fmt.bold {
            run = run.bold();
        }
        if fmt.italic {
            run = run.italic();
        }
        if fmt.strike {
            run = run.strike();
        }
        if fmt.code {
            run = run.fonts(RunFonts::new().ascii("Courier New")).size(20);
        }
        run
    }

    fn hyperlink(para: Paragraph, url: &str, text: &str) -> Paragraph {
        let run = Run::new().add_text(text).color("0563C1").underline("single");
        para.add_hyperlink(Hyperlink::new(url, HyperlinkType::External).add_run(run))
    }

    /// Add the inline content of `el` to `para`.
    fn inline_content(
        &self,
        el: &HtmlElement,
        mut para: Paragraph,
        fmt: InlineFormat,
        strip: &mut StripState,
    ) -> Paragraph {
        if el.tag == "a" {
            let text = strip.apply(&el.text());
            return Self::hyperlink(para, el.attr("href").unwrap_or_default(), &text);
        }

        for node in &el.children {
            match node {
                HtmlNode::Text(text) => {
                    let text = strip.apply(text);
                    if !text.trim().is_empty() {
                        para = para.add_run(Self::styled_run(&text, fmt));
                    }
                }
                HtmlNode::Element(child) => {
                    para = self.inline_element(child, para, fmt, strip);
                }
            }
        }
        para
    }

    fn inline_element(
        &self,
        child: &HtmlElement,
        mut para: Paragraph,
        fmt: InlineFormat,
        strip: &mut StripState,
    ) -> Paragraph {
        match child.tag.as_str() {
            "strong" | "b" => {
                para = self.inline_content(child, para, InlineFormat { bold: true, ..fmt }, strip);
            }
            "em" | "i" => {
                para = self.inline_content(child, para, InlineFormat { italic: true, ..fmt }, strip);
            }
            "del" | "s" => {
                para = self.inline_content(child, para, InlineFormat { strike: true, ..fmt }, strip);
            }
            "code" => {
                let text = strip.apply(&child.text());
                para = para.add_run(Self::styled_run(&text, InlineFormat { code: true, ..fmt }));
            }
            "a" => {
                let text = strip.apply(&child.text());
                para = Self::hyperlink(para, child.attr("href").unwrap_or_default(), &text);
            }
            "br" => {
                para = para.add_run(Run::new().add_break(BreakType::TextWrapping));
            }
            "img" => {
                let run = self.image_run(
                    child.attr("src").unwrap_or_default(),
                    child.attr("alt").unwrap_or_default(),
                );
                para = para.add_run(run);
            }
            "span" if child.has_class("status") => {
                para = Self::status_badge(para, child);
            }
            _ => {
                para = self.inline_content(child, para, fmt, strip);
            }
        }
        para
    }

    fn status_badge(mut para: Paragraph, el: &HtmlElement) -> Paragraph {
        let text = el.text().trim().to_owned();
        let color = el
            .classes()
            .find(|class| class.starts_with("status-") && *class != "status")
            .map(|class| class.trim_start_matches("status-").to_owned());
        let (highlight, text_color) = badge_colors(color.as_deref());

        para = para.add_run(Run::new().add_text(" "));
        para = para.add_run(
            Run::new()
                .add_text(format!(" {text} "))
                .bold()
                .size(18)
                .color(text_color)
                .highlight(highlight),
        );
        para.add_run(Run::new().add_text(" "))
    }

    // --- images ---------------------------------------------------------

    fn image_run(&self, src: &str, alt: &str) -> Run {
        let filename = image_filename(src);
        let label = if alt.is_empty() { filename } else { alt };

        let Some(embedded) = self.ctx.images.get(filename) else {
            return Self::image_placeholder(label);
        };
        match build_picture(embedded) {
            Ok(pic) => Run::new().add_image(pic),
            Err(reason) => {
                tracing::debug!("embedded image {filename} not usable ({reason}), using placeholder");
                Self::image_placeholder(label)
            }
        }
    }

    fn image_placeholder(label: &str) -> Run {
        Run::new()
            .add_text(format!("[Image: {label}]"))
            .italic()
            .color("808080")
    }

    // --- lists ----------------------------------------------------------

    /// Render a list into `out`, one paragraph per item. Shared between
    /// body-level lists and lists inside boxed-table cells.
    fn list(&self, el: &HtmlElement, ordered: bool, level: usize, out: &mut Vec<Paragraph>) {
        let items = el.child_elements().filter(|child| child.tag == "li");
        for (index, li) in items.enumerate() {
            let flat = li.text();
            let checkbox = TASK_MARKER.captures(flat.trim()).map(|caps| {
                if &caps[1] == " " { "\u{2610} " } else { "\u{2611} " }
            });

            let prefix = checkbox.map_or_else(
                || {
                    if ordered {
                        format!("{}. ", index + 1)
                    } else {
                        "\u{2022} ".to_owned()
                    }
                },
                ToOwned::to_owned,
            );

            let indent = LIST_INDENT_STEP * i32::try_from(level + 1).unwrap_or(1);
            let mut para = Paragraph::new()
                .indent(Some(indent), None, None, None)
                .add_run(Run::new().add_text(prefix));

            let mut nested: Vec<Paragraph> = Vec::new();
            let mut marker_stripped = false;

            for node in &li.children {
                match node {
                    HtmlNode::Text(text) => {
                        let mut text = text.trim().to_owned();
                        if text.is_empty() {
                            continue;
                        }
                        if checkbox.is_some() && !marker_stripped {
                            let stripped = TASK_MARKER.replacen(&text, 1, "").into_owned();
                            marker_stripped = stripped != text;
                            text = stripped;
                        }
                        if !text.is_empty() {
                            para = para.add_run(Run::new().add_text(text));
                        }
                    }
                    HtmlNode::Element(child) => match child.tag.as_str() {
                        "ul" | "ol" => {
                            self.list(child, child.tag == "ol", level + 1, &mut nested);
                        }
                        "a" => {
                            let text = child.text();
                            para = Self::hyperlink(
                                para,
                                child.attr("href").unwrap_or_default(),
                                &text,
                            );
                        }
                        _ => {
                            para = self.inline_content(
                                child,
                                para,
                                InlineFormat::default(),
                                &mut StripState::inactive(),
                            );
                        }
                    },
                }
            }

            out.push(para);
            out.extend(nested);
        }
    }

    // --- tables ---------------------------------------------------------

    fn table(&mut self, el: &HtmlElement) {
        let rows = table_rows(el);
        let Some(first) = rows.first() else { return };
        let cols = first
            .child_elements()
            .filter(|c| c.tag == "th" || c.tag == "td")
            .count();
        if cols == 0 {
            return;
        }

        let mut table_rows = Vec::with_capacity(rows.len());
        for tr in rows {
            let cells: Vec<&HtmlElement> = tr
                .child_elements()
                .filter(|c| c.tag == "th" || c.tag == "td")
                .collect();
            let mut row_cells = Vec::with_capacity(cols);
            for col in 0..cols {
                let mut run = Run::new();
                if let Some(cell) = cells.get(col) {
                    run = run.add_text(cell.text().trim());
                    if cell.tag == "th" {
                        run = run.bold();
                    }
                } else {
                    run = run.add_text("");
                }
                row_cells.push(TableCell::new().add_paragraph(Paragraph::new().add_run(run)));
            }
            table_rows.push(TableRow::new(row_cells));
        }
        self.push_table(Table::new(table_rows));
    }

    // --- boxed containers (panels, expand, code) ------------------------

    fn boxed_table(style: &BoxStyle, paragraphs: Vec<Paragraph>) -> Table {
        let mut cell = TableCell::new()
            .shading(Shading::new().shd_type(ShdType::Clear).fill(style.fill));
        for position in [
            TableCellBorderPosition::Top,
            TableCellBorderPosition::Left,
            TableCellBorderPosition::Bottom,
            TableCellBorderPosition::Right,
        ] {
            cell = cell.set_border(
                TableCellBorder::new(position)
                    .size(style.border_size)
                    .color(style.border),
            );
        }
        for p in paragraphs {
            cell = cell.add_paragraph(p);
        }
        Table::new(vec![TableRow::new(vec![cell])])
    }

    /// Collect the child blocks of a boxed container into cell
    /// paragraphs (paragraphs, lists, stray text).
    fn box_body(&self, el: &HtmlElement, skip_title: bool, out: &mut Vec<Paragraph>) {
        for node in &el.children {
            match node {
                HtmlNode::Element(child) => {
                    if skip_title && child.has_class("panel-title") {
                        continue;
                    }
                    match child.tag.as_str() {
                        "p" => {
                            let p = self.inline_content(
                                child,
                                Paragraph::new(),
                                InlineFormat::default(),
                                &mut StripState::inactive(),
                            );
                            out.push(p);
                        }
                        "ul" | "ol" => self.list(child, child.tag == "ol", 0, out),
                        _ => {
                            let p = self.inline_content(
                                child,
                                Paragraph::new(),
                                InlineFormat::default(),
                                &mut StripState::inactive(),
                            );
                            out.push(p);
                        }
                    }
                }
                HtmlNode::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        out.push(Paragraph::new().add_run(Run::new().add_text(trimmed)));
                    }
                }
            }
        }
    }

    fn panel(&mut self, el: &HtmlElement, style: &BoxStyle) {
        let title = el
            .find_child("div", "panel-title")
            .map(|div| div.text().trim().to_owned());

        let mut paras = Vec::new();
        match title {
            Some(title) => paras.push(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text(format!("{} {title}", style.icon))
                        .bold()
                        .size(22),
                ),
            ),
            None => paras.push(
                Paragraph::new().add_run(Run::new().add_text(format!("{} ", style.icon))),
            ),
        }
        self.box_body(el, true, &mut paras);

        self.push_table(Self::boxed_table(style, paras));
        // Spacing after the box.
        self.push_paragraph(Paragraph::new());
    }

    fn expand(&mut self, el: &HtmlElement) {
        let title = el.attr("data-title").unwrap_or("Click to expand");
        let mut paras = vec![Paragraph::new().add_run(
            Run::new()
                .add_text(format!("{} {title}", EXPAND_STYLE.icon))
                .bold()
                .size(22),
        )];
        self.box_body(el, false, &mut paras);

        self.push_table(Self::boxed_table(&EXPAND_STYLE, paras));
        self.push_paragraph(Paragraph::new());
    }

    fn code_block(&mut self, el: &HtmlElement) {
        let text = el
            .child_elements()
            .find(|child| child.tag == "code")
            .map_or_else(|| el.text(), HtmlElement::text);

        let mut paras = Vec::new();
        for line in text.trim_end_matches('\n').split('\n') {
            paras.push(
                Paragraph::new()
                    .indent(Some(284), None, Some(284), None)
                    .add_run(
                        Run::new()
                            .add_text(line)
                            .fonts(RunFonts::new().ascii("Courier New"))
                            .size(18),
                    ),
            );
        }
        self.push_table(Self::boxed_table(&CODE_BOX_STYLE, paras));
        self.push_paragraph(Paragraph::new());
    }

    fn blockquote(&mut self, el: &HtmlElement) {
        for child in el.child_elements() {
            if child.tag != "p" {
                continue;
            }
            let p = Paragraph::new().indent(Some(720), None, None, None);
            let p = self.inline_content(
                child,
                p,
                InlineFormat { italic: true, ..InlineFormat::default() },
                &mut StripState::inactive(),
            );
            self.push_paragraph(p);
        }
    }

    // --- macros backed by external collections --------------------------

    fn toc_macro(&mut self) {
        if !self.ctx.render_toc_macro {
            return;
        }
        self.emitted_toc = true;
        self.push_paragraph(Paragraph::new().add_run(Run::new().add_text(TOC_SENTINEL)));
    }

    fn link_list(&mut self, links: &[PageLink]) {
        for link in links {
            let mut para = Paragraph::new().add_run(Run::new().add_text("\u{2022} "));
            para = match link.url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => {
                    let text = if link.title.is_empty() { url } else { &link.title };
                    Self::hyperlink(para, url, text)
                }
                None => para.add_run(Run::new().add_text(link.title.as_str())),
            };
            self.push_paragraph(para);
        }
    }

    fn children_macro(&mut self) {
        let links = self.ctx.macro_children;
        self.link_list(links);
    }

    fn content_by_label_macro(&mut self, el: &HtmlElement) {
        let labels = normalize_list(el.attr("data-labels").unwrap_or_default());
        let spaces = normalize_list(el.attr("data-spaces").unwrap_or_default());

        let matched = self.ctx.content_by_label.iter().find(|group| {
            normalize_list(&group.labels) == labels && normalize_list(&group.spaces) == spaces
        });
        if let Some(group) = matched {
            self.link_list(&group.items);
        }
    }
}

/// Comma-split, trimmed, order-insensitive label/space list.
fn normalize_list(value: &str) -> HashSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Resolve an image source to the bare filename: path and query
/// string stripped.
fn image_filename(src: &str) -> &str {
    let name = src.rsplit('/').next().unwrap_or(src);
    name.split('?').next().unwrap_or(name)
}

/// Collect `tr` elements whether or not the table nests them in
/// `thead`/`tbody`.
fn table_rows(el: &HtmlElement) -> Vec<&HtmlElement> {
    let mut rows = Vec::new();
    for child in el.child_elements() {
        match child.tag.as_str() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child.child_elements().filter(|c| c.tag == "tr"));
            }
            _ => {}
        }
    }
    rows
}

/// Decode and size an embedded image, transcoding to PNG when the
/// source format is not natively supported.
fn build_picture(embedded: &EmbeddedImage) -> Result<Pic, String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(embedded.data.trim())
        .map_err(|err| format!("base64 decode failed: {err}"))?;

    let format = image::guess_format(&bytes).map_err(|err| format!("unknown format: {err}"))?;
    let decoded = image::load_from_memory(&bytes).map_err(|err| format!("decode failed: {err}"))?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err("image has zero dimension".to_owned());
    }

    let payload = match format {
        image::ImageFormat::Png | image::ImageFormat::Jpeg => bytes,
        _ => {
            let mut buffer = Vec::new();
            decoded
                .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
                .map_err(|err| format!("PNG transcode failed: {err}"))?;
            buffer
        }
    };

    let height_emu = u32::try_from(
        u64::from(IMAGE_WIDTH_EMU) * u64::from(height) / u64::from(width),
    )
    .map_err(|_| "image aspect ratio overflow".to_owned())?;
    Ok(Pic::new(&payload).size(IMAGE_WIDTH_EMU, height_emu))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_covers_known_tags() {
        assert!(matches!(BlockTag::classify("h3"), BlockTag::Heading(3)));
        assert!(matches!(BlockTag::classify("ul"), BlockTag::UnorderedList));
        assert!(matches!(BlockTag::classify("video"), BlockTag::Other));
    }

    #[test]
    fn strip_state_fires_once() {
        let numbering = HeadingNumbering::from_levels([true; 6]);
        let mut strip = StripState::for_level(&numbering, 1);
        assert_eq!(strip.apply("6. Title Text"), "Title Text");
        assert_eq!(strip.apply("1.2. Later"), "1.2. Later");
    }

    #[test]
    fn strip_state_skips_non_matching_segments() {
        let numbering = HeadingNumbering::from_levels([true; 6]);
        let mut strip = StripState::for_level(&numbering, 2);
        assert_eq!(strip.apply("Intro "), "Intro ");
        assert_eq!(strip.apply("1.2. tail"), "tail");
        assert!(strip.done);
    }

    #[test]
    fn badge_contrast_table() {
        assert_eq!(badge_colors(Some("blue")), ("blue", "FFFFFF"));
        assert_eq!(badge_colors(Some("grey")), ("lightGray", "000000"));
        assert_eq!(badge_colors(Some("yellow")), ("yellow", "000000"));
        assert_eq!(badge_colors(Some("nope")), ("lightGray", "000000"));
    }

    #[test]
    fn filename_resolution_strips_path_and_query() {
        assert_eq!(image_filename("/wiki/download/pic.png?version=2"), "pic.png");
        assert_eq!(image_filename("pic.png"), "pic.png");
        assert_eq!(image_filename("a/b/c.jpeg"), "c.jpeg");
    }

    #[test]
    fn normalize_list_is_order_insensitive() {
        assert_eq!(normalize_list("a, b"), normalize_list("b,a"));
        assert_eq!(normalize_list(" , "), HashSet::new());
    }

    #[test]
    fn unknown_panel_type_has_no_style() {
        assert!(panel_style("info").is_some());
        assert!(panel_style("fancy").is_none());
    }
}
