//! Markdown-with-macros to Word fragment renderer.
//!
//! Converts the wiki markdown dialect (panels, status badges, expand
//! blocks, TOC and children macros, emoticons) into an ordered Word
//! document fragment that can be spliced into a template package.
//!
//! The pipeline has three stages:
//! 1. [`preprocess`]: rewrites the block-macro dialect into intermediate
//!    HTML markup before the markdown parser runs.
//! 2. markdown → HTML through `pulldown-cmark`.
//! 3. [`walker`]: walks the resulting HTML tree and emits document-model
//!    elements (paragraphs, runs, tables, styled boxes, TOC fields).
//!
//! # Example
//!
//! ```no_run
//! use wordex_renderer::{ConvertOptions, MarkdownConverter};
//!
//! let mut converter = MarkdownConverter::new(ConvertOptions::new());
//! let fragment = converter.convert("# Hello\n\n**Bold** text").unwrap();
//! assert!(fragment.body_xml.contains("Hello"));
//! ```

mod convert;
mod emoticons;
mod error;
mod fragment;
pub mod html;
pub mod preprocess;
mod walker;

pub use convert::{
    ContentByLabelGroup, ConvertOptions, EmbeddedImage, HeadingNumbering, MarkdownConverter,
    PageLink,
};
pub use error::{Error, Result};
pub use fragment::{FragmentRelationship, RelationshipKind, RenderedFragment};
