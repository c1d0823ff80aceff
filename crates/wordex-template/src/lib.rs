//! Word template preparation, placeholder translation and rendering.
//!
//! Takes a template package in standard or macro-enabled form, with
//! native `{{ ... }}` placeholders or the legacy `$scroll.x` dialect,
//! and renders it with page data: scalars through the template engine,
//! the markdown body as a document fragment spliced at its
//! paragraph-level marker, and a table-of-contents refresh prompt on
//! the way out.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wordex_template::{PageData, render_template};
//!
//! let page: PageData = serde_json::from_str(r#"{"title": "T", "markdown": "# hi"}"#).unwrap();
//! let outcome = render_template(
//!     Path::new("template.docm"),
//!     &page,
//!     Path::new("out.docx"),
//! ).unwrap();
//! println!("wrote {}", outcome.output.display());
//! ```

mod context;
mod error;
pub mod filters;
pub mod package;
mod page;
mod render;
pub mod scroll;
pub mod styles;
mod subdoc;
pub mod toc;

pub use error::{RenderError, TemplateError};
pub use page::{ChildPage, ContentByLabelEntry, ImagePayload, MacroChild, PageData, Person};
pub use render::{RenderOutcome, render_template};
