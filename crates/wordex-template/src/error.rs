//! Error types for template preparation and rendering.

use std::path::PathBuf;

/// Error while preparing a template package (format conversion,
/// placeholder translation).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// Template file missing or unreadable.
    #[error("template not found: {0}")]
    NotFound(PathBuf),

    /// I/O error while copying or rewriting the package.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The package could not be read as a zip container.
    #[error("package error")]
    Package(#[from] zip::result::ZipError),
}

/// Error while rendering a template to an output document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Template preparation failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The template engine rejected the document text.
    #[error("template rendering failed: {0}")]
    Engine(#[from] minijinja::Error),

    /// Markdown conversion failed.
    #[error(transparent)]
    Fragment(#[from] wordex_renderer::Error),

    /// I/O error while writing the output package.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The output package could not be written.
    #[error("package error")]
    Package(#[from] zip::result::ZipError),
}
