//! Error types for fragment rendering.

/// Result type for fragment rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error during markdown to fragment conversion.
///
/// Degradable content problems (bad images, unknown tags) never surface
/// here; they fall back to placeholder output inside the walker. These
/// variants cover structural failures only.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The built fragment package could not be serialized.
    #[error("failed to pack fragment: {0}")]
    Pack(String),

    /// The built fragment package could not be read back.
    #[error("fragment package error")]
    Package(#[from] zip::result::ZipError),

    /// I/O error while assembling the fragment.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
