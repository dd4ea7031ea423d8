use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("{operation}() has no current point; move_to() or line_to() must come first")]
    /// A relative path operation was issued before any point was established,
    /// or after the path was closed
    NoCurrentPoint { operation: &'static str },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("page order refers to a page that is no longer in the document")]
    /// The page order refers to a page that isn't in the document
    PageMissing,
}
