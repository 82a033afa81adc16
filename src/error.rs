//! Error types for the fallible edges of the crate.
//!
//! Text transforms never fail; they degrade to returning their input. Errors
//! only come from parsing rendered SVG, loading options, and the CLI.

/// A rejected render, carrying the renderer's human-readable message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid SVG document: {0}")]
    Svg(#[from] roxmltree::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no element with id \"{0}\" in the SVG document")]
    ElementNotFound(String),

    #[error("unknown shape \"{0}\", expected one of rect, round, stadium, subroutine, cylinder, circle, diamond, hexagon")]
    UnknownShape(String),

    #[error("unknown dialect \"{0}\"")]
    UnknownDialect(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
