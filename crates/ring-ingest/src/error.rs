//! Error types for show imports.

use thiserror::Error;

/// Errors that can occur while parsing import text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text contained no `[Area Name]` header.
    #[error("no areas found; specify at least one area using [Area Name]")]
    NoAreasFound,
}
