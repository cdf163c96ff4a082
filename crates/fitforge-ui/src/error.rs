//! Error types for FitForge UI

use thiserror::Error;

/// Errors raised where untyped input enters the view model.
///
/// Rendering itself never fails; these only surface when strings are parsed
/// into the closed enumerations the components accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Difficulty outside easy / medium / hard
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Icon name not present in the glyph set
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
}

/// Result type alias using UiError
pub type UiResult<T> = Result<T, UiError>;
