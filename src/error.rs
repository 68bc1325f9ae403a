use thiserror::Error;

/// Top-level error type for the ribbon label engine.
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while parsing a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color: {0}")]
    Unknown(String),

    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Errors related to label properties.
#[derive(Debug, Error, PartialEq)]
pub enum LabelError {
    #[error("text size must be positive and finite, got {0}")]
    InvalidTextSize(f64),

    #[error("unknown corner: {0}")]
    UnknownCorner(String),
}

/// Errors reported by a drawing surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing surface failed: {0}")]
    Surface(String),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for results using [`RibbonError`].
pub type Result<T> = std::result::Result<T, RibbonError>;
