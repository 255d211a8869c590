//! Error type shared by the controller and the browser layer.

/// Failures the page can observe.
///
/// Missing page elements are not errors: those features are simply inert.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("clipboard is not available")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
}
