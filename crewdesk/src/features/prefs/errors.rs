use thiserror::Error;

/// Errors emitted while reading or writing UI preferences.
#[derive(Debug, Error)]
pub(crate) enum PrefsError {
    #[error("prefs IO failed")]
    Io(#[from] std::io::Error),
    #[error("prefs JSON failed")]
    Json(#[from] serde_json::Error),
}
