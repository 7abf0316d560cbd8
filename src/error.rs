use thiserror::Error;

/// Why a play request was rejected by the media element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Audio source not supported: {0}")]
    NotSupported(String),

    #[error("Playback not allowed: {0}")]
    NotAllowed(String),

    #[error("Playback aborted: {0}")]
    Aborted(String),

    #[error("{name}: {message}")]
    Other { name: String, message: String },
}

impl PlaybackError {
    /// Classify a rejection by its DOM exception name.
    pub fn from_dom_name(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            "NotSupportedError" => Self::NotSupported(message),
            "NotAllowedError" => Self::NotAllowed(message),
            "AbortError" => Self::Aborted(message),
            _ => Self::Other {
                name: name.to_string(),
                message,
            },
        }
    }

    /// The chapter's audio is missing or in a format the element cannot play.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings storage error: {0}")]
    Storage(String),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
