use thiserror::Error;

pub type SignatureResult<T> = Result<T, SignatureError>;

/// Errors raised by the outer surfaces of the crate (files, share links, saved
/// profiles). Markup generation itself never fails.
#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Invalid share token: {reason}")]
    InvalidShareToken { reason: String },

    #[error("Unknown language code '{code}'. Expected one of: {expected}")]
    UnknownLanguage { code: String, expected: String },

    #[error("Unknown template '{name}'. Expected one of: {expected}")]
    UnknownTemplate { name: String, expected: String },

    #[error("Profile '{key}' not found in store")]
    ProfileNotFound { key: String },

    #[error("Profile name must not be empty")]
    EmptyProfileName,

    #[error("Failed to access '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_yaml::Error> for SignatureError {
    fn from(err: serde_yaml::Error) -> Self {
        SignatureError::YamlError(err.to_string())
    }
}

impl From<serde_json::Error> for SignatureError {
    fn from(err: serde_json::Error) -> Self {
        SignatureError::JsonError(err.to_string())
    }
}

impl SignatureError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        SignatureError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}
