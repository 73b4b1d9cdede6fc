use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the adapters around the bill core.
///
/// Totals, currency lookup and template rendering never fail; only storage,
/// settings, export and lookups by item id can.
#[derive(Debug, Error)]
pub enum BillError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse settings: {0}")]
    SettingsDecode(#[from] toml::de::Error),

    #[error("Failed to write settings: {0}")]
    SettingsEncode(#[from] toml::ser::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    #[error("Could not determine the platform {0} directory")]
    NoPlatformDir(&'static str),
}

impl BillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BillError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BillError>;
