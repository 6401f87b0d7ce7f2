use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Failed to prepare {}: {source}", .path.display())]
    Setup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("QR encoding failed: {source}")]
    Encode {
        url: String,
        #[source]
        source: qrcode::types::QrError,
    },

    #[error("Image rendering error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl QrError {
    /// Directory setup failures are fatal and never retried.
    pub fn is_setup(&self) -> bool {
        matches!(self, QrError::Setup { .. })
    }
}

pub type Result<T> = std::result::Result<T, QrError>;
