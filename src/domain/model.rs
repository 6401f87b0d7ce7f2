use crate::domain::ports::ConfigProvider;
use qrcode::EcLevel;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub url: String,
    pub output_dir: PathBuf,
}

impl QrRequest {
    pub fn new(url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.url(), config.output_dir())
    }
}

/// A PNG that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub ec_level: EcLevel,
    /// Pixels per module edge.
    pub box_size: u32,
    /// Quiet zone width, in modules.
    pub border: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::L,
            box_size: 10,
            border: 4,
        }
    }
}
