pub mod encoder;
pub mod producer;

pub use crate::domain::model::{QrArtifact, QrRequest, RenderOptions};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
