pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalStorage;
pub use config::{ConfigOverrides, QrConfig};
pub use core::producer::QrProducer;
pub use domain::model::{QrArtifact, QrRequest, RenderOptions};
pub use utils::error::{QrError, Result};
