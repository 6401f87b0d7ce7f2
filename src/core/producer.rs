use crate::core::encoder;
use crate::domain::model::{QrArtifact, QrRequest, RenderOptions};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Local};

/// `qr_code_<YYYYMMDD>_<HHMMSS>.png`. Two images finished in the same second
/// in the same directory share a name and the later one wins.
pub fn output_filename(at: DateTime<Local>) -> String {
    format!("qr_code_{}.png", at.format("%Y%m%d_%H%M%S"))
}

pub struct QrProducer<S: Storage> {
    storage: S,
    options: RenderOptions,
}

impl<S: Storage> QrProducer<S> {
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, RenderOptions::default())
    }

    pub fn with_options(storage: S, options: RenderOptions) -> Self {
        Self { storage, options }
    }

    /// Encodes `request.url` and writes it as a PNG into `request.output_dir`.
    ///
    /// The output directory is created first and is left in place whatever
    /// happens afterwards. Encoding and write failures are logged together
    /// with the URL, then returned unchanged.
    pub fn generate(&self, request: &QrRequest) -> Result<QrArtifact> {
        self.storage.ensure_dir(&request.output_dir)?;

        match self.render_and_write(request) {
            Ok(artifact) => {
                tracing::info!("QR code generated successfully: {}", artifact.path.display());
                Ok(artifact)
            }
            Err(e) => {
                tracing::error!("Error generating QR code for URL '{}': {}", request.url, e);
                Err(e)
            }
        }
    }

    fn render_and_write(&self, request: &QrRequest) -> Result<QrArtifact> {
        let rendered = encoder::render_png(&request.url, &self.options)?;
        tracing::debug!(
            "Encoded {} bytes into a {}x{} symbol ({}x{} px)",
            request.url.len(),
            rendered.modules,
            rendered.modules,
            rendered.width,
            rendered.height
        );

        let path = request.output_dir.join(output_filename(Local::now()));
        self.storage.write_file(&path, &rendered.png)?;

        Ok(QrArtifact {
            path,
            width: rendered.width,
            height: rendered.height,
        })
    }
}
