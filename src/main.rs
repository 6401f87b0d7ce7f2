use anyhow::Context;
use clap::Parser;
use urlqr::utils::{logger, validation::Validate};
use urlqr::{CliArgs, LocalStorage, QrConfig, QrProducer, QrRequest};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = QrConfig::from_env(args.into());

    // 初始化日誌
    let session = logger::init_cli_logger(&config.log_dir, config.verbose)
        .context("failed to set up logging")?;
    tracing::dispatcher::set_global_default(session.dispatch().clone())
        .context("failed to install logger")?;

    tracing::info!("QR Code Generator Application started");
    tracing::debug!("Log file: {}", session.log_file().display());
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Application failed: {}", e);
        return Err(e.into());
    }

    tracing::info!("Generating QR code for URL: {}", config.url);

    let producer = QrProducer::new(LocalStorage::new());
    match producer.generate(&QrRequest::from_config(&config)) {
        Ok(artifact) => {
            tracing::info!("QR code successfully generated at: {}", artifact.path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Application failed: {}", e);
            Err(e.into())
        }
    }
}
