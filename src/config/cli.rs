use super::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "urlqr")]
#[command(about = "Generate QR codes from URLs")]
pub struct CliArgs {
    /// URL to encode in the QR code (default from QR_CODE_URL or http://github.com/kaw393939)
    #[arg(long)]
    pub url: Option<String>,

    /// Directory to save QR codes (default from QR_OUTPUT_DIR or 'qr_codes')
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory for per-run log files (default from QR_LOG_DIR or 'logs')
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<CliArgs> for ConfigOverrides {
    fn from(args: CliArgs) -> Self {
        Self {
            url: args.url,
            output_dir: args.output,
            log_dir: args.log_dir,
            verbose: args.verbose,
        }
    }
}
