use crate::utils::error::{QrError, Result};
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::fmt::{self, time::ChronoLocal, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A configured logging pipeline for one run: console plus a per-run log file.
///
/// Nothing is installed globally on construction. The binary calls
/// `tracing::dispatcher::set_global_default` with [`LogSession::dispatch`];
/// tests scope it with `tracing::dispatcher::with_default` instead.
pub struct LogSession {
    dispatch: Dispatch,
    log_file: PathBuf,
}

impl LogSession {
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

pub fn log_filename(started_at: DateTime<Local>) -> String {
    format!("qr_generator_{}.log", started_at.format("%Y%m%d_%H%M%S"))
}

pub fn init_cli_logger(log_dir: &Path, verbose: bool) -> Result<LogSession> {
    build_session(log_dir, verbose, std::io::stderr, true)
}

/// Same as [`init_cli_logger`] but with the console sink replaced by `console`.
pub fn init_logger_with_console<W>(log_dir: &Path, verbose: bool, console: W) -> Result<LogSession>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    build_session(log_dir, verbose, console, false)
}

fn build_session<W>(log_dir: &Path, verbose: bool, console: W, ansi: bool) -> Result<LogSession>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fs::create_dir_all(log_dir).map_err(|source| QrError::Setup {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let log_file = log_dir.join(log_filename(Local::now()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|source| QrError::Setup {
            path: log_file.clone(),
            source,
        })?;

    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(ansi)
                .with_writer(console),
        )
        .with(
            fmt::layer()
                .with_timer(timer)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        );

    Ok(LogSession {
        dispatch: Dispatch::new(subscriber),
        log_file,
    })
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("urlqr=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("urlqr=info"))
    }
}
