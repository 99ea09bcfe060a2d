//! `translated` binary entrypoint: resolve a translation table for one language.

mod args;

use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use crate::args::Args;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing subscriber.
///
/// Details:
/// - `RUST_LOG` wins when set, otherwise `level` applies.
/// - With `--log-file` the subscriber writes through a non-blocking appender
///   whose guard lives for the rest of the process; if the file cannot be
///   opened it falls back to stderr.
fn init_logging(args: &Args) {
    let level = args::determine_log_level(args);
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level))
    };

    if let Some(log_path) = &args.log_file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::debug!(path = %log_path.display(), "logging initialized");
                return;
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
                tracing::warn!(error = %e, path = %log_path.display(), "failed to open log file; using stderr");
                return;
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match args::resolve(&args).and_then(|translations| args::render_output(&translations, args.json)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to resolve translations");
            eprintln!("translated: {err}");
            ExitCode::FAILURE
        }
    }
}
