// SPDX-License-Identifier: GPL-3.0-only

//! Logging to stdout and a daily rolling file
//!
//! The level and the file toggle are read on every event, so settings
//! changes apply without rebuilding the subscriber.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use anyhow::Context;
use tracing::Metadata;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{Config, LoggingLevel};

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LEVEL_INDEX: AtomicUsize = AtomicUsize::new(2);
static TO_DISK: AtomicBool = AtomicBool::new(true);

const LOG_PREFIX: &str = "ocfs2-console.log";
const KEEP_FOR: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub(crate) fn init(config: &Config) {
    set_log_level(config.log_level);
    set_log_to_disk(config.log_to_disk);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config.log_level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(level_allows));

    let file_layer = match file_writer(&log_dir()) {
        Ok((writer, guard)) => {
            let _ = FILE_GUARD.set(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter_fn(|metadata| {
                        TO_DISK.load(Ordering::Relaxed) && level_allows(metadata)
                    })),
            )
        }
        Err(err) => {
            eprintln!("ocfs2-console: file logging disabled: {err:#}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

/// Our crates pass at `trace` and are gated by the settings level; the
/// renderer stack stays at `warn`.
fn default_filter(level: LoggingLevel) -> EnvFilter {
    let directives = [
        "ocfs2_console=trace",
        "ocfs2_ops=trace",
        "ocfs2_sys=trace",
        "wgpu=warn",
        "naga=warn",
        "iced_winit=warn",
    ];

    directives
        .iter()
        .filter_map(|directive| directive.parse().ok())
        .fold(EnvFilter::new(level.as_directive()), EnvFilter::add_directive)
}

pub(crate) fn set_log_level(level: LoggingLevel) {
    LEVEL_INDEX.store(level.to_index(), Ordering::Relaxed);
}

pub(crate) fn set_log_to_disk(enabled: bool) {
    TO_DISK.store(enabled, Ordering::Relaxed);
}

fn current_filter() -> LevelFilter {
    match LoggingLevel::from_index(LEVEL_INDEX.load(Ordering::Relaxed)) {
        LoggingLevel::Error => LevelFilter::ERROR,
        LoggingLevel::Warn => LevelFilter::WARN,
        LoggingLevel::Info => LevelFilter::INFO,
        LoggingLevel::Debug => LevelFilter::DEBUG,
        LoggingLevel::Trace => LevelFilter::TRACE,
    }
}

fn level_allows(metadata: &Metadata<'_>) -> bool {
    *metadata.level() <= current_filter()
}

/// `$OCFS2_CONSOLE_LOG_DIR`, else `$XDG_STATE_HOME/ocfs2-console/logs`.
fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("OCFS2_CONSOLE_LOG_DIR") {
        return PathBuf::from(dir);
    }

    let state_home = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".local/state")))
        .unwrap_or_else(std::env::temp_dir);

    state_home.join("ocfs2-console").join("logs")
}

fn file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    remove_stale_logs(dir, KEEP_FOR);

    Ok(tracing_appender::non_blocking(
        tracing_appender::rolling::daily(dir, LOG_PREFIX),
    ))
}

/// Deletes our rolled files older than `keep_for`; other files are left alone.
fn remove_stale_logs(dir: &Path, keep_for: Duration) {
    let Some(cutoff) = SystemTime::now().checked_sub(keep_for) else {
        return;
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let ours = entry.file_name().to_string_lossy().starts_with(LOG_PREFIX);
        let stale = entry
            .metadata()
            .and_then(|metadata| metadata.modified())
            .is_ok_and(|modified| modified < cutoff);

        if ours && stale && entry.path().is_file() {
            if let Err(err) = fs::remove_file(entry.path()) {
                tracing::debug!(path = %entry.path().display(), %err, "could not remove old log");
            }
        }
    }
}
