// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Error types for system-level operations
#[derive(Error, Debug)]
pub enum SysError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{command} failed: {output}")]
    CommandFailed { command: String, output: String },

    #[error("{command} was killed by signal {signal}")]
    CommandKilled { command: String, signal: i32 },

    #[error("invalid {source_name} line: {line}")]
    Parse { source_name: &'static str, line: String },

    #[error("path escapes the volume root: {0}")]
    OutsideRoot(String),

    #[error("statvfs failed: {0}")]
    Statvfs(#[from] nix::Error),
}

/// Result type alias for system operations
pub type Result<T> = std::result::Result<T, SysError>;
