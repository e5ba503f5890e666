//! Error types.

use std::io;

use thiserror::Error;

/// Fatal errors surfaced by the runtime.
#[derive(Debug, Error)]
pub enum GreetingsError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("state snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Failures while saving or restoring UI state across re-creation.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode '{key}': {source}")]
    Encode { key: String, source: bincode::Error },
    #[error("failed to decode '{key}': {source}")]
    Decode { key: String, source: bincode::Error },
    #[error("corrupt snapshot: {0}")]
    Corrupt(bincode::Error),
}

/// A string or icon the collaborator tables could not supply.
///
/// These never abort rendering; the UI draws a placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("missing string '{key}' for locale '{locale}'")]
    MissingString { key: &'static str, locale: String },
    #[error("missing icon '{0}'")]
    MissingIcon(&'static str),
}
