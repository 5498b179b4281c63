use std::path::PathBuf;

use thiserror::Error;

/// Errors from the host layer: settings, snapshot files, terminal I/O.
///
/// Command interpretation itself never fails; unresolved input always
/// produces an explanatory response instead.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid snapshot {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },
    #[error("Settings error: {message}")]
    Settings { message: String },
    #[error("Unknown dashboard route: {0}")]
    UnknownRoute(String),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A command table that cannot be matched unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("command name is empty")]
    EmptyName,
    #[error("command name \"{name}\" must be lowercase with single spaces")]
    NotNormalized { name: String },
    #[error("duplicate command name \"{name}\"")]
    Duplicate { name: String },
    #[error("command \"{earlier}\" makes later command \"{later}\" unreachable")]
    Shadowed { earlier: String, later: String },
}

/// Voice capture failures. Any of these degrades voice input to unavailable.
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice source I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("speech recognizer failed: {0}")]
    Recognizer(String),
}
