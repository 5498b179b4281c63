//! Host capabilities the console may or may not have: a voice recognizer and
//! a known terminal width. Both have a degraded form so the text path never
//! depends on them.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::VoiceError;

// ── Viewport ─────────────────────────────────────────────────────

/// Terminal widths below this render in the compact layout.
pub const COMPACT_BELOW_COLUMNS: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Stacked cards, one field per line.
    Compact,
    /// One row per record.
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub columns: Option<u16>,
}

impl Viewport {
    /// Reads `COLUMNS`. Missing or unparsable values leave the width unknown.
    pub fn from_env() -> Self {
        Self::from_columns(std::env::var("COLUMNS").ok().as_deref())
    }

    pub fn from_columns(raw: Option<&str>) -> Self {
        Self {
            columns: raw.and_then(|v| v.trim().parse().ok()),
        }
    }

    pub fn layout(self) -> Layout {
        match self.columns {
            Some(cols) if cols < COMPACT_BELOW_COLUMNS => Layout::Compact,
            _ => Layout::Wide,
        }
    }
}

// ── Voice ────────────────────────────────────────────────────────

/// Transcriptions produced by a recognizer task.
#[derive(Debug)]
pub struct VoiceStream {
    rx: mpsc::Receiver<Result<String, VoiceError>>,
}

impl VoiceStream {
    /// A stream plus the sender a recognizer pushes results into.
    pub fn channel(buffer: usize) -> (mpsc::Sender<Result<String, VoiceError>>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self { rx })
    }
}

#[derive(Debug)]
pub enum VoiceInput {
    Available(VoiceStream),
    Unavailable { reason: String },
}

impl VoiceInput {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Wait for the next completed transcription.
    ///
    /// Returns `None` once voice is unavailable. A recognizer error, or the
    /// recognizer going away, switches `self` to `Unavailable`.
    pub async fn next(&mut self) -> Option<String> {
        let Self::Available(stream) = self else {
            return None;
        };
        loop {
            match stream.rx.recv().await {
                Some(Ok(text)) => {
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    debug!(text, "voice transcription");
                    return Some(text.to_string());
                }
                Some(Err(err)) => {
                    warn!(error = %err, "voice input disabled");
                    *self = Self::unavailable(err.to_string());
                    return None;
                }
                None => {
                    debug!("voice recognizer finished");
                    *self = Self::unavailable("recognizer stopped");
                    return None;
                }
            }
        }
    }
}

/// Start a recognizer that replays a transcript file, one utterance per
/// non-blank line. Must be called inside a tokio runtime.
pub fn spawn_file_recognizer(path: PathBuf) -> VoiceInput {
    let (tx, stream) = VoiceStream::channel(16);
    tokio::spawn(async move {
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) => {
                let _ = tx.send(Err(VoiceError::Io(err))).await;
                return;
            }
        };
        for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if tx.send(Ok(line.to_string())).await.is_err() {
                // Receiver dropped.
                return;
            }
        }
    });
    VoiceInput::Available(stream)
}
