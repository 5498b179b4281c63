use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::chat::Transcript;
use crate::error::ConsoleError;
use crate::model::ExternalContext;

// ── Atomic file I/O ──────────────────────────────────────────────

/// Threads writing the same path take its lock first. Process-local only.
static FILE_LOCKS: LazyLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    Arc::clone(
        FILE_LOCKS
            .lock()
            .entry(path.to_path_buf())
            .or_default(),
    )
}

/// `settings.json` -> `settings.json.tmp`, `settings.json.bak`, ...
fn sibling(path: &Path, suffix: &str) -> Result<PathBuf, ConsoleError> {
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
        .into());
    };
    let mut name = OsString::from(file_name);
    name.push(suffix);
    Ok(path.with_file_name(name))
}

/// Replace `path` with `data` without ever leaving a half-written settings
/// file or transcript behind. The bytes land in `<name>.tmp` first and are
/// renamed over the target; the file they replace moves to `<name>.bak`.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConsoleError> {
    let staged = sibling(path, ".tmp")?;
    let backup = sibling(path, ".bak")?;

    let lock = path_lock(path);
    let _guard = lock.lock();

    {
        let mut out = fs::File::create(&staged)?;
        out.write_all(data)?;
        out.sync_all()?;
    }

    if path.exists() {
        if let Err(e) = fs::rename(path, &backup) {
            debug!(path = %path.display(), error = %e, "no backup kept");
        }
    }
    fs::rename(&staged, path)?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConsoleError> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConsoleError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

// ── Snapshots ────────────────────────────────────────────────────

/// Load a dashboard snapshot. Missing collections default to empty.
pub fn load_snapshot(path: &Path) -> Result<ExternalContext, ConsoleError> {
    let data = fs::read_to_string(path).map_err(|e| ConsoleError::Snapshot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let ctx: ExternalContext = serde_json::from_str(&data).map_err(|e| ConsoleError::Snapshot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        agents = ctx.agents.len(),
        orders = ctx.orders.len(),
        "snapshot loaded"
    );
    Ok(ctx)
}

/// Write the transcript as a JSON array of messages.
pub fn export_transcript(path: &Path, transcript: &Transcript) -> Result<(), ConsoleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_json(path, &transcript.messages())
}
