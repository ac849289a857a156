use anyhow::{Context, Result};
use localmate_api::Session;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

/// Snapshot of a running countdown, persisted so a restarted client can
/// resume it. Cleared on stop and on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub task_id: i64,
    pub task_title: String,
    pub duration_minutes: u32,
    /// Absolute end time as a unix timestamp (UTC seconds).
    pub end_at_unix: i64,
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("localmate-tui"))
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

pub fn session_path() -> Result<PathBuf> {
    Ok(root_path()?.join("session.toml"))
}

pub fn timer_path() -> Result<PathBuf> {
    Ok(root_path()?.join("timer.toml"))
}

pub fn load_session() -> Result<Option<Session>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).context("Failed to read session file")?;
    let session: Session = toml::from_str(&raw).context("Failed to parse session file")?;
    if session.token.is_empty() {
        return Ok(None);
    }
    Ok(Some(session))
}

pub fn save_session(session: &Session) -> Result<()> {
    let path = session_path()?;
    let raw = toml::to_string_pretty(session)?;
    secure_write(path.as_path(), &raw)
}

pub fn clear_session() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn load_timer_snapshot() -> Result<Option<TimerSnapshot>> {
    let path = timer_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).context("Failed to read timer snapshot")?;
    let snapshot = toml::from_str(&raw).context("Failed to parse timer snapshot")?;
    Ok(Some(snapshot))
}

pub fn save_timer_snapshot(snapshot: &TimerSnapshot) -> Result<()> {
    let path = timer_path()?;
    let raw = toml::to_string_pretty(snapshot)?;
    secure_write(path.as_path(), &raw)
}

pub fn clear_timer_snapshot() -> Result<()> {
    let path = timer_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
