//! Session-token persistence — the "remember me" storage seam.
//!
//! DESIGN
//! ======
//! The crate persists exactly one value: the session token, under the
//! `token` key. `TokenStore` abstracts where that key lives so the client
//! can run against a file, process memory, or a test double. The file
//! implementation keeps a one-field JSON object written with 0600
//! permissions on unix.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("token file read failed: {0}")]
    Read(String),
    #[error("token file write failed: {0}")]
    Write(String),
    #[error("token file parse failed: {0}")]
    Parse(String),
}

/// Storage seam for the persisted session token.
pub trait TokenStore: Send + Sync {
    /// Load the persisted token. `None` when nothing is stored.
    ///
    /// # Errors
    /// Returns an error when the backing storage is unreadable or corrupt.
    fn load(&self) -> Result<Option<String>, PersistError>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), PersistError>;

    /// Delete the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be written.
    fn remove(&self) -> Result<(), PersistError>;
}

/// On-disk shape: a single JSON object holding the `token` key.
#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

/// Default token file location: `$XDG_CONFIG_HOME/teller/token.json`,
/// falling back to `~/.config/teller/token.json`.
#[must_use]
pub fn default_token_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("teller").join("token.json")
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Token storage in a JSON file, for sessions that survive the process.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| PersistError::Read(format!("{}: {e}", self.path.display())))?;
        let file: TokenFile = serde_json::from_str(&contents)
            .map_err(|e| PersistError::Parse(format!("{}: {e}", self.path.display())))?;
        Ok(Some(file.token))
    }

    fn save(&self, token: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PersistError::Write(format!("{}: {e}", parent.display())))?;
        }
        let contents = serde_json::to_string_pretty(&TokenFile { token: token.to_owned() })
            .map_err(|e| PersistError::Write(e.to_string()))?;
        write_restricted(&self.path, &contents)
    }

    fn remove(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistError::Write(format!("{}: {e}", self.path.display()))),
        }
    }
}

#[cfg(unix)]
fn write_restricted(path: &Path, contents: &str) -> Result<(), PersistError> {
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .map_err(|e| PersistError::Write(format!("{}: {e}", path.display())))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| PersistError::Write(format!("{}: {e}", path.display())))
}

#[cfg(not(unix))]
fn write_restricted(path: &Path, contents: &str) -> Result<(), PersistError> {
    fs::write(path, contents).map_err(|e| PersistError::Write(format!("{}: {e}", path.display())))
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Token storage in process memory, for sessions that should not outlive it.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, PersistError> {
        let guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), PersistError> {
        let mut guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), PersistError> {
        let mut guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}
