use super::{Session, SessionId, SessionStore};
use crate::error::{ListsError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

const FILE_PREFIX: &str = "session-";
const FILE_EXT: &str = ".json";

/// Sessions stored as one JSON file each under a data directory.
#[derive(Debug)]
pub struct FsSessionStore {
    root: PathBuf,
}

impl FsSessionStore {
    /// Opens (and creates, if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_path(&self, id: &SessionId) -> PathBuf {
        self.root.join(format!("{}{}{}", FILE_PREFIX, id, FILE_EXT))
    }

    /// Ids of every session file in the directory. Files that don't look like
    /// sessions are ignored.
    pub fn list_ids(&self) -> Result<Vec<SessionId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = parse_file_name(name) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn read(&self, path: &Path) -> Result<Session> {
        let content = fs::read_to_string(path)?;
        let session = serde_json::from_str(&content)?;
        Ok(session)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    if !path.is_dir() {
        return Err(ListsError::Store(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

fn parse_file_name(name: &str) -> Option<SessionId> {
    let id = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_EXT)?;
    id.parse().ok()
}

impl SessionStore for FsSessionStore {
    fn load(&self, id: &SessionId) -> Result<Session> {
        let path = self.session_path(id);
        if !path.exists() {
            return Ok(Session::new());
        }
        self.read(&path)
    }

    fn save(&mut self, id: &SessionId, session: &Session) -> Result<()> {
        ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(session)?;

        // Write to a temp file and rename so a crash never leaves half a session behind
        let tmp_file = self.root.join(format!(".{}-{}.tmp", id, Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        fs::rename(&tmp_file, self.session_path(id))?;
        Ok(())
    }

    fn remove(&mut self, id: &SessionId) -> Result<()> {
        let path = self.session_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn sweep(&mut self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut removed = 0;
        for id in self.list_ids()? {
            let path = self.session_path(&id);
            match self.read(&path) {
                Ok(session) if session.updated_at < cutoff => {
                    fs::remove_file(&path)?;
                    removed += 1;
                }
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable session"),
            }
        }
        Ok(removed)
    }
}
