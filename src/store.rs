//! Named profile snapshots persisted as one JSON array on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SignatureError, SignatureResult};
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProfile {
    /// Millisecond timestamp of creation, as a string.
    pub id: String,
    pub name: String,
    pub data: Profile,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    entries: Vec<SavedProfile>,
}

impl ProfileStore {
    /// Load the store at `path`. A missing file is an empty store; a file that
    /// fails to parse is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> SignatureResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(source) => match serde_json::from_str::<Vec<SavedProfile>>(&source) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "profile store unreadable, starting empty");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(SignatureError::io(&path, err)),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[SavedProfile] {
        &self.entries
    }

    /// Append a snapshot of `profile` under `name` and persist the store.
    pub fn save(&mut self, name: &str, profile: &Profile) -> SignatureResult<&SavedProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SignatureError::EmptyProfileName);
        }

        let now = chrono::Utc::now().timestamp_millis();
        let mut id = now;
        while self.entries.iter().any(|e| e.id == id.to_string()) {
            id += 1;
        }

        let mut entries = self.entries.clone();
        entries.push(SavedProfile {
            id: id.to_string(),
            name: name.to_string(),
            data: profile.clone(),
            updated_at: now,
        });
        self.persist(&entries)?;
        self.entries = entries;
        tracing::info!(id, name, "saved profile snapshot");

        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Look up by id first, then by name (most recent snapshot wins).
    pub fn get(&self, id_or_name: &str) -> SignatureResult<&SavedProfile> {
        self.entries
            .iter()
            .find(|e| e.id == id_or_name)
            .or_else(|| {
                self.entries
                    .iter()
                    .filter(|e| e.name == id_or_name)
                    .max_by_key(|e| e.updated_at)
            })
            .ok_or_else(|| SignatureError::ProfileNotFound {
                key: id_or_name.to_string(),
            })
    }

    /// Remove the snapshot with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> SignatureResult<bool> {
        let entries: Vec<SavedProfile> =
            self.entries.iter().filter(|e| e.id != id).cloned().collect();
        if entries.len() == self.entries.len() {
            return Ok(false);
        }
        self.persist(&entries)?;
        self.entries = entries;
        tracing::info!(id, "deleted profile snapshot");
        Ok(true)
    }

    /// Write `entries` to disk. Callers swap them in only once this succeeds.
    fn persist(&self, entries: &[SavedProfile]) -> SignatureResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SignatureError::io(parent, e))?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(|e| SignatureError::io(&self.path, e))
    }
}
