use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File name of the saved-listing blob inside the app's storage directory
pub const STORAGE_FILE: &str = "saved_colivings.json";

const BLOB_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SavedBlob {
    version: u32,
    ids: BTreeSet<String>,
}

/// Persisted set of saved (favorited) listing ids.
///
/// Stored as a small versioned JSON blob. Losing it is never fatal: a
/// missing or unreadable blob opens as an empty set.
pub struct Favorites {
    path: PathBuf,
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SavedBlob>(&raw) {
                Ok(blob) if blob.version == BLOB_VERSION => blob.ids,
                Ok(blob) => {
                    warn!(
                        "Unsupported saved-listings version {} in {}, starting empty",
                        blob.version,
                        path.display()
                    );
                    BTreeSet::new()
                }
                Err(err) => {
                    warn!(
                        "Failed to decode saved listings from {}: {}",
                        path.display(),
                        err
                    );
                    BTreeSet::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No saved listings at {}", path.display());
                BTreeSet::new()
            }
            Err(err) => {
                warn!("Failed to read saved listings from {}: {}", path.display(), err);
                BTreeSet::new()
            }
        };
        Self { path, ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Save or unsave a listing and write the blob through to disk.
    /// Returns whether the id is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> io::Result<bool> {
        let saved = if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
            true
        } else {
            false
        };
        self.write()?;
        Ok(saved)
    }

    fn write(&self) -> io::Result<()> {
        let blob = SavedBlob {
            version: BLOB_VERSION,
            ids: self.ids.clone(),
        };
        let json = serde_json::to_string_pretty(&blob).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blob_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let favorites = Favorites::open(dir.path().join(STORAGE_FILE));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);

        let mut favorites = Favorites::open(&path);
        assert!(favorites.toggle("lisbon-1").unwrap());
        assert!(favorites.toggle("madeira-2").unwrap());
        assert!(!favorites.toggle("lisbon-1").unwrap());

        let reopened = Favorites::open(&path);
        assert!(reopened.contains("madeira-2"));
        assert!(!reopened.contains("lisbon-1"));
        assert_eq!(reopened.ids().len(), 1);
    }

    #[test]
    fn malformed_blob_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "not json").unwrap();

        let favorites = Favorites::open(&path);
        assert!(favorites.is_empty());
    }

    #[test]
    fn future_version_is_not_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, r#"{"version": 99, "ids": ["a"]}"#).unwrap();

        let favorites = Favorites::open(&path);
        assert!(favorites.is_empty());
    }
}
