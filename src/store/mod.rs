pub mod favorites;
pub mod query;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Listing;

pub use favorites::Favorites;
pub use query::{filter_listings, FilterCriteria};

/// Why loading the bundled listings dataset failed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("listings file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read listings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("listings file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory store of the full listing collection plus the current
/// browse state.
///
/// The collection is loaded once at startup and read-only afterwards;
/// `criteria` is mutated freely by the caller and every read of
/// `filtered()` reflects it.
pub struct ListingStore {
    listings: Vec<Listing>,
    pub criteria: FilterCriteria,
}

impl ListingStore {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Load the bundled dataset, replacing the current collection.
    ///
    /// One bad record fails the whole load; after a failure the
    /// collection is empty. Safe to retry. Returns the number of
    /// listings loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        self.listings.clear();
        self.listings = load_listings(path)?;
        info!("Loaded {} listings from {}", self.listings.len(), path.display());
        Ok(self.listings.len())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Distinct countries across the collection, sorted ascending.
    pub fn regions(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.listings.iter().map(|l| l.country.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Distinct amenity strings across the collection, sorted ascending.
    pub fn all_amenities(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .listings
            .iter()
            .flat_map(|l| l.amenities.iter().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Listings matching the current criteria, rating-sorted.
    pub fn filtered(&self) -> Vec<&Listing> {
        query::filter_listings(&self.listings, &self.criteria)
    }

    /// Saved listings, in collection order.
    pub fn saved_listings(&self, ids: &BTreeSet<String>) -> Vec<&Listing> {
        self.listings.iter().filter(|l| ids.contains(&l.id)).collect()
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and decode a listings JSON array from `path`.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|err| LoadError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })
}
