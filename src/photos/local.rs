//! Local catalog - photo records kept in a JSON file

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{PhotoRecord, PhotoSource};
use crate::error::Error;
use crate::Result;

/// One photo in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub url: String,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogEntry {
    /// Relevance of this entry for an already lowercased term, if it matches.
    fn score(&self, needle: &str) -> Option<u8> {
        if self.keywords.iter().any(|k| k.to_lowercase() == needle) {
            return Some(3);
        }
        if let Some(caption) = &self.caption {
            if caption.to_lowercase().contains(needle) {
                return Some(2);
            }
        }
        if self.id.to_lowercase().contains(needle) {
            return Some(1);
        }
        None
    }

    fn to_record(&self) -> PhotoRecord {
        PhotoRecord::new(self.id.clone(), self.url.clone(), self.caption.clone())
    }
}

/// In-memory photo catalog with case-insensitive matching
pub struct LocalCatalog {
    entries: Vec<CatalogEntry>,
}

impl LocalCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array of entries.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Internal(format!("Failed to read photo catalog {:?}: {}", path, e))
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content).map_err(|e| {
            Error::Internal(format!("Malformed photo catalog {:?}: {}", path, e))
        })?;

        tracing::debug!("Loaded {} catalog entries from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PhotoSource for LocalCatalog {
    fn name(&self) -> &str { "local" }

    async fn lookup(&self, term: &str) -> Result<Vec<PhotoRecord>> {
        let needle = term.to_lowercase();

        let mut scored: Vec<(u8, &CatalogEntry)> = self.entries.iter()
            .filter_map(|e| e.score(&needle).map(|s| (s, e)))
            .collect();

        // sort_by is stable: ties keep catalog order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored.into_iter().map(|(_, e)| e.to_record()).collect())
    }
}
