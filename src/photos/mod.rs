//! Photos module — search-backed photo retrieval.
//!
//! This module contains:
//! - Record types ([`PhotoRecord`], [`SearchResult`])
//! - Query validation ([`SearchQuery`])
//! - The [`PhotoSource`] capability and its backends
//! - [`PhotoSearch`], which ties validation, lookup and limits together
//!
//! # Adding a New Source
//!
//! 1. Create a new file (e.g., `flickr.rs`)
//! 2. Implement `PhotoSource`
//! 3. Add a variant to `SourceConfig` and a branch in [`source_from_config`]

mod local;
mod nasa;
mod query;
mod search;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{PhotosConfig, SourceConfig};
use crate::Result;

pub use local::{CatalogEntry, LocalCatalog};
pub use nasa::{nasa_base_url, NasaImages, NASA_IMAGES_URL};
pub use query::SearchQuery;
pub use search::PhotoSearch;

/// A single photo returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub url: String,
    pub caption: Option<String>,
}

impl PhotoRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            caption,
        }
    }
}

/// Outcome of one search, in relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The (trimmed) term that was searched for.
    pub query: String,

    /// Always equal to `results.len()`.
    pub count: usize,

    pub results: Vec<PhotoRecord>,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, results: Vec<PhotoRecord>) -> Self {
        Self {
            query: query.into(),
            count: results.len(),
            results,
        }
    }

    /// Check if nothing matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Photo data source — swappable backend abstraction.
///
/// Implementations return matches in their own relevance order and must
/// return the same order for the same term while their data is unchanged.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Backend name, for logs.
    fn name(&self) -> &str;

    /// Find records whose metadata matches `term`.
    async fn lookup(&self, term: &str) -> Result<Vec<PhotoRecord>>;
}

/// Build the data source selected in configuration.
pub fn source_from_config(config: &PhotosConfig) -> Result<Arc<dyn PhotoSource>> {
    let source: Arc<dyn PhotoSource> = match &config.source {
        SourceConfig::Local { catalog } => Arc::new(LocalCatalog::load(catalog)?),
        SourceConfig::Nasa { base_url } => Arc::new(NasaImages::new(base_url, config.timeout())?),
    };
    tracing::info!("Using photo source: {}", source.name());
    Ok(source)
}
