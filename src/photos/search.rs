//! Photo search - validation, bounded lookup and result capping

use std::sync::Arc;
use std::time::Duration;

use super::{PhotoSource, SearchQuery, SearchResult};
use crate::config::PhotosConfig;
use crate::error::Error;
use crate::Result;

/// Stateless search front-end over a [`PhotoSource`].
#[derive(Clone)]
pub struct PhotoSearch {
    source: Arc<dyn PhotoSource>,
    max_term_chars: usize,
    max_results: usize,
    timeout: Duration,
}

impl PhotoSearch {
    pub fn new(source: Arc<dyn PhotoSource>, config: &PhotosConfig) -> Self {
        Self {
            source,
            max_term_chars: config.max_term_chars,
            max_results: config.max_results,
            timeout: config.timeout(),
        }
    }

    /// Search the source for `term`.
    ///
    /// Zero matches yields an empty result, not an error.
    pub async fn search(&self, term: &str) -> Result<SearchResult> {
        let query = SearchQuery::parse(term, self.max_term_chars)?;

        tracing::debug!(
            source = self.source.name(),
            term = query.term(),
            "Looking up photos"
        );

        let mut records = tokio::time::timeout(self.timeout, self.source.lookup(query.term()))
            .await
            .map_err(|_| {
                Error::UpstreamUnavailable(format!(
                    "{} did not answer within {}s",
                    self.source.name(),
                    self.timeout.as_secs_f32()
                ))
            })??;

        records.truncate(self.max_results);

        tracing::debug!(count = records.len(), "Photo lookup finished");
        Ok(SearchResult::new(query.term(), records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::photos::{CatalogEntry, LocalCatalog, PhotoRecord};
    use async_trait::async_trait;

    struct DownSource;

    #[async_trait]
    impl PhotoSource for DownSource {
        fn name(&self) -> &str { "down" }

        async fn lookup(&self, _term: &str) -> Result<Vec<PhotoRecord>> {
            Err(Error::UpstreamUnavailable("connection refused".to_string()))
        }
    }

    struct SlowSource;

    #[async_trait]
    impl PhotoSource for SlowSource {
        fn name(&self) -> &str { "slow" }

        async fn lookup(&self, _term: &str) -> Result<Vec<PhotoRecord>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
    }

    fn perseids_catalog() -> Arc<dyn PhotoSource> {
        Arc::new(LocalCatalog::new(vec![CatalogEntry {
            id: "p1".to_string(),
            url: "https://x/p1.jpg".to_string(),
            caption: Some("Perseids shower".to_string()),
            keywords: vec![],
        }]))
    }

    fn many_catalog(n: usize) -> Arc<dyn PhotoSource> {
        let entries = (0..n)
            .map(|i| CatalogEntry {
                id: format!("m{}", i),
                url: format!("https://x/m{}.jpg", i),
                caption: Some(format!("Meteor number {}", i)),
                keywords: vec![],
            })
            .collect();
        Arc::new(LocalCatalog::new(entries))
    }

    #[tokio::test]
    async fn test_search_finds_match() {
        let search = PhotoSearch::new(perseids_catalog(), &PhotosConfig::default());
        let result = search.search("Perseids").await.unwrap();

        assert_eq!(result.query, "Perseids");
        assert_eq!(result.count, 1);
        assert_eq!(result.results[0].id, "p1");
        assert_eq!(result.results[0].url, "https://x/p1.jpg");
        assert_eq!(result.results[0].caption.as_deref(), Some("Perseids shower"));
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty_result() {
        let search = PhotoSearch::new(perseids_catalog(), &PhotosConfig::default());
        let result = search.search("zzznomatch").await.unwrap();

        assert_eq!(result.query, "zzznomatch");
        assert_eq!(result.count, 0);
        assert!(result.results.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_empty_term() {
        let search = PhotoSearch::new(perseids_catalog(), &PhotosConfig::default());
        let err = search.search("").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = search.search(&"x".repeat(257)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_search_caps_results() {
        let search = PhotoSearch::new(many_catalog(50), &PhotosConfig::default());
        let result = search.search("meteor").await.unwrap();

        assert_eq!(result.count, 20);
        assert_eq!(result.count, result.results.len());
        assert_eq!(result.results[0].id, "m0");
    }

    #[tokio::test]
    async fn test_search_is_stable() {
        let search = PhotoSearch::new(many_catalog(10), &PhotosConfig::default());
        let first = search.search("meteor").await.unwrap();
        let second = search.search("meteor").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_search_upstream_down() {
        let search = PhotoSearch::new(Arc::new(DownSource), &PhotosConfig::default());
        let err = search.search("Perseids").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_times_out() {
        let search = PhotoSearch::new(Arc::new(SlowSource), &PhotosConfig::default());
        let err = search.search("Perseids").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[tokio::test]
    async fn test_invalid_term_skips_lookup() {
        // DownSource would fail with UpstreamUnavailable if it were reached
        let search = PhotoSearch::new(Arc::new(DownSource), &PhotosConfig::default());
        let err = search.search("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
