//! NASA Image and Video Library client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use super::{PhotoRecord, PhotoSource};
use crate::error::Error;
use crate::Result;

pub const NASA_IMAGES_URL: &str = "https://images-api.nasa.gov";

/// Default base URL, for config defaults
pub fn nasa_base_url() -> String {
    NASA_IMAGES_URL.to_string()
}

/// Remote photo source backed by `images-api.nasa.gov`
#[derive(Clone)]
pub struct NasaImages {
    search_url: Url,
    client: Client,
}

impl NasaImages {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let search_url = Url::parse(&format!("{}/search", base_url.trim_end_matches('/')))
            .map_err(|e| Error::Config(format!("Invalid NASA base URL {:?}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("meteor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { search_url, client })
    }

    fn build_url(&self, term: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("media_type", "image");
        url
    }
}

#[async_trait]
impl PhotoSource for NasaImages {
    fn name(&self) -> &str { "nasa" }

    async fn lookup(&self, term: &str) -> Result<Vec<PhotoRecord>> {
        let url = self.build_url(term);

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    Error::UpstreamUnavailable(format!("NASA image library unreachable: {}", e))
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::UpstreamUnavailable(format!(
                "NASA image library returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(Error::Internal(format!(
                "NASA image library returned {}",
                status
            )));
        }

        let body: SearchResponse = response.json()
            .await
            .map_err(|e| Error::Internal(format!("Failed to decode NASA response: {}", e)))?;

        Ok(body.into_records())
    }
}

/// Top-level search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    collection: Collection,
}

#[derive(Debug, Deserialize)]
struct Collection {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    data: Vec<ItemData>,

    #[serde(default)]
    links: Vec<ItemLink>,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    nasa_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemLink {
    href: Option<String>,
    render: Option<String>,
}

impl SearchResponse {
    fn into_records(self) -> Vec<PhotoRecord> {
        self.collection.items.into_iter()
            .filter_map(Item::into_record)
            .collect()
    }
}

impl Item {
    fn into_record(self) -> Option<PhotoRecord> {
        let data = self.data.into_iter().next()?;
        let id = data.nasa_id?;

        // Prefer the rendered image; links without an href are unusable
        let url = self.links.iter()
            .find(|l| l.href.is_some() && l.render.as_deref() == Some("image"))
            .or_else(|| self.links.iter().find(|l| l.href.is_some()))
            .and_then(|l| l.href.clone())?;

        let caption = data.title.or(data.description);
        Some(PhotoRecord::new(id, url, caption))
    }
}
