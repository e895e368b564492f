//! Photos tool - exposes photo search to the host

use async_trait::async_trait;
use serde_json::{json, Value};
use crate::Result;
use crate::error::Error;
use crate::photos::PhotoSearch;
use super::Tool;

/// Search for photos matching a term
pub struct PhotosTool {
    search: PhotoSearch,
}

impl PhotosTool {
    pub fn new(search: PhotoSearch) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Tool for PhotosTool {
    fn name(&self) -> &str { "getPhotos" }
    fn description(&self) -> &str { "Search for space and meteor photos matching a term" }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "search": {
                    "type": "string",
                    "description": "The search term for photos"
                }
            },
            "required": ["search"]
        })
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let term = params.get("search")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidArgument("Missing 'search' parameter".to_string()))?;

        let result = self.search.search(term).await?;
        Ok(serde_json::to_value(result)?)
    }
}
