//! Tool runner - manages and executes tools

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::Result;
use crate::config::Config;
use crate::error::Error;
use crate::photos::{self, PhotoSearch};
use super::Tool;
use super::photos::PhotosTool;
use super::sample::SampleTool;

/// Tool definition for the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Tool runner manages registered tools and executes them
pub struct ToolRunner {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRunner {
    /// Create an empty tool runner
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a tool runner with `sample` and `getPhotos` wired to the configured source
    pub fn with_defaults(config: &Config) -> Result<Self> {
        let mut runner = Self::new();

        runner.register(SampleTool);

        let source = photos::source_from_config(&config.photos)?;
        runner.register(PhotosTool::new(PhotoSearch::new(source, &config.photos)));

        Ok(runner)
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get tool definitions, ordered by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values()
            .map(|t| t.to_definition())
            .collect()
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self.tools.get(name)
            .ok_or_else(|| Error::InvalidArgument(format!("Unknown tool: {}", name)))?;

        tool.execute(params).await
    }

    /// Execute a tool and fold any failure into a `{kind, message}` payload
    pub async fn invoke(&self, name: &str, params: Value) -> Value {
        match self.execute(name, params).await {
            Ok(value) => value,
            Err(e) => {
                let payload = e.payload();
                tracing::warn!(tool = name, kind = ?payload.kind, "Tool call failed: {}", payload.message);
                serde_json::to_value(&payload)
                    .unwrap_or_else(|_| serde_json::json!({"kind": "InternalError", "message": payload.message}))
            }
        }
    }

    /// Check if a tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}
