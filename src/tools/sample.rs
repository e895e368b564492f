//! Sample tool - fixed greeting payload

use async_trait::async_trait;
use serde_json::{json, Value};
use crate::Result;
use super::Tool;

/// Returns a static payload; useful for checking the host wiring
pub struct SampleTool;

#[async_trait]
impl Tool for SampleTool {
    fn name(&self) -> &str { "sample" }
    fn description(&self) -> &str { "Sample function. Call it whenever a quick check of the tool wiring is needed" }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: Value) -> Result<Value> {
        Ok(json!({ "Response": "Hello World" }))
    }
}
