//! Test utilities for toolcheck.
//!
//! - [`well_formed_tool`]: a definition that passes every rule with no warnings
//! - [`ToolBuilder`]: start from the well-formed definition and break one thing

use serde_json::{json, Map, Value};

/// A tool definition with no errors and no warnings.
pub fn well_formed_tool() -> Value {
    json!({
        "name": "fetch_weather",
        "title": "Weather forecast",
        "description": "Fetch the weather forecast for a city over the next few days.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name" },
                "days": { "type": "integer", "description": "Number of days to forecast" }
            },
            "required": ["city"]
        },
        "_meta": {
            "openai/outputTemplate": "ui://widget/weather.html",
            "openai/toolInvocation/invoking": "Checking the forecast",
            "openai/toolInvocation/invoked": "Forecast ready",
            "openai/widgetAccessible": true
        },
        "securitySchemes": [
            { "type": "oauth2", "scopes": ["weather.read"] }
        ]
    })
}

/// Mutates a copy of [`well_formed_tool`].
///
/// ```
/// use serde_json::json;
/// use toolcheck_testutil::ToolBuilder;
///
/// let tool = ToolBuilder::new().set("name", json!("Bad-Name")).remove("title").build();
/// assert_eq!(tool["name"], "Bad-Name");
/// assert!(!tool.contains_key("title"));
/// ```
#[derive(Debug, Clone)]
pub struct ToolBuilder {
    doc: Map<String, Value>,
}

impl Default for ToolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolBuilder {
    /// Start from the well-formed definition.
    pub fn new() -> Self {
        let doc = match well_formed_tool() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { doc }
    }

    /// Start from an empty document.
    pub fn empty() -> Self {
        Self { doc: Map::new() }
    }

    /// Set a top-level field.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.doc.insert(key.to_string(), value);
        self
    }

    /// Remove a top-level field.
    pub fn remove(mut self, key: &str) -> Self {
        self.doc.remove(key);
        self
    }

    /// Set a key inside `_meta`, creating the block if needed.
    pub fn meta(mut self, key: &str, value: Value) -> Self {
        let meta = self
            .doc
            .entry("_meta")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(meta) = meta {
            meta.insert(key.to_string(), value);
        }
        self
    }

    /// Set a key inside `inputSchema`, creating the block if needed.
    pub fn schema(mut self, key: &str, value: Value) -> Self {
        let schema = self
            .doc
            .entry("inputSchema")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(schema) = schema {
            schema.insert(key.to_string(), value);
        }
        self
    }

    pub fn build(self) -> Map<String, Value> {
        self.doc
    }
}
