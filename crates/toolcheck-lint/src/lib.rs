//! toolcheck-lint: rule-based validation for MCP tool definitions.
//!
//! A tool definition is the JSON document an MCP server advertises for each
//! callable tool: `name`, `title`, `description`, `inputSchema`, plus the
//! optional `_meta` block and `securitySchemes` list used by ChatGPT apps.
//!
//! The [`Validator`] runs a fixed battery of per-field checks and sorts what
//! it finds into two channels:
//!
//! - **errors**: the definition is non-conformant and should not ship
//! - **warnings**: the definition works but could be better
//!
//! Validation never fails. A malformed document is reported through
//! findings, not through `Err`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use toolcheck_lint::Validator;
//!
//! let doc = json!({ "name": "Get_Data" });
//! let tool = doc.as_object().cloned().unwrap_or_default();
//!
//! let mut validator = Validator::new();
//! assert!(!validator.validate(&tool));
//! assert!(validator.errors().iter().any(|e| e.contains("snake_case")));
//! ```

pub mod config;
pub mod result;
pub mod validator;

pub use config::{ConfigError, DescriptionConfig, LintConfig};
pub use result::{Status, ValidationResult};
pub use validator::{
    json_type_name, validate_tool, Finding, FindingCode, Findings, Severity, Validator,
};
