//! The tool-definition validator.
//!
//! Each semantic field of a tool definition has its own check. Checks are
//! plain functions over the (immutable) document that write into a shared
//! [`Findings`] sink. The [`Validator`] runs them in a fixed order:
//!
//! 1. required fields (`name`, `title`, `description`, `inputSchema`)
//! 2. `name` shape
//! 3. `title` shape
//! 4. `description` shape
//! 5. `inputSchema` structure
//! 6. `_meta`
//! 7. `securitySchemes`
//!
//! No check short-circuits another: a document missing `name` still gets
//! its `_meta` and `securitySchemes` looked at.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use toolcheck_lint::Validator;
//!
//! let doc = json!({
//!     "name": "x",
//!     "title": "Tiny tool",
//!     "description": "Fetch nothing in particular, slowly.",
//!     "inputSchema": { "type": "object", "properties": {} }
//! });
//! let tool = doc.as_object().cloned().unwrap_or_default();
//!
//! let mut validator = Validator::new();
//! assert!(validator.validate(&tool));
//! assert!(!validator.warnings().is_empty());
//! ```

mod fields;
mod finding;
mod input_schema;
mod meta;
mod security;

use serde_json::{Map, Value};

use crate::config::LintConfig;
use crate::result::ValidationResult;

pub use finding::{Finding, FindingCode, Findings, Severity};

/// Signature shared by every check.
type Check = fn(&Map<String, Value>, &LintConfig, &mut Findings);

/// Checks in execution order.
const CHECKS: &[(&str, Check)] = &[
    ("required_fields", fields::check_required),
    ("name", fields::check_name),
    ("title", fields::check_title),
    ("description", fields::check_description),
    ("input_schema", input_schema::check),
    ("meta", meta::check),
    ("security_schemes", security::check),
];

/// Validates tool definitions and holds the findings of the last run.
///
/// Findings are rebuilt from scratch on every [`validate`](Self::validate)
/// call. One instance serves one caller at a time; `validate` takes
/// `&mut self`, so sharing an instance across threads needs a lock or,
/// more simply, one validator per thread.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: LintConfig,
    findings: Findings,
}

impl Validator {
    /// Create a validator with the default rule configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom rule configuration.
    pub fn with_config(config: LintConfig) -> Self {
        Self {
            config,
            findings: Findings::new(),
        }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Validate a tool definition. Returns `true` if no errors were found.
    ///
    /// Findings from any previous call are discarded first.
    pub fn validate(&mut self, tool: &Map<String, Value>) -> bool {
        self.findings.clear();

        for (name, check) in CHECKS {
            let before = self.findings.len();
            check(tool, &self.config, &mut self.findings);
            tracing::trace!(check = name, findings = self.findings.len() - before, "check done");
        }

        let valid = !self.findings.has_errors();
        let tool_name = tool
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<unnamed>");
        tracing::debug!(
            tool = tool_name,
            errors = self.findings.errors().count(),
            warnings = self.findings.warnings().count(),
            valid,
            "validated tool definition"
        );
        valid
    }

    /// Error messages from the last run, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.findings.errors().collect()
    }

    /// Warning messages from the last run, in order.
    pub fn warnings(&self) -> Vec<&str> {
        self.findings.warnings().collect()
    }

    /// All findings from the last run, in emission order.
    pub fn findings(&self) -> &[Finding] {
        self.findings.as_slice()
    }

    /// True if the last run produced no errors.
    pub fn is_valid(&self) -> bool {
        !self.findings.has_errors()
    }

    /// Snapshot of the last run as an owned result.
    pub fn result(&self) -> ValidationResult {
        ValidationResult::from_findings(self.findings.as_slice().to_vec())
    }
}

/// Validate a tool definition with a throwaway validator.
pub fn validate_tool(tool: &Map<String, Value>, config: &LintConfig) -> ValidationResult {
    let mut validator = Validator::with_config(config.clone());
    validator.validate(tool);
    validator.result()
}

/// Look up a field, treating JSON `null` the same as a missing key.
pub(crate) fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// True for values that carry nothing: `null`, `false`, zero, and empty
/// strings, arrays and objects.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Short human name for a JSON value's type.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
