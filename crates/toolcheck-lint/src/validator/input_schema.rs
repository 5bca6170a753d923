//! `inputSchema` structure check.

use serde_json::{Map, Value};

use super::{json_type_name, present, FindingCode, Findings};
use crate::config::LintConfig;

pub(super) fn check(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    let Some(schema) = present(tool, "inputSchema") else {
        return;
    };
    let Some(schema) = schema.as_object() else {
        out.error(FindingCode::SchemaNotObject, "inputSchema must be an object");
        return;
    };

    if schema.get("type").and_then(Value::as_str) != Some("object") {
        out.warning(
            FindingCode::SchemaTypeNotObject,
            "inputSchema should have type: 'object'",
        );
    }

    let properties = properties(schema, out);
    if let Some(properties) = properties {
        for (param, param_schema) in properties {
            let described = param_schema
                .as_object()
                .is_some_and(|s| s.contains_key("description"));
            if !described {
                out.warning(
                    FindingCode::ParameterMissingDescription,
                    format!("Parameter '{param}' is missing a description"),
                );
            }
        }
    }

    for name in required(schema, out) {
        let defined = match (name, properties) {
            (Value::String(name), Some(properties)) => properties.contains_key(name),
            _ => false,
        };
        if !defined {
            let shown = match name {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.error(
                FindingCode::RequiredNotDefined,
                format!("Required field '{shown}' not defined in properties"),
            );
        }
    }
}

/// `properties`, if it is a mapping. Absent means no parameters.
fn properties<'a>(
    schema: &'a Map<String, Value>,
    out: &mut Findings,
) -> Option<&'a Map<String, Value>> {
    match present(schema, "properties")? {
        Value::Object(map) => Some(map),
        other => {
            out.error(
                FindingCode::PropertiesNotObject,
                format!("inputSchema.properties must be an object, got {}", json_type_name(other)),
            );
            None
        }
    }
}

/// `required`, if it is a sequence. Absent means nothing is required.
fn required<'a>(schema: &'a Map<String, Value>, out: &mut Findings) -> &'a [Value] {
    match present(schema, "required") {
        None => &[],
        Some(Value::Array(items)) => items,
        Some(other) => {
            out.error(
                FindingCode::RequiredNotArray,
                format!("inputSchema.required must be an array, got {}", json_type_name(other)),
            );
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(doc: Value) -> Findings {
        let tool = doc.as_object().cloned().unwrap_or_default();
        let mut out = Findings::new();
        check(&tool, &LintConfig::default(), &mut out);
        out
    }

    #[test]
    fn absent_schema_is_left_to_required_check() {
        assert!(run(json!({})).is_empty());
    }

    #[test]
    fn non_object_schema_stops_early() {
        let out = run(json!({ "inputSchema": "string" }));
        assert_eq!(out.errors().collect::<Vec<_>>(), vec!["inputSchema must be an object"]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn wrong_type_is_only_a_warning() {
        let out = run(json!({ "inputSchema": { "type": "array", "properties": {} } }));
        assert!(!out.has_errors());
        assert_eq!(
            out.warnings().collect::<Vec<_>>(),
            vec!["inputSchema should have type: 'object'"]
        );
    }

    #[test]
    fn empty_schema_warns_about_type() {
        let out = run(json!({ "inputSchema": {} }));
        assert_eq!(
            out.iter().map(|f| f.code).collect::<Vec<_>>(),
            vec![FindingCode::SchemaTypeNotObject]
        );
    }

    #[test]
    fn dangling_required_and_undocumented_param() {
        let out = run(json!({
            "inputSchema": {
                "type": "object",
                "properties": { "q": {} },
                "required": ["missing"]
            }
        }));
        assert_eq!(
            out.errors().collect::<Vec<_>>(),
            vec!["Required field 'missing' not defined in properties"]
        );
        assert_eq!(
            out.warnings().collect::<Vec<_>>(),
            vec!["Parameter 'q' is missing a description"]
        );
    }

    #[test]
    fn one_error_per_dangling_name() {
        let out = run(json!({
            "inputSchema": {
                "type": "object",
                "properties": { "a": { "description": "A" } },
                "required": ["a", "b", "c"]
            }
        }));
        assert_eq!(
            out.errors().collect::<Vec<_>>(),
            vec![
                "Required field 'b' not defined in properties",
                "Required field 'c' not defined in properties",
            ]
        );
    }

    #[test]
    fn parameters_reported_in_document_order() {
        let out = run(json!({
            "inputSchema": {
                "type": "object",
                "properties": {
                    "zeta": { "type": "string" },
                    "alpha": { "type": "string", "description": "ok" },
                    "mid": "string"
                }
            }
        }));
        assert_eq!(
            out.warnings().collect::<Vec<_>>(),
            vec![
                "Parameter 'zeta' is missing a description",
                "Parameter 'mid' is missing a description",
            ]
        );
    }

    #[test]
    fn required_without_properties_is_dangling() {
        let out = run(json!({ "inputSchema": { "type": "object", "required": ["q"] } }));
        assert_eq!(
            out.errors().collect::<Vec<_>>(),
            vec!["Required field 'q' not defined in properties"]
        );
    }

    #[test]
    fn non_string_required_entry_is_dangling() {
        let out = run(json!({
            "inputSchema": {
                "type": "object",
                "properties": { "1": { "description": "one" } },
                "required": [1]
            }
        }));
        assert_eq!(
            out.errors().collect::<Vec<_>>(),
            vec!["Required field '1' not defined in properties"]
        );
    }

    #[test]
    fn malformed_properties_and_required_are_errors() {
        let out = run(json!({
            "inputSchema": { "type": "object", "properties": ["q"], "required": "q" }
        }));
        assert_eq!(
            out.iter().map(|f| f.code).collect::<Vec<_>>(),
            vec![FindingCode::PropertiesNotObject, FindingCode::RequiredNotArray]
        );
    }
}
