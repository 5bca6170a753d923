//! `securitySchemes` check.

use serde_json::{Map, Value};

use super::{is_blank, json_type_name, FindingCode, Findings};
use crate::config::LintConfig;

/// Scheme types a tool may declare.
pub const SCHEME_TYPES: [&str; 2] = ["no-auth", "oauth2"];

pub(super) fn check(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    let schemes = match tool.get("securitySchemes") {
        None => {
            missing(out);
            return;
        }
        Some(value) if is_blank(value) => {
            missing(out);
            return;
        }
        Some(Value::Array(schemes)) => schemes,
        Some(other) => {
            out.error(
                FindingCode::SecuritySchemesNotArray,
                format!("securitySchemes must be an array, got {}", json_type_name(other)),
            );
            return;
        }
    };

    for (index, scheme) in schemes.iter().enumerate() {
        let Some(scheme) = scheme.as_object() else {
            out.error(
                FindingCode::SchemeNotObject,
                format!("Security scheme at index {index} must be an object"),
            );
            continue;
        };

        let Some(raw_kind) = scheme.get("type") else {
            out.error(FindingCode::SchemeMissingType, "Security scheme missing 'type' field");
            continue;
        };

        let kind = raw_kind.as_str();
        if !kind.is_some_and(|k| SCHEME_TYPES.contains(&k)) {
            let shown = kind.map_or_else(|| raw_kind.to_string(), str::to_owned);
            out.error(
                FindingCode::SchemeInvalidType,
                format!("Invalid security scheme type: {shown} (must be 'no-auth' or 'oauth2')"),
            );
        }

        if kind == Some("oauth2") {
            if let Some(scopes) = scheme.get("scopes") {
                if !scopes.is_array() {
                    out.error(FindingCode::ScopesNotArray, "OAuth2 scopes must be an array");
                }
            }
        }
    }
}

fn missing(out: &mut Findings) {
    out.warning(
        FindingCode::SecuritySchemesMissing,
        "No securitySchemes defined. Consider specifying auth requirements",
    );
}
