//! `_meta` check: ChatGPT app metadata.

use serde_json::{Map, Value};

use super::{char_len, is_blank, json_type_name, present, FindingCode, Findings};
use crate::config::LintConfig;

pub const OUTPUT_TEMPLATE: &str = "openai/outputTemplate";
pub const INVOKING: &str = "openai/toolInvocation/invoking";
pub const INVOKED: &str = "openai/toolInvocation/invoked";
pub const WIDGET_ACCESSIBLE: &str = "openai/widgetAccessible";

/// Keys every `_meta` block should carry.
pub const RECOMMENDED_FIELDS: [&str; 3] = [OUTPUT_TEMPLATE, INVOKING, INVOKED];

/// Scheme output templates must be served from.
pub const TEMPLATE_SCHEME: &str = "ui://";

pub const STATUS_MAX_LEN: usize = 64;

pub(super) fn check(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    let meta = match tool.get("_meta") {
        None => {
            missing(out);
            return;
        }
        Some(value) if is_blank(value) => {
            missing(out);
            return;
        }
        Some(Value::Object(meta)) => meta,
        Some(other) => {
            out.error(
                FindingCode::MetaNotObject,
                format!("_meta must be an object, got {}", json_type_name(other)),
            );
            return;
        }
    };

    for field in RECOMMENDED_FIELDS {
        if !meta.contains_key(field) {
            out.warning(
                FindingCode::MetaFieldMissing,
                format!("Recommended _meta field missing: {field}"),
            );
        }
    }

    match present(meta, OUTPUT_TEMPLATE) {
        None => {}
        Some(Value::String(template)) => {
            if !template.starts_with(TEMPLATE_SCHEME) {
                out.error(
                    FindingCode::OutputTemplateScheme,
                    format!("outputTemplate '{template}' must start with '{TEMPLATE_SCHEME}'"),
                );
            }
        }
        Some(other) => {
            out.error(
                FindingCode::OutputTemplateScheme,
                format!(
                    "outputTemplate must be a string starting with '{TEMPLATE_SCHEME}', got {}",
                    json_type_name(other)
                ),
            );
        }
    }

    check_status(meta, INVOKING, "invoking", out);
    check_status(meta, INVOKED, "invoked", out);

    if let Some(flag) = meta.get(WIDGET_ACCESSIBLE) {
        if !flag.is_boolean() {
            out.error(
                FindingCode::WidgetAccessibleNotBool,
                format!("{WIDGET_ACCESSIBLE} must be boolean"),
            );
        }
    }
}

fn missing(out: &mut Findings) {
    out.warning(
        FindingCode::MetaMissing,
        "No _meta field found. Consider adding metadata for better UX",
    );
}

fn check_status(meta: &Map<String, Value>, key: &str, label: &str, out: &mut Findings) {
    match present(meta, key) {
        None => {}
        Some(Value::String(status)) => {
            let len = char_len(status);
            if len > STATUS_MAX_LEN {
                out.warning(
                    FindingCode::StatusTooLong,
                    format!("{label} status is long ({len} chars), keep under {STATUS_MAX_LEN}"),
                );
            }
        }
        Some(other) => {
            out.warning(
                FindingCode::StatusNotString,
                format!("{label} status should be a string, got {}", json_type_name(other)),
            );
        }
    }
}
