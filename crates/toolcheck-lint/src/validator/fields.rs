//! Checks for the scalar top-level fields: presence, name, title, description.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::{char_len, json_type_name, present, FindingCode, Findings, Severity};
use crate::config::LintConfig;

/// Fields every tool definition must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "title", "description", "inputSchema"];

pub const NAME_MAX_LEN: usize = 64;
pub const NAME_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;
pub const TITLE_MIN_LEN: usize = 5;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const DESCRIPTION_MIN_LEN: usize = 20;

#[allow(clippy::expect_used)]
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("snake_case pattern is valid"));

pub(super) fn check_required(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    for field in REQUIRED_FIELDS {
        if !tool.contains_key(field) {
            out.error(
                FindingCode::MissingField,
                format!("Missing required field: {field}"),
            );
        }
    }
}

pub(super) fn check_name(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    let Some(name) = string_field(tool, "name", Severity::Error, out) else {
        return;
    };

    if !SNAKE_CASE.is_match(name) {
        out.error(
            FindingCode::NameNotSnakeCase,
            format!("Tool name '{name}' must be snake_case (lowercase, alphanumeric, underscores)"),
        );
    }

    let len = char_len(name);
    if len > NAME_MAX_LEN {
        out.error(
            FindingCode::NameTooLong,
            format!("Tool name '{name}' is too long (max {NAME_MAX_LEN} characters)"),
        );
    }
    if len < NAME_MIN_LEN {
        out.warning(
            FindingCode::NameTooShort,
            format!("Tool name '{name}' is very short, consider being more descriptive"),
        );
    }
}

pub(super) fn check_title(tool: &Map<String, Value>, _config: &LintConfig, out: &mut Findings) {
    let Some(title) = string_field(tool, "title", Severity::Warning, out) else {
        return;
    };

    let len = char_len(title);
    if len > TITLE_MAX_LEN {
        out.warning(
            FindingCode::TitleTooLong,
            format!("Tool title is long ({len} chars), consider keeping under {TITLE_MAX_LEN}"),
        );
    }
    if len < TITLE_MIN_LEN {
        out.warning(
            FindingCode::TitleTooShort,
            "Tool title is very short, consider being more descriptive",
        );
    }
}

pub(super) fn check_description(
    tool: &Map<String, Value>,
    config: &LintConfig,
    out: &mut Findings,
) {
    let Some(description) = string_field(tool, "description", Severity::Warning, out) else {
        return;
    };

    let first_word = description.split_whitespace().next().unwrap_or_default();
    if !config.is_action_verb(first_word) {
        out.warning(
            FindingCode::DescriptionNotActionOriented,
            "Description should be action-oriented (start with verbs like 'Get', 'Create', etc.)",
        );
    }

    let len = char_len(description);
    if len > DESCRIPTION_MAX_LEN {
        out.warning(
            FindingCode::DescriptionTooLong,
            format!(
                "Description is long ({len} chars), consider keeping under {DESCRIPTION_MAX_LEN}"
            ),
        );
    }
    if len < DESCRIPTION_MIN_LEN {
        out.warning(
            FindingCode::DescriptionTooShort,
            "Description is short, consider adding more detail about when to use this tool",
        );
    }
}

/// Fetch a field that should be a string when present.
///
/// Absent and `null` yield `None` silently (the required-field check owns
/// absence). Any other non-string yields `None` plus a finding at
/// `severity`: only `name` is structural, title and description are advisory.
fn string_field<'a>(
    tool: &'a Map<String, Value>,
    key: &str,
    severity: Severity,
    out: &mut Findings,
) -> Option<&'a str> {
    match present(tool, key)? {
        Value::String(s) => Some(s.as_str()),
        other => {
            let message = format!(
                "Field '{key}' must be a string, got {}",
                json_type_name(other)
            );
            match severity {
                Severity::Error => out.error(FindingCode::NotAString, message),
                Severity::Warning => out.warning(FindingCode::NotAString, message),
            }
            None
        }
    }
}
