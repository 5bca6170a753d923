//! Findings produced by the validator checks.

use std::fmt;

use serde::Serialize;

/// Severity channel of a finding.
///
/// Errors make a definition invalid. Warnings are advisory and never
/// affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable identifier for the rule that produced a finding.
///
/// Messages are for humans and may be reworded; codes are what the JSON
/// report exposes for tooling to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCode {
    // Top-level fields
    MissingField,
    NotAString,

    // name
    NameNotSnakeCase,
    NameTooLong,
    NameTooShort,

    // title
    TitleTooLong,
    TitleTooShort,

    // description
    DescriptionNotActionOriented,
    DescriptionTooLong,
    DescriptionTooShort,

    // inputSchema
    SchemaNotObject,
    SchemaTypeNotObject,
    PropertiesNotObject,
    ParameterMissingDescription,
    RequiredNotArray,
    RequiredNotDefined,

    // _meta
    MetaMissing,
    MetaNotObject,
    MetaFieldMissing,
    OutputTemplateScheme,
    StatusNotString,
    StatusTooLong,
    WidgetAccessibleNotBool,

    // securitySchemes
    SecuritySchemesMissing,
    SecuritySchemesNotArray,
    SchemeNotObject,
    SchemeMissingType,
    SchemeInvalidType,
    ScopesNotArray,
}

/// A single error or warning against one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: FindingCode,
    pub message: String,
}

impl Finding {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Append-only sink the checks write into.
///
/// Order of insertion is the order findings are reported in.
#[derive(Debug, Clone, Default)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error-level finding.
    pub fn error(&mut self, code: FindingCode, message: impl Into<String>) {
        self.push(Severity::Error, code, message.into());
    }

    /// Record a warning-level finding.
    pub fn warning(&mut self, code: FindingCode, message: impl Into<String>) {
        self.push(Severity::Warning, code, message.into());
    }

    fn push(&mut self, severity: Severity, code: FindingCode, message: String) {
        tracing::trace!(%severity, ?code, %message, "finding");
        self.items.push(Finding {
            severity,
            code,
            message,
        });
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.items.iter()
    }

    /// Messages of error-level findings, in order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Error)
    }

    /// Messages of warning-level findings, in order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Warning)
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(move |f| f.severity == severity)
            .map(|f| f.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Finding::is_error)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Finding] {
        &self.items
    }
}
