//! ValidationResult: the owned outcome of validating one tool definition.
//!
//! The result carries the two severity channels as plain message lists,
//! plus the tagged findings they were built from. Its `Display` impl is the
//! human report:
//!
//! ```text
//! ❌ ERRORS:
//!   - Missing required field: name
//!
//! ⚠️  WARNINGS:
//!   - No _meta field found. Consider adding metadata for better UX
//!
//! ❌ Tool definition has errors
//! ```

use std::fmt;

use serde::Serialize;

use crate::validator::{Finding, Severity};

/// Overall verdict of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// No errors, no warnings.
    Valid,
    /// No errors, some warnings.
    ValidWithWarnings,
    /// At least one error.
    HasErrors,
}

impl Status {
    /// The closing line of the text report.
    pub fn headline(&self) -> &'static str {
        match self {
            Status::Valid => "✅ Tool definition is valid!",
            Status::ValidWithWarnings => "✅ Tool definition is valid (with warnings)",
            Status::HasErrors => "❌ Tool definition has errors",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Valid => write!(f, "valid"),
            Status::ValidWithWarnings => write!(f, "valid with warnings"),
            Status::HasErrors => write!(f, "has errors"),
        }
    }
}

/// The result of validating a tool definition.
///
/// Serializes as:
/// `{ "valid", "status", "errors", "warnings", "findings" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    status: Status,
    errors: Vec<String>,
    warnings: Vec<String>,
    findings: Vec<Finding>,
}

impl ValidationResult {
    /// Build a result from findings in emission order.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for finding in &findings {
            match finding.severity {
                Severity::Error => errors.push(finding.message.clone()),
                Severity::Warning => warnings.push(finding.message.clone()),
            }
        }

        let status = match (errors.is_empty(), warnings.is_empty()) {
            (false, _) => Status::HasErrors,
            (true, false) => Status::ValidWithWarnings,
            (true, true) => Status::Valid,
        };

        Self {
            valid: errors.is_empty(),
            status,
            errors,
            warnings,
            findings,
        }
    }

    /// True if there are no errors. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "❌ ERRORS:")?;
            for error in &self.errors {
                writeln!(f, "  - {error}")?;
            }
            writeln!(f)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "⚠️  WARNINGS:")?;
            for warning in &self.warnings {
                writeln!(f, "  - {warning}")?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", self.status.headline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::FindingCode;

    fn finding(severity: Severity, message: &str) -> Finding {
        Finding {
            severity,
            code: FindingCode::MissingField,
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_is_valid() {
        let result = ValidationResult::from_findings(vec![]);
        assert!(result.is_valid());
        assert_eq!(result.status(), Status::Valid);
        assert_eq!(result.to_string(), "✅ Tool definition is valid!");
    }

    #[test]
    fn warnings_keep_validity() {
        let result = ValidationResult::from_findings(vec![finding(Severity::Warning, "meh")]);
        assert!(result.is_valid());
        assert_eq!(result.status(), Status::ValidWithWarnings);
        assert_eq!(result.warnings(), ["meh".to_string()]);
    }

    #[test]
    fn any_error_is_invalid() {
        let result = ValidationResult::from_findings(vec![
            finding(Severity::Warning, "w1"),
            finding(Severity::Error, "e1"),
            finding(Severity::Warning, "w2"),
        ]);
        assert!(!result.is_valid());
        assert_eq!(result.status(), Status::HasErrors);
        assert_eq!(result.errors(), ["e1".to_string()]);
        assert_eq!(result.warnings(), ["w1".to_string(), "w2".to_string()]);
        assert_eq!(result.findings().len(), 3);
    }

    #[test]
    fn status_text() {
        assert_eq!(Status::Valid.to_string(), "valid");
        assert_eq!(Status::ValidWithWarnings.to_string(), "valid with warnings");
        assert_eq!(Status::HasErrors.to_string(), "has errors");
    }

    #[test]
    fn report_lists_both_sections() {
        let result = ValidationResult::from_findings(vec![
            finding(Severity::Error, "Missing required field: name"),
            finding(
                Severity::Warning,
                "No _meta field found. Consider adding metadata for better UX",
            ),
        ]);
        insta::assert_snapshot!(result.to_string(), @r"
❌ ERRORS:
  - Missing required field: name

⚠️  WARNINGS:
  - No _meta field found. Consider adding metadata for better UX

❌ Tool definition has errors
");
    }

    #[test]
    fn report_with_only_warnings() {
        let result =
            ValidationResult::from_findings(vec![finding(Severity::Warning, "short name")]);
        insta::assert_snapshot!(result.to_string(), @r"
⚠️  WARNINGS:
  - short name

✅ Tool definition is valid (with warnings)
");
    }

    #[test]
    fn serializes_for_machines() {
        let result = ValidationResult::from_findings(vec![finding(Severity::Error, "boom")]);
        let json = serde_json::to_value(&result).expect("result serializes");
        assert_eq!(json["valid"], false);
        assert_eq!(json["status"], "has-errors");
        assert_eq!(json["errors"][0], "boom");
        assert_eq!(json["findings"][0]["severity"], "error");
        assert_eq!(json["findings"][0]["code"], "missing-field");
    }
}
