//! Validation System - Rule/Severity Separation
//!
//! Rules produce structured violations.
//! Any Error-severity violation fails the run; Warnings pass through.

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error)
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn check(&self, config: &GridConfig) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

pub struct ColumnsRule;

impl ValidationRule for ColumnsRule {
    fn name(&self) -> &'static str {
        "columns"
    }

    fn check(&self, config: &GridConfig) -> Vec<ValidationViolation> {
        if config.columns >= 1 {
            return vec![];
        }

        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "Column count must be at least 1".to_string(),
            expected: Some("columns >= 1".to_string()),
            actual: Some(config.columns.to_string()),
            remediation: vec!["Set columns to a positive integer such as 12".to_string()],
        }]
    }
}

pub struct ContainerRule;

impl ValidationRule for ContainerRule {
    fn name(&self) -> &'static str {
        "container"
    }

    fn check(&self, config: &GridConfig) -> Vec<ValidationViolation> {
        let mut violations = vec![];

        if config.container.max_width.value <= 0.0 {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "Container max-width must be positive".to_string(),
                expected: Some("maxWidth > 0".to_string()),
                actual: Some(config.container.max_width.to_string()),
                remediation: vec!["Set container.maxWidth to a positive length".to_string()],
            });
        }

        if config.container.fields.value < 0.0 {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "Container fields must not be negative".to_string(),
                expected: Some("fields >= 0".to_string()),
                actual: Some(config.container.fields.to_string()),
                remediation: vec!["Set container.fields to a non-negative length".to_string()],
            });
        }

        violations
    }
}

pub struct BreakpointsRule;

impl ValidationRule for BreakpointsRule {
    fn name(&self) -> &'static str {
        "break_points"
    }

    fn check(&self, config: &GridConfig) -> Vec<ValidationViolation> {
        let mut violations = vec![];
        let resolved = config.resolved_breakpoints();

        // Equal widths produce overlapping media-query ranges where the
        // winner depends on source order. Reject instead of guessing.
        for pair in resolved.windows(2) {
            if pair[0].width.value == pair[1].width.value {
                violations.push(ValidationViolation {
                    rule: self.name().to_string(),
                    severity: ViolationSeverity::Error,
                    message: format!(
                        "Breakpoints {:?} and {:?} share the width {}",
                        pair[0].name, pair[1].name, pair[0].width
                    ),
                    expected: Some("pairwise-distinct breakpoint widths".to_string()),
                    actual: Some(pair[0].width.to_string()),
                    remediation: vec!["Give each breakpoint a distinct width".to_string()],
                });
            }
        }

        for bp in &resolved {
            if bp.width.value >= config.container.max_width.value {
                violations.push(ValidationViolation {
                    rule: self.name().to_string(),
                    severity: ViolationSeverity::Warning,
                    message: format!(
                        "Breakpoint {:?} is not narrower than the container; its media query widens the layout instead of narrowing it",
                        bp.name
                    ),
                    expected: Some(format!("width < {}", config.container.max_width)),
                    actual: Some(bp.width.to_string()),
                    remediation: vec![
                        "Lower the breakpoint width below container.maxWidth".to_string(),
                    ],
                });
            }
        }

        violations
    }
}

/// Validator runs every rule and folds severities into a result
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ColumnsRule),
                Box::new(ContainerRule),
                Box::new(BreakpointsRule),
            ],
        }
    }

    pub fn validate(&self, config: &GridConfig) -> ValidationResult {
        let mut all_violations = vec![];

        for rule in &self.rules {
            all_violations.extend(rule.check(config));
        }

        let has_errors = all_violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error);

        ValidationResult {
            valid: !has_errors,
            violations: all_violations,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(raw: &str) -> GridConfig {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn zero_columns_is_an_error() {
        let config = config_from(
            r#"{
                "columns": 0,
                "container": { "maxWidth": "1200px", "fields": "30px" }
            }"#,
        );

        let result = Validator::new().validate(&config);
        assert!(!result.valid);
        assert!(result.violations.iter().any(|v| v.rule == "columns"));
    }

    #[test]
    fn duplicate_breakpoint_widths_are_an_error() {
        let config = config_from(
            r#"{
                "columns": 12,
                "container": { "maxWidth": "1200px", "fields": "30px" },
                "breakPoints": {
                    "md": { "width": "960px" },
                    "tablet": { "width": "960px" }
                }
            }"#,
        );

        let result = Validator::new().validate(&config);
        assert!(!result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.rule == "break_points" && v.severity == ViolationSeverity::Error));
    }

    #[test]
    fn oversized_breakpoint_is_a_warning_only() {
        let config = config_from(
            r#"{
                "columns": 12,
                "container": { "maxWidth": "1200px", "fields": "30px" },
                "breakPoints": {
                    "huge": { "width": "1300px" },
                    "md": { "width": "960px" }
                }
            }"#,
        );

        let result = Validator::new().validate(&config);
        assert!(result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn example_configuration_is_clean() {
        let config = config_from(
            r#"{
                "outputStyle": "sass",
                "columns": 12,
                "container": { "maxWidth": "1200px", "fields": "30px" },
                "breakPoints": {
                    "lg": { "width": "1100px" },
                    "md": { "width": "960px" },
                    "sm": { "width": "780px", "fields": "15px" },
                    "xs": { "width": "560px" }
                }
            }"#,
        );

        let result = Validator::new().validate(&config);
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }
}
