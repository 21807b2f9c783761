//! Check results and their aggregation.

use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious data that does not break resolution.
    Warning,
    /// Data that breaks resolution.
    Failure,
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Validator identifier, e.g. `elements/roles`.
    pub validator: &'static str,
    /// Summary line.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// One line per offending item.
    pub details: Vec<String>,
}

impl CheckResult {
    /// A passing check.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Passes when `violations` is empty, otherwise reports them at
    /// `severity`.
    pub fn from_violations(
        validator: &'static str,
        subject: &str,
        violations: Vec<String>,
        severity: Severity,
    ) -> Self {
        if violations.is_empty() {
            return Self::pass(validator, format!("{subject}: ok"));
        }
        Self {
            validator,
            message: format!("{subject}: {} violation(s)", violations.len()),
            severity,
            details: violations,
        }
    }

    /// Returns true if this result is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        write!(f, "[{tag}] {}: {}", self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n    {detail}")?;
        }
        Ok(())
    }
}

/// Results of every validator.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Individual results in run order.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Failed results.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Number of failed results.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == Severity::Warning)
            .count()
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_set_severity() {
        let ok = CheckResult::from_violations("x", "things", Vec::new(), Severity::Failure);
        assert_eq!(ok.severity, Severity::Pass);
        let bad = CheckResult::from_violations("x", "things", vec!["a".into()], Severity::Warning);
        assert_eq!(bad.severity, Severity::Warning);
        assert_eq!(bad.message, "things: 1 violation(s)");
    }

    #[test]
    fn report_counts() {
        let mut report = ConformanceReport::new();
        report.push(CheckResult::pass("a", "ok"));
        report.push(CheckResult::from_violations("b", "b", vec!["x".into()], Severity::Failure));
        report.push(CheckResult::from_violations("c", "c", vec!["y".into()], Severity::Warning));
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.all_passed());
        assert!(report.results[1].to_string().starts_with("[FAIL] b: b: 1 violation(s)\n    x"));
    }
}
