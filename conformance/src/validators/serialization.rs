//! JSON serialization fidelity: the repository survives a round trip
//! through its JSON document form.

use anyhow::{Context, Result};
use ml_spec::serializer::json;
use ml_spec::{MlSpec, Repository};

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "serialization/json";

/// Serializes `repository`, parses the result back, and compares.
///
/// # Errors
///
/// Returns an error if serialization itself fails.
pub fn validate(repository: &Repository) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let value = json::to_json(repository).context("serializing spec repository")?;

    let mut violations = Vec::new();
    match serde_json::from_value::<MlSpec>(value) {
        Ok(reloaded) => {
            if &reloaded != repository.data() {
                violations.push("reloaded document differs from the original".to_owned());
            }
            if let Err(err) = Repository::new(reloaded) {
                violations.push(format!("reloaded document is invalid: {err}"));
            }
        }
        Err(err) => violations.push(format!("document does not parse back: {err}")),
    }
    report.push(CheckResult::from_violations(
        VALIDATOR,
        "round trip",
        violations,
        Severity::Failure,
    ));
    Ok(report)
}
