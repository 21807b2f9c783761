//! mlint conformance suite.
//!
//! Validates spec data before it reaches the resolution core. A
//! [`ml_spec::Repository`] already rejects duplicate names and cyclic role
//! graphs at construction; the validators here catch the remaining data
//! errors that resolution would silently tolerate.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `elements` | names, group references, role references, attribute resolution |
//! | `aria` | role graph targets, property definitions, token enumerations |
//! | `serialization/json` | JSON round trip |
//!
//! # Entry Point
//!
//! ```
//! let report = mlint_conformance::run_all(ml_spec::Repository::html()).expect("validators run");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use ml_spec::Repository;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Runs every validator over `repository`.
///
/// Validators run in this order:
/// 1. Element specs
/// 2. ARIA definitions (1.1, then 1.2)
/// 3. JSON serialization
///
/// # Errors
///
/// Returns an error only if a validator cannot run; data violations are
/// reported, not raised.
pub fn run_all(repository: &Repository) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    report.extend(validators::elements::validate(repository)?);
    report.extend(validators::aria::validate(repository));
    report.extend(validators::serialization::validate(repository)?);
    tracing::debug!(
        checks = report.results.len(),
        failures = report.failure_count(),
        warnings = report.warning_count(),
        "conformance run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_spec::{
        AriaRole, AttrCondition, Attribute, ElementSpec, ImplicitRole, MlSpec, PermittedRoles,
        PermittedRolesSpec,
    };

    fn failures(report: &ConformanceReport) -> Vec<String> {
        report.failures().map(ToString::to_string).collect()
    }

    #[test]
    fn built_in_spec_conforms() {
        let report = run_all(Repository::html()).unwrap_or_default();
        assert!(!report.results.is_empty());
        assert!(report.all_passed(), "failures: {:#?}", failures(&report));
    }

    #[test]
    fn dangling_references_fail() {
        let mut data = ml_spec::html::spec();
        data.specs.push(
            ElementSpec::new("x-broken")
                .attributes(vec![
                    "#NoSuchGroup".into(),
                    Attribute::new("ok").when(AttrCondition::ancestor("p")).into(),
                ])
                .implicit_role(ImplicitRole::of("no-such-role"))
                .permitted_roles(PermittedRolesSpec::new(PermittedRoles::list(&["buttn"]))),
        );
        let repository = Repository::new(data).unwrap_or_else(|err| unreachable!("{err}"));
        let report = run_all(&repository).unwrap_or_default();
        let failures = failures(&report).join("\n");
        assert!(failures.contains("undefined group #NoSuchGroup"));
        assert!(failures.contains("implicit role \"no-such-role\""));
        assert!(failures.contains("permitted role \"buttn\""));
    }

    #[test]
    fn unknown_owned_property_fails() {
        let mut data: MlSpec = ml_spec::html::spec();
        let mut role = AriaRole {
            name: "x-role".into(),
            generalization: vec!["widget".into()],
            ..AriaRole::default()
        };
        role.owned_properties.push(ml_spec::OwnedProperty {
            name: "aria-nope".into(),
            ..Default::default()
        });
        data.def.aria.v1_2.roles.push(role);
        let repository = Repository::new(data).unwrap_or_else(|err| unreachable!("{err}"));
        let report = validators::aria::validate(&repository);
        assert_eq!(report.failure_count(), 1);
        assert!(failures(&report)[0].contains("x-role: owned property aria-nope is undefined"));
    }
}
