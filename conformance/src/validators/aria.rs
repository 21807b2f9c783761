//! ARIA definitions validator, run for every supported version.
//!
//! - Generalization, required-context, and required-owned targets are known roles
//! - Owned and prohibited properties are defined
//! - Token properties enumerate their values
//! - Role-conditional value types name known roles

use ml_spec::{AriaValueType, AriaVersion, Repository};

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "aria";

/// Validates the ARIA definitions of `repository`.
pub fn validate(repository: &Repository) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for version in [AriaVersion::V1_1, AriaVersion::V1_2] {
        report.push(validate_roles(repository, version));
        report.push(validate_props(repository, version));
    }
    report
}

fn validate_roles(repository: &Repository, version: AriaVersion) -> CheckResult {
    let aria = repository.aria(version);
    let known_role = |name: &str| repository.role(version, name).is_some();
    let known_prop = |name: &str| repository.aria_property(version, name).is_some();

    let mut violations = Vec::new();
    for role in aria.roles.iter().chain(&aria.graphics_roles) {
        let targets = [
            ("generalization", &role.generalization),
            ("required context", &role.required_context_role),
            ("required owned", &role.required_owned_elements),
        ];
        for (relation, names) in targets {
            for name in names.iter().filter(|name| !known_role(name.as_str())) {
                violations.push(format!("{}: {relation} role {name:?} is unknown", role.name));
            }
        }
        for prop in role.owned_properties.iter().filter(|prop| !known_prop(prop.name.as_str())) {
            violations.push(format!("{}: owned property {} is undefined", role.name, prop.name));
        }
        for name in role.prohibited_properties.iter().filter(|name| !known_prop(name.as_str())) {
            violations.push(format!("{}: prohibited property {name} is undefined", role.name));
        }
    }
    CheckResult::from_violations(
        VALIDATOR,
        &format!("ARIA {version} roles"),
        violations,
        Severity::Failure,
    )
}

fn validate_props(repository: &Repository, version: AriaVersion) -> CheckResult {
    let mut violations = Vec::new();
    for prop in &repository.aria(version).props {
        let token_typed = matches!(prop.value, AriaValueType::Token | AriaValueType::TokenList);
        if token_typed && prop.enum_values.is_empty() {
            violations.push(format!("{}: token type without enumerated values", prop.name));
        }
        if prop.value == AriaValueType::Other {
            violations.push(format!("{}: unknown value type", prop.name));
        }
        for conditional in &prop.conditional_value {
            let unknown = conditional
                .role
                .iter()
                .filter(|role| repository.role(version, role.as_str()).is_none());
            for role in unknown {
                violations.push(format!(
                    "{}: conditional value for unknown role {role:?}",
                    prop.name
                ));
            }
        }
    }
    CheckResult::from_violations(
        VALIDATOR,
        &format!("ARIA {version} properties"),
        violations,
        Severity::Failure,
    )
}
