//! Element-spec validator.
//!
//! - Element and attribute names are well formed
//! - Attribute group references name defined groups
//! - Implicit and permitted roles name known roles
//! - Every element resolves to an attribute list without duplicate names

use std::collections::HashSet;

use anyhow::Result;
use ml_spec::{
    AriaVersion, AttributeEntry, ImplicitRole, PermittedRoles, Repository, GLOBAL_ATTRS_REF,
};
use regex::Regex;

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "elements";

/// Validates the element specs of `repository`.
///
/// # Errors
///
/// Returns an error if a name pattern fails to compile.
pub fn validate(repository: &Repository) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let element_name = Regex::new(r"^(?:[a-z]+:)?[a-zA-Z][a-zA-Z0-9-]*$")?;
    let attr_name = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.:-]*$")?;

    let mut bad_names = Vec::new();
    let mut bad_groups = Vec::new();
    for spec in repository.specs() {
        if !element_name.is_match(&spec.name) {
            bad_names.push(format!("element <{}>", spec.name));
        }
        for entry in &spec.attributes {
            match entry {
                AttributeEntry::GroupRef(group) if group == GLOBAL_ATTRS_REF => {}
                AttributeEntry::GroupRef(group) => {
                    if repository.global_attrs(group).is_none() {
                        bad_groups.push(format!(
                            "<{}> references undefined group {group}",
                            spec.name
                        ));
                    }
                }
                AttributeEntry::Attribute(attr) => {
                    if !attr_name.is_match(&attr.name) {
                        bad_names.push(format!("<{}> attribute {:?}", spec.name, attr.name));
                    }
                }
            }
        }
    }
    for (group, attrs) in &repository.defs().global_attrs {
        for attr in attrs.iter().filter(|attr| !attr_name.is_match(&attr.name)) {
            bad_names.push(format!("group {group} attribute {:?}", attr.name));
        }
    }
    report.push(CheckResult::from_violations(VALIDATOR, "names", bad_names, Severity::Failure));
    report.push(CheckResult::from_violations(
        VALIDATOR,
        "group references",
        bad_groups,
        Severity::Failure,
    ));
    report.push(validate_role_references(repository));
    report.push(validate_resolution(repository));
    Ok(report)
}

fn validate_role_references(repository: &Repository) -> CheckResult {
    let known = |name: &str| repository.role(AriaVersion::V1_2, name).is_some();
    let mut violations = Vec::new();
    for spec in repository.specs() {
        if let Some(implicit) = &spec.implicit_role {
            for role in implicit_roles(implicit).filter(|role| !known(*role)) {
                violations.push(format!("<{}> implicit role {role:?} is unknown", spec.name));
            }
        }
        if let Some(permitted) = &spec.permitted_roles {
            let lists = std::iter::once(&permitted.roles)
                .chain(permitted.conditions.iter().map(|c| &c.roles));
            for role in lists.flat_map(listed_roles).filter(|role| !known(*role)) {
                violations.push(format!("<{}> permitted role {role:?} is unknown", spec.name));
            }
        }
    }
    CheckResult::from_violations(VALIDATOR, "role references", violations, Severity::Failure)
}

fn implicit_roles(implicit: &ImplicitRole) -> impl Iterator<Item = &str> {
    implicit
        .role
        .as_deref()
        .into_iter()
        .chain(implicit.conditions.iter().map(|c| c.role.as_str()))
}

fn listed_roles(roles: &PermittedRoles) -> impl Iterator<Item = &str> {
    let list: &[String] = match roles {
        PermittedRoles::RoleList(list) => list,
        PermittedRoles::AnyRole | PermittedRoles::NoRole => &[],
    };
    list.iter().map(String::as_str)
}

/// Resolved attribute lists should not repeat a name. Repeats are legal
/// (the first wins on lookup) so they only warn.
fn validate_resolution(repository: &Repository) -> CheckResult {
    let mut violations = Vec::new();
    for spec in repository.specs() {
        let Some(attrs) = ml_rules::get_attr_specs(&spec.name, repository) else {
            violations.push(format!("<{}> does not resolve", spec.name));
            continue;
        };
        let mut seen = HashSet::new();
        for attr in &attrs {
            if !seen.insert(attr.name.as_str()) {
                violations.push(format!("<{}> resolves {:?} twice", spec.name, attr.name));
            }
        }
    }
    CheckResult::from_violations(VALIDATOR, "attribute resolution", violations, Severity::Warning)
}
