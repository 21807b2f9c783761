//! The immutable specification repository.
//!
//! A [`Repository`] wraps an [`MlSpec`] document, indexes its element specs
//! by qualified name, and guarantees the properties the resolution algorithms
//! rely on: one spec per element name, one role per name within an ARIA
//! version, and an acyclic role generalization graph.

use std::collections::{HashMap, HashSet};

use crate::error::SpecError;
use crate::model::{
    Attribute, AriaProperty, AriaRole, AriaSpec, AriaVersion, ElementSpec, MlSpec, NamespaceUri,
    SpecDefs,
};

/// Read-only knowledge base of elements, global attributes, and ARIA.
///
/// Built once, then shared by reference across any number of threads.
#[derive(Debug, Clone)]
pub struct Repository {
    data: MlSpec,
    index: HashMap<String, usize>,
}

impl Repository {
    /// Validates and indexes a spec document.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DuplicateElement`] if two element specs share a
    /// name, [`SpecError::DuplicateRole`] if an ARIA version defines a role
    /// twice, and [`SpecError::CyclicGeneralization`] if role generalization
    /// contains a cycle.
    pub fn new(data: MlSpec) -> Result<Self, SpecError> {
        let mut index = HashMap::with_capacity(data.specs.len());
        for (position, spec) in data.specs.iter().enumerate() {
            if index.insert(spec.name.clone(), position).is_some() {
                return Err(SpecError::DuplicateElement {
                    name: spec.name.clone(),
                });
            }
        }
        for version in [AriaVersion::V1_1, AriaVersion::V1_2] {
            check_roles(version, data.def.aria.get(version))?;
        }
        Ok(Self { data, index })
    }

    /// Builds a repository from data known to be valid.
    pub(crate) fn new_unchecked(data: MlSpec) -> Self {
        let index = data
            .specs
            .iter()
            .enumerate()
            .map(|(position, spec)| (spec.name.clone(), position))
            .collect();
        Self { data, index }
    }

    /// Returns the underlying spec document.
    #[must_use]
    pub fn data(&self) -> &MlSpec {
        &self.data
    }

    /// Returns the shared definitions.
    #[must_use]
    pub fn defs(&self) -> &SpecDefs {
        &self.data.def
    }

    /// Returns every element spec in declaration order.
    #[must_use]
    pub fn specs(&self) -> &[ElementSpec] {
        &self.data.specs
    }

    /// Looks up an element spec by exact qualified name.
    #[must_use]
    pub fn element(&self, qualified_name: &str) -> Option<&ElementSpec> {
        self.index
            .get(qualified_name)
            .and_then(|&position| self.data.specs.get(position))
    }

    /// Looks up an element spec by local name and namespace.
    #[must_use]
    pub fn element_by_namespace(
        &self,
        local_name: &str,
        namespace: NamespaceUri,
    ) -> Option<&ElementSpec> {
        match namespace.prefix() {
            Some(prefix) => self.element(&format!("{prefix}:{local_name}")),
            None => self.element(local_name),
        }
    }

    /// Returns a global-attribute group, or `None` if the key is undefined.
    #[must_use]
    pub fn global_attrs(&self, group: &str) -> Option<&[Attribute]> {
        self.data.def.global_attrs.get(group).map(Vec::as_slice)
    }

    /// Returns the ARIA definitions of `version`.
    #[must_use]
    pub fn aria(&self, version: AriaVersion) -> &AriaSpec {
        self.data.def.aria.get(version)
    }

    /// Looks up a role, searching core roles before graphics roles.
    #[must_use]
    pub fn role(&self, version: AriaVersion, name: &str) -> Option<&AriaRole> {
        let aria = self.aria(version);
        aria.roles
            .iter()
            .chain(aria.graphics_roles.iter())
            .find(|role| role.name == name)
    }

    /// Looks up an ARIA state or property by attribute name.
    #[must_use]
    pub fn aria_property(&self, version: AriaVersion, name: &str) -> Option<&AriaProperty> {
        self.aria(version).props.iter().find(|prop| prop.name == name)
    }
}

impl TryFrom<MlSpec> for Repository {
    type Error = SpecError;

    fn try_from(data: MlSpec) -> Result<Self, Self::Error> {
        Repository::new(data)
    }
}

/// Rejects duplicate role names and generalization cycles.
fn check_roles(version: AriaVersion, aria: &AriaSpec) -> Result<(), SpecError> {
    let mut roles: HashMap<&str, &AriaRole> = HashMap::new();
    for role in aria.roles.iter().chain(aria.graphics_roles.iter()) {
        if roles.insert(role.name.as_str(), role).is_some() {
            return Err(SpecError::DuplicateRole {
                version,
                name: role.name.clone(),
            });
        }
    }

    let mut done: HashSet<&str> = HashSet::new();
    for role in aria.roles.iter().chain(aria.graphics_roles.iter()) {
        let mut path = Vec::new();
        visit(role.name.as_str(), &roles, &mut path, &mut done)
            .map_err(|cycle| SpecError::CyclicGeneralization { version, cycle })?;
    }
    Ok(())
}

/// Depth-first walk over generalization edges. Unknown parents are leaves.
fn visit<'a>(
    name: &'a str,
    roles: &HashMap<&'a str, &'a AriaRole>,
    path: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
) -> Result<(), Vec<String>> {
    if done.contains(name) {
        return Ok(());
    }
    if let Some(start) = path.iter().position(|&seen| seen == name) {
        let mut cycle: Vec<String> = path[start..].iter().map(|&s| s.to_owned()).collect();
        cycle.push(name.to_owned());
        return Err(cycle);
    }
    let Some(role) = roles.get(name) else {
        return Ok(());
    };
    path.push(name);
    for parent in &role.generalization {
        visit(parent.as_str(), roles, path, done)?;
    }
    path.pop();
    done.insert(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AriaDefs;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn repository_is_shareable_across_threads() {
        assert_send_sync::<Repository>();
    }

    fn role(name: &str, parents: &[&str]) -> AriaRole {
        AriaRole {
            name: name.to_owned(),
            generalization: parents.iter().map(|p| (*p).to_owned()).collect(),
            ..AriaRole::default()
        }
    }

    fn doc(roles: Vec<AriaRole>, specs: Vec<ElementSpec>) -> MlSpec {
        MlSpec {
            cites: Vec::new(),
            def: SpecDefs {
                aria: AriaDefs {
                    v1_2: AriaSpec {
                        roles,
                        ..AriaSpec::default()
                    },
                    v1_1: AriaSpec::default(),
                },
                ..SpecDefs::default()
            },
            specs,
        }
    }

    #[test]
    fn accepts_shared_lattice() {
        let roles = vec![
            role("a", &["b", "c"]),
            role("b", &["d"]),
            role("c", &["d"]),
            role("d", &[]),
        ];
        assert!(Repository::new(doc(roles, Vec::new())).is_ok());
    }

    #[test]
    fn rejects_cycle() {
        let roles = vec![role("a", &["b"]), role("b", &["c"]), role("c", &["a"])];
        let err = Repository::new(doc(roles, Vec::new())).err();
        assert_eq!(
            err,
            Some(SpecError::CyclicGeneralization {
                version: AriaVersion::V1_2,
                cycle: ["a", "b", "c", "a"].map(String::from).to_vec(),
            })
        );
    }

    #[test]
    fn rejects_self_generalization() {
        let roles = vec![role("a", &["a"])];
        assert!(matches!(
            Repository::new(doc(roles, Vec::new())),
            Err(SpecError::CyclicGeneralization { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_element() {
        let specs = vec![ElementSpec::new("div"), ElementSpec::new("div")];
        assert_eq!(
            Repository::new(doc(Vec::new(), specs)).err(),
            Some(SpecError::DuplicateElement { name: "div".into() })
        );
    }

    #[test]
    fn unknown_parent_is_not_an_error() {
        let roles = vec![role("a", &["ghost"])];
        assert!(Repository::new(doc(roles, Vec::new())).is_ok());
    }

    #[test]
    fn element_by_namespace_prefixes_name() {
        let specs = vec![ElementSpec::new("svg:circle"), ElementSpec::new("a")];
        let repo = Repository::new_unchecked(doc(Vec::new(), specs));
        assert!(repo.element_by_namespace("circle", NamespaceUri::Svg).is_some());
        assert!(repo.element_by_namespace("a", NamespaceUri::Html).is_some());
        assert!(repo.element_by_namespace("circle", NamespaceUri::Html).is_none());
    }
}
