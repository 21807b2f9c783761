//! Role resolution: the role generalization graph, implicit and computed
//! roles, and permitted roles.

use ml_spec::{AriaRole, AriaVersion, OwnedProperty, PermittedRoles, Repository};

use crate::condition::matches_selector;
use crate::element::Element;

/// A role with its superclass closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSpec<'r> {
    /// Role name.
    pub name: &'r str,
    /// Whether the role is abstract.
    pub is_abstract: bool,
    /// States and properties the role supports.
    pub states_and_props: &'r [OwnedProperty],
    /// Every generalization, depth-first from the nearest.
    pub super_class_roles: Vec<&'r AriaRole>,
}

/// The role an element ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedRole {
    /// Role name. Empty when an explicit `role` attribute is blank.
    pub name: String,
    /// Whether the role comes from the element's semantics rather than a
    /// `role` attribute.
    pub is_implicit: bool,
}

/// Why a computed role is not acceptable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleComputationError {
    /// The `role` attribute names no known role.
    #[error("the \"{role}\" role does not exist")]
    RoleNoExists {
        /// The declared role.
        role: String,
    },
    /// The `role` attribute names an abstract role.
    #[error("the \"{role}\" role is abstract")]
    Abstract {
        /// The declared role.
        role: String,
    },
    /// The element does not permit the declared role.
    #[error("the \"{role}\" role is not permitted on <{element}>")]
    NoPermitted {
        /// The declared role.
        role: String,
        /// Qualified element name.
        element: String,
    },
}

/// Returns the superclass closure of `role_name`.
///
/// Direct parents come first, followed by the closure of each parent in
/// declaration order. A role reachable along several paths appears once per
/// path. Unknown names yield an empty list.
#[must_use]
pub fn super_class_roles<'r>(
    repository: &'r Repository,
    version: AriaVersion,
    role_name: &str,
) -> Vec<&'r AriaRole> {
    let Some(role) = repository.role(version, role_name) else {
        return Vec::new();
    };
    let parents: Vec<&AriaRole> = role
        .generalization
        .iter()
        .filter_map(|name| repository.role(version, name))
        .collect();

    let mut closure = parents.clone();
    for parent in parents {
        closure.extend(super_class_roles(repository, version, &parent.name));
    }
    closure
}

/// Looks up a role with its superclass closure.
#[must_use]
pub fn get_role_spec<'r>(
    repository: &'r Repository,
    version: AriaVersion,
    role_name: &str,
) -> Option<RoleSpec<'r>> {
    let Some(role) = repository.role(version, role_name) else {
        tracing::debug!(role = role_name, %version, "unknown role");
        return None;
    };
    Some(RoleSpec {
        name: &role.name,
        is_abstract: role.is_abstract,
        states_and_props: &role.owned_properties,
        super_class_roles: super_class_roles(repository, version, role_name),
    })
}

/// Returns the implicit role of `element`.
///
/// Conditional roles are tried in order and the first whose selector
/// matches wins; otherwise the unconditional role applies.
pub fn get_implicit_role<'r, E: Element>(
    repository: &'r Repository,
    element: &E,
) -> Option<&'r str> {
    let implicit = repository.element(element.node_name())?.implicit_role.as_ref()?;
    let role = implicit
        .conditions
        .iter()
        .find(|conditional| matches_selector(element, &conditional.condition))
        .map_or(implicit.role.as_deref(), |conditional| Some(conditional.role.as_str()));
    role.filter(|name| !name.is_empty())
}

/// Returns the role of `element`: the first token of its `role` attribute
/// when present, else its implicit role.
pub fn get_computed_role<E: Element>(repository: &Repository, element: &E) -> Option<ComputedRole> {
    if let Some(value) = element.attribute_value("role") {
        let normalized = value.trim().to_lowercase();
        let name = normalized.split_whitespace().next().unwrap_or_default().to_owned();
        return Some(ComputedRole { name, is_implicit: false });
    }
    get_implicit_role(repository, element).map(|name| ComputedRole {
        name: name.to_owned(),
        is_implicit: true,
    })
}

/// Returns the roles `element` may declare.
///
/// The first matching conditional entry wins over the base entry. Elements
/// without a permitted-roles entry allow any role.
pub fn get_permitted_roles<E: Element>(repository: &Repository, element: &E) -> PermittedRoles {
    let implicit = get_implicit_role(repository, element);
    let Some(permitted) = repository
        .element(element.node_name())
        .and_then(|spec| spec.permitted_roles.as_ref())
    else {
        return PermittedRoles::AnyRole;
    };

    let roles = permitted
        .conditions
        .iter()
        .find(|conditional| matches_selector(element, &conditional.condition))
        .map_or(&permitted.roles, |conditional| &conditional.roles);
    merge_role_list(implicit, roles)
}

/// Prepends the implicit role to a permitted-role list.
///
/// `NoRole` with an implicit role becomes a list of just that role;
/// `AnyRole` is unchanged.
#[must_use]
pub fn merge_role_list(implicit: Option<&str>, permitted: &PermittedRoles) -> PermittedRoles {
    match (implicit.filter(|name| !name.is_empty()), permitted) {
        (Some(implicit), PermittedRoles::RoleList(roles)) => PermittedRoles::RoleList(
            std::iter::once(implicit.to_owned())
                .chain(roles.iter().cloned())
                .collect(),
        ),
        (Some(implicit), PermittedRoles::NoRole) => {
            PermittedRoles::RoleList(vec![implicit.to_owned()])
        }
        (_, roles) => roles.clone(),
    }
}

/// Computes the role of `element` and checks an explicit role against the
/// role graph and the element's permitted roles.
///
/// # Errors
///
/// Returns [`RoleComputationError`] when an explicit role is unknown,
/// abstract, or not permitted on the element.
pub fn verify_computed_role<E: Element>(
    repository: &Repository,
    version: AriaVersion,
    element: &E,
) -> Result<Option<ComputedRole>, RoleComputationError> {
    let Some(computed) = get_computed_role(repository, element) else {
        return Ok(None);
    };
    if computed.is_implicit {
        return Ok(Some(computed));
    }

    let Some(role) = repository.role(version, &computed.name) else {
        return Err(RoleComputationError::RoleNoExists { role: computed.name });
    };
    if role.is_abstract {
        return Err(RoleComputationError::Abstract { role: computed.name });
    }
    if !get_permitted_roles(repository, element).permits(&computed.name) {
        return Err(RoleComputationError::NoPermitted {
            role: computed.name,
            element: element.node_name().to_owned(),
        });
    }
    Ok(Some(computed))
}
