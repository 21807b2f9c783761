//! The resolution facade handed to lint rules.

use ml_spec::{AriaSpec, Attribute, ElementSpec, PermittedRoles, Repository};

use crate::aria::{check_aria, AriaCheck};
use crate::attr_specs::get_attr_specs;
use crate::config::SemanticsConfig;
use crate::element::{AttrChecker, Element, InvalidReport, Translator};
use crate::roles::{self, ComputedRole, RoleComputationError, RoleSpec};
use crate::validate::is_valid_attr;

/// Semantic queries over one repository with fixed settings.
///
/// Cheap to copy; every query borrows the repository and keeps no state.
#[derive(Debug, Clone, Copy)]
pub struct Semantics<'r> {
    repository: &'r Repository,
    config: SemanticsConfig,
}

impl<'r> Semantics<'r> {
    /// Queries over `repository` using `config`.
    #[must_use]
    pub fn new(repository: &'r Repository, config: SemanticsConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the repository.
    #[must_use]
    pub fn repository(&self) -> &'r Repository {
        self.repository
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> SemanticsConfig {
        self.config
    }

    /// Looks up an element spec by qualified name.
    #[must_use]
    pub fn html_spec(&self, qualified_name: &str) -> Option<&'r ElementSpec> {
        self.repository.element(qualified_name)
    }

    /// Returns the ARIA definitions of the configured version.
    #[must_use]
    pub fn aria_spec(&self) -> &'r AriaSpec {
        self.repository.aria(self.config.aria_version)
    }

    /// See [`crate::attr_specs::get_attr_specs`].
    #[must_use]
    pub fn get_attr_specs(&self, qualified_name: &str) -> Option<Vec<Attribute>> {
        get_attr_specs(qualified_name, self.repository)
    }

    /// Validates an attribute against the element's resolved attribute
    /// specs. See [`crate::validate::is_valid_attr`].
    pub fn is_valid_attr<E, C, T>(
        &self,
        checker: &C,
        translator: &T,
        name: &str,
        value: &str,
        is_dynamic_value: bool,
        element: &E,
    ) -> Option<InvalidReport>
    where
        E: Element,
        C: AttrChecker + ?Sized,
        T: Translator + ?Sized,
    {
        let attr_specs = self.get_attr_specs(element.node_name()).unwrap_or_default();
        is_valid_attr(checker, translator, name, value, is_dynamic_value, element, &attr_specs)
    }

    /// See [`crate::roles::get_role_spec`].
    #[must_use]
    pub fn get_role_spec(&self, role_name: &str) -> Option<RoleSpec<'r>> {
        roles::get_role_spec(self.repository, self.config.aria_version, role_name)
    }

    /// See [`crate::roles::get_implicit_role`].
    pub fn get_implicit_role<E: Element>(&self, element: &E) -> Option<&'r str> {
        roles::get_implicit_role(self.repository, element)
    }

    /// See [`crate::roles::get_computed_role`].
    pub fn get_computed_role<E: Element>(&self, element: &E) -> Option<ComputedRole> {
        roles::get_computed_role(self.repository, element)
    }

    /// See [`crate::roles::get_permitted_roles`].
    pub fn get_permitted_roles<E: Element>(&self, element: &E) -> PermittedRoles {
        roles::get_permitted_roles(self.repository, element)
    }

    /// See [`crate::roles::verify_computed_role`].
    ///
    /// # Errors
    ///
    /// Returns [`RoleComputationError`] when an explicit role is unknown,
    /// abstract, or not permitted on the element.
    pub fn verify_computed_role<E: Element>(
        &self,
        element: &E,
    ) -> Result<Option<ComputedRole>, RoleComputationError> {
        roles::verify_computed_role(self.repository, self.config.aria_version, element)
    }

    /// See [`crate::aria::check_aria`].
    #[must_use]
    pub fn check_aria(
        &self,
        attr_name: &str,
        current_value: &str,
        role: Option<&str>,
    ) -> AriaCheck<'r> {
        check_aria(self.repository, self.config.aria_version, attr_name, current_value, role)
    }
}

impl Semantics<'static> {
    /// Queries over the built-in repository with default settings.
    #[must_use]
    pub fn html() -> Self {
        Self::new(Repository::html(), SemanticsConfig::default())
    }
}

impl Default for Semantics<'static> {
    fn default() -> Self {
        Self::html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn semantics_is_shareable_across_threads() {
        assert_send_sync::<Semantics<'static>>();
        assert_send_sync::<SemanticsConfig>();
    }

    #[test]
    fn html_semantics_can_move_to_another_thread() {
        let semantics = Semantics::html();
        let spec = std::thread::spawn(move || semantics.get_attr_specs("a").map(|a| a.len()))
            .join()
            .ok()
            .flatten();
        assert!(spec.is_some_and(|count| count > 0));
    }
}
