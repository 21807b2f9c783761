//! HTML, SVG, and WAI-ARIA knowledge base encoded as typed Rust data.
//!
//! The `mlint-spec` crate provides the static specification the markup
//! linter resolves against: element specs with their attributes and ARIA
//! role rules, global-attribute groups, and versioned ARIA role and
//! property definitions.
//!
//! # Entry Point
//!
//! ```
//! let repository = ml_spec::Repository::html();
//! assert!(repository.element("button").is_some());
//! ```
//!
//! # Custom Specs
//!
//! Any [`MlSpec`] document can be turned into a repository; construction
//! rejects data that would break resolution, such as a cyclic role graph.
//!
//! ```
//! let data = ml_spec::html::spec();
//! let repository = ml_spec::Repository::new(data).expect("built-in spec is valid");
//! assert!(repository.role(ml_spec::AriaVersion::V1_2, "button").is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod html;
pub mod model;
pub mod repository;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use error::SpecError;
pub use model::{
    AriaDefs, AriaProperty, AriaPropertyKind, AriaRole, AriaSpec, AriaValueType, AriaVersion,
    AttrCondition, Attribute, AttributeEntry, AttributeType, ConditionalValue, ContentModel,
    ElementSpec, EquivalentHtmlAttr, ImplicitRole, MlSpec, NamespaceUri, OwnedProperty,
    PermittedRoleCondition, PermittedRoles, PermittedRolesSpec, RoleCondition, SelectorList,
    SpecDefs, EXTENDS, GLOBAL_ATTRS_REF, HTML_GLOBAL_ATTRS,
};
pub use repository::Repository;

impl Repository {
    /// Returns the built-in repository: HTML elements, SVG elements, and
    /// WAI-ARIA 1.1 / 1.2.
    ///
    /// Built on first use and shared for the rest of the process.
    #[must_use]
    pub fn html() -> &'static Repository {
        static REPOSITORY: std::sync::OnceLock<Repository> = std::sync::OnceLock::new();
        REPOSITORY.get_or_init(|| {
            tracing::debug!("building built-in markup spec repository");
            Repository::new_unchecked(html::spec())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_spec_is_valid() {
        assert!(Repository::new(html::spec()).is_ok());
    }

    #[test]
    fn element_names_unique() {
        let mut names = std::collections::HashSet::new();
        for spec in Repository::html().specs() {
            assert!(names.insert(spec.name.as_str()), "Duplicate element: {}", spec.name);
        }
    }

    #[test]
    fn global_groups_present() {
        let repository = Repository::html();
        assert!(repository.global_attrs(HTML_GLOBAL_ATTRS).is_some());
        assert_eq!(repository.global_attrs(EXTENDS).map(<[_]>::len), Some(0));
    }

    #[test]
    fn graphics_roles_resolve() {
        let role = Repository::html().role(AriaVersion::V1_2, "graphics-document");
        assert_eq!(role.map(|r| r.generalization.clone()), Some(vec!["document".to_owned()]));
    }

    #[test]
    fn svg_elements_are_namespaced() {
        for spec in Repository::html().specs() {
            if spec.name.starts_with("svg:") {
                assert_eq!(spec.namespace, Some(NamespaceUri::Svg), "{}", spec.name);
            }
        }
    }

    #[test]
    fn content_models_group_by_category() {
        let models = &Repository::html().defs().content_models;
        let interactive = models.get("#interactive").cloned().unwrap_or_default();
        assert!(interactive.contains(&"button".to_owned()));
        assert!(interactive.contains(&"a".to_owned()));
    }
}
