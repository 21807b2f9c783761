//! Semantic resolution over the mlint markup spec.
//!
//! Given a live element of the markup AST, this crate answers the questions
//! lint rules ask: which attributes the element may carry and whether a
//! value is acceptable, which ARIA role it has and which roles it may
//! declare, and whether an `aria-*` value fits its type.
//!
//! The AST and the HTML attribute-type checker stay outside: the AST
//! implements [`Element`], the rule engine supplies an [`AttrChecker`] and a
//! [`Translator`].
//!
//! # Usage
//!
//! ```
//! let semantics = ml_rules::Semantics::html();
//! let attrs = semantics.get_attr_specs("a").unwrap_or_default();
//! assert!(attrs.iter().any(|attr| attr.name == "href"));
//!
//! let check = semantics.check_aria("aria-hidden", "maybe", None);
//! assert!(!check.is_valid);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod aria;
pub mod attr_specs;
pub mod condition;
pub mod config;
pub mod element;
pub mod name;
pub mod pattern;
pub mod roles;
pub mod semantics;
pub mod validate;

pub use aria::{check_aria, check_aria_value, AriaCheck};
pub use attr_specs::get_attr_specs;
pub use condition::attr_matches;
pub use config::SemanticsConfig;
pub use element::{AttrChecker, Element, InvalidReport, InvalidType, Translator};
pub use name::{is_potential_custom_element_name, resolve_namespace};
pub use pattern::{match_pattern, Pattern, PatternError};
pub use roles::{
    get_computed_role, get_implicit_role, get_permitted_roles, get_role_spec, merge_role_list,
    super_class_roles, verify_computed_role, ComputedRole, RoleComputationError, RoleSpec,
};
pub use semantics::Semantics;
pub use validate::is_valid_attr;
