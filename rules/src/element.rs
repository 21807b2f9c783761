//! Collaborator interfaces: the live element, the HTML attribute checker,
//! and the message translator.
//!
//! The resolution core never parses markup or matches selectors itself.
//! The markup AST implements [`Element`]; the rule engine supplies an
//! [`AttrChecker`] and a [`Translator`].

use ml_spec::Attribute;
use serde::Serialize;

/// A live element node of the markup AST.
pub trait Element: Sized {
    /// Qualified node name as used by the spec (`div`, `svg:circle`).
    fn node_name(&self) -> &str;

    /// Returns true if the element matches the selector list.
    fn matches(&self, selector: &str) -> bool;

    /// Nearest ancestor that is an element node, skipping documents and
    /// fragments.
    fn parent_element(&self) -> Option<Self>;

    /// Potential value of the first `name` attribute token, if present.
    fn attribute_value(&self, name: &str) -> Option<String>;

    /// Returns true if the element carries a dynamic attribute spread
    /// (`{...props}`), which may supply any attribute at runtime.
    fn has_spread_attr(&self) -> bool;
}

/// Category of an invalid attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidType {
    /// The attribute does not exist in this context.
    NonExistent,
    /// The value does not satisfy the attribute's type.
    InvalidValue,
}

/// Why an attribute is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidReport {
    /// Invalidity category.
    pub invalid_type: InvalidType,
    /// Localized message.
    pub message: String,
}

impl InvalidReport {
    /// An attribute that does not exist in this context.
    #[must_use]
    pub fn non_existent(message: impl Into<String>) -> Self {
        Self {
            invalid_type: InvalidType::NonExistent,
            message: message.into(),
        }
    }

    /// A value that does not satisfy its type.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self {
            invalid_type: InvalidType::InvalidValue,
            message: message.into(),
        }
    }
}

/// Type-specific syntax checking of HTML attribute values (URL, color,
/// date, ...). ARIA value types are checked by [`crate::aria`] instead.
pub trait AttrChecker {
    /// Checks `value` against `spec`. `None` means valid.
    fn check(
        &self,
        name: &str,
        value: &str,
        is_spread: bool,
        spec: Option<&Attribute>,
    ) -> Option<InvalidReport>;
}

impl<F> AttrChecker for F
where
    F: Fn(&str, &str, bool, Option<&Attribute>) -> Option<InvalidReport>,
{
    fn check(
        &self,
        name: &str,
        value: &str,
        is_spread: bool,
        spec: Option<&Attribute>,
    ) -> Option<InvalidReport> {
        self(name, value, is_spread, spec)
    }
}

/// Produces localized messages from a template and positional arguments
/// (`{0}`, `{1}`, ...).
pub trait Translator {
    /// Formats `template` with `args`.
    fn translate(&self, template: &str, args: &[&str]) -> String;
}
