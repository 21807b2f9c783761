//! Attribute validation.

use ml_spec::Attribute;

use crate::condition::attr_matches;
use crate::element::{AttrChecker, Element, InvalidReport, InvalidType, Translator};

/// Validates one attribute occurrence on `element`.
///
/// The checker runs first. If it accepts the value, an attribute whose
/// spec carries a condition the element does not satisfy is reported as
/// non-existent, unless the element has a spread attribute. Value errors on
/// dynamic (template-expression) values are dropped.
///
/// Returns `None` when the attribute is valid.
pub fn is_valid_attr<E, C, T>(
    checker: &C,
    translator: &T,
    name: &str,
    value: &str,
    is_dynamic_value: bool,
    element: &E,
    attr_specs: &[Attribute],
) -> Option<InvalidReport>
where
    E: Element,
    C: AttrChecker + ?Sized,
    T: Translator + ?Sized,
{
    let spec = attr_specs.iter().find(|attr| attr.name == name);
    let mut invalid = checker.check(name, value, false, spec);

    if invalid.is_none() {
        if let Some(condition) = spec.and_then(|spec| spec.condition.as_ref()) {
            if !element.has_spread_attr() && !attr_matches(element, Some(condition)) {
                tracing::debug!(
                    element = element.node_name(),
                    attr = name,
                    "attribute condition not met"
                );
                invalid = Some(InvalidReport::non_existent(disallowed(translator, name)));
            }
        }
    }

    let is_value_error = invalid
        .as_ref()
        .is_some_and(|report| report.invalid_type == InvalidType::InvalidValue);
    if is_dynamic_value && is_value_error {
        tracing::trace!(attr = name, "ignoring value error on dynamic value");
        return None;
    }
    invalid
}

/// `the "{name}" attribute is disallowed`, localized.
fn disallowed<T: Translator + ?Sized>(translator: &T, name: &str) -> String {
    let subject = translator.translate("the \"{0}\" {1}", &[name, "attribute"]);
    translator.translate("{0} is {1}", &[&subject, "disallowed"])
}
