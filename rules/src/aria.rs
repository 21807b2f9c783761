//! ARIA attribute value validation.

use ml_spec::{AriaProperty, AriaValueType, AriaVersion, Repository};

/// Result of checking an `aria-*` attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaCheck<'r> {
    /// The property definition, absent for unknown attributes.
    pub property: Option<&'r AriaProperty>,
    /// The value type the value was checked against.
    pub value_type: Option<AriaValueType>,
    /// The checked value.
    pub current_value: String,
    /// Whether the value is valid. Unknown attributes are reported valid.
    pub is_valid: bool,
}

/// Checks an `aria-*` attribute value against its property definition.
///
/// When the property defines role-conditional value types, the first one
/// listing `role` replaces the base type.
#[must_use]
pub fn check_aria<'r>(
    repository: &'r Repository,
    version: AriaVersion,
    attr_name: &str,
    current_value: &str,
    role: Option<&str>,
) -> AriaCheck<'r> {
    let Some(property) = repository.aria_property(version, attr_name) else {
        tracing::debug!(attr = attr_name, %version, "not an ARIA property");
        return AriaCheck {
            property: None,
            value_type: None,
            current_value: current_value.to_owned(),
            is_valid: true,
        };
    };

    let value_type = role
        .and_then(|role| {
            property
                .conditional_value
                .iter()
                .find(|conditional| conditional.role.iter().any(|r| r == role))
        })
        .map_or(property.value, |conditional| conditional.value);

    let is_valid = check_aria_value(value_type, current_value, &property.enum_values);
    tracing::trace!(
        attr = attr_name,
        value = current_value,
        value_type = value_type.as_str(),
        is_valid,
        "checked ARIA value"
    );
    AriaCheck {
        property: Some(property),
        value_type: Some(value_type),
        current_value: current_value.to_owned(),
        is_valid,
    }
}

/// Checks `value` against an ARIA value type.
///
/// `enum_values` constrains the `token` and `token list` types. Types
/// without a syntax of their own, and unknown types, accept every value.
///
/// Canonical numbers are the shortest round-trip decimal with no exponent,
/// and integers are `i64`, so `1000000000000000000000`, `0.0000001` and
/// `9007199254740993` (as an integer) are accepted.
#[must_use]
pub fn check_aria_value(value_type: AriaValueType, value: &str, enum_values: &[String]) -> bool {
    match value_type {
        AriaValueType::Token => enum_values.iter().any(|v| v == value),
        AriaValueType::TokenList => split_tokens(value)
            .into_iter()
            .map(str::trim)
            .all(|token| enum_values.iter().any(|v| v == token)),
        AriaValueType::TrueFalse => matches!(value, "true" | "false"),
        AriaValueType::Tristate => matches!(value, "true" | "false" | "mixed" | "undefined"),
        AriaValueType::TrueFalseUndefined => matches!(value, "true" | "false" | "undefined"),
        AriaValueType::Integer => is_canonical_integer(value),
        AriaValueType::Number => is_canonical_number(value),
        AriaValueType::IdReference
        | AriaValueType::IdReferenceList
        | AriaValueType::String
        | AriaValueType::Uri
        | AriaValueType::Other => true,
    }
}

/// Splits on whitespace runs. Leading or trailing whitespace yields an
/// empty first or last piece.
fn split_tokens(value: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = value;
    loop {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                pieces.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                pieces.push(rest);
                return pieces;
            }
        }
    }
}

fn is_canonical_integer(value: &str) -> bool {
    value
        .parse::<i64>()
        .is_ok_and(|n| n.to_string() == value)
}

fn is_canonical_number(value: &str) -> bool {
    value
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && format_number(n) == value)
}

/// Shortest round-trip decimal form; negative zero prints as `0`.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enums(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn token() {
        let values = enums(&["polite", "assertive", "off"]);
        assert!(check_aria_value(AriaValueType::Token, "polite", &values));
        assert!(!check_aria_value(AriaValueType::Token, "Polite", &values));
        assert!(!check_aria_value(AriaValueType::Token, "", &values));
    }

    #[test]
    fn token_list() {
        let values = enums(&["additions", "removals", "text", "all"]);
        assert!(check_aria_value(AriaValueType::TokenList, "additions text", &values));
        assert!(check_aria_value(AriaValueType::TokenList, "additions \t text", &values));
        assert!(!check_aria_value(AriaValueType::TokenList, "additions foo", &values));
        assert!(!check_aria_value(AriaValueType::TokenList, "", &values));
        assert!(!check_aria_value(AriaValueType::TokenList, " text", &values));
    }

    #[test]
    fn split_matches_whitespace_runs() {
        assert_eq!(split_tokens("a  b"), ["a", "b"]);
        assert_eq!(split_tokens(" a"), ["", "a"]);
        assert_eq!(split_tokens("a "), ["a", ""]);
        assert_eq!(split_tokens(""), [""]);
    }

    #[test]
    fn booleans() {
        assert!(check_aria_value(AriaValueType::TrueFalse, "false", &[]));
        assert!(!check_aria_value(AriaValueType::TrueFalse, "undefined", &[]));
        assert!(!check_aria_value(AriaValueType::TrueFalse, "TRUE", &[]));
        assert!(check_aria_value(AriaValueType::Tristate, "mixed", &[]));
        assert!(check_aria_value(AriaValueType::Tristate, "undefined", &[]));
        assert!(check_aria_value(AriaValueType::TrueFalseUndefined, "undefined", &[]));
        assert!(!check_aria_value(AriaValueType::TrueFalseUndefined, "mixed", &[]));
    }

    #[test]
    fn integer() {
        assert!(check_aria_value(AriaValueType::Integer, "42", &[]));
        assert!(check_aria_value(AriaValueType::Integer, "-3", &[]));
        assert!(!check_aria_value(AriaValueType::Integer, "042", &[]));
        assert!(!check_aria_value(AriaValueType::Integer, "+1", &[]));
        assert!(!check_aria_value(AriaValueType::Integer, "1.5", &[]));
        assert!(!check_aria_value(AriaValueType::Integer, "-0", &[]));
        assert!(!check_aria_value(AriaValueType::Integer, "", &[]));
    }

    #[test]
    fn number() {
        assert!(check_aria_value(AriaValueType::Number, "1.5", &[]));
        assert!(check_aria_value(AriaValueType::Number, "-2", &[]));
        assert!(check_aria_value(AriaValueType::Number, "0", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "1.50", &[]));
        assert!(!check_aria_value(AriaValueType::Number, ".5", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "1e3", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "NaN", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "inf", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "-0", &[]));
    }

    #[test]
    fn extreme_values_use_positional_form() {
        assert!(check_aria_value(AriaValueType::Number, "1000000000000000000000", &[]));
        assert!(check_aria_value(AriaValueType::Number, "0.0000001", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "1e21", &[]));
        assert!(check_aria_value(AriaValueType::Integer, "9007199254740993", &[]));
        assert!(!check_aria_value(AriaValueType::Number, "9007199254740993", &[]));
    }

    #[test]
    fn unconstrained_types_accept_anything() {
        for value_type in [
            AriaValueType::IdReference,
            AriaValueType::IdReferenceList,
            AriaValueType::String,
            AriaValueType::Uri,
            AriaValueType::Other,
        ] {
            assert!(check_aria_value(value_type, "  anything at all ", &[]));
        }
    }

    #[test]
    fn unknown_property_is_valid() {
        let check = check_aria(Repository::html(), AriaVersion::V1_2, "aria-nonsense", "x", None);
        assert!(check.is_valid);
        assert_eq!(check.property, None);
        assert_eq!(check.current_value, "x");
    }

    #[test]
    fn conditional_value_type_follows_role() {
        let repo = Repository::html();
        let on_checkbox =
            check_aria(repo, AriaVersion::V1_2, "aria-checked", "mixed", Some("checkbox"));
        assert!(on_checkbox.is_valid);
        let on_radio = check_aria(repo, AriaVersion::V1_2, "aria-checked", "mixed", Some("radio"));
        assert_eq!(on_radio.value_type, Some(AriaValueType::TrueFalseUndefined));
        assert!(!on_radio.is_valid);
    }
}
