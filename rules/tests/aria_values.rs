//! ARIA value checks, including round-trip properties of the numeric
//! types.

use ml_rules::{check_aria_value, Semantics, SemanticsConfig};
use ml_spec::{AriaValueType, AriaVersion, Repository};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_integer_in_canonical_form_is_valid(n in any::<i64>()) {
        prop_assert!(check_aria_value(AriaValueType::Integer, &n.to_string(), &[]));
    }

    #[test]
    fn zero_padded_integers_are_invalid(n in 0i64..1_000_000) {
        let padded = format!("0{n}");
        prop_assert!(!check_aria_value(AriaValueType::Integer, &padded, &[]));
    }

    #[test]
    fn every_finite_number_in_shortest_form_is_valid(
        n in prop::num::f64::NORMAL | prop::num::f64::ZERO
    ) {
        let text = if n == 0.0 { "0".to_owned() } else { n.to_string() };
        prop_assert!(check_aria_value(AriaValueType::Number, &text, &[]));
    }

    #[test]
    fn strings_are_unconstrained(value in ".*") {
        prop_assert!(check_aria_value(AriaValueType::String, &value, &[]));
    }
}

#[test]
fn live_region_tokens() {
    let semantics = Semantics::html();
    assert!(semantics.check_aria("aria-live", "polite", None).is_valid);
    assert!(!semantics.check_aria("aria-live", "loud", None).is_valid);
    assert!(semantics.check_aria("aria-relevant", "additions text", None).is_valid);
    assert!(!semantics.check_aria("aria-relevant", "additions nonsense", None).is_valid);
}

#[test]
fn numeric_properties() {
    let semantics = Semantics::html();
    assert!(semantics.check_aria("aria-level", "2", None).is_valid);
    assert!(!semantics.check_aria("aria-level", "02", None).is_valid);
    assert!(semantics.check_aria("aria-valuenow", "0.5", None).is_valid);
    assert!(!semantics.check_aria("aria-valuenow", "half", None).is_valid);
}

#[test]
fn check_reports_property_and_type() {
    let check = Semantics::html().check_aria("aria-pressed", "mixed", Some("button"));
    assert!(check.is_valid);
    assert_eq!(check.value_type, Some(AriaValueType::Tristate));
    assert_eq!(check.property.map(|p| p.name.as_str()), Some("aria-pressed"));
}

#[test]
fn version_selects_property_table() {
    let config = SemanticsConfig::with_aria_version(AriaVersion::V1_1);
    let v1_1 = Semantics::new(Repository::html(), config);
    assert!(v1_1.check_aria("aria-hidden", "true", None).property.is_some());
}
