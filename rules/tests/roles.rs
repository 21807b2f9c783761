//! Implicit, computed, and permitted roles of built-in elements.

use ml_rules::{ComputedRole, RoleComputationError, Semantics, SemanticsConfig};
use ml_spec::{AriaVersion, ElementSpec, MlSpec, PermittedRoles, Repository};
use mlint_test_helpers::FakeElement;

fn implicit(element: &FakeElement) -> Option<&'static str> {
    Semantics::html().get_implicit_role(element)
}

fn permitted(element: &FakeElement) -> PermittedRoles {
    Semantics::html().get_permitted_roles(element)
}

#[test]
fn implicit_role_follows_first_matching_condition() {
    assert_eq!(implicit(&FakeElement::new("a")), Some("generic"));
    assert_eq!(implicit(&FakeElement::new("a").attr("href", "/")), Some("link"));
    assert_eq!(implicit(&FakeElement::new("input")), Some("textbox"));
    assert_eq!(implicit(&FakeElement::new("input").attr("type", "checkbox")), Some("checkbox"));
    assert_eq!(implicit(&FakeElement::new("input").attr("type", "range")), Some("slider"));
    assert_eq!(implicit(&FakeElement::new("input").attr("list", "suggestions")), Some("combobox"));
    assert_eq!(implicit(&FakeElement::new("img").attr("alt", "")), Some("presentation"));
    assert_eq!(implicit(&FakeElement::new("img").attr("alt", "logo")), Some("img"));
}

#[test]
fn implicit_role_may_be_absent() {
    assert_eq!(implicit(&FakeElement::new("section")), None);
    assert_eq!(implicit(&FakeElement::new("section").attr("aria-label", "News")), Some("region"));
    assert_eq!(implicit(&FakeElement::new("x-widget")), None);
}

#[test]
fn explicit_role_takes_first_token() {
    let element = FakeElement::new("div").attr("role", "  Button  link ");
    assert_eq!(
        Semantics::html().get_computed_role(&element),
        Some(ComputedRole { name: "button".into(), is_implicit: false })
    );
}

#[test]
fn blank_role_attribute_is_explicit_and_empty() {
    let element = FakeElement::new("div").attr("role", "   ");
    assert_eq!(
        Semantics::html().get_computed_role(&element),
        Some(ComputedRole { name: String::new(), is_implicit: false })
    );
}

#[test]
fn computed_role_falls_back_to_implicit() {
    assert_eq!(
        Semantics::html().get_computed_role(&FakeElement::new("button")),
        Some(ComputedRole { name: "button".into(), is_implicit: true })
    );
    assert_eq!(Semantics::html().get_computed_role(&FakeElement::new("section")), None);
}

#[test]
fn permitted_roles_start_with_implicit_role() {
    let roles = permitted(&FakeElement::new("a").attr("href", "/"));
    match roles {
        PermittedRoles::RoleList(list) => {
            assert_eq!(list.first().map(String::as_str), Some("link"));
            assert!(list.iter().any(|role| role == "tab"));
        }
        other => unreachable!("expected a role list, got {other:?}"),
    }
}

#[test]
fn conditional_permitted_roles_win() {
    assert_eq!(permitted(&FakeElement::new("a")), PermittedRoles::AnyRole);
    assert_eq!(
        permitted(&FakeElement::new("input").attr("type", "radio")),
        PermittedRoles::list(&["radio", "menuitemradio"])
    );
}

#[test]
fn no_role_becomes_implicit_only() {
    assert_eq!(
        permitted(&FakeElement::new("input").attr("type", "range")),
        PermittedRoles::list(&["slider"])
    );
    assert_eq!(permitted(&FakeElement::new("svg:title")), PermittedRoles::NoRole);
}

#[test]
fn missing_permitted_roles_allow_anything() {
    let data = MlSpec {
        specs: vec![ElementSpec::new("foo")],
        ..MlSpec::default()
    };
    let repository = Repository::new(data).unwrap_or_else(|err| unreachable!("{err}"));
    let semantics = Semantics::new(&repository, SemanticsConfig::default());
    assert_eq!(semantics.get_permitted_roles(&FakeElement::new("foo")), PermittedRoles::AnyRole);
    assert_eq!(semantics.get_permitted_roles(&FakeElement::new("bar")), PermittedRoles::AnyRole);
}

#[test]
fn verify_accepts_permitted_and_implicit_roles() {
    let semantics = Semantics::html();
    let tab = FakeElement::new("button").attr("role", "tab");
    assert_eq!(
        semantics.verify_computed_role(&tab),
        Ok(Some(ComputedRole { name: "tab".into(), is_implicit: false }))
    );
    assert!(matches!(semantics.verify_computed_role(&FakeElement::new("p")), Ok(Some(_))));
    assert_eq!(semantics.verify_computed_role(&FakeElement::new("section")), Ok(None));
}

#[test]
fn verify_rejects_bad_roles() {
    let semantics = Semantics::html();
    assert_eq!(
        semantics.verify_computed_role(&FakeElement::new("div").attr("role", "buton")),
        Err(RoleComputationError::RoleNoExists { role: "buton".into() })
    );
    assert_eq!(
        semantics.verify_computed_role(&FakeElement::new("div").attr("role", "widget")),
        Err(RoleComputationError::Abstract { role: "widget".into() })
    );
    assert_eq!(
        semantics.verify_computed_role(&FakeElement::new("button").attr("role", "heading")),
        Err(RoleComputationError::NoPermitted { role: "heading".into(), element: "button".into() })
    );
}

#[test]
fn aria_version_changes_role_lookups() {
    let config = SemanticsConfig::with_aria_version(AriaVersion::V1_1);
    let v1_1 = Semantics::new(Repository::html(), config);
    assert_eq!(v1_1.get_role_spec("generic"), None);
    assert!(Semantics::html().get_role_spec("generic").is_some());
    assert!(v1_1.get_role_spec("button").is_some());
}

#[test]
fn role_spec_carries_owned_properties() {
    let button = Semantics::html().get_role_spec("button");
    let props: Vec<&str> = button
        .as_ref()
        .map(|spec| spec.states_and_props.iter().map(|p| p.name.as_str()).collect())
        .unwrap_or_default();
    assert!(props.contains(&"aria-pressed"));
    let supers: Vec<&str> = button
        .map(|spec| spec.super_class_roles.iter().map(|r| r.name.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(supers, ["command", "widget", "roletype"]);
}
