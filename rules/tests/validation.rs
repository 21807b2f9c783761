//! Attribute validation with fake collaborators.

use ml_rules::{is_valid_attr, AttrChecker, InvalidReport, InvalidType, Semantics};
use ml_spec::{AttrCondition, Attribute};
use mlint_test_helpers::{FakeElement, FixedChecker, PlainTranslator, RecordingChecker};

fn download_spec() -> Vec<Attribute> {
    vec![Attribute::new("download").typed("Any").when(AttrCondition::self_matches("[href]"))]
}

fn check_download(
    checker: &impl AttrChecker,
    value: &str,
    is_dynamic_value: bool,
    element: &FakeElement,
) -> Option<InvalidReport> {
    let specs = download_spec();
    is_valid_attr(checker, &PlainTranslator, "download", value, is_dynamic_value, element, &specs)
}

fn html_check(name: &str, value: &str, element: &FakeElement) -> Option<InvalidReport> {
    Semantics::html().is_valid_attr(
        &FixedChecker::valid(),
        &PlainTranslator,
        name,
        value,
        false,
        element,
    )
}

#[test]
fn unmet_condition_is_non_existent() {
    let a = FakeElement::new("a");
    let report = check_download(&FixedChecker::valid(), "", false, &a);
    assert_eq!(
        report,
        Some(InvalidReport {
            invalid_type: InvalidType::NonExistent,
            message: "the \"download\" attribute is disallowed".into(),
        })
    );
}

#[test]
fn met_condition_is_valid() {
    let a = FakeElement::new("a").attr("href", "/file.pdf");
    let report = check_download(&FixedChecker::valid(), "", false, &a);
    assert_eq!(report, None);
}

#[test]
fn spread_suppresses_condition() {
    let a = FakeElement::new("a").spread();
    let report = check_download(&FixedChecker::valid(), "", false, &a);
    assert_eq!(report, None);
}

#[test]
fn checker_verdict_wins_over_condition() {
    let a = FakeElement::new("a");
    let checker = FixedChecker::invalid_value("bad value");
    let report = check_download(&checker, "x", false, &a);
    assert_eq!(report, Some(InvalidReport::invalid_value("bad value")));
}

#[test]
fn dynamic_value_drops_value_errors_only() {
    let checker = FixedChecker::invalid_value("bad value");
    let a = FakeElement::new("a").attr("href", "/");
    assert_eq!(check_download(&checker, "{x}", true, &a), None);

    let non_existent = FixedChecker(Some(InvalidReport::non_existent("unknown")));
    assert_eq!(
        check_download(&non_existent, "{x}", true, &a),
        Some(InvalidReport::non_existent("unknown"))
    );

    let bare = FakeElement::new("a");
    assert!(check_download(&FixedChecker::valid(), "{x}", true, &bare).is_some());
}

#[test]
fn checker_receives_matching_spec() {
    let checker = RecordingChecker::default();
    let a = FakeElement::new("a").attr("href", "/");
    let _ = check_download(&checker, "report.pdf", false, &a);
    let _ = is_valid_attr(&checker, &PlainTranslator, "data-x", "1", false, &a, &download_spec());

    let calls = checker.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].name, "download");
    assert_eq!(calls[0].value, "report.pdf");
    assert!(!calls[0].is_spread);
    assert_eq!(calls[0].spec.as_ref().map(|spec| spec.name.as_str()), Some("download"));
    assert_eq!(calls[1].spec, None);
}

#[test]
fn closures_are_checkers() {
    let reject_empty = |_: &str, value: &str, _: bool, _: Option<&Attribute>| {
        value.is_empty().then(|| InvalidReport::invalid_value("empty"))
    };
    let p = FakeElement::new("p");
    assert!(is_valid_attr(&reject_empty, &PlainTranslator, "title", "", false, &p, &[]).is_some());
    assert!(is_valid_attr(&reject_empty, &PlainTranslator, "title", "x", false, &p, &[]).is_none());
}

#[test]
fn facade_resolves_specs_from_element() {
    let checkbox = FakeElement::new("input").attr("type", "checkbox");
    let text = FakeElement::new("input").attr("type", "text");
    assert_eq!(html_check("checked", "", &checkbox), None);
    assert_eq!(
        html_check("checked", "", &text).map(|report| report.invalid_type),
        Some(InvalidType::NonExistent)
    );

    let ol = FakeElement::new("ol");
    let numbered = FakeElement::new("li").within(&ol);
    let bulleted = FakeElement::new("li").within(&FakeElement::new("ul"));
    assert_eq!(html_check("value", "3", &numbered), None);
    assert!(html_check("value", "3", &bulleted).is_some());
}
