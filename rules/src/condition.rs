//! Evaluation of attribute and role conditions against a live element.

use ml_spec::AttrCondition;

use crate::element::Element;

/// Returns true if `element` matches `selector`.
pub fn matches_selector<E: Element>(element: &E, selector: &str) -> bool {
    let matched = element.matches(selector);
    tracing::trace!(element = element.node_name(), selector, matched, "selector");
    matched
}

/// Returns true if one of `element`'s element ancestors matches `selector`.
pub fn has_matching_ancestor<E: Element>(element: &E, selector: &str) -> bool {
    let mut current = element.parent_element();
    while let Some(ancestor) = current {
        if matches_selector(&ancestor, selector) {
            return true;
        }
        current = ancestor.parent_element();
    }
    false
}

/// Evaluates an attribute condition.
///
/// No condition always matches. Otherwise the `self` and `ancestor` parts
/// are OR-combined; a condition with neither part matches nothing.
pub fn attr_matches<E: Element>(element: &E, condition: Option<&AttrCondition>) -> bool {
    let Some(condition) = condition else {
        return true;
    };

    let mut matched = false;
    if let Some(selectors) = &condition.self_ {
        let selector = selectors.to_selector();
        if !selector.is_empty() {
            matched = matches_selector(element, &selector);
        }
    }
    if let Some(ancestor) = condition.ancestor.as_deref().filter(|s| !s.is_empty()) {
        if has_matching_ancestor(element, ancestor) {
            matched = true;
        }
    }
    matched
}
