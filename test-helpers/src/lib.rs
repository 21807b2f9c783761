//! Test doubles for the collaborators of `ml_rules`.
//!
//! - [`FakeElement`]: an immutable element tree with a small selector
//!   matcher (type selectors, attribute selectors, `:not()`, selector lists).
//! - [`FixedChecker`] and [`RecordingChecker`]: attribute checkers.
//! - [`PlainTranslator`]: fills `{0}`, `{1}`, ... placeholders verbatim.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod selector;

use std::cell::RefCell;
use std::rc::Rc;

use ml_rules::{AttrChecker, Element, InvalidReport, Translator};
use ml_spec::Attribute;

#[derive(Debug)]
struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    spread: bool,
    is_element: bool,
    parent: Option<Rc<Node>>,
}

/// An element of a fake markup tree.
///
/// Built leaf-last: create the ancestors first, then pass them to
/// [`FakeElement::within`].
///
/// ```
/// use ml_rules::Element;
/// use mlint_test_helpers::FakeElement;
///
/// let ol = FakeElement::new("ol");
/// let li = FakeElement::new("li").attr("value", "3").within(&ol);
/// assert!(li.matches("li[value='3']"));
/// assert_eq!(li.parent_element().map(|p| p.node_name().to_owned()), Some("ol".into()));
/// ```
#[derive(Debug, Clone)]
pub struct FakeElement {
    node: Rc<Node>,
}

impl FakeElement {
    /// A detached element named `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::node(name, true)
    }

    /// A non-element node (document or fragment) that ancestor walks skip.
    #[must_use]
    pub fn fragment() -> Self {
        Self::node("#document-fragment", false)
    }

    fn node(name: &str, is_element: bool) -> Self {
        Self {
            node: Rc::new(Node {
                name: name.to_owned(),
                attrs: Vec::new(),
                spread: false,
                is_element,
                parent: None,
            }),
        }
    }

    fn edit(mut self, edit: impl FnOnce(&mut Node)) -> Self {
        match Rc::get_mut(&mut self.node) {
            Some(node) => edit(node),
            None => {
                let mut node = Node {
                    name: self.node.name.clone(),
                    attrs: self.node.attrs.clone(),
                    spread: self.node.spread,
                    is_element: self.node.is_element,
                    parent: self.node.parent.clone(),
                };
                edit(&mut node);
                self.node = Rc::new(node);
            }
        }
        self
    }

    /// Adds an attribute. Lookups are ASCII case-insensitive.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.edit(|node| node.attrs.push((name.to_owned(), value.to_owned())))
    }

    /// Marks the element as carrying a `{...props}` spread.
    #[must_use]
    pub fn spread(self) -> Self {
        self.edit(|node| node.spread = true)
    }

    /// Attaches the element under `parent`.
    #[must_use]
    pub fn within(self, parent: &FakeElement) -> Self {
        let parent = Rc::clone(&parent.node);
        self.edit(|node| node.parent = Some(parent))
    }

    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.node
            .attrs
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Element for FakeElement {
    fn node_name(&self) -> &str {
        &self.node.name
    }

    fn matches(&self, selector: &str) -> bool {
        self.node.is_element && crate::selector::matches(self, selector)
    }

    fn parent_element(&self) -> Option<Self> {
        let mut current = self.node.parent.clone();
        while let Some(node) = current {
            if node.is_element {
                return Some(Self { node });
            }
            current = node.parent.clone();
        }
        None
    }

    fn attribute_value(&self, name: &str) -> Option<String> {
        self.get_attr(name).map(str::to_owned)
    }

    fn has_spread_attr(&self) -> bool {
        self.node.spread
    }
}

/// Returns the same verdict for every attribute.
#[derive(Debug, Clone, Default)]
pub struct FixedChecker(
    /// The verdict returned for every call.
    pub Option<InvalidReport>,
);

impl FixedChecker {
    /// Accepts every value.
    #[must_use]
    pub fn valid() -> Self {
        Self(None)
    }

    /// Rejects every value with `message`.
    #[must_use]
    pub fn invalid_value(message: &str) -> Self {
        Self(Some(InvalidReport::invalid_value(message)))
    }
}

impl AttrChecker for FixedChecker {
    fn check(&self, _: &str, _: &str, _: bool, _: Option<&Attribute>) -> Option<InvalidReport> {
        self.0.clone()
    }
}

/// One recorded [`AttrChecker::check`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckCall {
    /// Attribute name.
    pub name: String,
    /// Attribute value as written.
    pub value: String,
    /// Whether the element carries a spread attribute.
    pub is_spread: bool,
    /// The resolved attribute spec, if any.
    pub spec: Option<Attribute>,
}

/// Accepts every value and records each call.
#[derive(Debug, Default)]
pub struct RecordingChecker {
    calls: RefCell<Vec<CheckCall>>,
}

impl RecordingChecker {
    /// Calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<CheckCall> {
        self.calls.borrow().clone()
    }
}

impl AttrChecker for RecordingChecker {
    fn check(
        &self,
        name: &str,
        value: &str,
        is_spread: bool,
        spec: Option<&Attribute>,
    ) -> Option<InvalidReport> {
        self.calls.borrow_mut().push(CheckCall {
            name: name.to_owned(),
            value: value.to_owned(),
            is_spread,
            spec: spec.cloned(),
        });
        None
    }
}

/// Substitutes positional placeholders without translating anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTranslator;

impl Translator for PlainTranslator {
    fn translate(&self, template: &str, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(template.to_owned(), |message, (index, arg)| {
                message.replace(&format!("{{{index}}}"), arg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translator_fills_placeholders() {
        let message = PlainTranslator.translate("{0} is {1}", &["x", "y"]);
        assert_eq!(message, "x is y");
    }

    #[test]
    fn parent_skips_fragments() {
        let div = FakeElement::new("div");
        let fragment = FakeElement::fragment().within(&div);
        let span = FakeElement::new("span").within(&fragment);
        assert_eq!(
            span.parent_element().map(|p| p.node_name().to_owned()),
            Some("div".to_owned())
        );
    }
}
