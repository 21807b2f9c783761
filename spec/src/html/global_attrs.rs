//! Global-attribute groups.
//!
//! Element specs reference these groups by key from their `attributes`
//! list. `#HTMLGlobalAttrs` is spliced in for plain HTML elements carrying
//! the `#globalAttrs` token; `#extends` is the process-wide patch layer and
//! is empty in the built-in spec.

use std::collections::BTreeMap;

use crate::model::{Attribute, EXTENDS, HTML_GLOBAL_ATTRS};

/// Key of the `role` attribute group.
pub const ARIA_ATTRS: &str = "#ARIAAttrs";
/// Key of the event-handler attribute group.
pub const GLOBAL_EVENT_ATTRS: &str = "#GlobalEventAttrs";
/// Key of the SVG core attribute group.
pub const SVG_CORE_ATTRS: &str = "#SVGCoreAttrs";
/// Key of the SVG presentation attribute group.
pub const SVG_PRESENTATION_ATTRS: &str = "#SVGPresentationAttrs";
/// Key of the deprecated XLink attribute group.
pub const XLINK_ATTRS: &str = "#XLinkAttrs";

/// Returns every global-attribute group.
#[must_use]
pub fn groups() -> BTreeMap<String, Vec<Attribute>> {
    [
        (HTML_GLOBAL_ATTRS, html_global_attrs()),
        (ARIA_ATTRS, vec![Attribute::new("role").typed("RoleList")]),
        (GLOBAL_EVENT_ATTRS, event_attrs()),
        (SVG_CORE_ATTRS, svg_core_attrs()),
        (SVG_PRESENTATION_ATTRS, svg_presentation_attrs()),
        (XLINK_ATTRS, xlink_attrs()),
        (EXTENDS, Vec::new()),
    ]
    .into_iter()
    .map(|(key, attrs)| (key.to_owned(), attrs))
    .collect()
}

fn html_global_attrs() -> Vec<Attribute> {
    vec![
        Attribute::new("accesskey").typed("KeyboardShortcut"),
        Attribute::new("autocapitalize").typed("Autocapitalize"),
        Attribute::new("autofocus").typed("Boolean"),
        Attribute::new("class").typed("ClassNames"),
        Attribute::new("contenteditable").typed("ContentEditable"),
        Attribute::new("dir").typed("Dir"),
        Attribute::new("draggable").typed("TrueFalse"),
        Attribute::new("enterkeyhint").typed("EnterKeyHint"),
        Attribute::new("hidden").typed(&["Boolean", "UntilFound"][..]),
        Attribute::new("id").typed("Id").case_sensitive(),
        Attribute::new("inert").typed("Boolean"),
        Attribute::new("inputmode").typed("InputMode"),
        Attribute::new("is").typed("CustomElementName"),
        Attribute::new("itemid").typed("URL"),
        Attribute::new("itemprop").typed("ItemProp"),
        Attribute::new("itemref").typed("IdList"),
        Attribute::new("itemscope").typed("Boolean"),
        Attribute::new("itemtype").typed("URLList"),
        Attribute::new("lang").typed("BCP47"),
        Attribute::new("nonce").typed("String"),
        Attribute::new("popover").typed("Popover").experimental(),
        Attribute::new("slot").typed("String"),
        Attribute::new("spellcheck").typed("TrueFalseEmpty"),
        Attribute::new("style").typed("StyleDeclaration"),
        Attribute::new("tabindex").typed("Int"),
        Attribute::new("title").typed("Any"),
        Attribute::new("translate").typed("YesNoEmpty"),
    ]
}

fn event_attrs() -> Vec<Attribute> {
    [
        "onblur", "onchange", "onclick", "oncontextmenu", "ondblclick", "onfocus", "oninput",
        "oninvalid", "onkeydown", "onkeyup", "onload", "onmousedown", "onmouseup", "onreset",
        "onscroll", "onsubmit",
    ]
    .iter()
    .map(|name| Attribute::new(name).typed("EventHandler"))
    .collect()
}

fn svg_core_attrs() -> Vec<Attribute> {
    vec![
        Attribute::new("id").typed("Id").case_sensitive(),
        Attribute::new("lang").typed("BCP47"),
        Attribute::new("tabindex").typed("Int"),
        Attribute::new("class").typed("ClassNames"),
        Attribute::new("style").typed("StyleDeclaration"),
        Attribute::new("xml:lang").typed("BCP47").deprecated(),
        Attribute::new("xml:space").typed("XmlSpace").deprecated(),
    ]
}

fn svg_presentation_attrs() -> Vec<Attribute> {
    [
        ("fill", "Paint"),
        ("fill-opacity", "AlphaValue"),
        ("opacity", "AlphaValue"),
        ("stroke", "Paint"),
        ("stroke-width", "LengthPercentage"),
        ("transform", "TransformList"),
        ("visibility", "Visibility"),
    ]
    .iter()
    .map(|(name, type_)| Attribute::new(name).typed(*type_))
    .collect()
}

fn xlink_attrs() -> Vec<Attribute> {
    vec![
        Attribute::new("xlink:href").typed("URL").deprecated(),
        Attribute::new("xlink:title").typed("Any").deprecated(),
    ]
}
