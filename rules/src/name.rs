//! Element-name helpers: namespace prefixes and custom element names.

use ml_spec::NamespaceUri;

/// Returns true if `name` contains a namespace prefix: an ASCII letter, a
/// colon, and another ASCII letter (`svg:circle`, `xlink:href`).
#[must_use]
pub fn has_namespace_prefix(name: &str) -> bool {
    name.as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_alphabetic() && w[1] == b':' && w[2].is_ascii_alphabetic())
}

/// Splits a qualified name into its local name and namespace.
///
/// Unknown or absent prefixes resolve to HTML with the name unchanged.
#[must_use]
pub fn resolve_namespace(name: &str) -> (&str, NamespaceUri) {
    match name.split_once(':') {
        Some(("svg", local)) => (local, NamespaceUri::Svg),
        Some(("mml" | "math", local)) => (local, NamespaceUri::MathMl),
        Some(("xlink", local)) => (local, NamespaceUri::XLink),
        _ => (name, NamespaceUri::Html),
    }
}

/// `PCENChar` of the custom-element name production.
fn is_pcen_char(c: char) -> bool {
    matches!(c,
        '-' | '.' | '0'..='9' | '_' | 'a'..='z' | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Returns true if `name` is a `PotentialCustomElementName`:
/// `[a-z] (PCENChar)* '-' (PCENChar)*`.
///
/// Matched ASCII case-insensitively: the HTML parser accepts upper-case
/// names even though custom elements cannot define them.
///
/// See <https://html.spec.whatwg.org/multipage/custom-elements.html#prod-potentialcustomelementname>.
#[must_use]
pub fn is_potential_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars().map(|c| c.to_ascii_lowercase());
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    let mut has_hyphen = false;
    for c in chars {
        if !is_pcen_char(c) {
            return false;
        }
        has_hyphen |= c == '-';
    }
    has_hyphen
}
