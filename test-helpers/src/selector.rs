//! A minimal CSS selector matcher.
//!
//! Supports selector lists of compound selectors made of an optional type
//! selector (or `*`), attribute presence and equality selectors with
//! optional quotes, and `:not()` over a compound selector. Combinators are
//! not supported; unparseable selectors never match.

use crate::FakeElement;

enum Simple {
    Type(String),
    Has(String),
    Equals(String, String),
    Not(Vec<Simple>),
}

pub(crate) fn matches(element: &FakeElement, selector: &str) -> bool {
    split_list(selector).into_iter().any(|compound| {
        parse_compound(compound.trim())
            .is_some_and(|simples| simples.iter().all(|simple| matches_simple(element, simple)))
    })
}

fn matches_simple(element: &FakeElement, simple: &Simple) -> bool {
    match simple {
        Simple::Type(name) => name == "*" || name.eq_ignore_ascii_case(&element.node.name),
        Simple::Has(attr) => element.get_attr(attr).is_some(),
        Simple::Equals(attr, value) => element.get_attr(attr) == Some(value.as_str()),
        Simple::Not(inner) => !inner.iter().all(|simple| matches_simple(element, simple)),
    }
}

/// Splits on top-level commas.
fn split_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let (mut depth, mut start) = (0usize, 0usize);
    let mut quote: Option<char> = None;
    for (index, c) in selector.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&selector[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

fn parse_compound(compound: &str) -> Option<Vec<Simple>> {
    if compound.is_empty() {
        return None;
    }
    let mut simples = Vec::new();
    let type_end = compound.find(&['[', ':'][..]).unwrap_or(compound.len());
    if type_end > 0 {
        simples.push(Simple::Type(compound[..type_end].to_owned()));
    }

    let mut rest = &compound[type_end..];
    while !rest.is_empty() {
        if let Some(inner) = rest.strip_prefix('[') {
            let end = inner.find(']')?;
            simples.push(parse_attribute(&inner[..end])?);
            rest = &inner[end + 1..];
        } else if let Some(inner) = rest.strip_prefix(":not(") {
            let end = closing_paren(inner)?;
            simples.push(Simple::Not(parse_compound(inner[..end].trim())?));
            rest = &inner[end + 1..];
        } else {
            return None;
        }
    }
    Some(simples)
}

fn parse_attribute(body: &str) -> Option<Simple> {
    match body.split_once('=') {
        None => Some(Simple::Has(body.trim().to_owned())),
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
                .unwrap_or(value);
            Some(Simple::Equals(name.trim().to_owned(), unquoted.to_owned()))
        }
    }
}

fn closing_paren(inner: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(index),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::FakeElement;
    use ml_rules::Element;

    #[test]
    fn attribute_selectors() {
        let input = FakeElement::new("input").attr("type", "checkbox");
        assert!(input.matches("[type=checkbox]"));
        assert!(input.matches("input[type='checkbox']"));
        assert!(input.matches("[type]"));
        assert!(!input.matches("[type=radio]"));
        assert!(input.matches("[type=radio], [type=checkbox]"));
        assert!(!input.matches("select"));
    }

    #[test]
    fn negation() {
        let a = FakeElement::new("a");
        assert!(a.matches(":not([href])"));
        let select = FakeElement::new("select").attr("size", "0");
        assert!(!select.matches("[size]:not([size='0'])"));
        assert!(FakeElement::new("select").attr("size", "4").matches("[size]:not([size='0'])"));
    }

    #[test]
    fn empty_value() {
        assert!(FakeElement::new("img").attr("alt", "").matches("[alt='']"));
        assert!(!FakeElement::new("img").matches("[alt='']"));
    }
}
