//! Resolution of the full attribute list of an element.

use ml_spec::{Attribute, AttributeEntry, Repository, EXTENDS, GLOBAL_ATTRS_REF, HTML_GLOBAL_ATTRS};

use crate::name::has_namespace_prefix;

/// Resolves the attributes an element may carry.
///
/// The list is assembled in order: the HTML global attributes (plain HTML
/// elements referencing `#globalAttrs` only), then each entry of the
/// element's `attributes` list (group references expand in place, inline
/// attributes merge over an earlier entry of the same name or append), and
/// finally the `#extends` group.
///
/// Returns `None` if the element is unknown. Resolution has no side
/// effects; the returned list is a fresh copy.
#[must_use]
pub fn get_attr_specs(qualified_name: &str, repository: &Repository) -> Option<Vec<Attribute>> {
    let Some(spec) = repository.element(qualified_name) else {
        tracing::debug!(element = qualified_name, "no element spec");
        return None;
    };

    let mut attrs: Vec<Attribute> = Vec::new();
    if !has_namespace_prefix(qualified_name) && spec.references_global_attrs() {
        if let Some(globals) = repository.global_attrs(HTML_GLOBAL_ATTRS) {
            attrs.extend_from_slice(globals);
        }
    }

    for entry in &spec.attributes {
        match entry {
            AttributeEntry::GroupRef(group) => match repository.global_attrs(group) {
                Some(group_attrs) => attrs.extend_from_slice(group_attrs),
                None if group == GLOBAL_ATTRS_REF => {}
                None => tracing::debug!(
                    element = qualified_name,
                    group = group.as_str(),
                    "skipping undefined group"
                ),
            },
            AttributeEntry::Attribute(attr) => {
                match attrs.iter_mut().find(|a| a.name == attr.name) {
                    Some(existing) => existing.merge_from(attr),
                    None => attrs.push(attr.clone()),
                }
            }
        }
    }

    if let Some(extends) = repository.global_attrs(EXTENDS) {
        attrs.extend_from_slice(extends);
    }

    tracing::trace!(element = qualified_name, count = attrs.len(), "resolved attribute specs");
    Some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_spec::{ElementSpec, MlSpec, SpecDefs};
    use std::collections::BTreeMap;

    fn repository(groups: &[(&str, Vec<Attribute>)], specs: Vec<ElementSpec>) -> Repository {
        let global_attrs: BTreeMap<String, Vec<Attribute>> = groups
            .iter()
            .map(|(key, attrs)| ((*key).to_owned(), attrs.clone()))
            .collect();
        let data = MlSpec {
            cites: Vec::new(),
            def: SpecDefs {
                global_attrs,
                ..SpecDefs::default()
            },
            specs,
        };
        Repository::new(data).unwrap_or_else(|err| unreachable!("{err}"))
    }

    fn names(attrs: &[Attribute]) -> Vec<&str> {
        attrs.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn unknown_element() {
        let repo = repository(&[], Vec::new());
        assert_eq!(get_attr_specs("x-unknown", &repo), None);
    }

    #[test]
    fn globals_then_own_then_extends() {
        let repo = repository(
            &[
                (HTML_GLOBAL_ATTRS, vec![Attribute::new("id")]),
                ("#G", vec![Attribute::new("g1")]),
                (EXTENDS, vec![Attribute::new("x-ext")]),
            ],
            vec![ElementSpec::new("foo").attributes(vec![
                GLOBAL_ATTRS_REF.into(),
                "#G".into(),
                Attribute::new("own").into(),
            ])],
        );
        let attrs = get_attr_specs("foo", &repo).unwrap_or_default();
        assert_eq!(names(&attrs), ["id", "g1", "own", "x-ext"]);
    }

    #[test]
    fn extends_entry_is_appended_without_merge() {
        let repo = repository(
            &[
                (HTML_GLOBAL_ATTRS, vec![Attribute::new("id").typed("String")]),
                (EXTENDS, vec![Attribute::new("id").deprecated()]),
            ],
            vec![ElementSpec::new("foo").attributes(vec![GLOBAL_ATTRS_REF.into()])],
        );
        let attrs = get_attr_specs("foo", &repo).unwrap_or_default();
        assert_eq!(
            attrs,
            vec![Attribute::new("id").typed("String"), Attribute::new("id").deprecated()]
        );
    }

    #[test]
    fn inline_attribute_merges_over_group_entry() {
        let repo = repository(
            &[("#G", vec![Attribute::new("href").typed("URL").deprecated()])],
            vec![ElementSpec::new("foo").attributes(vec![
                "#G".into(),
                Attribute::new("href").typed("Any").into(),
            ])],
        );
        let attrs = get_attr_specs("foo", &repo).unwrap_or_default();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].type_tags(), ["Any"]);
        assert!(attrs[0].is_deprecated());
    }

    #[test]
    fn namespaced_element_skips_html_globals() {
        let repo = repository(
            &[(HTML_GLOBAL_ATTRS, vec![Attribute::new("id")])],
            vec![ElementSpec::new("svg:foo")
                .attributes(vec![GLOBAL_ATTRS_REF.into(), Attribute::new("r").into()])],
        );
        let attrs = get_attr_specs("svg:foo", &repo).unwrap_or_default();
        assert_eq!(names(&attrs), ["r"]);
    }

    #[test]
    fn undefined_group_is_skipped() {
        let repo = repository(
            &[],
            vec![ElementSpec::new("foo")
                .attributes(vec!["#Missing".into(), Attribute::new("a").into()])],
        );
        let attrs = get_attr_specs("foo", &repo).unwrap_or_default();
        assert_eq!(names(&attrs), ["a"]);
    }

    #[test]
    fn resolution_does_not_mutate_repository() {
        let repo = repository(
            &[("#G", vec![Attribute::new("href").typed("URL")])],
            vec![ElementSpec::new("foo").attributes(vec![
                "#G".into(),
                Attribute::new("href").typed("Any").into(),
            ])],
        );
        let _ = get_attr_specs("foo", &repo);
        assert_eq!(
            repo.global_attrs("#G").map(|g| g[0].type_tags().to_vec()),
            Some(vec!["URL".to_owned()])
        );
    }
}
