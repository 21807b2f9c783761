//! The built-in HTML Living Standard, SVG 2, and WAI-ARIA knowledge base.
//!
//! Each sub-module encodes one part of the spec document as Rust data; see
//! [`crate::Repository::html`] for the assembled repository.

pub mod aria;
pub mod elements;
pub mod global_attrs;
pub mod svg;

use std::collections::BTreeMap;

use crate::model::{ElementSpec, MlSpec, SpecDefs};

/// Assembles the complete built-in spec document.
#[must_use]
pub fn spec() -> MlSpec {
    let mut specs = elements::specs();
    specs.extend(svg::specs());
    let content_models = content_models(&specs);
    MlSpec {
        cites: vec![
            "https://html.spec.whatwg.org/multipage/".to_owned(),
            "https://www.w3.org/TR/wai-aria-1.2/".to_owned(),
            "https://www.w3.org/TR/wai-aria-1.1/".to_owned(),
            "https://www.w3.org/TR/graphics-aria-1.0/".to_owned(),
            "https://www.w3.org/TR/html-aria/".to_owned(),
            "https://svgwg.org/svg2-draft/".to_owned(),
        ],
        def: SpecDefs {
            global_attrs: global_attrs::groups(),
            aria: aria::defs(),
            content_models,
        },
        specs,
    }
}

/// Groups element names by content-model category.
fn content_models(specs: &[ElementSpec]) -> BTreeMap<String, Vec<String>> {
    let mut models: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for spec in specs {
        for category in &spec.categories {
            models
                .entry(category.clone())
                .or_default()
                .push(spec.name.clone());
        }
    }
    models
}
