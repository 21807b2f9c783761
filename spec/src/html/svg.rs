//! SVG element specs (`svg:` qualified names).

use crate::model::{
    AttrCondition, Attribute, AttributeEntry, ElementSpec, ImplicitRole, PermittedRoles,
    PermittedRolesSpec,
};

use super::global_attrs::{
    ARIA_ATTRS, GLOBAL_EVENT_ATTRS, SVG_CORE_ATTRS, SVG_PRESENTATION_ATTRS, XLINK_ATTRS,
};

const SVG2: &str = "https://svgwg.org/svg2-draft/";

/// Returns every SVG element spec.
#[must_use]
pub fn specs() -> Vec<ElementSpec> {
    vec![
        ElementSpec::new("svg:svg")
            .cite(&format!("{SVG2}struct.html#SVGElement"))
            .categories(&["#flow", "#phrasing", "#embedded", "#palpable", "#SVGContainer"])
            .contents(&["#SVGDescriptive", "#SVGShape", "#SVGStructural"])
            .attributes(svg_attrs(vec![
                Attribute::new("viewBox").typed("ViewBox").case_sensitive().into(),
                Attribute::new("preserveAspectRatio").typed("PreserveAspectRatio").into(),
                Attribute::new("x").typed("LengthPercentage").into(),
                Attribute::new("y").typed("LengthPercentage").into(),
                Attribute::new("width").typed("LengthPercentage").into(),
                Attribute::new("height").typed("LengthPercentage").into(),
                Attribute::new("version").typed("Any").obsolete().into(),
                Attribute::new("baseProfile").typed("Any").obsolete().into(),
            ]))
            .implicit_role(ImplicitRole::of("graphics-document"))
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::AnyRole)),
        ElementSpec::new("svg:g")
            .cite(&format!("{SVG2}struct.html#GElement"))
            .categories(&["#SVGContainer", "#SVGStructural"])
            .contents(&["#SVGDescriptive", "#SVGShape", "#SVGStructural"])
            .attributes(svg_attrs(Vec::new()))
            .implicit_role(ImplicitRole::none())
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::AnyRole)),
        ElementSpec::new("svg:circle")
            .cite(&format!("{SVG2}shapes.html#CircleElement"))
            .categories(&["#SVGShape", "#SVGGraphics"])
            .contents(&["#SVGDescriptive"])
            .attributes(svg_attrs(vec![
                Attribute::new("cx").typed("LengthPercentage").into(),
                Attribute::new("cy").typed("LengthPercentage").into(),
                Attribute::new("r").typed("LengthPercentage").into(),
                Attribute::new("pathLength").typed("Number").into(),
            ]))
            .implicit_role(ImplicitRole::of("graphics-symbol"))
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::AnyRole)),
        ElementSpec::new("svg:a")
            .cite(&format!("{SVG2}linking.html#AElement"))
            .categories(&["#SVGContainer", "#SVGStructural"])
            .contents(&["#transparent"])
            .attributes(svg_attrs(vec![
                Attribute::new("href").typed("URL").into(),
                XLINK_ATTRS.into(),
                Attribute::new("target").typed("NavigableTargetNameOrKeyword").into(),
                Attribute::new("download")
                    .typed("Any")
                    .when(AttrCondition::self_matches("[href]"))
                    .into(),
                Attribute::new("rel").typed("LinkTypeList").into(),
            ]))
            .implicit_role(ImplicitRole::of("group").when("[href]", "link"))
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::AnyRole)),
        ElementSpec::new("svg:text")
            .cite(&format!("{SVG2}text.html#TextElement"))
            .categories(&["#SVGGraphics", "#SVGTextContent"])
            .contents(&["#text", "#SVGDescriptive"])
            .attributes(svg_attrs(vec![
                Attribute::new("x").typed("Any").into(),
                Attribute::new("y").typed("Any").into(),
                Attribute::new("lengthAdjust").typed("Any").into(),
            ]))
            .implicit_role(ImplicitRole::of("group"))
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::AnyRole)),
        ElementSpec::new("svg:title")
            .cite(&format!("{SVG2}struct.html#TitleElement"))
            .categories(&["#SVGDescriptive"])
            .contents(&["#text"])
            .attributes(vec![SVG_CORE_ATTRS.into()])
            .permitted_roles(PermittedRolesSpec::new(PermittedRoles::NoRole)),
    ]
}

fn svg_attrs(own: Vec<AttributeEntry>) -> Vec<AttributeEntry> {
    let mut entries: Vec<AttributeEntry> = vec![
        SVG_CORE_ATTRS.into(),
        SVG_PRESENTATION_ATTRS.into(),
        ARIA_ATTRS.into(),
        GLOBAL_EVENT_ATTRS.into(),
    ];
    entries.extend(own);
    entries
}
