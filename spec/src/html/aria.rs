//! WAI-ARIA roles, graphics roles, and states/properties.
//!
//! ARIA 1.1 is derived from 1.2 by dropping the roles 1.2 introduced.

use crate::model::{
    AriaDefs, AriaProperty, AriaPropertyKind, AriaRole, AriaSpec, AriaValueType,
    ConditionalValue, EquivalentHtmlAttr, OwnedProperty,
};

/// Roles introduced by WAI-ARIA 1.2.
pub const ADDED_IN_1_2: &[&str] = &[
    "blockquote", "caption", "code", "deletion", "emphasis", "generic", "insertion", "meter",
    "paragraph", "strong", "subscript", "superscript", "time",
];

/// Returns the ARIA definitions of every supported version.
#[must_use]
pub fn defs() -> AriaDefs {
    let v1_2 = AriaSpec {
        roles: roles(),
        graphics_roles: graphics_roles(),
        props: props(),
    };
    let mut v1_1 = v1_2.clone();
    v1_1.roles.retain(|role| !ADDED_IN_1_2.contains(&role.name.as_str()));
    AriaDefs { v1_2, v1_1 }
}

trait RoleBuilder {
    fn props(self, names: &[&str]) -> Self;
    fn requires(self, names: &[&str]) -> Self;
    fn context(self, roles: &[&str]) -> Self;
    fn owns(self, roles: &[&str]) -> Self;
    fn from_content(self) -> Self;
    fn name_required(self) -> Self;
    fn name_prohibited(self) -> Self;
    fn presentational_children(self) -> Self;
}

impl RoleBuilder for AriaRole {
    fn props(mut self, names: &[&str]) -> Self {
        self.owned_properties.extend(names.iter().map(|name| OwnedProperty {
            name: (*name).to_owned(),
            ..OwnedProperty::default()
        }));
        self
    }

    fn requires(mut self, names: &[&str]) -> Self {
        self.owned_properties.extend(names.iter().map(|name| OwnedProperty {
            name: (*name).to_owned(),
            required: true,
            ..OwnedProperty::default()
        }));
        self
    }

    fn context(mut self, roles: &[&str]) -> Self {
        self.required_context_role = strings(roles);
        self
    }

    fn owns(mut self, roles: &[&str]) -> Self {
        self.required_owned_elements = strings(roles);
        self
    }

    fn from_content(mut self) -> Self {
        self.accessible_name_from_content = true;
        self
    }

    fn name_required(mut self) -> Self {
        self.accessible_name_required = true;
        self
    }

    fn name_prohibited(mut self) -> Self {
        self.accessible_name_prohibited = true;
        self.accessible_name_from_author = false;
        self
    }

    fn presentational_children(mut self) -> Self {
        self.children_presentational = true;
        self
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn role(name: &str, parents: &[&str]) -> AriaRole {
    AriaRole {
        name: name.to_owned(),
        generalization: strings(parents),
        accessible_name_from_author: true,
        ..AriaRole::default()
    }
}

fn abstract_role(name: &str, parents: &[&str]) -> AriaRole {
    AriaRole {
        is_abstract: true,
        ..role(name, parents)
    }
}

fn roles() -> Vec<AriaRole> {
    let mut roles = vec![
        abstract_role("roletype", &[]),
        abstract_role("structure", &["roletype"]),
        abstract_role("widget", &["roletype"]),
        abstract_role("window", &["roletype"]).props(&["aria-modal"]),
        abstract_role("command", &["widget"]),
        abstract_role("composite", &["widget"]).props(&["aria-activedescendant"]),
        abstract_role("input", &["widget"]).props(&["aria-disabled"]),
        abstract_role("section", &["structure"]),
        abstract_role("sectionhead", &["structure"]),
        abstract_role("landmark", &["section"]),
        abstract_role("range", &["structure"])
            .props(&["aria-valuemax", "aria-valuemin", "aria-valuenow", "aria-valuetext"]),
        abstract_role("select", &["composite", "group"]).props(&["aria-orientation"]),
        role("alert", &["section"]),
        role("alertdialog", &["alert", "dialog"]).name_required(),
        role("application", &["structure"])
            .props(&["aria-activedescendant", "aria-disabled", "aria-expanded", "aria-haspopup"]),
        role("article", &["document"]).props(&["aria-posinset", "aria-setsize"]),
        role("banner", &["landmark"]),
        role("button", &["command"])
            .props(&["aria-disabled", "aria-expanded", "aria-haspopup", "aria-pressed"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("cell", &["section"])
            .props(&["aria-colindex", "aria-colspan", "aria-rowindex", "aria-rowspan"])
            .context(&["row"])
            .from_content(),
        role("checkbox", &["input"])
            .requires(&["aria-checked"])
            .props(&[
                "aria-errormessage",
                "aria-expanded",
                "aria-invalid",
                "aria-readonly",
                "aria-required",
            ])
            .from_content()
            .name_required()
            .presentational_children(),
        role("columnheader", &["cell", "gridcell", "sectionhead"])
            .props(&["aria-sort"])
            .context(&["row"])
            .from_content()
            .name_required(),
        role("combobox", &["input"])
            .requires(&["aria-expanded"])
            .props(&[
                "aria-activedescendant", "aria-autocomplete", "aria-controls",
                "aria-errormessage", "aria-haspopup", "aria-invalid", "aria-readonly",
                "aria-required",
            ])
            .name_required(),
        role("complementary", &["landmark"]),
        role("contentinfo", &["landmark"]),
        role("definition", &["section"]),
        role("dialog", &["window"]).name_required(),
        role("directory", &["list"]),
        role("document", &["structure"]).props(&["aria-expanded"]),
        role("feed", &["list"]),
        role("figure", &["section"]),
        role("form", &["landmark"]),
        role("grid", &["composite", "table"])
            .props(&["aria-multiselectable", "aria-readonly"])
            .owns(&["row", "rowgroup"])
            .name_required(),
        role("gridcell", &["cell", "widget"])
            .props(&[
                "aria-disabled",
                "aria-errormessage",
                "aria-expanded",
                "aria-haspopup",
                "aria-invalid",
                "aria-readonly",
                "aria-required",
                "aria-selected",
            ])
            .context(&["row"])
            .from_content(),
        role("group", &["section"]).props(&["aria-activedescendant", "aria-disabled"]),
        role("heading", &["sectionhead"])
            .requires(&["aria-level"])
            .from_content()
            .name_required(),
        role("img", &["section"]).name_required().presentational_children(),
        role("link", &["command"])
            .props(&["aria-disabled", "aria-expanded", "aria-haspopup"])
            .from_content()
            .name_required(),
        role("list", &["section"]).owns(&["listitem"]),
        role("listbox", &["select"])
            .props(&[
                "aria-errormessage",
                "aria-expanded",
                "aria-invalid",
                "aria-multiselectable",
                "aria-readonly",
                "aria-required",
            ])
            .owns(&["group", "option"])
            .name_required(),
        role("listitem", &["section"])
            .props(&["aria-level", "aria-posinset", "aria-setsize"])
            .context(&["directory", "list"]),
        role("log", &["section"]),
        role("main", &["landmark"]),
        role("marquee", &["section"]),
        role("math", &["section"]),
        role("menu", &["select"])
            .owns(&["group", "menuitem", "menuitemcheckbox", "menuitemradio"]),
        role("menubar", &["menu"]),
        role("menuitem", &["command"])
            .props(&[
                "aria-disabled",
                "aria-expanded",
                "aria-haspopup",
                "aria-posinset",
                "aria-setsize",
            ])
            .context(&["group", "menu", "menubar"])
            .from_content()
            .name_required(),
        role("menuitemcheckbox", &["menuitem"])
            .requires(&["aria-checked"])
            .context(&["group", "menu", "menubar"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("menuitemradio", &["menuitemcheckbox"])
            .requires(&["aria-checked"])
            .context(&["group", "menu", "menubar"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("navigation", &["landmark"]),
        role("none", &["structure"]).name_prohibited(),
        role("note", &["section"]),
        role("option", &["input"])
            .requires(&["aria-selected"])
            .props(&["aria-checked", "aria-posinset", "aria-setsize"])
            .context(&["group", "listbox"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("presentation", &["structure"]).name_prohibited(),
        role("progressbar", &["range", "widget"]).presentational_children(),
        role("radio", &["input"])
            .requires(&["aria-checked"])
            .props(&["aria-posinset", "aria-setsize"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("radiogroup", &["select"])
            .props(&["aria-errormessage", "aria-invalid", "aria-readonly", "aria-required"])
            .owns(&["radio"])
            .name_required(),
        role("region", &["landmark"]).name_required(),
        role("row", &["group", "widget"])
            .props(&[
                "aria-colindex",
                "aria-expanded",
                "aria-level",
                "aria-posinset",
                "aria-rowindex",
                "aria-selected",
                "aria-setsize",
            ])
            .context(&["grid", "rowgroup", "table", "treegrid"])
            .owns(&["cell", "columnheader", "gridcell", "rowheader"])
            .from_content(),
        role("rowgroup", &["structure"])
            .context(&["grid", "table", "treegrid"])
            .owns(&["row"])
            .from_content(),
        role("rowheader", &["cell", "gridcell", "sectionhead"])
            .props(&["aria-sort"])
            .context(&["row"])
            .from_content()
            .name_required(),
        role("scrollbar", &["range", "widget"])
            .requires(&["aria-controls", "aria-valuenow"])
            .props(&["aria-disabled", "aria-orientation"])
            .presentational_children(),
        role("search", &["landmark"]),
        role("searchbox", &["textbox"]).name_required(),
        role("separator", &["structure", "widget"])
            .props(&[
                "aria-disabled",
                "aria-orientation",
                "aria-valuenow",
                "aria-valuemax",
                "aria-valuemin",
                "aria-valuetext",
            ])
            .presentational_children(),
        role("slider", &["input", "range"])
            .requires(&["aria-valuenow"])
            .props(&[
                "aria-errormessage",
                "aria-haspopup",
                "aria-invalid",
                "aria-orientation",
                "aria-readonly",
            ])
            .name_required()
            .presentational_children(),
        role("spinbutton", &["composite", "input", "range"])
            .props(&["aria-errormessage", "aria-invalid", "aria-readonly", "aria-required"])
            .name_required(),
        role("status", &["section"]),
        role("switch", &["checkbox"])
            .requires(&["aria-checked"])
            .from_content()
            .name_required()
            .presentational_children(),
        role("tab", &["sectionhead", "widget"])
            .props(&[
                "aria-disabled",
                "aria-expanded",
                "aria-haspopup",
                "aria-posinset",
                "aria-selected",
                "aria-setsize",
            ])
            .context(&["tablist"])
            .from_content()
            .presentational_children(),
        role("table", &["section"])
            .props(&["aria-colcount", "aria-rowcount"])
            .owns(&["row", "rowgroup"])
            .name_required(),
        role("tablist", &["composite"])
            .props(&["aria-multiselectable", "aria-orientation"])
            .owns(&["tab"]),
        role("tabpanel", &["section"]).name_required(),
        role("term", &["section"]),
        role("textbox", &["input"])
            .props(&[
                "aria-activedescendant", "aria-autocomplete", "aria-errormessage",
                "aria-haspopup", "aria-invalid", "aria-multiline", "aria-placeholder",
                "aria-readonly", "aria-required",
            ])
            .name_required(),
        role("timer", &["status"]),
        role("toolbar", &["group"]).props(&["aria-orientation"]),
        role("tooltip", &["section"]).from_content(),
        role("tree", &["select"])
            .props(&["aria-errormessage", "aria-invalid", "aria-multiselectable", "aria-required"])
            .owns(&["group", "treeitem"])
            .name_required(),
        role("treegrid", &["grid", "tree"]).owns(&["row", "rowgroup"]).name_required(),
        role("treeitem", &["listitem", "option"])
            .props(&["aria-expanded", "aria-haspopup"])
            .context(&["group", "tree"])
            .from_content()
            .name_required(),
    ];
    roles.extend(text_level_roles());
    roles
}

/// Roles added in ARIA 1.2 for text-level semantics. All prohibit naming.
fn text_level_roles() -> Vec<AriaRole> {
    let mut roles: Vec<AriaRole> = [
        "caption", "code", "deletion", "emphasis", "generic", "insertion", "paragraph",
        "strong", "subscript", "superscript",
    ]
    .iter()
    .map(|name| match *name {
        "caption" => role(name, &["section"]).context(&["figure", "grid", "table", "treegrid"]),
        _ => role(name, &["section"]).name_prohibited(),
    })
    .collect();
    roles.push(role("blockquote", &["section"]));
    roles.push(role("time", &["section"]));
    roles.push(
        role("meter", &["range"])
            .requires(&["aria-valuenow"])
            .name_required()
            .presentational_children(),
    );
    roles
}

fn graphics_roles() -> Vec<AriaRole> {
    vec![
        role("graphics-document", &["document"]).name_required(),
        role("graphics-object", &["group"]),
        role("graphics-symbol", &["img"]).name_required().presentational_children(),
    ]
}

trait PropBuilder {
    fn global(self) -> Self;
    fn tokens(self, values: &[&str]) -> Self;
    fn default_value(self, value: &str) -> Self;
    fn deprecated(self) -> Self;
    fn equivalent(self, html_attr: &str, value: Option<&str>) -> Self;
    fn loose_equivalent(self, html_attr: &str) -> Self;
    fn conditional(self, roles: &[&str], value: AriaValueType) -> Self;
}

impl PropBuilder for AriaProperty {
    fn global(mut self) -> Self {
        self.is_global = true;
        self
    }

    fn tokens(mut self, values: &[&str]) -> Self {
        self.enum_values = strings(values);
        self
    }

    fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_owned());
        self
    }

    fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    fn equivalent(mut self, html_attr: &str, value: Option<&str>) -> Self {
        self.equivalent_html_attrs.push(EquivalentHtmlAttr {
            html_attr_name: html_attr.to_owned(),
            is_not_strict_equivalent: false,
            value: value.map(str::to_owned),
        });
        self
    }

    fn loose_equivalent(mut self, html_attr: &str) -> Self {
        self.equivalent_html_attrs.push(EquivalentHtmlAttr {
            html_attr_name: html_attr.to_owned(),
            is_not_strict_equivalent: true,
            value: None,
        });
        self
    }

    fn conditional(mut self, roles: &[&str], value: AriaValueType) -> Self {
        self.conditional_value.push(ConditionalValue {
            role: strings(roles),
            value,
        });
        self
    }
}

fn property(name: &str, value: AriaValueType) -> AriaProperty {
    AriaProperty {
        name: name.to_owned(),
        kind: AriaPropertyKind::Property,
        deprecated: false,
        is_global: false,
        value,
        conditional_value: Vec::new(),
        enum_values: Vec::new(),
        default_value: None,
        equivalent_html_attrs: Vec::new(),
        value_descriptions: Default::default(),
    }
}

fn state(name: &str, value: AriaValueType) -> AriaProperty {
    AriaProperty {
        kind: AriaPropertyKind::State,
        ..property(name, value)
    }
}

fn props() -> Vec<AriaProperty> {
    use AriaValueType::*;

    vec![
        property("aria-activedescendant", IdReference),
        property("aria-atomic", TrueFalse).global().default_value("false"),
        property("aria-autocomplete", Token)
            .tokens(&["inline", "list", "both", "none"])
            .default_value("none"),
        state("aria-busy", TrueFalse).global().default_value("false"),
        state("aria-checked", Tristate)
            .default_value("undefined")
            .equivalent("checked", Some("true"))
            .conditional(&["menuitemradio", "radio", "switch"], TrueFalseUndefined),
        property("aria-colcount", Integer),
        property("aria-colindex", Integer),
        property("aria-colspan", Integer).equivalent("colspan", None),
        property("aria-controls", IdReferenceList).global(),
        state("aria-current", Token)
            .global()
            .tokens(&["page", "step", "location", "date", "time", "true", "false"])
            .default_value("false"),
        property("aria-describedby", IdReferenceList).global(),
        property("aria-details", IdReference).global(),
        state("aria-disabled", TrueFalse)
            .default_value("false")
            .equivalent("disabled", Some("true")),
        property("aria-dropeffect", TokenList)
            .global()
            .deprecated()
            .tokens(&["copy", "execute", "link", "move", "none", "popup"])
            .default_value("none"),
        property("aria-errormessage", IdReference),
        state("aria-expanded", TrueFalseUndefined).default_value("undefined"),
        property("aria-flowto", IdReferenceList).global(),
        state("aria-grabbed", TrueFalseUndefined)
            .global()
            .deprecated()
            .default_value("undefined"),
        property("aria-haspopup", Token)
            .tokens(&["false", "true", "menu", "listbox", "tree", "grid", "dialog"])
            .default_value("false"),
        state("aria-hidden", TrueFalseUndefined)
            .global()
            .default_value("undefined")
            .loose_equivalent("hidden"),
        state("aria-invalid", Token)
            .tokens(&["grammar", "false", "spelling", "true"])
            .default_value("false"),
        property("aria-keyshortcuts", String).global(),
        property("aria-label", String).global(),
        property("aria-labelledby", IdReferenceList).global(),
        property("aria-level", Integer),
        property("aria-live", Token)
            .global()
            .tokens(&["assertive", "off", "polite"])
            .default_value("off"),
        property("aria-modal", TrueFalse).default_value("false"),
        property("aria-multiline", TrueFalse).default_value("false"),
        property("aria-multiselectable", TrueFalse)
            .default_value("false")
            .loose_equivalent("multiple"),
        property("aria-orientation", Token).tokens(&["horizontal", "undefined", "vertical"]),
        property("aria-owns", IdReferenceList).global(),
        property("aria-placeholder", String).equivalent("placeholder", None),
        property("aria-posinset", Integer),
        state("aria-pressed", Tristate).default_value("undefined"),
        property("aria-readonly", TrueFalse)
            .default_value("false")
            .equivalent("readonly", Some("true")),
        property("aria-relevant", TokenList)
            .global()
            .tokens(&["additions", "all", "removals", "text"])
            .default_value("additions text"),
        property("aria-required", TrueFalse)
            .default_value("false")
            .equivalent("required", Some("true")),
        property("aria-roledescription", String).global(),
        property("aria-rowcount", Integer),
        property("aria-rowindex", Integer),
        property("aria-rowspan", Integer).equivalent("rowspan", None),
        state("aria-selected", TrueFalseUndefined).default_value("undefined"),
        property("aria-setsize", Integer),
        property("aria-sort", Token)
            .tokens(&["ascending", "descending", "none", "other"])
            .default_value("none"),
        property("aria-valuemax", Number).loose_equivalent("max"),
        property("aria-valuemin", Number).loose_equivalent("min"),
        property("aria-valuenow", Number).loose_equivalent("value"),
        property("aria-valuetext", String),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_1_lacks_roles_added_in_1_2() {
        let defs = defs();
        assert!(defs.v1_2.roles.iter().any(|r| r.name == "generic"));
        assert!(!defs.v1_1.roles.iter().any(|r| r.name == "generic"));
        assert_eq!(defs.v1_1.props.len(), defs.v1_2.props.len());
    }

    #[test]
    fn token_properties_carry_enums() {
        for prop in props() {
            if matches!(prop.value, AriaValueType::Token | AriaValueType::TokenList) {
                assert!(!prop.enum_values.is_empty(), "{} has no enum", prop.name);
            }
        }
    }

    #[test]
    fn owned_properties_are_defined() {
        let defined: Vec<_> = props().into_iter().map(|p| p.name).collect();
        for role in roles().iter().chain(graphics_roles().iter()) {
            for owned in &role.owned_properties {
                assert!(defined.contains(&owned.name), "{} owns unknown {}", role.name, owned.name);
            }
        }
    }
}
