//! HTML element specs.
//!
//! Implicit and permitted roles follow "ARIA in HTML". Conditions are
//! selectors evaluated against the live element by the rules crate.

use crate::model::{
    AttrCondition, Attribute, AttributeEntry, ElementSpec, ImplicitRole, PermittedRoles,
    PermittedRolesSpec, GLOBAL_ATTRS_REF,
};

use super::global_attrs::{ARIA_ATTRS, GLOBAL_EVENT_ATTRS};

const WHATWG: &str = "https://html.spec.whatwg.org/multipage/";

/// Returns every HTML element spec.
#[must_use]
pub fn specs() -> Vec<ElementSpec> {
    let mut specs = vec![
        document_elements(),
        sectioning_elements(),
        grouping_elements(),
        text_elements(),
        form_elements(),
        interactive_elements(),
    ]
    .concat();
    specs.push(table());
    specs.push(img());
    specs
}

/// Prefixes the global group references every HTML element carries.
fn html_attrs(own: Vec<AttributeEntry>) -> Vec<AttributeEntry> {
    let mut entries: Vec<AttributeEntry> = vec![
        GLOBAL_ATTRS_REF.into(),
        ARIA_ATTRS.into(),
        GLOBAL_EVENT_ATTRS.into(),
    ];
    entries.extend(own);
    entries
}

fn element(name: &str, anchor: &str) -> ElementSpec {
    ElementSpec::new(name).cite(&format!("{WHATWG}{anchor}"))
}

fn attr(name: &str, type_: &str) -> AttributeEntry {
    Attribute::new(name).typed(type_).into()
}

fn no_role() -> PermittedRolesSpec {
    PermittedRolesSpec::new(PermittedRoles::NoRole)
}

fn any_role() -> PermittedRolesSpec {
    PermittedRolesSpec::new(PermittedRoles::AnyRole)
}

fn roles(list: &[&str]) -> PermittedRolesSpec {
    PermittedRolesSpec::new(PermittedRoles::list(list))
}

fn document_elements() -> Vec<ElementSpec> {
    vec![
        element("html", "semantics.html#the-html-element")
            .contents(&["head", "body"])
            .attributes(html_attrs(vec![attr("manifest", "URL")]))
            .implicit_role(ImplicitRole::of("document"))
            .permitted_roles(no_role()),
        element("head", "semantics.html#the-head-element")
            .contents(&["#metadata"])
            .attributes(html_attrs(vec![Attribute::new("profile")
                .typed("URLList")
                .obsolete()
                .into()]))
            .permitted_roles(no_role()),
        element("title", "semantics.html#the-title-element")
            .categories(&["#metadata"])
            .contents(&["#text"])
            .attributes(html_attrs(Vec::new()))
            .permitted_roles(no_role()),
        element("body", "sections.html#the-body-element")
            .contents(&["#flow"])
            .attributes(html_attrs(vec![
                Attribute::new("alink").typed("Color").obsolete().into(),
                Attribute::new("bgcolor").typed("Color").obsolete().into(),
            ]))
            .implicit_role(ImplicitRole::of("generic"))
            .permitted_roles(no_role()),
    ]
}

fn sectioning_elements() -> Vec<ElementSpec> {
    vec![
        element("main", "grouping-content.html#the-main-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("main"))
            .permitted_roles(no_role()),
        element("header", "sections.html#the-header-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("banner"))
            .permitted_roles(roles(&["group", "none", "presentation"])),
        element("footer", "sections.html#the-footer-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("contentinfo"))
            .permitted_roles(roles(&["group", "none", "presentation"])),
        element("nav", "sections.html#the-nav-element")
            .categories(&["#flow", "#sectioning", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("navigation"))
            .permitted_roles(roles(&["menu", "menubar", "none", "presentation", "tablist"])),
        element("aside", "sections.html#the-aside-element")
            .categories(&["#flow", "#sectioning", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("complementary"))
            .permitted_roles(roles(&["feed", "none", "note", "presentation", "region", "search"])),
        element("article", "sections.html#the-article-element")
            .categories(&["#flow", "#sectioning", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("article"))
            .permitted_roles(roles(&[
                "application", "document", "feed", "main", "none", "presentation", "region",
            ])),
        element("section", "sections.html#the-section-element")
            .categories(&["#flow", "#sectioning", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(
                ImplicitRole::none()
                    .when("[aria-label],[aria-labelledby],[title]", "region"),
            )
            .permitted_roles(roles(&[
                "alert", "alertdialog", "application", "banner", "complementary", "contentinfo",
                "dialog", "document", "feed", "log", "main", "marquee", "navigation", "none",
                "note", "presentation", "search", "status", "tabpanel",
            ])),
        element("h1", "sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements")
            .categories(&["#flow", "#heading", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(vec![Attribute::new("align").typed("Any").obsolete().into()]))
            .implicit_role(ImplicitRole::of("heading"))
            .permitted_roles(roles(&["none", "presentation", "tab"])),
        element("h2", "sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements")
            .categories(&["#flow", "#heading", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(vec![Attribute::new("align").typed("Any").obsolete().into()]))
            .implicit_role(ImplicitRole::of("heading"))
            .permitted_roles(roles(&["none", "presentation", "tab"])),
    ]
}

fn grouping_elements() -> Vec<ElementSpec> {
    vec![
        element("div", "grouping-content.html#the-div-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(vec![Attribute::new("align").typed("Any").obsolete().into()]))
            .implicit_role(ImplicitRole::of("generic"))
            .permitted_roles(any_role()),
        element("p", "grouping-content.html#the-p-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("paragraph"))
            .permitted_roles(any_role()),
        element("hr", "grouping-content.html#the-hr-element")
            .categories(&["#flow"])
            .attributes(html_attrs(vec![
                Attribute::new("noshade").typed("Boolean").obsolete().into(),
                Attribute::new("size").typed("Int").obsolete().into(),
            ]))
            .implicit_role(ImplicitRole::of("separator"))
            .permitted_roles(roles(&["none", "presentation"])),
        element("ul", "grouping-content.html#the-ul-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["li", "#script-supporting"])
            .attributes(html_attrs(vec![
                Attribute::new("compact").typed("Boolean").obsolete().into(),
                Attribute::new("type").typed("Any").obsolete().into(),
            ]))
            .implicit_role(ImplicitRole::of("list"))
            .permitted_roles(list_container_roles()),
        element("ol", "grouping-content.html#the-ol-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["li", "#script-supporting"])
            .attributes(html_attrs(vec![
                attr("reversed", "Boolean"),
                attr("start", "Int"),
                attr("type", "OrderedListType"),
            ]))
            .implicit_role(ImplicitRole::of("list"))
            .permitted_roles(list_container_roles()),
        element("li", "grouping-content.html#the-li-element")
            .contents(&["#flow"])
            .attributes(html_attrs(vec![Attribute::new("value")
                .typed("Int")
                .when(AttrCondition::ancestor("ol"))
                .into()]))
            .implicit_role(ImplicitRole::of("listitem"))
            .permitted_roles(roles(&[
                "menuitem", "menuitemcheckbox", "menuitemradio", "option", "none",
                "presentation", "radio", "separator", "tab", "treeitem",
            ])),
    ]
}

fn list_container_roles() -> PermittedRolesSpec {
    roles(&[
        "directory", "group", "listbox", "menu", "menubar", "none", "presentation",
        "radiogroup", "tablist", "toolbar", "tree",
    ])
}

fn text_elements() -> Vec<ElementSpec> {
    vec![
        element("a", "text-level-semantics.html#the-a-element")
            .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
            .contents(&["#transparent"])
            .attributes(html_attrs(vec![
                attr("href", "URL"),
                attr("target", "NavigableTargetNameOrKeyword"),
                Attribute::new("download")
                    .typed("Any")
                    .when(AttrCondition::self_matches("[href]"))
                    .into(),
                attr("ping", "URLList"),
                attr("rel", "LinkTypeList"),
                attr("hreflang", "BCP47"),
                attr("type", "MIMEType"),
                attr("referrerpolicy", "ReferrerPolicy"),
                Attribute::new("charset").typed("Any").obsolete().into(),
                Attribute::new("name").typed("Any").obsolete().into(),
            ]))
            .implicit_role(ImplicitRole::of("generic").when("[href]", "link"))
            .permitted_roles(
                roles(&[
                    "button", "checkbox", "menuitem", "menuitemcheckbox", "menuitemradio",
                    "option", "radio", "switch", "tab", "treeitem",
                ])
                .when(":not([href])", PermittedRoles::AnyRole),
            ),
        element("span", "text-level-semantics.html#the-span-element")
            .categories(&["#flow", "#phrasing", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(Vec::new()))
            .implicit_role(ImplicitRole::of("generic"))
            .permitted_roles(any_role()),
    ]
}

fn form_elements() -> Vec<ElementSpec> {
    vec![
        element("form", "forms.html#the-form-element")
            .categories(&["#flow", "#palpable"])
            .contents(&["#flow"])
            .attributes(html_attrs(vec![
                attr("accept-charset", "Any"),
                attr("action", "URL"),
                attr("autocomplete", "OnOff"),
                attr("enctype", "FormEnctype"),
                attr("method", "FormMethod"),
                attr("name", "String"),
                attr("novalidate", "Boolean"),
                attr("target", "NavigableTargetNameOrKeyword"),
            ]))
            .implicit_role(ImplicitRole::of("form"))
            .permitted_roles(roles(&["search", "none", "presentation"])),
        element("label", "forms.html#the-label-element")
            .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(vec![attr("for", "Id")]))
            .permitted_roles(no_role()),
        input(),
        element("button", "form-elements.html#the-button-element")
            .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
            .contents(&["#phrasing"])
            .attributes(html_attrs(vec![
                attr("disabled", "Boolean"),
                attr("form", "Id"),
                submit_only("formaction", "URL"),
                submit_only("formenctype", "FormEnctype"),
                submit_only("formmethod", "FormMethod"),
                submit_only("formnovalidate", "Boolean"),
                submit_only("formtarget", "NavigableTargetNameOrKeyword"),
                attr("name", "String"),
                attr("popovertarget", "Id"),
                attr("type", "ButtonType"),
                attr("value", "Any"),
            ]))
            .implicit_role(ImplicitRole::of("button"))
            .permitted_roles(roles(&[
                "checkbox", "combobox", "link", "menuitem", "menuitemcheckbox",
                "menuitemradio", "option", "radio", "switch", "tab",
            ])),
        element("select", "form-elements.html#the-select-element")
            .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
            .contents(&["option", "optgroup", "#script-supporting"])
            .attributes(html_attrs(vec![
                attr("autocomplete", "AutoComplete"),
                attr("disabled", "Boolean"),
                attr("form", "Id"),
                attr("multiple", "Boolean"),
                attr("name", "String"),
                attr("required", "Boolean"),
                attr("size", "Uint"),
            ]))
            .implicit_role(
                ImplicitRole::of("combobox")
                    .when("[multiple]", "listbox")
                    .when("[size]:not([size='0']):not([size='1'])", "listbox"),
            )
            .permitted_roles(roles(&["menu"]).when("[multiple]", PermittedRoles::NoRole)),
        element("option", "form-elements.html#the-option-element")
            .contents(&["#text"])
            .attributes(html_attrs(vec![
                attr("disabled", "Boolean"),
                attr("label", "String"),
                attr("selected", "Boolean"),
                attr("value", "Any"),
            ]))
            .implicit_role(ImplicitRole::of("option"))
            .permitted_roles(no_role()),
        element("textarea", "form-elements.html#the-textarea-element")
            .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
            .contents(&["#text"])
            .attributes(html_attrs(vec![
                attr("autocomplete", "AutoComplete"),
                attr("cols", "Uint"),
                attr("dirname", "String"),
                attr("disabled", "Boolean"),
                attr("form", "Id"),
                attr("maxlength", "Uint"),
                attr("minlength", "Uint"),
                attr("name", "String"),
                attr("placeholder", "String"),
                attr("readonly", "Boolean"),
                attr("required", "Boolean"),
                attr("rows", "Uint"),
                attr("wrap", "TextareaWrap"),
            ]))
            .implicit_role(ImplicitRole::of("textbox"))
            .permitted_roles(no_role()),
    ]
}

fn submit_only(name: &str, type_: &str) -> AttributeEntry {
    Attribute::new(name)
        .typed(type_)
        .when(AttrCondition::self_matches_any(&[":not([type])", "[type=submit]"]))
        .into()
}

fn input() -> ElementSpec {
    let submit_like = ["[type=submit]", "[type=image]"];
    let checkable = ["[type=checkbox]", "[type=radio]"];
    let ranged = [
        "[type=date]", "[type=month]", "[type=week]", "[type=time]",
        "[type=datetime-local]", "[type=number]", "[type=range]",
    ];
    let textual = [
        ":not([type])", "[type=text]", "[type=search]", "[type=url]", "[type=tel]",
        "[type=email]", "[type=password]", "[type=number]",
    ];
    element("input", "input.html#the-input-element")
        .categories(&["#flow", "#phrasing", "#interactive", "#palpable"])
        .attributes(html_attrs(vec![
            Attribute::new("accept")
                .typed("AcceptList")
                .when(AttrCondition::self_matches("[type=file]"))
                .into(),
            Attribute::new("alt")
                .typed("String")
                .when(AttrCondition::self_matches("[type=image]"))
                .into(),
            attr("autocomplete", "AutoComplete"),
            Attribute::new("checked")
                .typed("Boolean")
                .when(AttrCondition::self_matches_any(&checkable))
                .into(),
            attr("dirname", "String"),
            attr("disabled", "Boolean"),
            attr("form", "Id"),
            Attribute::new("formaction")
                .typed("URL")
                .when(AttrCondition::self_matches_any(&submit_like))
                .into(),
            Attribute::new("formenctype")
                .typed("FormEnctype")
                .when(AttrCondition::self_matches_any(&submit_like))
                .into(),
            Attribute::new("formmethod")
                .typed("FormMethod")
                .when(AttrCondition::self_matches_any(&submit_like))
                .into(),
            Attribute::new("formnovalidate")
                .typed("Boolean")
                .when(AttrCondition::self_matches_any(&submit_like))
                .into(),
            Attribute::new("formtarget")
                .typed("NavigableTargetNameOrKeyword")
                .when(AttrCondition::self_matches_any(&submit_like))
                .into(),
            Attribute::new("height")
                .typed("Uint")
                .when(AttrCondition::self_matches("[type=image]"))
                .into(),
            attr("list", "Id"),
            Attribute::new("max")
                .typed("Any")
                .when(AttrCondition::self_matches_any(&ranged))
                .into(),
            Attribute::new("maxlength")
                .typed("Uint")
                .when(AttrCondition::self_matches_any(&textual))
                .into(),
            Attribute::new("min")
                .typed("Any")
                .when(AttrCondition::self_matches_any(&ranged))
                .into(),
            Attribute::new("minlength")
                .typed("Uint")
                .when(AttrCondition::self_matches_any(&textual))
                .into(),
            Attribute::new("multiple")
                .typed("Boolean")
                .when(AttrCondition::self_matches_any(&["[type=email]", "[type=file]"]))
                .into(),
            attr("name", "String"),
            Attribute::new("pattern")
                .typed("Pattern")
                .when(AttrCondition::self_matches_any(&textual))
                .into(),
            Attribute::new("placeholder")
                .typed("String")
                .when(AttrCondition::self_matches_any(&textual))
                .into(),
            attr("readonly", "Boolean"),
            attr("required", "Boolean"),
            Attribute::new("size")
                .typed("Uint")
                .when(AttrCondition::self_matches_any(&textual))
                .into(),
            Attribute::new("src")
                .typed("URL")
                .when(AttrCondition::self_matches("[type=image]"))
                .into(),
            Attribute::new("step")
                .typed("Any")
                .when(AttrCondition::self_matches_any(&ranged))
                .into(),
            attr("type", "InputType"),
            attr("value", "Any"),
            Attribute::new("width")
                .typed("Uint")
                .when(AttrCondition::self_matches("[type=image]"))
                .into(),
            Attribute::new("usemap").typed("HashName").obsolete().into(),
        ]))
        .implicit_role(
            ImplicitRole::of("textbox")
                .when("[type=button]", "button")
                .when("[type=checkbox]", "checkbox")
                .when("[type=email]:not([list])", "textbox")
                .when("[type=image]", "button")
                .when("[type=number]", "spinbutton")
                .when("[type=radio]", "radio")
                .when("[type=range]", "slider")
                .when("[type=reset]", "button")
                .when("[type=search]:not([list])", "searchbox")
                .when("[type=submit]", "button")
                .when("[list]", "combobox"),
        )
        .permitted_roles(
            PermittedRolesSpec::new(PermittedRoles::NoRole)
                .when("[type=button]", PermittedRoles::list(&[
                    "checkbox", "combobox", "link", "menuitem", "menuitemcheckbox",
                    "menuitemradio", "option", "radio", "switch", "tab",
                ]))
                .when("[type=checkbox]", PermittedRoles::list(&[
                    "button", "menuitemcheckbox", "option", "switch",
                ]))
                .when("[type=image]", PermittedRoles::list(&[
                    "link", "menuitem", "menuitemcheckbox", "menuitemradio", "radio", "switch",
                ]))
                .when("[type=radio]", PermittedRoles::list(&["menuitemradio"]))
                .when(
                    ":not([type]):not([list]),[type=text]:not([list])",
                    PermittedRoles::list(&["combobox", "searchbox", "spinbutton"]),
                ),
        )
}

fn interactive_elements() -> Vec<ElementSpec> {
    vec![
        element("details", "interactive-elements.html#the-details-element")
            .categories(&["#flow", "#interactive", "#palpable"])
            .contents(&["summary", "#flow"])
            .attributes(html_attrs(vec![attr("name", "String"), attr("open", "Boolean")]))
            .implicit_role(ImplicitRole::of("group"))
            .permitted_roles(no_role()),
        element("summary", "interactive-elements.html#the-summary-element")
            .contents(&["#phrasing", "#heading"])
            .attributes(html_attrs(Vec::new()))
            .permitted_roles(no_role()),
        element("dialog", "interactive-elements.html#the-dialog-element")
            .categories(&["#flow"])
            .contents(&["#flow"])
            .attributes(html_attrs(vec![attr("open", "Boolean")]))
            .implicit_role(ImplicitRole::of("dialog"))
            .permitted_roles(roles(&["alertdialog"])),
    ]
}

fn table() -> ElementSpec {
    element("table", "tables.html#the-table-element")
        .categories(&["#flow", "#palpable"])
        .contents(&["caption", "colgroup", "thead", "tbody", "tr", "tfoot", "#script-supporting"])
        .attributes(html_attrs(vec![
            Attribute::new("border").typed("Any").obsolete().into(),
            Attribute::new("summary").typed("Any").obsolete().into(),
            Attribute::new("width").typed("Any").obsolete().into(),
        ]))
        .implicit_role(ImplicitRole::of("table"))
        .permitted_roles(any_role())
}

fn img() -> ElementSpec {
    element("img", "embedded-content.html#the-img-element")
        .categories(&["#flow", "#phrasing", "#embedded", "#palpable"])
        .attributes(html_attrs(vec![
            attr("alt", "String"),
            attr("crossorigin", "CrossOrigin"),
            attr("decoding", "ImageDecoding"),
            attr("fetchpriority", "FetchPriority"),
            attr("height", "Uint"),
            attr("ismap", "Boolean"),
            attr("loading", "LazyLoading"),
            attr("referrerpolicy", "ReferrerPolicy"),
            attr("sizes", "SourceSizeList"),
            attr("src", "URL"),
            attr("srcset", "Srcset"),
            attr("usemap", "HashName"),
            attr("width", "Uint"),
            Attribute::new("align").typed("Any").obsolete().into(),
            Attribute::new("border").typed("Any").obsolete().into(),
            Attribute::new("longdesc").typed("URL").obsolete().into(),
        ]))
        .implicit_role(ImplicitRole::of("img").when("[alt='']", "presentation"))
        .permitted_roles(
            roles(&[
                "button", "checkbox", "link", "menuitem", "menuitemcheckbox", "menuitemradio",
                "meter", "option", "progressbar", "radio", "scrollbar", "separator", "slider",
                "switch", "tab", "treeitem",
            ])
            .when("[alt='']", PermittedRoles::list(&["none", "presentation"])),
        )
}
