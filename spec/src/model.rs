//! Core specification model types.
//!
//! These types describe elements, attributes, global-attribute groups, and
//! WAI-ARIA roles and properties as typed Rust data. Field names serialize to
//! the JSON shape of the markup spec document (`{cites, def, specs}`), so a
//! loader can deserialize an [`MlSpec`] and hand it to
//! [`Repository::new`](crate::Repository::new).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference token in [`ElementSpec::attributes`] that pulls in
/// [`HTML_GLOBAL_ATTRS`] for non-namespaced elements.
pub const GLOBAL_ATTRS_REF: &str = "#globalAttrs";

/// Global-attribute group applied to plain HTML elements.
pub const HTML_GLOBAL_ATTRS: &str = "#HTMLGlobalAttrs";

/// Global-attribute group appended to every resolution as a final patch.
pub const EXTENDS: &str = "#extends";

fn is_false(value: &bool) -> bool {
    !*value
}

/// XML namespace of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NamespaceUri {
    /// `http://www.w3.org/1999/xhtml`
    #[serde(rename = "http://www.w3.org/1999/xhtml")]
    Html,
    /// `http://www.w3.org/2000/svg`
    #[serde(rename = "http://www.w3.org/2000/svg")]
    Svg,
    /// `http://www.w3.org/1998/Math/MathML`
    #[serde(rename = "http://www.w3.org/1998/Math/MathML")]
    MathMl,
    /// `http://www.w3.org/1999/xlink`
    #[serde(rename = "http://www.w3.org/1999/xlink")]
    XLink,
}

impl NamespaceUri {
    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NamespaceUri::Html => "http://www.w3.org/1999/xhtml",
            NamespaceUri::Svg => "http://www.w3.org/2000/svg",
            NamespaceUri::MathMl => "http://www.w3.org/1998/Math/MathML",
            NamespaceUri::XLink => "http://www.w3.org/1999/xlink",
        }
    }

    /// Returns the prefix used in qualified element names (`svg:circle`).
    /// HTML elements are unprefixed.
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            NamespaceUri::Html => None,
            NamespaceUri::Svg => Some("svg"),
            NamespaceUri::MathMl => Some("mml"),
            NamespaceUri::XLink => Some("xlink"),
        }
    }
}

/// The complete markup spec document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MlSpec {
    /// Reference URLs.
    #[serde(default)]
    pub cites: Vec<String>,
    /// Shared definitions: global attributes, ARIA, content models.
    pub def: SpecDefs,
    /// One entry per qualified element name.
    pub specs: Vec<ElementSpec>,
}

/// Shared definitions referenced from element specs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecDefs {
    /// Global-attribute groups keyed by group name (`#HTMLGlobalAttrs`, ...).
    #[serde(rename = "#globalAttrs", default)]
    pub global_attrs: BTreeMap<String, Vec<Attribute>>,
    /// WAI-ARIA definitions per version.
    #[serde(rename = "#aria", default)]
    pub aria: AriaDefs,
    /// Element names per content-model category.
    #[serde(rename = "#contentModels", default)]
    pub content_models: BTreeMap<String, Vec<String>>,
}

/// Specification of a single element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    /// Qualified name (`div`, `svg:circle`).
    pub name: String,
    /// Namespace, absent for plain HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<NamespaceUri>,
    /// Reference URL.
    #[serde(default)]
    pub cite: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Experimental technology.
    #[serde(default, skip_serializing_if = "is_false")]
    pub experimental: bool,
    /// Obsolete element.
    #[serde(default, skip_serializing_if = "is_false")]
    pub obsolete: bool,
    /// Deprecated element.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Non-standard element.
    #[serde(default, skip_serializing_if = "is_false")]
    pub non_standard: bool,
    /// Content-model categories (`#flow`, `#phrasing`, ...).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Permitted children and parents. Opaque to the resolution core.
    #[serde(default)]
    pub content_model: ContentModel,
    /// Flags naming the global-attribute groups that apply. Descriptive;
    /// resolution is driven by reference tokens in `attributes`.
    #[serde(default)]
    pub global_attrs: BTreeMap<String, bool>,
    /// Merge-ordered attribute entries.
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    /// Implicit ARIA role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_role: Option<ImplicitRole>,
    /// ARIA roles an author may declare on the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permitted_roles: Option<PermittedRolesSpec>,
    /// Any property may be added as an attribute (template languages).
    #[serde(default, skip_serializing_if = "is_false")]
    pub possible_to_add_properties: bool,
}

impl ElementSpec {
    /// Creates an empty spec for `name`. The namespace is derived from the
    /// `svg:`/`mml:` prefix, if any.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let namespace = match name.split_once(':') {
            Some(("svg", _)) => Some(NamespaceUri::Svg),
            Some(("mml" | "math", _)) => Some(NamespaceUri::MathMl),
            _ => None,
        };
        Self {
            name: name.to_owned(),
            namespace,
            ..Self::default()
        }
    }

    /// Sets the reference URL.
    #[must_use]
    pub fn cite(mut self, url: &str) -> Self {
        url.clone_into(&mut self.cite);
        self
    }

    /// Sets the content-model categories.
    #[must_use]
    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.categories = to_strings(categories);
        self
    }

    /// Sets the permitted-content tokens.
    #[must_use]
    pub fn contents(mut self, contents: &[&str]) -> Self {
        self.content_model.contents = to_strings(contents);
        self
    }

    /// Sets the attribute entries.
    #[must_use]
    pub fn attributes(mut self, entries: Vec<AttributeEntry>) -> Self {
        for entry in &entries {
            if let AttributeEntry::GroupRef(group) = entry {
                let key = if group == GLOBAL_ATTRS_REF {
                    HTML_GLOBAL_ATTRS
                } else {
                    group.as_str()
                };
                self.global_attrs.insert(key.to_owned(), true);
            }
        }
        self.attributes = entries;
        self
    }

    /// Sets the implicit role.
    #[must_use]
    pub fn implicit_role(mut self, implicit: ImplicitRole) -> Self {
        self.implicit_role = Some(implicit);
        self
    }

    /// Sets the permitted roles.
    #[must_use]
    pub fn permitted_roles(mut self, permitted: PermittedRolesSpec) -> Self {
        self.permitted_roles = Some(permitted);
        self
    }

    /// Marks the element deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Returns true if `attributes` contains the [`GLOBAL_ATTRS_REF`] token.
    #[must_use]
    pub fn references_global_attrs(&self) -> bool {
        self.attributes
            .iter()
            .any(|entry| matches!(entry, AttributeEntry::GroupRef(g) if g == GLOBAL_ATTRS_REF))
    }
}

/// Permitted content and parents. The resolution core carries these tokens
/// for the content-model checker without interpreting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModel {
    /// Permitted children as category names or element names.
    #[serde(default)]
    pub contents: Vec<String>,
    /// Selector an ancestor must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendant_of: Option<String>,
}

/// One entry of [`ElementSpec::attributes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeEntry {
    /// Names a global-attribute group to splice in.
    GroupRef(String),
    /// A literal (possibly partial) attribute record.
    Attribute(Attribute),
}

impl From<Attribute> for AttributeEntry {
    fn from(attr: Attribute) -> Self {
        AttributeEntry::Attribute(attr)
    }
}

impl From<&str> for AttributeEntry {
    fn from(group: &str) -> Self {
        AttributeEntry::GroupRef(group.to_owned())
    }
}

/// An attribute specification.
///
/// Every field except `name` is optional so a later declaration can refine
/// an earlier one field by field (see [`Attribute::merge_from`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Value-type tags.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<AttributeType>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Applicability condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AttrCondition>,
    /// Value is case-sensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// Experimental attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    /// Obsolete attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsolete: Option<bool>,
    /// Deprecated attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Non-standard attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_standard: Option<bool>,
}

impl Attribute {
    /// Creates an attribute with only a name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Sets the value type.
    #[must_use]
    pub fn typed(mut self, type_: impl Into<AttributeType>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Sets the applicability condition.
    #[must_use]
    pub fn when(mut self, condition: AttrCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Marks the attribute deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = Some(true);
        self
    }

    /// Marks the attribute obsolete.
    #[must_use]
    pub fn obsolete(mut self) -> Self {
        self.obsolete = Some(true);
        self
    }

    /// Marks the attribute experimental.
    #[must_use]
    pub fn experimental(mut self) -> Self {
        self.experimental = Some(true);
        self
    }

    /// Marks the attribute non-standard.
    #[must_use]
    pub fn non_standard(mut self) -> Self {
        self.non_standard = Some(true);
        self
    }

    /// Marks the attribute value case-sensitive.
    #[must_use]
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = Some(true);
        self
    }

    /// Shallow merge: fields present in `later` overwrite, absent fields
    /// keep their current value.
    pub fn merge_from(&mut self, later: &Attribute) {
        fn take<T: Clone>(slot: &mut Option<T>, later: &Option<T>) {
            if let Some(value) = later {
                *slot = Some(value.clone());
            }
        }
        take(&mut self.type_, &later.type_);
        take(&mut self.description, &later.description);
        take(&mut self.condition, &later.condition);
        take(&mut self.case_sensitive, &later.case_sensitive);
        take(&mut self.experimental, &later.experimental);
        take(&mut self.obsolete, &later.obsolete);
        take(&mut self.deprecated, &later.deprecated);
        take(&mut self.non_standard, &later.non_standard);
    }

    /// Value-type tags, empty when untyped.
    #[must_use]
    pub fn type_tags(&self) -> &[String] {
        match &self.type_ {
            Some(AttributeType::One(tag)) => std::slice::from_ref(tag),
            Some(AttributeType::Many(tags)) => tags,
            None => &[],
        }
    }

    /// Returns true if the attribute is deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    /// Returns true if the attribute is obsolete.
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.obsolete.unwrap_or(false)
    }
}

/// One or more value-type tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeType {
    /// A single tag.
    One(String),
    /// Any of several tags.
    Many(Vec<String>),
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        AttributeType::One(tag.to_owned())
    }
}

impl From<&[&str]> for AttributeType {
    fn from(tags: &[&str]) -> Self {
        AttributeType::Many(to_strings(tags))
    }
}

/// Selector-based applicability condition of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrCondition {
    /// Selector(s) the element itself must match.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<SelectorList>,
    /// Selector some ancestor element must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<String>,
}

impl AttrCondition {
    /// Condition on the element itself.
    #[must_use]
    pub fn self_matches(selector: &str) -> Self {
        Self {
            self_: Some(SelectorList::One(selector.to_owned())),
            ancestor: None,
        }
    }

    /// Condition on the element itself matching any of `selectors`.
    #[must_use]
    pub fn self_matches_any(selectors: &[&str]) -> Self {
        Self {
            self_: Some(SelectorList::Many(to_strings(selectors))),
            ancestor: None,
        }
    }

    /// Condition on an ancestor.
    #[must_use]
    pub fn ancestor(selector: &str) -> Self {
        Self {
            self_: None,
            ancestor: Some(selector.to_owned()),
        }
    }
}

/// A selector or a list of alternative selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectorList {
    /// A single selector.
    One(String),
    /// Alternatives, joined into a selector list when matched.
    Many(Vec<String>),
}

impl SelectorList {
    /// Returns the selector text, joining alternatives with `,`.
    #[must_use]
    pub fn to_selector(&self) -> String {
        match self {
            SelectorList::One(selector) => selector.clone(),
            SelectorList::Many(selectors) => selectors.join(","),
        }
    }
}

/// Implicit ARIA role of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitRole {
    /// Unconditional role; also the fallback when no condition matches.
    #[serde(default, with = "role_or_false")]
    pub role: Option<String>,
    /// Conditional roles, first match wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RoleCondition>,
}

impl ImplicitRole {
    /// An unconditional implicit role.
    #[must_use]
    pub fn of(role: &str) -> Self {
        Self {
            role: Some(role.to_owned()),
            conditions: Vec::new(),
        }
    }

    /// No unconditional role.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a conditional role.
    #[must_use]
    pub fn when(mut self, condition: &str, role: &str) -> Self {
        self.conditions.push(RoleCondition {
            condition: condition.to_owned(),
            role: role.to_owned(),
        });
        self
    }
}

/// `{condition, role}` pair of an implicit role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCondition {
    /// Selector the element must match.
    pub condition: String,
    /// Role applied on match.
    pub role: String,
}

/// Serializes an absent role as `false`, the form used by the spec files.
mod role_or_false {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Name(String),
    }

    pub fn serialize<S: Serializer>(
        role: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match role {
            Some(name) => Raw::Name(name.clone()).serialize(serializer),
            None => Raw::Flag(false).serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Name(name)) => Some(name),
            Some(Raw::Flag(_)) | None => None,
        })
    }
}

/// Roles an author may declare on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedRolesSpec {
    /// Base permission, used when no condition matches.
    pub roles: PermittedRoles,
    /// Conditional permissions, first match wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<PermittedRoleCondition>,
}

impl PermittedRolesSpec {
    /// Base permission without conditions.
    #[must_use]
    pub fn new(roles: PermittedRoles) -> Self {
        Self {
            roles,
            conditions: Vec::new(),
        }
    }

    /// Adds a conditional permission.
    #[must_use]
    pub fn when(mut self, condition: &str, roles: PermittedRoles) -> Self {
        self.conditions.push(PermittedRoleCondition {
            condition: condition.to_owned(),
            roles,
        });
        self
    }
}

/// `{condition, roles}` pair of a permitted-roles spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedRoleCondition {
    /// Selector the element must match.
    pub condition: String,
    /// Permission applied on match.
    pub roles: PermittedRoles,
}

/// Permission shape: any role, an explicit list, or no role.
///
/// Serialized as `true`, a string array, or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRoleList", into = "RawRoleList")]
pub enum PermittedRoles {
    /// Any role may be declared.
    AnyRole,
    /// Only the listed roles may be declared.
    RoleList(Vec<String>),
    /// No role may be declared.
    NoRole,
}

impl PermittedRoles {
    /// An explicit role list.
    #[must_use]
    pub fn list(roles: &[&str]) -> Self {
        PermittedRoles::RoleList(to_strings(roles))
    }

    /// Returns true if `role` may be declared.
    #[must_use]
    pub fn permits(&self, role: &str) -> bool {
        match self {
            PermittedRoles::AnyRole => true,
            PermittedRoles::RoleList(roles) => roles.iter().any(|r| r == role),
            PermittedRoles::NoRole => false,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRoleList {
    Flag(bool),
    Names(Vec<String>),
}

impl From<RawRoleList> for PermittedRoles {
    fn from(raw: RawRoleList) -> Self {
        match raw {
            RawRoleList::Flag(true) => PermittedRoles::AnyRole,
            RawRoleList::Flag(false) => PermittedRoles::NoRole,
            RawRoleList::Names(names) => PermittedRoles::RoleList(names),
        }
    }
}

impl From<PermittedRoles> for RawRoleList {
    fn from(roles: PermittedRoles) -> Self {
        match roles {
            PermittedRoles::AnyRole => RawRoleList::Flag(true),
            PermittedRoles::NoRole => RawRoleList::Flag(false),
            PermittedRoles::RoleList(names) => RawRoleList::Names(names),
        }
    }
}

/// WAI-ARIA specification version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AriaVersion {
    /// WAI-ARIA 1.1
    #[serde(rename = "1.1")]
    V1_1,
    /// WAI-ARIA 1.2
    #[default]
    #[serde(rename = "1.2")]
    V1_2,
}

impl AriaVersion {
    /// Returns the version string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaVersion::V1_1 => "1.1",
            AriaVersion::V1_2 => "1.2",
        }
    }
}

impl fmt::Display for AriaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ARIA definitions for every supported version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AriaDefs {
    /// WAI-ARIA 1.2
    #[serde(rename = "1.2")]
    pub v1_2: AriaSpec,
    /// WAI-ARIA 1.1
    #[serde(rename = "1.1")]
    pub v1_1: AriaSpec,
}

impl AriaDefs {
    /// Returns the definitions for `version`.
    #[must_use]
    pub fn get(&self, version: AriaVersion) -> &AriaSpec {
        match version {
            AriaVersion::V1_1 => &self.v1_1,
            AriaVersion::V1_2 => &self.v1_2,
        }
    }
}

/// Roles and properties of one ARIA version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaSpec {
    /// Core roles.
    #[serde(default)]
    pub roles: Vec<AriaRole>,
    /// Graphics module roles (`graphics-document`, ...).
    #[serde(default)]
    pub graphics_roles: Vec<AriaRole>,
    /// States and properties.
    #[serde(default)]
    pub props: Vec<AriaProperty>,
}

/// A WAI-ARIA role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaRole {
    /// Role name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Abstract roles can only be generalized from.
    #[serde(default)]
    pub is_abstract: bool,
    /// Parent roles ("is-a"); a role may have several.
    #[serde(default)]
    pub generalization: Vec<String>,
    /// Roles one of which must own this role.
    #[serde(default)]
    pub required_context_role: Vec<String>,
    /// Roles this role must own.
    #[serde(default)]
    pub required_owned_elements: Vec<String>,
    /// An accessible name is required.
    #[serde(default)]
    pub accessible_name_required: bool,
    /// The accessible name may come from the author.
    #[serde(default)]
    pub accessible_name_from_author: bool,
    /// The accessible name may come from content.
    #[serde(default)]
    pub accessible_name_from_content: bool,
    /// Naming is prohibited.
    #[serde(default)]
    pub accessible_name_prohibited: bool,
    /// Children are presentational.
    #[serde(default)]
    pub children_presentational: bool,
    /// States and properties supported or required on this role.
    #[serde(default)]
    pub owned_properties: Vec<OwnedProperty>,
    /// States and properties prohibited on this role.
    #[serde(default)]
    pub prohibited_properties: Vec<String>,
}

/// A state or property owned by a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedProperty {
    /// `aria-*` name.
    pub name: String,
    /// Inherited from a superclass role.
    #[serde(default, skip_serializing_if = "is_false")]
    pub inherited: bool,
    /// Required on this role.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Deprecated on this role.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

/// Whether an ARIA attribute is a property or a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaPropertyKind {
    /// Static characteristic.
    Property,
    /// Dynamic characteristic.
    State,
}

/// ARIA value-type taxonomy.
///
/// Tags the taxonomy does not know deserialize to [`AriaValueType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AriaValueType {
    /// `true/false`
    #[serde(rename = "true/false")]
    TrueFalse,
    /// `tristate`
    #[serde(rename = "tristate")]
    Tristate,
    /// `true/false/undefined`
    #[serde(rename = "true/false/undefined")]
    TrueFalseUndefined,
    /// `ID reference`
    #[serde(rename = "ID reference")]
    IdReference,
    /// `ID reference list`
    #[serde(rename = "ID reference list")]
    IdReferenceList,
    /// `integer`
    #[serde(rename = "integer")]
    Integer,
    /// `number`
    #[serde(rename = "number")]
    Number,
    /// `string`
    #[serde(rename = "string")]
    String,
    /// `token`
    #[serde(rename = "token")]
    Token,
    /// `token list`
    #[serde(rename = "token list")]
    TokenList,
    /// `URI`
    #[serde(rename = "URI")]
    Uri,
    /// Any unrecognized tag.
    #[serde(other)]
    Other,
}

impl AriaValueType {
    /// Parses a taxonomy tag; unknown tags map to [`AriaValueType::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "true/false" => AriaValueType::TrueFalse,
            "tristate" => AriaValueType::Tristate,
            "true/false/undefined" => AriaValueType::TrueFalseUndefined,
            "ID reference" => AriaValueType::IdReference,
            "ID reference list" => AriaValueType::IdReferenceList,
            "integer" => AriaValueType::Integer,
            "number" => AriaValueType::Number,
            "string" => AriaValueType::String,
            "token" => AriaValueType::Token,
            "token list" => AriaValueType::TokenList,
            "URI" => AriaValueType::Uri,
            _ => AriaValueType::Other,
        }
    }

    /// Returns the taxonomy tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaValueType::TrueFalse => "true/false",
            AriaValueType::Tristate => "tristate",
            AriaValueType::TrueFalseUndefined => "true/false/undefined",
            AriaValueType::IdReference => "ID reference",
            AriaValueType::IdReferenceList => "ID reference list",
            AriaValueType::Integer => "integer",
            AriaValueType::Number => "number",
            AriaValueType::String => "string",
            AriaValueType::Token => "token",
            AriaValueType::TokenList => "token list",
            AriaValueType::Uri => "URI",
            AriaValueType::Other => "other",
        }
    }
}

/// A WAI-ARIA state or property (`aria-*` attribute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaProperty {
    /// `aria-*` name.
    pub name: String,
    /// Property or state.
    #[serde(rename = "type")]
    pub kind: AriaPropertyKind,
    /// Deprecated in this version.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Applies to all roles.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_global: bool,
    /// Base value type.
    pub value: AriaValueType,
    /// Role-dependent value types, first match wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditional_value: Vec<ConditionalValue>,
    /// Legal tokens for `token` and `token list` values.
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<String>,
    /// Value assumed when the attribute is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// HTML attributes with the same semantics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equivalent_html_attrs: Vec<EquivalentHtmlAttr>,
    /// Per-token descriptions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub value_descriptions: BTreeMap<String, String>,
}

/// Value type override for a set of roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalValue {
    /// Roles the override applies to.
    pub role: Vec<String>,
    /// Value type used for those roles.
    pub value: AriaValueType,
}

/// HTML attribute equivalent to an ARIA attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquivalentHtmlAttr {
    /// HTML attribute name.
    pub html_attr_name: String,
    /// Semantics differ in edge cases.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_not_strict_equivalent: bool,
    /// ARIA value implied by the HTML attribute, `None` for "any".
    #[serde(default)]
    pub value: Option<String>,
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_absent_fields() {
        let mut base = Attribute::new("a").typed("String");
        base.merge_from(&Attribute::new("a").deprecated());
        assert_eq!(base.type_tags(), ["String".to_owned()]);
        assert!(base.is_deprecated());
    }

    #[test]
    fn merge_overwrites_present_fields() {
        let mut base = Attribute::new("a").typed("String").when(AttrCondition::self_matches("x"));
        base.merge_from(&Attribute::new("a").typed("URL"));
        assert_eq!(base.type_tags(), ["URL".to_owned()]);
        assert!(base.condition.is_some());
    }

    #[test]
    fn selector_list_joins_alternatives() {
        let list = SelectorList::Many(vec!["[type=submit]".into(), "[type=image]".into()]);
        assert_eq!(list.to_selector(), "[type=submit],[type=image]");
    }

    #[test]
    fn namespace_from_prefix() {
        assert_eq!(ElementSpec::new("svg:circle").namespace, Some(NamespaceUri::Svg));
        assert_eq!(ElementSpec::new("div").namespace, None);
    }

    #[test]
    fn permitted_roles_serde_shape() {
        let any: PermittedRoles = serde_json::from_str("true").unwrap_or(PermittedRoles::NoRole);
        assert_eq!(any, PermittedRoles::AnyRole);
        let none: PermittedRoles = serde_json::from_str("false").unwrap_or(PermittedRoles::AnyRole);
        assert_eq!(none, PermittedRoles::NoRole);
        let list: PermittedRoles =
            serde_json::from_str(r#"["button","link"]"#).unwrap_or(PermittedRoles::NoRole);
        assert_eq!(list, PermittedRoles::list(&["button", "link"]));
        assert_eq!(serde_json::to_string(&PermittedRoles::AnyRole).ok().as_deref(), Some("true"));
    }

    #[test]
    fn implicit_role_false_is_absent() {
        let parsed: ImplicitRole =
            serde_json::from_str(r#"{"role": false}"#).unwrap_or_else(|_| ImplicitRole::of("x"));
        assert_eq!(parsed.role, None);
        let named: ImplicitRole =
            serde_json::from_str(r#"{"role": "link"}"#).unwrap_or_default();
        assert_eq!(named.role.as_deref(), Some("link"));
    }

    #[test]
    fn unknown_value_type_tag_is_other() {
        let parsed: AriaValueType =
            serde_json::from_str(r#""color""#).unwrap_or(AriaValueType::Token);
        assert_eq!(parsed, AriaValueType::Other);
        assert_eq!(AriaValueType::from_tag("token list"), AriaValueType::TokenList);
    }

    #[test]
    fn condition_serializes_self_key() {
        let json = serde_json::to_value(AttrCondition::self_matches("[type=submit]"))
            .unwrap_or_default();
        assert_eq!(json["self"], "[type=submit]");
    }
}
