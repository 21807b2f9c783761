//! JSON serializer for the specification repository.
//!
//! Produces the `{cites, def, specs}` document shape the spec loader
//! consumes, so a repository can be dumped, patched, and loaded again.

use serde_json::Value;

use crate::Repository;

/// Serializes the repository to a JSON `Value`.
///
/// # Errors
///
/// Returns an error if a value cannot be represented as JSON. The built-in
/// model has no such values.
pub fn to_json(repository: &Repository) -> Result<Value, serde_json::Error> {
    serde_json::to_value(repository.data())
}

/// Serializes the repository to a pretty-printed JSON string.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_string(repository: &Repository) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(repository.data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MlSpec;

    #[test]
    fn document_keys() {
        let json = to_json(Repository::html()).unwrap_or_default();
        assert!(json["def"]["#globalAttrs"]["#HTMLGlobalAttrs"].is_array());
        assert!(json["def"]["#aria"]["1.2"]["roles"].is_array());
        assert!(json["specs"].is_array());
    }

    #[test]
    fn reload_preserves_document() {
        let original = Repository::html();
        let text = to_json_string(original).unwrap_or_default();
        let parsed: Option<MlSpec> = serde_json::from_str(&text).ok();
        let reloaded = parsed.and_then(|data| Repository::new(data).ok());
        assert_eq!(reloaded.as_ref().map(Repository::data), Some(original.data()));
    }
}
