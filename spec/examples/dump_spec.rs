//! Loads the built-in markup spec and prints an inventory.
//!
//! Run with: `cargo run --example dump_spec -p mlint-spec`

use ml_spec::{AriaVersion, Repository};

fn main() {
    let repository = Repository::html();
    let defs = repository.defs();

    println!("mlint markup spec");
    println!("  Elements:          {}", repository.specs().len());
    println!("  Attribute groups:  {}", defs.global_attrs.len());
    println!("  Content models:    {}", defs.content_models.len());
    for version in [AriaVersion::V1_1, AriaVersion::V1_2] {
        let aria = repository.aria(version);
        println!(
            "  ARIA {version}:          {} roles, {} graphics roles, {} states/properties",
            aria.roles.len(),
            aria.graphics_roles.len(),
            aria.props.len(),
        );
    }
    println!();

    for spec in repository.specs() {
        let implicit = spec
            .implicit_role
            .as_ref()
            .and_then(|implicit| implicit.role.as_deref())
            .unwrap_or("-");
        println!(
            "  {:14} {:>2} attribute entries  implicit role: {implicit}",
            spec.name,
            spec.attributes.len(),
        );
    }
    println!();

    let json = ml_spec::serializer::json::to_json_string(repository)
        .unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON output ({} bytes):", json.len());
    let preview_end = json.char_indices().nth(200).map_or(json.len(), |(i, _)| i);
    println!("{}...", &json[..preview_end]);
}
