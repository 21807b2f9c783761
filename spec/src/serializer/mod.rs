//! Serializers for the specification repository.
//!
//! - **JSON** ([`json`]): the document shape `Repository::new` loads

pub mod json;
