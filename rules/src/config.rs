//! Resolution settings.

use ml_spec::AriaVersion;
use serde::{Deserialize, Serialize};

/// Settings shared by every resolution call of a [`crate::Semantics`].
///
/// Deserializes from the rule-engine configuration; absent keys take their
/// defaults.
///
/// ```
/// let config: ml_rules::SemanticsConfig = serde_json::from_str(r#"{"ariaVersion":"1.1"}"#).unwrap();
/// assert_eq!(config.aria_version, ml_spec::AriaVersion::V1_1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemanticsConfig {
    /// WAI-ARIA version used for role and property lookups.
    pub aria_version: AriaVersion,
}

impl SemanticsConfig {
    /// Settings targeting `version`.
    #[must_use]
    pub fn with_aria_version(version: AriaVersion) -> Self {
        Self { aria_version: version }
    }
}
