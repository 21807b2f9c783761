//! Configuration errors raised while building a [`Repository`](crate::Repository).

use crate::model::AriaVersion;

/// A data-integrity defect in the specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// Two element specs share a qualified name.
    #[error("duplicate element spec `{name}`")]
    DuplicateElement {
        /// Qualified element name.
        name: String,
    },
    /// Two roles of one ARIA version share a name.
    #[error("duplicate WAI-ARIA {version} role `{name}`")]
    DuplicateRole {
        /// ARIA version.
        version: AriaVersion,
        /// Role name.
        name: String,
    },
    /// The role generalization graph is not acyclic.
    #[error("cyclic WAI-ARIA {version} role generalization: {}", cycle.join(" -> "))]
    CyclicGeneralization {
        /// ARIA version.
        version: AriaVersion,
        /// Roles along the cycle; the first role is repeated at the end.
        cycle: Vec<String>,
    },
}
