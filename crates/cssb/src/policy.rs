//! Validation policy for selector builders.

use crate::part::{PartKind, PartKinds};

/// Which part kinds may occur at most once in a single selector.
///
/// The default limits element, id and pseudo-element. Ordering is always
/// enforced regardless of policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorPolicy {
    unique: PartKinds,
}

impl Default for SelectorPolicy {
    fn default() -> Self {
        Self {
            unique: PartKinds::ELEMENT | PartKinds::ID | PartKinds::PSEUDO_ELEMENT,
        }
    }
}

impl SelectorPolicy {
    /// The default policy with attributes also limited to one occurrence.
    pub fn strict_attributes() -> Self {
        Self::default().with_unique(PartKinds::ATTRIBUTE)
    }

    /// Adds `kinds` to the set of single-occurrence kinds.
    pub fn with_unique(mut self, kinds: PartKinds) -> Self {
        self.unique |= kinds;
        self
    }

    pub fn unique(&self) -> PartKinds {
        self.unique
    }

    pub fn is_unique(&self, kind: PartKind) -> bool {
        self.unique.contains(kind.flag())
    }
}
