//! Error types for selector construction.
//!
//! Every violation aborts the single offending call. The builder that was
//! called stays valid and can still be inspected or extended.

use thiserror::Error;

use crate::part::PartKind;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use cssb::{SelectorError, facade};
///
/// let err = facade::element("div").unwrap().element("span").unwrap_err();
/// assert!(matches!(err, SelectorError::DuplicateUniquePart { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A part limited to a single occurrence was appended a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector (duplicate {kind})"
    )]
    DuplicateUniquePart { kind: PartKind },

    /// A part was appended whose canonical slot precedes the last part's slot.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} cannot follow {after})"
    )]
    OutOfOrder { kind: PartKind, after: PartKind },

    /// Combinator text that is not one of ` `, `>`, `+`, `~`.
    #[error("unknown combinator: {0:?}")]
    UnknownCombinator(String),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
