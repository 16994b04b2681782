//! Selector part kinds and the rendered tokens they produce.
//!
//! A compound selector is made of parts that must appear in the canonical
//! order `element#id.class[attribute]:pseudo-class::pseudo-element`. The
//! derived ordering on [`PartKind`] is that order.

use std::fmt;

use bitflags::bitflags;

/// The category of a single selector part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl PartKind {
    /// All kinds in canonical order.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// One-based position in the canonical order.
    pub fn slot(self) -> u8 {
        match self {
            PartKind::Element => 1,
            PartKind::Id => 2,
            PartKind::Class => 3,
            PartKind::Attribute => 4,
            PartKind::PseudoClass => 5,
            PartKind::PseudoElement => 6,
        }
    }

    /// Punctuation written before the payload.
    pub fn prefix(self) -> &'static str {
        match self {
            PartKind::Element => "",
            PartKind::Id => "#",
            PartKind::Class => ".",
            PartKind::Attribute => "[",
            PartKind::PseudoClass => ":",
            PartKind::PseudoElement => "::",
        }
    }

    /// Punctuation written after the payload.
    pub fn suffix(self) -> &'static str {
        match self {
            PartKind::Attribute => "]",
            _ => "",
        }
    }

    /// Renders `value` with this kind's punctuation. The payload is inserted
    /// verbatim.
    pub fn render(self, value: &str) -> String {
        let prefix = self.prefix();
        let suffix = self.suffix();
        let mut text = String::with_capacity(prefix.len() + value.len() + suffix.len());
        text.push_str(prefix);
        text.push_str(value);
        text.push_str(suffix);
        text
    }

    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        }
    }

    /// The single-bit set containing only this kind.
    pub fn flag(self) -> PartKinds {
        match self {
            PartKind::Element => PartKinds::ELEMENT,
            PartKind::Id => PartKinds::ID,
            PartKind::Class => PartKinds::CLASS,
            PartKind::Attribute => PartKinds::ATTRIBUTE,
            PartKind::PseudoClass => PartKinds::PSEUDO_CLASS,
            PartKind::PseudoElement => PartKinds::PSEUDO_ELEMENT,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of part kinds.
    ///
    /// Used both to record which kinds a selector already contains and to
    /// describe which kinds may occur at most once.
    ///
    /// # Example
    ///
    /// ```
    /// use cssb::part::{PartKind, PartKinds};
    ///
    /// let unique = PartKinds::ELEMENT | PartKinds::ID | PartKinds::PSEUDO_ELEMENT;
    /// assert!(unique.contains(PartKind::Id.flag()));
    /// assert!(!unique.contains(PartKind::Class.flag()));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct PartKinds: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

/// A rendered selector fragment together with the kind that produced it.
///
/// Tokens carry their own punctuation, so a selector serializes by plain
/// concatenation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorToken {
    kind: PartKind,
    text: String,
}

impl SelectorToken {
    pub fn new(kind: PartKind, value: &str) -> Self {
        Self {
            kind,
            text: kind.render(value),
        }
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SelectorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
