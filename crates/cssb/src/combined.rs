//! Selectors joined by a combinator.

use std::fmt;

use crate::builder::SelectorBuilder;

/// Anything that serializes to selector text.
pub trait Stringify {
    fn stringify(&self) -> String;

    /// Joins `self` and `other` as `"{self} {combinator} {other}"`.
    fn combine<S>(&self, other: &S, combinator: impl AsRef<str>) -> CombinedSelector
    where
        S: Stringify + ?Sized,
        Self: Sized,
    {
        CombinedSelector::new(&self.stringify(), combinator.as_ref(), &other.stringify())
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> String {
        SelectorBuilder::stringify(self)
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

/// An already-serialized complex selector.
///
/// The result of a combine takes no further parts; it can only be
/// stringified or combined again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    /// The combinator is inserted verbatim with one space on each side.
    pub fn new(left: &str, combinator: &str, right: &str) -> Self {
        Self {
            text: format!("{left} {combinator} {right}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    pub fn combine<S>(&self, other: &S, combinator: impl AsRef<str>) -> CombinedSelector
    where
        S: Stringify + ?Sized,
    {
        CombinedSelector::new(&self.text, combinator.as_ref(), &other.stringify())
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
