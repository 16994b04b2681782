//! Stateless entry points.
//!
//! Each function starts a fresh [`SelectorBuilder`] and applies one part.
//!
//! ```rust
//! use cssb::facade;
//!
//! let selector = facade::id("main").unwrap().class("container").unwrap();
//! assert_eq!(selector.stringify(), "#main.container");
//! ```

use crate::builder::SelectorBuilder;
use crate::combined::{CombinedSelector, Stringify};
use crate::error::Result;

pub fn element(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().element(value)
}

pub fn id(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().id(value)
}

pub fn class(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().class(value)
}

pub fn attr(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().attr(value)
}

pub fn pseudo_class(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_class(value)
}

pub fn pseudo_element(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Same as `a.combine(b, combinator)`.
pub fn combine<A, B>(a: &A, combinator: impl AsRef<str>, b: &B) -> CombinedSelector
where
    A: Stringify + ?Sized,
    B: Stringify + ?Sized,
{
    CombinedSelector::new(&a.stringify(), combinator.as_ref(), &b.stringify())
}
