//! The selector builder.
//!
//! [`SelectorBuilder`] is persistent: every part operation borrows the
//! receiver and returns a new builder, so a saved intermediate can be
//! extended along several branches without one branch affecting another.
//!
//! ```rust
//! use cssb::facade;
//!
//! let base = facade::element("div").unwrap();
//! let a = base.class("left").unwrap();
//! let b = base.id("right").unwrap();
//!
//! assert_eq!(base.stringify(), "div");
//! assert_eq!(a.stringify(), "div.left");
//! assert_eq!(b.stringify(), "div#right");
//! ```

use std::fmt;

use crate::combined::{CombinedSelector, Stringify};
use crate::error::{Result, SelectorError};
use crate::part::{PartKind, PartKinds, SelectorToken};
use crate::policy::SelectorPolicy;

/// Accumulated tokens plus the set of kinds already present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SelectorState {
    tokens: Vec<SelectorToken>,
    seen: PartKinds,
}

impl SelectorState {
    fn last_kind(&self) -> Option<PartKind> {
        self.tokens.last().map(SelectorToken::kind)
    }

    fn count(&self, kind: PartKind) -> usize {
        self.tokens.iter().filter(|t| t.kind() == kind).count()
    }

    /// Occurrence check first, then order check.
    fn check(&self, kind: PartKind, policy: &SelectorPolicy) -> Result<()> {
        if policy.is_unique(kind) && self.seen.contains(kind.flag()) {
            return Err(SelectorError::DuplicateUniquePart { kind });
        }

        if let Some(after) = self.last_kind() {
            if kind.slot() < after.slot() {
                return Err(SelectorError::OutOfOrder { kind, after });
            }
        }

        Ok(())
    }

    fn appended(&self, token: SelectorToken) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend(self.tokens.iter().cloned());
        let seen = self.seen | token.kind().flag();
        tokens.push(token);
        Self { tokens, seen }
    }
}

/// Builds a single compound selector such as `a#nav.item[href]:hover::after`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    state: SelectorState,
    policy: SelectorPolicy,
}

impl SelectorBuilder {
    /// An empty builder using the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty builder using `policy`.
    pub fn with_policy(policy: SelectorPolicy) -> Self {
        Self {
            state: SelectorState::default(),
            policy,
        }
    }

    pub fn element(&self, value: &str) -> Result<Self> {
        self.push(PartKind::Element, value)
    }

    pub fn id(&self, value: &str) -> Result<Self> {
        self.push(PartKind::Id, value)
    }

    pub fn class(&self, value: &str) -> Result<Self> {
        self.push(PartKind::Class, value)
    }

    pub fn attr(&self, value: &str) -> Result<Self> {
        self.push(PartKind::Attribute, value)
    }

    pub fn pseudo_class(&self, value: &str) -> Result<Self> {
        self.push(PartKind::PseudoClass, value)
    }

    pub fn pseudo_element(&self, value: &str) -> Result<Self> {
        self.push(PartKind::PseudoElement, value)
    }

    /// Validates and appends a part of the given kind.
    ///
    /// On error `self` is untouched and the returned error names the
    /// violated rule.
    pub fn push(&self, kind: PartKind, value: &str) -> Result<Self> {
        if let Err(err) = self.state.check(kind, &self.policy) {
            log::debug!(
                "rejected {} {:?} after {:?}: {}",
                kind,
                value,
                self.stringify(),
                err
            );
            return Err(err);
        }

        let token = SelectorToken::new(kind, value);
        log::trace!("append {} token {:?}", kind, token.text());

        Ok(Self {
            state: self.state.appended(token),
            policy: self.policy,
        })
    }

    /// Concatenates all token texts in insertion order.
    pub fn stringify(&self) -> String {
        self.state.tokens.iter().map(SelectorToken::text).collect()
    }

    /// Joins this selector and `other` with `combinator`.
    pub fn combine<S>(&self, other: &S, combinator: impl AsRef<str>) -> CombinedSelector
    where
        S: Stringify + ?Sized,
    {
        CombinedSelector::new(&self.stringify(), combinator.as_ref(), &other.stringify())
    }

    pub fn tokens(&self) -> &[SelectorToken] {
        &self.state.tokens
    }

    /// Kind of the most recently appended part.
    pub fn last_kind(&self) -> Option<PartKind> {
        self.state.last_kind()
    }

    /// Number of parts of `kind` appended so far.
    pub fn count(&self, kind: PartKind) -> usize {
        self.state.count(kind)
    }

    pub fn policy(&self) -> &SelectorPolicy {
        &self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.state.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.tokens.len()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.state.tokens {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}
