//! # CSSB - CSS Selector Builder
//!
//! Assembles CSS selector strings from typed fragments while enforcing the
//! ordering and cardinality rules of a compound selector:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may occur several times
//! ```
//!
//! Element, id and pseudo-element may appear at most once. Parts must be
//! appended in the order shown above; repeating a kind is allowed.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssb::{Combinator, facade};
//!
//! let link = facade::element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let sibling = facade::combine(
//!     &facade::element("div")?.id("main")?,
//!     Combinator::AdjacentSibling,
//!     &facade::element("table")?.id("data")?,
//! );
//! assert_eq!(sibling.stringify(), "div#main + table#data");
//! # Ok::<(), cssb::SelectorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: the persistent [`SelectorBuilder`]
//! - [`combined`]: [`CombinedSelector`] and the [`Stringify`] trait
//! - [`combinator`]: the four CSS combinators
//! - [`facade`]: free functions that start a new builder
//! - [`part`]: part kinds and rendered tokens
//! - [`policy`]: which kinds are limited to one occurrence
//! - [`error`]: validation errors

pub mod builder;
pub mod combinator;
pub mod combined;
pub mod error;
pub mod facade;
pub mod part;
pub mod policy;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use combined::{CombinedSelector, Stringify};
pub use error::{Result, SelectorError};
pub use part::{PartKind, PartKinds, SelectorToken};
pub use policy::SelectorPolicy;
