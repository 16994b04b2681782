//! CSS selector builder plus the small object helpers that travel with it.
//!
//! ```rust
//! use selector_kit::{Combinator, facade};
//!
//! let row = facade::element("tr")?.pseudo_class("nth-of-type(even)")?;
//! let cell = facade::element("td")?.pseudo_class("nth-of-type(even)")?;
//! let table = facade::element("table")?.id("data")?;
//!
//! let selector = facade::combine(&table, Combinator::GeneralSibling, &facade::combine(&row, " ", &cell));
//! assert_eq!(
//!     selector.to_string(),
//!     "table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
//! );
//! # Ok::<(), selector_kit::KitError>(())
//! ```

pub mod error;
mod log_init;

pub use cssb::{
    CombinedSelector, Combinator, PartKind, SelectorBuilder, SelectorError, SelectorPolicy,
    Stringify, facade,
};
pub use error::{KitError, Result};
pub use log_init::init_logger;
pub use objects::{Rectangle, from_json, to_json};

// Re-export the log crate so users can use selector_kit::log::info!, etc.
pub use log;
