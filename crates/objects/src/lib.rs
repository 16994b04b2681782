//! Small value helpers used alongside the selector builder: a [`Rectangle`]
//! with an area computation and JSON encode/decode functions.

pub mod error;
pub mod json;
pub mod rectangle;

pub use error::{ObjectError, Result};
pub use json::{from_json, to_json};
pub use rectangle::Rectangle;
