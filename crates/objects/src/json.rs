//! JSON encode/decode helpers.
//!
//! Decoding targets a concrete type, so the decoded value comes back with
//! that type's methods available.
//!
//! ```rust
//! use objects::{Rectangle, from_json};
//!
//! let r: Rectangle = from_json(r#"{"width":10,"height":20}"#).unwrap();
//! assert_eq!(r.area(), 200.0);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Compact JSON text for `value`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parses `json` into a `T`. Fields `T` does not know about are ignored.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
