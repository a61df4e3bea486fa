//! JSON round-trips.
//!
//! Serialization is delegated to `serde_json`. Struct fields come out in
//! declaration order and dynamic maps keep insertion order.

use serde::Serialize;
use thiserror::Error;

use crate::prototype::{Object, Prototype};

/// Errors raised by [`to_json`] and [`from_json`].
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The input text was not well-formed JSON for the prototype's record.
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The value has no JSON representation (e.g. a map with non-string keys).
    #[error("failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Serialize `value` as compact JSON.
///
/// ```
/// assert_eq!(wombat_object::to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns [`ObjectError::Serialize`] if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Serialize)
}

/// Parse `text` into the prototype's record and attach the prototype.
///
/// ```
/// use wombat_object::{Circle, from_json};
///
/// let circle = from_json(Circle, r#"{"radius":10}"#).unwrap();
/// assert_eq!(circle.radius, 10.0);
/// assert_eq!(circle.diameter(), 20.0);
/// ```
///
/// # Errors
///
/// Returns [`ObjectError::Parse`] if `text` is not valid JSON or does not
/// match `P::Data`.
pub fn from_json<P: Prototype>(proto: P, text: &str) -> Result<Object<P>, ObjectError> {
    let data = serde_json::from_str(text).map_err(ObjectError::Parse)?;
    Ok(Object::new(proto, data))
}
