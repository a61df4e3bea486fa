//! Capability injection for parsed data.
//!
//! A [`Prototype`] names the record type its operations work on. Parsing
//! produces a plain record, and [`Object`] pairs it with the prototype value
//! the caller picked, so the same JSON can be read through different sets of
//! operations.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::json::{ObjectError, to_json};

/// A set of operations over a plain data record.
pub trait Prototype {
    /// The record parsed from JSON.
    type Data: DeserializeOwned;
}

/// A parsed record together with the prototype that supplies its operations.
///
/// Fields of the record are reachable directly through `Deref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Object<P: Prototype> {
    proto: P,
    data: P::Data,
}

impl<P: Prototype> Object<P> {
    /// Pair `data` with `proto`.
    pub const fn new(proto: P, data: P::Data) -> Self {
        Self { proto, data }
    }

    /// The capability set.
    pub const fn proto(&self) -> &P {
        &self.proto
    }

    /// The parsed record.
    pub const fn data(&self) -> &P::Data {
        &self.data
    }

    /// Split back into prototype and record.
    pub fn into_parts(self) -> (P, P::Data) {
        (self.proto, self.data)
    }

    /// Run one of the prototype's operations against the record.
    ///
    /// ```
    /// use wombat_object::{Prototype, from_json};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Greeting { name: String }
    ///
    /// struct Greeter { punctuation: char }
    ///
    /// impl Prototype for Greeter {
    ///     type Data = Greeting;
    /// }
    ///
    /// impl Greeter {
    ///     fn greet(&self, g: &Greeting) -> String {
    ///         format!("Hello, {}{}", g.name, self.punctuation)
    ///     }
    /// }
    ///
    /// let obj = from_json(Greeter { punctuation: '!' }, r#"{"name":"Ada"}"#).unwrap();
    /// assert_eq!(obj.call(Greeter::greet), "Hello, Ada!");
    /// ```
    pub fn call<R>(&self, op: impl FnOnce(&P, &P::Data) -> R) -> R {
        op(&self.proto, &self.data)
    }
}

impl<P: Prototype> Object<P>
where
    P::Data: Serialize,
{
    /// Serialize the record. The prototype carries behavior, not data, and is
    /// left out.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Serialize`] if the record cannot be represented
    /// as JSON.
    pub fn to_json(&self) -> Result<String, ObjectError> {
        to_json(&self.data)
    }
}

impl<P: Prototype> Deref for Object<P> {
    type Target = P::Data;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<P: Prototype> DerefMut for Object<P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// A prototype with no operations: parses straight into `T`.
///
/// `Plain::<serde_json::Value>::new()` accepts any well-formed JSON.
pub struct Plain<T>(PhantomData<fn() -> T>);

impl<T> Plain<T> {
    /// Create the prototype.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: DeserializeOwned> Prototype for Plain<T> {
    type Data = T;
}

impl<T> Default for Plain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Plain<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Plain<T> {}

impl<T> PartialEq for Plain<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plain<{}>", std::any::type_name::<T>())
    }
}
