//! Object utilities for the Wombat crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Shapes** - [`Rectangle`] with `area()`, and the [`Circle`] capability set
//! - **JSON** - [`to_json`] and [`from_json`]
//! - **Prototypes** - parsed data composed with a caller-selected set of
//!   operations ([`Prototype`], [`Object`])

/// Prototype-based JSON serialization and parsing.
pub mod json;
/// Parsed data paired with a capability set.
pub mod prototype;
/// Rectangle and circle shapes.
pub mod shape;

// Re-exports for convenience
pub use json::{ObjectError, from_json, to_json};
pub use prototype::{Object, Plain, Prototype};
pub use shape::{Circle, CircleData, Rectangle};
