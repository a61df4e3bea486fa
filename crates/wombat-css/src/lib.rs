//! CSS selector building for the Wombat crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fragment ordering and uniqueness checks
//!   - Combinator composition (descendant, child, next-sibling, subsequent-sibling)
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Escaping or validating fragment values
//! - Specificity
//! - Matching against a document

/// Fluent CSS selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{Combinator, FragmentKind, SelectorBuilder, SelectorError};
